use std::cmp::Ordering;
use std::ptr;

/// `a` belongs after `b` under `compare`. Every exchange or shift decision goes through here.
#[inline(always)]
pub fn is_out_of_order<T, F>(compare: &mut F, a: &T, b: &T) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(a, b) == Ordering::Greater
}

/// Checks the order property: no adjacent pair is out of order.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| !is_out_of_order(&mut compare, &w[0], &w[1]))
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, T::cmp)
}

/// Slot vacated by an element that was read out of the slice.
///
/// On drop the held element is written into `dest`, so the slice is a permutation of its
/// input again whether the shift finished normally or a comparison panicked.
pub(crate) struct Hole<T> {
    pub src: *const T,
    pub dest: *mut T,
}

impl<T> Drop for Hole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points at the held copy and `dest` at the single slot whose value has
        // been moved elsewhere. They never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}
