use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;
use log::{debug, trace};
use crate::config::{is_valid_gap_sequence, CIURA_GAPS};
use crate::exchange::{is_out_of_order, Hole};

/// Sorts `v` ascending in place with gapped insertion sorts over [`CIURA_GAPS`].
///
/// Gaps not smaller than `v.len()` do nothing. The final gap of 1 is a plain insertion sort,
/// so the result is sorted whatever the earlier gaps achieved.
pub fn shell_sort<T: Ord>(v: &mut [T]) {
    shell_sort_with_gaps_by(v, &CIURA_GAPS, T::cmp);
}

pub fn shell_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort_with_gaps_by(v, &CIURA_GAPS, compare);
}

pub fn shell_sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    shell_sort_with_gaps_by(v, &CIURA_GAPS, |a, b| f(a).cmp(&f(b)));
}

/// Same algorithm with a caller-chosen gap sequence.
///
/// # Panics
/// If `gaps` is not strictly decreasing or does not end in 1. Checked before `v` is touched.
pub fn shell_sort_with_gaps_by<T, F>(v: &mut [T], gaps: &[usize], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(
        is_valid_gap_sequence(gaps),
        "gap sequence must be strictly decreasing and end in 1, got {:?}",
        gaps
    );

    let len = v.len();
    trace!("shell sort: {} elements, gaps {:?}", len, gaps);

    let mut applied: usize = 0;
    let mut shifts: usize = 0;
    for &gap in gaps.iter().filter(|&&gap| gap < len) {
        applied += 1;
        for i in gap..len {
            shifts += insert_gapped(v, i, gap, &mut compare);
        }
    }

    debug!("shell sort: {} elements, {} gaps applied, {} shifts", len, applied, shifts);
}

/// Moves `v[i]` back through `v[i - gap], v[i - 2 * gap], ...` until its predecessor no
/// longer exceeds it. Returns how many elements were shifted forward.
fn insert_gapped<T, F>(v: &mut [T], i: usize, gap: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(gap > 0 && i >= gap && i < v.len());

    let base = v.as_mut_ptr();
    let mut shifts = 0;
    // SAFETY: every index touched is `j` or `j - gap` with `gap <= j <= i < v.len()`.
    // Exactly one slot is vacant at any time and `hole` tracks it, so when `hole` drops
    // (normally or while unwinding out of `compare`) the held element fills that slot and
    // no element is duplicated or lost.
    unsafe {
        let held = ManuallyDrop::new(ptr::read(base.add(i)));
        let mut hole = Hole {
            src: &*held,
            dest: base.add(i),
        };

        let mut j = i;
        while j >= gap && is_out_of_order(compare, &*base.add(j - gap), &*held) {
            ptr::copy_nonoverlapping(base.add(j - gap), base.add(j), 1);
            j -= gap;
            hole.dest = base.add(j);
            shifts += 1;
        }
    }
    shifts
}
