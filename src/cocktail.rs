use std::cmp::Ordering;
use log::{debug, trace};
use crate::exchange::is_out_of_order;

/// Sorts `v` ascending in place with alternating forward and backward bubble passes.
///
/// Stops as soon as a pass makes no exchange. A quiet first forward pass ends the sort
/// without a backward pass, so sorted input costs exactly `n - 1` comparisons.
pub fn cocktail_shaker_sort<T: Ord>(v: &mut [T]) {
    cocktail_shaker_sort_by(v, T::cmp);
}

pub fn cocktail_shaker_sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    cocktail_shaker_sort_by(v, |a, b| f(a).cmp(&f(b)));
}

pub fn cocktail_shaker_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    trace!("cocktail shaker sort: {} elements", len);

    let last = len.saturating_sub(1);
    let mut passes: usize = 0;
    let mut exchanges: usize = 0;
    loop {
        let mut swapped = false;
        passes += 1;
        for i in 0..last {
            if is_out_of_order(&mut compare, &v[i], &v[i + 1]) {
                v.swap(i, i + 1);
                exchanges += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        swapped = false;
        passes += 1;
        for i in (0..last).rev() {
            if is_out_of_order(&mut compare, &v[i], &v[i + 1]) {
                v.swap(i, i + 1);
                exchanges += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    debug!("cocktail shaker sort: {} elements, {} passes, {} exchanges", len, passes, exchanges);
}
