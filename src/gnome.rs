use std::cmp::Ordering;
use log::{debug, trace};
use crate::exchange::is_out_of_order;

/// Sorts `v` ascending in place by walking a single cursor forward over ordered pairs and
/// backward while carrying an out-of-order element to its slot.
///
/// O(n) comparisons on sorted input, O(n²) on reverse-sorted input.
pub fn gnome_sort<T: Ord>(v: &mut [T]) {
    gnome_sort_by(v, T::cmp);
}

pub fn gnome_sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    gnome_sort_by(v, |a, b| f(a).cmp(&f(b)));
}

pub fn gnome_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    trace!("gnome sort: {} elements", len);

    let mut exchanges: usize = 0;
    let mut pos = 0;
    while pos < len {
        if pos == 0 || !is_out_of_order(&mut compare, &v[pos - 1], &v[pos]) {
            pos += 1;
        } else {
            v.swap(pos, pos - 1);
            exchanges += 1;
            pos -= 1;
        }
    }

    debug!("gnome sort: {} elements, {} exchanges", len, exchanges);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let mut v: Vec<i32> = vec![];
        gnome_sort(&mut v);
        assert!(v.is_empty());
    }

    #[test]
    fn single_element() {
        let mut v = vec![5];
        gnome_sort(&mut v);
        assert_eq!(v, [5]);
    }

    #[test]
    fn already_sorted() {
        let mut v = vec![1, 2, 3, 4, 5];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_sorted() {
        let mut v = vec![5, 4, 3, 2, 1];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn duplicates() {
        let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
    }

    #[test]
    fn all_same() {
        let mut v = vec![5; 5];
        gnome_sort(&mut v);
        assert_eq!(v, [5, 5, 5, 5, 5]);
    }

    #[test]
    fn two_elements() {
        let mut v = vec![2, 1];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 2]);

        let mut v = vec![1, 2];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn cursor_steps_back_to_start() {
        // 1 has to travel from the end back to index 0.
        let mut v = vec![3, 2, 1];
        let mut comparisons = 0;
        gnome_sort_by(&mut v, |a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        assert_eq!(v, [1, 2, 3]);
        // 3 exchanging comparisons + 3 that advance. Steps at pos == 0 compare nothing.
        assert_eq!(comparisons, 6);
    }

    #[test]
    fn alternating_values() {
        let mut v = vec![5, 1, 4, 2, 3];
        gnome_sort(&mut v);
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn random_order() {
        let mut v = vec![64, 34, 25, 12, 22, 11, 90];
        gnome_sort(&mut v);
        assert_eq!(v, [11, 12, 22, 25, 34, 64, 90]);
    }

    #[test]
    fn negative_numbers() {
        let mut v = vec![-5, 3, -1, 0, -3, 2];
        gnome_sort(&mut v);
        assert_eq!(v, [-5, -3, -1, 0, 2, 3]);
    }

    #[test]
    fn strings() {
        let mut v = vec!["zebra", "apple", "mango", "banana"];
        gnome_sort(&mut v);
        assert_eq!(v, ["apple", "banana", "mango", "zebra"]);
    }

    #[test]
    fn floats_total_order() {
        let mut v = vec![3.14, 1.41, 2.71, 0.57, 4.67];
        gnome_sort_by(&mut v, f64::total_cmp);
        assert_eq!(v, [0.57, 1.41, 2.71, 3.14, 4.67]);
    }

    #[test]
    fn by_key_descending() {
        let mut v = vec![(1, 'a'), (3, 'b'), (2, 'c')];
        gnome_sort_by_key(&mut v, |&(n, _)| std::cmp::Reverse(n));
        assert_eq!(v, [(3, 'b'), (2, 'c'), (1, 'a')]);
    }
}
