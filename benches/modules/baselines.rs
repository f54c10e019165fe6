//! Reference implementations the classic sorts are measured against.

use std::cmp::Ordering;

use sort_test_tools::Sort;

fn ordering_from_is_less<T, F: FnMut(&T, &T) -> bool>(
    mut is_less: F,
) -> impl FnMut(&T, &T) -> Ordering {
    move |a, b| {
        if is_less(a, b) {
            Ordering::Less
        } else if is_less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

pub struct StdStable;

impl Sort for StdStable {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_by(compare);
    }

    fn sort_by_is_less<T, F: FnMut(&T, &T) -> bool>(arr: &mut [T], is_less: F) {
        arr.sort_by(ordering_from_is_less(is_less));
    }
}

pub struct StdUnstable;

impl Sort for StdUnstable {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        arr.sort_unstable();
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        arr.sort_unstable_by(compare);
    }

    fn sort_by_is_less<T, F: FnMut(&T, &T) -> bool>(arr: &mut [T], is_less: F) {
        arr.sort_unstable_by(ordering_from_is_less(is_less));
    }
}

/// Drop-merge sort, adaptive for mostly sorted input.
#[cfg(feature = "rust_dmsort")]
pub struct DmSort;

#[cfg(feature = "rust_dmsort")]
impl Sort for DmSort {
    fn name() -> String {
        "rust_dmsort_unstable".into()
    }

    fn sort<T: Ord>(arr: &mut [T]) {
        dmsort::sort(arr);
    }

    fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(arr: &mut [T], compare: F) {
        dmsort::sort_by(arr, compare);
    }

    fn sort_by_is_less<T, F: FnMut(&T, &T) -> bool>(arr: &mut [T], is_less: F) {
        dmsort::sort_by(arr, ordering_from_is_less(is_less));
    }
}
