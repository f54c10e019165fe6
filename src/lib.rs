//! Classic in-memory sorting algorithms sharing one calling convention.
//!
//! Every comparison sort lives in its own module and exposes the same three entry points:
//!
//! - `sort(v)` sorts ascending using `Ord`.
//! - `sort_by(v, compare)` takes a three-way comparator, `Ordering::Less` means "must precede".
//! - `sort_by_is_less(v, is_less)` takes the strict weak order predicate directly.
//!
//! All sorts work in place on the given slice, sorting a sub-range is sorting a sub-slice. The
//! `stable` modules keep equal elements in input order, the `unstable` modules make no such
//! promise. [`radix`] is restricted to integers and takes no comparator.
//!
//! If the comparator panics or does not implement a strict weak order, the slice still contains
//! every original element exactly once, in unspecified order.

use std::mem;

macro_rules! sort_impl {
    ($name:expr) => {
        sort_impl!($name, false);
    };
    ($name:expr, quadratic) => {
        sort_impl!($name, true);
    };
    ($name:expr, $is_quadratic:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn is_quadratic() -> bool {
                $is_quadratic
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }

            #[inline]
            fn sort_by_is_less<T, F>(arr: &mut [T], is_less: F)
            where
                F: FnMut(&T, &T) -> bool,
            {
                sort_by_is_less(arr, is_less);
            }
        }

        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord,
        {
            sort_by_is_less(v, |a, b| a.lt(b));
        }

        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
        where
            F: FnMut(&T, &T) -> std::cmp::Ordering,
        {
            sort_by_is_less(v, |a, b| compare(a, b) == std::cmp::Ordering::Less);
        }
    };
}

pub mod radix;
pub mod stable;
pub mod unstable;

pub use sort_test_tools::Sort;

/// Sorting has no meaningful behavior on zero-sized types, every permutation is the same.
#[inline]
pub(crate) fn is_zst<T>() -> bool {
    mem::size_of::<T>() == 0
}
