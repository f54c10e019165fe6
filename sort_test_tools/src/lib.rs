use std::cmp::Ordering;

/// Uniform calling convention shared by every comparison sort, so the harness and the benchmarks
/// can be written once and instantiated per implementation.
pub trait Sort {
    /// Name used in test output and benchmark ids. Implementations that do not keep equal
    /// elements in input order must contain `unstable` in their name.
    fn name() -> String;

    /// Worst-case quadratic implementations get shorter generated inputs in the test harness.
    fn is_quadratic() -> bool {
        false
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    fn sort_by_is_less<T, F>(arr: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;
}

#[cfg(feature = "harness")]
pub mod patterns;
#[cfg(feature = "harness")]
pub mod types;
