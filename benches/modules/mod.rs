use criterion::Criterion;

pub mod baselines;
pub mod radix;
pub mod sort;

pub fn bench_len_type_pattern_combo<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    sort::bench(
        c,
        test_len,
        transform_name,
        transform,
        pattern_name,
        pattern_provider,
    );
}
