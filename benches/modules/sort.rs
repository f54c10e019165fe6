use std::env;

use criterion::{black_box, Criterion};

use sort_test_tools::Sort;

use classic_sort::{stable, unstable};

use crate::modules::{baselines, util};

// Bubble sort on a million elements would not finish in a reasonable time.
const QUADRATIC_MAX_LEN: usize = 10_000;

fn measure_comp_count<S: Sort, T: Ord + std::fmt::Debug>(
    name: &str,
    test_len: usize,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    // Measure how many comparisons are performed by a specific implementation and input
    // combination.
    let run_count: usize = if test_len <= 20 {
        100_000
    } else if test_len < 10_000 {
        3000
    } else if test_len < 100_000 {
        1000
    } else if test_len < 1_000_000 {
        100
    } else {
        10
    };

    // Quadratic sorts need far fewer runs to get a stable mean.
    let run_count = if S::is_quadratic() {
        (run_count / 100).max(1)
    } else {
        run_count
    };

    let mut comp_count = 0u64;

    // Instrument via sort_by to ensure the type properties such as Copy of the type
    // that is being sorted doesn't change. And we get representative numbers.
    for _ in 0..run_count {
        let mut test_data = transform(pattern_provider(test_len));
        S::sort_by(black_box(test_data.as_mut_slice()), |a, b| {
            comp_count += 1;
            a.cmp(b)
        })
    }

    // If there is on average less than a single comparison this will be wrong.
    // But that's such a corner case I don't care about it.
    let total = comp_count / (run_count as u64);
    println!("{name}: mean comparisons: {total}");
}

pub fn bench_fn<S: Sort, T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: impl Fn(usize) -> Vec<i32>,
) {
    if S::is_quadratic() && test_len > QUADRATIC_MAX_LEN {
        return;
    }

    let bench_name = S::name();

    if env::var("MEASURE_COMP").is_ok() {
        let name = format!(
            "{}-comp-{}-{}-{}",
            bench_name, transform_name, pattern_name, test_len
        );

        if util::should_run_benchmark(&name) {
            measure_comp_count::<S, T>(&name, test_len, transform, pattern_provider);
        }
    } else {
        util::bench_fn(
            c,
            test_len,
            transform_name,
            transform,
            pattern_name,
            pattern_provider,
            &bench_name,
            S::sort,
        );
    }
}

pub fn bench<T: Ord + std::fmt::Debug>(
    c: &mut Criterion,
    test_len: usize,
    transform_name: &str,
    transform: &fn(Vec<i32>) -> Vec<T>,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    macro_rules! bench_inst {
        ($sort_impl:ty) => {{
            bench_fn::<$sort_impl, T>(
                c,
                test_len,
                transform_name,
                transform,
                pattern_name,
                pattern_provider,
            );
        }};
    }

    // --- Baselines ---

    bench_inst!(baselines::StdStable);
    bench_inst!(baselines::StdUnstable);

    #[cfg(feature = "rust_dmsort")]
    bench_inst!(baselines::DmSort);

    // --- Stable sorts ---

    bench_inst!(stable::bubble::SortImpl);
    bench_inst!(stable::insertion::SortImpl);
    bench_inst!(stable::cocktail::SortImpl);
    bench_inst!(stable::merge::SortImpl);

    // --- Unstable sorts ---

    bench_inst!(unstable::selection::SortImpl);
    bench_inst!(unstable::comb::SortImpl);
    bench_inst!(unstable::heap::SortImpl);
    bench_inst!(unstable::quick::SortImpl);
}
