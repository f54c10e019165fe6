use std::env;

use criterion::{black_box, Criterion};

use crate::modules::util;

// Radix sort takes no comparator, so there are no comparisons to count, and it only accepts
// integer keys. One bench function per key type, generated to keep the names in sync.
macro_rules! bench_radix_types {
    ($($key:ident),*) => {
        paste::paste! {
            $(
                pub fn [<bench_ $key>](
                    c: &mut Criterion,
                    test_len: usize,
                    transform: &fn(Vec<i32>) -> Vec<$key>,
                    pattern_name: &str,
                    pattern_provider: &fn(usize) -> Vec<i32>,
                ) {
                    if env::var("MEASURE_COMP").is_ok() {
                        return;
                    }

                    let transform_name = stringify!($key);

                    util::bench_fn(
                        c,
                        test_len,
                        transform_name,
                        transform,
                        pattern_name,
                        pattern_provider,
                        "radix_stable",
                        |v: &mut [$key]| classic_sort::radix::sort(black_box(v)),
                    );

                    #[cfg(feature = "rust_radsort")]
                    util::bench_fn(
                        c,
                        test_len,
                        transform_name,
                        transform,
                        pattern_name,
                        pattern_provider,
                        "rust_radsort_unstable",
                        |v: &mut [$key]| radsort::sort(black_box(v)),
                    );
                }
            )*
        }
    };
}

bench_radix_types!(i32, u64);
