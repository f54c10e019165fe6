#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::{stable, unstable};
use classic_sort_fuzz::{check_sort, u8_as_i32};

// Longer inputs mostly measure how slow the quadratic sorts are.
const MAX_LEN: usize = 4096;

fn check_all<T: Ord + Clone + std::fmt::Debug>(v: &[T]) {
    check_sort("bubble", v, stable::bubble::sort);
    check_sort("insertion", v, stable::insertion::sort);
    check_sort("cocktail", v, stable::cocktail::sort);
    check_sort("merge", v, stable::merge::sort);
    check_sort("selection", v, unstable::selection::sort);
    check_sort("comb", v, unstable::comb::sort);
    check_sort("heap", v, unstable::heap::sort);
    check_sort("quick", v, unstable::quick::sort);
}

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_LEN {
        return;
    }

    // Bytes give many duplicates, the wider values mostly distinct ones.
    check_all(data);
    check_all(&u8_as_i32(data));
});
