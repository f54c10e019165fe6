#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sort::radix;
use classic_sort_fuzz::{check_sort, u8_as_i32};

fuzz_target!(|data: &[u8]| {
    check_sort("radix_u8", data, radix::sort);

    let signed_bytes = data.iter().map(|&b| b as i8).collect::<Vec<_>>();
    check_sort("radix_i8", &signed_bytes, radix::sort);

    check_sort("radix_i32", &u8_as_i32(data), radix::sort);
});
