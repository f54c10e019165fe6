/// Reinterprets the input as little endian `i32` values, ignoring trailing bytes that don't fill a
/// whole value.
pub fn u8_as_i32(data: &[u8]) -> Vec<i32> {
    data.chunks_exact(4)
        .map(|chunk| i32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Sorts a copy of `v` with `sort_fn` and compares the result against the standard library.
pub fn check_sort<T: Ord + Clone + std::fmt::Debug>(name: &str, v: &[T], sort_fn: fn(&mut [T])) {
    let mut expected = v.to_vec();
    expected.sort();

    let mut actual = v.to_vec();
    sort_fn(&mut actual);

    assert_eq!(actual, expected, "{name} produced a wrong result for input: {v:?}");
}
