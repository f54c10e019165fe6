//! Bubble sort without the early exit. Every pass scans the whole slice, even if the previous pass
//! did not swap anything, so the number of comparisons only depends on the length.

use crate::is_zst;

sort_impl!("bubble_stable", quadratic);

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    for _ in 1..len {
        for i in 0..len - 1 {
            // Only strictly out-of-order neighbours are swapped, equal ones keep their order.
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
            }
        }
    }
}
