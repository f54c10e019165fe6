//! Cocktail shaker sort, a bidirectional bubble sort.

use crate::is_zst;

sort_impl!("cocktail_stable", quadratic);

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    // Active range is `left..=right`. Each forward pass settles the maximum at `right`, each
    // backward pass settles the minimum at `left`.
    let mut left = 0;
    let mut right = len - 1;

    while left < right {
        for i in left..right {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
            }
        }
        right -= 1;

        for i in ((left + 1)..=right).rev() {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i, i - 1);
            }
        }
        left += 1;
    }
}
