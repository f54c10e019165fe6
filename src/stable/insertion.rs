use crate::is_zst;

sort_impl!("insertion_stable", quadratic);

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    for i in 1..len {
        insert_tail(&mut v[..=i], &mut is_less);
    }
}

/// Shifts the last element of `v` to the left, past every strictly greater predecessor.
/// `v[..v.len() - 1]` must already be sorted.
fn insert_tail<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut i = v.len() - 1;
    while i > 0 && is_less(&v[i], &v[i - 1]) {
        v.swap(i, i - 1);
        i -= 1;
    }
}
