use crate::is_zst;

sort_impl!("selection_unstable", quadratic);

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    for i in 0..len - 1 {
        let min = i + min_index(&v[i..], &mut is_less);

        // The swap can jump over elements equal to `v[i]`, which is what makes this unstable.
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Position of the first minimum in a non-empty slice.
fn min_index<T, F>(v: &[T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut min = 0;
    for i in 1..v.len() {
        if is_less(&v[i], &v[min]) {
            min = i;
        }
    }

    min
}
