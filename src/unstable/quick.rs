//! Quicksort with median-of-three pivot selection.
//!
//! Sub-ranges waiting to be sorted are kept on an explicit work stack instead of the call stack.
//! The shorter side of every partition is processed first, which bounds the work stack to
//! `log2(len)` entries even for inputs that defeat the pivot selection. Those inputs still take
//! quadratic time.

use std::ops::Range;

use crate::is_zst;

sort_impl!("quick_unstable");

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 || is_zst::<T>() {
        return;
    }

    quicksort(v, &mut is_less);
}

fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut pending: Vec<Range<usize>> = Vec::with_capacity(usize::BITS as usize);
    let mut current = 0..v.len();

    loop {
        if current.len() < 2 {
            match pending.pop() {
                Some(range) => {
                    current = range;
                    continue;
                }
                None => return,
            }
        }

        let offset = current.start;
        let pivot_pos = offset + partition(&mut v[current.clone()], is_less);

        let left = offset..pivot_pos;
        let right = (pivot_pos + 1)..current.end;

        if left.len() <= right.len() {
            pending.push(right);
            current = left;
        } else {
            pending.push(left);
            current = right;
        }
    }
}

/// Moves the median-of-three pivot to its final position and partitions the rest of `v` around
/// it. Returns the pivot position. Everything before it is not greater than the pivot, everything
/// after it is not less.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    let last = len - 1;
    let pivot_pos = len / 2;

    // Afterwards `v[0] <= v[pivot_pos] <= v[last]`. The samples stay ordered, otherwise reverse
    // sorted input degrades to quadratic time.
    sort3(v, 0, pivot_pos, last, is_less);

    // Park the pivot at the end, out of the way of the partition.
    v.swap(pivot_pos, last);
    let (v_without_pivot, pivot) = v.split_at_mut(last);
    let mid = hoare_partition(v_without_pivot, &pivot[0], is_less);

    // Place the pivot between the two partitions.
    v.swap(mid, last);

    mid
}

/// Orders `v[a]`, `v[b]` and `v[c]` in place, so that the median ends up at `b`.
fn sort3<T, F>(v: &mut [T], a: usize, b: usize, c: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut sort2 = |v: &mut [T], x: usize, y: usize| {
        if is_less(&v[y], &v[x]) {
            v.swap(x, y);
        }
    };

    sort2(v, a, b);
    sort2(v, b, c);
    sort2(v, a, b);
}

/// Partitions `v` so that `v[..mid]` is not greater than `pivot` and `v[mid..]` is not less, and
/// returns `mid`.
///
/// Both scans stop at elements equal to the pivot, so runs of equal elements end up split between
/// the two sides instead of piling up on one of them.
fn hoare_partition<T, F>(v: &mut [T], pivot: &T, is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let mut l = 0;
    let mut r = v.len();

    loop {
        // Find the first element not less than the pivot.
        while l < r && is_less(&v[l], pivot) {
            l += 1;
        }

        // Find the last element not greater than the pivot.
        while l < r && is_less(pivot, &v[r - 1]) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    l
}
