//! Comb sort. A bubble sort that first compares elements far apart, which moves small values
//! from the end of the slice towards the front in a few passes.

use crate::is_zst;

sort_impl!("comb_unstable");

/// The gap shrinks by this factor after every pass, down to 1.
pub const SHRINK_FACTOR: f64 = 1.3;

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    let mut gap = len;
    let mut gap_one_passes = 0;

    loop {
        gap = next_gap(gap);

        // Only a full pass at gap 1 without a swap proves the slice is sorted.
        let mut sorted = gap == 1;
        for i in 0..len - gap {
            if is_less(&v[i + gap], &v[i]) {
                v.swap(i, i + gap);
                sorted = false;
            }
        }

        if sorted {
            break;
        }

        if gap == 1 {
            gap_one_passes += 1;

            // At gap 1 this is a bubble sort, which is done after `len - 1` swapping passes for any
            // strict weak order. Reaching `len` means the comparison function is inconsistent.
            if gap_one_passes >= len {
                break;
            }
        }
    }
}

fn next_gap(gap: usize) -> usize {
    ((gap as f64 / SHRINK_FACTOR) as usize).max(1)
}
