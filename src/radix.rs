//! Least significant digit radix sort on decimal digits, for integers only.
//!
//! Negative values are split off and sorted by magnitude, then reversed, because a more negative
//! value has a larger magnitude. The result is the reversed negatives followed by the sorted
//! non-negatives. Each digit pass is a stable counting sort.

/// Integer types [`sort`] can handle. Anything else is rejected at compile time.
pub trait RadixKey: Copy + Ord {
    fn is_negative(self) -> bool;

    /// Absolute value, widened so that the `MIN` of every signed type is representable.
    fn magnitude(self) -> u128;
}

macro_rules! radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    self < 0
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self.unsigned_abs() as u128
                }
            }
        )*
    };
}

macro_rules! radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn is_negative(self) -> bool {
                    false
                }

                #[inline]
                fn magnitude(self) -> u128 {
                    self as u128
                }
            }
        )*
    };
}

radix_key_signed!(i8, i16, i32, i64, i128, isize);
radix_key_unsigned!(u8, u16, u32, u64, u128, usize);

const RADIX: u128 = 10;

/// Sorts `v` ascending.
///
/// Allocates scratch space for a copy of `v` plus one more copy of the larger of the negative and
/// non-negative parts.
pub fn sort<K: RadixKey>(v: &mut [K]) {
    if v.len() < 2 {
        return;
    }

    let (mut negatives, mut non_negatives): (Vec<K>, Vec<K>) =
        v.iter().copied().partition(|key| key.is_negative());

    sort_by_magnitude(&mut negatives);
    negatives.reverse();

    sort_by_magnitude(&mut non_negatives);

    let (negative_dst, non_negative_dst) = v.split_at_mut(negatives.len());
    negative_dst.copy_from_slice(&negatives);
    non_negative_dst.copy_from_slice(&non_negatives);
}

/// One counting sort pass per decimal digit of the largest magnitude, ones first.
fn sort_by_magnitude<K: RadixKey>(v: &mut [K]) {
    // An empty part has no largest magnitude and nothing to sort.
    let Some(max) = v.iter().map(|key| key.magnitude()).max() else {
        return;
    };

    let mut scratch = v.to_vec();
    let mut place: u128 = 1;

    while max / place > 0 {
        sort_by_digit(v, &mut scratch, place);

        // 10^39 does not fit, after the digit at 10^38 there is nothing left to sort by.
        place = match place.checked_mul(RADIX) {
            Some(next_place) => next_place,
            None => break,
        };
    }
}

/// Stable counting sort of `v` keyed on the decimal digit at `place`.
fn sort_by_digit<K: RadixKey>(v: &mut [K], scratch: &mut [K], place: u128) {
    debug_assert_eq!(v.len(), scratch.len());

    let digit = |key: &K| ((key.magnitude() / place) % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for key in v.iter() {
        counts[digit(key)] += 1;
    }

    // Turn counts into bucket ends.
    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    // Filling each bucket back to front while scanning back to front keeps keys with the same
    // digit in the order the previous pass left them in.
    for key in v.iter().rev() {
        let d = digit(key);
        counts[d] -= 1;
        scratch[counts[d]] = *key;
    }

    v.copy_from_slice(scratch);
}
