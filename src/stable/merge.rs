//! Top-down merge sort.
//!
//! A single scratch buffer of `len / 2` elements is allocated per call and shared by every merge.
//! Only the left run is buffered, the right run is merged from where it already is.

use std::ptr;

use crate::is_zst;

sort_impl!("merge_stable");

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    // Left runs are never longer than half the slice that is split, so this fits all of them.
    let mut buf = Vec::<T>::with_capacity(len / 2);

    // SAFETY: `buf` has capacity for `len / 2` elements and outlives the call. `buf.len()` stays 0,
    // so dropping it never drops the bitwise copies made during merging.
    unsafe {
        merge_sort(v, buf.as_mut_ptr(), &mut is_less);
    }
}

/// # Safety
///
/// `buf` must be valid for writes of `v.len() / 2` elements and must not alias `v`.
unsafe fn merge_sort<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;

    // SAFETY: Both halves are shorter than `v`, so their halves fit the buffer too.
    unsafe {
        merge_sort(&mut v[..mid], buf, is_less);
        merge_sort(&mut v[mid..], buf, is_less);
        merge(v, mid, buf, is_less);
    }
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` using `buf` as temporary storage, and
/// stores the result into `v[..]`.
///
/// # Safety
///
/// `mid` must be in `1..v.len()`. `buf` must be valid for writes of `mid` elements and must not
/// alias `v`. `T` must not be a zero-sized type.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_base = v.as_mut_ptr();

    // The left run is copied into `buf`, which opens a hole of `mid` elements at the front of `v`.
    // The merged output is written into the hole from the front. The hole always sits right before
    // the unconsumed part of the right run and shrinks by one every time the left run gives up an
    // element, so the output never overtakes the right run.
    //
    // Panic safety:
    //
    // If `is_less` panics at any point during the process, `hole` will get dropped and fill the
    // hole in `v` with the unconsumed range in `buf`, thus ensuring that `v` still holds every
    // object it initially held exactly once.
    let (mut hole, mut right, right_end) = unsafe {
        ptr::copy_nonoverlapping(v_base, buf, mid);
        (
            MergeHole {
                start: buf,
                end: buf.add(mid),
                dest: v_base,
            },
            v_base.add(mid),
            v_base.add(len),
        )
    };

    while hole.start < hole.end && right < right_end {
        // SAFETY: Both cursors are in bounds per loop condition. `hole.dest` lags behind `right`
        // by the number of unconsumed left elements, which is at least one here, so source and
        // destination never overlap.
        unsafe {
            // Consume the lesser side.
            // If equal, prefer the left run to maintain stability.
            if is_less(&*right, &*hole.start) {
                ptr::copy_nonoverlapping(right, hole.dest, 1);
                right = right.add(1);
            } else {
                ptr::copy_nonoverlapping(hole.start, hole.dest, 1);
                hole.start = hole.start.add(1);
            }
            hole.dest = hole.dest.add(1);
        }
    }

    // Finally, `hole` gets dropped. If the left run was not fully consumed, whatever remains of it
    // will now be copied into the hole in `v`. Leftovers of the right run are already in place.
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, and these are pointers into the scratch buffer and
        // the slice being merged. The hole in the slice is exactly as long as `start..end`.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
