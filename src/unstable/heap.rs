//! Heapsort over an array-mapped binary tree, children of node `i` live at `2 * i + 1` and
//! `2 * i + 2`.
//!
//! The heap is a max-heap with respect to `is_less`, so repeatedly moving the root behind the heap
//! yields ascending output. Callers pass the same "must precede" predicate as for every other sort
//! in this crate, the inversion to a "greater first" heap order happens in here.

use crate::is_zst;

sort_impl!("heap_unstable");

pub fn sort_by_is_less<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || is_zst::<T>() {
        return;
    }

    build_heap(v, &mut is_less);

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0, &mut is_less);
    }
}

/// Establishes the heap invariant over all of `v`, starting at the last node that has children and
/// moving towards the root.
fn build_heap<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node, is_less);
    }
}

// This binary heap respects the invariant `parent >= child`.
//
// Iterative, the depth is bounded by `log2(v.len())` either way.
fn sift_down<T, F>(v: &mut [T], mut node: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(node < len);

    loop {
        let left = 2 * node + 1;
        if left >= len {
            break;
        }

        let mut largest = node;
        if is_less(&v[largest], &v[left]) {
            largest = left;
        }

        let right = left + 1;
        if right < len && is_less(&v[largest], &v[right]) {
            largest = right;
        }

        if largest == node {
            break;
        }

        v.swap(node, largest);
        node = largest;
    }
}
