//! The sort engine: comparator-driven sorts and an LSD radix sort.
//!
//! This module implements:
//! - **Quicksort** with Hoare partitioning around the first element of the range.
//! - **Merge sort**, stable, merging through an index permutation.
//! - **Shell sort** with the halving gap sequence `n/2, n/4, .., 1`.
//! - **Selection sort**.
//! - **Radix sort** for non-negative integers, base 10, least significant digit first.
//!
//! Every comparator sort is generic over the element type and takes any
//! `FnMut(&T, &T) -> Ordering`, the same shape as [`slice::sort_by`]. None of
//! them require `T: Clone`; elements are only ever swapped.
//!
//! Quicksort does no pivot sampling. Already sorted or reverse sorted input
//! hits the O(n^2) worst case and recurses O(n) deep, which can overflow the
//! stack on large presorted slices.

use crate::error::{SortError, SortResult};
use cuneiform::cuneiform;
use std::cmp::Ordering;

/// Sorts the inclusive range `v[lo..=hi]` with Hoare-partition quicksort.
///
/// Not stable.
///
/// An empty range (`lo == hi + 1`) is a no-op, and an empty slice accepts
/// `lo == hi == 0`.
///
/// # Panics
///
/// Panics if `hi >= v.len()` or `lo > hi + 1`.
///
/// # Examples
///
/// ```
/// use attrsort::algo::quicksort;
///
/// let mut data = [5, 3, 8, 3, 1];
/// quicksort(&mut data, 0, 4, &mut |a: &i32, b: &i32| a.cmp(b));
///
/// assert_eq!(data, [1, 3, 3, 5, 8]);
/// ```
pub fn quicksort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(v.len(), lo, hi);
    quick_range(v, lo, hi, cmp);
}

/// Sorts the whole slice with [`quicksort`]. Empty slices are a no-op.
pub fn quick_sort<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        quick_range(v, 0, v.len() - 1, &mut cmp);
    }
}

fn quick_range<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if lo < hi {
        let split = hoare_partition(v, lo, hi, cmp);
        quick_range(v, lo, split, cmp);
        quick_range(v, split + 1, hi, cmp);
    }
}

/// Partitions `v[lo..=hi]` around the element initially at `lo`.
///
/// Returns `j` with `lo <= j < hi` such that every element of `v[lo..=j]`
/// compares `<=` the pivot and every element of `v[j+1..=hi]` compares `>=`.
fn hoare_partition<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    // The pivot stays in the slice, so its position is tracked across swaps.
    let mut pivot = lo;
    let mut i = lo;
    let mut j = hi;

    loop {
        while cmp(&v[i], &v[pivot]) == Ordering::Less {
            i += 1;
        }
        while cmp(&v[j], &v[pivot]) == Ordering::Greater {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        v.swap(i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        j -= 1;
    }
}

/// Sorts the inclusive range `v[lo..=hi]` with top-down merge sort.
///
/// Stable: on ties the element from the left half is taken first.
/// Each merge allocates an index buffer the size of the merged range.
///
/// An empty range (`lo == hi + 1`) is a no-op, and an empty slice accepts
/// `lo == hi == 0`.
///
/// # Panics
///
/// Panics if `hi >= v.len()` or `lo > hi + 1`.
pub fn mergesort<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    check_range(v.len(), lo, hi);
    merge_range(v, lo, hi, cmp);
}

/// Sorts the whole slice with [`mergesort`]. Empty slices are a no-op.
pub fn merge_sort<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        merge_range(v, 0, v.len() - 1, &mut cmp);
    }
}

fn merge_range<T, F>(v: &mut [T], lo: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if lo < hi {
        let mid = lo + (hi - lo) / 2;
        merge_range(v, lo, mid, cmp);
        merge_range(v, mid + 1, hi, cmp);
        merge_halves(v, lo, mid, hi, cmp);
    }
}

/// Merges the sorted runs `v[lo..=mid]` and `v[mid+1..=hi]`.
///
/// The merged order is computed as offsets into the range first, then
/// applied in place, so no element is cloned or moved out of the slice.
fn merge_halves<T, F>(v: &mut [T], lo: usize, mid: usize, hi: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut order = Vec::with_capacity(hi - lo + 1);
    let (mut i, mut j) = (lo, mid + 1);

    while i <= mid && j <= hi {
        if cmp(&v[i], &v[j]) != Ordering::Greater {
            order.push(i - lo);
            i += 1;
        } else {
            order.push(j - lo);
            j += 1;
        }
    }
    order.extend((i..=mid).map(|k| k - lo));
    order.extend((j..=hi).map(|k| k - lo));

    apply_permutation(&mut v[lo..=hi], order);
}

/// Shell sort with gaps `len/2, len/4, .., 1`.
///
/// Each pass is a gapped insertion sort. Not stable.
pub fn shellsort<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let mut j = i;
            while j >= gap && cmp(&v[j - gap], &v[j]) == Ordering::Greater {
                v.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

/// Selection sort. Not stable.
///
/// Always performs exactly `len * (len - 1) / 2` comparisons.
pub fn selectionsort<T, F>(v: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if cmp(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        v.swap(i, min);
    }
}

/// Base of the digits the radix sort distributes on.
const RADIX_BASE: u64 = 10;

/// Number of buckets for one counting pass (one per decimal digit).
const RADIX_BUCKETS: usize = RADIX_BASE as usize;

// Cache-aligned counts struct.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts non-negative integers with a base-10 LSD radix sort.
///
/// Runs one stable counting pass per decimal digit of the maximum value
/// (one pass when the maximum is 0) and returns the number of passes.
/// Allocates one scratch buffer of the input's length.
///
/// # Errors
///
/// Returns [`SortError::InvalidInput`] and leaves `v` untouched if any
/// element is negative.
///
/// # Examples
///
/// ```
/// use attrsort::algo::radix_sort;
///
/// let mut data = [170, 45, 75, 90, 802, 24, 2, 66];
/// let passes = radix_sort(&mut data).unwrap();
///
/// assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
/// assert_eq!(passes, 3);
/// ```
pub fn radix_sort(v: &mut [i64]) -> SortResult<usize> {
    if let Some((index, value)) = v.iter().enumerate().find(|(_, value)| **value < 0) {
        return Err(SortError::InvalidInput(format!(
            "radix sort needs non-negative keys, found {value} at index {index}"
        )));
    }

    Ok(radix_sort_by_key(v, |&value| value as u64))
}

/// LSD radix sort of arbitrary `Copy` items by an unsigned key.
///
/// Stable. Returns the number of counting passes performed.
pub(crate) fn radix_sort_by_key<T, K>(v: &mut [T], key: K) -> usize
where
    T: Copy,
    K: Fn(&T) -> u64,
{
    let Some(max) = v.iter().map(&key).max() else {
        return 0;
    };

    let mut buffer = v.to_vec();
    let mut passes = 0;
    let mut exp = 1;

    loop {
        counting_pass(v, &mut buffer, &key, exp);
        passes += 1;

        match exp.checked_mul(RADIX_BASE) {
            Some(next) if max / next > 0 => exp = next,
            _ => break,
        }
    }

    passes
}

/// One stable counting-sort pass on the digit selected by `exp`.
///
/// 1. Counts how many keys fall into each digit bucket.
/// 2. Computes prefix sums to get each bucket's starting position.
/// 3. Copies the items aside and scatters them back in bucket order.
fn counting_pass<T, K>(v: &mut [T], buffer: &mut [T], key: &K, exp: u64)
where
    T: Copy,
    K: Fn(&T) -> u64,
{
    let digit = |item: &T| ((key(item) / exp) % RADIX_BASE) as usize;

    let mut counts = DigitCounts {
        data: [0; RADIX_BUCKETS],
    };
    let counts = &mut counts.data;

    v.iter().for_each(|item| counts[digit(item)] += 1);

    let mut offsets = [0usize; RADIX_BUCKETS];
    let mut sum = 0;
    offsets
        .iter_mut()
        .zip(counts.iter())
        .for_each(|(offset, &count)| {
            *offset = sum;
            sum += count;
        });

    buffer.copy_from_slice(v);
    buffer.iter().for_each(|item| {
        let d = digit(item);
        v[offsets[d]] = *item;
        offsets[d] += 1;
    });
}

/// Reorders `data` so that `data[k]` becomes the element previously at
/// `indices[k]`. Works by following cycles with swaps.
pub(crate) fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    debug_assert_eq!(data.len(), indices.len());

    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}

fn check_range(len: usize, lo: usize, hi: usize) {
    let in_bounds = if len == 0 {
        lo == 0 && hi == 0
    } else {
        hi < len && lo <= hi + 1
    };
    assert!(
        in_bounds,
        "sort range {lo}..={hi} out of bounds for slice of length {len}"
    );
}
