//! Comparison sorts: exchange (bubble) sort, partition (quick) sort and the merge sort wrapper.
//!
//! The entry points come in pairs, one using the natural [`Ord`] order of the element and a
//! `_by` variant taking an explicit comparator. Both accept any [`SortSequence`].

use crate::core::SortSequence;
use crate::error::{Result, SortError};
use std::cmp::Ordering;
use tracing::{debug, trace};

/// Sorts the sequence in place with repeated adjacent-pair exchange passes.
///
/// Equal elements are never exchanged, so this sort is stable. An empty sequence is left as is.
///
/// # Examples
///
/// ```
/// use sortkit::bubble_sort;
///
/// let mut data = vec![3, 1, 0, 2];
/// bubble_sort(&mut data);
///
/// assert_eq!(data, vec![0, 1, 2, 3]);
/// ```
pub fn bubble_sort<S>(seq: &mut S)
where
    S: SortSequence + ?Sized,
    S::Item: Ord,
{
    bubble_sort_by(seq, Ord::cmp);
}

/// Sorts the sequence in place with repeated adjacent-pair exchange passes, ordering elements
/// with `compare`.
///
/// Passes run left to right and stop after the first pass that exchanges nothing, which makes an
/// already sorted input O(n).
pub fn bubble_sort_by<S, F>(seq: &mut S, mut compare: F)
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    if len == 0 {
        return;
    }

    trace!(len, "bubble sort");

    let mut changed = true;
    while changed {
        changed = false;

        for i in 1..len {
            if compare(seq.get(i - 1), seq.get(i)) == Ordering::Greater {
                seq.swap(i - 1, i);
                changed = true;
            }
        }
    }
}

/// Sorts the inclusive index range `start..=end` of the sequence in place.
///
/// See [`quick_sort_by`] for the validation rules.
///
/// # Examples
///
/// ```
/// use sortkit::quick_sort;
///
/// let mut data = vec![9, 3, 1, 2, -1];
/// quick_sort(&mut data, 1, 3).unwrap();
///
/// assert_eq!(data, vec![9, 1, 2, 3, -1]);
/// ```
pub fn quick_sort<S>(seq: &mut S, start: usize, end: usize) -> Result<()>
where
    S: SortSequence + ?Sized,
    S::Item: Ord,
{
    quick_sort_by(seq, start, end, Ord::cmp)
}

/// Sorts the inclusive index range `start..=end` of the sequence in place, ordering elements
/// with `compare`.
///
/// Elements outside the range are never touched. This sort is not stable.
///
/// Validation runs before any element is moved:
/// - An empty sequence or `start == end` is a no-op.
/// - A two-element range (`end == start + 1`) is ordered with a single comparison, or ignored
///   when `end` lies past the sequence.
/// - `end >= len` fails with [`SortError::IndexOutOfRange`].
/// - `start > end` fails with [`SortError::InvalidArgument`].
///
/// The pivot of each range is picked among its first, middle and last element and the range is
/// partitioned in a single left-to-right scan. Pending ranges are kept on an explicit work stack,
/// so adversarial inputs cost heap instead of call stack.
pub fn quick_sort_by<S, F>(seq: &mut S, start: usize, end: usize, mut compare: F) -> Result<()>
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let len = seq.len();
    if len == 0 || start == end {
        return Ok(());
    }

    if end.checked_sub(start) == Some(1) {
        if end < len {
            order_pair(seq, start, end, &mut compare);
        }
        return Ok(());
    }

    if end >= len {
        debug!(end, len, "quick sort end index out of range");
        return Err(SortError::IndexOutOfRange { index: end, len });
    }

    if start > end {
        debug!(start, end, "quick sort start index past end index");
        return Err(SortError::InvalidArgument(
            "start index cannot be greater than end index",
        ));
    }

    trace!(len, start, end, "quick sort");

    let mut ranges = vec![(start, end)];
    while let Some((start, end)) = ranges.pop() {
        if end - start == 1 {
            order_pair(seq, start, end, &mut compare);
            continue;
        }

        let boundary = partition(seq, start, end, &mut compare);

        if boundary > start + 1 {
            ranges.push((start, boundary - 1));
        }
        if boundary + 1 < end {
            ranges.push((boundary + 1, end));
        }
    }

    Ok(())
}

/// Partitions `start..=end` (at least three elements) around a median-of-three pivot.
///
/// Returns the final index of the pivot: everything left of it compares less, everything right
/// of it compares greater or equal.
fn partition<S, F>(seq: &mut S, start: usize, end: usize, compare: &mut F) -> usize
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let middle = start + (end - start) / 2;
    let pivot = median_of_three(seq, start, middle, end, compare);

    // Park the pivot at the end; the scan below never reaches it.
    seq.swap(pivot, end);

    let mut boundary = start;
    for i in start..end {
        if compare(seq.get(i), seq.get(end)) == Ordering::Less {
            seq.swap(i, boundary);
            boundary += 1;
        }
    }
    seq.swap(boundary, end);

    boundary
}

/// Picks the pivot index among `start`, `middle` and `end`.
///
/// The first element wins when the middle is below it and it is above the last, the last
/// element wins when the middle is below it and it is above the first, otherwise the middle is
/// taken. This is not the exact median for every ordering of the three values.
fn median_of_three<S, F>(
    seq: &S,
    start: usize,
    middle: usize,
    end: usize,
    compare: &mut F,
) -> usize
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    let first = seq.get(start);
    let mid = seq.get(middle);
    let last = seq.get(end);

    if compare(mid, first) == Ordering::Less && compare(first, last) == Ordering::Greater {
        start
    } else if compare(mid, last) == Ordering::Less && compare(last, first) == Ordering::Greater {
        end
    } else {
        middle
    }
}

#[inline]
fn order_pair<S, F>(seq: &mut S, a: usize, b: usize, compare: &mut F)
where
    S: SortSequence + ?Sized,
    F: FnMut(&S::Item, &S::Item) -> Ordering,
{
    if compare(seq.get(a), seq.get(b)) == Ordering::Greater {
        seq.swap(a, b);
    }
}

/// Sorts a slice with the standard library's stable merge sort.
pub fn merge_sort<T: Ord>(data: &mut [T]) {
    trace!(len = data.len(), "merge sort");
    data.sort();
}

/// Sorts a slice with the standard library's stable merge sort, ordering elements with `compare`.
pub fn merge_sort_by<T, F>(data: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!(len = data.len(), "merge sort");
    data.sort_by(compare);
}

/// Rearranges `seq` so that position `i` holds the element previously at `indices[i]`.
///
/// `indices` must be a permutation of `0..seq.len()`. Elements are moved by cycle-following
/// swaps, so they are never cloned or dropped.
pub(crate) fn apply_permutation<S>(seq: &mut S, mut indices: Vec<usize>)
where
    S: SortSequence + ?Sized,
{
    for i in 0..seq.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            seq.swap(current, next);
            indices[current] = current; // Mark as visited/placed
            current = next;
        }
        indices[current] = current;
    }
}
