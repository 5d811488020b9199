//! Frequency (counting) sorts for sequences drawn from a small set of distinct values.
//!
//! Both variants count how often every distinct value occurs and then rewrite the sequence
//! front to back, writing each value as many times as it was counted. The rewrite writes clones
//! of one representative per value, so equal elements collapse onto that representative: with
//! `Rc`/`Arc` elements every slot of a value ends up sharing one allocation.

use crate::core::SortSequence;
use crate::error::{Result, SortError};
use fxhash::FxHashMap;
use std::hash::Hash;
use tracing::{debug, trace};

/// Sorts the sequence by counting its distinct values.
///
/// The distinct values are discovered in first-seen order, sorted by their natural order, and
/// written back with their multiplicity. The first occurrence of every value becomes the
/// representative written into all of its slots. Runs in O(n) + O(k log k) for `k` distinct
/// values. An empty sequence is left as is.
///
/// # Examples
///
/// ```
/// use sortkit::count_sort;
///
/// let mut data = vec!["b", "a", "c", "a", "b"];
/// count_sort(&mut data);
///
/// assert_eq!(data, vec!["a", "a", "b", "b", "c"]);
/// ```
pub fn count_sort<S>(seq: &mut S)
where
    S: SortSequence + ?Sized,
    S::Item: Ord + Hash + Clone,
{
    let len = seq.len();
    if len == 0 {
        return;
    }

    let mut frequencies = FrequencyMap::discover(seq);
    frequencies.sort_keys();

    trace!(len, distinct = frequencies.distinct(), "count sort");

    frequencies.rewrite(seq);
}

/// Sorts the sequence by counting occurrences of the caller's representative values.
///
/// `ordered_uniques` lists every value the sequence may contain, in the order they should
/// appear. After a successful count the sequence is rewritten with clones of these
/// representatives, never with its own elements. Runs in O(n) with O(k) auxiliary space.
///
/// An empty sequence is a no-op regardless of `ordered_uniques`. Otherwise:
/// - An empty `ordered_uniques`, or one holding two equal values, fails with
///   [`SortError::InvalidArgument`].
/// - An element without a representative fails with [`SortError::ValueNotRecognized`].
///
/// Counting happens entirely in an auxiliary table, so on error the sequence is unmodified.
///
/// # Examples
///
/// ```
/// use sortkit::{count_sort_with, SortError};
///
/// let mut data = vec![1, 0, 2, 1, 0, 2];
/// count_sort_with(&mut data, &[0, 1, 2]).unwrap();
/// assert_eq!(data, vec![0, 0, 1, 1, 2, 2]);
///
/// let mut data = vec!["x"];
/// let result = count_sort_with(&mut data, &["a", "b"]);
/// assert_eq!(result, Err(SortError::ValueNotRecognized { index: 0 }));
/// ```
pub fn count_sort_with<S>(seq: &mut S, ordered_uniques: &[S::Item]) -> Result<()>
where
    S: SortSequence + ?Sized,
    S::Item: Eq + Hash + Clone,
{
    let len = seq.len();
    if len == 0 {
        return Ok(());
    }

    let mut frequencies = FrequencyMap::from_uniques(ordered_uniques)?;
    frequencies.tally(seq)?;

    trace!(len, distinct = frequencies.distinct(), "count sort with ordered uniques");

    frequencies.rewrite(seq);
    Ok(())
}

/// Occurrence count per distinct value, plus the order in which values are written back.
pub(crate) struct FrequencyMap<T> {
    counts: FxHashMap<T, usize>,
    keys: Vec<T>,
}

impl<T> FrequencyMap<T>
where
    T: Eq + Hash + Clone,
{
    /// Counts every element of `seq`, recording each value's first occurrence as its
    /// representative.
    pub(crate) fn discover<S>(seq: &S) -> Self
    where
        S: SortSequence<Item = T> + ?Sized,
    {
        let mut counts = FxHashMap::default();
        let mut keys = Vec::new();

        for index in 0..seq.len() {
            let item = seq.get(index);
            if let Some(count) = counts.get_mut(item) {
                *count += 1;
            } else {
                counts.insert(item.clone(), 1);
                keys.push(item.clone());
            }
        }

        Self { counts, keys }
    }

    /// Starts every representative at zero. The representatives are written back in the given
    /// order.
    pub(crate) fn from_uniques(uniques: &[T]) -> Result<Self> {
        if uniques.is_empty() {
            debug!("count sort called without ordered uniques");
            return Err(SortError::InvalidArgument(
                "ordered uniques must contain at least one value",
            ));
        }

        let mut counts = FxHashMap::with_capacity_and_hasher(uniques.len(), Default::default());
        for key in uniques {
            if counts.insert(key.clone(), 0).is_some() {
                debug!("count sort called with duplicated ordered uniques");
                return Err(SortError::InvalidArgument(
                    "ordered uniques must not contain duplicate values",
                ));
            }
        }

        Ok(Self {
            counts,
            keys: uniques.to_vec(),
        })
    }

    /// Counts `seq` against the fixed set of representatives.
    ///
    /// Stops at the first element that has no representative.
    pub(crate) fn tally<S>(&mut self, seq: &S) -> Result<()>
    where
        S: SortSequence<Item = T> + ?Sized,
    {
        for index in 0..seq.len() {
            match self.counts.get_mut(seq.get(index)) {
                Some(count) => *count += 1,
                None => {
                    debug!(index, "count sort found an unrecognized value");
                    return Err(SortError::ValueNotRecognized { index });
                }
            }
        }

        Ok(())
    }

    pub(crate) fn sort_keys(&mut self)
    where
        T: Ord,
    {
        self.keys.sort();
    }

    pub(crate) fn distinct(&self) -> usize {
        self.keys.len()
    }

    /// Writes every key `count` times, front to back, in key order.
    ///
    /// The counts must add up to `seq.len()`.
    pub(crate) fn rewrite<S>(&self, seq: &mut S)
    where
        S: SortSequence<Item = T> + ?Sized,
    {
        let mut position = 0;
        for key in &self.keys {
            let count = self.counts.get(key).copied().unwrap_or(0);
            for _ in 0..count {
                seq.set(position, key.clone());
                position += 1;
            }
        }
    }
}
