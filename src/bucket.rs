//! Multi-key bucket sort.
//!
//! Elements are grouped by a derived [`Bucket`] key, the distinct keys are sorted, and the
//! groups are laid back into the sequence in key order. Elements keep their relative order
//! inside a group, so the result is stable with respect to the derived key.

use crate::algo::apply_permutation;
use crate::core::{Bucket, BucketProvider, SortSequence};
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;
use tracing::trace;

/// Sorts the sequence by the [`Bucket`] each element provides, ordering buckets with `compare`.
///
/// An empty sequence is left as is. Every element is moved, never cloned, so the original
/// instances survive.
///
/// # Examples
///
/// ```
/// use sortkit::bucket_sort;
/// use sortkit::core::{Bucket, BucketProvider};
///
/// struct Person {
///     id: u32,
///     age: u32,
///     height: u32,
/// }
///
/// impl BucketProvider<u32> for Person {
///     fn bucket(&self) -> Bucket<u32> {
///         Bucket::new([self.age, self.height])
///     }
/// }
///
/// let mut people = vec![
///     Person { id: 2, age: 40, height: 60 },
///     Person { id: 0, age: 18, height: 55 },
///     Person { id: 1, age: 18, height: 70 },
/// ];
/// bucket_sort(&mut people, Bucket::cmp);
///
/// let ids: Vec<u32> = people.iter().map(|p| p.id).collect();
/// assert_eq!(ids, vec![0, 1, 2]);
/// ```
pub fn bucket_sort<S, K, F>(seq: &mut S, compare: F)
where
    S: SortSequence + ?Sized,
    S::Item: BucketProvider<K>,
    K: Eq + Hash,
    F: FnMut(&Bucket<K>, &Bucket<K>) -> Ordering,
{
    bucket_sort_by_key(seq, |item| item.bucket(), compare);
}

/// Sorts the sequence by the [`Bucket`] that `key` derives for every element, ordering buckets
/// with `compare`.
///
/// `key` is called exactly once per element. Grouping is O(n) and ordering the buckets is
/// O(k log k) for `k` distinct keys.
pub fn bucket_sort_by_key<S, K, B, F>(seq: &mut S, mut key: B, mut compare: F)
where
    S: SortSequence + ?Sized,
    K: Eq + Hash,
    B: FnMut(&S::Item) -> Bucket<K>,
    F: FnMut(&Bucket<K>, &Bucket<K>) -> Ordering,
{
    let len = seq.len();
    if len == 0 {
        return;
    }

    // Source indices per bucket, in scan order.
    let mut groups: FxHashMap<Bucket<K>, Vec<usize>> = FxHashMap::default();
    for index in 0..len {
        groups.entry(key(seq.get(index))).or_default().push(index);
    }

    let mut groups: Vec<(Bucket<K>, Vec<usize>)> = groups.into_iter().collect();
    groups.sort_by(|a, b| compare(&a.0, &b.0));

    trace!(len, buckets = groups.len(), "bucket sort");

    let order: Vec<usize> = groups
        .into_iter()
        .flat_map(|(_, indices)| indices)
        .collect();

    apply_permutation(seq, order);
}
