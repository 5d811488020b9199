//! Core traits and types for sortkit.
//!
//! This module defines:
//! - [`SortSequence`]: The indexable, mutable sequence every sort in this crate operates on.
//! - [`Bucket`]: The fixed-arity composite key used by [`bucket_sort`](crate::bucket::bucket_sort).
//! - [`BucketProvider`]: The key-extraction trait elements implement to be bucket sorted.

use std::collections::VecDeque;
use std::ops::Index;

/// An ordered, randomly indexable sequence whose elements can be replaced in place.
///
/// Sorts never insert or remove elements, so resizing is not part of the contract. Indices
/// passed to the accessors are always in `0..len()`.
///
/// # Examples
///
/// Implementing for a custom container:
///
/// ```
/// use sortkit::core::SortSequence;
///
/// struct Column {
///     values: Vec<u32>,
/// }
///
/// impl SortSequence for Column {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         self.values.len()
///     }
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.values[index]
///     }
///
///     fn set(&mut self, index: usize, value: u32) {
///         self.values[index] = value;
///     }
///
///     fn swap(&mut self, a: usize, b: usize) {
///         self.values.swap(a, b);
///     }
/// }
///
/// let mut column = Column { values: vec![3, 1, 2] };
/// sortkit::bubble_sort(&mut column);
/// assert_eq!(column.values, vec![1, 2, 3]);
/// ```
pub trait SortSequence {
    /// Element type stored in the sequence.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the element at `index`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Replaces the element at `index`, dropping the previous one.
    fn set(&mut self, index: usize, value: Self::Item);

    /// Exchanges the elements at `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> SortSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_mut_slice()).
impl<T> SortSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

// VecDeque has O(1) random access without being contiguous.
impl<T> SortSequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

/// Immutable composite key used to group elements in a bucket sort.
///
/// Two buckets are equal when they hold the same number of sub-keys and every sub-key is equal
/// position by position. Hashing is order sensitive and includes the arity, so `[1, 2]`,
/// `[2, 1]` and `[1, 2, 0]` are three distinct buckets.
///
/// The derived ordering is lexicographic over the sub-keys, which makes `Bucket::cmp` a
/// ready-made key comparator.
///
/// ```
/// use sortkit::core::Bucket;
///
/// let a = Bucket::new([18, 55]);
/// let b = Bucket::from(vec![18, 62]);
///
/// assert_eq!(a.len(), 2);
/// assert_eq!(a.get(1), Some(&55));
/// assert!(a < b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bucket<K> {
    items: Box<[K]>,
}

impl<K> Bucket<K> {
    pub fn new(items: impl Into<Box<[K]>>) -> Self {
        Self {
            items: items.into(),
        }
    }

    /// Number of sub-keys in this bucket.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&K> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[K] {
        &self.items
    }
}

impl<K> Index<usize> for Bucket<K> {
    type Output = K;

    fn index(&self, index: usize) -> &K {
        &self.items[index]
    }
}

impl<K> From<Vec<K>> for Bucket<K> {
    fn from(items: Vec<K>) -> Self {
        Self::new(items)
    }
}

impl<K, const N: usize> From<[K; N]> for Bucket<K> {
    fn from(items: [K; N]) -> Self {
        Self::new(items)
    }
}

impl<K> FromIterator<K> for Bucket<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Derives the composite key an element is grouped under.
///
/// The bucket is built fresh on every call; [`bucket_sort`](crate::bucket::bucket_sort) calls
/// this exactly once per element.
///
/// ```
/// use sortkit::core::{Bucket, BucketProvider};
///
/// struct Person {
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
/// let person = Person { age: 40, height: 60 };
/// assert_eq!(person.bucket(), Bucket::new([40, 60]));
/// ```
pub trait BucketProvider<K> {
    fn bucket(&self) -> Bucket<K>;
}
