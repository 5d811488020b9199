//! # Sortkit
//!
//! `sortkit` is a small library of in-place sorting algorithms over any ordered, mutable,
//! randomly indexable sequence: slices, `Vec`, `VecDeque`, or your own container through the
//! [`SortSequence`] trait.
//!
//! ## Algorithms
//!
//! - **Exchange sort** ([`bubble_sort`], [`bubble_sort_by`]): adjacent-pair exchange passes until
//!   a pass makes no change. Stable.
//! - **Partition sort** ([`quick_sort`], [`quick_sort_by`]): median-of-three quicksort over an
//!   inclusive index range, leaving the rest of the sequence untouched.
//! - **Frequency sort** ([`count_sort`], [`count_sort_with`]): linear-time counting sort for
//!   sequences drawn from a small set of distinct values. Equal values collapse onto a single
//!   representative.
//! - **Bucket sort** ([`bucket_sort`], [`bucket_sort_by_key`]): groups elements by a derived
//!   composite [`Bucket`] key and lays the groups out in sorted key order. Stable per key.
//! - **Merge sort** ([`merge_sort`], [`merge_sort_by`]): the standard library's stable sort.
//!
//! Empty sequences are a no-op for every algorithm. The fallible sorts validate their arguments
//! before moving anything and report problems as [`SortError`].
//!
//! ## Usage
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut data = vec![3, 1, 0, 2, 3, 3, 1, 0, 2, 1, 0, 2];
//! quick_sort(&mut data, 0, 11).unwrap();
//!
//! assert_eq!(data, vec![0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
//! ```
//!
//! ### Custom Orderings
//!
//! Every comparison sort has a `_by` variant taking a comparator.
//!
//! ```rust
//! use sortkit::prelude::*;
//! use std::collections::VecDeque;
//!
//! let mut data: VecDeque<&str> = VecDeque::from(vec!["A", "B", "C"]);
//! bubble_sort_by(&mut data, |a, b| b.cmp(a));
//!
//! assert_eq!(data, vec!["C", "B", "A"]);
//! ```
//!
//! ### Small Alphabets
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let mut grades = vec!['b', 'c', 'a', 'b'];
//! count_sort_with(&mut grades, &['a', 'b', 'c']).unwrap();
//!
//! assert_eq!(grades, vec!['a', 'b', 'b', 'c']);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Exchange sort**: O(n) on sorted input, O(n²) worst case.
//! - **Partition sort**: O(n log n) average, O(n²) worst case. Pending ranges live on a heap
//!   allocated work stack, so adversarial inputs cannot exhaust the call stack.
//! - **Frequency sort**: O(n) + O(k log k) for `k` distinct values, O(k) auxiliary memory.
//! - **Bucket sort**: O(n) grouping + O(k log k) key ordering, O(n) auxiliary memory.
//!
//! ## Logging
//!
//! Every sort emits a `trace` event through [`tracing`](https://docs.rs/tracing) and rejected
//! inputs emit a `debug` event. Install a subscriber in your binary to see them.

pub mod algo;
pub mod bucket;
pub mod core;
pub mod error;
pub mod frequency;

pub use crate::algo::{
    bubble_sort, bubble_sort_by, merge_sort, merge_sort_by, quick_sort, quick_sort_by,
};
pub use crate::bucket::{bucket_sort, bucket_sort_by_key};
pub use crate::core::{Bucket, BucketProvider, SortSequence};
pub use crate::error::{Result, SortError};
pub use crate::frequency::{count_sort, count_sort_with};

pub mod prelude {
    pub use crate::algo::{
        bubble_sort, bubble_sort_by, merge_sort, merge_sort_by, quick_sort, quick_sort_by,
    };
    pub use crate::bucket::{bucket_sort, bucket_sort_by_key};
    pub use crate::core::{Bucket, BucketProvider};
    pub use crate::error::SortError;
    pub use crate::frequency::{count_sort, count_sort_with};
}
