//! Error type shared by the fallible sorts.

use thiserror::Error;

/// Reasons a sort can refuse its input.
///
/// Every variant is raised before the sequence is touched, so a caller receiving an error still
/// holds the sequence exactly as it passed it in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The call was structurally wrong before any element was looked at.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A supplied index lies outside `0..len`.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The element at `index` has no representative in the caller-declared value set.
    #[error("element at index {index} is not present in the ordered uniques")]
    ValueNotRecognized { index: usize },
}

pub type Result<T> = std::result::Result<T, SortError>;
