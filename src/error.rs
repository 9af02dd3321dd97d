//! Error types for collection operations.
//!
//! Every fallible operation on [`Collection`](crate::collection::Collection)
//! reports its failure through [`CollectionError`]. Failures are never
//! recovered internally: they are returned to the caller immediately,
//! naming the operation and the condition that caused them.

use thiserror::Error;

/// Represents errors that can occur when querying or aggregating a collection.
///
/// # Examples
///
/// ```rust
/// use ordo::CollectionError;
///
/// let error = CollectionError::Empty { operation: "median" };
/// assert_eq!(error.to_string(), "median: collection is empty");
///
/// let error = CollectionError::IndexOutOfRange { index: 4, length: 3 };
/// assert_eq!(
///     error.to_string(),
///     "index 4 out of range for collection of length 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CollectionError {
    /// The operation needs at least one (matching) element but found none.
    ///
    /// Raised by `first`/`first_where` when nothing matches, and by the
    /// aggregates (`avg`, `median`, `mode`) instead of dividing by a count of zero.
    #[error("{operation}: collection is empty")]
    Empty {
        /// The name of the operation that failed.
        operation: &'static str,
    },

    /// An index was outside `[0, length)`.
    #[error("index {index} out of range for collection of length {length}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the collection at the time of access.
        length: usize,
    },

    /// The element count does not fit the numeric result type, so the sum
    /// cannot be divided by it.
    #[error("{operation}: element count {count} does not fit the result type")]
    CountOutOfRange {
        /// The name of the operation that failed.
        operation: &'static str,
        /// The number of elements in the collection.
        count: usize,
    },

    /// Accumulating the projected values overflowed the numeric result type.
    #[error("{operation}: sum overflows the result type")]
    Overflow {
        /// The name of the operation that failed.
        operation: &'static str,
    },
}

impl CollectionError {
    /// Builds a [`CollectionError::Empty`] for the given operation name.
    #[inline]
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::Empty { operation }
    }

    /// Returns the name of the failing operation, if the error carries one.
    ///
    /// ```rust
    /// use ordo::CollectionError;
    ///
    /// assert_eq!(CollectionError::Empty { operation: "mode" }.operation(), Some("mode"));
    /// assert_eq!(
    ///     CollectionError::IndexOutOfRange { index: 0, length: 0 }.operation(),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match *self {
            Self::Empty { operation }
            | Self::CountOutOfRange { operation, .. }
            | Self::Overflow { operation } => Some(operation),
            Self::IndexOutOfRange { .. } => None,
        }
    }
}
