//! Error types for batched tensor shapes.

use thiserror::Error;

/// Shape errors raised when batch dimensions do not line up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ShapeError {
    /// The element count does not match the product of the batch dimensions.
    #[error("batch dims {dims:?} hold {expected} elements, got {actual}")]
    ElementCount {
        /// The requested batch dimensions.
        dims: Vec<usize>,
        /// Product of `dims`.
        expected: usize,
        /// Number of elements supplied.
        actual: usize,
    },

    /// The batch has the wrong number of leading dimensions.
    #[error("expected {expected} batch dimensions, got {actual}")]
    Rank {
        /// Required rank.
        expected: usize,
        /// Actual rank.
        actual: usize,
    },

    /// A single dimension has the wrong extent.
    #[error("{context}: expected extent {expected} on axis {axis}, got {actual}")]
    Dimension {
        /// What was being checked.
        context: &'static str,
        /// The offending axis.
        axis: usize,
        /// Required extent.
        expected: usize,
        /// Actual extent.
        actual: usize,
    },
}

/// Result type for shape-checked operations.
pub type ShapeResult<T> = Result<T, ShapeError>;
