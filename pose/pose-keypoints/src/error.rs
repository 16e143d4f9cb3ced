//! Error types for landmark selection.

use pose_types::ShapeError;
use thiserror::Error;

/// Errors raised when building or running a
/// [`VertexJointSelector`](crate::VertexJointSelector).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum KeypointError {
    /// A required landmark has no entry in the vertex id table.
    #[error("vertex id table has no entry for landmark `{name}`")]
    MissingLandmark {
        /// Name of the missing landmark.
        name: String,
    },

    /// A landmark points past the end of the vertex batch.
    #[error("landmark vertex index {index} out of range for {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// Offending vertex index.
        index: usize,
        /// Number of vertices per batch element.
        vertex_count: usize,
    },

    /// Vertex or joint batch shape error.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl KeypointError {
    /// Returns `true` if a landmark lookup failed at construction.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::MissingLandmark { .. })
    }
}

/// Result type for landmark selection.
pub type KeypointResult<T> = Result<T, KeypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_landmark_names_key() {
        let err = KeypointError::MissingLandmark {
            name: "nose".to_string(),
        };
        assert!(err.is_lookup());
        assert!(err.to_string().contains("`nose`"));
    }

    #[test]
    fn shape_errors_convert() {
        let err: KeypointError = ShapeError::Rank {
            expected: 2,
            actual: 3,
        }
        .into();
        assert!(!err.is_lookup());
        assert!(matches!(err, KeypointError::Shape(_)));
    }
}
