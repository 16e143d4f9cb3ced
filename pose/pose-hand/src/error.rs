//! Error types for hand pose composition.

use pose_rotation::RotationError;
use pose_types::ShapeError;
use thiserror::Error;

use crate::HandSide;

/// Errors that can occur while configuring or running a
/// [`HandPoseComposer`](crate::HandPoseComposer).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HandError {
    /// The side string is not one of `left`, `right`, `both`.
    #[error("unsupported side: {0}")]
    InvalidSide(String),

    /// The poses passed do not cover exactly the configured side(s).
    #[error("composer is configured for side `{expected}`, got poses for `{actual}`")]
    SideMismatch {
        /// Configured side.
        expected: HandSide,
        /// Side of the poses passed.
        actual: HandSide,
    },

    /// PCA basis or mean pose data has the wrong size.
    #[error("invalid {side} hand assets: {reason}")]
    InvalidAssets {
        /// Side the assets belong to.
        side: HandSide,
        /// What is wrong with them.
        reason: String,
    },

    /// A pose does not have the layout the configuration requires.
    #[error("{side} hand pose: expected {expected}, got {actual}")]
    PoseShape {
        /// Side of the offending pose.
        side: HandSide,
        /// Required layout.
        expected: String,
        /// Layout passed.
        actual: String,
    },

    /// Rotation mode error.
    #[error(transparent)]
    Rotation(#[from] RotationError),

    /// Batch shape error.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl HandError {
    /// Returns `true` for errors caused by an invalid configuration value.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        match self {
            Self::InvalidSide(_) => true,
            Self::Rotation(err) => err.is_configuration(),
            _ => false,
        }
    }

    /// Returns `true` for recognized-but-unimplemented features.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        match self {
            Self::Rotation(err) => err.is_unsupported(),
            _ => false,
        }
    }
}

/// Result type for hand pose operations.
pub type HandResult<T> = Result<T, HandError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pose_rotation::RotationMode;

    #[test]
    fn invalid_side_is_configuration() {
        let err = HandError::InvalidSide("up".to_string());
        assert!(err.is_configuration());
        assert!(err.to_string().contains("up"));
    }

    #[test]
    fn rotation_errors_keep_their_category() {
        let unsupported: HandError = RotationError::Unsupported {
            mode: RotationMode::Ortho6d,
        }
        .into();
        assert!(unsupported.is_unsupported());
        assert!(!unsupported.is_configuration());

        let invalid: HandError = RotationError::InvalidMode("bogus".to_string()).into();
        assert!(invalid.is_configuration());
    }

    #[test]
    fn side_mismatch_names_both_sides() {
        let err = HandError::SideMismatch {
            expected: HandSide::Left,
            actual: HandSide::Both,
        };
        let msg = err.to_string();
        assert!(msg.contains("`left`"));
        assert!(msg.contains("`both`"));
    }
}
