//! Error types for rotation conversion.

use thiserror::Error;

use crate::RotationMode;

/// Errors raised when configuring or running a [`RotationConverter`](crate::RotationConverter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RotationError {
    /// The rotation mode string is not recognized.
    #[error("unsupported rot_mode: {0}")]
    InvalidMode(String),

    /// The rotation mode is recognized but has no conversion.
    #[error("rot_mode `{mode}` is recognized but not implemented")]
    Unsupported {
        /// The unimplemented mode.
        mode: RotationMode,
    },

    /// The input representation does not match the configured mode.
    #[error("rot_mode `{mode}` expects {expected} input, got {actual}")]
    RepresentationMismatch {
        /// The configured mode.
        mode: RotationMode,
        /// Representation the mode consumes.
        expected: &'static str,
        /// Representation that was passed.
        actual: &'static str,
    },
}

impl RotationError {
    /// Returns `true` for errors caused by an invalid configuration value.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidMode(_))
    }

    /// Returns `true` for recognized-but-unimplemented modes.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Result type for rotation operations.
pub type RotationResult<T> = Result<T, RotationError>;
