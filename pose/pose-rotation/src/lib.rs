//! Rotation conversions for parametric mesh model poses.
//!
//! This crate converts between the three rotation representations a mesh
//! model pipeline accepts, and dispatches to the right conversion based on a
//! configured [`RotationMode`]:
//!
//! | Mode | Input | Conversion |
//! |------|-------|------------|
//! | `rotmat` | `(..., 3, 3)` | pass-through |
//! | `rotvec` | `(..., 3)` | [`rotation_vectors_to_matrices`] |
//! | `quat` | `(..., 4)`, real part first | [`quaternions_to_matrices`] |
//! | `ortho6d` | - | not implemented, rejected at construction |
//!
//! Quaternions and rotation vectors are not required to be normalized.
//!
//! # Layer 0 Crate
//!
//! Pure numeric code with no rendering dependencies. Batches are evaluated
//! element-wise in parallel.
//!
//! # Example
//!
//! ```
//! use pose_rotation::{RotationConverter, rotation_vector_to_matrix};
//! use pose_types::{Batch, RotationTensor, Vector3};
//!
//! let r = rotation_vector_to_matrix(&Vector3::new(0.0_f64, 0.0, std::f64::consts::FRAC_PI_2));
//! assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
//!
//! let converter = RotationConverter::<f32>::from_name("quat").unwrap();
//! assert!(RotationConverter::<f32>::from_name("ortho6d").is_err());
//! # let _ = converter;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod convert;
mod converter;
mod error;
mod mode;

pub use convert::{
    SMALL_ANGLE_THRESHOLD, quaternion_to_matrix, quaternions_to_matrices, rotation_vector_to_matrix,
    rotation_vector_to_quaternion, rotation_vectors_to_matrices, rotation_vectors_to_quaternions,
    sin_half_angle_over_angle,
};
pub use converter::RotationConverter;
pub use error::{RotationError, RotationResult};
pub use mode::RotationMode;
