//! Batched tensor types shared by the pose crates.
//!
//! - [`Batch`] - Row-major elements with arbitrary leading batch dimensions
//! - [`RotationTensor`] - A batch of rotation vectors, quaternions or matrices
//! - [`ShapeError`] - Raised when batch dimensions do not line up
//!
//! # Layer 0 Crate
//!
//! No rendering or engine dependencies. Fixed trailing dimensions live in the
//! nalgebra element type, so shapes such as `(batch, 15, 3)` become
//! `Batch<Vector3<T>>` with `dims == [batch, 15]`.
//!
//! # Example
//!
//! ```
//! use pose_types::{Batch, RotationTensor, Vector3};
//!
//! let pose = Batch::new(vec![1, 15], vec![Vector3::<f64>::zeros(); 15]).unwrap();
//! let rot = RotationTensor::RotationVector(pose);
//! assert_eq!(rot.dims(), &[1, 15]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod error;
mod rotation;

pub use batch::Batch;
pub use error::{ShapeError, ShapeResult};
pub use rotation::RotationTensor;

// Re-export nalgebra types for convenience
pub use nalgebra::{DMatrix, DVector, Matrix3, RealField, Vector3, Vector4};
