//! Per-joint hand pose composition for parametric mesh models.
//!
//! A [`HandPoseComposer`] turns raw hand pose parameters into 15 per-joint
//! rotation vectors, optionally expanding PCA coefficients through the
//! model's basis and offsetting by its mean pose. The composed rotations then
//! go through the composer's [`RotationConverter`](pose_rotation::RotationConverter)
//! to become rotation matrices for skinning.
//!
//! - [`HandPoseConfig`] - Mode, side and PCA settings
//! - [`HandModelData`] - PCA basis and mean pose of both hands
//! - [`Hands`] - One value per handled hand
//!
//! # Example
//!
//! ```
//! use pose_hand::{HAND_POSE_DIM, HandAssets, HandModelData, HandPose, HandPoseComposer, Hands};
//! use pose_types::{DMatrix, Matrix3};
//!
//! let data = HandModelData::new(HandAssets::<f64>::identity(), HandAssets::identity());
//! let composer = HandPoseComposer::from_names("rotvec", "both", &data).unwrap();
//!
//! let pose = || HandPose::Params(DMatrix::zeros(1, HAND_POSE_DIM));
//! let mats = composer
//!     .to_matrices(Hands::Both { left: pose(), right: pose() })
//!     .unwrap();
//!
//! assert_eq!(mats.left().unwrap().as_slice()[0], Matrix3::identity());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod assets;
mod composer;
mod config;
mod error;
mod side;

pub use assets::{HandAssets, HandModelData};
pub use composer::{HandPose, HandPoseComposer};
pub use config::{DEFAULT_NUM_PCA_COMPS, HandPoseConfig};
pub use error::{HandError, HandResult};
pub use side::{HandSide, Hands};

/// Number of articulated joints per hand.
pub const NUM_HAND_JOINTS: usize = 15;

/// Length of a flat per-hand pose vector (`NUM_HAND_JOINTS × 3`).
pub const HAND_POSE_DIM: usize = NUM_HAND_JOINTS * 3;
