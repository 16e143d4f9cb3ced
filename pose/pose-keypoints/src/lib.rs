//! Extra anatomical keypoints picked from deformed mesh vertices.
//!
//! Skeleton joints alone miss the face, toes and fingertips. A
//! [`VertexJointSelector`] resolves those landmarks to mesh vertex indices once,
//! then appends the matching vertex positions to every joint batch:
//!
//! | Group | Landmarks | Enabled by |
//! |-------|-----------|------------|
//! | face | `nose`, `reye`, `leye`, `rear`, `lear` | always |
//! | feet | `LBigToe`, `LSmallToe`, `LHeel`, `RBigToe`, `RSmallToe`, `RHeel` | `use_feet_keypoints` |
//! | fingertips | `l`/`r` × `thumb`, `index`, `middle`, `ring`, `pinky` | `use_hands` |
//!
//! # Example
//!
//! ```
//! use pose_keypoints::{VertexIdTable, VertexJointSelector, VertexJointSelectorConfig};
//!
//! let config = VertexJointSelectorConfig::default().with_hands(false);
//! let selector = VertexJointSelector::new(&VertexIdTable::smplx(), config).unwrap();
//! assert_eq!(selector.landmark_names().last(), Some(&"RHeel"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod selector;
mod table;

pub use error::{KeypointError, KeypointResult};
pub use selector::{
    FACE_LANDMARKS, FEET_LANDMARKS, FINGERTIP_LANDMARKS, VertexJointSelector,
    VertexJointSelectorConfig,
};
pub use table::VertexIdTable;
