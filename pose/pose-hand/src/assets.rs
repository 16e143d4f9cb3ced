//! Per-hand model data consumed by the composer.

use nalgebra::{DMatrix, DVector, RealField};

use crate::{HAND_POSE_DIM, HandSide};

/// PCA basis and mean pose of one hand, as stored with the mesh model.
#[derive(Debug, Clone, PartialEq)]
pub struct HandAssets<T> {
    /// PCA basis, one component per row, `HAND_POSE_DIM` columns.
    pub components: DMatrix<T>,
    /// Mean pose, `HAND_POSE_DIM` values (15 joints × 3).
    pub mean: DVector<T>,
}

impl<T: RealField + Copy> HandAssets<T> {
    /// Wraps a PCA basis and mean pose.
    #[must_use]
    pub const fn new(components: DMatrix<T>, mean: DVector<T>) -> Self {
        Self { components, mean }
    }

    /// Identity basis with `HAND_POSE_DIM` components and a zero mean.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            components: DMatrix::identity(HAND_POSE_DIM, HAND_POSE_DIM),
            mean: DVector::zeros(HAND_POSE_DIM),
        }
    }
}

/// Hand data for both sides of a mesh model.
#[derive(Debug, Clone, PartialEq)]
pub struct HandModelData<T> {
    /// Left hand assets.
    pub left: HandAssets<T>,
    /// Right hand assets.
    pub right: HandAssets<T>,
}

impl<T> HandModelData<T> {
    /// Bundles left and right hand assets.
    #[must_use]
    pub const fn new(left: HandAssets<T>, right: HandAssets<T>) -> Self {
        Self { left, right }
    }

    /// Assets of a single side; `None` for [`HandSide::Both`].
    #[must_use]
    pub const fn side(&self, side: HandSide) -> Option<&HandAssets<T>> {
        match side {
            HandSide::Left => Some(&self.left),
            HandSide::Right => Some(&self.right),
            HandSide::Both => None,
        }
    }
}
