//! Tagged rotation tensors.

use nalgebra::{Matrix3, RealField, Vector3, Vector4};

use crate::Batch;

/// A batch of rotations in one of the three supported representations.
///
/// Quaternions are stored real part first, `(w, x, y, z)`. Neither quaternions
/// nor rotation vectors need to be normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum RotationTensor<T> {
    /// Axis-angle rotation vectors, shape `(..., 3)`.
    RotationVector(Batch<Vector3<T>>),
    /// Quaternions `(w, x, y, z)`, shape `(..., 4)`.
    Quaternion(Batch<Vector4<T>>),
    /// Rotation matrices, shape `(..., 3, 3)`.
    Matrix(Batch<Matrix3<T>>),
}

impl<T> RotationTensor<T> {
    /// Returns the leading batch dimensions.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        match self {
            Self::RotationVector(b) => b.dims(),
            Self::Quaternion(b) => b.dims(),
            Self::Matrix(b) => b.dims(),
        }
    }

    /// Returns the number of rotations.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::RotationVector(b) => b.len(),
            Self::Quaternion(b) => b.len(),
            Self::Matrix(b) => b.len(),
        }
    }

    /// Returns `true` if there are no rotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the representation: `"rotvec"`, `"quat"` or `"rotmat"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RotationVector(_) => "rotvec",
            Self::Quaternion(_) => "quat",
            Self::Matrix(_) => "rotmat",
        }
    }
}

impl<T: RealField + Copy> RotationTensor<T> {
    /// Converts every scalar to the precision `U`, keeping the representation.
    ///
    /// Narrowing rounds each value to the nearest representable one.
    #[must_use]
    pub fn cast<U: RealField + Copy>(&self) -> RotationTensor<U> {
        match self {
            Self::RotationVector(b) => RotationTensor::RotationVector(b.map(|v| v.map(recast))),
            Self::Quaternion(b) => RotationTensor::Quaternion(b.map(|q| q.map(recast))),
            Self::Matrix(b) => RotationTensor::Matrix(b.map(|m| m.map(recast))),
        }
    }
}

fn recast<T: RealField + Copy, U: RealField + Copy>(x: T) -> U {
    nalgebra::convert(nalgebra::convert_unchecked::<T, f64>(x))
}
