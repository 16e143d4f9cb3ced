//! Mode-dispatched conversion to rotation matrices.

use std::fmt;

use nalgebra::{Matrix3, RealField};
use pose_types::{Batch, RotationTensor};
use tracing::debug;

use crate::convert::{quaternions_to_matrices, rotation_vectors_to_matrices};
use crate::error::{RotationError, RotationResult};
use crate::mode::RotationMode;

type ConvertFn<T> = fn(&RotationTensor<T>) -> RotationResult<Batch<Matrix3<T>>>;

/// Converts rotations of a fixed representation into rotation matrices.
///
/// The conversion is resolved once from the [`RotationMode`] at construction;
/// [`convert`](Self::convert) never re-inspects the mode. The scalar type `T`
/// fixes the numeric precision of the output.
///
/// # Example
///
/// ```
/// use pose_rotation::{RotationConverter, RotationMode};
/// use pose_types::{Batch, Matrix3, RotationTensor, Vector3};
///
/// let converter = RotationConverter::<f64>::new(RotationMode::RotVec).unwrap();
/// let rotvecs = RotationTensor::RotationVector(Batch::from_vec(vec![Vector3::zeros()]));
///
/// let mats = converter.convert(&rotvecs).unwrap();
/// assert_eq!(mats.as_slice()[0], Matrix3::identity());
/// ```
#[derive(Clone, Copy)]
pub struct RotationConverter<T: RealField + Copy> {
    mode: RotationMode,
    rot_fn: ConvertFn<T>,
}

impl<T: RealField + Copy> RotationConverter<T> {
    /// Creates a converter for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::Unsupported`] for [`RotationMode::Ortho6d`].
    pub fn new(mode: RotationMode) -> RotationResult<Self> {
        let rot_fn: ConvertFn<T> = match mode {
            RotationMode::RotMat => identity_fn,
            RotationMode::RotVec => rotvec_fn,
            RotationMode::Quat => quat_fn,
            RotationMode::Ortho6d => return Err(RotationError::Unsupported { mode }),
        };

        debug!(rot_mode = %mode, "resolved rotation conversion");
        Ok(Self { mode, rot_fn })
    }

    /// Parses `name` and creates a converter for it.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::InvalidMode`] for an unknown name and
    /// [`RotationError::Unsupported`] for `"ortho6d"`.
    pub fn from_name(name: &str) -> RotationResult<Self> {
        Self::new(name.parse()?)
    }

    /// The configured mode.
    #[must_use]
    pub const fn mode(&self) -> RotationMode {
        self.mode
    }

    /// Converts `rot` to rotation matrices, keeping its batch dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::RepresentationMismatch`] if `rot` is not the
    /// representation the mode consumes.
    pub fn convert(&self, rot: &RotationTensor<T>) -> RotationResult<Batch<Matrix3<T>>> {
        (self.rot_fn)(rot)
    }

    /// Converts `rot` from another precision, casting it to `T` first.
    ///
    /// In `rotmat` mode this is a plain precision cast.
    ///
    /// # Errors
    ///
    /// Same as [`convert`](Self::convert).
    pub fn convert_from<S: RealField + Copy>(
        &self,
        rot: &RotationTensor<S>,
    ) -> RotationResult<Batch<Matrix3<T>>> {
        self.convert(&rot.cast())
    }
}

impl<T: RealField + Copy> fmt::Debug for RotationConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationConverter")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

fn identity_fn<T: RealField + Copy>(rot: &RotationTensor<T>) -> RotationResult<Batch<Matrix3<T>>> {
    match rot {
        RotationTensor::Matrix(mats) => Ok(mats.clone()),
        other => Err(mismatch(RotationMode::RotMat, other)),
    }
}

fn rotvec_fn<T: RealField + Copy>(rot: &RotationTensor<T>) -> RotationResult<Batch<Matrix3<T>>> {
    match rot {
        RotationTensor::RotationVector(rotvecs) => Ok(rotation_vectors_to_matrices(rotvecs)),
        other => Err(mismatch(RotationMode::RotVec, other)),
    }
}

fn quat_fn<T: RealField + Copy>(rot: &RotationTensor<T>) -> RotationResult<Batch<Matrix3<T>>> {
    match rot {
        RotationTensor::Quaternion(quats) => Ok(quaternions_to_matrices(quats)),
        other => Err(mismatch(RotationMode::Quat, other)),
    }
}

fn mismatch<T>(mode: RotationMode, actual: &RotationTensor<T>) -> RotationError {
    RotationError::RepresentationMismatch {
        mode,
        expected: mode.as_str(),
        actual: actual.kind(),
    }
}
