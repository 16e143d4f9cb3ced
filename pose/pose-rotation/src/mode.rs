//! Rotation input modes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::RotationError;

/// Representation of the rotations fed to a [`RotationConverter`](crate::RotationConverter).
///
/// Every mode produces rotation matrices. `Ortho6d` is recognized so that
/// configurations naming it parse, but constructing a converter with it fails
/// with [`RotationError::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum RotationMode {
    /// Rotation matrices, passed through unchanged.
    #[default]
    RotMat,
    /// Axis-angle rotation vectors.
    RotVec,
    /// Quaternions, real part first.
    Quat,
    /// Continuous 6D representation (not implemented).
    Ortho6d,
}

impl RotationMode {
    /// All recognized modes.
    pub const ALL: [Self; 4] = [Self::RotMat, Self::RotVec, Self::Quat, Self::Ortho6d];

    /// Configuration name of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RotMat => "rotmat",
            Self::RotVec => "rotvec",
            Self::Quat => "quat",
            Self::Ortho6d => "ortho6d",
        }
    }
}

impl fmt::Display for RotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotationMode {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rotmat" => Ok(Self::RotMat),
            "rotvec" => Ok(Self::RotVec),
            "quat" => Ok(Self::Quat),
            "ortho6d" => Ok(Self::Ortho6d),
            _ => {
                error!(rot_mode = s, "unsupported rot_mode");
                Err(RotationError::InvalidMode(s.to_string()))
            }
        }
    }
}
