//! Composition of per-joint hand rotation vectors.
//!
//! In `rotvec` mode a raw hand pose becomes 15 per-joint rotation vectors:
//!
//! ```text
//! full_pose = params · basis            (PCA enabled, basis is k × 45)
//! full_pose = params                    (PCA disabled, params are 45 wide)
//! joints[b, j] = full_pose[b, 3j..3j+3] + mean[j]
//! ```
//!
//! Other modes pass poses through unchanged.

use nalgebra::{DMatrix, Matrix3, RealField, Vector3};
use pose_rotation::{RotationConverter, RotationMode};
use pose_types::{Batch, RotationTensor};
use rayon::prelude::*;
use tracing::debug;

use crate::assets::{HandAssets, HandModelData};
use crate::config::HandPoseConfig;
use crate::error::{HandError, HandResult};
use crate::side::{HandSide, Hands};
use crate::{HAND_POSE_DIM, NUM_HAND_JOINTS};

/// A hand pose in one of the layouts a composer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum HandPose<T> {
    /// Flat parameters, one row per batch element: PCA coefficients when PCA
    /// is enabled, otherwise `HAND_POSE_DIM` rotation-vector components.
    Params(DMatrix<T>),
    /// Per-joint rotations.
    Rotations(RotationTensor<T>),
}

impl<T> HandPose<T> {
    fn describe(&self) -> String {
        match self {
            Self::Params(params) => {
                format!("{}x{} parameter matrix", params.nrows(), params.ncols())
            }
            Self::Rotations(rot) => format!("{} tensor with dims {:?}", rot.kind(), rot.dims()),
        }
    }
}

/// Buffers fixed at construction for one hand.
#[derive(Debug, Clone)]
struct HandBuffers<T> {
    /// Truncated PCA basis; only kept when PCA is enabled.
    components: Option<DMatrix<T>>,
    mean: [Vector3<T>; NUM_HAND_JOINTS],
}

impl<T: RealField + Copy> HandBuffers<T> {
    /// Buffers for `side` when the configuration covers it.
    fn for_side(
        side: HandSide,
        config: &HandPoseConfig,
        data: &HandModelData<T>,
    ) -> HandResult<Option<Self>> {
        let configured = match side {
            HandSide::Left => config.side.includes_left(),
            HandSide::Right => config.side.includes_right(),
            HandSide::Both => false,
        };
        match data.side(side) {
            Some(assets) if configured => Self::new(side, assets, config).map(Some),
            _ => Ok(None),
        }
    }

    fn new(side: HandSide, assets: &HandAssets<T>, config: &HandPoseConfig) -> HandResult<Self> {
        if assets.mean.len() != HAND_POSE_DIM {
            return Err(HandError::InvalidAssets {
                side,
                reason: format!(
                    "mean pose has {} values, expected {HAND_POSE_DIM}",
                    assets.mean.len()
                ),
            });
        }

        let components = if config.use_pca {
            let basis = &assets.components;
            if basis.ncols() != HAND_POSE_DIM {
                return Err(HandError::InvalidAssets {
                    side,
                    reason: format!(
                        "PCA basis has {} columns, expected {HAND_POSE_DIM}",
                        basis.ncols()
                    ),
                });
            }
            let num_comps = config.num_pca_comps.min(basis.nrows());
            Some(basis.rows(0, num_comps).into_owned())
        } else {
            None
        };

        let mean = if config.flat_hand_mean {
            [Vector3::zeros(); NUM_HAND_JOINTS]
        } else {
            let m = &assets.mean;
            std::array::from_fn(|j| Vector3::new(m[3 * j], m[3 * j + 1], m[3 * j + 2]))
        };

        Ok(Self { components, mean })
    }
}

/// Turns raw hand pose parameters into per-joint rotation vectors.
///
/// Buffers exist only for the configured side(s); the PCA basis is kept only
/// when PCA is enabled. Everything is fixed at construction.
///
/// # Example
///
/// ```
/// use pose_hand::{HandAssets, HandModelData, HandPose, HandPoseComposer, HandPoseConfig};
/// use pose_hand::{HandSide, Hands};
/// use pose_rotation::RotationMode;
/// use pose_types::{DMatrix, RotationTensor};
///
/// let data = HandModelData::new(HandAssets::<f64>::identity(), HandAssets::identity());
/// let config = HandPoseConfig::new(RotationMode::RotVec, HandSide::Left);
/// let composer = HandPoseComposer::new(config, &data).unwrap();
///
/// let out = composer
///     .compose(Hands::Left(HandPose::Params(DMatrix::zeros(2, 45))))
///     .unwrap();
///
/// match out.left() {
///     Some(HandPose::Rotations(RotationTensor::RotationVector(joints))) => {
///         assert_eq!(joints.dims(), &[2, 15]);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HandPoseComposer<T: RealField + Copy> {
    config: HandPoseConfig,
    converter: RotationConverter<T>,
    left: Option<HandBuffers<T>>,
    right: Option<HandBuffers<T>>,
}

impl<T: RealField + Copy> HandPoseComposer<T> {
    /// Creates a composer, copying the buffers it needs out of `data`.
    ///
    /// # Errors
    ///
    /// - [`HandError::Rotation`] if the rotation mode is unsupported
    /// - [`HandError::InvalidAssets`] if a configured side's mean pose or PCA
    ///   basis does not have `HAND_POSE_DIM` entries per row
    pub fn new(config: HandPoseConfig, data: &HandModelData<T>) -> HandResult<Self> {
        let converter = RotationConverter::new(config.rot_mode)?;

        let left = HandBuffers::for_side(HandSide::Left, &config, data)?;
        let right = HandBuffers::for_side(HandSide::Right, &config, data)?;

        debug!(
            rot_mode = %config.rot_mode,
            side = %config.side,
            use_pca = config.use_pca,
            num_pca_comps = config.num_pca_comps,
            flat_hand_mean = config.flat_hand_mean,
            "hand pose composer ready"
        );

        Ok(Self {
            config,
            converter,
            left,
            right,
        })
    }

    /// Parses the mode and side names, then builds the composer.
    ///
    /// # Errors
    ///
    /// Configuration errors for invalid names, plus everything [`new`](Self::new) returns.
    pub fn from_names(rot_mode: &str, side: &str, data: &HandModelData<T>) -> HandResult<Self> {
        Self::new(HandPoseConfig::from_names(rot_mode, side)?, data)
    }

    /// The configuration this composer was built with.
    #[must_use]
    pub const fn config(&self) -> &HandPoseConfig {
        &self.config
    }

    /// The rotation converter for the configured mode.
    #[must_use]
    pub const fn converter(&self) -> &RotationConverter<T> {
        &self.converter
    }

    /// Mean pose added to `side`'s joints, if that side is configured.
    #[must_use]
    pub fn mean_pose(&self, side: HandSide) -> Option<&[Vector3<T>; NUM_HAND_JOINTS]> {
        self.buffers(side).map(|b| &b.mean)
    }

    /// Truncated PCA basis of `side`, if PCA is enabled and the side configured.
    #[must_use]
    pub fn pca_basis(&self, side: HandSide) -> Option<&DMatrix<T>> {
        self.buffers(side).and_then(|b| b.components.as_ref())
    }

    fn buffers(&self, side: HandSide) -> Option<&HandBuffers<T>> {
        match side {
            HandSide::Left => self.left.as_ref(),
            HandSide::Right => self.right.as_ref(),
            HandSide::Both => None,
        }
    }

    /// Composes per-joint rotation vectors for the configured side(s).
    ///
    /// In `rotvec` mode every present pose becomes a
    /// [`RotationTensor::RotationVector`] with dims `[batch, 15]`. In any other
    /// mode the poses are returned unchanged.
    ///
    /// # Errors
    ///
    /// - [`HandError::SideMismatch`] if `pose` does not cover exactly the configured side(s)
    /// - [`HandError::PoseShape`] if a pose has the wrong layout for the PCA setting
    pub fn compose(&self, pose: Hands<HandPose<T>>) -> HandResult<Hands<HandPose<T>>> {
        if pose.side() != self.config.side {
            return Err(HandError::SideMismatch {
                expected: self.config.side,
                actual: pose.side(),
            });
        }
        if self.config.rot_mode != RotationMode::RotVec {
            return Ok(pose);
        }

        pose.try_map(|side, p| {
            let rotvecs = self.compose_side(side, p)?;
            Ok(HandPose::Rotations(RotationTensor::RotationVector(rotvecs)))
        })
    }

    /// Composes the poses, then converts them to rotation matrices.
    ///
    /// # Errors
    ///
    /// Everything [`compose`](Self::compose) returns, [`HandError::PoseShape`]
    /// for flat parameters outside `rotvec` mode, and conversion errors.
    pub fn to_matrices(&self, pose: Hands<HandPose<T>>) -> HandResult<Hands<Batch<Matrix3<T>>>> {
        let composed = self.compose(pose)?;
        composed.try_map(|side, p| match p {
            HandPose::Rotations(rot) => Ok(self.converter.convert(&rot)?),
            params @ HandPose::Params(_) => Err(HandError::PoseShape {
                side,
                expected: format!("{} rotations", self.config.rot_mode),
                actual: params.describe(),
            }),
        })
    }

    fn compose_side(&self, side: HandSide, pose: HandPose<T>) -> HandResult<Batch<Vector3<T>>> {
        let Some(buffers) = self.buffers(side) else {
            return Err(HandError::SideMismatch {
                expected: self.config.side,
                actual: side,
            });
        };

        let mut joints = match (pose, &buffers.components) {
            (HandPose::Params(params), Some(basis)) => {
                if params.ncols() != basis.nrows() {
                    return Err(HandError::PoseShape {
                        side,
                        expected: format!("{} PCA coefficients per row", basis.nrows()),
                        actual: format!("{} columns", params.ncols()),
                    });
                }
                rows_to_joints(&(params * basis))
            }
            (HandPose::Params(params), None) => {
                if params.ncols() != HAND_POSE_DIM {
                    return Err(HandError::PoseShape {
                        side,
                        expected: format!("{HAND_POSE_DIM} rotation-vector components per row"),
                        actual: format!("{} columns", params.ncols()),
                    });
                }
                rows_to_joints(&params)
            }
            (HandPose::Rotations(RotationTensor::RotationVector(rotvecs)), None) => {
                let batch = rotvecs.len() / NUM_HAND_JOINTS;
                rotvecs.reshape(vec![batch, NUM_HAND_JOINTS])?
            }
            (other, components) => {
                let expected = if components.is_some() {
                    "PCA coefficients".to_string()
                } else {
                    "rotation-vector parameters".to_string()
                };
                return Err(HandError::PoseShape {
                    side,
                    expected,
                    actual: other.describe(),
                });
            }
        };

        add_mean_pose(&mut joints, &buffers.mean);
        Ok(joints)
    }
}

/// Splits a `(batch × 45)` matrix into `[batch, 15]` rotation vectors.
fn rows_to_joints<T: RealField + Copy>(full_pose: &DMatrix<T>) -> Batch<Vector3<T>> {
    let dims = vec![full_pose.nrows(), NUM_HAND_JOINTS];
    Batch::from_fn(dims, |i| {
        let row = full_pose.row(i / NUM_HAND_JOINTS);
        let c = 3 * (i % NUM_HAND_JOINTS);
        Vector3::new(row[c], row[c + 1], row[c + 2])
    })
}

fn add_mean_pose<T: RealField + Copy>(
    joints: &mut Batch<Vector3<T>>,
    mean: &[Vector3<T>; NUM_HAND_JOINTS],
) {
    let data = joints.as_mut_slice();
    data.par_chunks_mut(NUM_HAND_JOINTS).for_each(|hand| {
        for (joint, offset) in hand.iter_mut().zip(mean) {
            *joint += offset;
        }
    });
}
