//! Hand pose composer configuration.

use pose_rotation::RotationMode;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::HandResult;
use crate::HandSide;

/// Default number of PCA components kept per hand.
pub const DEFAULT_NUM_PCA_COMPS: usize = 10;

/// Construction-time settings of a [`HandPoseComposer`](crate::HandPoseComposer).
///
/// # Example
///
/// ```
/// use pose_hand::{HandPoseConfig, HandSide};
/// use pose_rotation::RotationMode;
///
/// let config = HandPoseConfig::default()
///     .with_rot_mode(RotationMode::RotVec)
///     .with_side(HandSide::Left)
///     .with_pca(12);
///
/// assert!(config.use_pca);
/// assert_eq!(config.num_pca_comps, 12);
/// assert!(config.flat_hand_mean);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HandPoseConfig {
    /// Representation of the hand rotations.
    pub rot_mode: RotationMode,
    /// Hand(s) handled.
    pub side: HandSide,
    /// Whether poses are given as PCA coefficients.
    pub use_pca: bool,
    /// Number of PCA components kept when `use_pca` is set.
    pub num_pca_comps: usize,
    /// Use an all-zero mean pose instead of the model's stored mean.
    pub flat_hand_mean: bool,
}

impl Default for HandPoseConfig {
    fn default() -> Self {
        Self {
            rot_mode: RotationMode::RotMat,
            side: HandSide::Both,
            use_pca: false,
            num_pca_comps: DEFAULT_NUM_PCA_COMPS,
            flat_hand_mean: true,
        }
    }
}

impl HandPoseConfig {
    /// Creates a config with the given mode and side and default PCA settings.
    #[must_use]
    pub const fn new(rot_mode: RotationMode, side: HandSide) -> Self {
        Self {
            rot_mode,
            side,
            use_pca: false,
            num_pca_comps: DEFAULT_NUM_PCA_COMPS,
            flat_hand_mean: true,
        }
    }

    /// Parses the mode and side from their configuration names.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the first invalid value. The
    /// rotation mode is checked before the side.
    pub fn from_names(rot_mode: &str, side: &str) -> HandResult<Self> {
        let rot_mode: RotationMode = rot_mode.parse()?;
        let side: HandSide = side.parse()?;
        Ok(Self::new(rot_mode, side))
    }

    /// Sets the rotation mode.
    #[must_use]
    pub const fn with_rot_mode(mut self, rot_mode: RotationMode) -> Self {
        self.rot_mode = rot_mode;
        self
    }

    /// Sets the side.
    #[must_use]
    pub const fn with_side(mut self, side: HandSide) -> Self {
        self.side = side;
        self
    }

    /// Enables PCA with `num_pca_comps` components.
    #[must_use]
    pub const fn with_pca(mut self, num_pca_comps: usize) -> Self {
        self.use_pca = true;
        self.num_pca_comps = num_pca_comps;
        self
    }

    /// Disables PCA; poses are given per joint.
    #[must_use]
    pub const fn without_pca(mut self) -> Self {
        self.use_pca = false;
        self
    }

    /// Selects between the flat (zero) and the stored mean pose.
    #[must_use]
    pub const fn with_flat_hand_mean(mut self, flat_hand_mean: bool) -> Self {
        self.flat_hand_mean = flat_hand_mean;
        self
    }
}
