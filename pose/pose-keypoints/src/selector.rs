//! Landmark gathering from deformed mesh vertices.

use nalgebra::{RealField, Vector3};
use pose_types::{Batch, ShapeError};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{KeypointError, KeypointResult};
use crate::table::VertexIdTable;

/// Face landmarks, always selected.
pub const FACE_LANDMARKS: [&str; 5] = ["nose", "reye", "leye", "rear", "lear"];

/// Foot landmarks, selected when `use_feet_keypoints` is set.
pub const FEET_LANDMARKS: [&str; 6] = [
    "LBigToe",
    "LSmallToe",
    "LHeel",
    "RBigToe",
    "RSmallToe",
    "RHeel",
];

/// Fingertip landmarks, selected when `use_hands` is set. Left hand first.
pub const FINGERTIP_LANDMARKS: [&str; 10] = [
    "lthumb", "lindex", "lmiddle", "lring", "lpinky", "rthumb", "rindex", "rmiddle", "rring",
    "rpinky",
];

/// Which landmark groups a [`VertexJointSelector`] appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct VertexJointSelectorConfig {
    /// Append the 10 fingertip landmarks.
    pub use_hands: bool,
    /// Append the 6 foot landmarks.
    pub use_feet_keypoints: bool,
}

impl Default for VertexJointSelectorConfig {
    fn default() -> Self {
        Self {
            use_hands: true,
            use_feet_keypoints: true,
        }
    }
}

impl VertexJointSelectorConfig {
    /// Face landmarks only.
    #[must_use]
    pub const fn face_only() -> Self {
        Self {
            use_hands: false,
            use_feet_keypoints: false,
        }
    }

    /// Sets whether fingertips are appended.
    #[must_use]
    pub const fn with_hands(mut self, use_hands: bool) -> Self {
        self.use_hands = use_hands;
        self
    }

    /// Sets whether foot landmarks are appended.
    #[must_use]
    pub const fn with_feet_keypoints(mut self, use_feet_keypoints: bool) -> Self {
        self.use_feet_keypoints = use_feet_keypoints;
        self
    }
}

/// Appends landmark vertices to a joint set.
///
/// Landmarks are ordered face, then feet, then fingertips; the vertex indices
/// are resolved once at construction.
///
/// # Example
///
/// ```
/// use pose_keypoints::{VertexIdTable, VertexJointSelector, VertexJointSelectorConfig};
/// use pose_types::{Batch, Vector3};
///
/// let config = VertexJointSelectorConfig::default();
/// let selector = VertexJointSelector::new(&VertexIdTable::smplh(), config).unwrap();
/// assert_eq!(selector.len(), 21);
///
/// let vertices = Batch::new(vec![1, 6890], vec![Vector3::<f32>::zeros(); 6890]).unwrap();
/// let joints = Batch::new(vec![1, 52], vec![Vector3::zeros(); 52]).unwrap();
/// let all = selector.select(&vertices, &joints).unwrap();
/// assert_eq!(all.dims(), &[1, 73]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexJointSelector {
    names: Vec<&'static str>,
    indices: Vec<usize>,
}

impl VertexJointSelector {
    /// Resolves the configured landmarks against `table`.
    ///
    /// # Errors
    ///
    /// Returns [`KeypointError::MissingLandmark`] for the first required name
    /// absent from `table`.
    pub fn new(table: &VertexIdTable, config: VertexJointSelectorConfig) -> KeypointResult<Self> {
        let mut names: Vec<&'static str> = FACE_LANDMARKS.to_vec();
        if config.use_feet_keypoints {
            names.extend(FEET_LANDMARKS);
        }
        if config.use_hands {
            names.extend(FINGERTIP_LANDMARKS);
        }

        let indices = names
            .iter()
            .map(|&name| {
                let missing = || KeypointError::MissingLandmark {
                    name: name.to_string(),
                };
                table.get(name).ok_or_else(missing)
            })
            .collect::<KeypointResult<Vec<_>>>()?;

        debug!(
            landmarks = indices.len(),
            use_hands = config.use_hands,
            use_feet_keypoints = config.use_feet_keypoints,
            "vertex joint selector ready"
        );

        Ok(Self { names, indices })
    }

    /// Vertex indices in output order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Landmark names in output order.
    #[must_use]
    pub fn landmark_names(&self) -> &[&'static str] {
        &self.names
    }

    /// Number of appended landmarks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no landmarks are appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Gathers the landmark vertices and appends them after `joints`.
    ///
    /// `vertices` has dims `[batch, V]` and `joints` dims `[batch, J]`; the
    /// result has dims `[batch, J + K]` with `K = self.len()`. Neither input is
    /// modified. Batch rows are filled in parallel.
    ///
    /// # Errors
    ///
    /// - [`KeypointError::Shape`] if either input is not rank 2 or the batch sizes differ
    /// - [`KeypointError::VertexIndexOutOfRange`] if a landmark index is `>= V`
    pub fn select<T: RealField + Copy>(
        &self,
        vertices: &Batch<Vector3<T>>,
        joints: &Batch<Vector3<T>>,
    ) -> KeypointResult<Batch<Vector3<T>>> {
        vertices.ensure_rank(2)?;
        joints.ensure_rank(2)?;

        let (batch, vertex_count) = (vertices.dims()[0], vertices.dims()[1]);
        let joint_count = joints.dims()[1];
        if joints.dims()[0] != batch {
            return Err(ShapeError::Dimension {
                context: "joint batch size",
                axis: 0,
                expected: batch,
                actual: joints.dims()[0],
            }
            .into());
        }
        if let Some(&index) = self.indices.iter().find(|&&i| i >= vertex_count) {
            return Err(KeypointError::VertexIndexOutOfRange {
                index,
                vertex_count,
            });
        }

        let width = joint_count + self.indices.len();
        let mut out = vec![Vector3::zeros(); batch * width];
        if width > 0 {
            let (verts, joint_data) = (vertices.as_slice(), joints.as_slice());
            let rows = out.par_chunks_mut(width).enumerate();
            rows.for_each(|(b, row)| {
                let (joint_row, landmark_row) = row.split_at_mut(joint_count);
                joint_row.copy_from_slice(&joint_data[b * joint_count..(b + 1) * joint_count]);
                let vertex_row = &verts[b * vertex_count..(b + 1) * vertex_count];
                for (dst, &i) in landmark_row.iter_mut().zip(&self.indices) {
                    *dst = vertex_row[i];
                }
            });
        }

        Ok(Batch::new(vec![batch, width], out)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NUM_VERTICES: usize = 6890;

    fn vertex(b: usize, v: usize) -> Vector3<f64> {
        Vector3::new(b as f64, v as f64, (b * NUM_VERTICES + v) as f64 * 0.5)
    }

    fn vertices(batch: usize) -> Batch<Vector3<f64>> {
        let data = (0..batch)
            .flat_map(|b| (0..NUM_VERTICES).map(move |v| vertex(b, v)))
            .collect();
        Batch::new(vec![batch, NUM_VERTICES], data).unwrap()
    }

    fn joints(batch: usize, count: usize) -> Batch<Vector3<f64>> {
        let data = (0..batch * count).map(|i| Vector3::repeat(-(i as f64))).collect();
        Batch::new(vec![batch, count], data).unwrap()
    }

    fn selector(table: &VertexIdTable, config: VertexJointSelectorConfig) -> VertexJointSelector {
        VertexJointSelector::new(table, config).unwrap()
    }

    fn smplh_selector() -> VertexJointSelector {
        let config = VertexJointSelectorConfig::default();
        selector(&VertexIdTable::smplh(), config)
    }

    #[test]
    fn appends_all_landmarks_after_joints() {
        let selector = smplh_selector();
        let (v, j) = (vertices(2), joints(2, 52));
        let out = selector.select(&v, &j).unwrap();

        assert_eq!(out.dims(), &[2, 52 + 21]);
        for b in 0..2 {
            for k in 0..52 {
                assert_eq!(out.get(&[b, k]), j.get(&[b, k]));
            }
            for (k, &index) in selector.indices().iter().enumerate() {
                assert_relative_eq!(*out.get(&[b, 52 + k]).unwrap(), vertex(b, index));
            }
        }
    }

    #[test]
    fn every_batch_row_keeps_its_own_data() {
        let selector = smplh_selector();
        let batch = 9;
        let (v, j) = (vertices(batch), joints(batch, 3));
        let out = selector.select(&v, &j).unwrap();

        assert_eq!(out.dims(), &[batch, 3 + 21]);
        for (b, row) in out.outer_chunks().enumerate() {
            assert_eq!(row[0], Vector3::repeat(-((3 * b) as f64)));
            assert_eq!(row[2], Vector3::repeat(-((3 * b + 2) as f64)));
            let last = *selector.indices().last().unwrap();
            assert_eq!(row[3 + 20], vertex(b, last));
        }
    }

    #[test]
    fn empty_table_and_empty_batch() {
        let table: VertexIdTable = std::iter::empty::<(&str, usize)>().collect();
        let config = VertexJointSelectorConfig::face_only();
        let err = VertexJointSelector::new(&table, config).unwrap_err();
        assert!(matches!(err, KeypointError::MissingLandmark { .. }));

        let selector = smplh_selector();
        let out = selector.select(&vertices(0), &joints(0, 52)).unwrap();
        assert_eq!(out.dims(), &[0, 52 + 21]);
        assert!(out.is_empty());
    }

    #[test]
    fn landmarks_follow_face_feet_fingertip_order() {
        let selector = smplh_selector();
        let names = selector.landmark_names();
        assert_eq!(&names[..5], &FACE_LANDMARKS);
        assert_eq!(&names[5..11], &FEET_LANDMARKS);
        assert_eq!(&names[11..], &FINGERTIP_LANDMARKS);
        assert_eq!(&selector.indices()[..5], &[332, 6260, 2800, 4071, 583]);
        assert_eq!(selector.indices()[11], 2746);
    }

    #[test]
    fn disabled_groups_are_skipped() {
        let table = VertexIdTable::smplx();
        let config = VertexJointSelectorConfig::default();
        let face = selector(&table, VertexJointSelectorConfig::face_only());
        assert_eq!(face.len(), 5);

        let no_feet = selector(&table, config.with_feet_keypoints(false));
        assert_eq!(no_feet.len(), 15);
        assert_eq!(no_feet.landmark_names()[5], "lthumb");

        let no_hands = selector(&table, config.with_hands(false));
        assert_eq!(no_hands.len(), 11);
    }

    #[test]
    fn missing_landmark_fails_at_construction() {
        let table: VertexIdTable = FACE_LANDMARKS.iter().map(|&n| (n, 0)).collect();
        let config = VertexJointSelectorConfig::default();
        let err = VertexJointSelector::new(&table, config).unwrap_err();
        let expected = KeypointError::MissingLandmark {
            name: "LBigToe".to_string(),
        };
        assert_eq!(err, expected);

        // The same table is enough when only the face is needed
        let config = VertexJointSelectorConfig::face_only();
        assert!(VertexJointSelector::new(&table, config).is_ok());
    }

    #[test]
    fn inputs_are_not_modified() {
        let config = VertexJointSelectorConfig::face_only();
        let selector = selector(&VertexIdTable::smplh(), config);
        let (v, j) = (vertices(1), joints(1, 3));
        let (v_before, j_before) = (v.clone(), j.clone());
        let _ = selector.select(&v, &j).unwrap();
        assert_eq!(v, v_before);
        assert_eq!(j, j_before);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let config = VertexJointSelectorConfig::default();
        let selector = selector(&VertexIdTable::smplx(), config);
        let err = selector.select(&vertices(1), &joints(1, 4)).unwrap_err();
        let expected = KeypointError::VertexIndexOutOfRange {
            index: 9120,
            vertex_count: NUM_VERTICES,
        };
        assert_eq!(err, expected);
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let selector = smplh_selector();

        let err = selector.select(&vertices(2), &joints(3, 4)).unwrap_err();
        let KeypointError::Shape(ShapeError::Dimension { axis, .. }) = err else {
            panic!("expected a dimension error, got {err:?}");
        };
        assert_eq!(axis, 0);

        let flat = Batch::from_vec(vec![Vector3::<f64>::zeros(); 4]);
        let err = selector.select(&vertices(1), &flat).unwrap_err();
        let expected = ShapeError::Rank {
            expected: 2,
            actual: 1,
        };
        assert_eq!(err, KeypointError::Shape(expected));
    }
}
