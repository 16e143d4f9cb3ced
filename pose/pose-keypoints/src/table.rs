//! Landmark name to vertex index tables.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps landmark names to mesh vertex indices.
///
/// Tables ship with the mesh model; [`smplh`](Self::smplh) and
/// [`smplx`](Self::smplx) carry the standard ids of those topologies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct VertexIdTable(HashMap<String, usize>);

impl VertexIdTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex index of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.get(name).copied()
    }

    /// Sets the vertex index of `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, index: usize) -> Option<usize> {
        self.0.insert(name.into(), index)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Landmark ids of the SMPL-H topology (6890 vertices).
    #[must_use]
    pub fn smplh() -> Self {
        [
            ("nose", 332),
            ("reye", 6260),
            ("leye", 2800),
            ("rear", 4071),
            ("lear", 583),
            ("rthumb", 6191),
            ("rindex", 5782),
            ("rmiddle", 5905),
            ("rring", 6016),
            ("rpinky", 6133),
            ("lthumb", 2746),
            ("lindex", 2319),
            ("lmiddle", 2445),
            ("lring", 2556),
            ("lpinky", 2673),
            ("LBigToe", 3216),
            ("LSmallToe", 3226),
            ("LHeel", 3387),
            ("RBigToe", 6617),
            ("RSmallToe", 6624),
            ("RHeel", 6787),
        ]
        .into_iter()
        .collect()
    }

    /// Landmark ids of the SMPL-X topology (10475 vertices).
    #[must_use]
    pub fn smplx() -> Self {
        [
            ("nose", 9120),
            ("reye", 9929),
            ("leye", 9448),
            ("rear", 616),
            ("lear", 6),
            ("rthumb", 8079),
            ("rindex", 7669),
            ("rmiddle", 7794),
            ("rring", 7905),
            ("rpinky", 8022),
            ("lthumb", 5361),
            ("lindex", 4933),
            ("lmiddle", 5058),
            ("lring", 5169),
            ("lpinky", 5286),
            ("LBigToe", 5770),
            ("LSmallToe", 5780),
            ("LHeel", 8846),
            ("RBigToe", 8463),
            ("RSmallToe", 8474),
            ("RHeel", 8635),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for VertexIdTable {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        let entries = iter.into_iter().map(|(name, index)| (name.into(), index));
        Self(entries.collect())
    }
}

impl From<HashMap<String, usize>> for VertexIdTable {
    fn from(map: HashMap<String, usize>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn presets_cover_every_landmark() {
        for table in [VertexIdTable::smplh(), VertexIdTable::smplx()] {
            assert_eq!(table.len(), 21);
        }
        assert_eq!(VertexIdTable::smplh().get("nose"), Some(332));
        assert_eq!(VertexIdTable::smplx().get("RHeel"), Some(8635));
    }

    #[test]
    fn insert_replaces_entry() {
        let mut table = VertexIdTable::new();
        assert!(table.is_empty());
        assert_eq!(table.insert("nose", 1), None);
        assert_eq!(table.insert("nose", 2), Some(1));
        assert_eq!(table.get("nose"), Some(2));
        assert_eq!(table.get("lear"), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_map() {
        let table: VertexIdTable = serde_json::from_str(r#"{"nose": 12, "LHeel": 7}"#).unwrap();
        assert_eq!(table.get("nose"), Some(12));
        assert_eq!(table.get("LHeel"), Some(7));

        let table: VertexIdTable = [("reye", 3)].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"reye":3}"#);
    }
}
