//! Bidirectional lookup between external identifiers and dense matrix indices.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use crate::error::ModelError;

/// Identifier as stored in an index-keyed JSON map: a string, or an integer
/// id exported straight from a numeric dataframe column (`{"0": 276725}`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Index → id in a `Vec`, id → index in a `HashMap` built once at load.
///
/// If an id occurs more than once the first occurrence owns the reverse
/// lookup; later duplicates stay reachable by index only.
#[derive(Debug, Clone)]
pub struct IdMap {
    ids: Vec<String>,
    index: HashMap<String, usize>,
}

impl IdMap {
    /// Build from ids in index order. `label` only names the axis in log output.
    pub fn from_ids(label: &'static str, ids: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(ids.len());

        for (i, id) in ids.iter().enumerate() {
            if let Some(&first) = index.get(id.as_str()) {
                tracing::warn!(axis = label, id = %id, first, duplicate = i, "duplicate identifier");
                continue;
            }
            index.insert(id.clone(), i);
        }

        Self { ids, index }
    }

    /// Build from an index-keyed map that must cover `0..len` exactly.
    pub fn from_indexed<V: Into<String>>(
        label: &'static str,
        map: BTreeMap<usize, V>,
    ) -> Result<Self, ModelError> {
        let len = map.len();

        for (expected, &key) in map.keys().enumerate() {
            if key != expected {
                return Err(ModelError::IndexGap {
                    name: label,
                    missing: expected,
                    len,
                });
            }
        }

        Ok(Self::from_ids(label, map.into_values().map(Into::into).collect()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    /// Ids in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}
