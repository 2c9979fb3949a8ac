//! Weight type definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per grade column weights for a composite score.
///
/// Columns are kept in name order so the sum is computed in a stable order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<String, f64>);

impl WeightMap {
    /// Create an empty weight map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a weight, builder style.
    #[must_use]
    pub fn with(mut self, column: impl Into<String>, weight: f64) -> Self {
        self.0.insert(column.into(), weight);
        self
    }

    /// Insert or replace the weight for a column.
    pub fn insert(&mut self, column: impl Into<String>, weight: f64) -> Option<f64> {
        self.0.insert(column.into(), weight)
    }

    /// Get the weight for a column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<f64> {
        self.0.get(column).copied()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(column, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Number of weighted columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
