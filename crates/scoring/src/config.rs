//! Grading configuration surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Strategy value in `rfm_tick_point`: a tag or an explicit cut point list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickPoint {
    /// `"quantile"` or `"min_max"`.
    Tag(String),
    /// Explicit ascending cut points.
    Points(Vec<f64>),
}

impl From<&str> for TickPoint {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_string())
    }
}

impl From<Vec<f64>> for TickPoint {
    fn from(points: Vec<f64>) -> Self {
        Self::Points(points)
    }
}

/// Grading configuration, as read from a config file.
///
/// ```json
/// {
///   "num_class": 5,
///   "rfm_tick_point": { "R": "quantile", "F": "min_max", "M": [10, 100, 1000, 5000] },
///   "rfm_col_map": { "R": "recency", "F": "frequency", "M": "monetary" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeConfig {
    /// Number of ordinal grades.
    pub num_class: usize,
    /// Binning strategy per metric key.
    pub rfm_tick_point: BTreeMap<String, TickPoint>,
    /// Source column per metric key.
    pub rfm_col_map: BTreeMap<String, String>,
    /// Replaces the metric key in output column names.
    #[serde(default)]
    pub suffix: Option<String>,
}

impl GradeConfig {
    /// Create a configuration with no metrics.
    #[must_use]
    pub const fn new(num_class: usize) -> Self {
        Self {
            num_class,
            rfm_tick_point: BTreeMap::new(),
            rfm_col_map: BTreeMap::new(),
            suffix: None,
        }
    }

    /// Add a metric, builder style.
    #[must_use]
    pub fn metric(
        mut self,
        key: impl Into<String>,
        column: impl Into<String>,
        tick_point: impl Into<TickPoint>,
    ) -> Self {
        let key = key.into();
        self.rfm_tick_point.insert(key.clone(), tick_point.into());
        self.rfm_col_map.insert(key, column.into());
        self
    }

    /// Set the suffix override, builder style.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

impl Default for GradeConfig {
    /// Quantile deciles over `recency`, `frequency` and `monetary`.
    fn default() -> Self {
        Self::new(10)
            .metric("R", "recency", "quantile")
            .metric("F", "frequency", "quantile")
            .metric("M", "monetary", "quantile")
    }
}
