//! Pipeline configuration.

use std::{collections::BTreeMap, fs, path::Path};

use chrono::NaiveDate;
use rfmkit_metrics::{
    DEFAULT_DATE_FORMAT, DEFAULT_OFFSET_DAYS, FrequencyConfig, MonetaryConfig, MonetaryKey,
    RecencyConfig,
};
use rfmkit_primitives::WeightMap;
use rfmkit_scoring::GradeConfig;
use serde::{Deserialize, Serialize};

use crate::PipelineError;

/// Everything needed to go from transaction rows to scored customers.
///
/// Every field has a default, so a config file only lists what differs:
///
/// ```json
/// {
///   "reference_date": "2022-02-16",
///   "grade": {
///     "num_class": 10,
///     "rfm_tick_point": { "R": "quantile", "F": "quantile", "M": "quantile" },
///     "rfm_col_map": { "R": "recency", "F": "frequency", "M": "monetary" }
///   },
///   "weight_point": { "recency_R": 0.5, "frequency_F": 0.2, "monetary_M": 0.3 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Customer key columns.
    pub keys: Vec<String>,
    /// Purchase timestamp column.
    pub timestamp_column: String,
    /// Purchase price column.
    pub price_column: String,
    /// Optional quantity column multiplied into the monetary total.
    pub quantity_column: Option<String>,
    /// Date recency is measured against.
    pub reference_date: NaiveDate,
    /// Timestamp format tried before free-form parsing.
    pub date_format: String,
    /// Days subtracted from every recency value.
    pub recency_offset_days: i64,
    /// Key column to group monetary totals on; the most distinct key if unset.
    pub monetary_key: Option<String>,
    /// Per metric column fill for customers missing from a metric table.
    /// Columns not listed are zero-filled, `null` keeps the gap.
    pub merge_fill: BTreeMap<String, Option<f64>>,
    /// Grading configuration.
    pub grade: GradeConfig,
    /// Score weight per grade column.
    pub weight_point: WeightMap,
    /// Grade columns to report raw value ranges for.
    pub range_columns: Vec<String>,
}

impl PipelineConfig {
    /// Parse a JSON config.
    ///
    /// # Errors
    /// Returns `PipelineError::ConfigFormat` if the text is not a valid config.
    pub fn from_json(text: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a JSON config file.
    ///
    /// # Errors
    /// Returns `PipelineError::ConfigIo` if the file cannot be read and
    /// `PipelineError::ConfigFormat` if it is not a valid config.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|source| PipelineError::ConfigIo { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }

    /// Recency metric settings.
    #[must_use]
    pub fn recency(&self) -> RecencyConfig {
        let mut config =
            RecencyConfig::new(self.keys.clone(), self.timestamp_column.as_str(), self.reference_date);
        config.date_format.clone_from(&self.date_format);
        config.offset_days = self.recency_offset_days;
        config
    }

    /// Frequency metric settings.
    #[must_use]
    pub fn frequency(&self) -> FrequencyConfig {
        FrequencyConfig {
            keys: self.keys.clone(),
            value_column: self.price_column.clone(),
            ..FrequencyConfig::default()
        }
    }

    /// Monetary metric settings.
    #[must_use]
    pub fn monetary(&self) -> MonetaryConfig {
        MonetaryConfig {
            keys: self.keys.clone(),
            price_column: self.price_column.clone(),
            quantity_column: self.quantity_column.clone(),
            key: self
                .monetary_key
                .clone()
                .map_or(MonetaryKey::MostDistinct, MonetaryKey::Column),
            ..MonetaryConfig::default()
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            keys: vec!["ID".to_string()],
            timestamp_column: "DT".to_string(),
            price_column: "PRICE".to_string(),
            quantity_column: None,
            reference_date: chrono::Local::now().date_naive(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            recency_offset_days: DEFAULT_OFFSET_DAYS,
            monetary_key: None,
            merge_fill: BTreeMap::new(),
            grade: GradeConfig::default(),
            weight_point: WeightMap::new()
                .with("recency_R", 0.5)
                .with("frequency_F", 0.2)
                .with("monetary_M", 0.3),
            range_columns: vec!["monetary_M".to_string()],
        }
    }
}
