//! Recency metric implementation.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use polars::prelude::*;
use rfmkit_traits::{ConfigurableMetric, Metric, MetricError, MetricKind};

use crate::{DEFAULT_DATE_FORMAT, dates::parse_timestamps};

/// Days subtracted from every recency value.
pub const DEFAULT_OFFSET_DAYS: i64 = 16;

/// Configuration for the recency metric.
#[derive(Debug, Clone)]
pub struct RecencyConfig {
    /// Customer key columns.
    pub keys: Vec<String>,
    /// Purchase timestamp column.
    pub timestamp_column: String,
    /// Point in time recency is measured against.
    pub reference: NaiveDateTime,
    /// Format tried before free-form parsing.
    pub date_format: String,
    /// Days subtracted from the raw day difference.
    pub offset_days: i64,
    /// Name of the output column.
    pub output_column: String,
}

impl RecencyConfig {
    /// Create a configuration measured against midnight of `reference_date`.
    #[must_use]
    pub fn new(
        keys: Vec<String>,
        timestamp_column: impl Into<String>,
        reference_date: NaiveDate,
    ) -> Self {
        Self {
            keys,
            timestamp_column: timestamp_column.into(),
            reference: reference_date.and_time(chrono::NaiveTime::MIN),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            offset_days: DEFAULT_OFFSET_DAYS,
            output_column: MetricKind::Recency.to_string(),
        }
    }
}

impl Default for RecencyConfig {
    /// Keys `["ID"]`, timestamps in `DT`, measured against today.
    fn default() -> Self {
        Self::new(vec!["ID".to_string()], "DT", chrono::Local::now().date_naive())
    }
}

/// Recency metric.
///
/// For each key, takes the latest purchase and reports
/// `floor((last - reference) / 1 day) - offset_days`. Rows come out ordered
/// by recency, ties in order of first appearance.
#[derive(Debug, Clone)]
pub struct RecencyMetric {
    config: RecencyConfig,
}

impl Metric for RecencyMetric {
    fn name(&self) -> &str {
        &self.config.output_column
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Recency
    }

    fn required_columns(&self) -> Vec<&str> {
        let mut cols: Vec<&str> = self.config.keys.iter().map(String::as_str).collect();
        cols.push(&self.config.timestamp_column);
        cols
    }

    fn compute(&self, data: &DataFrame) -> Result<DataFrame, MetricError> {
        let cfg = &self.config;
        if cfg.keys.is_empty() {
            return Err(MetricError::InvalidConfig("recency needs at least one key".into()));
        }
        self.check_columns(data)?;

        let timestamps = parse_timestamps(data.column(&cfg.timestamp_column)?, &cfg.date_format)?;

        // Day difference is monotone in the timestamp, so the max per key is
        // the value of the latest purchase.
        let days: Vec<i64> = timestamps
            .iter()
            .map(|ts| floor_days(*ts - cfg.reference) - cfg.offset_days)
            .collect();

        let mut keyed = data.select(cfg.keys.iter().map(String::as_str))?;
        keyed.with_column(Column::new(cfg.output_column.as_str().into(), days))?;

        let key_exprs: Vec<Expr> = cfg.keys.iter().map(|k| col(k.as_str())).collect();
        let result = keyed
            .lazy()
            .group_by_stable(key_exprs)
            .agg([col(cfg.output_column.as_str()).max()])
            .sort(
                [cfg.output_column.as_str()],
                SortMultipleOptions::new().with_maintain_order(true),
            )
            .collect()?;

        tracing::info!(customers = result.height(), rows = data.height(), "recency computed");

        Ok(result)
    }
}

/// Whole days in `delta`, rounded toward negative infinity.
fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    if delta < TimeDelta::days(days) { days - 1 } else { days }
}

impl ConfigurableMetric for RecencyMetric {
    type Config = RecencyConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
