//! Frequency metric implementation.

use polars::prelude::*;
use rfmkit_traits::{ConfigurableMetric, Metric, MetricError, MetricKind};

/// Configuration for the frequency metric.
#[derive(Debug, Clone)]
pub struct FrequencyConfig {
    /// Customer key columns.
    pub keys: Vec<String>,
    /// Column whose non-null values are counted.
    pub value_column: String,
    /// Name of the output column.
    pub output_column: String,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            keys: vec!["ID".to_string()],
            value_column: "PRICE".to_string(),
            output_column: MetricKind::Frequency.to_string(),
        }
    }
}

/// Frequency metric: number of non-null `value_column` entries per key.
#[derive(Debug, Clone)]
pub struct FrequencyMetric {
    config: FrequencyConfig,
}

impl FrequencyMetric {
    /// Create a new frequency metric with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FrequencyConfig::default())
    }
}

impl Default for FrequencyMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for FrequencyMetric {
    fn name(&self) -> &str {
        &self.config.output_column
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Frequency
    }

    fn required_columns(&self) -> Vec<&str> {
        let mut cols: Vec<&str> = self.config.keys.iter().map(String::as_str).collect();
        cols.push(&self.config.value_column);
        cols
    }

    fn compute(&self, data: &DataFrame) -> Result<DataFrame, MetricError> {
        let cfg = &self.config;
        if cfg.keys.is_empty() {
            return Err(MetricError::InvalidConfig("frequency needs at least one key".into()));
        }
        self.check_columns(data)?;

        let key_exprs: Vec<Expr> = cfg.keys.iter().map(|k| col(k.as_str())).collect();
        let result = data
            .clone()
            .lazy()
            .group_by_stable(key_exprs)
            .agg([col(cfg.value_column.as_str())
                .count()
                .cast(DataType::Int64)
                .alias(cfg.output_column.as_str())])
            .collect()?;

        tracing::info!(customers = result.height(), rows = data.height(), "frequency computed");

        Ok(result)
    }
}

impl ConfigurableMetric for FrequencyMetric {
    type Config = FrequencyConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
