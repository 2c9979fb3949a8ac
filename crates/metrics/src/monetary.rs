//! Monetary metric implementation.

use polars::prelude::*;
use rfmkit_traits::{ConfigurableMetric, Metric, MetricError, MetricKind};

use crate::numeric::ensure_numeric;

/// How the grouping key is chosen among the configured key columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MonetaryKey {
    /// The key column with the most distinct values. Ties go to the column
    /// listed first. This guesses the most granular identifier and can pick
    /// the wrong one when two columns happen to have equal cardinality.
    #[default]
    MostDistinct,
    /// A named key column.
    Column(String),
}

/// Configuration for the monetary metric.
#[derive(Debug, Clone)]
pub struct MonetaryConfig {
    /// Customer key columns, kept in the output.
    pub keys: Vec<String>,
    /// Unit price column.
    pub price_column: String,
    /// Optional quantity multiplier column.
    pub quantity_column: Option<String>,
    /// Which key column to group on.
    pub key: MonetaryKey,
    /// Name of the output column.
    pub output_column: String,
}

impl Default for MonetaryConfig {
    fn default() -> Self {
        Self {
            keys: vec!["ID".to_string()],
            price_column: "PRICE".to_string(),
            quantity_column: None,
            key: MonetaryKey::default(),
            output_column: MetricKind::Monetary.to_string(),
        }
    }
}

/// Monetary metric: total of `price` (or `price * quantity`) per key.
///
/// All matching rows count, duplicates included. Non-grouping key columns
/// keep their last value within each group.
#[derive(Debug, Clone)]
pub struct MonetaryMetric {
    config: MonetaryConfig,
}

impl MonetaryMetric {
    /// Create a new monetary metric with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MonetaryConfig::default())
    }

    /// Resolve the grouping key column.
    ///
    /// # Errors
    /// Returns `MetricError::InvalidConfig` if there are no keys or the
    /// explicit key is not one of them.
    pub fn grouping_key(&self, data: &DataFrame) -> Result<String, MetricError> {
        let cfg = &self.config;
        match &cfg.key {
            MonetaryKey::Column(name) => {
                if cfg.keys.contains(name) {
                    Ok(name.clone())
                } else {
                    Err(MetricError::InvalidConfig(format!(
                        "monetary key {name} is not one of {:?}",
                        cfg.keys
                    )))
                }
            }
            MonetaryKey::MostDistinct => {
                let mut best: Option<(&str, usize)> = None;
                for key in &cfg.keys {
                    let n = data.column(key)?.as_materialized_series().n_unique()?;
                    if best.is_none_or(|(_, most)| n > most) {
                        best = Some((key.as_str(), n));
                    }
                }
                best.map(|(key, _)| key.to_string()).ok_or_else(|| {
                    MetricError::InvalidConfig("monetary needs at least one key".into())
                })
            }
        }
    }
}

impl Default for MonetaryMetric {
    fn default() -> Self {
        Self::new()
    }
}

impl Metric for MonetaryMetric {
    fn name(&self) -> &str {
        &self.config.output_column
    }

    fn kind(&self) -> MetricKind {
        MetricKind::Monetary
    }

    fn required_columns(&self) -> Vec<&str> {
        let cfg = &self.config;
        let mut cols: Vec<&str> = cfg.keys.iter().map(String::as_str).collect();
        cols.push(&cfg.price_column);
        if let Some(qty) = &cfg.quantity_column {
            cols.push(qty);
        }
        cols
    }

    fn compute(&self, data: &DataFrame) -> Result<DataFrame, MetricError> {
        let cfg = &self.config;
        self.check_columns(data)?;
        let main_key = self.grouping_key(data)?;
        tracing::debug!(key = %main_key, "monetary grouping key");

        ensure_numeric(data, &cfg.price_column)?;
        let price = col(cfg.price_column.as_str()).cast(DataType::Float64);
        let amount = match &cfg.quantity_column {
            Some(qty) => {
                ensure_numeric(data, qty)?;
                price * col(qty.as_str()).cast(DataType::Float64)
            }
            None => price,
        };

        let mut aggs: Vec<Expr> = cfg
            .keys
            .iter()
            .filter(|k| **k != main_key)
            .map(|k| col(k.as_str()).last())
            .collect();
        aggs.push(amount.sum().alias(cfg.output_column.as_str()));

        let mut output: Vec<Expr> = cfg.keys.iter().map(|k| col(k.as_str())).collect();
        output.push(col(cfg.output_column.as_str()));

        let result = data
            .clone()
            .lazy()
            .group_by_stable([col(main_key.as_str())])
            .agg(aggs)
            .select(output)
            .collect()?;

        tracing::info!(customers = result.height(), rows = data.height(), "monetary computed");

        Ok(result)
    }
}

impl ConfigurableMetric for MonetaryMetric {
    type Config = MonetaryConfig;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn config(&self) -> &Self::Config {
        &self.config
    }
}
