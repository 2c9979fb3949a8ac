//! Metric trait definitions.

use polars::prelude::*;

use crate::MetricError;

/// The kind of per-customer metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Days between the last purchase and the reference date.
    Recency,
    /// Number of purchases.
    Frequency,
    /// Total amount spent.
    Monetary,
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Recency => write!(f, "recency"),
            Self::Frequency => write!(f, "frequency"),
            Self::Monetary => write!(f, "monetary"),
        }
    }
}

/// A per-customer aggregation over the transaction table.
///
/// Implementations produce one row per customer key with the key columns
/// followed by a single metric column named [`Metric::name`].
pub trait Metric: Send + Sync {
    /// Name of the output metric column.
    fn name(&self) -> &str;

    /// Which metric this is.
    fn kind(&self) -> MetricKind;

    /// Columns the input table must provide.
    fn required_columns(&self) -> Vec<&str>;

    /// Aggregate the transaction table.
    ///
    /// # Errors
    /// Returns `MetricError` if a required column is missing, a value cannot
    /// be parsed or has the wrong type, or the aggregation fails.
    fn compute(&self, data: &DataFrame) -> Result<DataFrame, MetricError>;

    /// Check that every required column is present.
    ///
    /// # Errors
    /// Returns `MetricError::MissingColumn` naming the first absent column.
    fn check_columns(&self, data: &DataFrame) -> Result<(), MetricError> {
        let present = data.get_column_names();
        match self
            .required_columns()
            .into_iter()
            .find(|req| !present.iter().any(|c| c.as_str() == *req))
        {
            Some(missing) => Err(MetricError::MissingColumn(missing.to_string())),
            None => Ok(()),
        }
    }
}

/// A metric built from a configuration value.
pub trait ConfigurableMetric: Metric {
    /// Configuration type for this metric.
    type Config: Clone + Send + Sync;

    /// Create the metric from its configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Get the configuration.
    fn config(&self) -> &Self::Config;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RowCount;

    impl Metric for RowCount {
        fn name(&self) -> &str {
            "rows"
        }

        fn kind(&self) -> MetricKind {
            MetricKind::Frequency
        }

        fn required_columns(&self) -> Vec<&str> {
            vec!["id", "price"]
        }

        fn compute(&self, data: &DataFrame) -> Result<DataFrame, MetricError> {
            self.check_columns(data)?;
            Ok(data.clone())
        }
    }

    #[test]
    fn metric_kind_display() {
        assert_eq!(MetricKind::Recency.to_string(), "recency");
        assert_eq!(MetricKind::Frequency.to_string(), "frequency");
        assert_eq!(MetricKind::Monetary.to_string(), "monetary");
    }

    #[test]
    fn check_columns_reports_missing() {
        let df = df! { "id" => &["a"] }.unwrap();
        let err = RowCount.compute(&df).unwrap_err();
        assert!(matches!(err, MetricError::MissingColumn(ref c) if c == "price"));

        let df = df! { "id" => &["a"], "price" => &[1.0] }.unwrap();
        assert!(RowCount.compute(&df).is_ok());
    }
}
