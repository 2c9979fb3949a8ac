//! Error types for metric aggregation.

use polars::prelude::PolarsError;

/// Errors that can occur while aggregating a metric.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    /// Missing required column.
    #[error("missing required column: {0}")]
    MissingColumn(String),

    /// A timestamp matched neither the fixed format nor any free-form format.
    #[error("cannot parse {column} value {value:?} at row {row} as a date")]
    Parse {
        /// Column holding the value.
        column: String,
        /// Zero-based row index.
        row: usize,
        /// Offending text, empty for nulls.
        value: String,
    },

    /// A column used in arithmetic is not numeric.
    #[error("column {column} has non-numeric type {dtype}")]
    NonNumeric {
        /// Column name.
        column: String,
        /// Actual dtype.
        dtype: String,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] PolarsError),
}

impl MetricError {
    /// Returns whether the error comes from the input data rather than setup.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NonNumeric { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MetricError::Parse { column: "DT".into(), row: 3, value: "yesterday".into() };
        assert_eq!(err.to_string(), "cannot parse DT value \"yesterday\" at row 3 as a date");

        let err = MetricError::NonNumeric { column: "PRICE".into(), dtype: "str".into() };
        assert!(err.to_string().contains("PRICE"));
    }

    #[test]
    fn error_is_data_error() {
        assert!(MetricError::NonNumeric { column: "p".into(), dtype: "str".into() }.is_data_error());
        assert!(!MetricError::MissingColumn("p".into()).is_data_error());
    }
}
