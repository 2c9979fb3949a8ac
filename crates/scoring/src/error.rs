//! Error types for merging, grading and scoring.

use rfmkit_math::MathError;

/// Grading configuration problems, reported before any data is touched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Fewer than two classes requested.
    #[error("num_class must be at least 2, got {0}")]
    NumClass(usize),

    /// Tick point and column maps disagree on their keys.
    #[error("rfm_tick_point keys {tick_point:?} and rfm_col_map keys {col_map:?} must match")]
    KeyMismatch {
        /// Keys of the tick point map.
        tick_point: Vec<String>,
        /// Keys of the column map.
        col_map: Vec<String>,
    },

    /// Mapped source columns absent from the table.
    #[error("columns {0:?} must exist in the table")]
    MissingColumns(Vec<String>),

    /// Strategy tag other than `quantile` or `min_max`.
    #[error("strategy for {key} must be \"quantile\" or \"min_max\", got {tag:?}")]
    UnknownStrategy {
        /// Metric key.
        key: String,
        /// Offending tag.
        tag: String,
    },

    /// Explicit cut point list of the wrong length.
    #[error("cut points for {key} must have {expected} elements, got {actual}")]
    CutPointCount {
        /// Metric key.
        key: String,
        /// `num_class - 1`.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Explicit cut points not finite and strictly ascending.
    #[error("cut points for {key} must be finite and strictly ascending")]
    CutPointOrder {
        /// Metric key.
        key: String,
    },

    /// Suffix override is not a usable plain string.
    #[error("suffix must be a non-empty plain string, got {0:?}")]
    Suffix(String),

    /// Two metrics would write the same grade column.
    #[error("grade column {column} would be written by both {first} and {second}")]
    OutputCollision {
        /// Colliding output column.
        column: String,
        /// First metric key.
        first: String,
        /// Second metric key.
        second: String,
    },
}

/// Errors that can occur while merging, grading or scoring.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// Invalid grading configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Referenced column absent from the table.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Column used in arithmetic is not numeric.
    #[error("column {column} has non-numeric type {dtype}")]
    NonNumeric {
        /// Column name.
        column: String,
        /// Actual dtype.
        dtype: String,
    },

    /// Column holds null or NaN values that cannot be graded.
    #[error("column {0} contains null or NaN values")]
    NullValues(String),

    /// Invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Math error.
    #[error("math error: {0}")]
    Math(#[from] MathError),

    /// Polars error.
    #[error("data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl ScoringError {
    /// Returns whether the error was raised by configuration validation.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::CutPointCount { key: "R".into(), expected: 4, actual: 3 };
        assert_eq!(err.to_string(), "cut points for R must have 4 elements, got 3");

        let err = ScoringError::MissingColumn("recency_R".into());
        assert!(err.to_string().contains("recency_R"));
    }

    #[test]
    fn config_errors_are_flagged() {
        let err: ScoringError = ConfigError::NumClass(1).into();
        assert!(err.is_config_error());
        assert!(!ScoringError::NullValues("x".into()).is_config_error());
    }
}
