//! Weighted scoring over grade columns.

use ndarray::Array1;
use polars::prelude::*;
use rfmkit_primitives::WeightMap;

use crate::{ScoringError, values::float_values};

/// Default name of the unweighted grade sum column.
pub const DEFAULT_SUM_COLUMN: &str = "sum";

/// Default name of the weighted score column.
pub const DEFAULT_SCORE_COLUMN: &str = "score";

/// Appends the plain and weighted sums of a set of grade columns.
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: WeightMap,
    sum_column: String,
    score_column: String,
}

impl Scorer {
    /// Create a scorer over the columns named in `weights`.
    #[must_use]
    pub fn new(weights: WeightMap) -> Self {
        Self {
            weights,
            sum_column: DEFAULT_SUM_COLUMN.to_string(),
            score_column: DEFAULT_SCORE_COLUMN.to_string(),
        }
    }

    /// Name of the unweighted sum column.
    #[must_use]
    pub fn sum_column(mut self, name: impl Into<String>) -> Self {
        self.sum_column = name.into();
        self
    }

    /// Name of the weighted score column.
    #[must_use]
    pub fn score_column(mut self, name: impl Into<String>) -> Self {
        self.score_column = name.into();
        self
    }

    /// Column weights.
    #[must_use]
    pub const fn weights(&self) -> &WeightMap {
        &self.weights
    }

    /// Append `sum` and `score` columns to `df`.
    ///
    /// # Errors
    /// Returns `ScoringError::MissingColumn` if a weighted column is absent
    /// and `ScoringError::NonNumeric` or `ScoringError::NullValues` if it
    /// cannot be summed.
    pub fn score(&self, mut df: DataFrame) -> Result<DataFrame, ScoringError> {
        let height = df.height();
        let mut sum = Array1::<f64>::zeros(height);
        let mut score = Array1::<f64>::zeros(height);

        for (column, weight) in self.weights.iter() {
            let values = float_values(&df, column)?;
            sum += &values;
            score.scaled_add(weight, &values);
        }

        df.with_column(Column::new(self.sum_column.as_str().into(), sum.to_vec()))?;
        df.with_column(Column::new(self.score_column.as_str().into(), score.to_vec()))?;

        Ok(df)
    }
}

impl Default for Scorer {
    /// Recency-heavy weights over the default grade columns.
    fn default() -> Self {
        Self::new(
            WeightMap::new()
                .with("recency_R", 0.5)
                .with("frequency_F", 0.2)
                .with("monetary_M", 0.3),
        )
    }
}
