//! Standard scaling of a single column.

use ndarray::Array1;

/// Scales below this multiple of machine epsilon are treated as zero.
const ZERO_SCALE_FACTOR: f64 = 10.0;

/// Fitted location and scale of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Column mean.
    pub mean: f64,
    /// Population standard deviation, or 1.0 for a constant column.
    pub scale: f64,
}

/// Zero mean / unit variance transform.
///
/// Uses the population variance (`ddof = 0`) with a compensated second pass,
/// and leaves constant columns centered but unscaled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standardizer;

impl Standardizer {
    /// Create a new standardizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Fit mean and scale. Returns `None` for empty input.
    #[must_use]
    pub fn fit(&self, data: &Array1<f64>) -> Option<Scale> {
        if data.is_empty() {
            return None;
        }

        let n = data.len() as f64;
        let mean = data.sum() / n;

        let mut sum_sq = 0.0;
        let mut correction = 0.0;
        for &x in data {
            let d = x - mean;
            sum_sq += d * d;
            correction += d;
        }
        let variance = (sum_sq - correction * correction / n) / n;
        let std = variance.max(0.0).sqrt();

        let scale = if std < ZERO_SCALE_FACTOR * f64::EPSILON {
            tracing::warn!(mean, "zero variance column, skipping scale");
            1.0
        } else {
            std
        };

        Some(Scale { mean, scale })
    }

    /// Fit and transform in one step.
    #[must_use]
    pub fn apply(&self, data: &Array1<f64>) -> Array1<f64> {
        self.fit(data).map_or_else(|| data.clone(), |s| data.mapv(|x| (x - s.mean) / s.scale))
    }
}
