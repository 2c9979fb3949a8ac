//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Class count below two.
    #[error("invalid class count: {0} (must be at least 2)")]
    InvalidNumClass(usize),

    /// Probability level outside the unit interval.
    #[error("invalid probability: {0} (must be in [0, 1])")]
    InvalidProbability(f64),

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Numerical instability (NaN or Inf).
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}
