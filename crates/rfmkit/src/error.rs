//! Error types for the end-to-end pipeline.

use std::path::PathBuf;

use rfmkit_scoring::ScoringError;
use rfmkit_traits::MetricError;
use rfmkit_utils::UtilsError;

/// Errors that can occur while running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    ConfigIo {
        /// Config file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Config file is not valid JSON for [`crate::PipelineConfig`].
    #[error("invalid config: {0}")]
    ConfigFormat(#[from] serde_json::Error),

    /// A range report was requested for a column grading does not produce.
    #[error("no grade column named {0}")]
    UnknownGradeColumn(String),

    /// Ingest or export failed.
    #[error(transparent)]
    Utils(#[from] UtilsError),

    /// Metric aggregation failed.
    #[error(transparent)]
    Metric(#[from] MetricError),

    /// Merging, grading or scoring failed.
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
