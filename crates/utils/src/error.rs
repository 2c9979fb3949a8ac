//! Error types for ingest and export.

use std::path::PathBuf;

/// Errors that can occur while reading or writing tables.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Filesystem error.
    #[error("io error on {}: {source}", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Encoding label not recognized.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// File bytes are not valid in the requested encoding.
    #[error("{} is not valid {encoding}", path.display())]
    Decode {
        /// Offending file.
        path: PathBuf,
        /// Encoding name.
        encoding: String,
    },

    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),
}

impl UtilsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
