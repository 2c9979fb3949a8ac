//! # rfmkit
//!
//! Recency, frequency and monetary (RFM) customer segmentation.
//!
//! Transaction rows go in, one row per customer comes out with three raw
//! metrics, an ordinal grade per metric and a weighted composite score.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Grade, cut point and weight types
//! - `traits`: The `Metric` abstraction
//! - `math`: Standardization, quantiles and bucketing
//! - `metrics`: Recency, frequency and monetary aggregators
//! - `scoring`: Merging, grading, scoring and range reports
//! - `utils`: CSV ingest and export
//! - `pipeline`: End-to-end [`Pipeline`] driven by a JSON config
//! - `cli`: The `rfm` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use rfmkit::{Pipeline, PipelineConfig};
//!
//! let config = PipelineConfig::from_json_file("rfm.json")?;
//! let output = Pipeline::new(config).run_dir("data/CRM", "cp949")?;
//! println!("{}", output.scored);
//! ```

#![doc(
    html_logo_url = "https://raw.githubusercontent.com/factordynamics/rfmkit/main/assets/logo.png",
    html_favicon_url = "https://raw.githubusercontent.com/factordynamics/rfmkit/main/assets/favicon.ico"
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use rfmkit_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use rfmkit_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use rfmkit_math as math;
#[cfg(feature = "metrics")]
#[doc(inline)]
pub use rfmkit_metrics as metrics;
#[cfg(feature = "scoring")]
#[doc(inline)]
pub use rfmkit_scoring as scoring;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use rfmkit_utils as utils;

#[cfg(feature = "pipeline")]
mod config;
#[cfg(feature = "pipeline")]
pub use config::PipelineConfig;

#[cfg(feature = "pipeline")]
mod pipeline;
#[cfg(feature = "pipeline")]
pub use pipeline::{Pipeline, PipelineOutput};

#[cfg(feature = "pipeline")]
mod error;
#[cfg(feature = "pipeline")]
pub use error::PipelineError;

// Used only by the `rfm` binary.
#[cfg(feature = "cli")]
use anyhow as _;
#[cfg(feature = "cli")]
use clap as _;
#[cfg(feature = "cli")]
use tracing_subscriber as _;
