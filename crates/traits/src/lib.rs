#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rfmkit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod metric;
pub use metric::{ConfigurableMetric, Metric, MetricKind};

mod error;
pub use error::MetricError;

mod dtype;
pub use dtype::is_numeric;
