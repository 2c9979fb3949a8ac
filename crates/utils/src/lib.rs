#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rfmkit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod ingest;
pub use ingest::read_multi_csv;

mod counts;
pub use counts::{COUNT_COLUMN, group_counts};

mod export;
pub use export::write_csv;

mod error;
pub use error::UtilsError;
