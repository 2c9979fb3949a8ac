#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rfmkit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod dates;
pub use dates::{DEFAULT_DATE_FORMAT, parse_date_fixed, parse_date_free_form};

mod recency;
pub use recency::{DEFAULT_OFFSET_DAYS, RecencyConfig, RecencyMetric};

mod frequency;
pub use frequency::{FrequencyConfig, FrequencyMetric};

mod monetary;
pub use monetary::{MonetaryConfig, MonetaryKey, MonetaryMetric};

mod numeric;
