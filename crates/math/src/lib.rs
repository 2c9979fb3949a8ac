#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rfmkit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod standardize;
pub use standardize::{Scale, Standardizer};

mod quantile;
pub use quantile::{quantile_cut_points, quantile_levels, quantile_sorted};

mod partition;
pub use partition::{linspace_interior, min_max_cut_points};

mod bucket;
pub use bucket::{assign_grade, assign_grades};

mod error;
pub use error::MathError;

/// Reject class counts that cannot form a single boundary.
const fn check_num_class(num_class: usize) -> Result<(), MathError> {
    if num_class < 2 { Err(MathError::InvalidNumClass(num_class)) } else { Ok(()) }
}
