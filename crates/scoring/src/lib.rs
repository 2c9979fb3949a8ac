#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/rfmkit/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod merge;
pub use merge::TableMerger;

mod config;
pub use config::{GradeConfig, TickPoint};

mod plan;
pub use plan::{GradePlan, GradeSpec};

mod grade;
pub use grade::{GradingEngine, cut_points_for};

mod score;
pub use score::{DEFAULT_SCORE_COLUMN, DEFAULT_SUM_COLUMN, Scorer};

mod range;
pub use range::grade_ranges;

mod values;

mod error;
pub use error::{ConfigError, ScoringError};

/// Re-export commonly used types.
pub mod prelude {
    pub use rfmkit_primitives::{BinningStrategy, CutPoints, WeightMap};

    pub use super::{GradeConfig, GradingEngine, Scorer, ScoringError, TableMerger, TickPoint};
}
