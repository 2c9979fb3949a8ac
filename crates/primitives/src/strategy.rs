//! Binning strategy definitions.

use derive_more::Display;

use crate::CutPoints;

/// How a metric column is partitioned into ordinal grades.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum BinningStrategy {
    /// Quantiles of the standardized values at evenly spaced levels.
    #[display("quantile")]
    Quantile,
    /// Equal-width partition of the raw `[min, max]` range.
    #[display("min_max")]
    MinMax,
    /// Fixed boundaries supplied by the caller.
    #[display("explicit")]
    Explicit(CutPoints),
}

impl BinningStrategy {
    /// Tag accepted in configuration for the quantile strategy.
    pub const QUANTILE_TAG: &'static str = "quantile";
    /// Tag accepted in configuration for the min-max strategy.
    pub const MIN_MAX_TAG: &'static str = "min_max";

    /// Resolve a configuration tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::QUANTILE_TAG => Some(Self::Quantile),
            Self::MIN_MAX_TAG => Some(Self::MinMax),
            _ => None,
        }
    }

    /// Whether the cut points depend on the data being graded.
    #[must_use]
    pub const fn is_data_driven(&self) -> bool {
        !matches!(self, Self::Explicit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve() {
        assert_eq!(BinningStrategy::from_tag("quantile"), Some(BinningStrategy::Quantile));
        assert_eq!(BinningStrategy::from_tag("min_max"), Some(BinningStrategy::MinMax));
        assert_eq!(BinningStrategy::from_tag("minmax"), None);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(BinningStrategy::Quantile.to_string(), "quantile");
        assert_eq!(BinningStrategy::MinMax.to_string(), "min_max");
        let explicit = BinningStrategy::Explicit(CutPoints::new(vec![1.0]));
        assert_eq!(explicit.to_string(), "explicit");
        assert!(!explicit.is_data_driven());
    }
}
