//! Validated grading plan.

use std::collections::BTreeMap;

use rfmkit_primitives::{BinningStrategy, CutPoints};

use crate::{ConfigError, GradeConfig, TickPoint};

/// One metric to grade: where it comes from, how it is binned, where the
/// grades go.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeSpec {
    /// Metric key from the configuration (`R`, `F`, `M`, ...).
    pub key: String,
    /// Raw metric column.
    pub source: String,
    /// Binning strategy.
    pub strategy: BinningStrategy,
    /// Grade column written to the table.
    pub output: String,
}

/// A grading configuration checked against a table's columns.
#[derive(Debug, Clone, PartialEq)]
pub struct GradePlan {
    num_class: usize,
    specs: Vec<GradeSpec>,
}

impl GradePlan {
    /// Validate `config` against the columns of the table to grade.
    ///
    /// Checks run in order and the first failure is returned: class count,
    /// matching key sets, source columns present, strategies well formed,
    /// suffix usable, output names unique.
    ///
    /// # Errors
    /// Returns the `ConfigError` describing the failed check.
    pub fn validate(config: &GradeConfig, columns: &[&str]) -> Result<Self, ConfigError> {
        let num_class = config.num_class;
        if num_class < 2 {
            return Err(ConfigError::NumClass(num_class));
        }

        if !config.rfm_tick_point.keys().eq(config.rfm_col_map.keys()) {
            return Err(ConfigError::KeyMismatch {
                tick_point: config.rfm_tick_point.keys().cloned().collect(),
                col_map: config.rfm_col_map.keys().cloned().collect(),
            });
        }

        let mut missing: Vec<String> = config
            .rfm_col_map
            .values()
            .filter(|c| !columns.contains(&c.as_str()))
            .cloned()
            .collect();
        if !missing.is_empty() {
            missing.sort();
            missing.dedup();
            return Err(ConfigError::MissingColumns(missing));
        }

        let mut strategies = Vec::with_capacity(config.rfm_tick_point.len());
        for (key, tick) in &config.rfm_tick_point {
            strategies.push(resolve_strategy(key, tick, num_class)?);
        }

        if let Some(suffix) = &config.suffix
            && (suffix.trim().is_empty() || suffix.chars().any(char::is_control))
        {
            return Err(ConfigError::Suffix(suffix.clone()));
        }

        let mut specs = Vec::with_capacity(strategies.len());
        let mut outputs: BTreeMap<String, String> = BTreeMap::new();
        for ((key, source), strategy) in config.rfm_col_map.iter().zip(strategies) {
            let output = format!("{source}_{}", config.suffix.as_deref().unwrap_or(key));
            if let Some(first) = outputs.insert(output.clone(), key.clone()) {
                return Err(ConfigError::OutputCollision { column: output, first, second: key.clone() });
            }
            specs.push(GradeSpec { key: key.clone(), source: source.clone(), strategy, output });
        }

        Ok(Self { num_class, specs })
    }

    /// Number of grades per metric.
    #[must_use]
    pub const fn num_class(&self) -> usize {
        self.num_class
    }

    /// Metrics to grade, in key order.
    #[must_use]
    pub fn specs(&self) -> &[GradeSpec] {
        &self.specs
    }

    /// Output grade column names, in key order.
    pub fn output_columns(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.output.as_str())
    }
}

fn resolve_strategy(
    key: &str,
    tick: &TickPoint,
    num_class: usize,
) -> Result<BinningStrategy, ConfigError> {
    match tick {
        TickPoint::Tag(tag) => BinningStrategy::from_tag(tag)
            .ok_or_else(|| ConfigError::UnknownStrategy { key: key.to_string(), tag: tag.clone() }),
        TickPoint::Points(points) => {
            if points.len() != num_class - 1 {
                return Err(ConfigError::CutPointCount {
                    key: key.to_string(),
                    expected: num_class - 1,
                    actual: points.len(),
                });
            }
            if !CutPoints::is_strictly_ascending(points) {
                return Err(ConfigError::CutPointOrder { key: key.to_string() });
            }
            Ok(BinningStrategy::Explicit(CutPoints::new(points.clone())))
        }
    }
}
