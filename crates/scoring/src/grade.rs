//! Per-metric ordinal grading.

use ndarray::Array1;
use polars::prelude::*;
use rfmkit_math::{assign_grades, min_max_cut_points, quantile_cut_points};
use rfmkit_primitives::{BinningStrategy, CutPoints};

use crate::{GradeConfig, GradePlan, GradeSpec, ScoringError, values::float_values};

/// Cut points for `data` under `strategy`, together with the values that
/// should be bucketed against them.
///
/// Quantile cut points live on the standardized scale, so the standardized
/// values are returned alongside. The other strategies bucket raw values.
///
/// # Errors
/// Propagates `MathError` for empty or non-finite data and invalid class
/// counts.
pub fn cut_points_for(
    strategy: &BinningStrategy,
    data: &Array1<f64>,
    num_class: usize,
) -> Result<(Array1<f64>, CutPoints), ScoringError> {
    match strategy {
        BinningStrategy::Quantile => Ok(quantile_cut_points(data, num_class)?),
        BinningStrategy::MinMax => Ok((data.clone(), min_max_cut_points(data, num_class)?)),
        BinningStrategy::Explicit(cuts) => Ok((data.clone(), cuts.clone())),
    }
}

/// Appends one grade column per configured metric.
#[derive(Debug, Clone)]
pub struct GradingEngine {
    config: GradeConfig,
}

impl GradingEngine {
    /// Create an engine for `config`. Validation happens against each table.
    #[must_use]
    pub const fn new(config: GradeConfig) -> Self {
        Self { config }
    }

    /// The grading configuration.
    #[must_use]
    pub const fn config(&self) -> &GradeConfig {
        &self.config
    }

    /// Validate the configuration against `df`.
    ///
    /// # Errors
    /// Returns `ScoringError::Config` with the first failed check.
    pub fn plan(&self, df: &DataFrame) -> Result<GradePlan, ScoringError> {
        Ok(GradePlan::validate(&self.config, &df.get_column_names_str())?)
    }

    /// Grade `df`, returning it with the grade columns appended as `i32`.
    ///
    /// Every grade column is computed before any is written back.
    ///
    /// # Errors
    /// Returns `ScoringError::Config` for an invalid configuration,
    /// `ScoringError::NonNumeric` or `ScoringError::NullValues` for unusable
    /// source columns.
    pub fn grade(&self, df: DataFrame) -> Result<DataFrame, ScoringError> {
        let plan = self.plan(&df)?;
        Self::grade_with_plan(&plan, df)
    }

    /// Grade `df` with an already validated plan.
    ///
    /// Every grade column is computed before any is written back.
    ///
    /// # Errors
    /// Returns `ScoringError::MissingColumn` if `df` lacks a planned source
    /// column, `ScoringError::NonNumeric` or `ScoringError::NullValues` for
    /// unusable source columns.
    pub fn grade_with_plan(plan: &GradePlan, mut df: DataFrame) -> Result<DataFrame, ScoringError> {
        let columns = plan
            .specs()
            .iter()
            .map(|spec| grade_column(&df, spec, plan.num_class()))
            .collect::<Result<Vec<_>, _>>()?;

        for column in columns {
            df.with_column(column)?;
        }

        tracing::info!(rows = df.height(), metrics = plan.specs().len(), "grades assigned");

        Ok(df)
    }
}

fn grade_column(df: &DataFrame, spec: &GradeSpec, num_class: usize) -> Result<Column, ScoringError> {
    let raw = float_values(df, &spec.source)?;
    if raw.is_empty() {
        return Ok(Column::new(spec.output.as_str().into(), Vec::<i32>::new()));
    }

    let (values, cuts) = cut_points_for(&spec.strategy, &raw, num_class)?;
    tracing::debug!(
        key = %spec.key,
        strategy = %spec.strategy,
        cut_points = ?cuts.as_slice(),
        "cut points"
    );

    let grades: Vec<i32> =
        assign_grades(values.iter(), &cuts).into_iter().map(|g| g.get() as i32).collect();

    Ok(Column::new(spec.output.as_str().into(), grades))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;
    use crate::ConfigError;

    fn grades(df: &DataFrame, name: &str) -> Vec<i32> {
        df.column(name).unwrap().i32().unwrap().into_no_null_iter().collect()
    }

    #[test]
    fn explicit_boundaries_fall_in_lower_bucket() {
        let df = df! { "monetary" => &[5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0] }.unwrap();
        let config = GradeConfig::new(4).metric("M", "monetary", vec![10.0, 20.0, 30.0]);

        let graded = GradingEngine::new(config).grade(df).unwrap();
        assert_eq!(graded.column("monetary_M").unwrap().dtype(), &DataType::Int32);
        assert_eq!(grades(&graded, "monetary_M"), vec![1, 1, 2, 2, 3, 3, 4]);
    }

    #[test]
    fn quantile_median_split() {
        let df = df! { "frequency" => &(1..=10).collect::<Vec<i64>>() }.unwrap();
        let config = GradeConfig::new(2).metric("F", "frequency", "quantile");

        let graded = GradingEngine::new(config).grade(df).unwrap();
        assert_eq!(grades(&graded, "frequency_F"), vec![1, 1, 1, 1, 1, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn min_max_equal_width() {
        let df = df! { "recency" => &[0.0, 2.0, 5.0, 7.5, 10.0] }.unwrap();
        let config = GradeConfig::new(4).metric("R", "recency", "min_max");

        let graded = GradingEngine::new(config).grade(df).unwrap();
        assert_eq!(grades(&graded, "recency_R"), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn grades_are_monotone_in_value() {
        let values: Vec<f64> = (0..50).map(|i| f64::from(i * 7 % 50)).collect();
        let df = df! { "monetary" => &values }.unwrap();
        let config = GradeConfig::new(5).metric("M", "monetary", "quantile");

        let graded = GradingEngine::new(config).grade(df).unwrap();
        let mut pairs: Vec<(f64, i32)> =
            values.iter().copied().zip(grades(&graded, "monetary_M")).collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        assert!(pairs.windows(2).all(|w| w[0].1 <= w[1].1));
        assert!(pairs.iter().all(|&(_, g)| (1..=5).contains(&g)));
    }

    #[test]
    fn cut_points_on_standardized_scale() {
        let data = Array1::from(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let (values, cuts) = cut_points_for(&BinningStrategy::Quantile, &data, 2).unwrap();
        assert_relative_eq!(values[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(cuts.as_slice()[0], 0.0, epsilon = 1e-12);

        let (raw, cuts) = cut_points_for(&BinningStrategy::MinMax, &data, 2).unwrap();
        assert_eq!(raw, data);
        assert_relative_eq!(cuts.as_slice()[0], 3.0);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let df = df! { "recency" => &[1.0, 2.0], "monetary" => &[3.0, 4.0] }.unwrap();
        let mut config = GradeConfig::new(3);
        config.rfm_tick_point.insert("R".into(), "quantile".into());
        config.rfm_tick_point.insert("F".into(), "quantile".into());
        config.rfm_col_map.insert("R".into(), "recency".into());
        config.rfm_col_map.insert("M".into(), "monetary".into());

        let engine = GradingEngine::new(config);
        let err = engine.grade(df.clone()).unwrap_err();
        assert!(matches!(err, ScoringError::Config(ConfigError::KeyMismatch { .. })));
        assert_eq!(df.width(), 2);
    }

    #[rstest]
    #[case(vec![10.0, 20.0])]
    #[case(vec![30.0, 20.0, 10.0])]
    fn bad_explicit_cut_points(#[case] points: Vec<f64>) {
        let df = df! { "monetary" => &[1.0] }.unwrap();
        let config = GradeConfig::new(4).metric("M", "monetary", points);
        let err = GradingEngine::new(config).grade(df).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn validated_plan_is_reused() {
        let config = GradeConfig::new(4).metric("M", "monetary", vec![10.0, 20.0, 30.0]);
        let engine = GradingEngine::new(config);
        let df = df! { "monetary" => &[5.0, 20.0, 35.0] }.unwrap();

        let plan = engine.plan(&df).unwrap();
        let graded = GradingEngine::grade_with_plan(&plan, df.clone()).unwrap();
        assert_eq!(grades(&graded, "monetary_M"), vec![1, 2, 4]);
        assert_eq!(graded, engine.grade(df).unwrap());

        let other = df! { "frequency" => &[1.0] }.unwrap();
        let err = GradingEngine::grade_with_plan(&plan, other).unwrap_err();
        assert!(matches!(err, ScoringError::MissingColumn(ref c) if c == "monetary"));
    }

    #[test]
    fn unknown_tag_is_config_error() {
        let df = df! { "monetary" => &[1.0] }.unwrap();
        let config = GradeConfig::new(3).metric("M", "monetary", "median");
        let err = GradingEngine::new(config).grade(df).unwrap_err();
        assert!(matches!(err, ScoringError::Config(ConfigError::UnknownStrategy { .. })));
    }

    #[test]
    fn bad_data_fails_before_any_column_is_written() {
        let df = df! {
            "recency" => &[1.0, 2.0],
            "monetary" => &[Some(3.0), None],
        }
        .unwrap();
        let config = GradeConfig::new(2)
            .metric("R", "recency", "quantile")
            .metric("M", "monetary", "quantile");
        let err = GradingEngine::new(config).grade(df).unwrap_err();
        assert!(matches!(err, ScoringError::NullValues(ref c) if c == "monetary"));
    }

    #[test]
    fn empty_table_gets_empty_grade_columns() {
        let df = df! { "recency" => Vec::<f64>::new() }.unwrap();
        let config = GradeConfig::new(3).metric("R", "recency", "quantile");
        let graded = GradingEngine::new(config).grade(df).unwrap();
        assert_eq!(graded.height(), 0);
        assert!(graded.column("recency_R").is_ok());
    }
}
