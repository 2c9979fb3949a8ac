//! End-to-end RFM pipeline.

use std::path::Path;

use polars::prelude::DataFrame;
use rfmkit_metrics::{FrequencyMetric, MonetaryMetric, RecencyMetric};
use rfmkit_scoring::{GradingEngine, Scorer, TableMerger, grade_ranges};
use rfmkit_traits::{ConfigurableMetric, Metric};
use rfmkit_utils::read_multi_csv;

use crate::{PipelineConfig, PipelineError};

/// Tables produced by one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// One row per customer with the raw recency, frequency and monetary values.
    pub merged: DataFrame,
    /// `merged` plus grade columns, `sum` and `score`.
    pub scored: DataFrame,
    /// Raw value ranges per grade, keyed by grade column.
    pub ranges: Vec<(String, DataFrame)>,
}

/// Transaction rows in, graded and scored customers out.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline from `config`.
    #[must_use]
    pub const fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// The pipeline configuration.
    #[must_use]
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Read every CSV file in `dir` and run the pipeline over the rows.
    ///
    /// # Errors
    /// Returns `PipelineError::Utils` if ingest fails, otherwise as [`Self::run`].
    pub fn run_dir(
        &self,
        dir: impl AsRef<Path>,
        encoding: &str,
    ) -> Result<PipelineOutput, PipelineError> {
        let transactions = read_multi_csv(dir, encoding)?;
        self.run(&transactions)
    }

    /// Aggregate, merge, grade and score `transactions`.
    ///
    /// # Errors
    /// Returns `PipelineError::Metric` if a metric cannot be computed,
    /// `PipelineError::Scoring` for invalid grading configuration or unusable
    /// metric values, and `PipelineError::UnknownGradeColumn` if a range
    /// report names a column grading does not produce.
    pub fn run(&self, transactions: &DataFrame) -> Result<PipelineOutput, PipelineError> {
        let cfg = &self.config;
        tracing::info!(rows = transactions.height(), "running rfm pipeline");

        let metrics: [Box<dyn Metric>; 3] = [
            Box::new(RecencyMetric::with_config(cfg.recency())),
            Box::new(FrequencyMetric::with_config(cfg.frequency())),
            Box::new(MonetaryMetric::with_config(cfg.monetary())),
        ];
        let tables = metrics
            .iter()
            .map(|metric| -> Result<DataFrame, PipelineError> {
                let table = metric.compute(transactions)?;
                tracing::debug!(
                    metric = metric.name(),
                    kind = %metric.kind(),
                    rows = table.height(),
                    "metric table"
                );
                Ok(table)
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        let merger = cfg
            .merge_fill
            .iter()
            .fold(TableMerger::new(cfg.keys.iter().cloned()), |m, (column, fill)| {
                m.fill_value(column.as_str(), *fill)
            });
        let merged = merger.merge(&tables)?;

        let engine = GradingEngine::new(cfg.grade.clone());
        let plan = engine.plan(&merged)?;
        let graded = GradingEngine::grade_with_plan(&plan, merged.clone())?;
        let scored = Scorer::new(cfg.weight_point.clone()).score(graded)?;

        let ranges = cfg
            .range_columns
            .iter()
            .map(|grade_column| -> Result<(String, DataFrame), PipelineError> {
                let spec = plan
                    .specs()
                    .iter()
                    .find(|s| &s.output == grade_column)
                    .ok_or_else(|| PipelineError::UnknownGradeColumn(grade_column.clone()))?;
                let range = grade_ranges(&scored, &spec.output, &spec.source)?;
                Ok((grade_column.clone(), range))
            })
            .collect::<Result<Vec<_>, PipelineError>>()?;

        tracing::info!(customers = scored.height(), "rfm pipeline finished");

        Ok(PipelineOutput { merged, scored, ranges })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use polars::prelude::*;
    use rfmkit_scoring::GradeConfig;

    use super::*;

    fn transactions() -> DataFrame {
        df! {
            "ID" => &["a", "a", "b", "c", "c", "c"],
            "DT" => &["20220101", "20220201", "20220110", "20220105", "20220115", "20220210"],
            "PRICE" => &[10.0, 20.0, 5.0, 100.0, 50.0, 25.0],
        }
        .unwrap()
    }

    fn config() -> PipelineConfig {
        PipelineConfig {
            reference_date: NaiveDate::from_ymd_opt(2022, 2, 16).unwrap(),
            grade: GradeConfig::new(2)
                .metric("R", "recency", "quantile")
                .metric("F", "frequency", "min_max")
                .metric("M", "monetary", vec![50.0]),
            ..PipelineConfig::default()
        }
    }

    #[test]
    fn runs_end_to_end() {
        let output = Pipeline::new(config()).run(&transactions()).unwrap();

        assert_eq!(output.merged.height(), 3);
        assert_eq!(output.merged.get_column_names_str(), &["ID", "recency", "frequency", "monetary"]);
        for column in ["recency_R", "frequency_F", "monetary_M", "sum", "score"] {
            assert!(output.scored.column(column).is_ok(), "{column}");
        }

        let monetary: Vec<i32> =
            output.scored.column("monetary_M").unwrap().i32().unwrap().into_no_null_iter().collect();
        assert_eq!(monetary, vec![1, 1, 2]);

        assert_eq!(output.ranges.len(), 1);
        assert_eq!(output.ranges[0].0, "monetary_M");
    }

    #[test]
    fn unknown_range_column() {
        let config = PipelineConfig { range_columns: vec!["monetary_X".into()], ..config() };
        let err = Pipeline::new(config).run(&transactions()).unwrap_err();
        assert!(matches!(err, PipelineError::UnknownGradeColumn(ref c) if c == "monetary_X"));
    }

    #[test]
    fn missing_timestamp_column() {
        let config = PipelineConfig { timestamp_column: "ORDER_DT".into(), ..config() };
        let err = Pipeline::new(config).run(&transactions()).unwrap_err();
        assert!(matches!(err, PipelineError::Metric(_)));
    }
}
