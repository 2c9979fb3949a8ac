//! Raw value ranges behind each grade.

use polars::prelude::*;

use crate::ScoringError;

/// Summarize the raw values that landed in each grade.
///
/// One row per distinct grade, ascending, with `{raw}_min`, `{raw}_max`
/// and `{raw}_count` (non-null raw values).
///
/// # Errors
/// Returns `ScoringError::MissingColumn` if either column is absent, or a
/// polars error if aggregation fails.
pub fn grade_ranges(
    df: &DataFrame,
    grade_column: &str,
    raw_column: &str,
) -> Result<DataFrame, ScoringError> {
    let names = df.get_column_names_str();
    for name in [grade_column, raw_column] {
        if !names.contains(&name) {
            return Err(ScoringError::MissingColumn(name.to_string()));
        }
    }

    let ranges = df
        .clone()
        .lazy()
        .group_by([col(grade_column)])
        .agg([
            col(raw_column).min().alias(format!("{raw_column}_min")),
            col(raw_column).max().alias(format!("{raw_column}_max")),
            col(raw_column).count().cast(DataType::Int64).alias(format!("{raw_column}_count")),
        ])
        .sort([grade_column], SortMultipleOptions::default())
        .collect()?;

    tracing::debug!(grade = grade_column, raw = raw_column, grades = ranges.height(), "grade ranges");

    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_count_per_grade() {
        let df = df! {
            "monetary" => &[Some(5.0), Some(12.0), Some(8.0), None, Some(40.0)],
            "monetary_M" => &[1i32, 2, 1, 2, 3],
        }
        .unwrap();

        let ranges = grade_ranges(&df, "monetary_M", "monetary").unwrap();
        assert_eq!(
            ranges.get_column_names_str(),
            &["monetary_M", "monetary_min", "monetary_max", "monetary_count"]
        );

        let grades: Vec<i32> =
            ranges.column("monetary_M").unwrap().i32().unwrap().into_no_null_iter().collect();
        assert_eq!(grades, vec![1, 2, 3]);

        let mins: Vec<f64> =
            ranges.column("monetary_min").unwrap().f64().unwrap().into_no_null_iter().collect();
        let maxs: Vec<f64> =
            ranges.column("monetary_max").unwrap().f64().unwrap().into_no_null_iter().collect();
        let counts: Vec<i64> =
            ranges.column("monetary_count").unwrap().i64().unwrap().into_no_null_iter().collect();
        assert_eq!(mins, vec![5.0, 12.0, 40.0]);
        assert_eq!(maxs, vec![8.0, 12.0, 40.0]);
        assert_eq!(counts, vec![2, 1, 1]);
    }

    #[test]
    fn input_is_untouched() {
        let df = df! { "r" => &[1.0, 2.0], "r_R" => &[1i32, 2] }.unwrap();
        let _ = grade_ranges(&df, "r_R", "r").unwrap();
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn missing_columns() {
        let df = df! { "r" => &[1.0] }.unwrap();
        assert!(matches!(
            grade_ranges(&df, "r_R", "r"),
            Err(ScoringError::MissingColumn(ref c)) if c == "r_R"
        ));
    }
}
