//! Row counts per distinct value.

use polars::prelude::*;

use crate::UtilsError;

/// Name of the count column produced by [`group_counts`].
pub const COUNT_COLUMN: &str = "count";

/// Number of rows for each distinct value of `column`, sorted by value.
///
/// Nulls form their own group. Each group is logged at `debug`.
///
/// # Errors
/// Returns `UtilsError::MissingColumn` if `column` is absent.
pub fn group_counts(df: &DataFrame, column: &str) -> Result<DataFrame, UtilsError> {
    if !df.get_column_names_str().contains(&column) {
        return Err(UtilsError::MissingColumn(column.to_string()));
    }

    let counts = df
        .clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().cast(DataType::Int64).alias(COUNT_COLUMN)])
        .sort([column], SortMultipleOptions::default())
        .collect()?;

    if tracing::enabled!(tracing::Level::DEBUG) {
        let labels = counts.column(column)?.cast(&DataType::String)?;
        let totals = counts.column(COUNT_COLUMN)?;
        for (label, n) in labels.str()?.into_iter().zip(totals.i64()?.into_iter()) {
            tracing::debug!(value = label.unwrap_or("null"), rows = n.unwrap_or(0), "group count");
        }
    }

    Ok(counts)
}
