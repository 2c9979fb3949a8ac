//! Column extraction for numeric work.

use ndarray::Array1;
use polars::prelude::*;
use rfmkit_traits::is_numeric;

use crate::ScoringError;

/// Read a numeric column as `f64`, rejecting missing, non-numeric, null
/// and NaN input.
pub(crate) fn float_values(df: &DataFrame, name: &str) -> Result<Array1<f64>, ScoringError> {
    let column = df.column(name).map_err(|_| ScoringError::MissingColumn(name.to_string()))?;
    if !is_numeric(column.dtype()) {
        return Err(ScoringError::NonNumeric {
            column: name.to_string(),
            dtype: column.dtype().to_string(),
        });
    }
    if column.null_count() > 0 {
        return Err(ScoringError::NullValues(name.to_string()));
    }

    let cast = column.cast(&DataType::Float64)?;
    let values: Array1<f64> = cast.f64()?.into_no_null_iter().collect();
    if values.iter().any(|x| x.is_nan()) {
        return Err(ScoringError::NullValues(name.to_string()));
    }

    Ok(values)
}
