//! Numeric column checks.

use polars::prelude::*;
use rfmkit_traits::{MetricError, is_numeric};

/// Fail with `MetricError::NonNumeric` unless `column` is numeric.
pub(crate) fn ensure_numeric(data: &DataFrame, column: &str) -> Result<(), MetricError> {
    let dtype = data.column(column)?.dtype();
    if is_numeric(dtype) {
        Ok(())
    } else {
        Err(MetricError::NonNumeric { column: column.to_string(), dtype: dtype.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_numeric_reports_dtype() {
        let df = df! { "price" => &["1.0", "x"], "qty" => &[1i64, 2] }.unwrap();
        let err = ensure_numeric(&df, "price").unwrap_err();
        assert!(matches!(err, MetricError::NonNumeric { ref column, .. } if column == "price"));
        assert!(ensure_numeric(&df, "qty").is_ok());
    }
}
