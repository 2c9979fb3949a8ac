//! CSV export.

use std::{fs::File, path::Path};

use polars::prelude::*;

use crate::UtilsError;

/// Write `df` to `path` as comma-delimited text with a header row.
///
/// # Errors
/// Returns `UtilsError::Io` if the file cannot be created and a polars
/// error if serialization fails.
pub fn write_csv(df: &DataFrame, path: impl AsRef<Path>) -> Result<(), UtilsError> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|e| UtilsError::io(path, e))?;

    let mut out = df.clone();
    CsvWriter::new(&mut file).include_header(true).with_separator(b',').finish(&mut out)?;

    tracing::info!(file = %path.display(), rows = df.height(), "wrote csv");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let df = df! { "ID" => &[1i64, 2], "score" => &[2.5, 4.25] }.unwrap();

        write_csv(&df, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["ID,score", "1,2.5", "2,4.25"]);
    }

    #[test]
    fn unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = write_csv(&DataFrame::empty(), dir.path().join("no/such/dir.csv")).unwrap_err();
        assert!(matches!(err, UtilsError::Io { .. }));
    }
}
