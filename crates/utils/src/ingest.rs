//! Directory of encoded CSV files into a single frame.

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use encoding_rs::Encoding;
use polars::prelude::*;

use crate::UtilsError;

/// Read every `.csv` file in `dir` and stack them into one frame.
///
/// Files are taken in file-name order and decoded with `encoding`, a WHATWG
/// label or Windows code page name (for example `utf-8`, `cp949`, `euc-kr`,
/// `cp1252`). Columns missing in some files come through as nulls. A
/// directory without CSV files yields an empty frame.
///
/// # Errors
/// Returns `UtilsError::UnknownEncoding` for an unrecognized label,
/// `UtilsError::Decode` if any file holds bytes invalid in that encoding,
/// `UtilsError::Io` for filesystem failures and a polars error if a file
/// cannot be parsed or the frames cannot be stacked.
pub fn read_multi_csv(dir: impl AsRef<Path>, encoding: &str) -> Result<DataFrame, UtilsError> {
    let dir = dir.as_ref();
    let encoding = resolve_encoding(encoding)?;

    tracing::info!(path = %dir.display(), encoding = encoding.name(), "reading csv directory");

    let files = csv_files(dir)?;
    if files.is_empty() {
        tracing::info!(rows = 0, "no csv files found");
        return Ok(DataFrame::empty());
    }

    let mut frames = Vec::with_capacity(files.len());
    for path in &files {
        let df = read_one(path, encoding)?;
        tracing::info!(file = %path.display(), rows = df.height(), "read csv file");
        frames.push(df.lazy());
    }

    let combined = concat_lf_diagonal(frames, UnionArgs::default())?.collect()?;

    tracing::info!(files = files.len(), rows = combined.height(), "accumulated rows");

    Ok(combined)
}

/// Windows code page names that are not WHATWG labels.
fn code_page_alias(name: &str) -> Option<&'static Encoding> {
    match name.to_ascii_lowercase().as_str() {
        "cp949" | "ms949" | "uhc" => Some(encoding_rs::EUC_KR),
        "cp932" | "ms932" => Some(encoding_rs::SHIFT_JIS),
        "cp936" | "ms936" => Some(encoding_rs::GBK),
        "cp950" | "ms950" => Some(encoding_rs::BIG5),
        "cp1250" => Some(encoding_rs::WINDOWS_1250),
        "cp1251" => Some(encoding_rs::WINDOWS_1251),
        "cp1252" => Some(encoding_rs::WINDOWS_1252),
        "cp65001" => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

/// Resolve a WHATWG label or a Windows code page name.
fn resolve_encoding(label: &str) -> Result<&'static Encoding, UtilsError> {
    let trimmed = label.trim();
    code_page_alias(trimmed)
        .or_else(|| Encoding::for_label(trimmed.as_bytes()))
        .ok_or_else(|| UtilsError::UnknownEncoding(label.to_string()))
}

fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, UtilsError> {
    let entries = fs::read_dir(dir).map_err(|e| UtilsError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| UtilsError::io(dir, e))?.path();
        let is_csv =
            path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    Ok(files)
}

fn read_one(path: &Path, encoding: &'static Encoding) -> Result<DataFrame, UtilsError> {
    let bytes = fs::read(path).map_err(|e| UtilsError::io(path, e))?;

    let text = encoding.decode_without_bom_handling_and_without_replacement(&bytes).ok_or_else(
        || UtilsError::Decode { path: path.to_path_buf(), encoding: encoding.name().to_string() },
    )?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
        .finish()?;

    Ok(df)
}
