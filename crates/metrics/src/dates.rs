//! Timestamp parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use rfmkit_traits::MetricError;

/// Compact numeric date format tried before free-form parsing.
pub const DEFAULT_DATE_FORMAT: &str = "%Y%m%d";

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y%m%d",
    "%m/%d/%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y%m%d%H%M%S",
    "%m/%d/%Y %H:%M",
];

/// Parse with one explicit format, accepting date-only formats as midnight.
#[must_use]
pub fn parse_date_fixed(value: &str, format: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, format).ok().or_else(|| {
        NaiveDate::parse_from_str(value, format).ok().and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

/// Parse a date or date-time in any of the common layouts.
///
/// Offsets in RFC 3339 input are normalized to UTC.
#[must_use]
pub fn parse_date_free_form(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parse a whole column.
///
/// The fixed format is tried on every row first; if any row fails, the
/// column is parsed again with the free-form parser. Rows failing both are
/// reported with their index.
pub(crate) fn parse_timestamps(
    column: &Column,
    format: &str,
) -> Result<Vec<NaiveDateTime>, MetricError> {
    let name = column.name().to_string();
    let text = column.cast(&DataType::String)?;
    let text = text.str()?;

    let fixed: Option<Vec<NaiveDateTime>> =
        text.into_iter().map(|v| v.and_then(|s| parse_date_fixed(s, format))).collect();
    if let Some(parsed) = fixed {
        return Ok(parsed);
    }

    tracing::debug!(column = %name, format, "fixed date format failed, falling back to free-form");

    text.into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.and_then(parse_date_free_form).ok_or_else(|| MetricError::Parse {
                column: name.clone(),
                row,
                value: v.unwrap_or_default().to_string(),
            })
        })
        .collect()
}
