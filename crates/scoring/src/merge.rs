//! Outer join of per-customer metric tables.

use std::collections::BTreeMap;

use polars::prelude::*;

use crate::ScoringError;

/// Merges metric tables on shared key columns.
///
/// Every customer seen in any table appears once in the result, rows sorted
/// by key. Cells a table did not provide are filled per column: zero by
/// default, overridable (or disabled with `None`) per metric column.
#[derive(Debug, Clone)]
pub struct TableMerger {
    keys: Vec<String>,
    default_fill: Option<f64>,
    fills: BTreeMap<String, Option<f64>>,
}

impl TableMerger {
    /// Create a merger joining on `keys`, zero-filling missing values.
    #[must_use]
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            default_fill: Some(0.0),
            fills: BTreeMap::new(),
        }
    }

    /// Fill value for columns without an override. `None` keeps nulls.
    #[must_use]
    pub fn default_fill(mut self, value: Option<f64>) -> Self {
        self.default_fill = value;
        self
    }

    /// Fill value for one column. `None` keeps nulls.
    #[must_use]
    pub fn fill_value(mut self, column: impl Into<String>, value: Option<f64>) -> Self {
        self.fills.insert(column.into(), value);
        self
    }

    /// Join key columns.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    fn fill_for(&self, column: &str) -> Option<f64> {
        self.fills.get(column).copied().unwrap_or(self.default_fill)
    }

    /// Outer join all tables and apply fill values.
    ///
    /// # Errors
    /// Returns `ScoringError::InvalidInput` for no tables or no keys,
    /// `ScoringError::MissingColumn` if a table lacks a key column, or a
    /// polars error if the join fails (for example on mismatched key types).
    pub fn merge(&self, tables: &[DataFrame]) -> Result<DataFrame, ScoringError> {
        let (first, rest) = tables
            .split_first()
            .ok_or_else(|| ScoringError::InvalidInput("no tables to merge".into()))?;
        if self.keys.is_empty() {
            return Err(ScoringError::InvalidInput("merge needs at least one key".into()));
        }

        let mut value_columns: Vec<String> = Vec::new();
        for table in tables {
            let names = table.get_column_names_str();
            if let Some(missing) = self.keys.iter().find(|k| !names.contains(&k.as_str())) {
                return Err(ScoringError::MissingColumn(missing.clone()));
            }
            for name in names {
                if !self.keys.iter().any(|k| k == name)
                    && !value_columns.iter().any(|c| c == name)
                {
                    value_columns.push(name.to_string());
                }
            }
        }

        let key_exprs: Vec<Expr> = self.keys.iter().map(|k| col(k.as_str())).collect();
        let join_args =
            JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns);

        let mut lf = first.clone().lazy();
        for table in rest {
            lf = lf.join(table.clone().lazy(), key_exprs.clone(), key_exprs.clone(), join_args.clone());
        }

        let fills: Vec<Expr> = value_columns
            .iter()
            .filter_map(|c| self.fill_for(c).map(|v| col(c.as_str()).fill_null(lit(v))))
            .collect();
        if !fills.is_empty() {
            lf = lf.with_columns(fills);
        }

        let merged = lf.sort_by_exprs(key_exprs, SortMultipleOptions::default()).collect()?;

        tracing::info!(customers = merged.height(), tables = tables.len(), "metric tables merged");

        Ok(merged)
    }
}
