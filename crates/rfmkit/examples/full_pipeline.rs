//! Example: Full RFM Pipeline
//!
//! This example demonstrates the complete rfmkit workflow on an in-memory
//! transaction table:
//! 1. Computing recency, frequency and monetary value per customer
//! 2. Grading each metric with a different binning strategy
//! 3. Combining the grades into a weighted score
//! 4. Printing the grade ranges behind the monetary grades
//!
//! Run with: `cargo run --example full_pipeline --features full`

use chrono::NaiveDate;
use polars::prelude::*;
use rfmkit::{Pipeline, PipelineConfig, primitives::WeightMap, scoring::GradeConfig};

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Number of synthetic customers.
const CUSTOMERS: usize = 40;

/// Purchases per customer cycle through this many counts.
const MAX_PURCHASES: usize = 6;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let transactions = synthetic_transactions()?;
    println!("Transactions: {} rows\n{}", transactions.height(), transactions.head(Some(5)));

    let config = PipelineConfig {
        reference_date: NaiveDate::from_ymd_opt(2022, 2, 16).ok_or("invalid reference date")?,
        grade: GradeConfig::new(5)
            .metric("R", "recency", "quantile")
            .metric("F", "frequency", "min_max")
            .metric("M", "monetary", vec![50.0, 150.0, 300.0, 600.0]),
        weight_point: WeightMap::new()
            .with("recency_R", 0.5)
            .with("frequency_F", 0.2)
            .with("monetary_M", 0.3),
        ..PipelineConfig::default()
    };

    let output = Pipeline::new(config).run(&transactions)?;

    println!("\nRFM table:\n{}", output.merged.head(Some(10)));

    let top = output
        .scored
        .clone()
        .lazy()
        .sort(["score"], SortMultipleOptions::new().with_order_descending(true))
        .limit(10)
        .collect()?;
    println!("\nTop customers by score:\n{top}");

    for (grade_column, range) in &output.ranges {
        println!("\nRanges for {grade_column}:\n{range}");
    }

    Ok(())
}

// ============================================================================
// DATA
// ============================================================================

/// Deterministic transactions: customer `i` buys `1 + i % MAX_PURCHASES`
/// times, with prices and dates spread by simple arithmetic.
fn synthetic_transactions() -> PolarsResult<DataFrame> {
    let mut ids = Vec::new();
    let mut dates = Vec::new();
    let mut prices = Vec::new();

    for i in 0..CUSTOMERS {
        for k in 0..=(i % MAX_PURCHASES) {
            let day = 1 + (i * 7 + k * 11) % 45;
            let date = if day <= 31 {
                format!("202201{day:02}")
            } else {
                format!("202202{:02}", day - 31)
            };
            ids.push(format!("C{i:03}"));
            dates.push(date);
            prices.push(((i * 37 + k * 53) % 200) as f64 + 9.99);
        }
    }

    df! {
        "ID" => ids,
        "DT" => dates,
        "PRICE" => prices,
    }
}
