//! RFM segmentation CLI tool.
//!
//! Reads a directory of transaction CSV files, grades every customer on
//! recency, frequency and monetary value, and writes the results as CSV.
//!
//! Usage: `cargo run --features cli --bin rfm -- --input DIR [--encoding LABEL] [--config FILE]`
//! Example: `cargo run --features cli --bin rfm -- --input data/CRM --encoding cp949`

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use rfmkit::{Pipeline, PipelineConfig, utils::write_csv};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rfm")]
#[command(about = "Grade customers by recency, frequency and monetary value", long_about = None)]
struct Cli {
    /// Directory holding the transaction CSV files
    #[arg(short, long, value_name = "DIR")]
    input: PathBuf,

    /// Encoding of the CSV files (utf-8, cp949, euc-kr, ...)
    #[arg(short, long, default_value = "utf-8")]
    encoding: String,

    /// JSON pipeline config; defaults are used when omitted
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Reference date for recency (YYYY-MM-DD), overrides the config
    #[arg(short, long)]
    reference_date: Option<NaiveDate>,

    /// Directory the result CSV files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_json_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(date) = cli.reference_date {
        config.reference_date = date;
    }
    info!(reference_date = %config.reference_date, "recency reference");

    let output = Pipeline::new(config)
        .run_dir(&cli.input, &cli.encoding)
        .with_context(|| format!("running pipeline over {}", cli.input.display()))?;

    std::fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;

    write_csv(&output.merged, cli.output_dir.join("rfm_df.csv")).context("writing rfm_df.csv")?;
    write_csv(&output.scored, cli.output_dir.join("result.csv")).context("writing result.csv")?;

    for (grade_column, range) in &output.ranges {
        let name = format!("range_{grade_column}.csv");
        write_csv(range, cli.output_dir.join(&name)).with_context(|| format!("writing {name}"))?;
        println!("{grade_column}\n{range}");
    }

    Ok(())
}
