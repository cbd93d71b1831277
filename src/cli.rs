//! CLI argument parsing for benford

use crate::processor::RoutingMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for classification results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "benford")]
#[command(version)]
#[command(about = "Classify documents by Benford's Law leading-digit conformance", long_about = None)]
pub struct Cli {
    /// Documents to classify ("-" or none reads stdin)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Load classifier settings from a TOML file (flags override it)
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Significance level for rejecting Benford conformance (default: 0.05)
    #[arg(short = 'a', long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Minimum leading-digit observations before testing (default: 5)
    #[arg(
        short = 'm',
        long = "min-sample",
        value_name = "COUNT",
        allow_negative_numbers = true,
        conflicts_with = "no_min_sample"
    )]
    pub min_sample: Option<i64>,

    /// Always run the test regardless of sample size
    #[arg(long = "no-min-sample")]
    pub no_min_sample: bool,

    /// Report documents without any digits as conforming instead of insufficient
    #[arg(long = "legacy-zero-sample")]
    pub legacy_zero_sample: bool,

    /// Relationship naming (conformance or suspicion)
    #[arg(long = "routing", value_enum, default_value = "conformance")]
    pub routing: RoutingMode,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Show per-document chi-squared report (text format only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Show summary of documents per relationship on stderr
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Copy each document unchanged into DIR/<RELATIONSHIP>/
    #[arg(long = "route-dir", value_name = "DIR")]
    pub route_dir: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
