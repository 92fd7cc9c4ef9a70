//! CLI argument parsing for dsml

use clap::{Parser, Subcommand, ValueEnum};
use std::path::Path;

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dsml")]
#[command(version)]
#[command(about = "Statistical tests, regression and feature helpers for numeric samples", long_about = None)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Significance level used to label results (default: 0.05)
    #[arg(long = "alpha", value_name = "ALPHA", default_value = "0.05", global = true)]
    pub alpha: f64,

    /// Decimal places in text output (default: 4)
    #[arg(long = "precision", value_name = "DIGITS", default_value = "4", global = true)]
    pub precision: usize,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Sample values: a comma-separated list (`1,2,3`) or `@FILE` with
/// numbers separated by commas or whitespace
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ordinary least squares fit of y on x
    Linregress {
        /// Predictor values
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        x: String,
        /// Response values
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        y: String,
    },

    /// Independent two-sample t-test
    TtestInd {
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        a: String,
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        b: String,
        /// Use Welch's test (do not assume equal variances)
        #[arg(long)]
        welch: bool,
    },

    /// Paired two-sample t-test
    TtestRel {
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        a: String,
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        b: String,
    },

    /// One-sample t-test against a population mean
    #[command(name = "ttest-1samp")]
    Ttest1Samp {
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        a: String,
        /// Hypothesised population mean
        #[arg(long, value_name = "MEAN", default_value = "0.0", allow_hyphen_values = true)]
        popmean: f64,
    },

    /// Equal-width histogram of the values
    Histogram {
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        data: String,
        /// Number of bins (default: 10)
        #[arg(long, default_value = "10")]
        bins: usize,
        /// Width of the longest bar in characters (default: 40)
        #[arg(long, default_value = "40")]
        width: usize,
    },

    /// Trailing rolling mean of the values
    RollingMean {
        #[arg(long, value_name = "VALUES", allow_hyphen_values = true)]
        data: String,
        /// Window size
        #[arg(long)]
        window: usize,
    },
}

/// Parse numbers separated by commas and/or whitespace
///
/// Empty fields are skipped, so trailing commas and blank lines are fine.
pub fn parse_values(input: &str) -> Result<Vec<f64>, String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("invalid number '{}'", token))
        })
        .collect()
}

/// Resolve a VALUES argument: inline list, or `@PATH` to read from a file
pub fn load_values(arg: &str) -> anyhow::Result<Vec<f64>> {
    use anyhow::Context;

    let values = match arg.strip_prefix('@') {
        Some(path) => {
            let content = std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read values from {}", path))?;
            parse_values(&content).map_err(|e| anyhow::anyhow!("{} in {}", e, path))?
        }
        None => parse_values(arg).map_err(|e| anyhow::anyhow!(e))?,
    };
    tracing::debug!(count = values.len(), "loaded values");
    Ok(values)
}
