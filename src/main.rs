use anyhow::{Context, Result};
use clap::Parser;
use dsml::cli::{load_values, Cli, Command};
use dsml::config::ReportConfig;
use dsml::{report, stats, time_series, viz};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(args: Cli, config: &ReportConfig) -> Result<String> {
    let format = args.format;
    let output = match args.command {
        Command::Linregress { x, y } => {
            let fit = stats::linear_regression(&load_values(&x)?, &load_values(&y)?)?;
            report::render_regression(&fit, format, config)?
        }
        Command::TtestInd { a, b, welch } => {
            let result = stats::ttest_ind(&load_values(&a)?, &load_values(&b)?, !welch)?;
            let name = if welch {
                "Independent t-test (Welch)"
            } else {
                "Independent t-test (Student)"
            };
            report::render_ttest(name, &result, format, config)?
        }
        Command::TtestRel { a, b } => {
            let result = stats::ttest_rel(&load_values(&a)?, &load_values(&b)?)?;
            report::render_ttest("Paired t-test", &result, format, config)?
        }
        Command::Ttest1Samp { a, popmean } => {
            let result = stats::ttest_1samp(&load_values(&a)?, popmean)?;
            let name = format!("One-sample t-test (population mean {})", popmean);
            report::render_ttest(&name, &result, format, config)?
        }
        Command::Histogram { data, bins, width } => {
            let hist = viz::histogram(&load_values(&data)?, bins)?;
            report::render_histogram(&hist, width, format)?
        }
        Command::RollingMean { data, window } => {
            let means = time_series::rolling_mean(&load_values(&data)?, window)?;
            report::render_series(&means, format, config)?
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let config = ReportConfig {
        significance_level: args.alpha,
        precision: args.precision,
    };
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid report configuration: {}", e))?;

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let output = run(args, &config).context("dsml command failed")?;
    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
