//! Text and JSON reports for statistical results
//!
//! JSON output serializes NaN fields as `null`.

use crate::cli::OutputFormat;
use crate::config::ReportConfig;
use crate::stats::{LinearRegressionResult, TTestResult};
use crate::viz::Histogram;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct RegressionReport<'a> {
    test: &'static str,
    #[serde(flatten)]
    result: &'a LinearRegressionResult,
    r_squared: f64,
    significant: bool,
    significance_level: f64,
}

#[derive(Debug, Serialize)]
struct TTestReport<'a> {
    test: &'a str,
    #[serde(flatten)]
    result: &'a TTestResult,
    significant: bool,
    significance_level: f64,
}

fn verdict_line(p_value: f64, config: &ReportConfig) -> String {
    if p_value.is_nan() {
        "⚠️  UNDEFINED (zero variance or NaN input, no meaningful test)\n".to_string()
    } else if p_value < config.significance_level {
        format!(
            "✅ SIGNIFICANT at alpha={} ({}% confidence)\n",
            config.significance_level,
            (1.0 - config.significance_level) * 100.0
        )
    } else {
        format!(
            "❌ NOT SIGNIFICANT at alpha={}\n",
            config.significance_level
        )
    }
}

/// Render a linear regression fit
pub fn render_regression(
    result: &LinearRegressionResult,
    format: OutputFormat,
    config: &ReportConfig,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&RegressionReport {
            test: "linear_regression",
            result,
            r_squared: result.r_squared(),
            significant: result.p_value < config.significance_level,
            significance_level: config.significance_level,
        }),
        OutputFormat::Text => {
            let p = config.precision;
            let mut report = String::new();
            report.push_str("📊 Linear Regression (ordinary least squares)\n\n");
            report.push_str(&format!("  slope:            {:.p$}\n", result.slope));
            report.push_str(&format!("  intercept:        {:.p$}\n", result.intercept));
            report.push_str(&format!(
                "  r:                {:.p$}\n",
                result.correlation_coefficient
            ));
            report.push_str(&format!("  r²:               {:.p$}\n", result.r_squared()));
            report.push_str(&format!("  p-value:          {:.p$e}\n", result.p_value));
            report.push_str(&format!(
                "  std err (slope):  {:.p$}\n",
                result.standard_error
            ));
            report.push_str(&format!(
                "  std err (icept):  {:.p$}\n\n",
                result.intercept_standard_error
            ));
            report.push_str(&verdict_line(result.p_value, config));
            Ok(report)
        }
    }
}

/// Render a t-test result; `test` names the design (e.g. "Paired t-test")
pub fn render_ttest(
    test: &str,
    result: &TTestResult,
    format: OutputFormat,
    config: &ReportConfig,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&TTestReport {
            test,
            result,
            significant: result.is_significant(config.significance_level),
            significance_level: config.significance_level,
        }),
        OutputFormat::Text => {
            let p = config.precision;
            let mut report = String::new();
            report.push_str(&format!("📊 {}\n\n", test));
            report.push_str(&format!("  statistic:  {:.p$}\n", result.statistic));
            report.push_str(&format!("  p-value:    {:.p$e}\n", result.p_value));
            report.push_str(&format!("  df:         {:.p$}\n\n", result.df));
            report.push_str(&verdict_line(result.p_value, config));
            Ok(report)
        }
    }
}

/// Render a histogram as bars (text) or edges and counts (JSON)
pub fn render_histogram(
    histogram: &Histogram,
    width: usize,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(histogram),
        OutputFormat::Text => Ok(histogram.render_text(width)),
    }
}

/// Render a numeric series, one value per line (text) or as a JSON array
pub fn render_series(
    values: &[f64],
    format: OutputFormat,
    config: &ReportConfig,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(values),
        OutputFormat::Text => {
            let p = config.precision;
            Ok(values.iter().map(|v| format!("{:.p$}\n", v)).collect())
        }
    }
}
