//! Report configuration
//!
//! Results are never affected by configuration; it only controls how they
//! are judged and printed.

use serde::{Deserialize, Serialize};

/// Configuration for rendering statistical results
///
/// # Example
/// ```
/// use dsml::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.significance_level, 0.05); // 95% confidence
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Significance level (alpha) used to label p-values as significant
    ///
    /// - 0.05 (default): 95% confidence
    /// - 0.01: stricter, fewer false positives
    /// - 0.10: looser, fewer false negatives
    pub significance_level: f64,

    /// Decimal places printed for floating-point fields in text reports
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            significance_level: 0.05,
            precision: 4,
        }
    }
}

impl ReportConfig {
    /// 99% confidence
    pub fn strict() -> Self {
        Self {
            significance_level: 0.01,
            ..Self::default()
        }
    }

    /// 90% confidence
    pub fn permissive() -> Self {
        Self {
            significance_level: 0.10,
            ..Self::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(format!(
                "significance_level must be in (0, 1), got {}",
                self.significance_level
            ));
        }

        if self.precision > 12 {
            return Err(format!(
                "precision must be at most 12, got {}",
                self.precision
            ));
        }

        Ok(())
    }
}
