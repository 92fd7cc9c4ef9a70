// Simple linear regression by ordinary least squares
//
// The fit is computed from biased second moments (divided by n):
//   slope     = cov(x, y) / var(x)
//   intercept = ȳ - slope · x̄
//   r         = cov(x, y) / sqrt(var(x) · var(y))
//
// The slope test statistic is written in terms of r so a perfect fit
// (|r| = 1) yields a large finite statistic instead of 0/0.

use crate::error::{DsmlError, Result};
use crate::stats::descriptive::{centered_moments, mean};
use crate::stats::distribution::two_sided_p_value;
use serde::{Deserialize, Serialize};

/// Keeps the slope statistic finite when |r| == 1
const TINY: f64 = 1.0e-20;

/// Result of a simple linear regression of y on x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionResult {
    /// Slope of the least-squares line
    pub slope: f64,

    /// Intercept of the least-squares line
    pub intercept: f64,

    /// Pearson correlation coefficient, in [-1, 1]
    pub correlation_coefficient: f64,

    /// Two-sided p-value for H0: slope = 0 (t-distribution, n - 2 df)
    pub p_value: f64,

    /// Standard error of the slope estimate
    pub standard_error: f64,

    /// Standard error of the intercept estimate
    pub intercept_standard_error: f64,
}

impl LinearRegressionResult {
    /// Coefficient of determination (r²)
    pub fn r_squared(&self) -> f64 {
        self.correlation_coefficient * self.correlation_coefficient
    }

    /// Value of the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `y = intercept + slope · x` by ordinary least squares
///
/// # Errors
/// - `InvalidInput` when the slices differ in length or hold fewer than 2 points
/// - `DegenerateInput` when every x value is identical, or their spread
///   underflows to zero
///
/// With exactly two points the line passes through both, so the standard
/// errors are 0 and the p-value is 0 (1 if the two y values are equal).
///
/// # Example
/// ```
/// use dsml::stats::linear_regression;
///
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// let fit = linear_regression(&x, &y).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!(fit.p_value < 1e-6);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> Result<LinearRegressionResult> {
    if x.is_empty() || y.is_empty() {
        return Err(DsmlError::invalid("inputs must not be empty"));
    }
    if x.len() != y.len() {
        return Err(DsmlError::invalid(format!(
            "x and y must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    let n = x.len();
    if n < 2 {
        return Err(DsmlError::invalid(
            "linear regression needs at least 2 points",
        ));
    }
    if x.iter().all(|&v| v == x[0]) {
        return Err(DsmlError::degenerate(
            "cannot fit a line when all x values are identical",
        ));
    }

    let (ssxm, ssxym, ssym) = centered_moments(x, y);
    // Distinct x values can still have a spread that underflows to zero
    if ssxm == 0.0 {
        return Err(DsmlError::degenerate(
            "spread of x values underflows; cannot fit a line",
        ));
    }
    let xmean = mean(x);
    let ymean = mean(y);

    let r_den = (ssxm * ssym).sqrt();
    let r = if r_den == 0.0 {
        0.0
    } else {
        (ssxym / r_den).clamp(-1.0, 1.0)
    };

    let slope = ssxym / ssxm;
    let intercept = ymean - slope * xmean;

    let (p_value, standard_error, intercept_standard_error) = if n == 2 {
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0, 0.0)
    } else {
        let df = (n - 2) as f64;
        let t = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
        let p = two_sided_p_value(t, df);
        let slope_se = ((1.0 - r * r) * ssym / ssxm / df).sqrt();
        let intercept_se = slope_se * (ssxm + xmean * xmean).sqrt();
        (p, slope_se, intercept_se)
    };

    tracing::debug!(
        n,
        slope,
        intercept,
        r,
        p_value,
        "linear regression fitted"
    );

    Ok(LinearRegressionResult {
        slope,
        intercept,
        correlation_coefficient: r,
        p_value,
        standard_error,
        intercept_standard_error,
    })
}
