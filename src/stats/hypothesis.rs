// Student's t-tests: independent (pooled and Welch), paired, one-sample
//
// Shape violations (empty samples, unpaired lengths) are errors. Zero
// variance is not: the statistic becomes 0/0 = NaN (or ±inf when the mean
// difference is non-zero) and the p-value follows, which is the
// conventional signal that no meaningful test exists for that data.

use crate::error::{DsmlError, Result};
use crate::stats::descriptive::{mean, variance};
use crate::stats::distribution::two_sided_p_value;
use serde::{Deserialize, Serialize};

/// Result of a t-test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TTestResult {
    /// t-statistic value (NaN for zero-variance samples)
    pub statistic: f64,

    /// Two-sided p-value
    /// - p < alpha: reject H0 at significance level alpha
    /// - NaN when the statistic is NaN
    pub p_value: f64,

    /// Degrees of freedom of the reference t-distribution
    pub df: f64,
}

impl TTestResult {
    fn new(statistic: f64, df: f64) -> Self {
        let p_value = two_sided_p_value(statistic, df);
        if statistic.is_nan() {
            tracing::warn!(df, "t-statistic undefined (zero variance or NaN input)");
        }
        Self {
            statistic,
            p_value,
            df,
        }
    }

    /// True when the samples had no variance to test against
    pub fn is_degenerate(&self) -> bool {
        self.statistic.is_nan()
    }

    /// True when `p_value < alpha`; a NaN p-value is never significant
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

fn require_non_empty(sample: &[f64], name: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(DsmlError::invalid(format!(
            "sample '{}' must not be empty",
            name
        )));
    }
    Ok(())
}

/// Independent two-sample t-test
///
/// With `equal_variance` the classic pooled-variance Student test is used
/// (df = n1 + n2 - 2); otherwise Welch's test with Welch–Satterthwaite
/// degrees of freedom.
///
/// # Example
/// ```
/// use dsml::stats::ttest_ind;
///
/// let baseline = [10.0, 12.0, 11.0, 13.0, 10.0];
/// let current = [25.0, 27.0, 26.0, 28.0, 25.0];
/// let result = ttest_ind(&baseline, &current, false).unwrap();
/// assert!(result.statistic < 0.0);
/// assert!(result.p_value < 0.05);
/// ```
pub fn ttest_ind(a: &[f64], b: &[f64], equal_variance: bool) -> Result<TTestResult> {
    require_non_empty(a, "a")?;
    require_non_empty(b, "b")?;

    tracing::debug!(
        n1 = a.len(),
        n2 = b.len(),
        equal_variance,
        "independent t-test"
    );

    Ok(ttest_ind_from_stats(
        mean(a),
        variance(a, 1).sqrt(),
        a.len(),
        mean(b),
        variance(b, 1).sqrt(),
        b.len(),
        equal_variance,
    ))
}

/// Independent two-sample t-test from summary statistics
///
/// `std1`/`std2` are sample standard deviations (n - 1 denominator).
pub fn ttest_ind_from_stats(
    mean1: f64,
    std1: f64,
    n1: usize,
    mean2: f64,
    std2: f64,
    n2: usize,
    equal_variance: bool,
) -> TTestResult {
    let n1 = n1 as f64;
    let n2 = n2 as f64;
    let v1 = std1 * std1;
    let v2 = std2 * std2;

    let (df, denom) = if equal_variance {
        let df = n1 + n2 - 2.0;
        let pooled = ((n1 - 1.0) * v1 + (n2 - 1.0) * v2) / df;
        (df, (pooled * (1.0 / n1 + 1.0 / n2)).sqrt())
    } else {
        let vn1 = v1 / n1;
        let vn2 = v2 / n2;
        let df = (vn1 + vn2).powi(2) / (vn1 * vn1 / (n1 - 1.0) + vn2 * vn2 / (n2 - 1.0));
        // 0/0 when both variances vanish
        let df = if df.is_nan() { 1.0 } else { df };
        (df, (vn1 + vn2).sqrt())
    };

    TTestResult::new((mean1 - mean2) / denom, df)
}

/// Paired two-sample t-test
///
/// One-sample test of the differences `a[i] - b[i]` against 0.
///
/// # Errors
/// `InvalidInput` when the samples are empty or of different lengths.
pub fn ttest_rel(a: &[f64], b: &[f64]) -> Result<TTestResult> {
    require_non_empty(a, "a")?;
    require_non_empty(b, "b")?;
    if a.len() != b.len() {
        return Err(DsmlError::invalid(format!(
            "paired samples must have the same length, got {} and {}",
            a.len(),
            b.len()
        )));
    }

    tracing::debug!(n = a.len(), "paired t-test");

    let diffs: Vec<f64> = a.iter().zip(b).map(|(x, y)| x - y).collect();
    Ok(one_sample(&diffs, 0.0))
}

/// One-sample t-test against `population_mean`
///
/// # Example
/// ```
/// use dsml::stats::ttest_1samp;
///
/// let result = ttest_1samp(&[1.0, -1.0, 2.0, -2.0], 0.0).unwrap();
/// assert!(result.statistic.abs() < 1e-12);
/// assert!((result.p_value - 1.0).abs() < 1e-12);
/// ```
pub fn ttest_1samp(a: &[f64], population_mean: f64) -> Result<TTestResult> {
    require_non_empty(a, "a")?;

    tracing::debug!(n = a.len(), population_mean, "one-sample t-test");

    Ok(one_sample(a, population_mean))
}

fn one_sample(data: &[f64], population_mean: f64) -> TTestResult {
    let n = data.len() as f64;
    let df = n - 1.0;
    let diff = mean(data) - population_mean;
    let denom = (variance(data, 1) / n).sqrt();
    TTestResult::new(diff / denom, df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ind_identical_samples() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let result = ttest_ind(&a, &a, true).unwrap();
        assert!(result.statistic.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-12);
        assert_eq!(result.df, 6.0);
    }

    #[test]
    fn test_ind_pooled_reference() {
        // mean1 = 2, mean2 = 5, both sample variances 1, pooled se = sqrt(2/3)
        let a = [1.0, 2.0, 3.0];
        let b = [4.0, 5.0, 6.0];
        let result = ttest_ind(&a, &b, true).unwrap();
        let expected = -3.0 / (2.0_f64 / 3.0).sqrt();
        assert!((result.statistic - expected).abs() < 1e-12);
        assert_eq!(result.df, 4.0);
        // t ≈ -3.674, df = 4
        assert!((result.p_value - 0.021_311_641_128_756).abs() < 1e-6);
    }

    #[test]
    fn test_ind_welch_df() {
        let a = [1.0, 2.0, 3.0, 4.0, 5.0];
        let b = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0];
        let result = ttest_ind(&a, &b, false).unwrap();

        let vn1: f64 = 2.5 / 5.0;
        let vn2: f64 = (112.0 / 6.0) / 7.0;
        let df = (vn1 + vn2).powi(2) / (vn1 * vn1 / 4.0 + vn2 * vn2 / 6.0);
        assert!((result.df - df).abs() < 1e-10);
        assert!((result.statistic - (3.0 - 8.0) / (vn1 + vn2).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_ind_zero_variance_is_nan() {
        let a = [3.0, 3.0, 3.0];
        let result = ttest_ind(&a, &a, true).unwrap();
        assert!(result.is_degenerate());
        assert!(result.p_value.is_nan());
        assert!(!result.is_significant(0.05));

        let welch = ttest_ind(&a, &a, false).unwrap();
        assert!(welch.statistic.is_nan());
        assert_eq!(welch.df, 1.0);
    }

    #[test]
    fn test_ind_rejects_empty() {
        assert!(ttest_ind(&[], &[1.0, 2.0], true).is_err());
        assert!(ttest_ind(&[1.0, 2.0], &[], false).is_err());
    }

    #[test]
    fn test_ind_unequal_lengths_allowed() {
        let result = ttest_ind(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0, 5.0, 6.0], true).unwrap();
        assert_eq!(result.df, 6.0);
        assert!(result.statistic < 0.0);
    }

    #[test]
    fn test_rel_identical_is_nan() {
        let a = [5.0, 6.0, 7.0];
        let result = ttest_rel(&a, &a).unwrap();
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_rel_matches_one_sample_on_differences() {
        let before = [5.0, 6.0, 7.0, 8.0, 9.0];
        let after = [5.5, 6.2, 7.1, 8.3, 9.4];
        let paired = ttest_rel(&before, &after).unwrap();
        let diffs: Vec<f64> = before.iter().zip(&after).map(|(a, b)| a - b).collect();
        let one = ttest_1samp(&diffs, 0.0).unwrap();

        assert_eq!(paired, one);
        assert!(paired.statistic < 0.0);
        assert_eq!(paired.df, 4.0);
    }

    #[test]
    fn test_rel_rejects_length_mismatch() {
        assert!(matches!(
            ttest_rel(&[1.0, 2.0], &[1.0]),
            Err(DsmlError::InvalidInput(_))
        ));
        assert!(ttest_rel(&[], &[]).is_err());
    }

    #[test]
    fn test_1samp_zero_mean() {
        let result = ttest_1samp(&[1.0, -1.0, 2.0, -2.0], 0.0).unwrap();
        assert!(result.statistic.abs() < 1e-12);
        assert!((result.p_value - 1.0).abs() < 1e-12);
        assert_eq!(result.df, 3.0);
    }

    #[test]
    fn test_1samp_reference() {
        // mean = 6, s = sqrt(10), n = 5: t = (6 - 4) / (sqrt(10) / sqrt(5)) = sqrt(2)
        let result = ttest_1samp(&[2.0, 4.0, 6.0, 8.0, 10.0], 4.0).unwrap();
        assert!((result.statistic - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!(result.p_value > 0.2 && result.p_value < 0.3);
    }

    #[test]
    fn test_1samp_constant_offset_is_infinite() {
        let result = ttest_1samp(&[2.0, 2.0, 2.0], 1.0).unwrap();
        assert_eq!(result.statistic, f64::INFINITY);
        assert_eq!(result.p_value, 0.0);
    }

    #[test]
    fn test_1samp_single_observation_is_nan() {
        let result = ttest_1samp(&[4.0], 0.0).unwrap();
        assert!(result.statistic.is_nan());
        assert!(result.p_value.is_nan());
    }

    #[test]
    fn test_1samp_rejects_empty() {
        assert!(ttest_1samp(&[], 0.0).is_err());
    }

    #[test]
    fn test_is_significant() {
        let result = ttest_ind(
            &[10.0, 12.0, 11.0, 13.0, 10.0],
            &[25.0, 27.0, 26.0, 28.0, 25.0],
            false,
        )
        .unwrap();
        assert!(result.is_significant(0.05));
        assert!(!result.is_significant(0.0));
    }
}
