// Descriptive statistics over f64 slices
//
// NaN propagates through every function here. Callers that need a
// different missing-value policy filter their input first.

/// Arithmetic mean (NaN for an empty slice)
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Variance with `ddof` delta degrees of freedom
///
/// `ddof = 0` gives the population variance, `ddof = 1` the unbiased sample
/// variance. Returns NaN when `data.len() <= ddof`.
///
/// # Example
/// ```
/// use dsml::stats::variance;
///
/// let v = variance(&[2.0, 4.0, 6.0, 8.0], 1);
/// assert!((v - 20.0 / 3.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64], ddof: usize) -> f64 {
    let n = data.len();
    if n <= ddof {
        return f64::NAN;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    ss / (n - ddof) as f64
}

/// Standard deviation with `ddof` delta degrees of freedom
pub fn std_dev(data: &[f64], ddof: usize) -> f64 {
    variance(data, ddof).sqrt()
}

/// Pearson correlation coefficient of two equal-length slices
///
/// Returns NaN when the lengths differ, fewer than two points are given,
/// or either slice is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return f64::NAN;
    }
    let (ssxm, ssxym, ssym) = centered_moments(x, y);
    let denom = (ssxm * ssym).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    (ssxym / denom).clamp(-1.0, 1.0)
}

/// Biased second moments `(var(x), cov(x, y), var(y))`, divided by n
pub(crate) fn centered_moments(x: &[f64], y: &[f64]) -> (f64, f64, f64) {
    let n = x.len() as f64;
    let xm = mean(x);
    let ym = mean(y);

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - xm;
        let dy = yi - ym;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }

    (sxx / n, sxy / n, syy / n)
}
