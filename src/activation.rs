//! Neural-network activation functions

/// Rectified linear unit, `max(0, x)` elementwise
///
/// NaN inputs stay NaN.
pub fn relu(x: &[f64]) -> Vec<f64> {
    x.iter()
        .map(|&v| if v < 0.0 { 0.0 } else { v })
        .collect()
}

/// Softmax of a vector
///
/// The maximum is subtracted before exponentiating so large inputs do not
/// overflow. An empty input gives an empty output.
///
/// # Example
/// ```
/// use dsml::activation::softmax;
///
/// let p = softmax(&[0.0, 2.0_f64.ln(), 3.0_f64.ln()]);
/// assert!((p[2] - 0.5).abs() < 1e-12);
/// ```
pub fn softmax(x: &[f64]) -> Vec<f64> {
    if x.is_empty() {
        return Vec::new();
    }
    let max = x.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = x.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Softmax applied to each row independently (along the last axis)
pub fn softmax_rows(rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| softmax(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relu() {
        assert_eq!(relu(&[-1.0, 0.0, 2.0]), vec![0.0, 0.0, 2.0]);
        assert!(relu(&[f64::NAN])[0].is_nan());
    }

    #[test]
    fn test_softmax_known_values() {
        let out = softmax(&[0.0, 2.0_f64.ln(), 3.0_f64.ln()]);
        let expected = [1.0 / 6.0, 2.0 / 6.0, 3.0 / 6.0];
        for (o, e) in out.iter().zip(expected) {
            assert!((o - e).abs() < 1e-12);
        }
        assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_softmax_large_inputs_do_not_overflow() {
        let out = softmax(&[1000.0, 1000.0]);
        assert_eq!(out, vec![0.5, 0.5]);
    }

    #[test]
    fn test_softmax_shift_invariant() {
        let a = softmax(&[1.0, 2.0, 3.0]);
        let b = softmax(&[101.0, 102.0, 103.0]);
        for (x, y) in a.iter().zip(&b) {
            assert!((x - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_softmax_empty() {
        assert!(softmax(&[]).is_empty());
    }

    #[test]
    fn test_softmax_rows() {
        let rows = vec![vec![0.0, 0.0], vec![1.0, 1.0, 1.0, 1.0]];
        let out = softmax_rows(&rows);
        assert_eq!(out[0], vec![0.5, 0.5]);
        assert_eq!(out[1], vec![0.25; 4]);
    }
}
