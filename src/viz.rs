//! Data behind exploratory plots: histograms and correlation matrices
//!
//! Both are computed here and rendered as plain text; image rendering is
//! left to the caller's plotting tool.

use crate::error::{DsmlError, Result};
use crate::frame::{ColumnData, Frame};
use crate::stats::pearson;
use serde::{Deserialize, Serialize};

/// Equal-width histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, one more than the number of bins
    pub edges: Vec<f64>,
    /// Number of values falling in each bin
    pub counts: Vec<u64>,
}

impl Histogram {
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// One line per bin: `[lo, hi) count |####`, bars scaled to `width`
    pub fn render_text(&self, width: usize) -> String {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        let mut out = String::new();
        for (i, &count) in self.counts.iter().enumerate() {
            let bar_len = if max == 0 {
                0
            } else {
                ((count as f64 / max as f64) * width as f64).round() as usize
            };
            let close = if i + 1 == self.counts.len() { ']' } else { ')' };
            out.push_str(&format!(
                "[{:>10.4}, {:>10.4}{} {:>6} |{}\n",
                self.edges[i],
                self.edges[i + 1],
                close,
                count,
                "#".repeat(bar_len)
            ));
        }
        out
    }
}

/// Bin `data` into `bins` equal-width bins spanning its range
///
/// Every bin is half-open except the last, which also includes the
/// maximum. When all values are equal the range is widened to
/// `[v - 0.5, v + 0.5]`.
///
/// # Errors
/// `InvalidInput` for empty data, zero bins, non-finite values or a range
/// too wide to represent.
///
/// # Example
/// ```
/// use dsml::viz::histogram;
///
/// let hist = histogram(&[1.0, 2.0, 2.0, 3.0], 3).unwrap();
/// assert_eq!(hist.counts, vec![1, 2, 1]);
/// ```
pub fn histogram(data: &[f64], bins: usize) -> Result<Histogram> {
    if data.is_empty() {
        return Err(DsmlError::invalid("cannot build a histogram of no data"));
    }
    if bins == 0 {
        return Err(DsmlError::invalid("bins must be at least 1"));
    }
    if data.iter().any(|v| !v.is_finite()) {
        return Err(DsmlError::invalid("histogram data must be finite"));
    }

    let mut lo = data.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    if !(hi - lo).is_finite() {
        return Err(DsmlError::invalid("histogram range overflows f64"));
    }

    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins)
        .map(|i| if i == bins { hi } else { lo + width * i as f64 })
        .collect();

    let mut counts = vec![0u64; bins];
    for &v in data {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        // Floating-point rounding can land a value one bin off its edges
        let idx = if v < edges[idx] {
            idx - 1
        } else if idx + 1 < bins && v >= edges[idx + 1] {
            idx + 1
        } else {
            idx
        };
        counts[idx] += 1;
    }

    Ok(Histogram { edges, counts })
}

/// Square matrix of pairwise Pearson correlations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two labelled columns
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        Some(self.values[i][j])
    }

    /// Annotated grid with `precision` decimals per cell
    pub fn render_text(&self, precision: usize) -> String {
        let cell = self
            .labels
            .iter()
            .map(String::len)
            .max()
            .unwrap_or(0)
            .max(precision + 3);

        let mut out = format!("{:>cell$}", "", cell = cell);
        for label in &self.labels {
            out.push_str(&format!(" {:>cell$}", label, cell = cell));
        }
        out.push('\n');

        for (label, row) in self.labels.iter().zip(&self.values) {
            out.push_str(&format!("{:>cell$}", label, cell = cell));
            for v in row {
                out.push_str(&format!(" {:>cell$.prec$}", v, cell = cell, prec = precision));
            }
            out.push('\n');
        }
        out
    }
}

/// Correlation matrix over the numeric columns of `frame`
///
/// Categorical columns are skipped. A constant column correlates as NaN
/// with everything, itself included.
///
/// # Errors
/// `InvalidInput` when the frame has no numeric columns.
pub fn correlation_matrix(frame: &Frame) -> Result<CorrelationMatrix> {
    let numeric: Vec<(&str, &[f64])> = frame
        .columns()
        .iter()
        .filter_map(|c| match &c.data {
            ColumnData::Numeric(values) => Some((c.name.as_str(), values.as_slice())),
            ColumnData::Categorical(_) => None,
        })
        .collect();

    if numeric.is_empty() {
        return Err(DsmlError::invalid(
            "correlation matrix needs at least one numeric column",
        ));
    }

    let k = numeric.len();
    let mut values = vec![vec![f64::NAN; k]; k];
    for i in 0..k {
        for j in i..k {
            let r = if i == j {
                // 1 unless the column is constant
                let self_r = pearson(numeric[i].1, numeric[i].1);
                if self_r.is_nan() {
                    f64::NAN
                } else {
                    1.0
                }
            } else {
                pearson(numeric[i].1, numeric[j].1)
            };
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        labels: numeric.iter().map(|(name, _)| name.to_string()).collect(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_three_bins() {
        let hist = histogram(&[1.0, 2.0, 2.0, 3.0], 3).unwrap();
        assert_eq!(hist.n_bins(), 3);
        assert_eq!(hist.counts, vec![1, 2, 1]);
        assert_eq!(hist.edges.len(), 4);
        assert_eq!(hist.edges[0], 1.0);
        assert_eq!(hist.edges[3], 3.0);
    }

    #[test]
    fn test_histogram_max_in_last_bin() {
        let hist = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 2).unwrap();
        // [0, 2) and [2, 4]
        assert_eq!(hist.counts, vec![2, 3]);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_histogram_constant_data() {
        let hist = histogram(&[5.0, 5.0, 5.0], 4).unwrap();
        assert_eq!(hist.edges[0], 4.5);
        assert_eq!(hist.edges[4], 5.5);
        assert_eq!(hist.total(), 3);
        assert_eq!(hist.counts, vec![0, 0, 3, 0]);
    }

    #[test]
    fn test_histogram_awkward_edges() {
        // 0.1 steps are not exact in binary; every value must still land
        let data: Vec<f64> = (0..=10).map(|i| i as f64 * 0.1).collect();
        let hist = histogram(&data, 10).unwrap();
        assert_eq!(hist.total(), 11);
        assert_eq!(hist.edges[0], 0.0);
        assert_eq!(hist.edges[10], data[10]);
        assert!(hist.counts.iter().all(|&c| c >= 1));
    }

    #[test]
    fn test_histogram_errors() {
        assert!(histogram(&[], 3).is_err());
        assert!(histogram(&[1.0], 0).is_err());
        assert!(histogram(&[1.0, f64::NAN], 2).is_err());
        assert!(histogram(&[1.0, f64::INFINITY], 2).is_err());
        assert!(histogram(&[-f64::MAX, f64::MAX], 2).is_err());
    }

    #[test]
    fn test_histogram_render() {
        let hist = histogram(&[1.0, 2.0, 2.0, 3.0], 3).unwrap();
        let text = hist.render_text(10);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(&"#".repeat(10)));
        assert!(lines[0].ends_with(&format!("|{}", "#".repeat(5))));
        assert!(lines[2].contains(']'));
    }

    #[test]
    fn test_correlation_matrix() {
        let frame = Frame::new()
            .with_numeric("x", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_numeric("y", vec![3.0, 2.0, 1.0])
            .unwrap();
        let corr = correlation_matrix(&frame).unwrap();

        assert_eq!(corr.labels, vec!["x", "y"]);
        assert_eq!(corr.get("x", "x"), Some(1.0));
        assert!((corr.get("x", "y").unwrap() + 1.0).abs() < 1e-12);
        assert_eq!(corr.get("x", "y"), corr.get("y", "x"));
        assert_eq!(corr.get("x", "z"), None);
    }

    #[test]
    fn test_correlation_matrix_skips_categorical_and_flags_constant() {
        let frame = Frame::new()
            .with_numeric("x", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_categorical("label", vec!["a", "b", "c"])
            .unwrap()
            .with_numeric("flat", vec![4.0, 4.0, 4.0])
            .unwrap();
        let corr = correlation_matrix(&frame).unwrap();

        assert_eq!(corr.labels, vec!["x", "flat"]);
        assert!(corr.get("flat", "flat").unwrap().is_nan());
        assert!(corr.get("x", "flat").unwrap().is_nan());
    }

    #[test]
    fn test_correlation_matrix_requires_numeric() {
        let frame = Frame::new().with_categorical("c", vec!["a"]).unwrap();
        assert!(correlation_matrix(&frame).is_err());
    }

    #[test]
    fn test_correlation_render() {
        let frame = Frame::new()
            .with_numeric("x", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_numeric("y", vec![3.0, 2.0, 1.0])
            .unwrap();
        let text = correlation_matrix(&frame).unwrap().render_text(2);
        assert!(text.contains("1.00"));
        assert!(text.contains("-1.00"));
        assert_eq!(text.lines().count(), 3);
    }
}
