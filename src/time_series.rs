//! Time-series feature engineering: lag features and rolling means
//!
//! Positions without enough history are NaN, so outputs always have the
//! same length as the input series.

use crate::error::{DsmlError, Result};
use crate::frame::{ColumnData, Frame};

/// Series shifted forward by `lag` steps, NaN-filled at the start
pub fn shift(series: &[f64], lag: usize) -> Vec<f64> {
    let n = series.len();
    let fill = lag.min(n);
    let mut shifted = vec![f64::NAN; fill];
    shifted.extend_from_slice(&series[..n - fill]);
    shifted
}

/// Frame with one `lag_{k}` column per requested lag
///
/// # Example
/// ```
/// use dsml::time_series::create_lag_features;
///
/// let lags = create_lag_features(&[1.0, 2.0, 3.0, 4.0], &[1, 2]);
/// assert_eq!(lags.column_names(), vec!["lag_1", "lag_2"]);
/// assert!(lags.numeric("lag_1").unwrap()[0].is_nan());
/// assert_eq!(lags.numeric("lag_1").unwrap()[1], 1.0);
/// ```
pub fn create_lag_features(series: &[f64], lags: &[usize]) -> Frame {
    let mut frame = Frame::new();
    for &lag in lags {
        let name = format!("lag_{}", lag);
        // Repeated lags would collide on the column name; keep the first
        if frame.column(&name).is_some() {
            continue;
        }
        if let Err(e) = frame.push_column(name, ColumnData::Numeric(shift(series, lag))) {
            tracing::warn!("Failed to add lag column {}: {}", lag, e);
        }
    }
    frame
}

/// Trailing mean over `window` observations
///
/// The first `window - 1` outputs are NaN, as is every window containing
/// a NaN.
///
/// # Errors
/// `InvalidInput` when `window` is 0.
pub fn rolling_mean(series: &[f64], window: usize) -> Result<Vec<f64>> {
    if window == 0 {
        return Err(DsmlError::invalid("window must be at least 1"));
    }

    let mut out = vec![f64::NAN; series.len()];
    if series.len() < window {
        return Ok(out);
    }

    for (i, values) in series.windows(window).enumerate() {
        out[i + window - 1] = values.iter().sum::<f64>() / window as f64;
    }
    Ok(out)
}
