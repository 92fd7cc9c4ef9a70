//! Dataset preparation: train/test splitting and one-hot encoding

use crate::error::{DsmlError, Result};
use crate::frame::{ColumnData, Frame};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;

/// Shuffled row indices split into `(train, test)`
///
/// `n_test = ceil(test_size * n)` and `n_train = n - n_test`; both must be
/// at least 1. The same seed always produces the same split.
pub fn split_indices(
    n: usize,
    test_size: f64,
    random_state: Option<u64>,
) -> Result<(Vec<usize>, Vec<usize>)> {
    if test_size.is_nan() || test_size <= 0.0 || test_size >= 1.0 {
        return Err(DsmlError::invalid(format!(
            "test_size must be in (0, 1), got {}",
            test_size
        )));
    }

    let n_test = (test_size * n as f64).ceil() as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(DsmlError::invalid(format!(
            "with {} rows and test_size={}, the train set would have {} rows and the test set {}",
            n, test_size, n_train, n_test
        )));
    }

    let mut rng = match random_state {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(&mut rng);

    let train = permutation.split_off(n_test);
    tracing::debug!(n, n_train, n_test, ?random_state, "split rows");
    Ok((train, permutation))
}

/// Split a frame into `(train, test)` frames
///
/// # Example
/// ```
/// use dsml::frame::Frame;
/// use dsml::preprocessing::train_test_split;
///
/// let frame = Frame::new()
///     .with_numeric("a", (0..10).map(f64::from).collect())
///     .unwrap();
/// let (train, test) = train_test_split(&frame, 0.3, Some(0)).unwrap();
/// assert_eq!(train.n_rows(), 7);
/// assert_eq!(test.n_rows(), 3);
/// ```
pub fn train_test_split(
    frame: &Frame,
    test_size: f64,
    random_state: Option<u64>,
) -> Result<(Frame, Frame)> {
    let (train, test) = split_indices(frame.n_rows(), test_size, random_state)?;
    Ok((frame.take_rows(&train), frame.take_rows(&test)))
}

/// One-hot encode the named categorical columns
///
/// Columns not being encoded keep their relative order. Each encoded
/// column is dropped and indicator columns `{column}_{value}` (values in
/// sorted order, holding 1.0 or 0.0) are appended at the end, in the
/// order the columns were requested.
///
/// # Errors
/// `InvalidInput` for an unknown column or a numeric column.
pub fn encode_categorical(frame: &Frame, columns: &[&str]) -> Result<Frame> {
    for &name in columns {
        match frame.column(name).map(|c| &c.data) {
            None => {
                return Err(DsmlError::invalid(format!("unknown column '{}'", name)));
            }
            Some(ColumnData::Numeric(_)) => {
                return Err(DsmlError::invalid(format!(
                    "column '{}' is numeric, expected categorical",
                    name
                )));
            }
            Some(ColumnData::Categorical(_)) => {}
        }
    }

    let mut encoded = Frame::new();
    for column in frame.columns() {
        if !columns.contains(&column.name.as_str()) {
            encoded.push_column(column.name.clone(), column.data.clone())?;
        }
    }

    for &name in columns {
        let Some(values) = frame.categorical(name) else {
            continue;
        };
        let levels: BTreeSet<&str> = values.iter().map(String::as_str).collect();
        tracing::debug!(column = name, levels = levels.len(), "one-hot encoding");

        for level in levels {
            let indicator = values
                .iter()
                .map(|v| if v == level { 1.0 } else { 0.0 })
                .collect();
            encoded.push_column(format!("{}_{}", name, level), ColumnData::Numeric(indicator))?;
        }
    }

    Ok(encoded)
}
