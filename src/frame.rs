//! Minimal column-oriented table for the tabular helpers
//!
//! A `Frame` is an ordered list of named columns of equal length. Numeric
//! columns use NaN for missing values.

use crate::error::{DsmlError, Result};
use serde::{Deserialize, Serialize};

/// Values of a single column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnData {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take(&self, rows: &[usize]) -> ColumnData {
        match self {
            ColumnData::Numeric(values) => {
                ColumnData::Numeric(rows.iter().map(|&i| values[i]).collect())
            }
            ColumnData::Categorical(values) => {
                ColumnData::Categorical(rows.iter().map(|&i| values[i].clone()).collect())
            }
        }
    }
}

/// A named column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

/// Ordered collection of equal-length named columns
///
/// # Example
/// ```
/// use dsml::frame::Frame;
///
/// let frame = Frame::new()
///     .with_numeric("x", vec![1.0, 2.0, 3.0])
///     .unwrap()
///     .with_categorical("label", vec!["a", "b", "a"])
///     .unwrap();
/// assert_eq!(frame.n_rows(), 3);
/// assert_eq!(frame.column_names(), vec!["x", "label"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    ///
    /// # Errors
    /// `InvalidInput` on a duplicate name or when the length differs from
    /// the existing columns.
    pub fn push_column(&mut self, name: impl Into<String>, data: ColumnData) -> Result<()> {
        let name = name.into();
        if self.column(&name).is_some() {
            return Err(DsmlError::invalid(format!("duplicate column '{}'", name)));
        }
        if let Some(first) = self.columns.first() {
            if first.data.len() != data.len() {
                return Err(DsmlError::invalid(format!(
                    "column '{}' has {} rows, expected {}",
                    name,
                    data.len(),
                    first.data.len()
                )));
            }
        }
        self.columns.push(Column { name, data });
        Ok(())
    }

    /// Builder form of [`Frame::push_column`] for a numeric column
    pub fn with_numeric(mut self, name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        self.push_column(name, ColumnData::Numeric(values))?;
        Ok(self)
    }

    /// Builder form of [`Frame::push_column`] for a categorical column
    pub fn with_categorical<S: Into<String>>(
        mut self,
        name: impl Into<String>,
        values: Vec<S>,
    ) -> Result<Self> {
        let values = values.into_iter().map(Into::into).collect();
        self.push_column(name, ColumnData::Categorical(values))?;
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Values of a numeric column, `None` if absent or categorical
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Numeric(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// Values of a categorical column, `None` if absent or numeric
    pub fn categorical(&self, name: &str) -> Option<&[String]> {
        match self.column(name).map(|c| &c.data) {
            Some(ColumnData::Categorical(values)) => Some(values.as_slice()),
            _ => None,
        }
    }

    /// New frame holding the given rows, in the given order
    ///
    /// # Panics
    /// Panics if a row index is out of bounds.
    pub fn take_rows(&self, rows: &[usize]) -> Frame {
        Frame {
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    data: c.data.take(rows),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Frame {
        Frame::new()
            .with_numeric("a", vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_categorical("cat", vec!["x", "y", "x"])
            .unwrap()
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new();
        assert_eq!(frame.n_rows(), 0);
        assert_eq!(frame.n_columns(), 0);
    }

    #[test]
    fn test_accessors() {
        let frame = sample();
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(frame.n_columns(), 2);
        assert_eq!(frame.numeric("a"), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(frame.categorical("cat").unwrap()[1], "y");
        assert!(frame.numeric("cat").is_none());
        assert!(frame.categorical("a").is_none());
        assert!(frame.column("missing").is_none());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = sample().with_numeric("b", vec![1.0]).unwrap_err();
        assert!(matches!(err, DsmlError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_duplicate_name() {
        assert!(sample().with_numeric("a", vec![0.0, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_take_rows() {
        let frame = sample().take_rows(&[2, 0]);
        assert_eq!(frame.numeric("a"), Some(&[3.0, 1.0][..]));
        assert_eq!(frame.categorical("cat").unwrap(), &["x", "x"]);
    }
}
