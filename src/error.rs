//! Error type shared by every dsml module

use thiserror::Error;

/// Errors for dsml operations
///
/// Numeric degeneracies in hypothesis tests (zero variance) are not errors:
/// they surface as NaN fields in the returned record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DsmlError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, DsmlError>;

impl DsmlError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        DsmlError::InvalidInput(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        DsmlError::DegenerateInput(msg.into())
    }
}
