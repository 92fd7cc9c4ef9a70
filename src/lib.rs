//! dsml - Statistical tests and data-science helpers in pure Rust
//!
//! The core is a statistics facade over `f64` slices: ordinary least squares
//! regression with a slope significance test, and Student's t-tests
//! (independent with pooled or Welch variance, paired, one-sample). Around
//! it sit small helpers for Bayesian updates, activations, column frames,
//! preprocessing, lag features and plot data.
//!
//! # Example
//! ```
//! let fit = dsml::linear_regression(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//!
//! let test = dsml::ttest_ind(&[1.0, 2.0, 3.0, 4.0], &[1.0, 2.0, 3.0, 4.0], true).unwrap();
//! assert_eq!(test.statistic, 0.0);
//! ```

pub mod activation;
pub mod bayes;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod preprocessing;
pub mod report;
pub mod stats;
pub mod time_series;
pub mod viz;

pub use error::{DsmlError, Result};
pub use frame::Frame;
pub use stats::{
    linear_regression, ttest_1samp, ttest_ind, ttest_rel, LinearRegressionResult, TTestResult,
};

/// Crate version, as reported by `dsml --version`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
