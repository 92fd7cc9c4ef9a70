// Statistics facade: simple linear regression and Student's t-tests
//
// Every function here is a pure computation over f64 slices returning a
// fixed-shape record. The numerics are self-contained:
// - descriptive: mean, variance, Pearson correlation
// - special: log-gamma (Lanczos) and the regularized incomplete beta
//   function (continued fraction)
// - distribution: Student's t CDF and two-sided tail probability
// - regression: ordinary least squares fit with slope significance test
// - hypothesis: independent (pooled / Welch), paired and one-sample t-tests
//
// Policy: shape violations (empty or mismatched inputs) are errors; zero
// variance in a t-test yields NaN fields rather than an error.

mod descriptive;
mod distribution;
mod hypothesis;
mod regression;
mod special;

pub use descriptive::{mean, pearson, std_dev, variance};
pub use distribution::StudentT;
pub use hypothesis::{ttest_1samp, ttest_ind, ttest_ind_from_stats, ttest_rel, TTestResult};
pub use regression::{linear_regression, LinearRegressionResult};
pub use special::{ln_gamma, regularized_incomplete_beta};
