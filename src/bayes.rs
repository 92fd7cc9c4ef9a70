//! Bayesian updating for binary outcomes (Beta-Binomial conjugate model)
//!
//! A Beta(α, β) prior on a success probability, updated with observed
//! successes and failures, gives a Beta(α + successes, β + failures)
//! posterior.

use crate::error::{DsmlError, Result};
use serde::{Deserialize, Serialize};

/// Posterior (α, β) of a Beta prior after observing binary outcomes
///
/// # Example
/// ```
/// use dsml::bayes::beta_posterior;
///
/// assert_eq!(beta_posterior(1.0, 1.0, 3, 2), (4.0, 3.0));
/// ```
pub fn beta_posterior(alpha: f64, beta: f64, successes: u64, failures: u64) -> (f64, f64) {
    (alpha + successes as f64, beta + failures as f64)
}

/// Mean of a Beta(α, β) distribution
pub fn expected_beta(alpha: f64, beta: f64) -> f64 {
    alpha / (alpha + beta)
}

/// Validated Beta distribution parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaPrior {
    alpha: f64,
    beta: f64,
}

impl BetaPrior {
    /// Create a Beta(α, β) prior; both parameters must be finite and positive
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DsmlError::invalid(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )));
            }
        }
        Ok(Self { alpha, beta })
    }

    /// Beta(1, 1): uniform over [0, 1]
    pub fn uniform() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Posterior after observing `successes` and `failures`
    pub fn update(&self, successes: u64, failures: u64) -> Self {
        let (alpha, beta) = beta_posterior(self.alpha, self.beta, successes, failures);
        tracing::debug!(alpha, beta, "beta posterior updated");
        Self { alpha, beta }
    }

    pub fn mean(&self) -> f64 {
        expected_beta(self.alpha, self.beta)
    }

    /// αβ / ((α + β)² (α + β + 1))
    pub fn variance(&self) -> f64 {
        let total = self.alpha + self.beta;
        self.alpha * self.beta / (total * total * (total + 1.0))
    }
}

impl Default for BetaPrior {
    fn default() -> Self {
        Self::uniform()
    }
}
