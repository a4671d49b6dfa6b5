//! Poisson distribution utilities.

use dp_core::{Error, ProbabilityFunction, Result};

use crate::math::{as_count, ln_fact};

/// Poisson distribution with mean `mu >= 0`.
///
/// `mu = 0` is the point mass at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Poisson {
    mu: f64,
}

impl Poisson {
    /// Create a Poisson distribution with mean `mu`.
    pub fn new(mu: f64) -> Result<Self> {
        if !mu.is_finite() || mu < 0.0 {
            return Err(Error::invalid_parameter(
                "mu",
                format!("mean must be finite and >= 0, got {}", mu),
            ));
        }
        Ok(Self { mu })
    }

    /// Mean (and variance).
    pub fn mu(&self) -> f64 {
        self.mu
    }
}

/// Log-PMF `k ln(mu) - mu - ln(k!)` at count `k`.
pub fn ln_pmf(k: u64, mu: f64) -> f64 {
    if mu == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    (k as f64) * mu.ln() - mu - ln_fact(k)
}

/// Closed-form PMF `mu^x e^(-mu) / x!`; 0 unless `x` is a non-negative integer.
pub fn pmf(x: f64, mu: f64) -> f64 {
    match as_count(x) {
        Some(k) => ln_pmf(k, mu).exp(),
        None => 0.0,
    }
}

impl ProbabilityFunction for Poisson {
    fn name(&self) -> &str {
        "poisson"
    }

    fn is_continuous(&self) -> bool {
        false
    }

    fn probability(&self, x: f64) -> f64 {
        pmf(x, self.mu)
    }
}
