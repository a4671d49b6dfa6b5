//! Binomial distribution utilities.

use dp_core::{Error, ProbabilityFunction, Result};

use crate::math::{as_count, ln_choose};

/// Binomial distribution `Binom(n, p)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Create `Binom(n, p)` with `p` in `[0, 1]`.
    pub fn new(n: u64, p: f64) -> Result<Self> {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_parameter(
                "p",
                format!("probability of success must be in [0, 1], got {}", p),
            ));
        }
        Ok(Self { n, p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability per trial.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Log-PMF at count `k`; `-inf` outside `0..=n`.
pub fn ln_pmf(k: u64, n: u64, p: f64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if p == 0.0 {
        return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
    }
    if p == 1.0 {
        return if k == n { 0.0 } else { f64::NEG_INFINITY };
    }
    let kf = k as f64;
    let nf = n as f64;
    ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln()
}

/// Closed-form PMF `C(n,x) p^x (1-p)^(n-x)`; 0 unless `x` is an integer in `0..=n`.
pub fn pmf(x: f64, n: u64, p: f64) -> f64 {
    match as_count(x) {
        Some(k) => ln_pmf(k, n, p).exp(),
        None => 0.0,
    }
}

impl ProbabilityFunction for Binomial {
    fn name(&self) -> &str {
        "binomial"
    }

    fn is_continuous(&self) -> bool {
        false
    }

    fn probability(&self, x: f64) -> f64 {
        pmf(x, self.n, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_pmf_n5_half() {
        let b = Binomial::new(5, 0.5).unwrap();
        assert_relative_eq!(b.probability(0.0), 0.03125, epsilon = 1e-12);
        assert_relative_eq!(b.probability(1.0), 0.15625, epsilon = 1e-12);
        assert_relative_eq!(b.probability(2.0), 0.3125, epsilon = 1e-12);
        assert_eq!(b.probability(6.0), 0.0);
        assert_eq!(b.probability(-1.0), 0.0);
    }

    #[test]
    fn test_edges_p0_p1() {
        assert_eq!(pmf(0.0, 5, 0.0), 1.0);
        assert_eq!(pmf(1.0, 5, 0.0), 0.0);
        assert_eq!(pmf(5.0, 5, 1.0), 1.0);
        assert_eq!(pmf(4.0, 5, 1.0), 0.0);
    }

    #[test]
    fn test_n_zero() {
        let b = Binomial::new(0, 0.3).unwrap();
        assert_eq!(b.probability(0.0), 1.0);
        assert_eq!(b.probability(1.0), 0.0);
    }

    #[test]
    fn test_invalid_p() {
        assert!(Binomial::new(4, -0.1).is_err());
        assert!(Binomial::new(4, 1.1).is_err());
        assert!(Binomial::new(4, f64::INFINITY).is_err());
    }

    #[test]
    fn test_large_n_does_not_overflow() {
        let total: f64 = (0..=2000).map(|k| pmf(k as f64, 2000, 0.5)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }
}
