//! Geometric distribution (number of trials until the first success).

use dp_core::{Error, ProbabilityFunction, Result};

use crate::math::as_count;

/// Geometric distribution, 1-indexed: `P(X = x) = (1-p)^(x-1) * p` for `x >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Create a geometric distribution with success probability `p` in `(0, 1]`.
    pub fn new(p: f64) -> Result<Self> {
        if !p.is_finite() || p <= 0.0 || p > 1.0 {
            return Err(Error::invalid_parameter(
                "p",
                format!("probability of success must be in (0, 1], got {}", p),
            ));
        }
        Ok(Self { p })
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

/// Closed-form PMF at `x`; 0 for anything that is not an integer `>= 1`.
///
/// No parameter validation: callers go through [`Geometric::new`].
pub fn pmf(x: f64, p: f64) -> f64 {
    match as_count(x) {
        Some(k) if k >= 1 => (1.0 - p).powf((k - 1) as f64) * p,
        _ => 0.0,
    }
}

impl ProbabilityFunction for Geometric {
    fn name(&self) -> &str {
        "geometric"
    }

    fn is_continuous(&self) -> bool {
        false
    }

    fn probability(&self, x: f64) -> f64 {
        pmf(x, self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometric_creation() {
        assert!(Geometric::new(0.3).is_ok());
        assert!(Geometric::new(1.0).is_ok());
        assert!(Geometric::new(0.0).is_err());
        assert!(Geometric::new(-0.1).is_err());
        assert!(Geometric::new(1.1).is_err());
        assert!(Geometric::new(f64::NAN).is_err());
    }

    #[test]
    fn test_geometric_pmf() {
        let g = Geometric::new(0.5).unwrap();
        assert_eq!(g.probability(0.0), 0.0);
        assert_relative_eq!(g.probability(1.0), 0.5, epsilon = 1e-15);
        assert_relative_eq!(g.probability(2.0), 0.25, epsilon = 1e-15);
        assert_relative_eq!(g.probability(3.0), 0.125, epsilon = 1e-15);
        assert_eq!(g.probability(1.5), 0.0);
    }

    #[test]
    fn test_geometric_p_equals_1() {
        let g = Geometric::new(1.0).unwrap();
        assert_eq!(g.probability(1.0), 1.0);
        assert_eq!(g.probability(2.0), 0.0);
    }
}
