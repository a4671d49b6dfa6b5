//! Continuous uniform distribution on `[low, high]`.

use dp_core::{Error, ProbabilityFunction, Result};

/// Continuous uniform distribution with constant density `1 / (high - low)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    low: f64,
    high: f64,
}

impl Uniform {
    /// Create `U(low, high)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, if `low >= high`
    /// (a zero-width interval has no density), or if `high - low` overflows.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() {
            return Err(Error::invalid_parameter("low", format!("must be finite, got {}", low)));
        }
        if !high.is_finite() {
            return Err(Error::invalid_parameter("high", format!("must be finite, got {}", high)));
        }
        if low >= high {
            return Err(Error::invalid_parameter(
                "low",
                format!("lower bound must be less than upper bound (got low={}, high={})", low, high),
            ));
        }
        if !(high - low).is_finite() {
            return Err(Error::invalid_parameter(
                "high",
                format!("interval width overflows (got low={}, high={})", low, high),
            ));
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound.
    pub fn high(&self) -> f64 {
        self.high
    }
}

/// Closed-form PDF: `1 / (high - low)` on the closed interval, 0 outside.
pub fn pdf(x: f64, low: f64, high: f64) -> f64 {
    if low <= x && x <= high { 1.0 / (high - low) } else { 0.0 }
}

impl ProbabilityFunction for Uniform {
    fn name(&self) -> &str {
        "uniform"
    }

    fn is_continuous(&self) -> bool {
        true
    }

    fn probability(&self, x: f64) -> f64 {
        pdf(x, self.low, self.high)
    }
}
