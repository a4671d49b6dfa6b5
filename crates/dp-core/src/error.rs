//! Error types for distplot

use thiserror::Error;

/// distplot error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A distribution parameter is missing, unexpected, or out of range.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name as written by the user (`p`, `n`, `mu`, `low`, `high`).
        name: String,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// Input values cannot be evaluated under the active value policy.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Distribution name outside the supported kinds.
    #[error("Unsupported distribution '{0}' (expected one of: geometric, binomial, poisson, uniform)")]
    UnsupportedDistribution(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter { name: name.into(), reason: reason.into() }
    }
}

/// Why an input range was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Reject policy: a negative value was present.
    #[error("all values must be non-negative, got {value}")]
    NegativeValue {
        /// First negative value encountered.
        value: f64,
    },

    /// Filter policy: nothing survived the filtering.
    #[error("all input values are negative, cannot compute probabilities (removed: {removed:?})")]
    AllNegative {
        /// Values that were removed.
        removed: Vec<f64>,
    },

    /// A value was NaN.
    #[error("value at position {index} is not a number")]
    NotANumber {
        /// Position in the input range.
        index: usize,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_parameter("p", "must be in (0, 1], got 1.5");
        assert!(err.to_string().contains("'p'"));
        assert!(err.to_string().contains("1.5"));

        let err = Error::UnsupportedDistribution("gaussian".into());
        assert!(err.to_string().contains("gaussian"));

        let err: Error = InputError::NegativeValue { value: -1.0 }.into();
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_all_negative_lists_removed() {
        let err = Error::from(InputError::AllNegative { removed: vec![-3.0, -1.0] });
        let msg = err.to_string();
        assert!(msg.contains("all input values are negative"));
        assert!(msg.contains("-3.0"));
    }
}
