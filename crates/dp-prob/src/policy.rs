//! What to do with negative input values.

use std::fmt;
use std::str::FromStr;

use dp_core::{InputError, Result};
use serde::{Deserialize, Serialize};

/// Treatment of negative values in an input range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicy {
    /// Fail on the first negative value.
    #[default]
    Reject,
    /// Drop negative values and report them alongside the result.
    Filter,
}

impl ValuePolicy {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Filter => "filter",
        }
    }

    /// Split `values` into the ones to evaluate and the ones removed.
    ///
    /// Relative order is preserved in both halves. A NaN anywhere is an
    /// error under either policy.
    ///
    /// # Errors
    ///
    /// - [`InputError::NotANumber`] for a NaN value.
    /// - [`InputError::NegativeValue`] (reject) for the first negative value.
    /// - [`InputError::AllNegative`] (filter) when nothing is kept, which
    ///   includes an empty input.
    pub fn apply(self, values: &[f64]) -> Result<Partition> {
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(InputError::NotANumber { index }.into());
        }

        match self {
            Self::Reject => {
                if let Some(&value) = values.iter().find(|v| **v < 0.0) {
                    return Err(InputError::NegativeValue { value }.into());
                }
                Ok(Partition { kept: values.to_vec(), removed: Vec::new() })
            }
            Self::Filter => {
                let (kept, removed): (Vec<f64>, Vec<f64>) =
                    values.iter().copied().partition(|v| *v >= 0.0);
                if kept.is_empty() {
                    return Err(InputError::AllNegative { removed }.into());
                }
                Ok(Partition { kept, removed })
            }
        }
    }
}

impl FromStr for ValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "filter" => Ok(Self::Filter),
            other => Err(format!("unknown value policy '{}' (expected reject or filter)", other)),
        }
    }
}

impl fmt::Display for ValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of [`ValuePolicy::apply`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Values to evaluate, in input order.
    pub kept: Vec<f64>,
    /// Negative values dropped by [`ValuePolicy::Filter`], in input order.
    pub removed: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_core::Error;

    #[test]
    fn test_reject_keeps_everything() {
        let part = ValuePolicy::Reject.apply(&[3.0, 0.0, 1.5]).unwrap();
        assert_eq!(part.kept, vec![3.0, 0.0, 1.5]);
        assert!(part.removed.is_empty());
    }

    #[test]
    fn test_reject_negative() {
        let err = ValuePolicy::Reject.apply(&[0.0, -2.0, -1.0]).unwrap_err();
        assert_eq!(err, Error::InvalidInput(InputError::NegativeValue { value: -2.0 }));
    }

    #[test]
    fn test_reject_empty_is_ok() {
        let part = ValuePolicy::Reject.apply(&[]).unwrap();
        assert!(part.kept.is_empty());
    }

    #[test]
    fn test_filter_partitions_in_order() {
        let part = ValuePolicy::Filter.apply(&[2.0, -1.0, 0.0, -5.0, 1.0]).unwrap();
        assert_eq!(part.kept, vec![2.0, 0.0, 1.0]);
        assert_eq!(part.removed, vec![-1.0, -5.0]);
    }

    #[test]
    fn test_filter_all_negative() {
        let err = ValuePolicy::Filter.apply(&[-3.0, -1.0]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput(InputError::AllNegative { removed: vec![-3.0, -1.0] })
        );
        assert!(matches!(
            ValuePolicy::Filter.apply(&[]),
            Err(Error::InvalidInput(InputError::AllNegative { .. }))
        ));
    }

    #[test]
    fn test_nan_rejected_by_both() {
        for policy in [ValuePolicy::Reject, ValuePolicy::Filter] {
            let err = policy.apply(&[1.0, f64::NAN]).unwrap_err();
            assert_eq!(err, Error::InvalidInput(InputError::NotANumber { index: 1 }));
        }
    }

    #[test]
    fn test_negative_zero_is_kept() {
        let part = ValuePolicy::Filter.apply(&[-0.0]).unwrap();
        assert_eq!(part.kept.len(), 1);
        assert!(ValuePolicy::Reject.apply(&[-0.0]).is_ok());
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("Filter".parse::<ValuePolicy>().unwrap(), ValuePolicy::Filter);
        assert_eq!(ValuePolicy::default(), ValuePolicy::Reject);
        assert!("drop".parse::<ValuePolicy>().is_err());
    }
}
