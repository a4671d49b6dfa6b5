//! Policy-aware evaluation.

use dp_core::{ProbabilityResult, Result};

use crate::backend::Method;
use crate::policy::{Partition, ValuePolicy};
use crate::spec::{DistributionSpec, Parameters};

/// Evaluates a [`DistributionSpec`] over an input range under a [`ValuePolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    policy: ValuePolicy,
    method: Method,
}

impl Evaluator {
    /// Evaluator with the given policy and the default [`Method`].
    pub fn new(policy: ValuePolicy) -> Self {
        Self { policy, method: Method::default() }
    }

    /// Switch the evaluation method.
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Active value policy.
    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }

    /// Active evaluation method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Apply the policy to `values`, then evaluate what is kept.
    ///
    /// Nothing is evaluated if the policy refuses the input.
    pub fn evaluate(&self, spec: &DistributionSpec, values: &[f64]) -> Result<ProbabilityResult> {
        let partition = self.policy.apply(values)?;
        self.evaluate_partition(spec, partition)
    }

    /// Evaluate the kept side of a partition already produced by
    /// [`ValuePolicy::apply`]. `removed` is carried into the result as is.
    pub fn evaluate_partition(
        &self,
        spec: &DistributionSpec,
        partition: Partition,
    ) -> Result<ProbabilityResult> {
        let function = spec.function(self.method)?;
        let probabilities = function.probabilities(&partition.kept);
        Ok(ProbabilityResult::from_parts(&partition.kept, &probabilities, partition.removed))
    }
}

/// Evaluate a distribution given by name and parameter mapping.
///
/// Uses the default [`Method`]. The name is matched case-insensitively and
/// the mapping must hold exactly the parameters of that kind.
///
/// The value policy runs first: an input error wins over an unknown name or
/// a bad parameter.
pub fn evaluate(
    name: &str,
    parameters: &Parameters,
    values: &[f64],
    policy: ValuePolicy,
) -> Result<ProbabilityResult> {
    let partition = policy.apply(values)?;
    let spec = DistributionSpec::from_named(name, parameters)?;
    Evaluator::new(policy).evaluate_partition(&spec, partition)
}

/// Inclusive integer range `start..=end` as floats; empty when `start > end`.
pub fn inclusive_range(start: i64, end: i64) -> Vec<f64> {
    (start..=end).map(|v| v as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use dp_core::{Error, InputError};

    fn binom_5_half() -> Parameters {
        [("n".to_string(), 5.0), ("p".to_string(), 0.5)].into_iter().collect()
    }

    #[test]
    fn test_reject_negative_input() {
        let err = evaluate("binomial", &binom_5_half(), &[-1.0, 0.0, 1.0], ValuePolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputError::NegativeValue { .. })));
    }

    #[test]
    fn test_filter_negative_input() {
        for method in [Method::Statrs, Method::Direct] {
            let spec = DistributionSpec::binomial(5, 0.5).unwrap();
            let out = Evaluator::new(ValuePolicy::Filter)
                .with_method(method)
                .evaluate(&spec, &[-1.0, 0.0, 1.0])
                .unwrap();
            assert_eq!(out.removed, vec![-1.0]);
            assert_eq!(out.values(), vec![0.0, 1.0]);
            let probs = out.probabilities();
            assert_relative_eq!(probs[0], 0.03125, epsilon = 1e-6);
            assert_relative_eq!(probs[1], 0.15625, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_unsupported_distribution() {
        let err = evaluate("gaussian", &Parameters::new(), &[0.0], ValuePolicy::Reject).unwrap_err();
        assert_eq!(err, Error::UnsupportedDistribution("gaussian".into()));
    }

    #[test]
    fn test_filter_all_negative() {
        let err = evaluate("binomial", &binom_5_half(), &[-3.0, -1.0], ValuePolicy::Filter)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputError::AllNegative { .. })));
    }

    #[test]
    fn test_input_checked_before_dispatch() {
        let err = evaluate("gaussian", &Parameters::new(), &[-1.0], ValuePolicy::Reject)
            .unwrap_err();
        assert_eq!(err, Error::InvalidInput(InputError::NegativeValue { value: -1.0 }));

        let bad_p: Parameters = [("p".to_string(), 1.5)].into_iter().collect();
        let err = evaluate("geometric", &bad_p, &[-1.0], ValuePolicy::Reject).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputError::NegativeValue { .. })));

        let err = evaluate("gaussian", &Parameters::new(), &[-3.0, -1.0], ValuePolicy::Filter)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(InputError::AllNegative { .. })));
    }

    #[test]
    fn test_evaluate_partition_keeps_removed() {
        let spec = DistributionSpec::poisson(2.0).unwrap();
        let evaluator = Evaluator::new(ValuePolicy::Filter).with_method(Method::Direct);
        let partition = evaluator.policy().apply(&[-2.0, 0.0, 1.0]).unwrap();
        let out = evaluator.evaluate_partition(&spec, partition).unwrap();
        assert_eq!(out.removed, vec![-2.0]);
        assert_eq!(out.values(), vec![0.0, 1.0]);
        assert_eq!(evaluator.method(), Method::Direct);
    }

    #[test]
    fn test_parameters_checked_under_both_policies() {
        let params: Parameters = [("p".to_string(), 1.5)].into_iter().collect();
        for policy in [ValuePolicy::Reject, ValuePolicy::Filter] {
            let err = evaluate("geometric", &params, &[1.0], policy).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "p"));
        }
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let params: Parameters = [("mu".to_string(), 2.0)].into_iter().collect();
        let out = evaluate("PoIsSoN", &params, &[0.0, 1.0], ValuePolicy::Reject).unwrap();
        assert_relative_eq!(out.probabilities()[0], (-2.0_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_order_preserved() {
        let spec = DistributionSpec::geometric(0.5).unwrap();
        let out = Evaluator::new(ValuePolicy::Reject).evaluate(&spec, &[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(out.values(), vec![3.0, 1.0, 2.0]);
        assert_relative_eq!(out.probabilities()[1], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_reject_empty_input() {
        let spec = DistributionSpec::poisson(1.0).unwrap();
        let out = Evaluator::default().evaluate(&spec, &[]).unwrap();
        assert!(out.is_empty());
        assert!(out.removed.is_empty());
    }

    #[test]
    fn test_uniform_real_values() {
        let params: Parameters =
            [("low".to_string(), 0.0), ("high".to_string(), 4.0)].into_iter().collect();
        let out = evaluate("uniform", &params, &[0.5, 4.0, 4.5], ValuePolicy::Reject).unwrap();
        assert_eq!(out.probabilities(), vec![0.25, 0.25, 0.0]);
    }

    #[test]
    fn test_inclusive_range() {
        assert_eq!(inclusive_range(-1, 2), vec![-1.0, 0.0, 1.0, 2.0]);
        assert_eq!(inclusive_range(3, 3), vec![3.0]);
        assert!(inclusive_range(4, 3).is_empty());
    }
}
