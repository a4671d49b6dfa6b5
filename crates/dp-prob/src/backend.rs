//! Evaluation methods.
//!
//! [`Method::Statrs`] delegates to the `statrs` distribution objects;
//! [`Method::Direct`] uses the closed-form formulas in this crate. Both sit
//! behind [`ProbabilityFunction`] and agree to floating-point tolerance.

use std::fmt;
use std::str::FromStr;

use dp_core::{Error, ProbabilityFunction, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Discrete};

use crate::math::as_count;
use crate::spec::DistributionSpec;

/// How probabilities are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// `statrs` distribution objects.
    #[default]
    Statrs,
    /// Closed-form formulas.
    Direct,
}

impl Method {
    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Statrs => "statrs",
            Self::Direct => "direct",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "statrs" | "library" => Ok(Self::Statrs),
            "direct" | "formula" => Ok(Self::Direct),
            other => Err(format!("unknown method '{}' (expected statrs or direct)", other)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum Inner {
    Geometric(statrs::distribution::Geometric),
    Binomial(statrs::distribution::Binomial),
    Poisson(statrs::distribution::Poisson),
    /// Degenerate case (Poisson `mu = 0`, geometric `p = 1`); statrs refuses
    /// `mu = 0` outright.
    PointMass(u64),
    Uniform(statrs::distribution::Uniform),
}

/// A [`DistributionSpec`] evaluated through `statrs`.
pub(crate) struct StatrsFunction {
    name: &'static str,
    inner: Inner,
}

impl StatrsFunction {
    pub(crate) fn new(spec: &DistributionSpec) -> Result<Self> {
        let name = spec.kind().as_str();

        let inner = match spec {
            DistributionSpec::Geometric(g) if g.p() == 1.0 => Inner::PointMass(1),
            DistributionSpec::Geometric(g) => Inner::Geometric(
                statrs::distribution::Geometric::new(g.p()).map_err(rejected("p"))?,
            ),
            // statrs only refuses `p` here; `n` is already a u64.
            DistributionSpec::Binomial(b) => Inner::Binomial(
                statrs::distribution::Binomial::new(b.p(), b.n()).map_err(rejected("p"))?,
            ),
            DistributionSpec::Poisson(p) if p.mu() == 0.0 => Inner::PointMass(0),
            DistributionSpec::Poisson(p) => Inner::Poisson(
                statrs::distribution::Poisson::new(p.mu()).map_err(rejected("mu"))?,
            ),
            DistributionSpec::Uniform(u) => Inner::Uniform(
                statrs::distribution::Uniform::new(u.low(), u.high()).map_err(rejected("low"))?,
            ),
        };
        Ok(Self { name, inner })
    }
}

/// Map a statrs constructor error onto the parameter it refused.
fn rejected<E: fmt::Display>(parameter: &'static str) -> impl Fn(E) -> Error {
    move |e| Error::invalid_parameter(parameter, format!("rejected by statrs: {}", e))
}

impl ProbabilityFunction for StatrsFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn is_continuous(&self) -> bool {
        matches!(self.inner, Inner::Uniform(_))
    }

    fn probability(&self, x: f64) -> f64 {
        match &self.inner {
            Inner::Uniform(d) => d.pdf(x),
            Inner::Geometric(d) => as_count(x).map_or(0.0, |k| d.pmf(k)),
            Inner::Binomial(d) => as_count(x).map_or(0.0, |k| d.pmf(k)),
            Inner::Poisson(d) => as_count(x).map_or(0.0, |k| d.pmf(k)),
            Inner::PointMass(at) => {
                if as_count(x) == Some(*at) { 1.0 } else { 0.0 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn both(spec: &DistributionSpec, xs: &[f64]) -> (Vec<f64>, Vec<f64>) {
        (
            spec.probabilities(xs, Method::Statrs).unwrap(),
            spec.probabilities(xs, Method::Direct).unwrap(),
        )
    }

    #[test]
    fn test_methods_agree() {
        let xs: Vec<f64> = (0..=25).map(|i| i as f64).chain([0.5, 2.5, 100.0]).collect();
        for spec in [
            DistributionSpec::geometric(0.3).unwrap(),
            DistributionSpec::geometric(1.0).unwrap(),
            DistributionSpec::binomial(12, 0.35).unwrap(),
            DistributionSpec::binomial(5, 0.0).unwrap(),
            DistributionSpec::binomial(5, 1.0).unwrap(),
            DistributionSpec::poisson(4.2).unwrap(),
            DistributionSpec::poisson(0.0).unwrap(),
            DistributionSpec::uniform(2.0, 9.5).unwrap(),
        ] {
            let (lib, direct) = both(&spec, &xs);
            for ((x, a), b) in xs.iter().zip(lib.iter()).zip(direct.iter()) {
                assert_relative_eq!(*a, *b, epsilon = 1e-12, max_relative = 1e-9);
                assert!(a.is_finite(), "{} at x={} gave {}", spec, x, a);
            }
        }
    }

    #[test]
    fn test_statrs_geometric_is_one_indexed() {
        let spec = DistributionSpec::geometric(0.5).unwrap();
        let f = spec.function(Method::Statrs).unwrap();
        assert_eq!(f.probability(0.0), 0.0);
        assert_relative_eq!(f.probability(1.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_function_metadata() {
        let f = DistributionSpec::uniform(0.0, 1.0).unwrap().function(Method::Statrs).unwrap();
        assert_eq!(f.name(), "uniform");
        assert!(f.is_continuous());
        let f = DistributionSpec::poisson(0.0).unwrap().function(Method::Statrs).unwrap();
        assert_eq!(f.name(), "poisson");
        assert!(!f.is_continuous());
    }

    #[test]
    fn test_statrs_rejection_names_parameter() {
        let err = statrs::distribution::Poisson::new(-1.0).map_err(rejected("mu")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "mu"));
        let err = statrs::distribution::Geometric::new(0.0).map_err(rejected("p")).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { ref name, .. } if name == "p"));
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("STATRS".parse::<Method>().unwrap(), Method::Statrs);
        assert_eq!("direct".parse::<Method>().unwrap(), Method::Direct);
        assert!("scipy".parse::<Method>().is_err());
    }
}
