//! Distribution kinds, typed parameter records, and the name-based dispatcher.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use dp_core::{Error, ProbabilityFunction, Result};
use serde::{Deserialize, Serialize};

use crate::backend::{Method, StatrsFunction};
use crate::binomial::Binomial;
use crate::geometric::Geometric;
use crate::poisson::Poisson;
use crate::uniform::Uniform;

/// Named numeric parameters, as supplied by a user or a config file.
pub type Parameters = BTreeMap<String, f64>;

/// The four supported distribution families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Trials until the first success.
    Geometric,
    /// Successes in `n` trials.
    Binomial,
    /// Event counts with mean `mu`.
    Poisson,
    /// Continuous uniform on `[low, high]`.
    Uniform,
}

impl DistributionKind {
    /// All kinds, in display order.
    pub const ALL: [DistributionKind; 4] =
        [Self::Geometric, Self::Binomial, Self::Poisson, Self::Uniform];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::Binomial => "binomial",
            Self::Poisson => "poisson",
            Self::Uniform => "uniform",
        }
    }

    /// Capitalized name for titles.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Geometric => "Geometric",
            Self::Binomial => "Binomial",
            Self::Poisson => "Poisson",
            Self::Uniform => "Uniform",
        }
    }

    /// Exactly the parameter names this kind accepts.
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            Self::Geometric => &["p"],
            Self::Binomial => &["n", "p"],
            Self::Poisson => &["mu"],
            Self::Uniform => &["low", "high"],
        }
    }

    /// `true` for densities.
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Uniform)
    }
}

impl FromStr for DistributionKind {
    type Err = Error;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == name)
            .ok_or_else(|| Error::UnsupportedDistribution(s.trim().to_string()))
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A distribution with validated parameters.
///
/// Serialized as `{ kind: <name>, <param>: <value>, ... }`; deserialization
/// goes through [`DistributionSpec::from_named`], so every invariant holds for
/// specs read from YAML/JSON too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSpec", into = "RawSpec")]
pub enum DistributionSpec {
    /// Geometric(p).
    Geometric(Geometric),
    /// Binomial(n, p).
    Binomial(Binomial),
    /// Poisson(mu).
    Poisson(Poisson),
    /// Uniform(low, high).
    Uniform(Uniform),
}

impl DistributionSpec {
    /// Geometric with success probability `p` in `(0, 1]`.
    pub fn geometric(p: f64) -> Result<Self> {
        Ok(Self::Geometric(Geometric::new(p)?))
    }

    /// Binomial with `n` trials and success probability `p` in `[0, 1]`.
    pub fn binomial(n: u64, p: f64) -> Result<Self> {
        Ok(Self::Binomial(Binomial::new(n, p)?))
    }

    /// Poisson with mean `mu >= 0`.
    pub fn poisson(mu: f64) -> Result<Self> {
        Ok(Self::Poisson(Poisson::new(mu)?))
    }

    /// Uniform on `[low, high]`, `low < high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        Ok(Self::Uniform(Uniform::new(low, high)?))
    }

    /// Build a spec from a distribution name and a parameter mapping.
    ///
    /// The name is matched case-insensitively. The mapping must contain
    /// exactly the names listed by [`DistributionKind::parameter_names`].
    pub fn from_named(name: &str, parameters: &Parameters) -> Result<Self> {
        let kind: DistributionKind = name.parse()?;
        let expected = kind.parameter_names();

        if let Some(extra) = parameters.keys().find(|k| !expected.contains(&k.as_str())) {
            return Err(Error::invalid_parameter(
                extra.as_str(),
                format!(
                    "not a parameter of the {} distribution (expected: {})",
                    kind,
                    expected.join(", ")
                ),
            ));
        }

        let get = |name: &str| {
            parameters.get(name).copied().ok_or_else(|| {
                Error::invalid_parameter(name, format!("missing for the {} distribution", kind))
            })
        };

        match kind {
            DistributionKind::Geometric => Self::geometric(get("p")?),
            DistributionKind::Binomial => Self::binomial(trials(get("n")?)?, get("p")?),
            DistributionKind::Poisson => Self::poisson(get("mu")?),
            DistributionKind::Uniform => Self::uniform(get("low")?, get("high")?),
        }
    }

    /// Distribution family.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Geometric(_) => DistributionKind::Geometric,
            Self::Binomial(_) => DistributionKind::Binomial,
            Self::Poisson(_) => DistributionKind::Poisson,
            Self::Uniform(_) => DistributionKind::Uniform,
        }
    }

    /// Parameters as a name → value mapping (inverse of [`from_named`](Self::from_named)).
    pub fn parameters(&self) -> Parameters {
        let pairs: Vec<(&str, f64)> = match self {
            Self::Geometric(g) => vec![("p", g.p())],
            Self::Binomial(b) => vec![("n", b.n() as f64), ("p", b.p())],
            Self::Poisson(p) => vec![("mu", p.mu())],
            Self::Uniform(u) => vec![("low", u.low()), ("high", u.high())],
        };
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    /// Short label with parameters, e.g. `Binomial(n=5, p=0.5)`.
    pub fn label(&self) -> String {
        let params = match self {
            Self::Geometric(g) => format!("p={}", g.p()),
            Self::Binomial(b) => format!("n={}, p={}", b.n(), b.p()),
            Self::Poisson(p) => format!("mu={}", p.mu()),
            Self::Uniform(u) => format!("low={}, high={}", u.low(), u.high()),
        };
        format!("{}({})", self.kind().display_name(), params)
    }

    /// Pointwise evaluator for the chosen method.
    pub fn function(&self, method: Method) -> Result<Box<dyn ProbabilityFunction>> {
        match method {
            Method::Direct => Ok(match *self {
                Self::Geometric(d) => Box::new(d),
                Self::Binomial(d) => Box::new(d),
                Self::Poisson(d) => Box::new(d),
                Self::Uniform(d) => Box::new(d),
            }),
            Method::Statrs => Ok(Box::new(StatrsFunction::new(self)?)),
        }
    }

    /// Evaluate `values` in order, with no value policy applied.
    pub fn probabilities(&self, values: &[f64], method: Method) -> Result<Vec<f64>> {
        Ok(self.function(method)?.probabilities(values))
    }
}

impl fmt::Display for DistributionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Largest trial count a float carries exactly (2^53).
const MAX_TRIALS: f64 = 9_007_199_254_740_992.0;

fn trials(n: f64) -> Result<u64> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(Error::invalid_parameter(
            "n",
            format!("number of trials must be a non-negative integer, got {}", n),
        ));
    }
    if n > MAX_TRIALS {
        return Err(Error::invalid_parameter(
            "n",
            format!("number of trials must be at most 2^53, got {}", n),
        ));
    }
    Ok(n as u64)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawSpec {
    kind: String,
    #[serde(flatten)]
    parameters: Parameters,
}

impl TryFrom<RawSpec> for DistributionSpec {
    type Error = Error;

    fn try_from(raw: RawSpec) -> Result<Self> {
        Self::from_named(&raw.kind, &raw.parameters)
    }
}

impl From<DistributionSpec> for RawSpec {
    fn from(spec: DistributionSpec) -> Self {
        Self { kind: spec.kind().as_str().to_string(), parameters: spec.parameters() }
    }
}
