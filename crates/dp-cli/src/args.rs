//! Shared command-line arguments and their resolution into core types.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use dp_prob::{DistributionSpec, Evaluator, Method, Parameters, ValuePolicy, inclusive_range};

/// Which distribution to evaluate: by name and flags, or from a spec file.
#[derive(Debug, Clone, Args)]
pub struct DistArgs {
    /// Distribution name (geometric, binomial, poisson, uniform)
    #[arg(long, required_unless_present = "spec")]
    pub dist: Option<String>,

    /// Probability of success (geometric, binomial)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "spec")]
    pub p: Option<f64>,

    /// Number of trials (binomial)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "spec")]
    pub n: Option<f64>,

    /// Mean (poisson)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "spec")]
    pub mu: Option<f64>,

    /// Lower bound (uniform)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "spec")]
    pub low: Option<f64>,

    /// Upper bound (uniform)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "spec")]
    pub high: Option<f64>,

    /// Distribution spec file (YAML or JSON: `kind` plus parameter keys)
    #[arg(long, conflicts_with = "dist")]
    pub spec: Option<PathBuf>,
}

impl DistArgs {
    /// Parameter flags that were given, by name.
    pub fn parameters(&self) -> Parameters {
        [("p", self.p), ("n", self.n), ("mu", self.mu), ("low", self.low), ("high", self.high)]
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
            .collect()
    }

    pub fn resolve(&self) -> Result<DistributionSpec> {
        if let Some(path) = &self.spec {
            return load_spec(path);
        }
        let name = self.dist.as_deref().context("either --dist or --spec is required")?;
        Ok(DistributionSpec::from_named(name, &self.parameters())?)
    }
}

/// Read a spec file; `.json` is parsed as JSON, anything else as YAML.
pub fn load_spec(path: &Path) -> Result<DistributionSpec> {
    tracing::info!(path = %path.display(), "loading distribution spec");
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read spec file {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let spec = if is_json {
        serde_json::from_str(&text)
            .with_context(|| format!("invalid spec file {}", path.display()))?
    } else {
        serde_yaml_ng::from_str(&text)
            .with_context(|| format!("invalid spec file {}", path.display()))?
    };
    Ok(spec)
}

/// Input values: an inclusive integer range or an explicit list.
#[derive(Debug, Clone, Args)]
pub struct ValueArgs {
    /// Start of the integer range (inclusive)
    #[arg(
        long,
        allow_negative_numbers = true,
        requires = "end",
        required_unless_present = "values"
    )]
    pub start: Option<i64>,

    /// End of the integer range (inclusive)
    #[arg(long, allow_negative_numbers = true, requires = "start")]
    pub end: Option<i64>,

    /// Explicit comma-separated values, e.g. `-1,0,1.5`
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["start", "end"]
    )]
    pub values: Option<Vec<f64>>,
}

impl ValueArgs {
    pub fn values(&self) -> Vec<f64> {
        match (&self.values, self.start, self.end) {
            (Some(values), _, _) => values.clone(),
            (None, Some(start), Some(end)) => inclusive_range(start, end),
            _ => Vec::new(),
        }
    }
}

/// How the evaluation treats negative values and which backend it uses.
#[derive(Debug, Clone, Args)]
pub struct EvalArgs {
    /// What to do with negative values (reject, filter)
    #[arg(long, default_value = "reject")]
    pub policy: ValuePolicy,

    /// Evaluation method (statrs, direct)
    #[arg(long, default_value = "statrs")]
    pub method: Method,
}

impl EvalArgs {
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new(self.policy).with_method(self.method)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Chart styling options shared by `plot` and `prompt`.
#[derive(Debug, Clone, Args)]
pub struct StyleArgs {
    /// YAML style overrides
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Built-in theme (ggplot, classic, minimal)
    #[arg(long)]
    pub theme: Option<String>,
}

impl StyleArgs {
    pub fn resolve(&self) -> Result<dp_viz_render::config::VizConfig> {
        let yaml = match &self.config {
            Some(path) => Some(
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read style config {}", path.display()))?,
            ),
            None => None,
        };
        Ok(dp_viz_render::resolve_config_with_theme(self.theme.as_deref(), yaml.as_deref())?)
    }
}
