//! Bar-chart artifact (numbers-first).

use dp_core::ProbabilityResult;
use dp_prob::{DistributionSpec, Method, Parameters, ValuePolicy};
use serde::{Deserialize, Serialize};

/// Schema tag written into every [`BarChartArtifact`].
pub const BAR_SCHEMA_VERSION: &str = "distplot_bar_v0";

/// One bar per evaluated value, ready for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartArtifact {
    /// Always [`BAR_SCHEMA_VERSION`].
    pub schema_version: String,
    /// Producer information.
    pub meta: BarChartMeta,
    /// Lowercase distribution kind (`binomial`, ...).
    pub distribution: String,
    /// Parameter values by name.
    pub parameters: Parameters,
    /// Legend label, e.g. `Binomial(n=5, p=0.5)`.
    pub label: String,
    /// Chart title.
    pub title: String,
    /// X axis label.
    pub x_label: String,
    /// Y axis label.
    pub y_label: String,
    /// Value policy used for the evaluation.
    pub policy: ValuePolicy,
    /// Evaluation method.
    pub method: Method,
    /// Bar positions.
    pub values: Vec<f64>,
    /// Bar heights, aligned with `values`.
    pub probabilities: Vec<f64>,
    /// Values dropped by the filter policy.
    #[serde(default)]
    pub removed: Vec<f64>,
}

/// Producer information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartMeta {
    /// Producing tool.
    pub tool: String,
    /// Producing tool version.
    pub tool_version: String,
}

impl BarChartArtifact {
    /// Build the artifact from an already evaluated result.
    pub fn new(
        spec: &DistributionSpec,
        result: &ProbabilityResult,
        policy: ValuePolicy,
        method: Method,
    ) -> Self {
        let kind = spec.kind();
        let y_label = if kind.is_continuous() { "Density" } else { "Probability" };
        Self {
            schema_version: BAR_SCHEMA_VERSION.to_string(),
            meta: BarChartMeta {
                tool: "distplot".to_string(),
                tool_version: dp_core::VERSION.to_string(),
            },
            distribution: kind.as_str().to_string(),
            parameters: spec.parameters(),
            label: spec.label(),
            title: format!("{} Distribution", kind.display_name()),
            x_label: "Values".to_string(),
            y_label: y_label.to_string(),
            policy,
            method,
            values: result.values(),
            probabilities: result.probabilities(),
            removed: result.removed.clone(),
        }
    }

    /// Number of bars.
    pub fn len(&self) -> usize {
        self.values.len().min(self.probabilities.len())
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the distribution is discrete (integer positions).
    pub fn is_discrete(&self) -> bool {
        self.distribution
            .parse::<dp_prob::DistributionKind>()
            .map(|k| !k.is_continuous())
            .unwrap_or_else(|_| self.values.iter().all(|v| v.fract() == 0.0))
    }
}
