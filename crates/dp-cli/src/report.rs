//! Evaluation outcome and its textual/JSON renditions.

use std::fmt::Write as _;

use dp_core::ProbabilityResult;
use dp_prob::{DistributionSpec, Evaluator, Method, ValuePolicy};
use dp_viz::BarChartArtifact;
use serde_json::json;

pub struct Evaluation {
    pub spec: DistributionSpec,
    pub policy: ValuePolicy,
    pub method: Method,
    pub result: ProbabilityResult,
}

impl Evaluation {
    /// Apply the evaluator's value policy, then resolve the distribution and
    /// evaluate the kept values. Input errors are reported before spec errors.
    pub fn run<F>(evaluator: Evaluator, values: &[f64], resolve: F) -> anyhow::Result<Self>
    where
        F: FnOnce() -> anyhow::Result<DistributionSpec>,
    {
        let policy = evaluator.policy();
        let method = evaluator.method();
        let partition = policy.apply(values)?;
        let spec = resolve()?;
        tracing::debug!(%spec, n_values = values.len(), %policy, %method, "evaluating");
        let result = evaluator.evaluate_partition(&spec, partition)?;
        tracing::info!(points = result.len(), removed = result.removed.len(), "evaluation complete");
        Ok(Self { spec, policy, method, result })
    }

    pub fn table(&self) -> String {
        let mut out = String::new();
        if self.policy == ValuePolicy::Filter {
            if !self.result.removed.is_empty() {
                writeln!(out, "Removed negative values: {}", format_list(&self.result.removed))
                    .unwrap();
            }
            writeln!(out, "Values after filtering: {}", format_list(&self.result.values()))
                .unwrap();
        }
        writeln!(
            out,
            "Probabilities for {} Distribution with parameters {}:",
            self.spec.kind().display_name(),
            self.spec.label()
        )
        .unwrap();
        for (value, probability) in self.result.iter() {
            writeln!(out, "Value: {}, Probability: {}", value, probability).unwrap();
        }
        out
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "distribution": self.spec.kind(),
            "parameters": self.spec.parameters(),
            "label": self.spec.label(),
            "policy": self.policy,
            "method": self.method,
            "values": self.result.values(),
            "probabilities": self.result.probabilities(),
            "removed": self.result.removed,
        })
    }

    pub fn artifact(&self) -> BarChartArtifact {
        BarChartArtifact::new(&self.spec, &self.result, self.policy, self.method)
    }
}

/// `[a, b, c]` with shortest float formatting.
pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
