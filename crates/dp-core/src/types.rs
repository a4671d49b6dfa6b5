//! Common data types for distplot

use serde::{Deserialize, Serialize};

/// A single evaluated input value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityPoint {
    /// Input value (x).
    pub value: f64,
    /// Probability mass (discrete kinds) or density (uniform) at `value`.
    pub probability: f64,
}

/// Evaluation output: one point per retained input value, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityResult {
    /// Evaluated points, same relative order as the retained inputs.
    pub points: Vec<ProbabilityPoint>,

    /// Values dropped by the filter policy (always empty under reject).
    #[serde(default)]
    pub removed: Vec<f64>,
}

impl ProbabilityResult {
    /// Pair up `values` with `probabilities`.
    ///
    /// Both slices must have the same length; extra entries on either side
    /// are ignored.
    pub fn from_parts(values: &[f64], probabilities: &[f64], removed: Vec<f64>) -> Self {
        let points = values
            .iter()
            .zip(probabilities.iter())
            .map(|(&value, &probability)| ProbabilityPoint { value, probability })
            .collect();
        Self { points, removed }
    }

    /// Number of evaluated points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point was evaluated.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Retained input values, in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Probabilities aligned with [`values`](Self::values).
    pub fn probabilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.probability).collect()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.points.iter().map(|p| p.probability).sum()
    }

    /// Iterate over `(value, probability)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().map(|p| (p.value, p.probability))
    }
}
