//! Core traits for distplot
//!
//! Evaluation methods (library-backed or closed-form) hide behind
//! [`ProbabilityFunction`], so the evaluator and the presentation layers never
//! depend on how a probability is actually computed.

/// A fully parameterized distribution that can be evaluated pointwise.
pub trait ProbabilityFunction: Send + Sync {
    /// Lowercase distribution name (e.g. "binomial").
    fn name(&self) -> &str;

    /// `true` when [`probability`](Self::probability) returns a density.
    fn is_continuous(&self) -> bool;

    /// Probability mass (or density) at `x`; zero outside the support.
    fn probability(&self, x: f64) -> f64;

    /// Evaluate every value of `xs`, preserving order.
    fn probabilities(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.probability(x)).collect()
    }
}
