//! Small numeric helpers shared by the discrete distributions.

use statrs::function::factorial::ln_factorial;
use statrs::function::gamma::ln_gamma;

/// Interpret `x` as a count: `Some(k)` when `x` is a non-negative integer
/// (within 1e-9), `None` otherwise.
///
/// Discrete supports are subsets of the counts, so `None` always means
/// "outside the support".
#[inline]
pub fn as_count(x: f64) -> Option<u64> {
    if !(x.is_finite() && x >= 0.0) {
        return None;
    }
    let r = x.round();
    if (x - r).abs() <= 1e-9 { Some(r as u64) } else { None }
}

/// `ln C(n, k)`; `-inf` when `k > n`.
pub fn ln_choose(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }
    // ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}

/// `ln k!`.
#[inline]
pub fn ln_fact(k: u64) -> f64 {
    ln_factorial(k)
}
