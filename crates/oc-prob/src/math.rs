//! Log-combinatorics helpers shared by the discrete distributions.

use statrs::function::gamma::ln_gamma;

/// `ln(n choose k)` via log-gamma.
///
/// `ln(n choose k) = ln Γ(n+1) - ln Γ(k+1) - ln Γ(n-k+1)`. Requires `k <= n`.
#[inline]
pub fn ln_choose(n: u64, k: u64) -> f64 {
    debug_assert!(k <= n);
    // Exact at the support edges; ln_gamma(1) is only approximately zero.
    if k == 0 || k == n {
        return 0.0;
    }
    let n1 = (n as f64) + 1.0;
    let k1 = (k as f64) + 1.0;
    let nk1 = ((n - k) as f64) + 1.0;
    ln_gamma(n1) - ln_gamma(k1) - ln_gamma(nk1)
}
