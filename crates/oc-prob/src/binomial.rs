//! Binomial distribution utilities.

use crate::math::ln_choose;
use oc_core::{Error, Result};

/// Log-PMF of a Binomial distribution `Binom(n, p)` at count `k`.
pub fn logpmf(k: u64, n: u64, p: f64) -> Result<f64> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(Error::Validation(format!("p must be finite and in [0,1], got {}", p)));
    }
    if k > n {
        return Err(Error::Validation(format!("k must be <= n, got k={} n={}", k, n)));
    }

    if p == 0.0 {
        return Ok(if k == 0 { 0.0 } else { f64::NEG_INFINITY });
    }
    if p == 1.0 {
        return Ok(if k == n { 0.0 } else { f64::NEG_INFINITY });
    }
    let kf = k as f64;
    let nf = n as f64;
    Ok(ln_choose(n, k) + kf * p.ln() + (nf - kf) * (1.0 - p).ln())
}

/// PMF of `Binom(n, p)` at count `k`: probability of exactly `k` successes.
pub fn pmf(k: u64, n: u64, p: f64) -> Result<f64> {
    Ok(logpmf(k, n, p)?.exp())
}

/// CDF of `Binom(n, p)` at count `k`: probability of at most `k` successes.
///
/// Exact summation of the PMF over `0..=k`; acceptance counts in sampling
/// plans are small, so the sum stays short.
pub fn cdf(k: u64, n: u64, p: f64) -> Result<f64> {
    let top = k.min(n);
    let mut acc = 0.0;
    for i in 0..=top {
        acc += pmf(i, n, p)?;
    }
    Ok(acc.min(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_pmf_fair_coin() {
        // Binom(4, 0.5): P(2) = 6/16
        assert_relative_eq!(pmf(2, 4, 0.5).unwrap(), 0.375, epsilon = 1e-12);
        assert_relative_eq!(pmf(0, 4, 0.5).unwrap(), 0.0625, epsilon = 1e-12);
    }

    #[test]
    fn test_pmf_sums_to_one() {
        let n = 32;
        let p = 0.17;
        let total: f64 = (0..=n).map(|k| pmf(k, n, p).unwrap()).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_cdf_complete_support() {
        assert_relative_eq!(cdf(32, 32, 0.3).unwrap(), 1.0, epsilon = 1e-12);
        // k beyond n clamps to the full support
        assert_relative_eq!(cdf(100, 32, 0.3).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_edges_p0_p1() {
        assert_eq!(pmf(0, 5, 0.0).unwrap(), 1.0);
        assert_eq!(pmf(1, 5, 0.0).unwrap(), 0.0);
        assert_eq!(pmf(5, 5, 1.0).unwrap(), 1.0);
        assert_eq!(pmf(4, 5, 1.0).unwrap(), 0.0);
        assert_eq!(cdf(0, 5, 0.0).unwrap(), 1.0);
        assert_eq!(cdf(3, 5, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_cdf_monotone_in_p() {
        let mut prev = 1.0;
        for i in 1..100 {
            let p = (i as f64) * 0.01;
            let c = cdf(2, 32, p).unwrap();
            assert!(c <= prev);
            prev = c;
        }
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(logpmf(5, 4, 0.5).is_err());
        assert!(logpmf(2, 4, -0.1).is_err());
        assert!(logpmf(2, 4, 1.1).is_err());
        assert!(logpmf(2, 4, f64::NAN).is_err());
    }
}
