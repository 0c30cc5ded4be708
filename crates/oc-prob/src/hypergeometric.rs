//! Hypergeometric distribution utilities.
//!
//! Parameterized the sampling-inspection way: a population (lot) of size
//! `population` containing `defectives` nonconforming units, from which
//! `draws` units are inspected without replacement.

use crate::math::ln_choose;
use oc_core::{Error, Result};

fn check_args(population: u64, defectives: u64, draws: u64) -> Result<()> {
    if defectives > population {
        return Err(Error::Validation(format!(
            "defectives must be <= population, got K={} N={}",
            defectives, population
        )));
    }
    if draws > population {
        return Err(Error::Validation(format!(
            "draws must be <= population, got n={} N={}",
            draws, population
        )));
    }
    Ok(())
}

/// Log-PMF of drawing exactly `k` defectives in `draws` draws without
/// replacement. Counts outside the support yield `-inf`.
pub fn logpmf(k: u64, population: u64, defectives: u64, draws: u64) -> Result<f64> {
    check_args(population, defectives, draws)?;
    // support: max(0, draws + defectives - population) <= k <= min(draws, defectives)
    let lo = (draws + defectives).saturating_sub(population);
    let hi = draws.min(defectives);
    if k < lo || k > hi {
        return Ok(f64::NEG_INFINITY);
    }
    Ok(ln_choose(defectives, k) + ln_choose(population - defectives, draws - k)
        - ln_choose(population, draws))
}

/// PMF of drawing exactly `k` defectives.
pub fn pmf(k: u64, population: u64, defectives: u64, draws: u64) -> Result<f64> {
    Ok(logpmf(k, population, defectives, draws)?.exp())
}

/// CDF: probability of drawing at most `k` defectives.
pub fn cdf(k: u64, population: u64, defectives: u64, draws: u64) -> Result<f64> {
    check_args(population, defectives, draws)?;
    let top = k.min(draws.min(defectives));
    let mut acc = 0.0;
    for i in 0..=top {
        acc += pmf(i, population, defectives, draws)?;
    }
    Ok(acc.min(1.0))
}
