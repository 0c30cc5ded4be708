//! Distribution model selection and grid evaluation.

use oc_core::{Error, Result};

use crate::{binomial, hypergeometric};

/// Sampling fraction of the lot above which the finite-population
/// correction applies.
const FINITE_POPULATION_THRESHOLD: f64 = 0.1;

/// Discrete model used to evaluate per-stage defect counts.
///
/// Resolved once per plan, not per stage: both stages of a double plan are
/// always evaluated under the same model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionModel {
    /// Independent-draw approximation (combined sample <= 10% of the lot).
    Binomial,
    /// Sampling without replacement from the finite lot.
    Hypergeometric,
}

impl DistributionModel {
    /// Pick the model for a plan drawing `sample_size + other_sample_size`
    /// units from a lot of `lot` units.
    ///
    /// The test uses the combined sample size of both stages so that the
    /// stage-1 and stage-2 terms of a double plan share one consistent
    /// probability model.
    pub fn select(lot: u64, sample_size: u64, other_sample_size: u64) -> Self {
        let combined = (sample_size + other_sample_size) as f64;
        if combined > FINITE_POPULATION_THRESHOLD * lot as f64 {
            DistributionModel::Hypergeometric
        } else {
            DistributionModel::Binomial
        }
    }

    /// Label for chart annotation.
    pub fn label(&self) -> &'static str {
        match self {
            DistributionModel::Binomial => "binomial",
            DistributionModel::Hypergeometric => "hypergeometric",
        }
    }
}

/// Whether to evaluate the point mass (`P(X = count)`) or the cumulative
/// mass (`P(X <= count)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalMode {
    /// Cumulative: at most `count` defectives.
    Cdf,
    /// Point: exactly `count` defectives.
    Pmf,
}

/// Evaluate the chosen model at a single true-defective fraction.
///
/// Under the hypergeometric model the lot contains `round(fraction * lot)`
/// defectives; under the binomial model the fraction is the per-draw
/// success probability.
pub fn evaluate_at(
    model: DistributionModel,
    lot: u64,
    sample_size: u64,
    count: u64,
    fraction: f64,
    mode: EvalMode,
) -> Result<f64> {
    if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return Err(Error::Validation(format!(
            "fraction must be in [0,1), got {}",
            fraction
        )));
    }
    match model {
        DistributionModel::Binomial => match mode {
            EvalMode::Pmf => binomial::pmf(count, sample_size, fraction),
            EvalMode::Cdf => binomial::cdf(count, sample_size, fraction),
        },
        DistributionModel::Hypergeometric => {
            let defectives = (fraction * lot as f64).round() as u64;
            match mode {
                EvalMode::Pmf => hypergeometric::pmf(count, lot, defectives, sample_size),
                EvalMode::Cdf => hypergeometric::cdf(count, lot, defectives, sample_size),
            }
        }
    }
}

/// Evaluate the chosen model at every fraction of `grid`.
///
/// Output has the same length and ordering as `grid`.
pub fn evaluate(
    model: DistributionModel,
    lot: u64,
    sample_size: u64,
    count: u64,
    grid: &[f64],
    mode: EvalMode,
) -> Result<Vec<f64>> {
    grid.iter()
        .map(|&f| evaluate_at(model, lot, sample_size, count, f, mode))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_select_boundary() {
        // 32 + 32 = 64 <= 100 = 10% of 1000
        assert_eq!(DistributionModel::select(1000, 32, 32), DistributionModel::Binomial);
        // 100 + 50 = 150 > 100
        assert_eq!(
            DistributionModel::select(1000, 100, 50),
            DistributionModel::Hypergeometric
        );
        // exactly 10% stays binomial (strict inequality)
        assert_eq!(DistributionModel::select(1000, 50, 50), DistributionModel::Binomial);
    }

    #[test]
    fn test_select_is_symmetric_in_stages() {
        assert_eq!(
            DistributionModel::select(1000, 100, 50),
            DistributionModel::select(1000, 50, 100)
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(DistributionModel::Binomial.label(), "binomial");
        assert_eq!(DistributionModel::Hypergeometric.label(), "hypergeometric");
    }

    #[test]
    fn test_fraction_zero_contract() {
        for model in [DistributionModel::Binomial, DistributionModel::Hypergeometric] {
            assert_eq!(evaluate_at(model, 1000, 32, 0, 0.0, EvalMode::Pmf).unwrap(), 1.0);
            assert_eq!(evaluate_at(model, 1000, 32, 3, 0.0, EvalMode::Pmf).unwrap(), 0.0);
            assert_eq!(evaluate_at(model, 1000, 32, 0, 0.0, EvalMode::Cdf).unwrap(), 1.0);
            assert_eq!(evaluate_at(model, 1000, 32, 5, 0.0, EvalMode::Cdf).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_hypergeometric_rounds_defectives() {
        // fraction 0.25 of a lot of 1000 -> 250 defectives
        let via_model = evaluate_at(
            DistributionModel::Hypergeometric,
            1000,
            64,
            10,
            0.25,
            EvalMode::Pmf,
        )
        .unwrap();
        let direct = crate::hypergeometric::pmf(10, 1000, 250, 64).unwrap();
        assert_relative_eq!(via_model, direct, epsilon = 1e-15);
    }

    #[test]
    fn test_grid_shape_preserved() {
        let grid: Vec<f64> = (0..100).map(|i| i as f64 * 0.005).collect();
        let out = evaluate(DistributionModel::Binomial, 1000, 32, 2, &grid, EvalMode::Cdf).unwrap();
        assert_eq!(out.len(), grid.len());
        assert_eq!(out[0], 1.0);
    }

    #[test]
    fn test_fraction_out_of_range() {
        let r = evaluate_at(DistributionModel::Binomial, 1000, 32, 2, 1.0, EvalMode::Pmf);
        assert!(r.is_err());
        let r = evaluate_at(DistributionModel::Binomial, 1000, 32, 2, -0.1, EvalMode::Pmf);
        assert!(r.is_err());
    }
}
