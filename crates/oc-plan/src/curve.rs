//! OC curve construction for double and single sampling plans.

use oc_core::{Error, PlanConstraint, Result};
use oc_prob::{evaluate_at, DistributionModel, EvalMode};
use rayon::prelude::*;

use crate::artifact::{OcCurveArtifact, SCHEMA_VERSION};
use crate::grid::FractionGrid;
use crate::plan::{PlanParameters, QualityTargets};

/// Stage-1/stage-2 defect-count pairs that still lead to overall acceptance.
///
/// Stage-1 counts in `(accept1, reject1)` exclusive are indeterminate
/// (neither immediate accept nor immediate reject); each is rescued by any
/// stage-2 count `j` with `i + j <= accept2` inclusive. Counts beyond a
/// stage's sample size cannot occur and are skipped rather than evaluated
/// as zero-probability terms. The set depends on every threshold and is
/// recomputed per plan, never cached.
pub fn acceptance_combinations(params: &PlanParameters) -> Vec<(u64, u64)> {
    // i <= sample1_size is already guaranteed by reject1 <= sample1_size + 1.
    let j_end = (params.accept2() - params.accept1()).min(params.sample2_size() + 1);
    let mut combos = Vec::new();
    for i in params.accept1() + 1..params.reject1() {
        for j in 0..j_end {
            if i + j <= params.accept2() {
                combos.push((i, j));
            }
        }
    }
    combos
}

/// Acceptance probability of a double plan at one true-defective fraction.
///
/// Law-of-total-probability decomposition: the stage-1 immediate-accept
/// mass plus one product term per rescuable count pair. Exact under the
/// chosen per-stage model, not an approximation.
fn acceptance_at(
    params: &PlanParameters,
    model: DistributionModel,
    combos: &[(u64, u64)],
    fraction: f64,
) -> Result<f64> {
    let lot = params.lot_size();
    let mut acc = evaluate_at(
        model,
        lot,
        params.sample1_size(),
        params.accept1(),
        fraction,
        EvalMode::Cdf,
    )?;
    for &(i, j) in combos {
        let p1 = evaluate_at(model, lot, params.sample1_size(), i, fraction, EvalMode::Pmf)?;
        let p2 = evaluate_at(model, lot, params.sample2_size(), j, fraction, EvalMode::Pmf)?;
        acc += p1 * p2;
    }
    Ok(acc.min(1.0))
}

/// Build the OC curve of a double sampling plan over `grid`.
///
/// The distribution model is resolved once from the combined sample size of
/// both stages, so every term of the curve uses one consistent model.
pub fn build_curve(
    params: &PlanParameters,
    targets: &QualityTargets,
    grid: &FractionGrid,
) -> Result<OcCurveArtifact> {
    let model =
        DistributionModel::select(params.lot_size(), params.sample1_size(), params.sample2_size());
    let combos = acceptance_combinations(params);
    tracing::debug!(
        combinations = combos.len(),
        model = model.label(),
        points = grid.len(),
        "building OC curve"
    );

    let acceptance = grid
        .fractions()
        .par_iter()
        .map(|&f| acceptance_at(params, model, &combos, f))
        .collect::<Result<Vec<f64>>>()?;

    Ok(OcCurveArtifact {
        schema_version: SCHEMA_VERSION.to_string(),
        plan_title: params.title(),
        model: model.label().to_string(),
        fractions: grid.fractions().to_vec(),
        acceptance,
        aql_line: targets.aql_line(),
        rql_line: targets.rql_line(),
    })
}

/// Build the stage-1-only (single sampling) OC curve: `P(count <= accept)`
/// in a sample of `sample_size` from the lot.
///
/// The double-plan curve degenerates to exactly this when
/// `accept1 + 1 == reject1` leaves no rescuable stage-1 outcome.
pub fn build_single_curve(
    lot_size: u64,
    sample_size: u64,
    accept: u64,
    targets: &QualityTargets,
    grid: &FractionGrid,
) -> Result<OcCurveArtifact> {
    if sample_size == 0 {
        return Err(Error::InvalidPlan(PlanConstraint::EmptySample));
    }
    if accept > sample_size {
        return Err(Error::InvalidPlan(PlanConstraint::Stage1AcceptWithinSample));
    }
    if lot_size < sample_size {
        return Err(Error::InvalidPlan(PlanConstraint::LotSmallerThanSamples));
    }

    let model = DistributionModel::select(lot_size, sample_size, 0);
    let acceptance = grid
        .fractions()
        .par_iter()
        .map(|&f| evaluate_at(model, lot_size, sample_size, accept, f, EvalMode::Cdf))
        .collect::<Result<Vec<f64>>>()?;

    Ok(OcCurveArtifact {
        schema_version: SCHEMA_VERSION.to_string(),
        plan_title: format!("Single plan: n={}, c={}", sample_size, accept),
        model: model.label().to_string(),
        fractions: grid.fractions().to_vec(),
        acceptance,
        aql_line: targets.aql_line(),
        rql_line: targets.rql_line(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_plan() -> PlanParameters {
        PlanParameters::new(1000, 32, 32, 2, 6, 5).unwrap()
    }

    #[test]
    fn test_combination_enumeration() {
        // c1=2, c2=6, r=5: i in {3, 4}, j in 0..4, keep i+j <= 6
        let combos = acceptance_combinations(&reference_plan());
        assert_eq!(
            combos,
            vec![(3, 0), (3, 1), (3, 2), (3, 3), (4, 0), (4, 1), (4, 2)]
        );
    }

    #[test]
    fn test_minimal_double_plan_single_combination() {
        // c2 = c1+1, r = c1+2: exactly one rescuable pair, (c1+1, 0)
        let p = PlanParameters::new(1000, 32, 32, 2, 3, 4).unwrap();
        assert_eq!(acceptance_combinations(&p), vec![(3, 0)]);
    }

    #[test]
    fn test_degenerate_plan_has_no_combinations() {
        // r = c1+1: no indeterminate stage-1 outcome survives
        let p = PlanParameters::new(1000, 32, 32, 2, 6, 3).unwrap();
        assert!(acceptance_combinations(&p).is_empty());
    }

    #[test]
    fn test_stage2_counts_capped_at_sample_size() {
        // c2 - c1 - 1 = 19 exceeds n2 = 2: stage-2 counts above 2 cannot occur
        let p = PlanParameters::new(1000, 32, 2, 0, 20, 5).unwrap();
        let combos = acceptance_combinations(&p);
        assert!(combos.iter().all(|&(_, j)| j <= 2));
        // i in 1..5 crossed with j in 0..=2, every pair within c2
        assert_eq!(combos.len(), 12);
    }

    #[test]
    fn test_combinations_recomputed_per_plan() {
        let a = acceptance_combinations(&reference_plan());
        let p = PlanParameters::new(1000, 32, 32, 1, 6, 5).unwrap();
        let b = acceptance_combinations(&p);
        assert_ne!(a, b);
    }

    #[test]
    fn test_curve_starts_at_one() {
        let grid = FractionGrid::new(vec![0.0, 0.01, 0.05]).unwrap();
        let artifact =
            build_curve(&reference_plan(), &QualityTargets::default(), &grid).unwrap();
        assert_eq!(artifact.acceptance[0], 1.0);
    }

    #[test]
    fn test_model_label_binomial() {
        let grid = FractionGrid::new(vec![0.0, 0.05]).unwrap();
        let artifact =
            build_curve(&reference_plan(), &QualityTargets::default(), &grid).unwrap();
        assert_eq!(artifact.model, "binomial");
    }

    #[test]
    fn test_model_label_hypergeometric() {
        // 100 + 50 = 150 > 10% of 1000
        let p = PlanParameters::new(1000, 100, 50, 2, 6, 5).unwrap();
        let grid = FractionGrid::new(vec![0.0, 0.05]).unwrap();
        let artifact = build_curve(&p, &QualityTargets::default(), &grid).unwrap();
        assert_eq!(artifact.model, "hypergeometric");
    }

    #[test]
    fn test_single_curve_validation() {
        let grid = FractionGrid::new(vec![0.0, 0.05]).unwrap();
        assert!(build_single_curve(1000, 0, 2, &QualityTargets::default(), &grid).is_err());
        assert!(build_single_curve(1000, 32, 40, &QualityTargets::default(), &grid).is_err());
        assert!(build_single_curve(10, 32, 2, &QualityTargets::default(), &grid).is_err());
    }

    #[test]
    fn test_single_curve_title() {
        let grid = FractionGrid::new(vec![0.0, 0.05]).unwrap();
        let artifact = build_single_curve(1000, 32, 2, &QualityTargets::default(), &grid).unwrap();
        assert_eq!(artifact.plan_title, "Single plan: n=32, c=2");
    }
}
