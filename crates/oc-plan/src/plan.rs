//! Plan value types: drafts, validated parameters, quality targets.

use oc_core::{Error, PlanConstraint, Result};
use serde::{Deserialize, Serialize};

/// Validated parameters of a double sampling plan.
///
/// Construction enforces the plan invariants, so an instance always
/// describes a plan the curve builder can evaluate. Fields are private;
/// use the accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanParameters {
    lot_size: u64,
    sample1_size: u64,
    sample2_size: u64,
    accept1: u64,
    accept2: u64,
    reject1: u64,
}

impl PlanParameters {
    /// Validate and construct plan parameters.
    ///
    /// `accept1` (c1) is the stage-1 acceptance count, `accept2` (c2) the
    /// cumulative acceptance count across both stages, `reject1` (r) the
    /// stage-1 rejection threshold.
    pub fn new(
        lot_size: u64,
        sample1_size: u64,
        sample2_size: u64,
        accept1: u64,
        accept2: u64,
        reject1: u64,
    ) -> Result<Self> {
        if sample1_size == 0 || sample2_size == 0 {
            return Err(Error::InvalidPlan(PlanConstraint::EmptySample));
        }
        if accept2 <= accept1 {
            return Err(Error::InvalidPlan(PlanConstraint::CumulativeAcceptAboveStage1));
        }
        if reject1 <= accept1 {
            return Err(Error::InvalidPlan(PlanConstraint::RejectAboveStage1));
        }
        if accept1 > sample1_size {
            return Err(Error::InvalidPlan(PlanConstraint::Stage1AcceptWithinSample));
        }
        if reject1 > sample1_size + 1 {
            return Err(Error::InvalidPlan(PlanConstraint::Stage1RejectWithinSample));
        }
        if accept2 > sample1_size + sample2_size {
            return Err(Error::InvalidPlan(PlanConstraint::CumulativeAcceptWithinSamples));
        }
        if lot_size < sample1_size + sample2_size {
            return Err(Error::InvalidPlan(PlanConstraint::LotSmallerThanSamples));
        }
        Ok(Self { lot_size, sample1_size, sample2_size, accept1, accept2, reject1 })
    }

    /// Lot size.
    pub fn lot_size(&self) -> u64 {
        self.lot_size
    }

    /// Stage-1 sample size (n1).
    pub fn sample1_size(&self) -> u64 {
        self.sample1_size
    }

    /// Stage-2 sample size (n2).
    pub fn sample2_size(&self) -> u64 {
        self.sample2_size
    }

    /// Stage-1 acceptance count (c1).
    pub fn accept1(&self) -> u64 {
        self.accept1
    }

    /// Cumulative acceptance count across both stages (c2).
    pub fn accept2(&self) -> u64 {
        self.accept2
    }

    /// Stage-1 rejection threshold (r).
    pub fn reject1(&self) -> u64 {
        self.reject1
    }

    /// Title summarizing the plan for chart annotation.
    pub fn title(&self) -> String {
        format!(
            "Double plan: n1={}, c1={} / n2={}, c2={}",
            self.sample1_size, self.accept1, self.sample2_size, self.accept2
        )
    }
}

/// Plan inputs as an external form supplies them, any field possibly unset.
///
/// A partially filled draft is a quiescent state, not an error: resolving
/// it simply produces nothing until every field is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDraft {
    /// Lot size.
    pub lot_size: Option<u64>,
    /// Stage-1 sample size (n1).
    pub sample1_size: Option<u64>,
    /// Stage-2 sample size (n2).
    pub sample2_size: Option<u64>,
    /// Stage-1 acceptance count (c1).
    pub accept1: Option<u64>,
    /// Cumulative acceptance count (c2).
    pub accept2: Option<u64>,
    /// Stage-1 rejection threshold (r).
    pub reject1: Option<u64>,
}

impl PlanDraft {
    /// Resolve the draft into validated parameters.
    ///
    /// Returns `Ok(None)` while any required field is unset: no computation
    /// is to be performed and no error surfaced. A complete but
    /// inconsistent draft is a configuration error.
    pub fn resolve(&self) -> Result<Option<PlanParameters>> {
        let (Some(lot), Some(n1), Some(n2), Some(c1), Some(c2), Some(r)) = (
            self.lot_size,
            self.sample1_size,
            self.sample2_size,
            self.accept1,
            self.accept2,
            self.reject1,
        ) else {
            return Ok(None);
        };
        PlanParameters::new(lot, n1, n2, c1, c2, r).map(Some)
    }
}

/// Acceptance/rejection quality targets for horizontal reference lines.
///
/// A target outside `(0, 1)` or non-finite degrades to "no reference line"
/// rather than erroring; the absent line is a first-class outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityTargets {
    /// Acceptance probability targeted at the acceptable quality level.
    pub aql: Option<f64>,
    /// Rejection target; plotted as `1 - rql`.
    pub rql: Option<f64>,
}

fn valid_probability(p: &f64) -> bool {
    p.is_finite() && *p > 0.0 && *p < 1.0
}

impl QualityTargets {
    /// Build targets from raw, possibly absent values.
    pub fn new(aql: Option<f64>, rql: Option<f64>) -> Self {
        Self { aql, rql }
    }

    /// AQL reference level, if the target is a valid probability.
    pub fn aql_line(&self) -> Option<f64> {
        self.aql.filter(valid_probability)
    }

    /// `1 - RQL` reference level, if the target is a valid probability.
    pub fn rql_line(&self) -> Option<f64> {
        self.rql.filter(valid_probability).map(|p| 1.0 - p)
    }
}
