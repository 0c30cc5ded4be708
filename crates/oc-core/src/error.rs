//! Error types for opchar

use thiserror::Error;

/// Plan invariant violated by a complete set of inputs.
///
/// Carried inside [`Error::InvalidPlan`] so a caller can highlight the
/// offending input field instead of parsing a message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanConstraint {
    /// Cumulative acceptance count must exceed the stage-1 acceptance count.
    CumulativeAcceptAboveStage1,
    /// Stage-1 rejection threshold must exceed the stage-1 acceptance count.
    RejectAboveStage1,
    /// Stage-1 acceptance count cannot exceed the stage-1 sample size.
    Stage1AcceptWithinSample,
    /// Stage-1 rejection threshold cannot exceed the stage-1 sample size plus one.
    Stage1RejectWithinSample,
    /// Cumulative acceptance count cannot exceed the combined sample size.
    CumulativeAcceptWithinSamples,
    /// Sample sizes must be positive.
    EmptySample,
    /// The lot must be at least as large as the combined sample.
    LotSmallerThanSamples,
}

impl PlanConstraint {
    /// Name of the input field a presentation layer should highlight.
    pub fn field(&self) -> &'static str {
        match self {
            PlanConstraint::CumulativeAcceptAboveStage1 => "accept2",
            PlanConstraint::RejectAboveStage1 => "reject1",
            PlanConstraint::Stage1AcceptWithinSample => "accept1",
            PlanConstraint::Stage1RejectWithinSample => "reject1",
            PlanConstraint::CumulativeAcceptWithinSamples => "accept2",
            PlanConstraint::EmptySample => "sample1_size",
            PlanConstraint::LotSmallerThanSamples => "lot_size",
        }
    }
}

impl std::fmt::Display for PlanConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            PlanConstraint::CumulativeAcceptAboveStage1 => {
                "accept2 must be greater than accept1"
            }
            PlanConstraint::RejectAboveStage1 => "reject1 must be greater than accept1",
            PlanConstraint::Stage1AcceptWithinSample => {
                "accept1 cannot exceed sample1_size"
            }
            PlanConstraint::Stage1RejectWithinSample => {
                "reject1 cannot exceed sample1_size + 1"
            }
            PlanConstraint::CumulativeAcceptWithinSamples => {
                "accept2 cannot exceed sample1_size + sample2_size"
            }
            PlanConstraint::EmptySample => "sample sizes must be positive",
            PlanConstraint::LotSmallerThanSamples => {
                "lot_size must cover both samples"
            }
        };
        f.write_str(msg)
    }
}

/// opchar error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plan configuration error (non-retryable; no curve is produced)
    #[error("Invalid plan: {0}")]
    InvalidPlan(PlanConstraint),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// The violated plan constraint, if this is a configuration error.
    pub fn plan_constraint(&self) -> Option<PlanConstraint> {
        match self {
            Error::InvalidPlan(c) => Some(*c),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
