//! Acceptance sampling plans and OC curve construction for opchar.
//!
//! The flow is: an external form supplies a [`PlanDraft`]; resolving it
//! yields validated [`PlanParameters`] (or a configuration error naming the
//! violated constraint, or "still incomplete"); [`build_curve`] turns the
//! parameters plus [`QualityTargets`] and a [`FractionGrid`] into a
//! plot-friendly [`OcCurveArtifact`].

pub mod artifact;
pub mod curve;
pub mod grid;
pub mod plan;

pub use artifact::OcCurveArtifact;
pub use curve::{acceptance_combinations, build_curve, build_single_curve};
pub use grid::FractionGrid;
pub use plan::{PlanDraft, PlanParameters, QualityTargets};
