//! Plot-friendly OC curve artifact.
//!
//! Numbers-first: parallel arrays plus optional reference levels, ready for
//! a presentation layer to draw without re-deriving anything.

use serde::{Deserialize, Serialize};

/// Artifact schema identifier emitted in every curve.
pub const SCHEMA_VERSION: &str = "oc-curve/1";

/// Operating-characteristic curve of a sampling plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcCurveArtifact {
    /// Artifact schema identifier.
    pub schema_version: String,
    /// Title summarizing the sampling plan.
    pub plan_title: String,
    /// Distribution model used for every term of the curve.
    pub model: String,
    /// Candidate true-defective fractions (x-axis), increasing.
    pub fractions: Vec<f64>,
    /// Probability of lot acceptance aligned with `fractions`.
    pub acceptance: Vec<f64>,
    /// AQL reference level; absent when the target is not a valid probability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aql_line: Option<f64>,
    /// `1 - RQL` reference level; absent when the target is not a valid probability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rql_line: Option<f64>,
}
