//! Probability building blocks for opchar.
//!
//! This crate hosts the discrete distribution math behind OC curves:
//! - binomial PMF/CDF (independent-draw approximation)
//! - hypergeometric PMF/CDF (finite-population correction)
//! - the model selector that picks between them for a given plan

pub mod binomial;
pub mod hypergeometric;
pub mod math;
pub mod model;

pub use model::{evaluate, evaluate_at, DistributionModel, EvalMode};
