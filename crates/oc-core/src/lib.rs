//! # oc-core
//!
//! Shared error and result types for the opchar workspace.

pub mod error;

pub use error::{Error, PlanConstraint, Result};

/// Workspace version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
