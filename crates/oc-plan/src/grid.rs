//! Candidate true-defective-fraction grids.

use oc_core::{Error, Result};

/// Step of the reference grid.
pub const DEFAULT_STEP: f64 = 1e-4;

/// Number of points in the reference grid.
pub const DEFAULT_POINTS: usize = 10_000;

/// Ordered grid of candidate true-defective fractions in `[0, 1)`.
///
/// Ordering is significant: it is the x-axis of the resulting curve.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionGrid(Vec<f64>);

impl FractionGrid {
    /// Build a grid from caller-supplied fractions.
    ///
    /// Fractions must be finite, inside `[0, 1)`, and strictly increasing.
    pub fn new(fractions: Vec<f64>) -> Result<Self> {
        if fractions.is_empty() {
            return Err(Error::Validation("grid must not be empty".into()));
        }
        for &f in &fractions {
            if !f.is_finite() || !(0.0..1.0).contains(&f) {
                return Err(Error::Validation(format!(
                    "grid fractions must be in [0,1), got {}",
                    f
                )));
            }
        }
        if fractions.windows(2).any(|w| w[1] <= w[0]) {
            return Err(Error::Validation("grid must be strictly increasing".into()));
        }
        Ok(Self(fractions))
    }

    /// The reference 10,000-point grid over `[0, 1)` at step 0.0001.
    pub fn default_grid() -> Self {
        Self((0..DEFAULT_POINTS).map(|i| i as f64 * DEFAULT_STEP).collect())
    }

    /// Grid fractions in increasing order.
    pub fn fractions(&self) -> &[f64] {
        &self.0
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the grid is empty (never true for a constructed grid).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FractionGrid {
    fn default() -> Self {
        Self::default_grid()
    }
}
