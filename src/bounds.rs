//! Search-space bounds.
//!
//! This module provides the per-dimension box constraint used by the swarm.
//! Bounds constrain the search, not the objective: the objective function
//! stays total over R^n, and particle positions are hard-clipped back into
//! the box after every move.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PsoError, Result};

/// An axis-aligned bound for a single search dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    /// Lower edge of the search interval
    pub low: f64,

    /// Upper edge of the search interval
    pub high: f64,
}

impl Bound {
    /// Create a new bound, checking that `low < high`.
    ///
    /// # Arguments
    ///
    /// * `low` - Lower edge of the search interval
    /// * `high` - Upper edge of the search interval
    ///
    /// # Returns
    ///
    /// * The bound, or `PsoError::InvalidConfig` if `low >= high`
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !(low < high) {
            return Err(PsoError::InvalidConfig(format!(
                "bound low ({}) must be less than high ({})",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    /// Clip a coordinate into the interval (hard clip, not reflect or wrap).
    pub fn clamp(&self, x: f64) -> f64 {
        if x < self.low {
            self.low
        } else if x > self.high {
            self.high
        } else {
            x
        }
    }

    /// Draw a uniform random coordinate from `[low, high)`.
    pub fn sample(&self, rng: &mut impl Rng) -> f64 {
        rng.gen_range(self.low..self.high)
    }

    /// Check whether a coordinate lies inside the interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.low && x <= self.high
    }
}

/// Validate a full set of per-dimension bounds.
///
/// # Arguments
///
/// * `bounds` - One bound per search dimension
///
/// # Returns
///
/// * `Ok(())`, or `PsoError::InvalidConfig` naming the first offending dimension
pub fn validate_bounds(bounds: &[Bound]) -> Result<()> {
    if bounds.is_empty() {
        return Err(PsoError::InvalidConfig(
            "at least one search dimension is required".to_string(),
        ));
    }

    for (i, bound) in bounds.iter().enumerate() {
        if !(bound.low < bound.high) {
            return Err(PsoError::InvalidConfig(format!(
                "dimension {}: bound low ({}) must be less than high ({})",
                i, bound.low, bound.high
            )));
        }
    }

    Ok(())
}
