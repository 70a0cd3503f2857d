//! Objective function trait and built-in instances.
//!
//! This module defines the `Objective` trait, which represents the scalar
//! cost function minimized by the swarm. Objectives are pure and total over
//! R^n: the search bounds are an external constraint, not a domain
//! restriction, and a non-finite return value is legal (it simply never wins
//! a strict less-than comparison in best tracking).

use ndarray::Array1;

/// A scalar objective function over a continuous parameter space.
///
/// Implementations must be deterministic: evaluating the same point twice
/// must return the same value, since the swarm re-evaluates positions when
/// seeding its global best.
pub trait Objective {
    /// Evaluate the objective at the given point.
    ///
    /// # Arguments
    ///
    /// * `point` - The point at which to evaluate, with `dimension()` entries
    fn eval(&self, point: &Array1<f64>) -> f64;

    /// Get the number of dimensions the objective expects.
    fn dimension(&self) -> usize;
}

/// The default 2-D test objective: `f(x, y) = (x - 2)^4 + (x - 2y)^2`.
///
/// The minimum value is 0, attained at `x = 2, y = 1`. The valley of
/// near-minimal points is curved rather than axis-aligned, so the two
/// dimensions are correlated and the swarm cannot optimize them
/// independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurvedValley;

impl Objective for CurvedValley {
    fn eval(&self, point: &Array1<f64>) -> f64 {
        let x = point[0];
        let y = point[1];
        (x - 2.0).powi(4) + (x - 2.0 * y).powi(2)
    }

    fn dimension(&self) -> usize {
        2
    }
}

/// Adapter wrapping a plain closure as an [`Objective`].
///
/// Useful for one-off objectives in tests and callers that don't want to
/// define a struct:
///
/// ```
/// use ndarray::Array1;
/// use pso_opt::objective::{FnObjective, Objective};
///
/// let sphere = FnObjective::new(3, |p: &Array1<f64>| p.iter().map(|x| x * x).sum());
/// assert_eq!(sphere.dimension(), 3);
/// ```
pub struct FnObjective<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    f: F,
    dimension: usize,
}

impl<F> FnObjective<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    /// Wrap a closure as an objective over `dimension` dimensions.
    pub fn new(dimension: usize, f: F) -> Self {
        Self { f, dimension }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn eval(&self, point: &Array1<f64>) -> f64 {
        (self.f)(point)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
