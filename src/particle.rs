//! A single particle: a candidate solution with velocity and memory.

use ndarray::Array1;
use rand::Rng;

use crate::bounds::Bound;
use crate::config::{PsoConfig, VelocityMode};
use crate::objective::Objective;

/// A candidate solution carrying a position, a velocity, and the best
/// position it has ever occupied.
///
/// A particle is created once at swarm construction and mutated in place on
/// every iteration; it is never replaced mid-run.
#[derive(Debug, Clone)]
pub struct Particle {
    position: Array1<f64>,
    velocity: Array1<f64>,
    best_position: Array1<f64>,
    best_value: f64,
}

impl Particle {
    /// Create a particle at a uniformly random position inside the bounds.
    ///
    /// The velocity starts at zero and the personal best is the starting
    /// position itself. Bounds are pre-validated by the caller.
    pub fn new<O: Objective, R: Rng>(bounds: &[Bound], objective: &O, rng: &mut R) -> Self {
        let position =
            Array1::from_vec(bounds.iter().map(|b| b.sample(rng)).collect::<Vec<f64>>());
        let best_value = objective.eval(&position);

        Self {
            velocity: Array1::zeros(position.len()),
            best_position: position.clone(),
            position,
            best_value,
        }
    }

    /// Apply the configured velocity update rule.
    ///
    /// Draws one fresh `r1` and one fresh `r2` in `[0, 1)` per call, shared
    /// across all dimensions of the vector terms rather than drawn per
    /// dimension. The velocity magnitude is not clamped.
    pub fn update_velocity<R: Rng>(
        &mut self,
        global_best: &Array1<f64>,
        config: &PsoConfig,
        rng: &mut R,
    ) {
        let r1: f64 = rng.gen();
        let r2: f64 = rng.gen();

        let cognitive_term = (&self.best_position - &self.position) * (config.cognitive * r1);
        let social_term = (global_best - &self.position) * (config.social * r2);

        self.velocity = match config.velocity_mode {
            VelocityMode::Inertia => {
                &self.velocity * config.inertia + &cognitive_term + &social_term
            }
            VelocityMode::Memoryless => cognitive_term + social_term,
        };
    }

    /// Move by the current velocity, clip into the bounds, and refresh the
    /// personal best.
    ///
    /// The personal best only changes on a strict improvement, so an equal
    /// value keeps the earliest-found best, and a non-finite objective value
    /// can never become a best.
    pub fn update_position<O: Objective>(&mut self, bounds: &[Bound], objective: &O) {
        self.position += &self.velocity;
        for (x, bound) in self.position.iter_mut().zip(bounds.iter()) {
            *x = bound.clamp(*x);
        }

        let value = objective.eval(&self.position);
        if value < self.best_value {
            self.best_value = value;
            self.best_position = self.position.clone();
        }
    }

    /// Get the current position.
    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    /// Get the current velocity.
    pub fn velocity(&self) -> &Array1<f64> {
        &self.velocity
    }

    /// Get the best position this particle has occupied.
    pub fn best_position(&self) -> &Array1<f64> {
        &self.best_position
    }

    /// Get the objective value at the personal best position.
    pub fn best_value(&self) -> f64 {
        self.best_value
    }
}
