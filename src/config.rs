//! Configuration for a particle swarm optimization run.

use serde::{Deserialize, Serialize};

use crate::bounds::{validate_bounds, Bound};
use crate::error::{PsoError, Result};

/// Velocity update rule applied to every particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VelocityMode {
    /// Standard inertia-weighted update:
    /// `v = inertia * v + cognitive_term + social_term`
    #[default]
    Inertia,

    /// Alternate exploration mode with no velocity memory:
    /// `v = cognitive_term + social_term`
    Memoryless,
}

/// Schedule for propagating global-best improvements within one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpdateSchedule {
    /// Particles are updated one at a time in storage order, and a global-best
    /// improvement becomes visible to the remaining particles of the same
    /// iteration immediately.
    #[default]
    Sequential,

    /// All particles read the global best as frozen at the start of the
    /// iteration; the global best is reduced from personal bests after the
    /// full pass.
    Synchronous,
}

/// Configuration for a PSO run.
///
/// The default configuration is 30 particles searching `[-500, 500]^2` with
/// inertia 0.5, cognitive and social coefficients 1.5, the inertia-weighted
/// velocity rule, and a budget of 100 iterations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsoConfig {
    /// Number of particles in the swarm (must be >= 1)
    pub num_particles: usize,

    /// Per-dimension search bounds (each must satisfy low < high)
    pub bounds: Vec<Bound>,

    /// Inertia weight scaling the previous velocity
    pub inertia: f64,

    /// Cognitive coefficient scaling attraction toward a particle's own best
    pub cognitive: f64,

    /// Social coefficient scaling attraction toward the swarm's best
    pub social: f64,

    /// Velocity update rule
    pub velocity_mode: VelocityMode,

    /// Global-best propagation schedule
    pub update_schedule: UpdateSchedule,

    /// Number of iterations a full `run` performs
    pub iterations: usize,

    /// Seed for the swarm's random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            num_particles: 30,
            bounds: vec![Bound { low: -500.0, high: 500.0 }; 2],
            inertia: 0.5,
            cognitive: 1.5,
            social: 1.5,
            velocity_mode: VelocityMode::default(),
            update_schedule: UpdateSchedule::default(),
            iterations: 100,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Create a configuration with the default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles.
    pub fn with_num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }

    /// Set the per-dimension search bounds.
    pub fn with_bounds(mut self, bounds: Vec<Bound>) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the inertia weight.
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    /// Set the cognitive coefficient.
    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    /// Set the social coefficient.
    pub fn with_social(mut self, social: f64) -> Self {
        self.social = social;
        self
    }

    /// Set the velocity update rule.
    pub fn with_velocity_mode(mut self, mode: VelocityMode) -> Self {
        self.velocity_mode = mode;
        self
    }

    /// Set the global-best propagation schedule.
    pub fn with_update_schedule(mut self, schedule: UpdateSchedule) -> Self {
        self.update_schedule = schedule;
        self
    }

    /// Set the iteration budget used by a full `run`.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the random seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Get the number of search dimensions.
    pub fn dimension(&self) -> usize {
        self.bounds.len()
    }

    /// Validate the configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(())`, or `PsoError::InvalidConfig` describing the first problem
    ///   found. Errors are surfaced here synchronously, never coerced.
    pub fn validate(&self) -> Result<()> {
        if self.num_particles < 1 {
            return Err(PsoError::InvalidConfig(
                "num_particles must be >= 1".to_string(),
            ));
        }

        validate_bounds(&self.bounds)
    }
}
