//! The swarm controller: particle collection, global best, and the
//! iteration loop.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

use crate::config::{PsoConfig, UpdateSchedule};
use crate::error::{PsoError, Result};
use crate::objective::Objective;
use crate::particle::Particle;

/// A particle swarm minimizing one objective over a bounded box.
///
/// A swarm is built once per run from a validated [`PsoConfig`]; restarting
/// with different parameters means building a fresh swarm rather than
/// reusing particle state. The random source is injected at construction
/// ([`Swarm::with_rng`]) so runs can be made fully deterministic; the
/// convenience constructor [`Swarm::new`] seeds a [`StdRng`] from the
/// configuration.
pub struct Swarm<O: Objective, R: Rng = StdRng> {
    particles: Vec<Particle>,
    global_best_position: Array1<f64>,
    global_best_value: f64,
    config: PsoConfig,
    objective: O,
    rng: R,
    iterations: usize,
    func_evals: usize,
}

impl<O: Objective> Swarm<O, StdRng> {
    /// Build a swarm with a `StdRng` random source.
    ///
    /// The generator is seeded from `config.seed` when present, otherwise
    /// from entropy.
    ///
    /// # Arguments
    ///
    /// * `config` - The run configuration
    /// * `objective` - The objective function to minimize
    ///
    /// # Returns
    ///
    /// * The constructed swarm, or an error if the configuration is invalid
    pub fn new(config: PsoConfig, objective: O) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, objective, rng)
    }
}

impl<O: Objective, R: Rng> Swarm<O, R> {
    /// Build a swarm with an explicit random source.
    ///
    /// # Arguments
    ///
    /// * `config` - The run configuration
    /// * `objective` - The objective function to minimize
    /// * `rng` - The random source driving initialization and velocity draws
    ///
    /// # Returns
    ///
    /// * The constructed swarm, or an error if the configuration is invalid
    ///   or the objective dimension disagrees with the bounds
    pub fn with_rng(config: PsoConfig, objective: O, mut rng: R) -> Result<Self> {
        config.validate()?;

        if objective.dimension() != config.dimension() {
            return Err(PsoError::DimensionMismatch(format!(
                "objective expects {} dimensions, but {} bounds were given",
                objective.dimension(),
                config.dimension()
            )));
        }

        let particles: Vec<Particle> = (0..config.num_particles)
            .map(|_| Particle::new(&config.bounds, &objective, &mut rng))
            .collect();
        let mut func_evals = particles.len();

        // Seed the global best from the lowest personal best; on a tie the
        // first particle in storage order wins.
        let mut best_idx = 0;
        for (i, p) in particles.iter().enumerate().skip(1) {
            if p.best_value() < particles[best_idx].best_value() {
                best_idx = i;
            }
        }

        let global_best_position = particles[best_idx].best_position().clone();
        // Re-evaluated at the seeded position rather than copied from the
        // particle; the objective is deterministic, so either source gives
        // the same value.
        let global_best_value = objective.eval(&global_best_position);
        func_evals += 1;

        Ok(Self {
            particles,
            global_best_position,
            global_best_value,
            config,
            objective,
            rng,
            iterations: 0,
            func_evals,
        })
    }

    /// Advance the swarm by one iteration.
    ///
    /// Every particle gets a velocity update, a position update, and a
    /// chance to improve the global best. How an improvement propagates to
    /// the other particles of the same iteration depends on the configured
    /// [`UpdateSchedule`]. Always legal, never fails.
    pub fn step(&mut self) {
        match self.config.update_schedule {
            UpdateSchedule::Sequential => self.step_sequential(),
            UpdateSchedule::Synchronous => self.step_synchronous(),
        }
        self.iterations += 1;
    }

    /// One pass in storage order, with each particle reading the global best
    /// as already updated by the particles before it in the same pass.
    fn step_sequential(&mut self) {
        for i in 0..self.particles.len() {
            let particle = &mut self.particles[i];
            particle.update_velocity(&self.global_best_position, &self.config, &mut self.rng);
            particle.update_position(&self.config.bounds, &self.objective);
            self.func_evals += 1;

            if particle.best_value() < self.global_best_value {
                self.global_best_value = particle.best_value();
                self.global_best_position = particle.best_position().clone();
            }
        }
    }

    /// One pass against a global best frozen at iteration start, with the
    /// global best reduced from personal bests afterwards.
    fn step_synchronous(&mut self) {
        let frozen_best = self.global_best_position.clone();

        for i in 0..self.particles.len() {
            let particle = &mut self.particles[i];
            particle.update_velocity(&frozen_best, &self.config, &mut self.rng);
            particle.update_position(&self.config.bounds, &self.objective);
            self.func_evals += 1;
        }

        for p in &self.particles {
            if p.best_value() < self.global_best_value {
                self.global_best_value = p.best_value();
                self.global_best_position = p.best_position().clone();
            }
        }
    }

    /// Run a fixed number of iterations, reporting the swarm state after
    /// each one.
    ///
    /// There is no convergence criterion: exactly `iterations` steps are
    /// performed, and zero iterations is a no-op that leaves the swarm in
    /// its post-construction state. The hook receives the zero-based
    /// iteration index and the swarm itself; presentation layers use it to
    /// redraw particle positions, and the optimizer knows nothing about
    /// rendering.
    ///
    /// # Arguments
    ///
    /// * `iterations` - Number of steps to perform
    /// * `on_iteration` - Observation hook invoked after every step
    ///
    /// # Returns
    ///
    /// * A summary of the run so far
    pub fn run<F>(&mut self, iterations: usize, mut on_iteration: F) -> PsoResult
    where
        F: FnMut(usize, &Swarm<O, R>),
    {
        for i in 0..iterations {
            self.step();
            on_iteration(i, &*self);
        }
        self.result()
    }

    /// Get the best position found by any particle so far.
    pub fn best_position(&self) -> &Array1<f64> {
        &self.global_best_position
    }

    /// Get the objective value at the best position found so far.
    pub fn best_value(&self) -> f64 {
        self.global_best_value
    }

    /// Get the particles in storage order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Get the current particle positions as one row per particle.
    ///
    /// This is the plotting surface: a presentation layer can scatter the
    /// rows directly without reaching into individual particles.
    pub fn positions(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.particles.len(), self.config.dimension()));
        for (mut row, p) in out.rows_mut().into_iter().zip(&self.particles) {
            row.assign(p.position());
        }
        out
    }

    /// Get the configuration this swarm was built from.
    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Get the number of completed iterations.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Get the number of objective evaluations performed so far.
    pub fn func_evals(&self) -> usize {
        self.func_evals
    }

    /// Summarize the run so far.
    pub fn result(&self) -> PsoResult {
        PsoResult {
            best_position: self.global_best_position.clone(),
            best_value: self.global_best_value,
            iterations: self.iterations,
            func_evals: self.func_evals,
        }
    }
}

/// Result of a particle swarm optimization run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// The best position found
    pub best_position: Array1<f64>,

    /// The objective value at the best position
    pub best_value: f64,

    /// The number of iterations performed
    pub iterations: usize,

    /// The number of objective evaluations
    pub func_evals: usize,
}

impl fmt::Display for PsoResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PSO Result:")?;
        writeln!(f, "  Best value: {:.6e}", self.best_value)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;
        writeln!(f, "  Function evaluations: {}", self.func_evals)?;
        writeln!(f, "  Best position: {:?}", self.best_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bound;
    use crate::objective::{CurvedValley, FnObjective};
    use approx::assert_relative_eq;
    use rand_chacha::ChaCha8Rng;

    fn seeded_swarm(seed: u64) -> Swarm<CurvedValley, ChaCha8Rng> {
        Swarm::with_rng(
            PsoConfig::default(),
            CurvedValley,
            ChaCha8Rng::seed_from_u64(seed),
        )
        .unwrap()
    }

    #[test]
    fn test_construction_rejects_invalid_config() {
        let config = PsoConfig::default().with_num_particles(0);
        assert!(matches!(
            Swarm::new(config, CurvedValley),
            Err(PsoError::InvalidConfig(_))
        ));

        let config = PsoConfig::default().with_bounds(vec![Bound { low: 5.0, high: -5.0 }; 2]);
        assert!(matches!(
            Swarm::new(config, CurvedValley),
            Err(PsoError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_construction_rejects_dimension_mismatch() {
        let config = PsoConfig::default().with_bounds(vec![Bound { low: -1.0, high: 1.0 }; 3]);
        assert!(matches!(
            Swarm::new(config, CurvedValley),
            Err(PsoError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_initial_global_best_is_lowest_personal_best() {
        let swarm = seeded_swarm(11);
        let min_best = swarm
            .particles()
            .iter()
            .map(|p| p.best_value())
            .fold(f64::INFINITY, f64::min);
        assert_relative_eq!(swarm.best_value(), min_best);
        assert_relative_eq!(
            swarm.best_value(),
            CurvedValley.eval(swarm.best_position())
        );
    }

    #[test]
    fn test_construction_counts_seed_reevaluation() {
        let swarm = seeded_swarm(12);
        // One evaluation per particle plus the global-best re-evaluation.
        assert_eq!(swarm.func_evals(), swarm.particles().len() + 1);
    }

    #[test]
    fn test_step_counts_one_eval_per_particle() {
        let mut swarm = seeded_swarm(13);
        let before = swarm.func_evals();
        swarm.step();
        assert_eq!(swarm.func_evals(), before + swarm.particles().len());
        assert_eq!(swarm.iterations(), 1);
    }

    #[test]
    fn test_run_zero_iterations_is_noop() {
        let mut swarm = seeded_swarm(14);
        let initial = swarm.result();
        let initial_positions = swarm.positions();

        let mut calls = 0;
        let result = swarm.run(0, |_, _| calls += 1);

        assert_eq!(calls, 0);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.best_position, initial.best_position);
        assert_eq!(result.best_value, initial.best_value);
        assert_eq!(swarm.positions(), initial_positions);
    }

    #[test]
    fn test_run_invokes_hook_every_iteration() {
        let mut swarm = seeded_swarm(15);
        let mut seen = Vec::new();
        swarm.run(5, |i, s| {
            assert_eq!(s.iterations(), i + 1);
            seen.push(i);
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sequential_improvement_is_visible_within_iteration() {
        // With a single particle the schedules coincide; with several, the
        // sequential schedule must expose each improvement to the particles
        // after it. Observable consequence: after any step the global best
        // equals the minimum personal best, even though it was also read
        // mid-pass.
        let mut swarm = seeded_swarm(16);
        for _ in 0..10 {
            swarm.step();
            let min_best = swarm
                .particles()
                .iter()
                .map(|p| p.best_value())
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(swarm.best_value(), min_best);
        }
    }

    #[test]
    fn test_synchronous_schedule_reduces_global_best() {
        let config = PsoConfig::default().with_update_schedule(UpdateSchedule::Synchronous);
        let mut swarm =
            Swarm::with_rng(config, CurvedValley, ChaCha8Rng::seed_from_u64(17)).unwrap();
        for _ in 0..10 {
            let before = swarm.best_value();
            swarm.step();
            let min_best = swarm
                .particles()
                .iter()
                .map(|p| p.best_value())
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(swarm.best_value(), min_best);
            assert!(swarm.best_value() <= before);
        }
    }

    #[test]
    fn test_positions_shape() {
        let swarm = seeded_swarm(18);
        let positions = swarm.positions();
        assert_eq!(positions.shape(), &[30, 2]);
        for (row, p) in positions.rows().into_iter().zip(swarm.particles()) {
            assert_eq!(row, p.position().view());
        }
    }

    #[test]
    fn test_single_particle_swarm() {
        let config = PsoConfig::default().with_num_particles(1);
        let mut swarm =
            Swarm::with_rng(config, CurvedValley, ChaCha8Rng::seed_from_u64(19)).unwrap();
        let before = swarm.best_value();
        swarm.step();
        assert!(swarm.best_value() <= before);
    }

    #[test]
    fn test_non_finite_objective_never_becomes_global_best() {
        let nan_everywhere = FnObjective::new(2, |_: &Array1<f64>| f64::NAN);
        let config = PsoConfig::default().with_num_particles(5);
        let mut swarm =
            Swarm::with_rng(config, nan_everywhere, ChaCha8Rng::seed_from_u64(20)).unwrap();
        // Everything is NaN, including the seeded best, but stepping must
        // not panic and the best can never "improve" onto another NaN.
        let seeded = swarm.best_position().clone();
        for _ in 0..5 {
            swarm.step();
        }
        assert_eq!(swarm.best_position(), &seeded);
    }
}
