//! # pso-opt
//!
//! `pso-opt` is a Rust implementation of Particle Swarm Optimization (PSO),
//! a population-based stochastic minimizer for scalar objectives over a
//! bounded continuous parameter space.
//!
//! The library provides:
//! - A [`Swarm`] controller with a sequential (same-iteration visibility)
//!   and a synchronous (frozen-best) update schedule
//! - Two velocity update rules: inertia-weighted and memoryless
//! - An injectable random source for fully deterministic runs
//! - A per-iteration observation hook for external presentation layers
//!
//! PSO is a best-effort heuristic: it runs a fixed iteration budget with no
//! convergence criterion and makes no global-optimum guarantee.
//!
//! ## Basic Usage
//!
//! ```
//! use pso_opt::{CurvedValley, PsoConfig, Swarm};
//!
//! let config = PsoConfig::default().with_seed(42);
//! let iterations = config.iterations;
//! let mut swarm = Swarm::new(config, CurvedValley).unwrap();
//! let result = swarm.run(iterations, |_, _| {});
//! assert!(result.best_value <= swarm.best_value());
//! ```

// Public modules
pub mod bounds;
pub mod config;
pub mod error;
pub mod objective;
pub mod particle;
pub mod swarm;

// Re-exports for convenience
pub use bounds::Bound;
pub use config::{PsoConfig, UpdateSchedule, VelocityMode};
pub use error::{PsoError, Result};
pub use objective::{CurvedValley, FnObjective, Objective};
pub use particle::Particle;
pub use swarm::{PsoResult, Swarm};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
