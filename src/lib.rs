//! Randomized optimization over discrete state vectors.
//!
//! Maximizes a black-box objective over fixed-length vectors of bounded
//! integers. The caller supplies a [`Problem`] (objective, domain sizes,
//! and optionally custom operators); the crate supplies interchangeable
//! search strategies:
//!
//! - **Randomized Hill Climbing ([`rhc`])**: greedy single-state search
//!   with random neighbors.
//! - **Simulated Annealing ([`sa`])**: single-state search that accepts
//!   worsening moves with a probability that decreases as it cools.
//! - **Genetic Algorithm ([`ga`])**: population search with truncation
//!   selection, crossover and mutation.
//! - **MIMIC ([`mimic`])**: repeatedly fits a dependency-tree density to
//!   the best samples and resamples from it.
//!
//! Every algorithm implements [`OptimizationAlgorithm`] and is driven one
//! step at a time by the caller; none of them decides when to stop.
//!
//! # Architecture
//!
//! A [`Problem`] is built once and shared read-only by any number of
//! algorithm instances, which may run on separate threads. Each instance
//! owns its search state and a seedable RNG; stepping one instance from
//! several threads at once is not supported.
//!
//! # Example
//!
//! ```
//! use u_randopt::{OptimizationAlgorithm, Problem, Ranges, State};
//! use u_randopt::sa::{SaConfig, SimulatedAnnealing};
//!
//! let problem = Problem::new(
//!     |s: &State| s.values().iter().filter(|&&v| v == 1).count() as f64,
//!     Ranges::uniform(5, 2).unwrap(),
//! );
//! let config = SaConfig::default()
//!     .with_initial_temperature(100.0)
//!     .with_alpha(0.95)
//!     .with_seed(42);
//! let mut sa = SimulatedAnnealing::new(&problem, config).unwrap();
//! for _ in 0..2000 {
//!     sa.train();
//! }
//! assert_eq!(sa.optimal_fitness(), 5.0);
//! println!("{} objective calls", problem.function_call_count());
//! ```

pub mod algorithm;
pub mod dist;
pub mod error;
pub mod ga;
pub mod mimic;
pub mod operators;
pub mod problem;
pub mod random;
pub mod rhc;
pub mod sa;
pub mod state;

pub use algorithm::{Incumbent, OptimizationAlgorithm};
pub use error::{OptError, Result};
pub use problem::{Objective, Problem};
pub use state::{Ranges, State};
