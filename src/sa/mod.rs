//! Simulated Annealing (SA).
//!
//! Hill climbing that also accepts worsening moves, with a probability
//! `exp(Δ / T)` that shrinks as the temperature `T` cools. The
//! temperature is lowered after every step, accepted or not.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lundy & Mees (1986), "Convergence of an Annealing Algorithm"

mod config;
mod runner;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::SimulatedAnnealing;
