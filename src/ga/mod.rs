//! Genetic Algorithm (GA).
//!
//! A steady-state GA over discrete states. Users configure it with three
//! counts ([`GaConfig`]); the crossover and mutation operators come from
//! the [`Problem`](crate::problem::Problem).
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, mating pool size, mutant count
//! - [`GeneticAlgorithm`]: runs one generation per `train()` call
//! - [`GenerationStats`]: best / mean / worst fitness of the population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GenerationStats, GeneticAlgorithm};
