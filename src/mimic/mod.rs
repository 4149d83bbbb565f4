//! MIMIC: Mutual-Information-Maximizing Input Clustering.
//!
//! An estimation-of-distribution algorithm. Each step samples a population
//! from the current model, keeps the fittest members, and refits a
//! [`DependencyTree`](crate::dist::DependencyTree) to them. The model
//! concentrates on better regions of the search space step by step.
//!
//! # References
//!
//! - De Bonet, Isbell & Viola (1997), "MIMIC: Finding Optima by Estimating
//!   Probability Densities"

mod config;
mod runner;

pub use config::{MimicConfig, Retain};
pub use runner::Mimic;
