//! Distributions over discrete states.
//!
//! - [`UniformDistribution`]: every variable independent and uniform; the
//!   default initial-state generator for all algorithms.
//! - [`DependencyTree`]: a tree-structured density fitted to a population,
//!   the model MIMIC samples from.
//!
//! # References
//!
//! - Chow & Liu (1968), "Approximating Discrete Probability Distributions
//!   with Dependence Trees"
//! - De Bonet, Isbell & Viola (1997), "MIMIC: Finding Optima by Estimating
//!   Probability Densities"

mod dependency_tree;
pub mod spanning;
mod uniform;

pub(crate) use dependency_tree::check_dependency_factor;
pub use dependency_tree::{mutual_information, DependencyTree};
pub use uniform::UniformDistribution;

use crate::state::State;
use rand::RngCore;

/// A probability model over states that can be sampled.
pub trait DistributionModel: Send + Sync {
    /// Draws one state.
    fn sample(&self, rng: &mut dyn RngCore) -> State;

    /// Probability of `state` under this model.
    fn probability_of(&self, state: &State) -> f64;
}

/// Draws an index from a categorical distribution given by `weights`.
///
/// `weights` need not be normalized. Falls back to the last index when
/// rounding leaves the cumulative sum short of the draw.
pub(crate) fn sample_categorical(weights: &[f64], rng: &mut dyn RngCore) -> usize {
    use rand::Rng;

    let total: f64 = weights.iter().sum();
    let target = rng.random_range(0.0..1.0) * total;
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if target < cumulative {
            return i;
        }
    }
    weights.len() - 1
}
