//! Parent pairing for the GA.
//!
//! Selection is elitist truncation and deterministic given fitness: the
//! mating pool is the top of the population ranked by fitness. Randomness
//! only enters when pairing parents inside the pool.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm"

use rand::{Rng, RngCore};

/// Two distinct indices drawn uniformly from `0..n`.
///
/// # Panics
/// Panics if `n < 2`.
pub(crate) fn distinct_pair(n: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    assert!(n >= 2, "need at least two parents to pair");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}
