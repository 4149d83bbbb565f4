//! Seedable random source used by every algorithm.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the crate's RNG from a seed.
///
/// The same seed always reproduces the same draw sequence.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from an optional seed, drawing a fresh one when `None`.
pub(crate) fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
