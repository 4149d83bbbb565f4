//! Pluggable operators that perturb or recombine states.
//!
//! Each role is an object-safe trait so that a [`Problem`](crate::problem::Problem)
//! can hold any variant behind a `Box<dyn ...>`:
//!
//! - [`NeighborStrategy`]: one local move, used by RHC and SA
//! - [`MutationStrategy`]: one random perturbation, used by the GA
//! - [`CrossoverStrategy`]: recombine two parents into one child, used by the GA
//!
//! All operators are range-aware and never produce a value outside its
//! variable's domain.
//!
//! # Variants
//!
//! - [`ChangeOneNeighbor`] / [`ChangeOneMutation`]: re-draw one variable
//! - [`UniformCrossover`]: each position from either parent with probability 0.5
//! - [`SinglePointCrossover`]: prefix from one parent, suffix from the other
//! - [`TwoPointCrossover`]: middle segment from the second parent

use crate::state::{Ranges, State};
use rand::{Rng, RngCore};

/// Produces a neighbor of a state.
pub trait NeighborStrategy: Send + Sync {
    /// Returns a new state "close" to `state`.
    fn neighbor(&self, state: &State, ranges: &Ranges, rng: &mut dyn RngCore) -> State;
}

/// Produces a mutated copy of a state.
pub trait MutationStrategy: Send + Sync {
    fn mutate(&self, state: &State, ranges: &Ranges, rng: &mut dyn RngCore) -> State;
}

/// Recombines two parents into one child.
///
/// Both parents have the same length; the child has that length too.
pub trait CrossoverStrategy: Send + Sync {
    fn mate(&self, first: &State, second: &State, rng: &mut dyn RngCore) -> State;
}

// ============================================================================
// Local moves
// ============================================================================

/// Neighbor that differs in exactly one variable.
///
/// The variable is drawn uniformly among those with more than one value,
/// and its new value uniformly among the remaining values of its domain.
/// If no variable can change, the state is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeOneNeighbor;

impl NeighborStrategy for ChangeOneNeighbor {
    fn neighbor(&self, state: &State, ranges: &Ranges, rng: &mut dyn RngCore) -> State {
        change_one(state, ranges, rng)
    }
}

/// Mutation that re-draws one variable to a different value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeOneMutation;

impl MutationStrategy for ChangeOneMutation {
    fn mutate(&self, state: &State, ranges: &Ranges, rng: &mut dyn RngCore) -> State {
        change_one(state, ranges, rng)
    }
}

fn change_one(state: &State, ranges: &Ranges, rng: &mut dyn RngCore) -> State {
    let free = ranges.free_variables();
    if free.is_empty() {
        return state.clone();
    }
    let i = free[rng.random_range(0..free.len())];
    let current = state.get(i);
    // Draw from the size-1 other values and skip over the current one.
    let mut value = rng.random_range(0..ranges.size(i) - 1);
    if value >= current {
        value += 1;
    }
    state.with_value(i, value)
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Uniform crossover: every position is copied from either parent with
/// probability 0.5, independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCrossover;

impl CrossoverStrategy for UniformCrossover {
    fn mate(&self, first: &State, second: &State, rng: &mut dyn RngCore) -> State {
        assert_eq!(first.len(), second.len(), "parents must have equal length");
        let values = first
            .values()
            .iter()
            .zip(second.values())
            .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
            .collect();
        State::new(values)
    }
}

/// Single-point crossover.
///
/// A cut index `c` is drawn uniformly from `0..n`; the child is
/// `first[..c] ++ second[c..]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePointCrossover;

impl CrossoverStrategy for SinglePointCrossover {
    fn mate(&self, first: &State, second: &State, rng: &mut dyn RngCore) -> State {
        let n = first.len();
        assert_eq!(n, second.len(), "parents must have equal length");
        if n == 0 {
            return first.clone();
        }
        let cut = rng.random_range(0..n);
        let mut values = first.values()[..cut].to_vec();
        values.extend_from_slice(&second.values()[cut..]);
        State::new(values)
    }
}

/// Two-point crossover.
///
/// Two cut indices `lo <= hi` are drawn from `0..=n`; the child is
/// `first[..lo] ++ second[lo..hi] ++ first[hi..]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl CrossoverStrategy for TwoPointCrossover {
    fn mate(&self, first: &State, second: &State, rng: &mut dyn RngCore) -> State {
        let n = first.len();
        assert_eq!(n, second.len(), "parents must have equal length");
        let (lo, hi) = random_segment(n, rng);
        let mut values = first.values().to_vec();
        values[lo..hi].copy_from_slice(&second.values()[lo..hi]);
        State::new(values)
    }
}

/// Pick a half-open segment `[lo, hi)` within `0..=n`.
fn random_segment(n: usize, rng: &mut dyn RngCore) -> (usize, usize) {
    let a = rng.random_range(0..=n);
    let b = rng.random_range(0..=n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
