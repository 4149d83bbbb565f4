//! Problem definition shared by every algorithm.
//!
//! A [`Problem`] bundles the objective, the variable domains and the
//! strategies the algorithms call into. It is built once and borrowed,
//! read-only, by any number of algorithm instances. The only state it
//! changes is the objective call counter, which is atomic.

use crate::dist::{DistributionModel, UniformDistribution};
use crate::operators::{
    ChangeOneMutation, ChangeOneNeighbor, CrossoverStrategy, MutationStrategy, NeighborStrategy,
    UniformCrossover,
};
use crate::state::{Ranges, State};
use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};

/// A fitness function to maximize.
///
/// Implemented for every `Fn(&State) -> f64 + Send + Sync`. Callers only
/// pass well-formed states; behaviour on states that do not fit the
/// problem's ranges is up to the implementation.
pub trait Objective: Send + Sync {
    fn value(&self, state: &State) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&State) -> f64 + Send + Sync,
{
    fn value(&self, state: &State) -> f64 {
        self(state)
    }
}

/// Objective, domains and operators of one optimization problem.
///
/// # Defaults
///
/// - initial states: [`UniformDistribution`] over the ranges
/// - neighbor: [`ChangeOneNeighbor`]
/// - mutation: [`ChangeOneMutation`]
/// - crossover: [`UniformCrossover`]
///
/// # Examples
///
/// ```
/// use u_randopt::{Problem, Ranges, State};
/// use u_randopt::operators::SinglePointCrossover;
///
/// let ranges = Ranges::uniform(8, 2).unwrap();
/// let problem = Problem::new(
///     |s: &State| s.values().iter().sum::<usize>() as f64,
///     ranges,
/// )
/// .with_crossover(SinglePointCrossover);
///
/// assert_eq!(problem.value(&State::new(vec![1; 8])), 8.0);
/// assert_eq!(problem.function_call_count(), 1);
/// ```
pub struct Problem {
    objective: Box<dyn Objective>,
    ranges: Ranges,
    calls: AtomicU64,
    initial: Box<dyn DistributionModel>,
    neighbor: Box<dyn NeighborStrategy>,
    mutation: Box<dyn MutationStrategy>,
    crossover: Box<dyn CrossoverStrategy>,
}

impl Problem {
    pub fn new<O: Objective + 'static>(objective: O, ranges: Ranges) -> Self {
        Self {
            objective: Box::new(objective),
            initial: Box::new(UniformDistribution::new(ranges.clone())),
            ranges,
            calls: AtomicU64::new(0),
            neighbor: Box::new(ChangeOneNeighbor),
            mutation: Box::new(ChangeOneMutation),
            crossover: Box::new(UniformCrossover),
        }
    }

    /// Replaces the distribution initial states are drawn from.
    pub fn with_initial_distribution<D: DistributionModel + 'static>(mut self, dist: D) -> Self {
        self.initial = Box::new(dist);
        self
    }

    pub fn with_neighbor<N: NeighborStrategy + 'static>(mut self, neighbor: N) -> Self {
        self.neighbor = Box::new(neighbor);
        self
    }

    pub fn with_mutation<M: MutationStrategy + 'static>(mut self, mutation: M) -> Self {
        self.mutation = Box::new(mutation);
        self
    }

    pub fn with_crossover<C: CrossoverStrategy + 'static>(mut self, crossover: C) -> Self {
        self.crossover = Box::new(crossover);
        self
    }

    pub fn ranges(&self) -> &Ranges {
        &self.ranges
    }

    /// Evaluates `state` and counts the call.
    pub fn value(&self, state: &State) -> f64 {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.objective.value(state)
    }

    /// Total objective evaluations since construction or the last reset.
    pub fn function_call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn reset_function_call_count(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    /// Draws a state from the initial distribution.
    pub fn random_state(&self, rng: &mut dyn RngCore) -> State {
        self.initial.sample(rng)
    }

    pub fn neighbor(&self, state: &State, rng: &mut dyn RngCore) -> State {
        self.neighbor.neighbor(state, &self.ranges, rng)
    }

    pub fn mutate(&self, state: &State, rng: &mut dyn RngCore) -> State {
        self.mutation.mutate(state, &self.ranges, rng)
    }

    pub fn mate(&self, first: &State, second: &State, rng: &mut dyn RngCore) -> State {
        self.crossover.mate(first, second, rng)
    }

    /// Evaluates every state; results are in input order.
    ///
    /// With the `parallel` feature the evaluations run on rayon's pool.
    pub(crate) fn evaluate_all(&self, states: &[State]) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            states.par_iter().map(|s| self.value(s)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            states.iter().map(|s| self.value(s)).collect()
        }
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("ranges", &self.ranges)
            .field("calls", &self.function_call_count())
            .finish_non_exhaustive()
    }
}
