//! The step-wise interface shared by every search algorithm.

use crate::state::State;

/// A search algorithm driven one step at a time by the caller.
///
/// None of the algorithms terminate on their own; the caller decides how
/// many steps to run, for example a fixed budget or until
/// [`optimal_fitness`](OptimizationAlgorithm::optimal_fitness) reaches a
/// target.
///
/// # Examples
///
/// ```
/// use u_randopt::{OptimizationAlgorithm, Problem, Ranges, State};
/// use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
///
/// let problem = Problem::new(
///     |s: &State| s.values().iter().sum::<usize>() as f64,
///     Ranges::uniform(5, 2).unwrap(),
/// );
/// let mut rhc = RandomizedHillClimbing::new(&problem, RhcConfig::default().with_seed(1)).unwrap();
/// for _ in 0..500 {
///     rhc.train();
/// }
/// assert_eq!(rhc.optimal_fitness(), 5.0);
/// ```
pub trait OptimizationAlgorithm {
    /// Runs one step and returns a progress value for logging.
    ///
    /// What the value means is algorithm specific (current fitness for the
    /// local searches, mean population fitness for the population-based
    /// ones).
    fn train(&mut self) -> f64;

    /// Best state seen so far.
    fn optimal(&self) -> &State;

    /// Fitness of [`optimal`](OptimizationAlgorithm::optimal).
    fn optimal_fitness(&self) -> f64;
}

/// Best-ever state and its fitness.
///
/// Only a strictly better fitness replaces the incumbent, so among equally
/// good states the first one seen is kept. A NaN incumbent is replaced by
/// any non-NaN fitness; a NaN offer never replaces anything.
#[derive(Debug, Clone)]
pub struct Incumbent {
    state: State,
    fitness: f64,
}

impl Incumbent {
    pub fn new(state: State, fitness: f64) -> Self {
        Self { state, fitness }
    }

    /// Installs `state` if `fitness` is strictly better. Returns whether it
    /// was installed.
    pub fn offer(&mut self, state: &State, fitness: f64) -> bool {
        if fitness > self.fitness || (self.fitness.is_nan() && !fitness.is_nan()) {
            log::trace!("incumbent improved: {} -> {}", self.fitness, fitness);
            self.state = state.clone();
            self.fitness = fitness;
            true
        } else {
            false
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Indices of `fitness` sorted from best to worst.
///
/// The sort is stable, so equal fitness keeps the original order. NaN
/// ranks as `-inf`, below every real fitness.
pub(crate) fn rank_descending(fitness: &[f64]) -> Vec<usize> {
    let key = |i: usize| {
        let f = fitness[i];
        if f.is_nan() {
            f64::NEG_INFINITY
        } else {
            f
        }
    };
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| key(b).total_cmp(&key(a)));
    order
}
