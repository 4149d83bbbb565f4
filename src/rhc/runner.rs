//! RHC step loop.

use super::config::RhcConfig;
use crate::algorithm::{Incumbent, OptimizationAlgorithm};
use crate::error::Result;
use crate::problem::Problem;
use crate::random::rng_from;
use crate::state::State;
use rand::rngs::StdRng;

/// Randomized hill climbing over a [`Problem`].
///
/// Holds the current state and its fitness. Each [`train`](OptimizationAlgorithm::train)
/// call evaluates exactly one neighbor.
#[derive(Debug)]
pub struct RandomizedHillClimbing<'a> {
    problem: &'a Problem,
    rng: StdRng,
    current: State,
    current_fitness: f64,
    best: Incumbent,
}

impl<'a> RandomizedHillClimbing<'a> {
    /// Starts from a state drawn from the problem's initial distribution.
    pub fn new(problem: &'a Problem, config: RhcConfig) -> Result<Self> {
        let mut rng = rng_from(config.seed);
        let start = problem.random_state(&mut rng);
        Ok(Self::with_rng(problem, rng, start))
    }

    /// Starts from `start`, which must fit the problem's ranges.
    pub fn starting_from(problem: &'a Problem, config: RhcConfig, start: State) -> Result<Self> {
        problem.ranges().check(&start)?;
        Ok(Self::with_rng(problem, rng_from(config.seed), start))
    }

    fn with_rng(problem: &'a Problem, rng: StdRng, start: State) -> Self {
        let current_fitness = problem.value(&start);
        log::debug!(
            "rhc: {} variables, start fitness {current_fitness}",
            problem.ranges().len()
        );
        Self {
            problem,
            rng,
            best: Incumbent::new(start.clone(), current_fitness),
            current: start,
            current_fitness,
        }
    }

    pub fn current(&self) -> &State {
        &self.current
    }

    pub fn current_fitness(&self) -> f64 {
        self.current_fitness
    }
}

impl OptimizationAlgorithm for RandomizedHillClimbing<'_> {
    /// Returns the current fitness after the step.
    fn train(&mut self) -> f64 {
        let neighbor = self.problem.neighbor(&self.current, &mut self.rng);
        let neighbor_fitness = self.problem.value(&neighbor);
        if neighbor_fitness >= self.current_fitness {
            self.current = neighbor;
            self.current_fitness = neighbor_fitness;
        }
        self.best.offer(&self.current, self.current_fitness);
        self.current_fitness
    }

    fn optimal(&self) -> &State {
        self.best.state()
    }

    fn optimal_fitness(&self) -> f64 {
        self.best.fitness()
    }
}
