//! SA step loop.

use super::config::{CoolingSchedule, SaConfig};
use crate::algorithm::{Incumbent, OptimizationAlgorithm};
use crate::error::Result;
use crate::problem::Problem;
use crate::random::rng_from;
use crate::state::State;
use rand::rngs::StdRng;
use rand::Rng;

/// Simulated annealing over a [`Problem`], maximizing.
///
/// Each step draws one neighbor and computes `Δ = f(neighbor) - f(current)`.
/// Improvements and ties are always accepted; a worsening move is accepted
/// when a uniform draw in `[0, 1)` falls below `exp(Δ / T)`. That draw is
/// only made when `Δ < 0` and `T > 0`. Once the temperature has underflowed
/// to zero, worsening moves are always rejected.
///
/// The best state ever seen is tracked separately from the current one,
/// which may wander away from it.
#[derive(Debug)]
pub struct SimulatedAnnealing<'a> {
    problem: &'a Problem,
    rng: StdRng,
    cooling: CoolingSchedule,
    temperature: f64,
    current: State,
    current_fitness: f64,
    best: Incumbent,
    accepted_moves: usize,
    improving_moves: usize,
}

impl<'a> SimulatedAnnealing<'a> {
    /// Starts from a state drawn from the problem's initial distribution.
    pub fn new(problem: &'a Problem, config: SaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);
        let start = problem.random_state(&mut rng);
        Ok(Self::with_rng(problem, &config, rng, start))
    }

    /// Starts from `start`, which must fit the problem's ranges.
    pub fn starting_from(problem: &'a Problem, config: SaConfig, start: State) -> Result<Self> {
        config.validate()?;
        problem.ranges().check(&start)?;
        Ok(Self::with_rng(problem, &config, rng_from(config.seed), start))
    }

    fn with_rng(problem: &'a Problem, config: &SaConfig, rng: StdRng, start: State) -> Self {
        let current_fitness = problem.value(&start);
        log::debug!(
            "sa: T0 = {}, cooling = {:?}, start fitness {current_fitness}",
            config.initial_temperature,
            config.cooling
        );
        Self {
            problem,
            rng,
            cooling: config.cooling,
            temperature: config.initial_temperature,
            best: Incumbent::new(start.clone(), current_fitness),
            current: start,
            current_fitness,
            accepted_moves: 0,
            improving_moves: 0,
        }
    }

    /// Temperature the next step will run at.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn current(&self) -> &State {
        &self.current
    }

    pub fn current_fitness(&self) -> f64 {
        self.current_fitness
    }

    /// Number of accepted moves, including improvements and ties.
    pub fn accepted_moves(&self) -> usize {
        self.accepted_moves
    }

    /// Number of strictly improving moves.
    pub fn improving_moves(&self) -> usize {
        self.improving_moves
    }
}

impl OptimizationAlgorithm for SimulatedAnnealing<'_> {
    /// Returns the current fitness after the step.
    fn train(&mut self) -> f64 {
        let neighbor = self.problem.neighbor(&self.current, &mut self.rng);
        let neighbor_fitness = self.problem.value(&neighbor);
        let delta = neighbor_fitness - self.current_fitness;

        // Metropolis acceptance criterion
        let accept = if delta >= 0.0 {
            if delta > 0.0 {
                self.improving_moves += 1;
            }
            true
        } else if self.temperature > 0.0 {
            let probability = (delta / self.temperature).exp();
            self.rng.random_range(0.0..1.0) < probability
        } else {
            false
        };

        if accept {
            self.current = neighbor;
            self.current_fitness = neighbor_fitness;
            self.accepted_moves += 1;
            self.best.offer(&self.current, self.current_fitness);
        }

        self.temperature = self.cooling.cool(self.temperature);
        self.current_fitness
    }

    fn optimal(&self) -> &State {
        self.best.state()
    }

    fn optimal_fitness(&self) -> f64 {
        self.best.fitness()
    }
}
