//! GA generation loop.
//!
//! One [`train`](OptimizationAlgorithm::train) call runs one generation:
//! rank → mate → mutate → evaluate newcomers → replace the weakest.

use super::config::GaConfig;
use super::selection::distinct_pair;
use crate::algorithm::{rank_descending, Incumbent, OptimizationAlgorithm};
use crate::error::Result;
use crate::problem::Problem;
use crate::random::rng_from;
use crate::state::State;
use rand::rngs::StdRng;
use rand::Rng;

/// Statistics of the population after a generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Number of generations run so far.
    pub generation: usize,
    /// Best fitness in the current population.
    pub best_fitness: f64,
    /// Mean fitness of the current population.
    pub mean_fitness: f64,
    /// Worst fitness in the current population.
    pub worst_fitness: f64,
}

/// Steady-state genetic algorithm with truncation selection.
///
/// Each generation:
///
/// 1. ranks the population by fitness, best first;
/// 2. takes the top `to_mate` as the mating pool and produces
///    `to_mate / 2` children, each from two distinct parents drawn
///    uniformly from the pool;
/// 3. produces `to_mutate` mutants from members drawn uniformly from the
///    whole population (before replacement);
/// 4. evaluates the newcomers and lets them replace the same number of the
///    lowest-ranked members.
///
/// The population size never changes, and each member's fitness is
/// evaluated once, when it enters the population.
///
/// # Usage
///
/// ```
/// use u_randopt::{OptimizationAlgorithm, Problem, Ranges, State};
/// use u_randopt::ga::{GaConfig, GeneticAlgorithm};
///
/// let problem = Problem::new(
///     |s: &State| s.values().iter().sum::<usize>() as f64,
///     Ranges::uniform(10, 2).unwrap(),
/// );
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_to_mate(20)
///     .with_to_mutate(4)
///     .with_seed(42);
/// let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();
/// for _ in 0..200 {
///     ga.train();
/// }
/// assert_eq!(ga.population().len(), 20);
/// ```
#[derive(Debug)]
pub struct GeneticAlgorithm<'a> {
    problem: &'a Problem,
    rng: StdRng,
    to_mate: usize,
    to_mutate: usize,
    population: Vec<State>,
    fitness: Vec<f64>,
    best: Incumbent,
    generation: usize,
}

impl<'a> GeneticAlgorithm<'a> {
    /// Draws and evaluates the initial population.
    pub fn new(problem: &'a Problem, config: GaConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = rng_from(config.seed);

        let population: Vec<State> = (0..config.population_size)
            .map(|_| problem.random_state(&mut rng))
            .collect();
        let fitness = problem.evaluate_all(&population);

        let first = rank_descending(&fitness)[0];
        let best = Incumbent::new(population[first].clone(), fitness[first]);

        log::debug!(
            "ga: population {}, to_mate {}, to_mutate {}, initial best {}",
            config.population_size,
            config.to_mate,
            config.to_mutate,
            best.fitness()
        );

        Ok(Self {
            problem,
            rng,
            to_mate: config.to_mate,
            to_mutate: config.to_mutate,
            population,
            fitness,
            best,
            generation: 0,
        })
    }

    /// Current members, in no particular order.
    pub fn population(&self) -> &[State] {
        &self.population
    }

    /// Cached fitness of each member of [`population`](Self::population).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn stats(&self) -> GenerationStats {
        let (mut best, mut worst, mut sum) = (f64::NEG_INFINITY, f64::INFINITY, 0.0);
        for &f in &self.fitness {
            best = best.max(f);
            worst = worst.min(f);
            sum += f;
        }
        GenerationStats {
            generation: self.generation,
            best_fitness: best,
            mean_fitness: sum / self.fitness.len() as f64,
            worst_fitness: worst,
        }
    }

    /// Builds this generation's children and mutants.
    fn breed(&mut self, order: &[usize]) -> Vec<State> {
        let pool = &order[..self.to_mate];
        let mut newcomers = Vec::with_capacity(self.to_mate / 2 + self.to_mutate);

        if pool.len() >= 2 {
            for _ in 0..self.to_mate / 2 {
                let (a, b) = distinct_pair(pool.len(), &mut self.rng);
                let child = self.problem.mate(
                    &self.population[pool[a]],
                    &self.population[pool[b]],
                    &mut self.rng,
                );
                newcomers.push(child);
            }
        }

        for _ in 0..self.to_mutate {
            let i = self.rng.random_range(0..self.population.len());
            newcomers.push(self.problem.mutate(&self.population[i], &mut self.rng));
        }

        newcomers
    }
}

impl OptimizationAlgorithm for GeneticAlgorithm<'_> {
    /// Runs one generation and returns the population's mean fitness.
    fn train(&mut self) -> f64 {
        let order = rank_descending(&self.fitness);
        let newcomers = self.breed(&order);
        let scores = self.problem.evaluate_all(&newcomers);

        let survivors = self.population.len() - newcomers.len();
        let mut population = Vec::with_capacity(self.population.len());
        let mut fitness = Vec::with_capacity(self.population.len());
        for &i in &order[..survivors] {
            population.push(self.population[i].clone());
            fitness.push(self.fitness[i]);
        }
        for (state, f) in newcomers.into_iter().zip(scores) {
            self.best.offer(&state, f);
            population.push(state);
            fitness.push(f);
        }

        self.population = population;
        self.fitness = fitness;
        self.generation += 1;

        self.fitness.iter().sum::<f64>() / self.fitness.len() as f64
    }

    fn optimal(&self) -> &State {
        self.best.state()
    }

    fn optimal_fitness(&self) -> f64 {
        self.best.fitness()
    }
}

// ============================================================================
// Tests
// ============================================================================
