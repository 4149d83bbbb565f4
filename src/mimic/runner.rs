//! MIMIC step loop.

use super::config::{MimicConfig, Retain};
use crate::algorithm::{rank_descending, Incumbent, OptimizationAlgorithm};
use crate::dist::{DependencyTree, DistributionModel};
use crate::error::Result;
use crate::problem::Problem;
use crate::random::rng_from;
use crate::state::State;
use rand::rngs::StdRng;

/// MIMIC over a [`Problem`].
///
/// Each [`train`](OptimizationAlgorithm::train) call:
///
/// 1. samples `samples` states, from the problem's initial distribution on
///    the first step and from the current dependency tree afterwards;
/// 2. evaluates them and keeps the top `to_keep` (ties keep sample order);
/// 3. refits the dependency tree to those elites.
///
/// Construction draws and evaluates one state from the initial
/// distribution, so [`optimal`](OptimizationAlgorithm::optimal) is a real,
/// scored state even before the first step.
#[derive(Debug)]
pub struct Mimic<'a> {
    problem: &'a Problem,
    rng: StdRng,
    samples: usize,
    to_keep: usize,
    dependency_factor: f64,
    retain: Retain,
    model: Option<DependencyTree>,
    population: Vec<State>,
    fitness: Vec<f64>,
    best: Incumbent,
    iteration: usize,
}

impl<'a> Mimic<'a> {
    pub fn new(problem: &'a Problem, config: MimicConfig) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "mimic: samples {}, to_keep {}, dependency factor {}",
            config.samples,
            config.to_keep,
            config.dependency_factor
        );
        let mut rng = rng_from(config.seed);
        let start = problem.random_state(&mut rng);
        let start_fitness = problem.value(&start);
        Ok(Self {
            problem,
            rng,
            samples: config.samples,
            to_keep: config.to_keep,
            dependency_factor: config.dependency_factor,
            retain: config.retain,
            model: None,
            population: Vec::new(),
            fitness: Vec::new(),
            best: Incumbent::new(start, start_fitness),
            iteration: 0,
        })
    }

    /// Model fitted in the last step, `None` before the first one.
    pub fn model(&self) -> Option<&DependencyTree> {
        self.model.as_ref()
    }

    /// Population retained by the last step.
    pub fn population(&self) -> &[State] {
        &self.population
    }

    /// Fitness of each member of [`population`](Self::population).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    fn draw(&mut self) -> Vec<State> {
        let rng = &mut self.rng;
        match &self.model {
            None => (0..self.samples)
                .map(|_| self.problem.random_state(rng))
                .collect(),
            Some(model) => (0..self.samples).map(|_| model.sample(rng)).collect(),
        }
    }
}

impl OptimizationAlgorithm for Mimic<'_> {
    /// Returns the mean fitness of the retained population.
    fn train(&mut self) -> f64 {
        let samples = self.draw();
        let scores = self.problem.evaluate_all(&samples);
        let order = rank_descending(&scores);

        let elite: Vec<State> = order[..self.to_keep]
            .iter()
            .map(|&i| samples[i].clone())
            .collect();
        let elite_fitness: Vec<f64> = order[..self.to_keep].iter().map(|&i| scores[i]).collect();

        for (state, &f) in elite.iter().zip(&elite_fitness) {
            self.best.offer(state, f);
        }

        // The factor was checked by `MimicConfig::validate` in `new`.
        self.model = Some(DependencyTree::fit(
            &elite,
            self.problem.ranges(),
            self.dependency_factor,
        ));

        match self.retain {
            Retain::Elite => {
                self.population = elite;
                self.fitness = elite_fitness;
            }
            Retain::All => {
                self.population = samples;
                self.fitness = scores;
            }
        }
        self.iteration += 1;

        self.fitness.iter().sum::<f64>() / self.fitness.len() as f64
    }

    fn optimal(&self) -> &State {
        self.best.state()
    }

    fn optimal_fitness(&self) -> f64 {
        self.best.fitness()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Ranges;

    fn count_ones(s: &State) -> f64 {
        s.values().iter().filter(|&&v| v == 1).count() as f64
    }

    fn onemax(n: usize) -> Problem {
        Problem::new(count_ones, Ranges::uniform(n, 2).unwrap())
    }

    #[test]
    fn test_optimal_before_first_step_is_an_evaluated_sample() {
        let problem = onemax(6);
        let mimic = Mimic::new(&problem, MimicConfig::default().with_seed(1)).unwrap();
        assert_eq!(problem.function_call_count(), 1);
        assert!(mimic.model().is_none());
        assert!(problem.ranges().check(mimic.optimal()).is_ok());
        assert_eq!(mimic.optimal_fitness(), count_ones(mimic.optimal()));
    }

    #[test]
    fn test_step_evaluates_every_sample() {
        let problem = onemax(6);
        let config = MimicConfig::default()
            .with_samples(40)
            .with_to_keep(8)
            .with_seed(2);
        let mut mimic = Mimic::new(&problem, config).unwrap();
        mimic.train();
        assert_eq!(problem.function_call_count(), 1 + 40);
        mimic.train();
        assert_eq!(problem.function_call_count(), 1 + 80);
        assert_eq!(mimic.iteration(), 2);
    }

    #[test]
    fn test_elite_is_the_top_of_the_sample() {
        let problem = onemax(10);
        let config = MimicConfig::default()
            .with_samples(50)
            .with_to_keep(10)
            .with_retain(Retain::All)
            .with_seed(3);
        let mut mimic = Mimic::new(&problem, config.clone()).unwrap();
        mimic.train();
        let mut all = mimic.fitness().to_vec();
        all.sort_by(|a, b| b.total_cmp(a));
        let threshold = all[9];

        let mut elite_run = Mimic::new(&problem, config.with_retain(Retain::Elite)).unwrap();
        elite_run.train();
        assert_eq!(elite_run.population().len(), 10);
        assert!(elite_run.fitness().iter().all(|&f| f >= threshold));
        assert!(elite_run.optimal_fitness() >= all[0]);
    }

    #[test]
    fn test_model_is_a_spanning_tree() {
        let problem = onemax(12);
        let config = MimicConfig::default()
            .with_samples(60)
            .with_to_keep(12)
            .with_seed(4);
        let mut mimic = Mimic::new(&problem, config).unwrap();
        mimic.train();
        let model = mimic.model().unwrap();
        assert_eq!(model.edges().count(), 11);
        assert_eq!(model.parent(0), None);
        assert_eq!(model.order().len(), 12);
    }

    #[test]
    fn test_converges_on_onemax() {
        let problem = onemax(20);
        let config = MimicConfig::default()
            .with_samples(100)
            .with_to_keep(20)
            .with_seed(5);
        let mut mimic = Mimic::new(&problem, config).unwrap();
        for _ in 0..60 {
            mimic.train();
            if mimic.optimal_fitness() == 20.0 {
                break;
            }
        }
        assert_eq!(mimic.optimal_fitness(), 20.0);
        assert_eq!(mimic.optimal().values(), &[1; 20]);
    }

    #[test]
    fn test_mean_elite_fitness_improves() {
        let problem = onemax(30);
        let config = MimicConfig::default()
            .with_samples(100)
            .with_to_keep(20)
            .with_seed(6);
        let mut mimic = Mimic::new(&problem, config).unwrap();
        let first = mimic.train();
        let mut last = first;
        for _ in 0..10 {
            last = mimic.train();
        }
        assert!(last > first, "mean elite fitness {first} -> {last}");
    }

    #[test]
    fn test_same_seed_same_run() {
        let problem = onemax(15);
        let run = |seed| {
            let config = MimicConfig::default()
                .with_samples(30)
                .with_to_keep(6)
                .with_seed(seed);
            let mut mimic = Mimic::new(&problem, config).unwrap();
            (0..5).map(|_| mimic.train()).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let problem = onemax(4);
        let config = MimicConfig::default().with_samples(10).with_to_keep(12);
        assert!(Mimic::new(&problem, config).is_err());
    }
}
