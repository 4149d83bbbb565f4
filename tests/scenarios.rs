//! End-to-end runs of every algorithm on count-ones problems.

use u_randopt::ga::{GaConfig, GeneticAlgorithm};
use u_randopt::mimic::{Mimic, MimicConfig};
use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
use u_randopt::sa::{SaConfig, SimulatedAnnealing};
use u_randopt::{OptimizationAlgorithm, Problem, Ranges, State};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn count_ones(s: &State) -> f64 {
    s.values().iter().filter(|&&v| v == 1).count() as f64
}

fn onemax(n: usize) -> Problem {
    Problem::new(count_ones, Ranges::uniform(n, 2).unwrap())
}

/// Steps `algo` until it reaches `target` or the budget runs out.
/// Returns the number of steps taken.
fn run_until<A: OptimizationAlgorithm>(algo: &mut A, target: f64, budget: usize) -> usize {
    for step in 1..=budget {
        algo.train();
        if algo.optimal_fitness() >= target {
            return step;
        }
    }
    budget
}

#[test]
fn rhc_climbs_from_all_zeros() {
    init_logging();
    let problem = onemax(5);
    let mut rhc = RandomizedHillClimbing::starting_from(
        &problem,
        RhcConfig::default().with_seed(2024),
        State::zeros(5),
    )
    .unwrap();
    run_until(&mut rhc, 5.0, 2000);
    assert_eq!(rhc.optimal_fitness(), 5.0);
    assert_eq!(rhc.optimal(), &State::new(vec![1, 1, 1, 1, 1]));
}

#[test]
fn sa_converges_over_repeated_seeds() {
    init_logging();
    let problem = onemax(5);
    let runs = 200;
    let mut solved = 0;
    for seed in 0..runs {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_alpha(0.95)
            .with_seed(seed);
        let mut sa = SimulatedAnnealing::new(&problem, config).unwrap();
        run_until(&mut sa, 5.0, 2000);
        if sa.optimal_fitness() == 5.0 {
            solved += 1;
        }
    }
    assert!(
        solved as f64 / runs as f64 > 0.99,
        "solved {solved} of {runs} runs"
    );
}

#[test]
fn ga_reaches_optimum_within_200_generations() {
    init_logging();
    let problem = onemax(10);
    let config = GaConfig::default()
        .with_population_size(20)
        .with_to_mate(20)
        .with_to_mutate(4)
        .with_seed(42);
    let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();
    let steps = run_until(&mut ga, 10.0, 200);
    assert_eq!(ga.optimal_fitness(), 10.0, "stopped after {steps} generations");
    assert_eq!(ga.population().len(), 20);
}

#[test]
fn mimic_reaches_optimum() {
    init_logging();
    let problem = onemax(40);
    let config = MimicConfig::default()
        .with_samples(200)
        .with_to_keep(40)
        .with_seed(7);
    let mut mimic = Mimic::new(&problem, config).unwrap();
    run_until(&mut mimic, 40.0, 100);
    assert_eq!(mimic.optimal_fitness(), 40.0);
}

#[test]
fn call_count_reports_algorithm_cost() {
    let problem = onemax(8);
    let mut rhc = RandomizedHillClimbing::new(&problem, RhcConfig::default().with_seed(1)).unwrap();
    for _ in 0..99 {
        rhc.train();
    }
    assert_eq!(problem.function_call_count(), 100);
    problem.reset_function_call_count();
    rhc.train();
    assert_eq!(problem.function_call_count(), 1);
}

#[test]
fn independent_instances_share_one_problem_across_threads() {
    let problem = onemax(16);
    let results: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let problem = &problem;
                scope.spawn(move || {
                    let config = SaConfig::default().with_seed(seed);
                    let mut sa = SimulatedAnnealing::new(problem, config).unwrap();
                    run_until(&mut sa, 16.0, 5000);
                    sa.optimal_fitness()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert_eq!(results, vec![16.0; 4]);
    assert!(problem.function_call_count() >= 4);
}

#[test]
fn seeded_runs_are_reproducible() {
    let problem = onemax(12);
    let trace = |seed| {
        let config = GaConfig::default()
            .with_population_size(16)
            .with_to_mate(8)
            .with_to_mutate(2)
            .with_seed(seed);
        let mut ga = GeneticAlgorithm::new(&problem, config).unwrap();
        (0..20).map(|_| ga.train()).collect::<Vec<_>>()
    };
    assert_eq!(trace(5), trace(5));
}

#[test]
fn objective_panics_propagate() {
    let problem = Problem::new(
        |s: &State| {
            if s.get(0) == 1 {
                panic!("objective failure");
            }
            0.0
        },
        Ranges::new(vec![2]).unwrap(),
    );
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let mut rhc = RandomizedHillClimbing::starting_from(
            &problem,
            RhcConfig::default().with_seed(1),
            State::zeros(1),
        )
        .unwrap();
        rhc.train();
    }));
    assert!(result.is_err());
}
