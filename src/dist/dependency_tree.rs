use super::spanning::{maximum_spanning_tree, SpanningTree};
use super::{sample_categorical, DistributionModel};
use crate::error::{OptError, Result};
use crate::state::{Ranges, State};
use rand::RngCore;

/// Tree-structured density over states (Chow-Liu tree).
///
/// Built from a population by:
///
/// 1. estimating every pairwise mutual information from Laplace-smoothed
///    joint counts,
/// 2. taking the maximum-weight spanning tree of the complete graph with
///    those weights, rooted at variable 0,
/// 3. storing a smoothed marginal table for the root and a smoothed
///    conditional table `P(child | parent)` for every other variable.
///
/// Sampling visits variables in the tree's insertion order, so each parent
/// is drawn before its children and one pass yields a full state.
#[derive(Debug, Clone)]
pub struct DependencyTree {
    ranges: Ranges,
    tree: SpanningTree,
    dependency_factor: f64,
    /// `tables[v][parent_value][value]`. The root has a single row.
    tables: Vec<Vec<Vec<f64>>>,
}

impl DependencyTree {
    /// Fits a tree to `population`.
    ///
    /// `dependency_factor` is the smoothing pseudo-count added to every
    /// cell.
    ///
    /// # Errors
    /// [`OptError::InvalidConfig`] unless `dependency_factor` is in (0, 1).
    pub fn estimate(
        population: &[State],
        ranges: &Ranges,
        dependency_factor: f64,
    ) -> Result<Self> {
        check_dependency_factor(dependency_factor)?;
        Ok(Self::fit(population, ranges, dependency_factor))
    }

    /// [`estimate`](Self::estimate) for an already validated factor.
    pub(crate) fn fit(population: &[State], ranges: &Ranges, dependency_factor: f64) -> Self {
        let n = ranges.len();
        let mut weights = vec![vec![0.0; n]; n];
        for i in 0..n {
            for j in i + 1..n {
                let mi = mutual_information(population, i, j, ranges, dependency_factor);
                weights[i][j] = mi;
                weights[j][i] = mi;
            }
        }

        let tree = maximum_spanning_tree(n, |i, j| weights[i][j]);
        let tables = (0..n)
            .map(|v| match tree.parent(v) {
                None => vec![marginal_table(population, v, ranges, dependency_factor)],
                Some(p) => conditional_table(population, p, v, ranges, dependency_factor),
            })
            .collect();

        Self {
            ranges: ranges.clone(),
            tree,
            dependency_factor,
            tables,
        }
    }

    pub fn tree(&self) -> &SpanningTree {
        &self.tree
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.tree.parent(v)
    }

    /// `(parent, child)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tree.edges()
    }

    /// Sampling order: every parent precedes its children.
    pub fn order(&self) -> &[usize] {
        self.tree.order()
    }

    pub fn dependency_factor(&self) -> f64 {
        self.dependency_factor
    }

    /// Distribution of variable `v` given its parent's value.
    ///
    /// For the root, `parent_value` is ignored.
    pub fn conditional(&self, v: usize, parent_value: usize) -> &[f64] {
        match self.tree.parent(v) {
            None => &self.tables[v][0],
            Some(_) => &self.tables[v][parent_value],
        }
    }
}

impl DistributionModel for DependencyTree {
    fn sample(&self, rng: &mut dyn RngCore) -> State {
        let mut values = vec![0; self.ranges.len()];
        for &v in self.tree.order() {
            let parent_value = self.tree.parent(v).map_or(0, |p| values[p]);
            values[v] = sample_categorical(self.conditional(v, parent_value), rng);
        }
        State::new(values)
    }

    fn probability_of(&self, state: &State) -> f64 {
        if self.ranges.check(state).is_err() {
            return 0.0;
        }
        (0..self.ranges.len())
            .map(|v| {
                let parent_value = self.tree.parent(v).map_or(0, |p| state.get(p));
                self.conditional(v, parent_value)[state.get(v)]
            })
            .product()
    }
}

/// Rejects smoothing factors outside (0, 1). A zero factor leaves rows for
/// unseen parent values as 0/0.
pub(crate) fn check_dependency_factor(dependency_factor: f64) -> Result<()> {
    if dependency_factor > 0.0 && dependency_factor < 1.0 {
        Ok(())
    } else {
        Err(OptError::InvalidConfig(format!(
            "dependency_factor must be in (0, 1), got {dependency_factor}"
        )))
    }
}

/// Mutual information `I(X_i; X_j)` in nats, from the smoothed joint
/// distribution of the two variables over `population`.
///
/// The marginals are taken from the smoothed joint itself, so the result
/// is a proper KL divergence and never negative.
pub fn mutual_information(
    population: &[State],
    i: usize,
    j: usize,
    ranges: &Ranges,
    dependency_factor: f64,
) -> f64 {
    let (ri, rj) = (ranges.size(i), ranges.size(j));
    let counts = pair_counts(population, i, j, rj, ri * rj);
    let total = population.len() as f64 + dependency_factor * (ri * rj) as f64;
    let joint: Vec<f64> = counts
        .iter()
        .map(|&c| (c as f64 + dependency_factor) / total)
        .collect();

    let mut pi = vec![0.0; ri];
    let mut pj = vec![0.0; rj];
    for a in 0..ri {
        for b in 0..rj {
            pi[a] += joint[a * rj + b];
            pj[b] += joint[a * rj + b];
        }
    }

    let mut mi = 0.0_f64;
    for a in 0..ri {
        for b in 0..rj {
            let p = joint[a * rj + b];
            if p > 0.0 {
                mi += p * (p / (pi[a] * pj[b])).ln();
            }
        }
    }
    mi.max(0.0)
}

/// Flattened counts of `(state[i], state[j])`, row-major over `i`.
fn pair_counts(population: &[State], i: usize, j: usize, rj: usize, cells: usize) -> Vec<usize> {
    let mut counts = vec![0usize; cells];
    for s in population {
        counts[s.get(i) * rj + s.get(j)] += 1;
    }
    counts
}

fn marginal_table(population: &[State], v: usize, ranges: &Ranges, eps: f64) -> Vec<f64> {
    let r = ranges.size(v);
    let mut counts = vec![0usize; r];
    for s in population {
        counts[s.get(v)] += 1;
    }
    let total = population.len() as f64 + eps * r as f64;
    counts.iter().map(|&c| (c as f64 + eps) / total).collect()
}

fn conditional_table(
    population: &[State],
    parent: usize,
    child: usize,
    ranges: &Ranges,
    eps: f64,
) -> Vec<Vec<f64>> {
    let (rp, rc) = (ranges.size(parent), ranges.size(child));
    let counts = pair_counts(population, parent, child, rc, rp * rc);
    (0..rp)
        .map(|pv| {
            let row = &counts[pv * rc..(pv + 1) * rc];
            let total = row.iter().sum::<usize>() as f64 + eps * rc as f64;
            row.iter().map(|&c| (c as f64 + eps) / total).collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use rand::Rng;

    /// Binary chain X0 -> X1 -> X2 -> X3 with growing flip probabilities.
    fn chain_population(m: usize, seed: u64) -> Vec<State> {
        let flips = [0.05, 0.15, 0.3];
        let mut rng = create_rng(seed);
        (0..m)
            .map(|_| {
                let mut values = vec![rng.random_range(0..2usize)];
                for &f in &flips {
                    let prev = *values.last().unwrap();
                    values.push(if rng.random_bool(f) { 1 - prev } else { prev });
                }
                State::new(values)
            })
            .collect()
    }

    fn undirected_edges(tree: &DependencyTree) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = tree
            .edges()
            .map(|(a, b)| if a < b { (a, b) } else { (b, a) })
            .collect();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn test_independent_variables_have_near_zero_information() {
        let mut rng = create_rng(42);
        let ranges = Ranges::uniform(2, 2).unwrap();
        let population: Vec<State> = (0..4000)
            .map(|_| State::new(vec![rng.random_range(0..2), rng.random_range(0..2)]))
            .collect();
        let mi = mutual_information(&population, 0, 1, &ranges, 0.1);
        assert!(mi < 0.005, "expected ~0, got {mi}");
    }

    #[test]
    fn test_copied_variable_has_full_information() {
        let mut rng = create_rng(42);
        let ranges = Ranges::uniform(2, 2).unwrap();
        let population: Vec<State> = (0..4000)
            .map(|_| {
                let x = rng.random_range(0..2);
                State::new(vec![x, x])
            })
            .collect();
        let mi = mutual_information(&population, 0, 1, &ranges, 0.1);
        assert!((mi - std::f64::consts::LN_2).abs() < 0.01, "got {mi}");
    }

    #[test]
    fn test_information_of_empty_population_is_zero() {
        let ranges = Ranges::uniform(2, 3).unwrap();
        assert!(mutual_information(&[], 0, 1, &ranges, 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_recovers_chain_structure() {
        let ranges = Ranges::uniform(4, 2).unwrap();
        let model = DependencyTree::estimate(&chain_population(3000, 1), &ranges, 0.1).unwrap();
        assert_eq!(undirected_edges(&model), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(model.parent(0), None);
        assert_eq!(model.order()[0], 0);
    }

    #[test]
    fn test_tables_are_normalized_and_positive() {
        let ranges = Ranges::new(vec![2, 3, 4]).unwrap();
        let population = vec![State::new(vec![0, 0, 0]), State::new(vec![1, 2, 3])];
        let model = DependencyTree::estimate(&population, &ranges, 0.1).unwrap();
        for v in 0..3 {
            let rows = model.parent(v).map_or(1, |p| ranges.size(p));
            for pv in 0..rows {
                let row = model.conditional(v, pv);
                assert_eq!(row.len(), ranges.size(v));
                assert!(row.iter().all(|&p| p > 0.0));
                assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let ranges = Ranges::new(vec![2, 3, 2]).unwrap();
        let model = DependencyTree::estimate(&[], &ranges, 0.1).unwrap();
        let mut total = 0.0;
        for a in 0..2 {
            for b in 0..3 {
                for c in 0..2 {
                    total += model.probability_of(&State::new(vec![a, b, c]));
                }
            }
        }
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_samples_reproduce_marginals() {
        let ranges = Ranges::uniform(4, 2).unwrap();
        let population = chain_population(2000, 3);
        let model = DependencyTree::estimate(&population, &ranges, 0.1).unwrap();
        let mut rng = create_rng(4);
        let samples: Vec<State> = (0..20_000).map(|_| model.sample(&mut rng)).collect();

        let freq = |pop: &[State], i: usize| {
            pop.iter().filter(|s| s.get(i) == 1).count() as f64 / pop.len() as f64
        };
        let agree = |pop: &[State], i: usize, j: usize| {
            pop.iter().filter(|s| s.get(i) == s.get(j)).count() as f64 / pop.len() as f64
        };
        for i in 0..4 {
            let (p, q) = (freq(&population, i), freq(&samples, i));
            assert!((p - q).abs() < 0.03, "variable {i}: {p} vs {q}");
        }
        for (i, j) in [(0, 1), (1, 2), (2, 3)] {
            let (p, q) = (agree(&population, i, j), agree(&samples, i, j));
            assert!((p - q).abs() < 0.03, "pair ({i},{j}): {p} vs {q}");
        }
    }

    #[test]
    fn test_structure_survives_rebuild_from_own_samples() {
        let ranges = Ranges::uniform(4, 2).unwrap();
        let population = chain_population(3000, 5);
        let model = DependencyTree::estimate(&population, &ranges, 0.1).unwrap();
        let mut rng = create_rng(6);
        let resampled: Vec<State> = (0..population.len()).map(|_| model.sample(&mut rng)).collect();
        let rebuilt = DependencyTree::estimate(&resampled, &ranges, 0.1).unwrap();
        assert_eq!(undirected_edges(&model), undirected_edges(&rebuilt));
    }

    #[test]
    fn test_rejects_dependency_factor_outside_unit_interval() {
        let ranges = Ranges::uniform(2, 2).unwrap();
        let population = vec![State::zeros(2); 5];
        for eps in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = DependencyTree::estimate(&population, &ranges, eps).unwrap_err();
            assert!(matches!(err, OptError::InvalidConfig(_)), "accepted {eps}");
        }
    }

    #[test]
    fn test_unseen_parent_value_row_is_smoothed() {
        // Parent value 1 never occurs, so its row comes from smoothing alone.
        let ranges = Ranges::uniform(2, 2).unwrap();
        let population = vec![State::zeros(2); 5];
        let model = DependencyTree::estimate(&population, &ranges, 0.1).unwrap();
        let child = if model.parent(1).is_some() { 1 } else { 0 };
        let row = model.conditional(child, 1);
        assert!(row.iter().all(|p| p.is_finite() && *p > 0.0));
        let p = model.probability_of(&State::new(vec![1, 1]));
        assert!(p.is_finite() && p > 0.0);
    }

    #[test]
    fn test_single_variable_model() {
        let ranges = Ranges::new(vec![3]).unwrap();
        let population = vec![State::new(vec![2]); 10];
        let model = DependencyTree::estimate(&population, &ranges, 0.1).unwrap();
        assert_eq!(model.edges().count(), 0);
        let row = model.conditional(0, 0);
        assert!(row[2] > row[0] && row[2] > row[1]);
    }
}
