//! GA configuration.
//!
//! [`GaConfig`] holds the per-generation operator counts.

use crate::error::{OptError, Result};

/// Configuration for the [`GeneticAlgorithm`](super::GeneticAlgorithm).
///
/// Every generation produces `to_mate / 2` children and `to_mutate`
/// mutants, which replace the same number of the weakest members.
///
/// # Defaults
///
/// ```
/// use u_randopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 200);
/// assert_eq!(config.to_mate, 100);
/// assert_eq!(config.to_mutate, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_randopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_to_mate(20)
///     .with_to_mutate(4)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Size of the mating pool: the fittest `to_mate` individuals.
    ///
    /// Must be even. Below 2, no crossover happens.
    pub to_mate: usize,

    /// Number of mutants produced per generation.
    pub to_mutate: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            to_mate: 100,
            to_mutate: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mating pool size.
    pub fn with_to_mate(mut self, n: usize) -> Self {
        self.to_mate = n;
        self
    }

    /// Sets the number of mutants per generation.
    pub fn with_to_mutate(mut self, n: usize) -> Self {
        self.to_mutate = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of children produced per generation.
    pub fn children_per_generation(&self) -> usize {
        self.to_mate / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(OptError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.to_mate % 2 != 0 {
            return Err(OptError::InvalidConfig(format!(
                "to_mate must be even, got {}",
                self.to_mate
            )));
        }
        if self.to_mate > self.population_size {
            return Err(OptError::InvalidConfig(format!(
                "to_mate ({}) exceeds population_size ({})",
                self.to_mate, self.population_size
            )));
        }
        let newcomers = self.children_per_generation() + self.to_mutate;
        if newcomers > self.population_size {
            return Err(OptError::InvalidConfig(format!(
                "children plus mutants ({newcomers}) exceed population_size ({})",
                self.population_size
            )));
        }
        Ok(())
    }
}
