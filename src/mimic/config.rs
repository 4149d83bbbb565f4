//! MIMIC configuration.

use crate::dist::check_dependency_factor;
use crate::error::{OptError, Result};

/// Which population a MIMIC step keeps for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Retain {
    /// The elite set the model was fitted to.
    #[default]
    Elite,
    /// The full sample drawn this step.
    All,
}

/// Configuration for [`Mimic`](super::Mimic).
///
/// # Examples
///
/// ```
/// use u_randopt::mimic::MimicConfig;
///
/// let config = MimicConfig::default()
///     .with_samples(50)
///     .with_to_keep(10)
///     .with_dependency_factor(0.1)
///     .with_seed(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MimicConfig {
    /// States sampled per step (`m`).
    pub samples: usize,

    /// Elite states kept per step (`k`). Must be below `samples`.
    pub to_keep: usize,

    /// Laplace smoothing pseudo-count for the dependency tree, in (0, 1).
    pub dependency_factor: f64,

    /// Population reported after each step.
    pub retain: Retain,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for MimicConfig {
    fn default() -> Self {
        Self {
            samples: 200,
            to_keep: 20,
            dependency_factor: 0.1,
            retain: Retain::default(),
            seed: None,
        }
    }
}

impl MimicConfig {
    pub fn with_samples(mut self, n: usize) -> Self {
        self.samples = n;
        self
    }

    pub fn with_to_keep(mut self, n: usize) -> Self {
        self.to_keep = n;
        self
    }

    pub fn with_dependency_factor(mut self, eps: f64) -> Self {
        self.dependency_factor = eps;
        self
    }

    pub fn with_retain(mut self, retain: Retain) -> Self {
        self.retain = retain;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(OptError::InvalidConfig("samples must be at least 1".into()));
        }
        if self.to_keep == 0 {
            return Err(OptError::InvalidConfig("to_keep must be at least 1".into()));
        }
        if self.to_keep >= self.samples {
            return Err(OptError::InvalidConfig(format!(
                "to_keep ({}) must be less than samples ({})",
                self.to_keep, self.samples
            )));
        }
        check_dependency_factor(self.dependency_factor)
    }
}
