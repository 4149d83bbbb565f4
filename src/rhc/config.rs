//! RHC configuration.

/// Configuration for [`RandomizedHillClimbing`](super::RandomizedHillClimbing).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RhcConfig {
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl RhcConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
