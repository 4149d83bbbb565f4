//! Error type shared by every constructor in the crate.

use thiserror::Error;

/// Configuration errors detected when a problem or an algorithm is built.
///
/// Nothing in a `train()` step returns an error: once construction
/// succeeds the search cannot fail on its own.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptError {
    /// The problem has no variables.
    #[error("ranges must contain at least one variable")]
    EmptyRanges,

    /// A variable has an empty domain.
    #[error("variable {index} has domain size {size}, expected at least 1")]
    InvalidDomain { index: usize, size: usize },

    /// A caller-supplied state does not fit the problem's ranges.
    #[error("state does not fit the ranges: {reason}")]
    InvalidState { reason: String },

    /// An algorithm parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, OptError>;
