//! Randomized Hill Climbing (RHC).
//!
//! Each step draws one random neighbor of the current state and moves to
//! it when it is at least as good. Moving on ties lets the search walk
//! across plateaus. There are no restarts.

mod config;
mod runner;

pub use config::RhcConfig;
pub use runner::RandomizedHillClimbing;
