//! Mafia Ratings - Glicko-2 rating engine for 10-player Mafia league games
//!
//! This crate computes skill ratings for a fixed-size, two-team game
//! (canonically 7 citizens vs 3 mafia) by decomposing each game into
//! weighted pairwise micromatches, applying a Glicko-2 update per player,
//! and zero-sum normalizing the per-game rating deltas.

pub mod config;
pub mod engine;
pub mod error;
pub mod glicko;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use config::Glicko2Config;
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use engine::{RecomputeEngine, RecomputeOutcome};
pub use store::{GameSource, RatingStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
