//! Batch recomputation pipeline
//!
//! Turns an ordered history of team games into per-player rating updates:
//! each game is expanded into weighted pairwise micromatches, every player
//! gets one Glicko-2 update against the pre-game state, and the resulting
//! deltas are normalized to sum to zero before the map moves on.

pub mod micromatch;
pub mod normalize;
pub mod recompute;

// Re-export commonly used items
pub use micromatch::{expand_game, Micromatch};
pub use recompute::{RecomputeEngine, RecomputeOutcome, SkippedGame};
