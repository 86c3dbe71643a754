//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error handling
//! throughout the crate.

use crate::types::GameId;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating-engine failures
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("game {game_id} must have exactly 10 players, got {player_count}")]
    MalformedGame { game_id: GameId, player_count: usize },

    #[error("game {game_id} arrived out of order (last processed game was {last_game_id})")]
    OutOfOrderGame { game_id: GameId, last_game_id: GameId },

    #[error("volatility solver failed to converge after {iterations} iterations")]
    SolverDiverged { iterations: u32 },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
