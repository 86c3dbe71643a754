//! Common types used throughout the rating engine

use crate::config::Glicko2Config;
use crate::error::RatingError;
use crate::utils::{round2, round6};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = i64;

/// Unique identifier for games
pub type GameId = i64;

/// Number of participants every rateable game must have
pub const PLAYERS_PER_GAME: usize = 10;

/// A player's Glicko-2 rating triple on the public scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRating {
    pub player_id: PlayerId,
    /// Skill estimate (public scale, 1500-centered)
    pub rating: f64,
    /// Rating deviation: uncertainty about the skill estimate
    pub rd: f64,
    /// Volatility: expected fluctuation of the rating
    pub sigma: f64,
}

impl PlayerRating {
    /// Create a fresh rating from the configured defaults
    pub fn new(player_id: PlayerId, config: &Glicko2Config) -> Self {
        Self {
            player_id,
            rating: config.initial_rating,
            rd: config.initial_rd,
            sigma: config.initial_sigma,
        }
    }
}

/// One participant of a game and whether their team won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub player_id: PlayerId,
    pub won: bool,
}

/// An observed game: ten participants split into a winning and a losing team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub played_at: DateTime<Utc>,
    pub participants: Vec<GamePlayer>,
}

impl GameRecord {
    /// Player ids on the winning team
    pub fn winners(&self) -> Vec<PlayerId> {
        self.participants
            .iter()
            .filter(|p| p.won)
            .map(|p| p.player_id)
            .collect()
    }

    /// Player ids on the losing team
    pub fn losers(&self) -> Vec<PlayerId> {
        self.participants
            .iter()
            .filter(|p| !p.won)
            .map(|p| p.player_id)
            .collect()
    }

    /// Check the player-count invariant
    pub fn validate(&self) -> Result<(), RatingError> {
        if self.participants.len() != PLAYERS_PER_GAME {
            return Err(RatingError::MalformedGame {
                game_id: self.game_id,
                player_count: self.participants.len(),
            });
        }
        Ok(())
    }
}

/// Before/after rating snapshot for one player in one game
///
/// Values are rounded at construction (rating/rd to 2 decimals, sigma to 6)
/// so external storage sees stable numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingHistoryRecord {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub rating_before: f64,
    pub rd_before: f64,
    pub sigma_before: f64,
    pub rating_after: f64,
    pub rd_after: f64,
    pub sigma_after: f64,
}

impl RatingHistoryRecord {
    pub fn new(game_id: GameId, before: &PlayerRating, after: &PlayerRating) -> Self {
        Self {
            game_id,
            player_id: before.player_id,
            rating_before: round2(before.rating),
            rd_before: round2(before.rd),
            sigma_before: round6(before.sigma),
            rating_after: round2(after.rating),
            rd_after: round2(after.rd),
            sigma_after: round6(after.sigma),
        }
    }
}
