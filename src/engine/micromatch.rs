//! Micromatch decomposition of one team game
//!
//! A 10-player team game is decomposed into one-vs-one pseudo-matches
//! between opposing-team members only; teammates never face each other.
//! Each player's outgoing weight is split evenly over the other team, so
//! the total update mass per player is the same constant whether they sat
//! on the 7-player or the 3-player side.

use crate::types::{GameRecord, PlayerId};

/// One weighted pseudo-match derived from a team game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Micromatch {
    pub subject: PlayerId,
    pub opponent: PlayerId,
    /// 1.0 if the subject's team won, 0.0 if it lost
    pub score: f64,
    pub weight: f64,
}

/// Expand a game into its weighted micromatches
///
/// For every participant, `weight = weight_multiplier / opposing_team_size`.
/// If one team is empty (all ten players share the outcome) the game yields
/// no micromatches at all; the per-player no-opponents update path covers
/// that case.
pub fn expand_game(game: &GameRecord, weight_multiplier: f64) -> Vec<Micromatch> {
    let winners = game.winners();
    let losers = game.losers();

    if winners.is_empty() || losers.is_empty() {
        return Vec::new();
    }

    let mut micromatches = Vec::with_capacity(2 * winners.len() * losers.len());

    let winner_weight = weight_multiplier / losers.len() as f64;
    let loser_weight = weight_multiplier / winners.len() as f64;

    for &winner in &winners {
        for &loser in &losers {
            micromatches.push(Micromatch {
                subject: winner,
                opponent: loser,
                score: 1.0,
                weight: winner_weight,
            });
            micromatches.push(Micromatch {
                subject: loser,
                opponent: winner,
                score: 0.0,
                weight: loser_weight,
            });
        }
    }

    micromatches
}
