//! Full and incremental rating recomputation
//!
//! A recompute pass is a single-threaded fold over a chronologically
//! ordered game sequence. The engine exclusively owns its rating map for
//! the duration of one pass; callers that can trigger overlapping passes
//! must serialize them.

use crate::config::Glicko2Config;
use crate::engine::micromatch::expand_game;
use crate::engine::normalize::apply_zero_sum;
use crate::error::{RatingError, Result};
use crate::glicko::update_rating;
use crate::types::{GameId, GameRecord, PlayerId, PlayerRating, RatingHistoryRecord};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// How often the pass reports progress at debug level
const PROGRESS_INTERVAL: usize = 50;

/// A game left out of a pass, with the reason it was rejected
#[derive(Debug, Clone)]
pub struct SkippedGame {
    pub game_id: GameId,
    pub reason: String,
}

/// Result of one recompute pass
#[derive(Debug, Clone)]
pub struct RecomputeOutcome {
    /// One before/after record per (game, player) pair, in processing order
    pub history: Vec<RatingHistoryRecord>,
    /// Final rating snapshot after the last processed game
    pub ratings: HashMap<PlayerId, PlayerRating>,
    /// Games skipped with a diagnostic (currently only malformed ones)
    pub skipped: Vec<SkippedGame>,
}

/// Orchestrates the per-game pipeline over an ordered game history
#[derive(Debug)]
pub struct RecomputeEngine {
    config: Glicko2Config,
    ratings: HashMap<PlayerId, PlayerRating>,
    last_game_id: Option<GameId>,
}

impl RecomputeEngine {
    /// Engine starting from a blank rating map (full recompute)
    pub fn new(config: Glicko2Config) -> Self {
        Self {
            config,
            ratings: HashMap::new(),
            last_game_id: None,
        }
    }

    /// Engine seeded from a persisted snapshot (incremental recompute)
    ///
    /// `last_game_id` is the id of the newest game already reflected in the
    /// snapshot, if the caller tracks one; games at or below it are
    /// rejected as out of order.
    pub fn with_snapshot(
        config: Glicko2Config,
        snapshot: HashMap<PlayerId, PlayerRating>,
        last_game_id: Option<GameId>,
    ) -> Self {
        Self {
            config,
            ratings: snapshot,
            last_game_id,
        }
    }

    /// Replay the entire game history from scratch
    ///
    /// Any previously stored history is superseded wholesale; the caller is
    /// expected to clear its store before persisting this outcome.
    pub fn full(config: Glicko2Config, games: &[GameRecord]) -> Result<RecomputeOutcome> {
        info!(games = games.len(), "starting full rating recompute");
        Self::new(config).run(games)
    }

    /// Replay only games not yet reflected in the snapshot
    pub fn incremental(
        config: Glicko2Config,
        snapshot: HashMap<PlayerId, PlayerRating>,
        last_game_id: Option<GameId>,
        games: &[GameRecord],
    ) -> Result<RecomputeOutcome> {
        info!(
            games = games.len(),
            known_players = snapshot.len(),
            "starting incremental rating recompute"
        );
        Self::with_snapshot(config, snapshot, last_game_id).run(games)
    }

    fn run(mut self, games: &[GameRecord]) -> Result<RecomputeOutcome> {
        let mut history = Vec::with_capacity(games.len() * crate::types::PLAYERS_PER_GAME);
        let mut skipped = Vec::new();

        for (index, game) in games.iter().enumerate() {
            if let Err(err) = game.validate() {
                warn!(game_id = game.game_id, %err, "skipping malformed game");
                skipped.push(SkippedGame {
                    game_id: game.game_id,
                    reason: err.to_string(),
                });
                continue;
            }

            history.extend(self.apply_game(game)?);

            if (index + 1) % PROGRESS_INTERVAL == 0 {
                debug!(processed = index + 1, total = games.len(), "recompute progress");
            }
        }

        info!(
            processed = games.len() - skipped.len(),
            skipped = skipped.len(),
            players = self.ratings.len(),
            "rating recompute complete"
        );

        Ok(RecomputeOutcome {
            history,
            ratings: self.ratings,
            skipped,
        })
    }

    /// Apply one valid game to the rating map
    ///
    /// All ten posteriors are computed against the same pre-game state,
    /// then zero-sum normalized, then folded back into the map.
    fn apply_game(&mut self, game: &GameRecord) -> Result<Vec<RatingHistoryRecord>> {
        if let Some(last) = self.last_game_id {
            if game.game_id <= last {
                return Err(RatingError::OutOfOrderGame {
                    game_id: game.game_id,
                    last_game_id: last,
                }
                .into());
            }
        }

        // Lazily create defaults so opponents resolve even on first sight
        for participant in &game.participants {
            self.ratings
                .entry(participant.player_id)
                .or_insert_with(|| PlayerRating::new(participant.player_id, &self.config));
        }

        // Group micromatches by subject, resolving opponents to their
        // pre-game triples
        let mut per_player: HashMap<PlayerId, (Vec<PlayerRating>, Vec<f64>, Vec<f64>)> =
            HashMap::new();
        for m in expand_game(game, self.config.weight_multiplier) {
            let opponent = self.ratings[&m.opponent].clone();
            let entry = per_player.entry(m.subject).or_default();
            entry.0.push(opponent);
            entry.1.push(m.score);
            entry.2.push(m.weight);
        }

        let mut pairs: Vec<(PlayerRating, PlayerRating)> =
            Vec::with_capacity(game.participants.len());
        for participant in &game.participants {
            let before = self.ratings[&participant.player_id].clone();
            let after = match per_player.get(&participant.player_id) {
                Some((opponents, results, weights)) => {
                    update_rating(&before, opponents, results, weights, &self.config)?
                }
                None => update_rating(&before, &[], &[], &[], &self.config)?,
            };
            pairs.push((before, after));
        }

        apply_zero_sum(&mut pairs);

        let mut records = Vec::with_capacity(pairs.len());
        for (before, after) in pairs {
            records.push(RatingHistoryRecord::new(game.game_id, &before, &after));
            self.ratings.insert(after.player_id, after);
        }
        self.last_game_id = Some(game.game_id);

        Ok(records)
    }
}
