//! Interfaces to the external data-access and persistence collaborators
//!
//! The engine itself only ever sees in-memory data. These traits describe
//! what the surrounding system (a REST-backed database in production) must
//! supply and accept; the in-memory implementations back the CLI and the
//! test suite.

use crate::error::Result;
use crate::types::{GameId, GameRecord, PlayerId, PlayerRating, RatingHistoryRecord};
use std::collections::HashMap;
use std::sync::RwLock;

/// Supplies the chronologically ordered game history
pub trait GameSource: Send + Sync {
    /// All games, sorted ascending by game id
    fn games(&self) -> Result<Vec<GameRecord>>;

    /// Games with an id strictly greater than `watermark`, sorted ascending
    fn games_after(&self, watermark: GameId) -> Result<Vec<GameRecord>>;
}

/// Persists rating history records and the current-rating snapshot
pub trait RatingStore: Send + Sync {
    /// Load the last persisted `player -> rating` snapshot
    fn load_snapshot(&self) -> Result<HashMap<PlayerId, PlayerRating>>;

    /// Drop all stored history (precedes a full recompute)
    fn clear_history(&self) -> Result<()>;

    /// Append a batch of history records
    fn store_history(&self, records: &[RatingHistoryRecord]) -> Result<()>;

    /// Replace the persisted snapshot
    fn store_snapshot(&self, snapshot: &HashMap<PlayerId, PlayerRating>) -> Result<()>;
}

/// Game source over a pre-loaded, sorted game list
#[derive(Debug, Default)]
pub struct InMemoryGameSource {
    games: Vec<GameRecord>,
}

impl InMemoryGameSource {
    /// Wrap a game list, sorting it ascending by game id
    pub fn new(mut games: Vec<GameRecord>) -> Self {
        games.sort_by_key(|g| g.game_id);
        Self { games }
    }
}

impl GameSource for InMemoryGameSource {
    fn games(&self) -> Result<Vec<GameRecord>> {
        Ok(self.games.clone())
    }

    fn games_after(&self, watermark: GameId) -> Result<Vec<GameRecord>> {
        Ok(self
            .games
            .iter()
            .filter(|g| g.game_id > watermark)
            .cloned()
            .collect())
    }
}

/// In-memory rating store
#[derive(Debug, Default)]
pub struct InMemoryRatingStore {
    snapshot: RwLock<HashMap<PlayerId, PlayerRating>>,
    history: RwLock<Vec<RatingHistoryRecord>>,
}

impl InMemoryRatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the snapshot (for tests and incremental-mode setup)
    pub fn preset_snapshot(&self, snapshot: HashMap<PlayerId, PlayerRating>) -> Result<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        *guard = snapshot;
        Ok(())
    }

    /// All stored history records, in insertion order
    pub fn history(&self) -> Result<Vec<RatingHistoryRecord>> {
        let guard = self
            .history
            .read()
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))?;
        Ok(guard.clone())
    }
}

impl RatingStore for InMemoryRatingStore {
    fn load_snapshot(&self) -> Result<HashMap<PlayerId, PlayerRating>> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        Ok(guard.clone())
    }

    fn clear_history(&self) -> Result<()> {
        let mut guard = self
            .history
            .write()
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))?;
        guard.clear();
        Ok(())
    }

    fn store_history(&self, records: &[RatingHistoryRecord]) -> Result<()> {
        let mut guard = self
            .history
            .write()
            .map_err(|_| anyhow::anyhow!("history lock poisoned"))?;
        guard.extend_from_slice(records);
        Ok(())
    }

    fn store_snapshot(&self, snapshot: &HashMap<PlayerId, PlayerRating>) -> Result<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?;
        *guard = snapshot.clone();
        Ok(())
    }
}
