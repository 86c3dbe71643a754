//! Command-line entry point for the Mafia rating engine
//!
//! Reads a game history (JSON), runs a full or incremental Glicko-2
//! recompute, and writes the rating history and final snapshot for the
//! persistence layer to pick up.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use mafia_ratings::config::Glicko2Config;
use mafia_ratings::engine::RecomputeEngine;
use mafia_ratings::store::{GameSource, InMemoryGameSource, InMemoryRatingStore, RatingStore};
use mafia_ratings::types::{GameId, GameRecord, PlayerId, PlayerRating};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Mafia Ratings - Glicko-2 batch recompute for 10-player league games
#[derive(Parser)]
#[command(
    name = "mafia-ratings",
    version,
    about = "Glicko-2 rating engine for 10-player Mafia league games",
    long_about = "Replays an ordered Mafia game history through a weighted, zero-sum-normalized \
                 Glicko-2 pipeline. Supports a full replay from a blank rating map or an \
                 incremental run seeded from a persisted snapshot."
)]
struct Args {
    /// Game history file (JSON array of games, sorted by game id)
    #[arg(short, long, value_name = "FILE")]
    games: PathBuf,

    /// Recompute mode
    #[arg(short, long, value_enum, default_value_t = Mode::Full)]
    mode: Mode,

    /// Snapshot file to seed an incremental run (JSON player -> rating map)
    #[arg(short, long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Id of the newest game already reflected in the snapshot
    #[arg(long, value_name = "GAME_ID")]
    last_game_id: Option<GameId>,

    /// Configuration file path (TOML format); defaults to env + built-ins
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Where to write the rating history records
    #[arg(long, value_name = "FILE", default_value = "rating_history.json")]
    history_out: PathBuf,

    /// Where to write the final rating snapshot
    #[arg(long, value_name = "FILE", default_value = "rating_snapshot.json")]
    snapshot_out: PathBuf,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Validate configuration and inputs, then exit without computing
    #[arg(long)]
    dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Replay every game from a blank rating map
    Full,
    /// Replay only new games on top of a persisted snapshot
    Incremental,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Glicko2Config> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            let config: Glicko2Config = toml::from_str(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?;
            config.validate()?;
            config
        }
        None => Glicko2Config::from_env()?,
    };
    Ok(config)
}

fn load_games(path: &Path) -> Result<Vec<GameRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading games file {}", path.display()))?;
    let games: Vec<GameRecord> =
        serde_json::from_str(&text).with_context(|| format!("parsing games file {}", path.display()))?;
    Ok(games)
}

fn load_snapshot(path: &Path) -> Result<HashMap<PlayerId, PlayerRating>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot file {}", path.display()))?;
    let snapshot: HashMap<PlayerId, PlayerRating> = serde_json::from_str(&text)
        .with_context(|| format!("parsing snapshot file {}", path.display()))?;
    Ok(snapshot)
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level)?;

    let config = load_config(args.config.as_deref())?;
    let games = load_games(&args.games)?;
    let source = InMemoryGameSource::new(games);

    let seed = match args.mode {
        Mode::Full => HashMap::new(),
        Mode::Incremental => {
            let path = args
                .snapshot
                .as_deref()
                .ok_or_else(|| anyhow!("incremental mode requires --snapshot"))?;
            load_snapshot(path)?
        }
    };

    if args.dry_run {
        info!(
            mode = ?args.mode,
            games = source.games()?.len(),
            seeded_players = seed.len(),
            "dry run: configuration and inputs are valid"
        );
        return Ok(());
    }

    let outcome = match args.mode {
        Mode::Full => RecomputeEngine::full(config, &source.games()?)?,
        Mode::Incremental => {
            let games = match args.last_game_id {
                Some(watermark) => source.games_after(watermark)?,
                None => source.games()?,
            };
            RecomputeEngine::incremental(config, seed, args.last_game_id, &games)?
        }
    };

    // Stage through the in-memory store so output files mirror what the
    // production persistence collaborator would receive
    let store = InMemoryRatingStore::new();
    if args.mode == Mode::Full {
        store.clear_history()?;
    }
    store.store_history(&outcome.history)?;
    store.store_snapshot(&outcome.ratings)?;

    write_json(&args.history_out, &store.history()?)?;
    write_json(&args.snapshot_out, &store.load_snapshot()?)?;

    info!(
        history_records = outcome.history.len(),
        players = outcome.ratings.len(),
        skipped_games = outcome.skipped.len(),
        history_out = %args.history_out.display(),
        snapshot_out = %args.snapshot_out.display(),
        "recompute finished"
    );

    for skipped in &outcome.skipped {
        info!(game_id = skipped.game_id, reason = %skipped.reason, "game was skipped");
    }

    Ok(())
}
