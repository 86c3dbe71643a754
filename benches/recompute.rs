//! Performance benchmarks for the rating recompute pipeline

use chrono::Utc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mafia_ratings::config::Glicko2Config;
use mafia_ratings::engine::RecomputeEngine;
use mafia_ratings::glicko::update_rating;
use mafia_ratings::types::{GameId, GamePlayer, GameRecord, PlayerRating};

/// Build a synthetic league history over a 30-player pool
fn synthetic_history(game_count: usize) -> Vec<GameRecord> {
    (0..game_count)
        .map(|i| {
            let game_id = i as GameId + 1;
            // Rotate the pool so everyone plays and team membership varies
            let participants: Vec<GamePlayer> = (0..10)
                .map(|slot| GamePlayer {
                    player_id: ((i * 3 + slot) % 30) as i64,
                    won: slot < 7,
                })
                .collect();
            GameRecord {
                game_id,
                played_at: Utc::now(),
                participants,
            }
        })
        .collect()
}

fn bench_single_update(c: &mut Criterion) {
    let config = Glicko2Config::default();
    let player = PlayerRating {
        player_id: 0,
        rating: 1500.0,
        rd: 225.0,
        sigma: 0.06,
    };
    let opponents: Vec<PlayerRating> = (1..=7)
        .map(|i| PlayerRating {
            player_id: i,
            rating: 1450.0 + 20.0 * i as f64,
            rd: 120.0,
            sigma: 0.06,
        })
        .collect();
    let results = vec![0.0; 7];
    let weights = vec![config.weight_multiplier / 7.0; 7];

    c.bench_function("single_player_update_7_opponents", |b| {
        b.iter(|| {
            update_rating(
                black_box(&player),
                black_box(&opponents),
                black_box(&results),
                black_box(&weights),
                &config,
            )
            .unwrap()
        })
    });
}

fn bench_full_recompute(c: &mut Criterion) {
    let games = synthetic_history(200);

    c.bench_function("full_recompute_200_games", |b| {
        b.iter(|| RecomputeEngine::full(Glicko2Config::default(), black_box(&games)).unwrap())
    });
}

criterion_group!(benches, bench_single_update, bench_full_recompute);
criterion_main!(benches);
