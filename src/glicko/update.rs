//! Single-player Glicko-2 rating update
//!
//! Transforms one player's prior triple plus a weighted set of pseudo-match
//! outcomes into a posterior triple. Opponent ratings are always the
//! pre-game values; callers must not feed already-updated opponents back in.

use super::math::{outcome_sum, variance};
use super::scale::Glicko2Scale;
use super::volatility;
use crate::config::Glicko2Config;
use crate::error::Result;
use crate::types::PlayerRating;

/// Apply one rating period to a player
///
/// `opponents`, `results` and `weights` are parallel slices: result 1.0 is
/// a win, 0.5 a draw, 0.0 a loss against that opponent. An empty opponent
/// list takes the "no games observed" path, which inflates the deviation
/// and leaves rating and volatility untouched.
pub fn update_rating(
    player: &PlayerRating,
    opponents: &[PlayerRating],
    results: &[f64],
    weights: &[f64],
    config: &Glicko2Config,
) -> Result<PlayerRating> {
    debug_assert_eq!(opponents.len(), results.len());
    debug_assert_eq!(opponents.len(), weights.len());

    let scale = Glicko2Scale::from(player);

    if opponents.is_empty() {
        // No games observed: uncertainty grows with the elapsed period
        let phi_star = (scale.phi * scale.phi + player.sigma * player.sigma).sqrt();
        let (rating, rd) = Glicko2Scale {
            mu: scale.mu,
            phi: phi_star,
        }
        .to_public();
        return Ok(PlayerRating {
            player_id: player.player_id,
            rating,
            rd,
            sigma: player.sigma,
        });
    }

    let opponent_scales: Vec<Glicko2Scale> = opponents.iter().map(Glicko2Scale::from).collect();

    let v = variance(scale.mu, &opponent_scales, weights);
    let surprise = outcome_sum(scale.mu, &opponent_scales, results, weights);
    let delta = v * surprise;

    let sigma_new = volatility::solve(scale.phi, player.sigma, v, delta, config)?;

    let phi_star = (scale.phi * scale.phi + sigma_new * sigma_new).sqrt();
    let phi_new = 1.0 / (1.0 / (phi_star * phi_star) + 1.0 / v).sqrt();
    let mu_new = scale.mu + phi_new * phi_new * surprise;

    let (rating, rd) = Glicko2Scale {
        mu: mu_new,
        phi: phi_new,
    }
    .to_public();

    Ok(PlayerRating {
        player_id: player.player_id,
        rating,
        rd,
        sigma: sigma_new,
    })
}
