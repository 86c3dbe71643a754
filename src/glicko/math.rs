//! The Glicko-2 g and E functions and the weighted aggregation steps
//!
//! Every opponent carries a weight so that one team game can be decomposed
//! into fractional pairwise comparisons without inflating the total amount
//! of evidence a single game provides.

use super::scale::Glicko2Scale;

/// Threshold below which the accumulated inverse variance counts as "no
/// informative opponents"
const VARIANCE_EPSILON: f64 = 1e-6;

/// Sentinel variance returned when no opponent contributed information
const DEGENERATE_VARIANCE: f64 = 1e6;

/// Dampening factor for an opponent's influence based on their uncertainty
pub fn g(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi * phi / (std::f64::consts::PI * std::f64::consts::PI)).sqrt()
}

/// Expected score of a player at `mu` against opponent `(mu_j, phi_j)`
pub fn expected_score(mu: f64, mu_j: f64, phi_j: f64) -> f64 {
    1.0 / (1.0 + (-g(phi_j) * (mu - mu_j)).exp())
}

/// Estimated variance of the player's rating from the weighted outcomes
///
/// Returns a large sentinel instead of dividing by a near-zero accumulator
/// when the opponents carry no usable information.
pub fn variance(mu: f64, opponents: &[Glicko2Scale], weights: &[f64]) -> f64 {
    let mut v_inv = 0.0;
    for (opp, &w) in opponents.iter().zip(weights) {
        let g_j = g(opp.phi);
        let e_j = expected_score(mu, opp.mu, opp.phi);
        v_inv += w * g_j * g_j * e_j * (1.0 - e_j);
    }

    if v_inv < VARIANCE_EPSILON {
        return DEGENERATE_VARIANCE;
    }

    1.0 / v_inv
}

/// Weighted sum of outcome surprises, `Σ w_j·g(phi_j)·(s_j − E_j)`
///
/// This is the quantity the rating moves along; `delta` below scales it by
/// the variance.
pub fn outcome_sum(mu: f64, opponents: &[Glicko2Scale], results: &[f64], weights: &[f64]) -> f64 {
    let mut sum = 0.0;
    for ((opp, &s), &w) in opponents.iter().zip(results).zip(weights) {
        sum += w * g(opp.phi) * (s - expected_score(mu, opp.mu, opp.phi));
    }
    sum
}

/// Estimated rating improvement, `v · Σ w_j·g(phi_j)·(s_j − E_j)`
pub fn delta(mu: f64, v: f64, opponents: &[Glicko2Scale], results: &[f64], weights: &[f64]) -> f64 {
    v * outcome_sum(mu, opponents, results, weights)
}
