//! Zero-sum correction for one game's tentative posteriors
//!
//! Team-size asymmetry and differing uncertainties leave the raw Glicko-2
//! updates slightly unbalanced. Subtracting the mean delta from every
//! posterior closes the rating economy: points gained by winners equal
//! points lost by losers, exactly, for every single game.

use crate::types::PlayerRating;

/// Shift every tentative posterior so the per-game rating deltas sum to zero
///
/// `pairs` holds `(prior, tentative posterior)` for each participant.
/// Deviation and volatility are left untouched.
pub fn apply_zero_sum(pairs: &mut [(PlayerRating, PlayerRating)]) {
    if pairs.is_empty() {
        return;
    }

    let total_delta: f64 = pairs
        .iter()
        .map(|(before, after)| after.rating - before.rating)
        .sum();
    let correction = total_delta / pairs.len() as f64;

    for (_, after) in pairs.iter_mut() {
        after.rating -= correction;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(id: i64, before: f64, after: f64) -> (PlayerRating, PlayerRating) {
        (
            PlayerRating {
                player_id: id,
                rating: before,
                rd: 225.0,
                sigma: 0.06,
            },
            PlayerRating {
                player_id: id,
                rating: after,
                rd: 210.0,
                sigma: 0.06,
            },
        )
    }

    #[test]
    fn test_deltas_sum_to_zero() {
        let mut pairs = vec![
            pair(1, 1500.0, 1530.0),
            pair(2, 1500.0, 1525.0),
            pair(3, 1500.0, 1460.0),
            pair(4, 1500.0, 1450.0),
        ];

        apply_zero_sum(&mut pairs);

        let total: f64 = pairs.iter().map(|(b, a)| a.rating - b.rating).sum();
        assert!(total.abs() < 1e-9);
    }

    #[test]
    fn test_relative_order_preserved() {
        let mut pairs = vec![pair(1, 1500.0, 1540.0), pair(2, 1500.0, 1470.0)];
        apply_zero_sum(&mut pairs);
        assert!(pairs[0].1.rating > pairs[1].1.rating);
    }

    #[test]
    fn test_rd_and_sigma_untouched() {
        let mut pairs = vec![pair(1, 1500.0, 1540.0), pair(2, 1500.0, 1470.0)];
        apply_zero_sum(&mut pairs);
        for (_, after) in &pairs {
            assert_eq!(after.rd, 210.0);
            assert_eq!(after.sigma, 0.06);
        }
    }

    #[test]
    fn test_balanced_input_is_untouched() {
        let mut pairs = vec![pair(1, 1500.0, 1520.0), pair(2, 1500.0, 1480.0)];
        apply_zero_sum(&mut pairs);
        assert!((pairs[0].1.rating - 1520.0).abs() < 1e-12);
        assert!((pairs[1].1.rating - 1480.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_slice_is_noop() {
        let mut pairs: Vec<(PlayerRating, PlayerRating)> = Vec::new();
        apply_zero_sum(&mut pairs);
        assert!(pairs.is_empty());
    }
}
