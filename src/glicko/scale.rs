//! Conversion between the public rating scale and the Glicko-2 scale

use crate::types::PlayerRating;

/// Scale factor between the public rating scale and the internal scale
pub const GLICKO2_SCALE: f64 = 173.7178;

/// Center of the public rating scale
pub const RATING_CENTER: f64 = 1500.0;

/// A rating on the internal Glicko-2 scale
///
/// Volatility is scale-invariant and is carried alongside unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glicko2Scale {
    pub mu: f64,
    pub phi: f64,
}

impl Glicko2Scale {
    /// Convert a public-scale rating to the internal scale
    pub fn from_public(rating: f64, rd: f64) -> Self {
        Self {
            mu: (rating - RATING_CENTER) / GLICKO2_SCALE,
            phi: rd / GLICKO2_SCALE,
        }
    }

    /// Convert back to the public scale as a `(rating, rd)` pair
    pub fn to_public(self) -> (f64, f64) {
        (self.mu * GLICKO2_SCALE + RATING_CENTER, self.phi * GLICKO2_SCALE)
    }
}

impl From<&PlayerRating> for Glicko2Scale {
    fn from(rating: &PlayerRating) -> Self {
        Self::from_public(rating.rating, rating.rd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating_maps_to_origin() {
        let scale = Glicko2Scale::from_public(1500.0, 350.0);
        assert!(scale.mu.abs() < 1e-12);
        assert!((scale.phi - 350.0 / GLICKO2_SCALE).abs() < 1e-12);
    }

    #[test]
    fn test_round_trip() {
        for &(rating, rd) in &[(1500.0, 350.0), (1723.4, 81.2), (1204.9, 225.0)] {
            let (back_rating, back_rd) = Glicko2Scale::from_public(rating, rd).to_public();
            assert!((back_rating - rating).abs() < 1e-9);
            assert!((back_rd - rd).abs() < 1e-9);
        }
    }

    #[test]
    fn test_known_paper_values() {
        // The Glicko-2 paper's example player: r=1500, RD=200
        let scale = Glicko2Scale::from_public(1500.0, 200.0);
        assert!(scale.mu.abs() < 1e-12);
        assert!((scale.phi - 1.1513).abs() < 1e-4);
    }
}
