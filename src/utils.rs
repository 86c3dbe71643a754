//! Small numeric helpers for the rating engine

/// Round a value to the given number of decimal places
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Round to 2 decimal places (rating and rating deviation precision)
pub fn round2(value: f64) -> f64 {
    round_to_places(value, 2)
}

/// Round to 6 decimal places (volatility precision)
pub fn round6(value: f64) -> f64 {
    round_to_places(value, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_places() {
        assert_eq!(round_to_places(1.23456, 2), 1.23);
        assert_eq!(round_to_places(1.235, 2), 1.24);
        assert_eq!(round_to_places(-1.005, 1), -1.0);
    }

    #[test]
    fn test_round2_and_round6() {
        assert_eq!(round2(1499.996), 1500.0);
        assert_eq!(round6(0.0600004), 0.06);
        assert_eq!(round6(0.0600006), 0.060001);
    }
}
