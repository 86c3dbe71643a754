//! Glicko-2 rating mathematics
//!
//! The update machinery works on the internal (mu, phi) scale described in
//! the Glicko-2 paper; the public 1500-centered scale exists only for
//! human-readable output.
//!
//! Reference: http://www.glicko.net/glicko/glicko2.pdf

pub mod math;
pub mod scale;
pub mod update;
pub mod volatility;

// Re-export commonly used items
pub use scale::{Glicko2Scale, GLICKO2_SCALE};
pub use update::update_rating;
