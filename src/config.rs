//! Rating system configuration
//!
//! All Glicko-2 constants live here so a deployment can pick its parameter
//! set deliberately instead of relying on numbers scattered through the
//! math. Two historical parameter sets exist for this league; the default
//! is the current weighted, zero-sum-normalized one.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Glicko-2 parameters for one recompute pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glicko2Config {
    /// Rating assigned to a player on first reference
    pub initial_rating: f64,
    /// Rating deviation assigned to a player on first reference
    pub initial_rd: f64,
    /// Volatility assigned to a player on first reference
    pub initial_sigma: f64,
    /// System constant constraining how fast volatility may change
    pub tau: f64,
    /// Total micromatch weight each player carries per game
    pub weight_multiplier: f64,
    /// Convergence tolerance for the volatility solver
    pub convergence_epsilon: f64,
    /// Iteration cap for the solver's bracket search and secant loop
    pub max_solver_iterations: u32,
}

impl Default for Glicko2Config {
    fn default() -> Self {
        Self {
            initial_rating: 1500.0,
            initial_rd: 225.0,
            initial_sigma: 0.06,
            tau: 1.25,
            weight_multiplier: 1.75,
            convergence_epsilon: 1e-6,
            max_solver_iterations: 100,
        }
    }
}

impl Glicko2Config {
    /// The older league parameter set (pre-weighting era)
    ///
    /// Kept for replaying archived seasons; do not mix with histories
    /// computed under the default set.
    pub fn legacy() -> Self {
        Self {
            initial_rd: 350.0,
            tau: 0.5,
            weight_multiplier: 1.0,
            ..Self::default()
        }
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(rating) = env::var("GLICKO_INITIAL_RATING") {
            config.initial_rating = rating
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_INITIAL_RATING value: {}", rating))?;
        }
        if let Ok(rd) = env::var("GLICKO_INITIAL_RD") {
            config.initial_rd = rd
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_INITIAL_RD value: {}", rd))?;
        }
        if let Ok(sigma) = env::var("GLICKO_INITIAL_SIGMA") {
            config.initial_sigma = sigma
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_INITIAL_SIGMA value: {}", sigma))?;
        }
        if let Ok(tau) = env::var("GLICKO_TAU") {
            config.tau = tau
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_TAU value: {}", tau))?;
        }
        if let Ok(weight) = env::var("GLICKO_WEIGHT_MULTIPLIER") {
            config.weight_multiplier = weight
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_WEIGHT_MULTIPLIER value: {}", weight))?;
        }
        if let Ok(epsilon) = env::var("GLICKO_CONVERGENCE_EPSILON") {
            config.convergence_epsilon = epsilon
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_CONVERGENCE_EPSILON value: {}", epsilon))?;
        }
        if let Ok(iterations) = env::var("GLICKO_MAX_SOLVER_ITERATIONS") {
            config.max_solver_iterations = iterations
                .parse()
                .map_err(|_| anyhow!("Invalid GLICKO_MAX_SOLVER_ITERATIONS value: {}", iterations))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.initial_rd <= 0.0 {
            return Err(anyhow!("Initial rating deviation must be positive"));
        }
        if self.initial_sigma <= 0.0 {
            return Err(anyhow!("Initial volatility must be positive"));
        }
        if self.tau <= 0.0 {
            return Err(anyhow!("Tau must be positive"));
        }
        if self.weight_multiplier <= 0.0 {
            return Err(anyhow!("Weight multiplier must be positive"));
        }
        if self.convergence_epsilon <= 0.0 {
            return Err(anyhow!("Convergence epsilon must be positive"));
        }
        if self.max_solver_iterations == 0 {
            return Err(anyhow!("Max solver iterations must be greater than 0"));
        }
        Ok(())
    }
}
