//! Volatility solver
//!
//! Solves the implicit Glicko-2 volatility equation with the Illinois
//! variant of the secant method. The reference algorithm always converges
//! for valid inputs, but both loops are capped so a pathological input
//! surfaces as an error instead of spinning forever.

use crate::config::Glicko2Config;
use crate::error::{RatingError, Result};

/// Solve for the new volatility given the prior state and observed surprise
///
/// `phi` is the prior deviation on the internal scale, `sigma` the prior
/// volatility, `v` the estimated variance and `delta` the estimated rating
/// improvement.
pub fn solve(phi: f64, sigma: f64, v: f64, delta: f64, config: &Glicko2Config) -> Result<f64> {
    let a = (sigma * sigma).ln();
    let tau = config.tau;
    let phi2 = phi * phi;
    let d2 = delta * delta;

    let f = |x: f64| -> f64 {
        let ex = x.exp();
        let num = ex * (d2 - phi2 - v - ex);
        let den = 2.0 * (phi2 + v + ex) * (phi2 + v + ex);
        num / den - (x - a) / (tau * tau)
    };

    // Bracket initialization: B starts at the analytic log-excess when the
    // surprise exceeds the prior spread, otherwise step down in units of
    // tau until f turns negative.
    let mut big_a = a;
    let mut big_b = if d2 > phi2 + v {
        (d2 - phi2 - v).ln()
    } else {
        let mut k = 1u32;
        while f(a - f64::from(k) * tau) < 0.0 {
            k += 1;
            if k > config.max_solver_iterations {
                return Err(RatingError::SolverDiverged {
                    iterations: config.max_solver_iterations,
                }
                .into());
            }
        }
        a - f64::from(k) * tau
    };

    let mut f_a = f(big_a);
    let mut f_b = f(big_b);

    let mut iterations = 0u32;
    while (big_b - big_a).abs() > config.convergence_epsilon {
        if iterations >= config.max_solver_iterations {
            return Err(RatingError::SolverDiverged {
                iterations: config.max_solver_iterations,
            }
            .into());
        }
        iterations += 1;

        let big_c = big_a + (big_a - big_b) * f_a / (f_b - f_a);
        let f_c = f(big_c);

        if f_c * f_b < 0.0 {
            big_a = big_b;
            f_a = f_b;
        } else {
            // Illinois correction: halving f(A) forces the bracket to shrink
            f_a /= 2.0;
        }

        big_b = big_c;
        f_b = f_c;
    }

    Ok((big_a / 2.0).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glicko::math::{delta, variance};
    use crate::glicko::scale::Glicko2Scale;

    #[test]
    fn test_paper_example() {
        // Example from the Glicko-2 paper: player (1500, 200, 0.06) against
        // opponents (1400, 30), (1550, 100), (1700, 300) scoring 1, 0, 0.
        let config = Glicko2Config {
            tau: 0.5,
            ..Glicko2Config::default()
        };
        let player = Glicko2Scale::from_public(1500.0, 200.0);
        let opponents = vec![
            Glicko2Scale::from_public(1400.0, 30.0),
            Glicko2Scale::from_public(1550.0, 100.0),
            Glicko2Scale::from_public(1700.0, 300.0),
        ];
        let results = [1.0, 0.0, 0.0];
        let weights = [1.0, 1.0, 1.0];

        let v = variance(player.mu, &opponents, &weights);
        let d = delta(player.mu, v, &opponents, &results, &weights);
        let sigma = solve(player.phi, 0.06, v, d, &config).unwrap();

        // The paper reports sigma' = 0.05999 to five decimal places
        assert!((sigma - 0.05999).abs() < 1e-4);
    }

    #[test]
    fn test_no_surprise_keeps_volatility_near_prior() {
        let config = Glicko2Config::default();
        let phi = 225.0 / crate::glicko::scale::GLICKO2_SCALE;
        let sigma = solve(phi, 0.06, 1.5, 0.0, &config).unwrap();
        assert!(sigma > 0.0);
        assert!((sigma - 0.06).abs() < 0.01);
    }

    #[test]
    fn test_large_surprise_raises_volatility() {
        let config = Glicko2Config::default();
        let phi = 100.0 / crate::glicko::scale::GLICKO2_SCALE;
        let calm = solve(phi, 0.06, 1.5, 0.0, &config).unwrap();
        let shocked = solve(phi, 0.06, 1.5, 3.0, &config).unwrap();
        assert!(shocked > calm);
    }

    #[test]
    fn test_iteration_cap_is_diagnosable() {
        // A cap of 1 cannot possibly converge from a cold bracket
        let config = Glicko2Config {
            max_solver_iterations: 1,
            convergence_epsilon: 1e-12,
            ..Glicko2Config::default()
        };
        let phi = 225.0 / crate::glicko::scale::GLICKO2_SCALE;
        let result = solve(phi, 0.06, 1.5, 2.5, &config);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<RatingError>().is_some());
    }
}
