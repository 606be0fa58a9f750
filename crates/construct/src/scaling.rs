//! Iterative proportional scaling of random matrices toward a target
//! stationary distribution.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::config::ScalingConfig;
use crate::error::ConstructError;
use crate::matrix::{TransitionMatrix, validate_distribution};
use crate::normalize::normalize_rows;

/// Builds a transition matrix whose stationary distribution approximates
/// `stationary`, starting from uniform random noise.
///
/// Each round rescales every column toward its target stationary mass and
/// re-normalizes the rows. The round count is fixed up front; there is no
/// convergence check, so runtime is deterministic for a given configuration.
/// Columns whose current mass is zero are left unscaled for that round.
///
/// With self-loops disabled the diagonal is zeroed at initialization and
/// stays zero while every row keeps positive off-diagonal mass. A target
/// whose zero-mass entries starve a row triggers the uniform fallback of
/// [`normalize_rows`], which writes that row's diagonal again.
///
/// # Arguments
///
/// * `stationary` - Target stationary distribution, one entry per state.
/// * `config` - Scaling options (self-loops, round count).
/// * `rng` - Random number generator for the initial matrix.
///
/// # Errors
///
/// Returns [`ConstructError`] if `stationary` is empty, contains non-finite
/// or negative entries, or does not sum to one.
pub fn iterative_scaling(
    stationary: &[f64],
    config: &ScalingConfig,
    rng: &mut impl rand::Rng,
) -> Result<TransitionMatrix, ConstructError> {
    validate_distribution(stationary)?;
    let n = stationary.len();
    let target = Array1::from(stationary.to_vec());

    // Step 1: random initial matrix, optionally with the diagonal zeroed.
    let mut probs = Array2::from_shape_simple_fn((n, n), || rng.random::<f64>());
    if !config.self_loops() {
        probs.diag_mut().fill(0.0);
    }
    normalize_rows(&mut probs);

    // Step 2: alternate column scaling and row normalization.
    for _ in 0..config.rounds() {
        let mass = target.dot(&probs);
        let ratio = Array1::from_shape_fn(n, |j| {
            if mass[j] > 0.0 {
                target[j] / mass[j]
            } else {
                1.0
            }
        });
        probs *= &ratio;
        normalize_rows(&mut probs);
    }

    let mass = target.dot(&probs);
    let residual = mass
        .iter()
        .zip(target.iter())
        .map(|(&m, &t)| (m - t).abs())
        .fold(0.0_f64, f64::max);
    debug!(rounds = config.rounds(), residual, "iterative scaling finished");

    TransitionMatrix::new(probs)
}
