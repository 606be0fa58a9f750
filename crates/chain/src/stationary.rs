//! Stationary distribution of a transition matrix.

use ndarray::Array1;

use moira_construct::TransitionMatrix;

/// Maximum number of power-iteration steps.
const MAX_ITERATIONS: usize = 1000;

/// L1 step size below which the iteration is considered converged.
const TOLERANCE: f64 = 1e-12;

/// Computes the stationary distribution of `matrix` by damped power
/// iteration.
///
/// Starts from the uniform distribution and repeatedly averages the
/// current iterate with its one-step image, `(pi + pi P) / 2`. The
/// averaging keeps the iteration convergent on periodic chains, where
/// the plain power step would oscillate between the period classes.
/// Iteration stops once the L1 change of a step falls below 1e-12, or
/// after 1000 steps.
pub fn stationary_distribution(matrix: &TransitionMatrix) -> Array1<f64> {
    let n = matrix.n_states();
    let mut pi = Array1::from_elem(n, 1.0 / n as f64);
    for _ in 0..MAX_ITERATIONS {
        let image = pi.dot(matrix.probs());
        let mut next = (&pi + &image) / 2.0;
        let total = next.sum();
        if total > 0.0 {
            next /= total;
        }
        let step: f64 = next
            .iter()
            .zip(pi.iter())
            .map(|(&a, &b)| (a - b).abs())
            .sum();
        pi = next;
        if step < TOLERANCE {
            break;
        }
    }
    pi
}
