//! Validated row-stochastic transition matrices.

use ndarray::{Array2, ArrayView1};

use crate::error::ConstructError;

/// Tolerance for row-sum and distribution-sum checks.
pub(crate) const ROW_SUM_TOL: f64 = 1e-6;

/// An n x n row-stochastic transition matrix.
///
/// Each row `i` contains the probabilities of transitioning from state `i`
/// to every state. Construction validates that all entries are finite and
/// non-negative and that every row sums to 1.0 within tolerance, so holders
/// of a value can rely on it being a proper stochastic matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    probs: Array2<f64>,
}

impl TransitionMatrix {
    /// Constructs a transition matrix from raw probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructError`] if the matrix is empty or not square,
    /// contains non-finite or negative entries, or has a row whose sum
    /// deviates from 1.0 by more than the tolerance.
    pub fn new(probs: Array2<f64>) -> Result<Self, ConstructError> {
        validate_probs(&probs)?;
        Ok(Self { probs })
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.probs.nrows()
    }

    /// Returns the probability of transitioning from one state to another.
    pub fn prob(&self, from: usize, to: usize) -> f64 {
        self.probs[[from, to]]
    }

    /// Returns the transition probabilities from a given state.
    pub fn row(&self, from: usize) -> ArrayView1<'_, f64> {
        self.probs.row(from)
    }

    /// Returns the full probability matrix.
    pub fn probs(&self) -> &Array2<f64> {
        &self.probs
    }

    /// Consumes the matrix and returns the underlying array.
    pub fn into_inner(self) -> Array2<f64> {
        self.probs
    }

    /// Samples the next state given the current state, using cumulative CDF.
    ///
    /// Draws a uniform random number and walks through the row's cumulative
    /// distribution, returning the first state whose cumulative probability
    /// meets or exceeds the draw. Falls back to the last state if rounding
    /// prevents a match.
    ///
    /// # Panics
    ///
    /// Panics if `from` is out of range.
    pub fn sample_next(&self, from: usize, rng: &mut impl rand::Rng) -> usize {
        let u: f64 = rng.random();
        let row = self.probs.row(from);
        let mut cumulative = 0.0;
        for (state, &p) in row.iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                return state;
            }
        }
        // Fallback to last state (should only be reached due to floating-point rounding).
        self.n_states() - 1
    }
}

fn validate_probs(probs: &Array2<f64>) -> Result<(), ConstructError> {
    if probs.nrows() == 0 {
        return Err(ConstructError::EmptyMatrix);
    }
    if probs.nrows() != probs.ncols() {
        return Err(ConstructError::NotSquare {
            rows: probs.nrows(),
            cols: probs.ncols(),
        });
    }
    for ((row, col), &p) in probs.indexed_iter() {
        if !p.is_finite() {
            return Err(ConstructError::NonFiniteEntry { row, col });
        }
        if p < 0.0 {
            return Err(ConstructError::NegativeEntry { row, col, value: p });
        }
    }
    for (row, r) in probs.rows().into_iter().enumerate() {
        let sum: f64 = r.sum();
        if (sum - 1.0).abs() > ROW_SUM_TOL {
            return Err(ConstructError::NotRowStochastic { row, sum });
        }
    }
    Ok(())
}

/// Validates a stationary distribution: non-empty, finite, non-negative
/// entries summing to 1.0 within tolerance.
pub(crate) fn validate_distribution(stationary: &[f64]) -> Result<(), ConstructError> {
    if stationary.is_empty() {
        return Err(ConstructError::EmptyDistribution);
    }
    for (index, &p) in stationary.iter().enumerate() {
        if !p.is_finite() {
            return Err(ConstructError::NonFiniteProbability { index });
        }
        if p < 0.0 {
            return Err(ConstructError::NegativeProbability { index, value: p });
        }
    }
    let sum: f64 = stationary.iter().sum();
    if (sum - 1.0).abs() > ROW_SUM_TOL {
        return Err(ConstructError::NotNormalized { sum });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_accepts_stochastic_matrix() {
        let m = TransitionMatrix::new(array![[0.3, 0.7], [0.5, 0.5]]).unwrap();
        assert_eq!(m.n_states(), 2);
        assert_abs_diff_eq!(m.prob(0, 1), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(m.row(1).sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn new_rejects_empty() {
        let err = TransitionMatrix::new(Array2::zeros((0, 0))).unwrap_err();
        assert!(matches!(err, ConstructError::EmptyMatrix));
    }

    #[test]
    fn new_rejects_non_square() {
        let err = TransitionMatrix::new(array![[0.5, 0.5], [1.0, 0.0], [0.0, 1.0]]).unwrap_err();
        assert!(matches!(err, ConstructError::NotSquare { rows: 3, cols: 2 }));
    }

    #[test]
    fn new_rejects_nan_entry() {
        let err = TransitionMatrix::new(array![[f64::NAN, 1.0], [0.5, 0.5]]).unwrap_err();
        assert!(matches!(err, ConstructError::NonFiniteEntry { row: 0, col: 0 }));
    }

    #[test]
    fn new_rejects_negative_entry() {
        let err = TransitionMatrix::new(array![[1.2, -0.2], [0.5, 0.5]]).unwrap_err();
        assert!(matches!(
            err,
            ConstructError::NegativeEntry { row: 0, col: 1, .. }
        ));
    }

    #[test]
    fn new_rejects_bad_row_sum() {
        let err = TransitionMatrix::new(array![[0.5, 0.5], [0.5, 0.4]]).unwrap_err();
        assert!(matches!(err, ConstructError::NotRowStochastic { row: 1, .. }));
    }

    #[test]
    fn new_tolerates_rounding_noise() {
        let m = array![[0.1 + 0.2, 0.7], [1.0, 0.0]];
        assert!(TransitionMatrix::new(m).is_ok());
    }

    #[test]
    fn into_inner_returns_probs() {
        let probs = array![[0.5, 0.5], [0.25, 0.75]];
        let m = TransitionMatrix::new(probs.clone()).unwrap();
        assert_eq!(m.into_inner(), probs);
    }

    #[test]
    fn sample_next_degenerate_row_is_deterministic() {
        let m = TransitionMatrix::new(array![[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(m.sample_next(0, &mut rng), 1);
            assert_eq!(m.sample_next(1, &mut rng), 0);
        }
    }

    #[test]
    fn sample_next_matches_row_frequencies() {
        let m = TransitionMatrix::new(array![[0.2, 0.8], [0.5, 0.5]]).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut ones = 0usize;
        for _ in 0..n {
            if m.sample_next(0, &mut rng) == 1 {
                ones += 1;
            }
        }
        let freq = ones as f64 / n as f64;
        assert!((freq - 0.8).abs() < 0.02, "freq = {freq}");
    }

    #[test]
    fn validate_distribution_accepts_proper() {
        assert!(validate_distribution(&[0.25, 0.25, 0.5]).is_ok());
    }

    #[test]
    fn validate_distribution_rejects_empty() {
        let err = validate_distribution(&[]).unwrap_err();
        assert!(matches!(err, ConstructError::EmptyDistribution));
    }

    #[test]
    fn validate_distribution_rejects_nan() {
        let err = validate_distribution(&[0.5, f64::NAN]).unwrap_err();
        assert!(matches!(err, ConstructError::NonFiniteProbability { index: 1 }));
    }

    #[test]
    fn validate_distribution_rejects_negative() {
        let err = validate_distribution(&[1.5, -0.5]).unwrap_err();
        assert!(matches!(
            err,
            ConstructError::NegativeProbability { index: 1, .. }
        ));
    }

    #[test]
    fn validate_distribution_rejects_unnormalized() {
        let err = validate_distribution(&[0.25, 0.25]).unwrap_err();
        assert!(matches!(err, ConstructError::NotNormalized { .. }));
    }
}
