//! Labelled Markov chains over validated transition matrices.

use ndarray::Array1;

use moira_construct::TransitionMatrix;

use crate::error::ChainError;
use crate::stationary::stationary_distribution;

/// A first-order Markov chain with one label per state.
///
/// Owns a validated transition matrix, the state labels, and the chain's
/// stationary distribution, which is computed once at construction.
#[derive(Debug, Clone)]
pub struct MarkovChain {
    matrix: TransitionMatrix,
    labels: Vec<String>,
    stationary: Array1<f64>,
}

impl MarkovChain {
    /// Builds a chain from a matrix and one label per state.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::LabelCountMismatch`] if the label count does
    /// not equal the matrix dimension.
    pub fn new(matrix: TransitionMatrix, labels: Vec<String>) -> Result<Self, ChainError> {
        if labels.len() != matrix.n_states() {
            return Err(ChainError::LabelCountMismatch {
                labels: labels.len(),
                n_states: matrix.n_states(),
            });
        }
        let stationary = stationary_distribution(&matrix);
        Ok(Self {
            matrix,
            labels,
            stationary,
        })
    }

    /// Returns the number of states.
    pub fn n_states(&self) -> usize {
        self.matrix.n_states()
    }

    /// Returns the underlying transition matrix.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Returns the state labels, in state order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label of a state.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `state` is out of range.
    pub fn label(&self, state: usize) -> Result<&str, ChainError> {
        self.check_state(state)?;
        Ok(&self.labels[state])
    }

    /// Returns the stationary distribution.
    pub fn stationary(&self) -> &Array1<f64> {
        &self.stationary
    }

    /// Samples a label sequence of the given length.
    ///
    /// The initial state is drawn from the stationary distribution; each
    /// subsequent state is drawn from the current state's matrix row. A
    /// length of zero returns an empty sequence without consuming any
    /// randomness.
    pub fn sample(&self, length: usize, rng: &mut impl rand::Rng) -> Vec<&str> {
        if length == 0 {
            return Vec::new();
        }
        let mut sequence = Vec::with_capacity(length);
        let mut state = self.sample_initial(rng);
        sequence.push(self.labels[state].as_str());
        for _ in 1..length {
            state = self.matrix.sample_next(state, rng);
            sequence.push(self.labels[state].as_str());
        }
        sequence
    }

    /// Draws an initial state from the stationary distribution.
    fn sample_initial(&self, rng: &mut impl rand::Rng) -> usize {
        let u: f64 = rng.random();
        let mut cumulative = 0.0;
        for (state, &p) in self.stationary.iter().enumerate() {
            cumulative += p;
            if cumulative >= u {
                return state;
            }
        }
        self.n_states() - 1
    }

    pub(crate) fn check_state(&self, index: usize) -> Result<(), ChainError> {
        if index >= self.n_states() {
            return Err(ChainError::StateOutOfRange {
                index,
                n_states: self.n_states(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_state_chain() -> MarkovChain {
        let matrix = TransitionMatrix::new(array![[0.9, 0.1], [0.5, 0.5]]).unwrap();
        MarkovChain::new(matrix, vec!["dry".into(), "wet".into()]).unwrap()
    }

    #[test]
    fn new_rejects_label_mismatch() {
        let matrix = TransitionMatrix::new(array![[0.9, 0.1], [0.5, 0.5]]).unwrap();
        let err = MarkovChain::new(matrix, vec!["only".into()]).unwrap_err();
        assert!(matches!(
            err,
            ChainError::LabelCountMismatch {
                labels: 1,
                n_states: 2,
            }
        ));
    }

    #[test]
    fn accessors_expose_chain_parts() {
        let chain = two_state_chain();
        assert_eq!(chain.n_states(), 2);
        assert_eq!(chain.labels(), &["dry".to_string(), "wet".to_string()]);
        assert_eq!(chain.label(0).unwrap(), "dry");
        assert_eq!(chain.label(1).unwrap(), "wet");
        assert_abs_diff_eq!(chain.matrix().prob(0, 0), 0.9, epsilon = 1e-12);
        assert_abs_diff_eq!(chain.stationary().sum(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn label_out_of_range() {
        let chain = two_state_chain();
        let err = chain.label(2).unwrap_err();
        assert!(matches!(
            err,
            ChainError::StateOutOfRange {
                index: 2,
                n_states: 2,
            }
        ));
    }

    #[test]
    fn stationary_computed_eagerly() {
        let chain = two_state_chain();
        assert_abs_diff_eq!(chain.stationary()[0], 5.0 / 6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain.stationary()[1], 1.0 / 6.0, epsilon = 1e-9);
    }

    #[test]
    fn sample_zero_length_is_empty_and_draw_free() {
        let chain = two_state_chain();
        let mut rng = StdRng::seed_from_u64(9);
        assert!(chain.sample(0, &mut rng).is_empty());

        // No randomness consumed: the rng still matches a fresh one.
        let mut fresh = StdRng::seed_from_u64(9);
        assert_eq!(rng.random::<u64>(), fresh.random::<u64>());
    }

    #[test]
    fn sample_has_requested_length_and_known_labels() {
        let chain = two_state_chain();
        let mut rng = StdRng::seed_from_u64(4);
        let sequence = chain.sample(50, &mut rng);
        assert_eq!(sequence.len(), 50);
        assert!(sequence.iter().all(|&l| l == "dry" || l == "wet"));
    }

    #[test]
    fn sample_follows_transition_support() {
        let matrix = TransitionMatrix::new(array![[0.0, 1.0], [1.0, 0.0]]).unwrap();
        let chain = MarkovChain::new(matrix, vec!["a".into(), "b".into()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let sequence = chain.sample(40, &mut rng);
        for pair in sequence.windows(2) {
            assert_ne!(pair[0], pair[1], "alternating chain repeated a label");
        }
    }

    #[test]
    fn sample_initial_state_follows_stationary() {
        // The identity matrix never leaves its initial state, so a length-1
        // sample exposes the initial draw directly.
        let matrix = TransitionMatrix::new(array![[1.0, 0.0], [0.0, 1.0]]).unwrap();
        let chain = MarkovChain::new(matrix, vec!["a".into(), "b".into()]).unwrap();

        let mut a_count = 0usize;
        let n = 2000;
        for seed in 0..n {
            let mut rng = StdRng::seed_from_u64(seed);
            if chain.sample(1, &mut rng)[0] == "a" {
                a_count += 1;
            }
        }
        let freq = a_count as f64 / n as f64;
        assert!((freq - 0.5).abs() < 0.05, "initial state frequency {freq}");
    }

    #[test]
    fn sample_is_seeded_deterministic() {
        let chain = two_state_chain();
        let mut rng1 = StdRng::seed_from_u64(33);
        let mut rng2 = StdRng::seed_from_u64(33);
        assert_eq!(chain.sample(100, &mut rng1), chain.sample(100, &mut rng2));
    }
}
