//! Joint occurrence probabilities of consecutive state pairs.

use ndarray::Array1;

use crate::chain::MarkovChain;
use crate::error::ChainError;

impl MarkovChain {
    /// Returns, for each state `j`, the stationary probability of observing
    /// `state` immediately followed by `j`.
    ///
    /// Entry `j` is `pi[state] * P[state][j]`, so the vector sums to the
    /// stationary mass of `state`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `state` is out of range.
    pub fn occurrence_after(&self, state: usize) -> Result<Array1<f64>, ChainError> {
        self.check_state(state)?;
        Ok(self.matrix().row(state).to_owned() * self.stationary()[state])
    }

    /// Returns, for each state `i`, the stationary probability of observing
    /// `i` immediately followed by `state`.
    ///
    /// Entry `i` is `pi[i] * P[i][state]`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `state` is out of range.
    pub fn occurrence_before(&self, state: usize) -> Result<Array1<f64>, ChainError> {
        self.check_state(state)?;
        Ok(self.matrix().probs().column(state).to_owned() * self.stationary())
    }

    /// Returns, for each state, the stationary probability of it appearing
    /// directly next to `state`, on either side.
    ///
    /// This is the elementwise sum of [`occurrence_after`] and
    /// [`occurrence_before`]. A self-loop at `state` contributes to both
    /// directions and is therefore counted twice.
    ///
    /// [`occurrence_after`]: MarkovChain::occurrence_after
    /// [`occurrence_before`]: MarkovChain::occurrence_before
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::StateOutOfRange`] if `state` is out of range.
    pub fn occurrence_adjacent(&self, state: usize) -> Result<Array1<f64>, ChainError> {
        Ok(self.occurrence_after(state)? + self.occurrence_before(state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use moira_construct::TransitionMatrix;
    use ndarray::array;

    fn two_state_chain() -> MarkovChain {
        let matrix = TransitionMatrix::new(array![[0.9, 0.1], [0.5, 0.5]]).unwrap();
        MarkovChain::new(matrix, vec!["dry".into(), "wet".into()]).unwrap()
    }

    #[test]
    fn occurrence_after_known_values() {
        // pi = [5/6, 1/6], so after(0) = 5/6 * [0.9, 0.1].
        let chain = two_state_chain();
        let after = chain.occurrence_after(0).unwrap();
        assert_abs_diff_eq!(after[0], 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(after[1], 1.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn occurrence_after_sums_to_stationary_mass() {
        let chain = two_state_chain();
        for state in 0..2 {
            let after = chain.occurrence_after(state).unwrap();
            assert_abs_diff_eq!(after.sum(), chain.stationary()[state], epsilon = 1e-9);
        }
    }

    #[test]
    fn occurrence_before_known_values() {
        // before(0) = [pi[0] * 0.9, pi[1] * 0.5].
        let chain = two_state_chain();
        let before = chain.occurrence_before(0).unwrap();
        assert_abs_diff_eq!(before[0], 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(before[1], 1.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn occurrence_before_sums_to_incoming_mass() {
        // Total incoming pair mass of a state equals its stationary mass.
        let chain = two_state_chain();
        for state in 0..2 {
            let before = chain.occurrence_before(state).unwrap();
            assert_abs_diff_eq!(before.sum(), chain.stationary()[state], epsilon = 1e-9);
        }
    }

    #[test]
    fn occurrence_adjacent_is_elementwise_sum() {
        let chain = two_state_chain();
        let after = chain.occurrence_after(1).unwrap();
        let before = chain.occurrence_before(1).unwrap();
        let adjacent = chain.occurrence_adjacent(1).unwrap();
        for i in 0..2 {
            assert_abs_diff_eq!(adjacent[i], after[i] + before[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn occurrence_rejects_out_of_range_state() {
        let chain = two_state_chain();
        assert!(matches!(
            chain.occurrence_after(2).unwrap_err(),
            ChainError::StateOutOfRange { index: 2, .. }
        ));
        assert!(matches!(
            chain.occurrence_before(9).unwrap_err(),
            ChainError::StateOutOfRange { index: 9, .. }
        ));
        assert!(matches!(
            chain.occurrence_adjacent(2).unwrap_err(),
            ChainError::StateOutOfRange { index: 2, .. }
        ));
    }
}
