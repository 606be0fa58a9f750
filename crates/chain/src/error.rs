//! Error types for the chain crate.

/// Errors that can occur when building or querying a Markov chain.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ChainError {
    /// The number of labels does not match the matrix dimension.
    #[error("got {labels} labels for {n_states} states")]
    LabelCountMismatch {
        /// Number of labels supplied.
        labels: usize,
        /// Number of states in the matrix.
        n_states: usize,
    },

    /// A state index is out of range.
    #[error("state index {index} out of range for {n_states} states")]
    StateOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of states in the chain.
        n_states: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_label_count_mismatch_display() {
        let e = ChainError::LabelCountMismatch {
            labels: 3,
            n_states: 2,
        };
        assert_eq!(e.to_string(), "got 3 labels for 2 states");
    }

    #[test]
    fn error_state_out_of_range_display() {
        let e = ChainError::StateOutOfRange {
            index: 5,
            n_states: 3,
        };
        assert_eq!(e.to_string(), "state index 5 out of range for 3 states");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<ChainError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<ChainError>();
    }
}
