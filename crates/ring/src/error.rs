//! Error types for the moira-ring crate.

/// Error type for all fallible operations in the moira-ring crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RingError {
    /// Returned when the multiplicity vector is empty.
    #[error("multiplicity vector is empty")]
    EmptyMultiplicities,

    /// Returned when every multiplicity is zero, leaving no ring slots.
    #[error("multiplicity vector has no ring slots (all entries are zero)")]
    NoSlots,

    /// Returned when the anchor state index is not a valid state.
    #[error("anchor state {anchor} out of range for {n_states} states")]
    AnchorOutOfRange {
        /// The offending anchor index.
        anchor: usize,
        /// Number of states in the multiplicity vector.
        n_states: usize,
    },

    /// Returned when the anchor attraction multiplier is unusable.
    #[error("invalid anchor attraction: {value} (must be finite and > 0)")]
    InvalidAttraction {
        /// The invalid multiplier.
        value: f64,
    },

    /// Returned when no repeat-free arrangement can exist: on a cycle, a
    /// state holding half or more of the slots must neighbor itself.
    #[error(
        "no repeat-free ring exists: multiplicity {max_multiplicity} fills half or more of {total} slots"
    )]
    Infeasible {
        /// The largest multiplicity.
        max_multiplicity: usize,
        /// Total number of ring slots.
        total: usize,
    },

    /// Returned when the attempt budget is exhausted without a valid ring.
    #[error("ring partition failed after {attempts} attempts")]
    AttemptsExhausted {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}
