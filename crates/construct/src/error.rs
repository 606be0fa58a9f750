//! Error types for the construct crate.

/// Errors that can occur while building a transition matrix.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConstructError {
    /// The stationary distribution has no entries.
    #[error("stationary distribution is empty")]
    EmptyDistribution,

    /// A stationary probability is NaN or infinite.
    #[error("stationary probability at index {index} is not finite")]
    NonFiniteProbability {
        /// Index of the offending entry.
        index: usize,
    },

    /// A stationary probability is negative.
    #[error("stationary probability at index {index} is negative: {value}")]
    NegativeProbability {
        /// Index of the offending entry.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// The stationary distribution does not sum to one.
    #[error("stationary distribution sums to {sum}, expected 1")]
    NotNormalized {
        /// Actual sum of the entries.
        sum: f64,
    },

    /// The requested ring length is zero.
    #[error("ring length must be at least 1")]
    InvalidRingLength,

    /// Scaling the stationary distribution onto the ring truncated every
    /// state away.
    #[error("ring length {ring_length} is too short: every scaled multiplicity truncates to zero")]
    DegenerateMultiplicities {
        /// The requested ring length.
        ring_length: usize,
    },

    /// The probability matrix has no entries.
    #[error("probability matrix is empty")]
    EmptyMatrix,

    /// The probability matrix is not square.
    #[error("probability matrix is {rows}x{cols}, expected square")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A matrix entry is NaN or infinite.
    #[error("matrix entry ({row}, {col}) is not finite")]
    NonFiniteEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },

    /// A matrix entry is negative.
    #[error("matrix entry ({row}, {col}) is negative: {value}")]
    NegativeEntry {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The negative value.
        value: f64,
    },

    /// A matrix row does not sum to one.
    #[error("matrix row {row} sums to {sum}, expected 1")]
    NotRowStochastic {
        /// Index of the offending row.
        row: usize,
        /// Actual sum of the row.
        sum: f64,
    },

    /// Ring partitioning failed.
    #[error(transparent)]
    Ring(#[from] moira_ring::RingError),
}
