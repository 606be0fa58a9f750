//! Configuration for iterative scaling.

/// Default number of scaling rounds.
pub const DEFAULT_ROUNDS: usize = 1000;

/// Configuration for [`iterative_scaling`](crate::iterative_scaling).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingConfig {
    self_loops: bool,
    rounds: usize,
}

impl ScalingConfig {
    /// Creates a configuration with default values:
    /// self-loops allowed, 1000 scaling rounds.
    pub fn new() -> Self {
        Self {
            self_loops: true,
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Sets whether states may transition to themselves.
    ///
    /// When disabled, the diagonal is zeroed before scaling starts and
    /// stays zero throughout.
    pub fn with_self_loops(mut self, self_loops: bool) -> Self {
        self.self_loops = self_loops;
        self
    }

    /// Sets the number of scaling rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Whether self-transitions are allowed.
    pub fn self_loops(&self) -> bool {
        self.self_loops
    }

    /// Number of scaling rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self::new()
    }
}
