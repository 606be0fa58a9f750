use std::path::PathBuf;

use serde::Deserialize;

/// Top-level Moira configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoiraConfig {
    /// Global RNG seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Chain settings: state labels and target stationary distribution.
    pub chain: ChainToml,

    /// Matrix construction settings.
    #[serde(default)]
    pub construct: ConstructToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainToml {
    /// One label per state.
    pub labels: Vec<String>,
    /// Target stationary probability per state, summing to 1.
    pub stationary: Vec<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructToml {
    /// Construction method: "scaling" or "ring".
    #[serde(default = "default_method")]
    pub method: String,
    /// Whether a state may follow itself. Defaults to true for scaling
    /// and false for ring when unset.
    #[serde(default)]
    pub self_loops: Option<bool>,
    /// Number of iterative scaling rounds.
    #[serde(default = "default_rounds")]
    pub rounds: usize,
    /// Requested number of ring slots.
    #[serde(default = "default_ring_length")]
    pub ring_length: usize,
    /// Ring retry budget (unbounded when unset).
    #[serde(default)]
    pub max_attempts: Option<usize>,
    /// Label of the anchor state for the ring bias.
    #[serde(default)]
    pub anchor: Option<String>,
    /// Weight multiplier applied by the anchor bias.
    #[serde(default = "default_anchor_attraction")]
    pub anchor_attraction: f64,
}

impl Default for ConstructToml {
    fn default() -> Self {
        Self {
            method: default_method(),
            self_loops: None,
            rounds: default_rounds(),
            ring_length: default_ring_length(),
            max_attempts: None,
            anchor: None,
            anchor_attraction: default_anchor_attraction(),
        }
    }
}

fn default_method() -> String {
    "ring".to_string()
}
fn default_rounds() -> usize {
    1000
}
fn default_ring_length() -> usize {
    60
}
fn default_anchor_attraction() -> f64 {
    10.0
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Chain JSON path (stdout when unset).
    pub path: Option<PathBuf>,
    /// Graphviz DOT path for the transition graph (skipped when unset).
    pub dot: Option<PathBuf>,
    /// Length of the sampled label sequence to include (0 to skip).
    #[serde(default)]
    pub sample_length: usize,
    /// Minimum transition probability for a DOT edge.
    #[serde(default)]
    pub dot_threshold: f64,
}
