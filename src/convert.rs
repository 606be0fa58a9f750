//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Result, bail};

use moira_construct::{RingConfig, ScalingConfig};

use crate::config::{ChainToml, ConstructToml};

/// Matrix construction methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Iterative scaling of a random matrix.
    Scaling,
    /// Tallying adjacent pairs on a repeat-free ring.
    Ring,
}

/// Parses a construction method name string into the corresponding enum variant.
pub fn parse_method(s: &str) -> Result<Method> {
    match s.to_lowercase().as_str() {
        "scaling" => Ok(Method::Scaling),
        "ring" => Ok(Method::Ring),
        other => bail!("unknown construction method: {other:?}"),
    }
}

/// Validates the `[chain]` section: labels must be non-empty, unique, and
/// match the stationary distribution in length.
pub fn validate_chain(chain: &ChainToml) -> Result<()> {
    if chain.labels.is_empty() {
        bail!("config [chain] has no labels");
    }
    if chain.labels.len() != chain.stationary.len() {
        bail!(
            "config [chain] has {} labels but {} stationary entries",
            chain.labels.len(),
            chain.stationary.len()
        );
    }
    for (i, label) in chain.labels.iter().enumerate() {
        if chain.labels[..i].contains(label) {
            bail!("config [chain] has duplicate label {label:?}");
        }
    }
    Ok(())
}

/// Resolves an anchor label to its state index.
pub fn resolve_anchor(labels: &[String], anchor: &str) -> Result<usize> {
    labels
        .iter()
        .position(|l| l == anchor)
        .ok_or_else(|| anyhow::anyhow!("anchor label {anchor:?} not found in [chain].labels"))
}

/// Builds a [`ScalingConfig`] from the TOML construct configuration.
pub fn build_scaling_config(construct: &ConstructToml) -> ScalingConfig {
    ScalingConfig::new()
        .with_self_loops(construct.self_loops.unwrap_or(true))
        .with_rounds(construct.rounds)
}

/// Builds a [`RingConfig`] from the TOML construct configuration.
///
/// For the ring, `self_loops` controls adjacent repeats and defaults to
/// false when unset. The anchor is given by label and resolved against the
/// chain's label list.
pub fn build_ring_config(construct: &ConstructToml, labels: &[String]) -> Result<RingConfig> {
    let mut cfg = RingConfig::new()
        .with_allow_repeats(construct.self_loops.unwrap_or(false))
        .with_max_attempts(construct.max_attempts)
        .with_anchor_attraction(construct.anchor_attraction);
    if let Some(ref anchor) = construct.anchor {
        cfg = cfg.with_anchor(resolve_anchor(labels, anchor)?);
    }
    Ok(cfg)
}
