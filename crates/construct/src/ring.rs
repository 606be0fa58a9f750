//! Transition matrices derived from repeat-free ring partitions.

use ndarray::Array2;
use tracing::debug;

use moira_ring::{RingConfig, partition_ring};

use crate::error::ConstructError;
use crate::matrix::{TransitionMatrix, validate_distribution};
use crate::normalize::normalize_rows;

/// Builds a transition matrix by laying the stationary distribution out on
/// a ring and tallying adjacent pairs.
///
/// Each state's multiplicity is its stationary probability scaled by
/// `ring_length` and truncated, so the realized ring can be shorter than
/// requested. The ring wraps around: the final slot transitions back to the
/// first. States whose multiplicity truncates to zero never appear on the
/// ring and receive a uniform row.
///
/// # Arguments
///
/// * `stationary` - Target stationary distribution, one entry per state.
/// * `ring_length` - Requested number of ring slots.
/// * `config` - Ring partition options (repeats, retry budget, anchor).
/// * `rng` - Random number generator driving the partition.
///
/// # Errors
///
/// Returns [`ConstructError`] if the distribution is invalid, if
/// `ring_length` is zero, if every multiplicity truncates to zero, or if
/// ring partitioning fails.
pub fn ring_matrix(
    stationary: &[f64],
    ring_length: usize,
    config: &RingConfig,
    rng: &mut impl rand::Rng,
) -> Result<TransitionMatrix, ConstructError> {
    validate_distribution(stationary)?;
    if ring_length == 0 {
        return Err(ConstructError::InvalidRingLength);
    }

    // Step 1: scale probabilities onto ring slots, truncating fractions.
    let multiplicities: Vec<usize> = stationary
        .iter()
        .map(|&p| (p * ring_length as f64) as usize)
        .collect();
    let realized: usize = multiplicities.iter().sum();
    if realized == 0 {
        return Err(ConstructError::DegenerateMultiplicities { ring_length });
    }
    debug!(ring_length, realized, "scaled stationary distribution onto ring");

    // Step 2: arrange the slots and tally wraparound-adjacent pairs.
    let ring = partition_ring(&multiplicities, config, rng)?;
    let n = stationary.len();
    let mut probs = Array2::zeros((n, n));
    for slot in 0..ring.len() {
        probs[[ring[slot], ring[(slot + 1) % ring.len()]]] += 1.0;
    }

    // Step 3: normalize tallies into probabilities.
    normalize_rows(&mut probs);
    TransitionMatrix::new(probs)
}
