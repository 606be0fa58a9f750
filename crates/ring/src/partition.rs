//! Ring partitioning entry points and the retry driver.

use rand::Rng;
use tracing::{debug, info};

use crate::config::RingConfig;
use crate::error::RingError;

/// Pre-allocated scratch buffers for ring partitioning.
///
/// Reuse across multiple calls to [`partition_ring_with_scratch`] to avoid
/// repeated heap allocation when many rings are built in a loop.
#[derive(Debug, Clone)]
pub struct RingScratch {
    /// Remaining multiplicity per state within one attempt.
    pub(crate) remaining: Vec<usize>,
    /// Candidate weight per state for the current slot.
    pub(crate) weights: Vec<f64>,
    /// States with positive weight for the current slot.
    pub(crate) candidates: Vec<usize>,
    /// Draw probabilities over `candidates`.
    pub(crate) probs: Vec<f64>,
    /// Cumulative distribution over `candidates`.
    pub(crate) cdf: Vec<f64>,
}

impl RingScratch {
    /// Creates a new scratch buffer with capacity for `n_states` states.
    pub fn new(n_states: usize) -> Self {
        Self {
            remaining: Vec::with_capacity(n_states),
            weights: Vec::with_capacity(n_states),
            candidates: Vec::with_capacity(n_states),
            probs: Vec::with_capacity(n_states),
            cdf: Vec::with_capacity(n_states),
        }
    }
}

/// Outcome of a single partition attempt.
enum AttemptOutcome {
    /// The ring closed with every constraint satisfied.
    Complete(Vec<usize>),
    /// Every candidate weight hit zero before the ring closed.
    DeadEnd,
}

/// Validates all inputs and returns the total ring length.
fn validate_inputs(multiplicities: &[usize], config: &RingConfig) -> Result<usize, RingError> {
    // Config validation first
    config.validate()?;

    if multiplicities.is_empty() {
        return Err(RingError::EmptyMultiplicities);
    }

    let total: usize = multiplicities.iter().sum();
    if total == 0 {
        return Err(RingError::NoSlots);
    }

    if let Some(anchor) = config.anchor() {
        if anchor >= multiplicities.len() {
            return Err(RingError::AnchorOutOfRange {
                anchor,
                n_states: multiplicities.len(),
            });
        }
    }

    Ok(total)
}

/// Retry driver: runs attempts against one shared rng stream.
///
/// The stream is deliberately never re-seeded between attempts, so a failed
/// attempt is followed by fresh draws rather than an identical replay.
fn partition_ring_inner(
    multiplicities: &[usize],
    total: usize,
    config: &RingConfig,
    rng: &mut impl Rng,
    scratch: &mut RingScratch,
) -> Result<Vec<usize>, RingError> {
    let mut attempts: usize = 0;
    loop {
        if let Some(budget) = config.max_attempts() {
            if attempts >= budget {
                return Err(RingError::AttemptsExhausted { attempts });
            }
        }
        attempts += 1;

        match attempt_ring(multiplicities, total, config, rng, scratch)? {
            AttemptOutcome::Complete(ring) => {
                info!(attempts, ring_len = ring.len(), "ring partition complete");
                return Ok(ring);
            }
            AttemptOutcome::DeadEnd => {
                debug!(attempt = attempts, "partition attempt dead-ended");
            }
        }
    }
}

/// Runs one placement attempt over the shared rng stream.
fn attempt_ring(
    multiplicities: &[usize],
    total: usize,
    config: &RingConfig,
    rng: &mut impl Rng,
    scratch: &mut RingScratch,
) -> Result<AttemptOutcome, RingError> {
    // Step 1: Feasibility. On a cycle, a state holding half or more of the
    // slots must neighbor itself somewhere, so a repeat-free arrangement
    // cannot exist.
    if !config.allow_repeats() {
        let max = multiplicities.iter().copied().max().unwrap_or(0);
        if 2 * max >= total {
            return Err(RingError::Infeasible {
                max_multiplicity: max,
                total,
            });
        }
    }

    scratch.remaining.clear();
    scratch.remaining.extend_from_slice(multiplicities);

    // Step 2: Seed the ring with the rarest state. Placing it first leaves
    // the most slack for the wraparound constraint when the ring closes.
    let Some(first) = scratch
        .remaining
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .min_by_key(|&(_, &count)| count)
        .map(|(state, _)| state)
    else {
        return Ok(AttemptOutcome::DeadEnd);
    };
    let mut ring = Vec::with_capacity(total);
    ring.push(first);
    scratch.remaining[first] -= 1;

    // Step 3: Fill the remaining slots left to right.
    for slot in 1..total {
        let prev = ring[slot - 1];

        // Step 3a: Candidate weights start as the remaining multiplicities.
        scratch.weights.clear();
        scratch
            .weights
            .extend(scratch.remaining.iter().map(|&count| count as f64));

        // Step 3b: Forbid an immediate repeat, and on the final slot also
        // the wraparound neighbor.
        if !config.allow_repeats() {
            scratch.weights[prev] = 0.0;
            if slot == total - 1 {
                scratch.weights[ring[0]] = 0.0;
            }
        }

        // Step 3c: Right after a visit to the anchor, boost even states.
        if let Some(anchor) = config.anchor() {
            if prev == anchor {
                for weight in scratch.weights.iter_mut().step_by(2) {
                    *weight *= config.anchor_attraction();
                }
            }
        }

        // Step 3d: Collect the states that still carry weight.
        scratch.candidates.clear();
        let mut mass = 0.0;
        for (state, &weight) in scratch.weights.iter().enumerate() {
            if weight > 0.0 {
                scratch.candidates.push(state);
                mass += weight;
            }
        }
        if scratch.candidates.is_empty() {
            return Ok(AttemptOutcome::DeadEnd);
        }

        // Step 3e: Draw the next state and consume one slot.
        scratch.probs.clear();
        scratch
            .probs
            .extend(scratch.candidates.iter().map(|&s| scratch.weights[s] / mass));
        let local = weighted_sample(&scratch.probs, rng, &mut scratch.cdf);
        let next = scratch.candidates[local];
        ring.push(next);
        scratch.remaining[next] -= 1;
    }

    Ok(AttemptOutcome::Complete(ring))
}

/// Draws an index from a probability vector via inverse-CDF lookup.
///
/// The cumulative distribution is built into the caller's `cdf` buffer;
/// its final entry is forced to 1.0 to eliminate floating-point edge cases.
fn weighted_sample(probs: &[f64], rng: &mut impl Rng, cdf: &mut Vec<f64>) -> usize {
    cdf.clear();
    let mut acc = 0.0;
    for &p in probs {
        acc += p;
        cdf.push(acc);
    }
    if let Some(last) = cdf.last_mut() {
        *last = 1.0;
    }
    let u: f64 = rng.random();
    cdf.partition_point(|&c| c < u).min(probs.len() - 1)
}

/// Arranges state occurrences on a ring, giving state `s` exactly
/// `multiplicities[s]` slots.
///
/// Slots are filled left to right. The rarest state is seeded first; each
/// later slot is drawn with weights equal to the remaining multiplicities,
/// zeroing the previous state (and, on the final slot, the first state)
/// when repeats are forbidden. When the previous slot holds the anchor
/// state, even-indexed states have their weights multiplied by the
/// configured attraction before the draw. An attempt whose candidate
/// weights all hit zero is abandoned and retried on the same rng stream,
/// up to the configured budget.
///
/// # Arguments
///
/// * `multiplicities` - ring slots per state; the ring length is their sum
/// * `config` - adjacency, anchor, and retry settings
/// * `rng` - random number generator shared by all attempts
///
/// # Errors
///
/// Returns [`RingError`] if the inputs are malformed (empty or all-zero
/// multiplicities, anchor out of range, unusable attraction), if no
/// repeat-free arrangement can exist, or if the attempt budget runs out.
#[tracing::instrument(skip(multiplicities, config, rng), fields(n_states = multiplicities.len()))]
pub fn partition_ring(
    multiplicities: &[usize],
    config: &RingConfig,
    rng: &mut impl Rng,
) -> Result<Vec<usize>, RingError> {
    let total = validate_inputs(multiplicities, config)?;
    let mut scratch = RingScratch::new(multiplicities.len());
    partition_ring_inner(multiplicities, total, config, rng, &mut scratch)
}

/// Identical to [`partition_ring`] but reuses pre-allocated scratch buffers.
///
/// Buffers grow as needed and never shrink, which suits loops that build
/// many rings of similar size.
///
/// # Errors
///
/// Returns [`RingError`] under the same conditions as [`partition_ring`].
#[tracing::instrument(
    skip(multiplicities, config, rng, scratch),
    fields(n_states = multiplicities.len())
)]
pub fn partition_ring_with_scratch(
    multiplicities: &[usize],
    config: &RingConfig,
    rng: &mut impl Rng,
    scratch: &mut RingScratch,
) -> Result<Vec<usize>, RingError> {
    let total = validate_inputs(multiplicities, config)?;
    partition_ring_inner(multiplicities, total, config, rng, scratch)
}
