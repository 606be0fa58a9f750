//! Randomized ring partitioning for the moira chain generator.
//!
//! This crate arranges integer state multiplicities into a circular
//! sequence (a ring) subject to adjacency constraints: by default no two
//! cyclically adjacent slots may hold the same state, and an optional
//! anchor state biases the slot drawn right after each of its visits.
//! Construction is a randomized greedy walk; dead ends are retried on one
//! continuing rng stream until the attempt budget runs out.
//!
//! # Quick start
//!
//! ```
//! use moira_ring::{RingConfig, partition_ring};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = RingConfig::new().with_max_attempts(Some(100));
//! let mut rng = StdRng::seed_from_u64(42);
//! let ring = partition_ring(&[1, 1, 2, 2], &config, &mut rng).unwrap();
//! assert_eq!(ring.len(), 6);
//! ```

mod config;
mod error;
mod partition;

pub use config::RingConfig;
pub use error::RingError;
pub use partition::{RingScratch, partition_ring, partition_ring_with_scratch};
