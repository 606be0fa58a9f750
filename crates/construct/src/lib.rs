//! Synthesis of row-stochastic transition matrices from a target
//! stationary distribution.
//!
//! This crate offers two construction paths. Iterative scaling starts from
//! uniform random noise and alternates column scaling with row
//! normalization for a fixed number of rounds. The ring path lays the
//! states out on a repeat-free ring and tallies wraparound-adjacent pairs.
//! Both paths end in a validated [`TransitionMatrix`].
//!
//! # Pipeline
//!
//! ```text
//!  ┌───────────────┐
//!  │    scaling    │──┐
//!  │ (random init) │  │     ┌──────────────────┐
//!  └───────────────┘  ├────▶│ TransitionMatrix │
//!  ┌───────────────┐  │     │   (validated)    │
//!  │     ring      │──┘     └──────────────────┘
//!  │  (partition)  │
//!  └───────────────┘
//! ```
//!
//! # Quick start
//!
//! ```
//! use moira_construct::{ScalingConfig, iterative_scaling};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = ScalingConfig::new().with_self_loops(false);
//! let mut rng = StdRng::seed_from_u64(42);
//! let matrix = iterative_scaling(&[0.2, 0.3, 0.5], &config, &mut rng).unwrap();
//!
//! assert_eq!(matrix.n_states(), 3);
//! assert_eq!(matrix.prob(0, 0), 0.0);
//! ```

pub mod config;
pub mod error;
pub mod matrix;
pub mod normalize;
pub mod ring;
pub mod scaling;

pub use config::ScalingConfig;
pub use error::ConstructError;
pub use matrix::TransitionMatrix;
pub use normalize::normalize_rows;
pub use ring::ring_matrix;
pub use scaling::iterative_scaling;

pub use moira_ring::{RingConfig, RingError};
