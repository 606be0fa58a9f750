//! Labelled Markov chains: sampling, occurrence statistics, and graph
//! export on top of validated transition matrices.
//!
//! # Quick start
//!
//! ```rust
//! use moira_chain::MarkovChain;
//! use moira_construct::TransitionMatrix;
//! use ndarray::array;
//!
//! let matrix = TransitionMatrix::new(array![[0.9, 0.1], [0.5, 0.5]]).unwrap();
//! let chain = MarkovChain::new(matrix, vec!["dry".into(), "wet".into()]).unwrap();
//!
//! assert_eq!(chain.label(0).unwrap(), "dry");
//! assert!(chain.stationary()[0] > chain.stationary()[1]);
//! ```

mod chain;
mod error;
mod graph;
mod occurrence;
mod stationary;

pub use chain::MarkovChain;
pub use error::ChainError;
pub use stationary::stationary_distribution;

pub use moira_construct::TransitionMatrix;
