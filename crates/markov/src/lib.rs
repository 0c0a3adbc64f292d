//! Labelled discrete-time Markov chain propagation.
//!
//! This crate models a user's navigation through an application as a
//! first-order Markov chain over named states, propagates a start
//! distribution for a fixed number of steps, and tracks a secondary visitation
//! score biased by per-state importance weights.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────────┐     ┌─────────────────────┐
//!  │  StateSpace  │────▶│  TransitionMatrix  │────▶│  PropagationEngine  │
//!  │  (labels)    │     │  (add_transition)  │     │  (run, History)     │
//!  └──────────────┘     └────────────────────┘     └─────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use navchain_markov::{PropagationEngine, StateSpace, TransitionMatrix, WeightVector};
//!
//! let states = StateSpace::new(["A", "B", "C"]).unwrap();
//! let weights = WeightVector::uniform(&states);
//!
//! let mut matrix = TransitionMatrix::new(states);
//! matrix.add_transition("A", "B", 1.0).unwrap();
//! matrix.add_transition("B", "C", 1.0).unwrap();
//! matrix.add_transition("C", "C", 1.0).unwrap();
//!
//! let mut engine = PropagationEngine::new(matrix, "A", weights).unwrap();
//! let p = engine.run(2).unwrap();
//! assert_eq!(p.values(), &[0.0, 0.0, 1.0]);
//! assert_eq!(engine.history().len(), 2);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod state;
pub mod transition;
pub mod vector;

pub use config::{DegeneratePolicy, EngineConfig};
pub use engine::{EnginePhase, PropagationEngine};
pub use error::{MarkovError, VectorKind};
pub use history::History;
pub use state::StateSpace;
pub use transition::TransitionMatrix;
pub use vector::{ProbabilityVector, WeightVector};
