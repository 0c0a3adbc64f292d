//! Iterative probability propagation through a transition matrix.

use tracing::{debug, trace, warn};

use crate::config::{DegeneratePolicy, EngineConfig};
use crate::error::{MarkovError, VectorKind};
use crate::history::History;
use crate::state::StateSpace;
use crate::transition::TransitionMatrix;
use crate::vector::{ProbabilityVector, WeightVector};

/// Outgoing sums further than this from 1 are reported at debug level.
const STOCHASTIC_TOL: f64 = 1e-9;

/// Lifecycle of a [`PropagationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// Built, or reset after a failed run. Vectors hold the one-hot seed.
    Configured,
    /// Inside [`PropagationEngine::run`].
    Running,
    /// The last run finished; final vectors and history are available.
    Completed,
}

/// Propagates a one-hot start distribution through a transition matrix and
/// tracks a weight-biased visitation vector alongside it.
///
/// The matrix is moved into the engine, so no further transitions can be
/// added once an engine exists.
#[derive(Debug, Clone)]
pub struct PropagationEngine {
    matrix: TransitionMatrix,
    weights: WeightVector,
    initial: usize,
    config: EngineConfig,
    phase: EnginePhase,
    probabilities: ProbabilityVector,
    weighted: ProbabilityVector,
    history: History,
}

impl PropagationEngine {
    /// Creates an engine with the default [`EngineConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidState`] if `initial_state` is not in the
    /// matrix's state space and [`MarkovError::LengthMismatch`] if `weights`
    /// does not have one entry per state.
    pub fn new(
        matrix: TransitionMatrix,
        initial_state: &str,
        weights: WeightVector,
    ) -> Result<Self, MarkovError> {
        Self::with_config(matrix, initial_state, weights, EngineConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_config(
        matrix: TransitionMatrix,
        initial_state: &str,
        weights: WeightVector,
        config: EngineConfig,
    ) -> Result<Self, MarkovError> {
        let initial = matrix.states().resolve(initial_state)?;
        let n = matrix.n_states();
        if weights.len() != n {
            return Err(MarkovError::LengthMismatch {
                expected: n,
                got: weights.len(),
            });
        }

        for (s, label) in matrix.states().iter().enumerate() {
            let outgoing = matrix.column_sum(s);
            if (outgoing - 1.0).abs() > STOCHASTIC_TOL {
                debug!(state = label, outgoing, "outgoing probabilities do not sum to 1");
            }
        }

        let seed = ProbabilityVector::one_hot(n, initial);
        Ok(Self {
            matrix,
            weights,
            initial,
            config,
            phase: EnginePhase::Configured,
            weighted: seed.clone(),
            probabilities: seed,
            history: History::new(),
        })
    }

    /// Runs `num_iterations` propagation steps from the one-hot seed and
    /// returns the final normalised probability vector.
    ///
    /// Each call starts from scratch: previous vectors and history are
    /// discarded. Every iteration `i` records the current vector as history
    /// entry `i`, then computes `next = M · current` and the weighted
    /// candidate `(M · next) ⊙ weights`, and L1-normalises both.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidArgument`] if `num_iterations == 0`; the
    /// engine is left untouched. Under [`DegeneratePolicy::Error`], returns
    /// [`MarkovError::DegenerateDistribution`] when a normalisation sum is
    /// zero or non-finite; the engine is then reset to
    /// [`EnginePhase::Configured`] with an empty history.
    #[tracing::instrument(skip(self), fields(n_states = self.matrix.n_states(), initial = self.initial_state()))]
    pub fn run(&mut self, num_iterations: usize) -> Result<&ProbabilityVector, MarkovError> {
        if num_iterations == 0 {
            return Err(MarkovError::InvalidArgument {
                reason: "num_iterations must be > 0, got 0".to_string(),
            });
        }

        self.reset();
        self.phase = EnginePhase::Running;
        match self.propagate(num_iterations) {
            Ok(()) => {
                self.phase = EnginePhase::Completed;
                debug!(
                    iterations = num_iterations,
                    most_likely = ?self.probabilities.argmax().and_then(|i| self.states().label(i)),
                    "propagation complete"
                );
                Ok(&self.probabilities)
            }
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    fn propagate(&mut self, num_iterations: usize) -> Result<(), MarkovError> {
        let n = self.matrix.n_states();
        let mut current = self.probabilities.values().to_vec();
        let mut next = vec![0.0; n];
        let mut weighted = self.weighted.values().to_vec();

        for iteration in 1..=num_iterations {
            self.history
                .record(iteration, ProbabilityVector::from_values(current.clone()));

            self.matrix.apply_into(&current, &mut next)?;
            // The weighted candidate takes a second step through the matrix
            // from `next` before weighting.
            self.matrix.apply_into(&next, &mut weighted)?;
            for (w, &factor) in weighted.iter_mut().zip(self.weights.values()) {
                *w *= factor;
            }

            self.normalize(&mut next, iteration, VectorKind::Probability)?;
            self.normalize(&mut weighted, iteration, VectorKind::Weighted)?;

            std::mem::swap(&mut current, &mut next);
        }

        self.probabilities = ProbabilityVector::from_values(current);
        self.weighted = ProbabilityVector::from_values(weighted);
        Ok(())
    }

    fn normalize(
        &self,
        values: &mut [f64],
        iteration: usize,
        vector: VectorKind,
    ) -> Result<(), MarkovError> {
        let sum: f64 = values.iter().sum();
        trace!(iteration, %vector, sum, "normalizing");
        if !sum.is_finite() || sum <= 0.0 {
            match self.config.degenerate_policy() {
                DegeneratePolicy::Error => {
                    return Err(MarkovError::DegenerateDistribution {
                        iteration,
                        vector,
                        sum,
                    });
                }
                DegeneratePolicy::Propagate => {
                    warn!(iteration, %vector, sum, "degenerate distribution, propagating NaN");
                }
            }
        }
        for v in values.iter_mut() {
            *v /= sum;
        }
        Ok(())
    }

    fn reset(&mut self) {
        let seed = ProbabilityVector::one_hot(self.matrix.n_states(), self.initial);
        self.weighted = seed.clone();
        self.probabilities = seed;
        self.history.clear();
        self.phase = EnginePhase::Configured;
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Final probability vector of the last completed run, or the seed.
    pub fn probabilities(&self) -> &ProbabilityVector {
        &self.probabilities
    }

    /// Final weighted visitation vector of the last completed run, or the seed.
    pub fn weighted(&self) -> &ProbabilityVector {
        &self.weighted
    }

    /// Pre-update snapshots of the last completed run.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The transition matrix driving the propagation.
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// The state space shared by the matrix and all vectors.
    pub fn states(&self) -> &StateSpace {
        self.matrix.states()
    }

    /// Per-state importance weights.
    pub fn weights(&self) -> &WeightVector {
        &self.weights
    }

    /// Label of the state the chain starts in.
    pub fn initial_state(&self) -> &str {
        self.states().label(self.initial).unwrap_or_default()
    }

    /// Final probability of `label`.
    pub fn probability_of(&self, label: &str) -> Result<f64, MarkovError> {
        let i = self.states().resolve(label)?;
        Ok(self.probabilities.values()[i])
    }

    /// Final weighted visitation score of `label`.
    pub fn weighted_of(&self, label: &str) -> Result<f64, MarkovError> {
        let i = self.states().resolve(label)?;
        Ok(self.weighted.values()[i])
    }
}
