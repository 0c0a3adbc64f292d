//! Labelled transition matrix over a [`StateSpace`].

use crate::error::MarkovError;
use crate::state::StateSpace;

/// A square transition matrix indexed `[target, source]`.
///
/// Column `s` holds the mass that leaves source state `s` in one step, so the
/// matrix is column-stochastic when every source is fully specified. Cells
/// never set through [`add_transition`](Self::add_transition) are 0. Outgoing
/// mass per source is not required to sum to 1: missing mass simply leaks
/// out of the chain and is restored by the engine's renormalisation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionMatrix {
    states: StateSpace,
    /// Row-major `n x n` buffer, `cells[target * n + source]`.
    cells: Vec<f64>,
}

impl TransitionMatrix {
    /// Creates an all-zero matrix over `states`.
    pub fn new(states: StateSpace) -> Self {
        let n = states.len();
        Self {
            states,
            cells: vec![0.0; n * n],
        }
    }

    /// The state space indexing both axes.
    pub fn states(&self) -> &StateSpace {
        &self.states
    }

    /// Number of states (matrix dimension).
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Sets the probability of moving from `source` to `target` in one step,
    /// overwriting any previous value for the pair.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::InvalidState`] if either label is unknown and
    /// [`MarkovError::InvalidArgument`] if `probability` is negative or not
    /// finite. The matrix is left unmodified on error.
    pub fn add_transition(
        &mut self,
        source: &str,
        target: &str,
        probability: f64,
    ) -> Result<(), MarkovError> {
        let s = self.states.resolve(source)?;
        let t = self.states.resolve(target)?;
        if !probability.is_finite() || probability < 0.0 {
            return Err(MarkovError::InvalidArgument {
                reason: format!(
                    "transition {source:?} -> {target:?}: probability must be finite and >= 0, got {probability}"
                ),
            });
        }
        let n = self.n_states();
        self.cells[t * n + s] = probability;
        Ok(())
    }

    /// Returns the probability of moving from `source` to `target`.
    pub fn prob(&self, source: &str, target: &str) -> Result<f64, MarkovError> {
        let s = self.states.resolve(source)?;
        let t = self.states.resolve(target)?;
        Ok(self.cell(t, s))
    }

    /// Total mass leaving `source` per step.
    pub fn outgoing_sum(&self, source: &str) -> Result<f64, MarkovError> {
        let s = self.states.resolve(source)?;
        Ok(self.column_sum(s))
    }

    pub(crate) fn cell(&self, target: usize, source: usize) -> f64 {
        self.cells[target * self.n_states() + source]
    }

    pub(crate) fn column_sum(&self, source: usize) -> f64 {
        (0..self.n_states()).map(|t| self.cell(t, source)).sum()
    }

    /// Rows of the matrix, one per target state, in state-index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.cells.chunks_exact(self.n_states())
    }

    /// Materialises the full matrix as `rows[target][source]`.
    pub fn to_dense(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Computes `M · vector`.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::LengthMismatch`] if `vector` does not have one
    /// entry per state.
    pub fn apply(&self, vector: &[f64]) -> Result<Vec<f64>, MarkovError> {
        let mut out = vec![0.0; self.n_states()];
        self.apply_into(vector, &mut out)?;
        Ok(out)
    }

    /// Computes `M · vector` into a pre-allocated buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::LengthMismatch`] if either slice does not have
    /// one entry per state.
    pub fn apply_into(&self, vector: &[f64], out: &mut [f64]) -> Result<(), MarkovError> {
        let n = self.n_states();
        for len in [vector.len(), out.len()] {
            if len != n {
                return Err(MarkovError::LengthMismatch {
                    expected: n,
                    got: len,
                });
            }
        }
        for (o, row) in out.iter_mut().zip(self.rows()) {
            *o = row.iter().zip(vector).map(|(m, v)| m * v).sum();
        }
        Ok(())
    }
}
