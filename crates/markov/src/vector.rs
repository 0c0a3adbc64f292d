//! Dense per-state vectors: propagated probabilities and importance weights.

use crate::error::MarkovError;
use crate::state::StateSpace;

/// A dense vector of non-negative mass over a state space.
///
/// Values are stored in state-index order. Vectors produced by a completed
/// propagation step sum to 1 unless the engine was configured to propagate
/// degenerate (NaN) results.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityVector {
    values: Vec<f64>,
}

impl ProbabilityVector {
    /// Indicator vector with probability 1 at `index` and 0 elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn one_hot(len: usize, index: usize) -> Self {
        assert!(index < len, "one_hot index {index} out of range for {len}");
        let mut values = vec![0.0; len];
        values[index] = 1.0;
        Self { values }
    }

    pub(crate) fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Values in state-index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Consumes the vector, returning its values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the vector has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a state index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Returns `true` if all entries are finite and the sum is within `tol` of 1.
    pub fn is_normalized(&self, tol: f64) -> bool {
        self.values.iter().all(|v| v.is_finite()) && (self.sum() - 1.0).abs() <= tol
    }

    /// Index of the largest entry, ignoring NaN. `None` for an all-NaN vector.
    pub fn argmax(&self) -> Option<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
    }
}

/// Per-state importance multipliers for the weighted visitation metric.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector {
    values: Vec<f64>,
}

impl WeightVector {
    /// Builds a weight vector for `states`, one value per state in index order.
    ///
    /// # Errors
    ///
    /// Returns [`MarkovError::LengthMismatch`] if `values.len() != states.len()`
    /// and [`MarkovError::InvalidWeight`] for a negative or non-finite weight.
    pub fn new(states: &StateSpace, values: Vec<f64>) -> Result<Self, MarkovError> {
        if values.len() != states.len() {
            return Err(MarkovError::LengthMismatch {
                expected: states.len(),
                got: values.len(),
            });
        }
        for (label, &value) in states.iter().zip(&values) {
            if !value.is_finite() || value < 0.0 {
                return Err(MarkovError::InvalidWeight {
                    label: label.to_string(),
                    value,
                });
            }
        }
        Ok(Self { values })
    }

    /// Weight 1.0 for every state.
    pub fn uniform(states: &StateSpace) -> Self {
        Self {
            values: vec![1.0; states.len()],
        }
    }

    /// Weights in state-index order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
