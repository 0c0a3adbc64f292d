//! Error types for the navchain-markov crate.

use std::fmt;

/// Identifies which of the engine's two vectors a normalisation step failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorKind {
    /// The plain state probability vector.
    Probability,
    /// The weight-biased visitation vector.
    Weighted,
}

impl fmt::Display for VectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Probability => f.write_str("probability"),
            Self::Weighted => f.write_str("weighted"),
        }
    }
}

/// Error type for all fallible operations in the navchain-markov crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarkovError {
    /// Returned when a state space is built from repeated labels.
    #[error("duplicate state label: {label:?}")]
    DuplicateState {
        /// The label that appeared more than once.
        label: String,
    },

    /// Returned when a state space is built from an empty label list.
    #[error("state space must contain at least one state")]
    EmptyStateSpace,

    /// Returned when a label does not belong to the state space.
    #[error("unknown state: {label:?}")]
    InvalidState {
        /// The unresolved label.
        label: String,
    },

    /// Returned when an argument is outside its accepted domain.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a state weight is negative or non-finite.
    #[error("invalid weight for state {label:?}: {value} (must be finite and >= 0)")]
    InvalidWeight {
        /// State the weight belongs to.
        label: String,
        /// The invalid value.
        value: f64,
    },

    /// Returned when a per-state vector does not match the state space length.
    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch {
        /// Number of states.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// Returned when a normalisation step divides by a zero or non-finite sum.
    #[error("degenerate {vector} distribution at iteration {iteration}: sum is {sum}")]
    DegenerateDistribution {
        /// 1-indexed iteration in which the normalisation failed.
        iteration: usize,
        /// Which vector could not be normalised.
        vector: VectorKind,
        /// The offending sum.
        sum: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_duplicate_state() {
        let e = MarkovError::DuplicateState {
            label: "Entry".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate state label: \"Entry\"");
    }

    #[test]
    fn error_empty_state_space() {
        let e = MarkovError::EmptyStateSpace;
        assert_eq!(e.to_string(), "state space must contain at least one state");
    }

    #[test]
    fn error_invalid_state() {
        let e = MarkovError::InvalidState {
            label: "Checkout".to_string(),
        };
        assert_eq!(e.to_string(), "unknown state: \"Checkout\"");
    }

    #[test]
    fn error_invalid_argument() {
        let e = MarkovError::InvalidArgument {
            reason: "num_iterations must be > 0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid argument: num_iterations must be > 0"
        );
    }

    #[test]
    fn error_invalid_weight() {
        let e = MarkovError::InvalidWeight {
            label: "Pay".to_string(),
            value: -2.0,
        };
        assert_eq!(
            e.to_string(),
            "invalid weight for state \"Pay\": -2 (must be finite and >= 0)"
        );
    }

    #[test]
    fn error_length_mismatch() {
        let e = MarkovError::LengthMismatch {
            expected: 11,
            got: 10,
        };
        assert_eq!(e.to_string(), "length mismatch: expected 11 values, got 10");
    }

    #[test]
    fn error_degenerate_distribution() {
        let e = MarkovError::DegenerateDistribution {
            iteration: 3,
            vector: VectorKind::Weighted,
            sum: 0.0,
        };
        assert_eq!(
            e.to_string(),
            "degenerate weighted distribution at iteration 3: sum is 0"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<MarkovError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<MarkovError>();
    }
}
