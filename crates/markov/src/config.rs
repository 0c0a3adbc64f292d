//! Configuration for the propagation engine.

use std::fmt;
use std::str::FromStr;

use crate::error::MarkovError;

/// What the engine does when a normalisation sum is zero or non-finite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Abort the run with [`MarkovError::DegenerateDistribution`].
    #[default]
    Error,
    /// Divide anyway and let the resulting NaN values flow through every
    /// later iteration unchanged.
    Propagate,
}

impl fmt::Display for DegeneratePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Propagate => f.write_str("propagate"),
        }
    }
}

impl FromStr for DegeneratePolicy {
    type Err = MarkovError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "propagate" | "nan" => Ok(Self::Propagate),
            other => Err(MarkovError::InvalidArgument {
                reason: format!("unknown degenerate policy: {other:?}"),
            }),
        }
    }
}

/// Configuration for [`PropagationEngine`](crate::PropagationEngine).
///
/// # Example
///
/// ```
/// use navchain_markov::{DegeneratePolicy, EngineConfig};
///
/// let config = EngineConfig::new().with_degenerate_policy(DegeneratePolicy::Propagate);
/// assert_eq!(config.degenerate_policy(), DegeneratePolicy::Propagate);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    degenerate_policy: DegeneratePolicy,
}

impl EngineConfig {
    /// Creates a configuration with defaults (`degenerate_policy = Error`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the degenerate-normalisation policy.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Returns the degenerate-normalisation policy.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }
}
