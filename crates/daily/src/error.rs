//! Error types for the navchain-daily crate.

/// Error type for all fallible operations in the navchain-daily crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DailyError {
    /// Returned when a mixture component has an invalid weight, mean or spread.
    #[error("invalid mixture component: {reason}")]
    InvalidComponent {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the sample grid has fewer than two points.
    #[error("invalid resolution: {resolution} (must be >= 2)")]
    InvalidResolution {
        /// The rejected resolution.
        resolution: usize,
    },

    /// Returned when a time-zone shift is not finite.
    #[error("invalid time shift: {shift} (must be finite)")]
    InvalidShift {
        /// The rejected shift in hours.
        shift: f64,
    },

    /// Returned when the hourly normalisation sum is zero or non-finite.
    #[error("curve cannot be normalised: hourly sum is {sum}")]
    DegenerateCurve {
        /// The offending sum.
        sum: f64,
    },

    /// Returned when a preset name is not recognised.
    #[error("unknown day preset: {name:?} (expected \"normal\" or \"weekend\")")]
    UnknownPreset {
        /// The rejected name.
        name: String,
    },
}
