//! Sampling a [`DailyProfile`] into a normalised activity curve.

use tracing::debug;

use crate::error::DailyError;
use crate::profile::{DAY_HOURS, DailyProfile};

/// Number of hourly sample points, 00:00 through 24:00 inclusive.
pub const HOURLY_POINTS: usize = 25;

/// Sampling options for [`DailyCurve::generate`].
///
/// # Example
///
/// ```
/// use navchain_daily::CurveConfig;
///
/// let config = CurveConfig::new().with_resolution(200).with_time_shifts(vec![1.0, 2.0]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct CurveConfig {
    resolution: usize,
    time_shifts: Vec<f64>,
}

impl CurveConfig {
    /// Defaults: `resolution = 500`, no extra time shifts.
    pub fn new() -> Self {
        Self {
            resolution: 500,
            time_shifts: Vec::new(),
        }
    }

    /// Sets the number of evenly spaced points over `[0, 24]`.
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the extra time-zone offsets, in hours.
    pub fn with_time_shifts(mut self, shifts: Vec<f64>) -> Self {
        self.time_shifts = shifts;
        self
    }

    /// Returns the sample grid size.
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns the extra time-zone offsets.
    pub fn time_shifts(&self) -> &[f64] {
        &self.time_shifts
    }

    /// Checks that the resolution is at least 2 and every shift is finite.
    pub fn validate(&self) -> Result<(), DailyError> {
        if self.resolution < 2 {
            return Err(DailyError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        if let Some(&shift) = self.time_shifts.iter().find(|s| !s.is_finite()) {
            return Err(DailyError::InvalidShift { shift });
        }
        Ok(())
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A day-activity curve sampled on a regular grid.
///
/// `y` is scaled so that the 25 integer-hour samples of the underlying
/// density sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCurve {
    x: Vec<f64>,
    y: Vec<f64>,
    hourly: Vec<(usize, f64)>,
}

impl DailyCurve {
    /// Evaluates `profile` on the grid described by `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`CurveConfig::validate`] errors, and
    /// [`DailyError::DegenerateCurve`] if the hourly density sum is zero
    /// (for example when every component weight is 0).
    #[tracing::instrument(skip_all, fields(resolution = config.resolution(), n_shifts = config.time_shifts().len()))]
    pub fn generate(profile: &DailyProfile, config: &CurveConfig) -> Result<Self, DailyError> {
        config.validate()?;
        let kernel = profile.kernel(config.time_shifts())?;

        let sum: f64 = (0..HOURLY_POINTS).map(|h| kernel.eval(h as f64)).sum();
        if !sum.is_finite() || sum <= 0.0 {
            return Err(DailyError::DegenerateCurve { sum });
        }

        let n = config.resolution();
        let last = (n - 1) as f64;
        let x: Vec<f64> = (0..n).map(|i| i as f64 * DAY_HOURS / last).collect();
        let y: Vec<f64> = x.iter().map(|&xi| kernel.eval(xi) / sum).collect();

        let hours = HOURLY_POINTS - 1;
        let hourly = (0..HOURLY_POINTS)
            .map(|h| (h, y[h * (n - 1) / hours]))
            .collect();

        debug!(norm = sum, "daily curve sampled");
        Ok(Self { x, y, hourly })
    }

    /// Sample hours, evenly spaced over `[0, 24]`.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Normalised activity at each sample hour.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// `(hour, activity)` for hours 0 through 24, read from the nearest grid
    /// point at or below each hour.
    pub fn hourly(&self) -> &[(usize, f64)] {
        &self.hourly
    }

    /// Hour in `0..24` with the highest hourly activity.
    pub fn peak_hour(&self) -> Option<usize> {
        self.hourly[..HOURLY_POINTS - 1]
            .iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|&(h, _)| h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::GaussianComponent;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let c = CurveConfig::new();
        assert_eq!(c.resolution(), 500);
        assert!(c.time_shifts().is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(matches!(
            CurveConfig::new().with_resolution(1).validate(),
            Err(DailyError::InvalidResolution { resolution: 1 })
        ));
        assert!(matches!(
            CurveConfig::new()
                .with_time_shifts(vec![1.0, f64::INFINITY])
                .validate(),
            Err(DailyError::InvalidShift { .. })
        ));
    }

    #[test]
    fn grid_spans_the_day() {
        let curve =
            DailyCurve::generate(&DailyProfile::normal_day(), &CurveConfig::new()).unwrap();
        assert_eq!(curve.x().len(), 500);
        assert_eq!(curve.y().len(), 500);
        assert_relative_eq!(curve.x()[0], 0.0);
        assert_eq!(curve.x()[499], 24.0);
    }

    #[test]
    fn hourly_indices_follow_grid() {
        let config = CurveConfig::new().with_resolution(49);
        let curve = DailyCurve::generate(&DailyProfile::normal_day(), &config).unwrap();
        // With 49 points every hour lands exactly on an even grid index.
        for &(h, v) in curve.hourly() {
            assert_relative_eq!(v, curve.y()[2 * h]);
        }
    }

    #[test]
    fn zero_weights_are_degenerate() {
        let z = GaussianComponent::new(0.0, 12.0, 1.0).unwrap();
        let p = DailyProfile::new([z, z, z]);
        assert!(matches!(
            DailyCurve::generate(&p, &CurveConfig::new()),
            Err(DailyError::DegenerateCurve { .. })
        ));
    }
}
