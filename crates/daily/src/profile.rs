//! Three-component Gaussian mixtures describing activity over a day.

use std::fmt;
use std::str::FromStr;

use statrs::distribution::{Continuous, Normal};

use crate::error::DailyError;

/// Length of the periodic domain in hours.
pub const DAY_HOURS: f64 = 24.0;

/// One weighted normal bump of a [`DailyProfile`], in hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianComponent {
    weight: f64,
    mean: f64,
    sd: f64,
}

impl GaussianComponent {
    /// Validates and creates a component.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::InvalidComponent`] unless `weight` is finite and
    /// non-negative, `mean` is finite, and `sd` is finite and positive.
    pub fn new(weight: f64, mean: f64, sd: f64) -> Result<Self, DailyError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(DailyError::InvalidComponent {
                reason: format!("weight must be finite and >= 0, got {weight}"),
            });
        }
        if !mean.is_finite() {
            return Err(DailyError::InvalidComponent {
                reason: format!("mean must be finite, got {mean}"),
            });
        }
        if !sd.is_finite() || sd <= 0.0 {
            return Err(DailyError::InvalidComponent {
                reason: format!("sd must be finite and > 0, got {sd}"),
            });
        }
        Ok(Self { weight, mean, sd })
    }

    /// Mixture weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Peak hour.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Spread in hours.
    pub fn sd(&self) -> f64 {
        self.sd
    }
}

/// Named built-in profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Working day: morning, lunch and evening peaks.
    Normal,
    /// Weekend day: a heavier and later evening peak.
    Weekend,
}

impl Preset {
    /// The mixture for this preset.
    pub fn profile(self) -> DailyProfile {
        match self {
            Self::Normal => DailyProfile::normal_day(),
            Self::Weekend => DailyProfile::weekend_day(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Weekend => f.write_str("weekend"),
        }
    }
}

impl FromStr for Preset {
    type Err = DailyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" | "n" | "weekday" => Ok(Self::Normal),
            "weekend" | "w" => Ok(Self::Weekend),
            other => Err(DailyError::UnknownPreset {
                name: other.to_string(),
            }),
        }
    }
}

/// A three-component Gaussian mixture over the hours of a day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyProfile {
    components: [GaussianComponent; 3],
}

impl DailyProfile {
    /// Creates a profile from three validated components.
    pub fn new(components: [GaussianComponent; 3]) -> Self {
        Self { components }
    }

    /// Working-day activity: peaks at 08:00, 12:00 and 19:00.
    pub fn normal_day() -> Self {
        Self::new([
            GaussianComponent {
                weight: 1.2 / 6.0,
                mean: 8.0,
                sd: 1.0,
            },
            GaussianComponent {
                weight: 2.0 / 6.0,
                mean: 12.0,
                sd: 1.5,
            },
            GaussianComponent {
                weight: 2.2 / 6.0,
                mean: 19.0,
                sd: 1.8,
            },
        ])
    }

    /// Weekend activity: peaks at 08:00, 12:00 and a wider one at 20:00.
    pub fn weekend_day() -> Self {
        Self::new([
            GaussianComponent {
                weight: 1.2 / 6.0,
                mean: 8.0,
                sd: 1.0,
            },
            GaussianComponent {
                weight: 2.0 / 6.0,
                mean: 12.0,
                sd: 1.5,
            },
            GaussianComponent {
                weight: 3.1 / 6.0,
                mean: 20.0,
                sd: 2.3,
            },
        ])
    }

    /// The mixture components.
    pub fn components(&self) -> &[GaussianComponent; 3] {
        &self.components
    }

    /// Unnormalised activity at hour `x` with the profile replicated at every
    /// extra time-zone `shift`.
    ///
    /// # Errors
    ///
    /// Returns [`DailyError::InvalidShift`] for a non-finite shift.
    pub fn density(&self, x: f64, shifts: &[f64]) -> Result<f64, DailyError> {
        Ok(self.kernel(shifts)?.eval(x))
    }

    /// Expands the mixture into every folded and shifted normal it contributes.
    ///
    /// Each offset is applied at `-24`, `0` and `+24` hours so mass near
    /// midnight wraps around. Zero shifts are dropped since the base term
    /// already covers them.
    pub(crate) fn kernel(&self, shifts: &[f64]) -> Result<Kernel, DailyError> {
        let mut offsets = vec![0.0];
        for &shift in shifts {
            if !shift.is_finite() {
                return Err(DailyError::InvalidShift { shift });
            }
            if shift != 0.0 {
                offsets.push(shift);
            }
        }

        let mut terms = Vec::with_capacity(offsets.len() * 3 * self.components.len());
        for offset in offsets {
            for fold in [-DAY_HOURS, 0.0, DAY_HOURS] {
                for c in &self.components {
                    let normal = Normal::new(c.mean + offset + fold, c.sd).map_err(|e| {
                        DailyError::InvalidComponent {
                            reason: e.to_string(),
                        }
                    })?;
                    terms.push((c.weight, normal));
                }
            }
        }
        Ok(Kernel { terms })
    }
}

/// Flattened list of `(weight, normal)` terms.
pub(crate) struct Kernel {
    terms: Vec<(f64, Normal)>,
}

impl Kernel {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|(w, n)| w * n.pdf(x)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn component_validation() {
        assert!(GaussianComponent::new(0.5, 8.0, 1.0).is_ok());
        assert!(GaussianComponent::new(0.0, 8.0, 1.0).is_ok());
        assert!(GaussianComponent::new(-0.1, 8.0, 1.0).is_err());
        assert!(GaussianComponent::new(0.5, f64::NAN, 1.0).is_err());
        assert!(GaussianComponent::new(0.5, 8.0, 0.0).is_err());
        assert!(GaussianComponent::new(0.5, 8.0, f64::INFINITY).is_err());
    }

    #[test]
    fn presets_match_parameters() {
        let n = DailyProfile::normal_day();
        assert_relative_eq!(n.components()[2].weight(), 2.2 / 6.0);
        assert_relative_eq!(n.components()[2].mean(), 19.0);
        let w = DailyProfile::weekend_day();
        assert_relative_eq!(w.components()[2].sd(), 2.3);
        assert_relative_eq!(w.components()[2].mean(), 20.0);
    }

    #[test]
    fn preset_parse() {
        assert_eq!("Normal".parse::<Preset>().unwrap(), Preset::Normal);
        assert_eq!("w".parse::<Preset>().unwrap(), Preset::Weekend);
        assert!("holiday".parse::<Preset>().is_err());
        assert_eq!(Preset::Weekend.profile(), DailyProfile::weekend_day());
    }

    #[test]
    fn density_is_periodic() {
        let p = DailyProfile::normal_day();
        let a = p.density(0.0, &[]).unwrap();
        let b = p.density(24.0, &[]).unwrap();
        assert_relative_eq!(a, b, max_relative = 1e-6);
    }

    #[test]
    fn single_component_matches_normal_pdf() {
        let c = GaussianComponent::new(1.0, 12.0, 1.0).unwrap();
        let zero = GaussianComponent::new(0.0, 12.0, 1.0).unwrap();
        let p = DailyProfile::new([c, zero, zero]);
        let expected = 1.0 / (2.0 * std::f64::consts::PI).sqrt();
        // The +-24h folds contribute ~e^-288 at the peak.
        assert_relative_eq!(p.density(12.0, &[]).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn zero_shift_is_ignored() {
        let p = DailyProfile::weekend_day();
        assert_relative_eq!(
            p.density(9.5, &[0.0]).unwrap(),
            p.density(9.5, &[]).unwrap()
        );
    }

    #[test]
    fn shift_adds_mass() {
        let p = DailyProfile::normal_day();
        let base = p.density(9.0, &[]).unwrap();
        let shifted = p.density(9.0, &[1.0]).unwrap();
        assert!(shifted > base);
    }

    #[test]
    fn non_finite_shift_rejected() {
        let p = DailyProfile::normal_day();
        assert!(matches!(
            p.density(1.0, &[f64::NAN]),
            Err(DailyError::InvalidShift { .. })
        ));
    }
}
