//! Day-activity curves from three-component Gaussian mixtures.
//!
//! A [`DailyProfile`] places three weighted normal bumps over the 24 hours
//! of a day. [`DailyCurve::generate`] folds the mixture periodically at
//! `+-24` hours, optionally replicates it for extra time zones, and samples it
//! on a regular grid normalised by its integer-hour samples.
//!
//! ```rust
//! use navchain_daily::{CurveConfig, DailyCurve, DailyProfile};
//!
//! let curve = DailyCurve::generate(&DailyProfile::normal_day(), &CurveConfig::new()).unwrap();
//! assert_eq!(curve.hourly().len(), 25);
//! assert_eq!(curve.peak_hour(), Some(12));
//! ```

pub mod curve;
pub mod error;
pub mod profile;

pub use curve::{CurveConfig, DailyCurve, HOURLY_POINTS};
pub use error::DailyError;
pub use profile::{DAY_HOURS, DailyProfile, GaussianComponent, Preset};
