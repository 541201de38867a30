//! Solver configuration
//!
//! All solvers are pure functions of their inputs and a [`SolverConfig`].
//! The configuration carries what a presentation layer would otherwise keep
//! in global widget state: gravitational acceleration, sampling density for
//! plots, and the numeric thresholds that decide between a result, an error
//! and a warning.

use crate::core_types::units::Degrees;
use crate::error::{MechanicsError, Result};
use serde::{Deserialize, Serialize};

/// Standard gravity rounded to textbook precision (m/s²)
pub const EARTH_GRAVITY: f64 = 9.81;

/// Lunar surface gravity (m/s²)
pub const MOON_GRAVITY: f64 = 1.62;

/// Martian surface gravity (m/s²)
pub const MARS_GRAVITY: f64 = 3.71;

/// Jovian cloud-top gravity (m/s²)
pub const JUPITER_GRAVITY: f64 = 24.79;

/// Sampling density preset for trajectories
///
/// Each preset trades plot smoothness for the number of evaluated points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingQuality {
    /// 50 points, quick previews
    Draft,
    /// 200 points, the default chart resolution
    Standard,
    /// 500 points, smooth oscillation plots
    Fine,
}

impl SamplingQuality {
    /// Number of samples for this preset
    #[must_use]
    pub const fn samples(&self) -> usize {
        match self {
            Self::Draft => 50,
            Self::Standard => 200,
            Self::Fine => 500,
        }
    }
}

/// Parameters shared by every solver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Gravitational acceleration (m/s²)
    pub gravity: f64,
    /// Points per sampled trajectory
    pub samples: usize,
    /// Relative tolerance for internal consistency checks
    pub tolerance: f64,
    /// Pendulum amplitude above which the small-angle warning fires
    pub small_angle_threshold: Degrees,
    /// Relative speed (m/s) below which a restitution collision is "no collision"
    pub relative_velocity_epsilon: f64,
    /// Support separation (m) below which beam supports coincide
    pub min_support_separation: f64,
    /// Simulated interval (s) when a motion never comes to rest
    pub default_horizon: f64,
    /// Horizontal length (m) of the sampled roller-coaster profile
    pub coaster_track_length: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: EARTH_GRAVITY,
            samples: SamplingQuality::Standard.samples(),
            tolerance: 1e-9,
            small_angle_threshold: Degrees::new(15.0),
            relative_velocity_epsilon: 1e-3,
            min_support_separation: 1e-6,
            default_horizon: 5.0,
            coaster_track_length: 100.0,
        }
    }
}

impl SolverConfig {
    /// Earth surface defaults
    #[must_use]
    pub fn earth() -> Self {
        Self::default()
    }

    /// Lunar surface
    #[must_use]
    pub fn moon() -> Self {
        Self::default().with_gravity(MOON_GRAVITY)
    }

    /// Martian surface
    #[must_use]
    pub fn mars() -> Self {
        Self::default().with_gravity(MARS_GRAVITY)
    }

    /// Jovian cloud tops
    #[must_use]
    pub fn jupiter() -> Self {
        Self::default().with_gravity(JUPITER_GRAVITY)
    }

    /// Override gravitational acceleration
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Override the number of trajectory samples
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Use a sampling preset
    pub fn with_quality(mut self, quality: SamplingQuality) -> Self {
        self.samples = quality.samples();
        self
    }

    /// Check that the configuration can drive the solvers
    pub fn validate(&self) -> Result<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(MechanicsError::Validation {
                parameter: "gravity",
                value: self.gravity,
                constraint: "must be positive",
            });
        }
        if self.samples < 2 {
            return Err(MechanicsError::Validation {
                parameter: "samples",
                value: self.samples as f64,
                constraint: "must be at least 2",
            });
        }
        let thresholds = [
            ("tolerance", self.tolerance),
            ("relative_velocity_epsilon", self.relative_velocity_epsilon),
            ("min_support_separation", self.min_support_separation),
            ("default_horizon", self.default_horizon),
            ("coaster_track_length", self.coaster_track_length),
        ];
        for (parameter, value) in thresholds {
            if !(value.is_finite() && value > 0.0) {
                return Err(MechanicsError::Validation {
                    parameter,
                    value,
                    constraint: "must be positive",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SolverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity, 9.81);
        assert_eq!(config.samples, 200);
    }

    #[test]
    fn test_presets_change_gravity_only() {
        let moon = SolverConfig::moon();
        assert_eq!(moon.gravity, MOON_GRAVITY);
        assert_eq!(moon.samples, SolverConfig::earth().samples);
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let config = SolverConfig::default().with_gravity(0.0);
        assert!(matches!(
            config.validate(),
            Err(MechanicsError::Validation {
                parameter: "gravity",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_single_sample() {
        let config = SolverConfig::default().with_samples(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_quality_preset() {
        let config = SolverConfig::default().with_quality(SamplingQuality::Fine);
        assert_eq!(config.samples, 500);
    }
}
