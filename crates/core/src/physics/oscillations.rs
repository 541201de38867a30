//! Simple harmonic motion
//!
//! Spring-mass oscillators are exact. The simple pendulum uses the
//! small-angle solution `θ(t) = θ0·cos(ωt)`, whose energy is only
//! approximately conserved; amplitudes above
//! [`SolverConfig::small_angle_threshold`] attach a [`Warning`] to the result.
//!
//! # Formula
//! ```text
//! spring:    ω = √(k/m),  x(t) = A·cos(ωt + φ)
//!            v(t) = -A·ω·sin(ωt + φ),  a(t) = -A·ω²·cos(ωt + φ)
//!            E = ½·k·A²
//! pendulum:  ω = √(g/L),  T = 2π/ω
//!            E = m·g·L·(1 - cos θ0)
//! ```

use crate::config::SolverConfig;
use crate::core_types::sampling::Trajectory;
use crate::core_types::units::{Degrees, Radians};
use crate::core_types::validation::{finite, positive, within};
use crate::error::{Result, Warning};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{debug, warn};

/// Oscillator state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorSample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub kinetic: f64,
    pub potential: f64,
}

/// Mass on an ideal spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringMass {
    pub mass: f64,
    pub stiffness: f64,
    pub amplitude: f64,
    pub phase: Degrees,
}

impl SpringMass {
    #[must_use]
    pub fn new(mass: f64, stiffness: f64, amplitude: f64) -> Self {
        Self {
            mass,
            stiffness,
            amplitude,
            phase: Degrees::new(0.0),
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: Degrees) -> Self {
        self.phase = phase;
        self
    }

    fn validate(&self) -> Result<()> {
        positive("mass", self.mass)?;
        positive("spring constant", self.stiffness)?;
        positive("amplitude", self.amplitude)?;
        finite("phase", *self.phase)?;
        Ok(())
    }

    /// `ω = √(k/m)`
    #[must_use]
    pub fn angular_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// State at time `t`
    #[must_use]
    pub fn state_at(&self, time: f64) -> OscillatorSample {
        let omega = self.angular_frequency();
        let (sin, cos) = (omega * time + *self.phase.to_radians()).sin_cos();
        let position = self.amplitude * cos;
        let velocity = -self.amplitude * omega * sin;
        OscillatorSample {
            time,
            position,
            velocity,
            acceleration: -self.amplitude * omega * omega * cos,
            kinetic: 0.5 * self.mass * velocity * velocity,
            potential: 0.5 * self.stiffness * position * position,
        }
    }
}

/// Spring-mass analysis over a simulated interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringOscillation {
    pub system: SpringMass,
    pub angular_frequency: f64,
    pub period: f64,
    pub frequency: f64,
    pub max_speed: f64,
    pub max_acceleration: f64,
    pub total_energy: f64,
    pub samples: Trajectory<OscillatorSample>,
}

impl SpringOscillation {
    /// State at an arbitrary instant, not limited to the sampled grid
    #[must_use]
    pub fn state_at(&self, time: f64) -> OscillatorSample {
        self.system.state_at(time)
    }
}

/// Sample a spring-mass oscillator over `[0, duration]`
pub fn spring_mass(
    system: SpringMass,
    duration: f64,
    config: &SolverConfig,
) -> Result<SpringOscillation> {
    system.validate()?;
    let duration = positive("duration", duration)?;

    let angular_frequency = system.angular_frequency();
    let period = TAU / angular_frequency;
    let amplitude = system.amplitude;

    debug!(
        mass = system.mass,
        stiffness = system.stiffness,
        angular_frequency,
        period,
        "spring-mass oscillator"
    );
    Ok(SpringOscillation {
        system,
        angular_frequency,
        period,
        frequency: 1.0 / period,
        max_speed: amplitude * angular_frequency,
        max_acceleration: amplitude * angular_frequency * angular_frequency,
        total_energy: 0.5 * system.stiffness * amplitude * amplitude,
        samples: Trajectory::sample(0.0, duration, config.samples, |t| system.state_at(t)),
    })
}

/// Pendulum state at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PendulumSample {
    pub time: f64,
    pub angle: Radians,
    /// θ'(t) in rad/s
    pub angular_velocity: f64,
    /// Bob position relative to the pivot
    pub x: f64,
    pub y: f64,
    /// Tangential velocity `L·θ'`
    pub velocity: f64,
    pub kinetic: f64,
    pub potential: f64,
}

/// Simple pendulum released from rest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimplePendulum {
    pub mass: f64,
    pub length: f64,
    pub amplitude: Degrees,
    pub gravity: f64,
}

impl SimplePendulum {
    /// `ω = √(g/L)`
    #[must_use]
    pub fn angular_frequency(&self) -> f64 {
        (self.gravity / self.length).sqrt()
    }

    /// State at time `t` under the small-angle solution
    #[must_use]
    pub fn state_at(&self, time: f64) -> PendulumSample {
        let omega = self.angular_frequency();
        let theta0 = *self.amplitude.to_radians();
        let (sin, cos) = (omega * time).sin_cos();
        let theta = theta0 * cos;
        let angular_velocity = -theta0 * omega * sin;
        let velocity = self.length * angular_velocity;
        PendulumSample {
            time,
            angle: Radians::new(theta),
            angular_velocity,
            x: self.length * theta.sin(),
            y: -self.length * theta.cos(),
            velocity,
            kinetic: 0.5 * self.mass * velocity * velocity,
            potential: self.mass * self.gravity * self.length * (1.0 - theta.cos()),
        }
    }
}

/// Pendulum analysis over a simulated interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumOscillation {
    pub system: SimplePendulum,
    pub angular_frequency: f64,
    pub period: f64,
    pub frequency: f64,
    pub total_energy: f64,
    /// Set when the amplitude is outside the small-angle regime
    pub warning: Option<Warning>,
    pub samples: Trajectory<PendulumSample>,
}

impl PendulumOscillation {
    /// State at an arbitrary instant
    #[must_use]
    pub fn state_at(&self, time: f64) -> PendulumSample {
        self.system.state_at(time)
    }
}

/// Sample a simple pendulum of `length` released at `amplitude` over `[0, duration]`
pub fn pendulum(
    mass: f64,
    length: f64,
    amplitude: Degrees,
    duration: f64,
    config: &SolverConfig,
) -> Result<PendulumOscillation> {
    let mass = positive("mass", mass)?;
    let length = positive("length", length)?;
    within("amplitude", *amplitude, 0.0, 90.0, "must be within [0°, 90°]")?;
    let duration = positive("duration", duration)?;
    let gravity = positive("gravity", config.gravity)?;

    let system = SimplePendulum {
        mass,
        length,
        amplitude,
        gravity,
    };
    let angular_frequency = system.angular_frequency();
    let period = TAU / angular_frequency;
    let total_energy = mass * gravity * length * (1.0 - amplitude.to_radians().cos());

    let warning = (amplitude > config.small_angle_threshold).then(|| {
        warn!(
            amplitude = *amplitude,
            threshold = *config.small_angle_threshold,
            "pendulum amplitude outside small-angle regime"
        );
        Warning::SmallAngleExceeded {
            angle: amplitude,
            threshold: config.small_angle_threshold,
        }
    });

    debug!(mass, length, angular_frequency, period, "simple pendulum");
    Ok(PendulumOscillation {
        system,
        angular_frequency,
        period,
        frequency: 1.0 / period,
        total_energy,
        warning,
        samples: Trajectory::sample(0.0, duration, config.samples, |t| system.state_at(t)),
    })
}
