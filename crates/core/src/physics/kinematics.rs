//! One- and two-dimensional kinematics
//!
//! Closed-form motion under constant velocity, constant acceleration and
//! uniform gravity, plus relative-velocity river crossings and uniform
//! circular motion. Every solver returns its derived quantities together
//! with a sampled [`Trajectory`] for plotting.
//!
//! # Conventions
//! - Heights are measured upward from the landing surface (y = 0)
//! - Launch angles are measured from the horizontal
//! - Gravity comes from [`SolverConfig::gravity`] and points down

use crate::config::SolverConfig;
use crate::core_types::sampling::Trajectory;
use crate::core_types::units::{Degrees, Radians};
use crate::core_types::validation::{finite, non_negative, positive};
use crate::core_types::vector::Vec2;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// Position and velocity along a line at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
}

/// Position and velocity in the vertical plane at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileSample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Constant-velocity motion evaluated at time `t`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformMotion {
    pub position: f64,
    /// Sampled over `[0, 1.5·t]` so the chart extends past the query time
    pub trajectory: Trajectory<MotionSample>,
}

/// Constant-acceleration motion evaluated at time `t`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceleratedMotion {
    pub velocity: f64,
    pub position: f64,
    pub trajectory: Trajectory<MotionSample>,
}

/// Vertical launch or drop until the body reaches the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeFall {
    pub time_to_impact: f64,
    /// Signed, upward positive
    pub impact_velocity: f64,
    /// `position` holds the height above ground
    pub trajectory: Trajectory<MotionSample>,
}

/// Angled launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub horizontal_velocity: f64,
    pub vertical_velocity: f64,
    pub time_to_apex: f64,
    pub max_height: f64,
    /// Horizontal position of the apex
    pub apex_distance: f64,
    pub flight_time: f64,
    pub range: f64,
    pub trajectory: Trajectory<ProjectileSample>,
}

/// Horizontal launch from a height
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLaunch {
    pub flight_time: f64,
    pub range: f64,
    pub impact_speed: f64,
    pub trajectory: Trajectory<ProjectileSample>,
}

/// Point on a swimmer's path; x downstream, y across the river
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSample {
    pub time: f64,
    pub x: f64,
    pub y: f64,
}

/// River-crossing relative-velocity problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiverCrossing {
    pub cross_stream_speed: f64,
    /// Swimmer velocity plus current, along the stream
    pub downstream_speed: f64,
    pub net_speed: f64,
    pub crossing_time: f64,
    pub drift: f64,
    pub path: Trajectory<PathSample>,
}

/// The one rotation-rate quantity the caller knows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotationRate {
    /// Period T (s)
    Period(f64),
    /// Frequency f (Hz)
    Frequency(f64),
    /// Angular velocity ω (rad/s)
    AngularVelocity(f64),
}

/// Point on a circular path with its velocity and centripetal acceleration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularSample {
    pub angle: Radians,
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
}

/// Uniform circular motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularMotion {
    pub period: f64,
    pub frequency: f64,
    pub angular_velocity: f64,
    pub speed: f64,
    pub centripetal_acceleration: f64,
    pub centripetal_force: f64,
    pub path: Trajectory<CircularSample>,
}

/// Centripetal requirement for a body moving at a given speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centripetal {
    pub acceleration: f64,
    pub force: f64,
}

/// Positive root of `h0 + v0·t - ½g·t² = 0`
///
/// ```text
/// t = (v0 + √(v0² + 2·g·h0)) / g
/// ```
fn time_to_ground(h0: f64, v0: f64, g: f64) -> Result<f64> {
    let discriminant = v0 * v0 + 2.0 * g * h0;
    if discriminant < 0.0 {
        return Err(DomainError::NeverLands { discriminant }.into());
    }
    let t = (v0 + discriminant.sqrt()) / g;
    if t < 0.0 {
        // Starts below ground moving down
        return Err(DomainError::NeverLands { discriminant }.into());
    }
    Ok(t)
}

/// `x(t) = x0 + v·t`
pub fn constant_velocity(x0: f64, v: f64, t: f64, config: &SolverConfig) -> Result<UniformMotion> {
    let x0 = finite("initial position", x0)?;
    let v = finite("velocity", v)?;
    let t = non_negative("time", t)?;

    let position = x0 + v * t;
    let trajectory = Trajectory::sample(0.0, 1.5 * t, config.samples, |time| MotionSample {
        time,
        position: x0 + v * time,
        velocity: v,
    });

    debug!(x0, v, t, position, "constant velocity");
    Ok(UniformMotion {
        position,
        trajectory,
    })
}

/// `v(t) = v0 + a·t`, `x(t) = x0 + v0·t + ½a·t²`
pub fn constant_acceleration(
    x0: f64,
    v0: f64,
    a: f64,
    t: f64,
    config: &SolverConfig,
) -> Result<AcceleratedMotion> {
    let x0 = finite("initial position", x0)?;
    let v0 = finite("initial velocity", v0)?;
    let a = finite("acceleration", a)?;
    let t = non_negative("time", t)?;

    let state = |time: f64| MotionSample {
        time,
        position: x0 + v0 * time + 0.5 * a * time * time,
        velocity: v0 + a * time,
    };
    let end = state(t);

    debug!(x0, v0, a, t, position = end.position, "constant acceleration");
    Ok(AcceleratedMotion {
        velocity: end.velocity,
        position: end.position,
        trajectory: Trajectory::sample(0.0, t, config.samples, state),
    })
}

/// Vertical launch (upward positive `v0`) or drop from height `h0`
pub fn free_fall(h0: f64, v0: f64, config: &SolverConfig) -> Result<FreeFall> {
    let h0 = finite("initial height", h0)?;
    let v0 = finite("initial velocity", v0)?;
    let g = positive("gravity", config.gravity)?;

    let time_to_impact = time_to_ground(h0, v0, g)?;
    let impact_velocity = v0 - g * time_to_impact;

    let trajectory = Trajectory::sample(0.0, time_to_impact, config.samples, |time| {
        MotionSample {
            time,
            position: h0 + v0 * time - 0.5 * g * time * time,
            velocity: v0 - g * time,
        }
    });

    debug!(h0, v0, time_to_impact, impact_velocity, "free fall");
    Ok(FreeFall {
        time_to_impact,
        impact_velocity,
        trajectory,
    })
}

/// Angled launch with speed `v0` at `angle` above the horizontal from height `h0`
///
/// # Formula
/// ```text
/// t_apex = v0y / g
/// h_max  = h0 + v0y² / (2g)
/// t_f    = (v0y + √(v0y² + 2·g·h0)) / g
/// R      = v0x · t_f
/// ```
pub fn projectile(v0: f64, angle: Degrees, h0: f64, config: &SolverConfig) -> Result<Projectile> {
    let v0 = positive("initial speed", v0)?;
    finite("launch angle", *angle)?;
    let h0 = finite("initial height", h0)?;
    let g = positive("gravity", config.gravity)?;

    let rad = angle.to_radians();
    let v0x = v0 * rad.cos();
    let v0y = v0 * rad.sin();

    // A downward launch peaks at the launch point
    let time_to_apex = (v0y / g).max(0.0);
    let max_height = h0 + v0y.max(0.0).powi(2) / (2.0 * g);
    let flight_time = time_to_ground(h0, v0y, g)?;
    let range = v0x * flight_time;

    let trajectory = Trajectory::sample(0.0, flight_time, config.samples, |time| {
        ProjectileSample {
            time,
            x: v0x * time,
            y: h0 + v0y * time - 0.5 * g * time * time,
            vx: v0x,
            vy: v0y - g * time,
        }
    });

    debug!(v0, angle = *angle, h0, max_height, flight_time, range, "projectile");
    Ok(Projectile {
        horizontal_velocity: v0x,
        vertical_velocity: v0y,
        time_to_apex,
        max_height,
        apex_distance: v0x * time_to_apex,
        flight_time,
        range,
        trajectory,
    })
}

/// Horizontal launch with speed `v0` from height `h0`
pub fn horizontal_launch(v0: f64, h0: f64, config: &SolverConfig) -> Result<HorizontalLaunch> {
    let v0 = non_negative("initial speed", v0)?;
    let h0 = non_negative("initial height", h0)?;
    let g = positive("gravity", config.gravity)?;

    let flight_time = (2.0 * h0 / g).sqrt();
    let range = v0 * flight_time;
    let impact_speed = (v0 * v0 + (g * flight_time).powi(2)).sqrt();

    let trajectory = Trajectory::sample(0.0, flight_time, config.samples, |time| {
        ProjectileSample {
            time,
            x: v0 * time,
            y: h0 - 0.5 * g * time * time,
            vx: v0,
            vy: -g * time,
        }
    });

    debug!(v0, h0, flight_time, range, impact_speed, "horizontal launch");
    Ok(HorizontalLaunch {
        flight_time,
        range,
        impact_speed,
        trajectory,
    })
}

/// Swimmer crossing a river of `width` against a `current`
///
/// `angle` is measured from the downstream direction, so 90° aims straight
/// across and angles above 90° aim upstream.
pub fn river_crossing(
    swimmer_speed: f64,
    current: f64,
    width: f64,
    angle: Degrees,
    config: &SolverConfig,
) -> Result<RiverCrossing> {
    let swimmer_speed = positive("swimmer speed", swimmer_speed)?;
    let current = finite("current speed", current)?;
    let width = positive("river width", width)?;
    finite("swim angle", *angle)?;

    let rad = angle.to_radians();
    let along = swimmer_speed * rad.cos();
    let cross_stream_speed = swimmer_speed * rad.sin();

    // sin(180°) rounds to a tiny positive value
    if cross_stream_speed <= swimmer_speed * config.tolerance {
        return Err(DomainError::NeverCrosses { cross_stream_speed }.into());
    }

    let downstream_speed = along + current;
    let crossing_time = width / cross_stream_speed;
    let drift = downstream_speed * crossing_time;
    let net_speed = downstream_speed.hypot(cross_stream_speed);

    let path = Trajectory::sample(0.0, crossing_time, config.samples, |time| PathSample {
        time,
        x: downstream_speed * time,
        y: cross_stream_speed * time,
    });

    debug!(swimmer_speed, current, width, crossing_time, drift, "river crossing");
    Ok(RiverCrossing {
        cross_stream_speed,
        downstream_speed,
        net_speed,
        crossing_time,
        drift,
        path,
    })
}

/// Uniform circular motion of a body of `mass` on a circle of `radius`
///
/// # Formula
/// ```text
/// ω = 2π/T = 2πf,  v = ω·r,  a_c = ω²·r,  F = m·a_c
/// ```
pub fn uniform_circular_motion(
    rate: RotationRate,
    radius: f64,
    mass: f64,
    config: &SolverConfig,
) -> Result<CircularMotion> {
    let radius = positive("radius", radius)?;
    let mass = positive("mass", mass)?;

    let (period, frequency, angular_velocity) = match rate {
        RotationRate::Period(period) => {
            let period = positive("period", period)?;
            (period, 1.0 / period, TAU / period)
        }
        RotationRate::Frequency(frequency) => {
            let frequency = positive("frequency", frequency)?;
            (1.0 / frequency, frequency, TAU * frequency)
        }
        RotationRate::AngularVelocity(omega) => {
            let omega = positive("angular velocity", omega)?;
            (TAU / omega, omega / TAU, omega)
        }
    };

    let speed = angular_velocity * radius;
    let centripetal_acceleration = angular_velocity * angular_velocity * radius;
    let centripetal_force = mass * centripetal_acceleration;

    let path = Trajectory::sample(0.0, TAU, config.samples, |theta| {
        let (sin, cos) = theta.sin_cos();
        CircularSample {
            angle: Radians::new(theta),
            position: Vec2::new(radius * cos, radius * sin),
            velocity: Vec2::new(-speed * sin, speed * cos),
            acceleration: Vec2::new(
                -centripetal_acceleration * cos,
                -centripetal_acceleration * sin,
            ),
        }
    });

    debug!(period, angular_velocity, speed, centripetal_acceleration, "circular motion");
    Ok(CircularMotion {
        period,
        frequency,
        angular_velocity,
        speed,
        centripetal_acceleration,
        centripetal_force,
        path,
    })
}

/// `a_c = v²/r`, `F = m·a_c`
pub fn centripetal(mass: f64, speed: f64, radius: f64) -> Result<Centripetal> {
    let mass = positive("mass", mass)?;
    let speed = non_negative("speed", speed)?;
    let radius = positive("radius", radius)?;

    let acceleration = speed * speed / radius;
    debug!(mass, speed, radius, acceleration, "centripetal");
    Ok(Centripetal {
        acceleration,
        force: mass * acceleration,
    })
}
