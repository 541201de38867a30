//! Work, energy and power
//!
//! Energy-conservation solvers hold the total mechanical energy fixed and
//! split it between potential and kinetic energy at each sampled point:
//!
//! ```text
//! E        = KE₀ + PE₀
//! KE(p)    = max(E - PE(p), 0)
//! v(p)     = √(2·KE(p) / m)
//! ```
//!
//! The clamp only hides rounding along a sampled path. A target the body
//! cannot reach is reported as [`DomainError::UnreachableHeight`].

use crate::config::SolverConfig;
use crate::core_types::sampling::Trajectory;
use crate::core_types::units::Degrees;
use crate::core_types::validation::{finite, non_negative, positive, within};
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mechanical horsepower in watts
pub const WATTS_PER_HORSEPOWER: f64 = 745.7;

/// Whether a force helps or resists the displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkKind {
    /// Force has a component along the motion
    Positive,
    /// Force opposes the motion
    Negative,
    /// Force is perpendicular to the motion
    Zero,
}

/// Work done by a constant force
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Work {
    pub work: f64,
    pub kind: WorkKind,
}

/// Energy as a function of one input variable
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySample {
    pub variable: f64,
    pub energy: f64,
}

/// Energy value with a curve around it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyCurve {
    pub energy: f64,
    pub curve: Trajectory<EnergySample>,
}

/// `W = F·d·cos θ`
///
/// Work within `tolerance·|F·d|` of zero is classified as [`WorkKind::Zero`]
/// so that `cos 90°` rounding does not read as positive work.
pub fn work(force: f64, distance: f64, angle: Degrees, config: &SolverConfig) -> Result<Work> {
    let force = finite("force", force)?;
    let distance = non_negative("distance", distance)?;
    finite("angle", *angle)?;

    let scale = (force * distance).abs();
    let work = force * distance * angle.to_radians().cos();
    let kind = if work.abs() <= config.tolerance * scale {
        WorkKind::Zero
    } else if work > 0.0 {
        WorkKind::Positive
    } else {
        WorkKind::Negative
    };

    debug!(force, distance, angle = *angle, work, ?kind, "work");
    Ok(Work { work, kind })
}

/// `KE = ½·m·v²` with the curve over `[0, 2v]`
pub fn kinetic_energy(mass: f64, speed: f64, config: &SolverConfig) -> Result<EnergyCurve> {
    let mass = positive("mass", mass)?;
    let speed = finite("speed", speed)?.abs();

    let ke = |v: f64| 0.5 * mass * v * v;
    debug!(mass, speed, energy = ke(speed), "kinetic energy");
    Ok(EnergyCurve {
        energy: ke(speed),
        curve: Trajectory::sample(0.0, 2.0 * speed, config.samples, |v| EnergySample {
            variable: v,
            energy: ke(v),
        }),
    })
}

/// `PE = m·g·h`, with `h` measured from any chosen datum
pub fn gravitational_energy(mass: f64, height: f64, config: &SolverConfig) -> Result<f64> {
    let mass = positive("mass", mass)?;
    let height = finite("height", height)?;
    let g = positive("gravity", config.gravity)?;
    let energy = mass * g * height;
    debug!(mass, height, energy, "gravitational energy");
    Ok(energy)
}

/// `PE = ½·k·x²` with the curve over `[-2|x|, 2|x|]`
pub fn spring_energy(
    stiffness: f64,
    displacement: f64,
    config: &SolverConfig,
) -> Result<EnergyCurve> {
    let k = positive("spring constant", stiffness)?;
    let x = finite("displacement", displacement)?;

    let pe = |x: f64| 0.5 * k * x * x;
    let reach = 2.0 * x.abs();
    debug!(k, x, energy = pe(x), "spring energy");
    Ok(EnergyCurve {
        energy: pe(x),
        curve: Trajectory::sample(-reach, reach, config.samples, |x| EnergySample {
            variable: x,
            energy: pe(x),
        }),
    })
}

/// Bob state at one swing angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingSample {
    pub angle: Degrees,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub potential: f64,
    pub kinetic: f64,
    pub speed: f64,
}

/// Pendulum energy exchange over one swing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendulumSwing {
    /// Height of the release point above the lowest point
    pub max_height: f64,
    pub total_energy: f64,
    /// Speed at the lowest point
    pub max_speed: f64,
    /// Sampled over `[-θ0, θ0]`
    pub samples: Trajectory<SwingSample>,
}

/// Energy conservation for a pendulum released from rest at `amplitude`
///
/// No small-angle approximation is involved; heights come from the geometry.
pub fn pendulum_swing(
    mass: f64,
    length: f64,
    amplitude: Degrees,
    config: &SolverConfig,
) -> Result<PendulumSwing> {
    let mass = positive("mass", mass)?;
    let length = positive("length", length)?;
    within("amplitude", *amplitude, 0.0, 90.0, "must be within [0°, 90°]")?;
    let g = positive("gravity", config.gravity)?;

    let theta0 = *amplitude.to_radians();
    let max_height = length * (1.0 - theta0.cos());
    let total_energy = mass * g * max_height;
    let max_speed = (2.0 * g * max_height).sqrt();

    let samples = Trajectory::sample(-theta0, theta0, config.samples, |theta| {
        let height = length * (1.0 - theta.cos());
        let potential = mass * g * height;
        let kinetic = (total_energy - potential).max(0.0);
        SwingSample {
            angle: Degrees::new(theta.to_degrees()),
            x: length * theta.sin(),
            y: -length * theta.cos(),
            height,
            potential,
            kinetic,
            speed: (2.0 * kinetic / mass).sqrt(),
        }
    });

    debug!(mass, length, amplitude = *amplitude, total_energy, max_speed, "pendulum swing");
    Ok(PendulumSwing {
        max_height,
        total_energy,
        max_speed,
        samples,
    })
}

/// Cart state at one point of the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSample {
    pub x: f64,
    pub height: f64,
    pub potential: f64,
    pub kinetic: f64,
    pub speed: f64,
}

/// Roller coaster between two heights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollerCoaster {
    pub total_energy: f64,
    pub final_potential: f64,
    pub final_kinetic: f64,
    pub final_speed: f64,
    /// Profile `h(x) = h1 - (h1 - h2)·(x/L)²` over the configured track length
    pub track: Trajectory<TrackSample>,
}

/// Cart of `mass` leaving height `h1` at speed `v1` and arriving at height `h2`
pub fn roller_coaster(
    mass: f64,
    h1: f64,
    v1: f64,
    h2: f64,
    config: &SolverConfig,
) -> Result<RollerCoaster> {
    let mass = positive("mass", mass)?;
    let h1 = non_negative("initial height", h1)?;
    let v1 = non_negative("initial speed", v1)?;
    let h2 = non_negative("final height", h2)?;
    let g = positive("gravity", config.gravity)?;
    let length = positive("track length", config.coaster_track_length)?;

    let total_energy = 0.5 * mass * v1 * v1 + mass * g * h1;
    let final_potential = mass * g * h2;
    let final_kinetic = total_energy - final_potential;
    if final_kinetic < 0.0 {
        debug!(total_energy, final_potential, "coaster cannot reach final height");
        return Err(DomainError::UnreachableHeight {
            shortfall: -final_kinetic,
        }
        .into());
    }

    let track = Trajectory::sample(0.0, length, config.samples, |x| {
        let height = h1 - (h1 - h2) * (x / length).powi(2);
        let potential = mass * g * height;
        let kinetic = (total_energy - potential).max(0.0);
        TrackSample {
            x,
            height,
            potential,
            kinetic,
            speed: (2.0 * kinetic / mass).sqrt(),
        }
    });

    let final_speed = (2.0 * final_kinetic / mass).sqrt();
    debug!(mass, h1, v1, h2, total_energy, final_speed, "roller coaster");
    Ok(RollerCoaster {
        total_energy,
        final_potential,
        final_kinetic,
        final_speed,
        track,
    })
}

/// Power in the units the calculators report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Power {
    pub watts: f64,
    pub kilowatts: f64,
    pub horsepower: f64,
}

impl From<f64> for Power {
    fn from(watts: f64) -> Self {
        Self {
            watts,
            kilowatts: watts / 1000.0,
            horsepower: watts / WATTS_PER_HORSEPOWER,
        }
    }
}

/// `P = W / t`
pub fn power_from_work(work: f64, time: f64) -> Result<Power> {
    let work = finite("work", work)?;
    let time = positive("time", time)?;
    debug!(work, time, "power from work");
    Ok(Power::from(work / time))
}

/// `P = F·v`
pub fn power_from_force(force: f64, speed: f64) -> Result<Power> {
    let force = finite("force", force)?;
    let speed = non_negative("speed", speed)?;
    debug!(force, speed, "power from force");
    Ok(Power::from(force * speed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechanicsError;

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_work_sign() {
        let along = work(50.0, 10.0, Degrees::new(0.0), &config()).unwrap();
        assert_eq!(along.work, 500.0);
        assert_eq!(along.kind, WorkKind::Positive);

        let against = work(50.0, 10.0, Degrees::new(180.0), &config()).unwrap();
        assert_eq!(against.kind, WorkKind::Negative);
    }

    #[test]
    fn test_perpendicular_force_does_no_work() {
        let result = work(50.0, 10.0, Degrees::new(90.0), &config()).unwrap();
        assert_eq!(result.kind, WorkKind::Zero);
        assert!(result.work.abs() < 1e-9);
    }

    #[test]
    fn test_kinetic_energy_curve() {
        let ke = kinetic_energy(10.0, 5.0, &config()).unwrap();
        assert_eq!(ke.energy, 125.0);
        let last = ke.curve.last().unwrap();
        assert_eq!(last.variable, 10.0);
        assert_eq!(last.energy, 500.0);
    }

    #[test]
    fn test_gravitational_energy() {
        let pe = gravitational_energy(5.0, 10.0, &config()).unwrap();
        assert!((pe - 490.5).abs() < 1e-9);
    }

    #[test]
    fn test_spring_energy_curve_is_symmetric() {
        let pe = spring_energy(100.0, -0.5, &config()).unwrap();
        assert_eq!(pe.energy, 12.5);
        let first = pe.curve.first().unwrap();
        let last = pe.curve.last().unwrap();
        assert_eq!(first.variable, -1.0);
        assert_eq!(first.energy, last.energy);
    }

    #[test]
    fn test_pendulum_swing_energy_is_constant() {
        let swing = pendulum_swing(1.0, 2.0, Degrees::new(60.0), &config()).unwrap();
        assert!((swing.max_height - 1.0).abs() < 1e-12);
        for sample in &swing.samples {
            let total = sample.potential + sample.kinetic;
            assert!((total - swing.total_energy).abs() < 1e-9);
        }
        let speeds = swing.samples.column(|s| s.speed);
        let fastest = speeds.iter().copied().fold(0.0, f64::max);
        assert!(fastest <= swing.max_speed + 1e-9);
    }

    #[test]
    fn test_roller_coaster_final_speed() {
        let ride = roller_coaster(500.0, 50.0, 0.0, 10.0, &config()).unwrap();
        let expected = (2.0 * 9.81 * 40.0_f64).sqrt();
        assert!((ride.final_speed - expected).abs() < 1e-9);
        let end = ride.track.last().unwrap();
        assert!((end.height - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_roller_coaster_unreachable_height() {
        let err = roller_coaster(500.0, 10.0, 0.0, 50.0, &config()).unwrap_err();
        match err {
            MechanicsError::Domain(DomainError::UnreachableHeight { shortfall }) => {
                assert!((shortfall - 500.0 * 9.81 * 40.0).abs() < 1e-6);
            }
            other => panic!("expected unreachable height, got {other:?}"),
        }
    }

    #[test]
    fn test_power_units() {
        let p = power_from_work(1000.0, 10.0).unwrap();
        assert_eq!(p.watts, 100.0);
        assert_eq!(p.kilowatts, 0.1);
        assert!((p.horsepower - 100.0 / 745.7).abs() < 1e-12);
        assert!(power_from_work(1000.0, 0.0).is_err());
        assert_eq!(power_from_force(100.0, 5.0).unwrap().watts, 500.0);
    }
}
