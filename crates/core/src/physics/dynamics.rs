//! Forces and Newton's laws
//!
//! Newton's second law, dry friction on flat and inclined surfaces, the
//! inclined plane with an initial velocity, and the ideal Atwood machine.

use crate::config::SolverConfig;
use crate::core_types::sampling::Trajectory;
use crate::core_types::units::Degrees;
use crate::core_types::validation::{checked_div, finite, non_negative, positive, within};
use crate::error::{MechanicsError, Result};
use crate::physics::kinematics::MotionSample;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Which of `F = m·a` to solve for, with the two known quantities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NewtonUnknown {
    Force { mass: f64, acceleration: f64 },
    Mass { force: f64, acceleration: f64 },
    Acceleration { force: f64, mass: f64 },
}

/// All three quantities of `F = m·a` after solving
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewtonSolution {
    pub force: f64,
    pub mass: f64,
    pub acceleration: f64,
}

/// Solve Newton's second law for the missing quantity
pub fn solve_newton(unknown: NewtonUnknown) -> Result<NewtonSolution> {
    let solution = match unknown {
        NewtonUnknown::Force { mass, acceleration } => {
            let mass = positive("mass", mass)?;
            let acceleration = finite("acceleration", acceleration)?;
            NewtonSolution {
                force: mass * acceleration,
                mass,
                acceleration,
            }
        }
        NewtonUnknown::Mass {
            force,
            acceleration,
        } => {
            let force = finite("force", force)?;
            let acceleration = finite("acceleration", acceleration)?;
            let mass = checked_div(force, acceleration, "acceleration")?;
            // Force and acceleration pointing opposite ways imply negative mass
            let mass = positive("mass", mass)?;
            NewtonSolution {
                force,
                mass,
                acceleration,
            }
        }
        NewtonUnknown::Acceleration { force, mass } => {
            let force = finite("force", force)?;
            let acceleration = checked_div(force, mass, "mass")?;
            let mass = positive("mass", mass)?;
            NewtonSolution {
                force,
                mass,
                acceleration,
            }
        }
    };
    debug!(?solution, "newton's second law");
    Ok(solution)
}

/// Whether the applied force overcomes static friction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrictionState {
    /// Static friction matches the applied force exactly
    Static { friction: f64 },
    /// Kinetic friction opposes sliding
    Sliding {
        friction: f64,
        net_force: f64,
        acceleration: f64,
    },
}

impl FrictionState {
    /// Friction force actually acting on the body
    #[must_use]
    pub fn friction(&self) -> f64 {
        match *self {
            FrictionState::Static { friction } | FrictionState::Sliding { friction, .. } => {
                friction
            }
        }
    }

    /// Resulting acceleration, zero while static
    #[must_use]
    pub fn acceleration(&self) -> f64 {
        match *self {
            FrictionState::Static { .. } => 0.0,
            FrictionState::Sliding { acceleration, .. } => acceleration,
        }
    }
}

/// One point of the friction response curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrictionSample {
    pub applied: f64,
    pub friction: f64,
    pub acceleration: f64,
}

/// Dry friction analysis for one applied force
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friction {
    pub normal_force: f64,
    pub max_static: f64,
    pub kinetic: f64,
    pub state: FrictionState,
    /// Friction and acceleration against applied force over `[0, 2·max_static]`
    pub response: Trajectory<FrictionSample>,
}

/// Body of known mass resting on a rough surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub mass: f64,
    pub static_coefficient: f64,
    pub kinetic_coefficient: f64,
    /// Surface tilt, 0° for flat ground
    pub incline: Degrees,
}

impl Surface {
    /// Flat surface
    #[must_use]
    pub fn flat(mass: f64, static_coefficient: f64, kinetic_coefficient: f64) -> Self {
        Self {
            mass,
            static_coefficient,
            kinetic_coefficient,
            incline: Degrees::new(0.0),
        }
    }

    /// Same surface tilted by `angle`
    #[must_use]
    pub fn tilted(mut self, angle: Degrees) -> Self {
        self.incline = angle;
        self
    }

    fn state_for(&self, applied: f64, max_static: f64, kinetic: f64) -> FrictionState {
        if applied <= max_static {
            FrictionState::Static { friction: applied }
        } else {
            let net_force = applied - kinetic;
            FrictionState::Sliding {
                friction: kinetic,
                net_force,
                acceleration: net_force / self.mass,
            }
        }
    }
}

/// Static/kinetic friction for a force `applied` along the surface
///
/// # Formula
/// ```text
/// N = m·g·cos θ
/// F ≤ μs·N  →  static, f = F
/// F > μs·N  →  a = (F - μk·N) / m
/// ```
pub fn friction(surface: &Surface, applied: f64, config: &SolverConfig) -> Result<Friction> {
    positive("mass", surface.mass)?;
    non_negative("static coefficient", surface.static_coefficient)?;
    non_negative("kinetic coefficient", surface.kinetic_coefficient)?;
    within("incline", *surface.incline, 0.0, 90.0, "must be within [0°, 90°]")?;
    let applied = non_negative("applied force", applied)?;
    let g = positive("gravity", config.gravity)?;

    let normal_force = surface.mass * g * surface.incline.to_radians().cos();
    let max_static = surface.static_coefficient * normal_force;
    let kinetic = surface.kinetic_coefficient * normal_force;
    let state = surface.state_for(applied, max_static, kinetic);

    let response = Trajectory::sample(0.0, 2.0 * max_static, config.samples, |force| {
        let state = surface.state_for(force, max_static, kinetic);
        FrictionSample {
            applied: force,
            friction: state.friction(),
            acceleration: state.acceleration(),
        }
    });

    debug!(applied, normal_force, max_static, ?state, "friction");
    Ok(Friction {
        normal_force,
        max_static,
        kinetic,
        state,
        response,
    })
}

/// Where the body comes to rest when friction and gravity oppose its motion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub time: f64,
    pub distance: f64,
}

/// Inclined plane analysis; positive direction is up the slope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InclinedPlane {
    pub weight: f64,
    pub normal_force: f64,
    /// Down-slope weight component (magnitude)
    pub parallel_component: f64,
    /// Magnitude of the friction force acting
    pub friction: f64,
    pub net_force: f64,
    pub acceleration: f64,
    pub stop: Option<Stop>,
    /// Position along the slope and velocity until `1.5·t_stop` or the default horizon
    pub trajectory: Trajectory<MotionSample>,
}

/// Block of `mass` on a slope of `angle` with friction `mu`, launched at `v0` (up positive)
///
/// Friction direction is chosen from the sign of `v0` and kept for the whole
/// sampled interval. A body starting at rest stays put when `μ·N` can hold it.
pub fn inclined_plane(
    mass: f64,
    angle: Degrees,
    mu: f64,
    v0: f64,
    config: &SolverConfig,
) -> Result<InclinedPlane> {
    let mass = positive("mass", mass)?;
    within("incline", *angle, 0.0, 90.0, "must be within [0°, 90°]")?;
    let mu = non_negative("friction coefficient", mu)?;
    let v0 = finite("initial velocity", v0)?;
    let g = positive("gravity", config.gravity)?;

    let rad = angle.to_radians();
    let weight = mass * g;
    let normal_force = weight * rad.cos();
    let parallel_component = weight * rad.sin();
    let limit = mu * normal_force;

    let (friction, net_force) = if v0 > 0.0 {
        (limit, -parallel_component - limit)
    } else if v0 < 0.0 {
        (limit, -parallel_component + limit)
    } else if parallel_component <= limit {
        (parallel_component, 0.0)
    } else {
        (limit, -parallel_component + limit)
    };
    let acceleration = net_force / mass;

    let stop = (v0 != 0.0 && acceleration * v0 < 0.0).then(|| {
        let time = -v0 / acceleration;
        Stop {
            time,
            distance: v0 * time + 0.5 * acceleration * time * time,
        }
    });
    let horizon = stop.map_or(config.default_horizon, |stop| 1.5 * stop.time);

    let trajectory = Trajectory::sample(0.0, horizon, config.samples, |time| MotionSample {
        time,
        position: v0 * time + 0.5 * acceleration * time * time,
        velocity: v0 + acceleration * time,
    });

    debug!(
        mass,
        angle = *angle,
        mu,
        v0,
        net_force,
        acceleration,
        "inclined plane"
    );
    Ok(InclinedPlane {
        weight,
        normal_force,
        parallel_component,
        friction,
        net_force,
        acceleration,
        stop,
        trajectory,
    })
}

/// Which side of the pulley moves down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AtwoodDirection {
    FirstDescends,
    SecondDescends,
    Balanced,
}

/// Ideal Atwood machine result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atwood {
    /// Signed, positive when the first mass descends
    pub acceleration: f64,
    pub tension: f64,
    pub direction: AtwoodDirection,
}

/// Two masses over a massless, frictionless pulley
///
/// # Formula
/// ```text
/// a = (m1 - m2) / (m1 + m2) · g
/// T = m2·(g + a) = m1·(g - a)
/// ```
pub fn atwood(m1: f64, m2: f64, config: &SolverConfig) -> Result<Atwood> {
    let m1 = positive("first mass", m1)?;
    let m2 = positive("second mass", m2)?;
    let g = positive("gravity", config.gravity)?;

    let acceleration = (m1 - m2) / (m1 + m2) * g;
    let tension = m2 * (g + acceleration);
    let check = m1 * (g - acceleration);

    trace!(tension, check, "atwood tension forms");
    // m1·(g - a) cancels when one mass dwarfs the other, so bound by the input scale
    if (tension - check).abs() > config.tolerance * (m1 + m2) * g {
        warn!(tension, check, "atwood tension forms disagree");
        return Err(MechanicsError::InconsistentResult {
            check: "atwood tension",
            lhs: tension,
            rhs: check,
        });
    }

    let direction = if acceleration > 0.0 {
        AtwoodDirection::FirstDescends
    } else if acceleration < 0.0 {
        AtwoodDirection::SecondDescends
    } else {
        AtwoodDirection::Balanced
    };

    debug!(m1, m2, acceleration, tension, ?direction, "atwood machine");
    Ok(Atwood {
        acceleration,
        tension,
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_newton_each_unknown() {
        let f = solve_newton(NewtonUnknown::Force {
            mass: 10.0,
            acceleration: 2.0,
        })
        .unwrap();
        assert_eq!(f.force, 20.0);

        let m = solve_newton(NewtonUnknown::Mass {
            force: 20.0,
            acceleration: 2.0,
        })
        .unwrap();
        assert_eq!(m.mass, 10.0);

        let a = solve_newton(NewtonUnknown::Acceleration {
            force: 20.0,
            mass: 10.0,
        })
        .unwrap();
        assert_eq!(a.acceleration, 2.0);
    }

    #[test]
    fn test_newton_zero_divisors() {
        assert_eq!(
            solve_newton(NewtonUnknown::Mass {
                force: 5.0,
                acceleration: 0.0
            }),
            Err(MechanicsError::DivisionByZero {
                quantity: "acceleration"
            })
        );
        assert_eq!(
            solve_newton(NewtonUnknown::Acceleration {
                force: 5.0,
                mass: 0.0
            }),
            Err(MechanicsError::DivisionByZero { quantity: "mass" })
        );
    }

    #[test]
    fn test_newton_negative_mass_rejected() {
        let result = solve_newton(NewtonUnknown::Mass {
            force: 5.0,
            acceleration: -1.0,
        });
        assert!(matches!(
            result,
            Err(MechanicsError::Validation {
                parameter: "mass",
                ..
            })
        ));
    }

    #[test]
    fn test_static_friction_equals_applied_force() {
        let surface = Surface::flat(10.0, 0.5, 0.3);
        let result = friction(&surface, 30.0, &config()).unwrap();
        assert!((result.max_static - 49.05).abs() < 1e-9);
        assert_eq!(result.state, FrictionState::Static { friction: 30.0 });
    }

    #[test]
    fn test_sliding_uses_kinetic_coefficient() {
        let surface = Surface::flat(10.0, 0.5, 0.3);
        let result = friction(&surface, 60.0, &config()).unwrap();
        match result.state {
            FrictionState::Sliding {
                friction,
                acceleration,
                ..
            } => {
                assert!((friction - 29.43).abs() < 1e-9);
                assert!((acceleration - (60.0 - 29.43) / 10.0).abs() < 1e-9);
            }
            FrictionState::Static { .. } => panic!("60 N exceeds max static friction"),
        }
    }

    #[test]
    fn test_friction_on_incline_reduces_normal_force() {
        let surface = Surface::flat(10.0, 0.5, 0.3).tilted(Degrees::new(60.0));
        let result = friction(&surface, 0.0, &config()).unwrap();
        assert!((result.normal_force - 49.05).abs() < 1e-9);
    }

    #[test]
    fn test_friction_response_curve_jumps_at_max_static() {
        let surface = Surface::flat(10.0, 0.5, 0.3);
        let result = friction(&surface, 0.0, &config()).unwrap();
        let last = result.response.last().unwrap();
        assert!((last.applied - 2.0 * result.max_static).abs() < 1e-9);
        assert_eq!(last.friction, result.kinetic);
        assert_eq!(result.response[0].acceleration, 0.0);
    }

    #[test]
    fn test_incline_upward_launch_stops() {
        let plane = inclined_plane(5.0, Degrees::new(30.0), 0.2, 10.0, &config()).unwrap();
        assert!(plane.acceleration < 0.0);
        let stop = plane.stop.unwrap();
        assert!((stop.time - 10.0 / -plane.acceleration).abs() < 1e-12);
        let last = plane.trajectory.last().unwrap();
        assert!((last.time - 1.5 * stop.time).abs() < 1e-12);
    }

    #[test]
    fn test_incline_downward_motion_friction_points_up() {
        let plane = inclined_plane(5.0, Degrees::new(30.0), 0.2, -2.0, &config()).unwrap();
        let expected = -plane.parallel_component + 0.2 * plane.normal_force;
        assert!((plane.net_force - expected).abs() < 1e-12);
        assert!(plane.stop.is_none());
    }

    #[test]
    fn test_incline_at_rest_held_by_friction() {
        let plane = inclined_plane(5.0, Degrees::new(10.0), 0.5, 0.0, &config()).unwrap();
        assert_eq!(plane.net_force, 0.0);
        assert!((plane.friction - plane.parallel_component).abs() < 1e-12);
        assert!(plane.trajectory.iter().all(|s| s.position == 0.0));
    }

    #[test]
    fn test_incline_rejects_steep_angle() {
        assert!(inclined_plane(5.0, Degrees::new(95.0), 0.2, 0.0, &config()).is_err());
    }

    #[test]
    fn test_atwood_direction() {
        let up = atwood(3.0, 5.0, &config()).unwrap();
        assert_eq!(up.direction, AtwoodDirection::SecondDescends);
        assert!(up.acceleration < 0.0);

        let still = atwood(4.0, 4.0, &config()).unwrap();
        assert_eq!(still.direction, AtwoodDirection::Balanced);
        assert!((still.tension - 4.0 * 9.81).abs() < 1e-12);
    }

    #[test]
    fn test_atwood_extreme_mass_ratio() {
        for (m1, m2) in [(100.0, 1e-6), (10.0, 1e-7), (1e4, 1e-5)] {
            let machine = atwood(m1, m2, &config()).unwrap();
            assert_eq!(machine.direction, AtwoodDirection::FirstDescends);
            assert!(machine.acceleration < 9.81);
            let expected = 2.0 * m1 * m2 * 9.81 / (m1 + m2);
            assert!((machine.tension - expected).abs() < 1e-9 * expected);
        }
    }
}
