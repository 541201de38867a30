//! Tagged dispatch over every solver
//!
//! A [`Calculation`] names one formula together with its inputs. Evaluating
//! it routes to the matching solver and wraps the result in an [`Outcome`].
//! Requests share no state, so [`evaluate_batch`] fans them out over the
//! rayon thread pool.
//!
//! ```
//! use mechanics_core::calculation::{Calculation, Outcome};
//! use mechanics_core::config::SolverConfig;
//!
//! let request = Calculation::Atwood { m1: 5.0, m2: 3.0 };
//! let Outcome::Atwood(result) = request.evaluate(&SolverConfig::default()).unwrap() else {
//!     unreachable!()
//! };
//! assert!((result.tension - 36.7875).abs() < 1e-9);
//! ```

use crate::config::SolverConfig;
use crate::core_types::units::Degrees;
use crate::core_types::vector::{Vec2, Vec3, Vector};
use crate::error::Result;
use crate::physics::conversion::{self, UnitCategory};
use crate::physics::dynamics::{
    self, Atwood, Friction, InclinedPlane, NewtonSolution, NewtonUnknown, Surface,
};
use crate::physics::energy::{self, EnergyCurve, PendulumSwing, Power, RollerCoaster, Work};
use crate::physics::kinematics::{
    self, AcceleratedMotion, Centripetal, CircularMotion, FreeFall, HorizontalLaunch, Projectile,
    RiverCrossing, RotationRate, UniformMotion,
};
use crate::physics::momentum::{
    self, Body1D, Body2D, Collision1D, Collision2D, CollisionKind, Impulse,
};
use crate::physics::oscillations::{self, PendulumOscillation, SpringMass, SpringOscillation};
use crate::physics::statics::{
    self, Beam, BeamReactions, CenterOfMass, InertiaShape, PointMass, RotationalSolution,
    RotationalUnknown, Shape, Torque,
};
use crate::physics::vectors::{self, DotProduct, Polar, Spherical};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, trace};

/// Topic a calculation belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    Conversion,
    Vectors,
    Kinematics,
    Dynamics,
    Energy,
    Momentum,
    Statics,
    Oscillations,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Conversion => "Unit conversion",
            Topic::Vectors => "Vectors",
            Topic::Kinematics => "Kinematics",
            Topic::Dynamics => "Dynamics",
            Topic::Energy => "Work and energy",
            Topic::Momentum => "Momentum",
            Topic::Statics => "Statics and rotation",
            Topic::Oscillations => "Oscillations",
        };
        f.write_str(name)
    }
}

/// One formula request with its named inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    Convert {
        value: f64,
        category: UnitCategory,
        from: String,
        to: String,
    },
    VectorAdd {
        a: Vector,
        b: Vector,
    },
    VectorSubtract {
        a: Vector,
        b: Vector,
    },
    VectorMagnitude {
        v: Vector,
    },
    VectorDot {
        a: Vector,
        b: Vector,
    },
    VectorCross {
        a: Vector,
        b: Vector,
    },
    VectorNormalize {
        v: Vector,
    },
    ToPolar {
        v: Vec2,
    },
    FromPolar {
        magnitude: f64,
        angle: Degrees,
    },
    ToSpherical {
        v: Vec3,
    },
    FromSpherical {
        radius: f64,
        polar: Degrees,
        azimuth: Degrees,
    },
    ConstantVelocity {
        x0: f64,
        v: f64,
        t: f64,
    },
    ConstantAcceleration {
        x0: f64,
        v0: f64,
        a: f64,
        t: f64,
    },
    FreeFall {
        h0: f64,
        v0: f64,
    },
    Projectile {
        v0: f64,
        angle: Degrees,
        h0: f64,
    },
    HorizontalLaunch {
        v0: f64,
        h0: f64,
    },
    RiverCrossing {
        swimmer_speed: f64,
        current: f64,
        width: f64,
        angle: Degrees,
    },
    CircularMotion {
        rate: RotationRate,
        radius: f64,
        mass: f64,
    },
    Centripetal {
        mass: f64,
        speed: f64,
        radius: f64,
    },
    Newton {
        unknown: NewtonUnknown,
    },
    Friction {
        surface: Surface,
        applied: f64,
    },
    InclinedPlane {
        mass: f64,
        angle: Degrees,
        mu: f64,
        v0: f64,
    },
    Atwood {
        m1: f64,
        m2: f64,
    },
    Work {
        force: f64,
        distance: f64,
        angle: Degrees,
    },
    KineticEnergy {
        mass: f64,
        speed: f64,
    },
    GravitationalEnergy {
        mass: f64,
        height: f64,
    },
    SpringEnergy {
        stiffness: f64,
        displacement: f64,
    },
    PendulumSwing {
        mass: f64,
        length: f64,
        amplitude: Degrees,
    },
    RollerCoaster {
        mass: f64,
        h1: f64,
        v1: f64,
        h2: f64,
    },
    PowerFromWork {
        work: f64,
        time: f64,
    },
    PowerFromForce {
        force: f64,
        speed: f64,
    },
    Momentum {
        mass: f64,
        velocity: f64,
    },
    Impulse {
        mass: f64,
        v1: f64,
        v2: f64,
        dt: f64,
    },
    Collision {
        first: Body1D,
        second: Body1D,
        collision: CollisionKind,
    },
    PlanarCollision {
        first: Body2D,
        second: Body2D,
        collision: CollisionKind,
    },
    Torque {
        arm: f64,
        force: f64,
        angle: Degrees,
    },
    Beam {
        beam: Beam,
    },
    CenterOfMass {
        points: Vec<PointMass>,
    },
    ShapeCentroid {
        shape: Shape,
    },
    MomentOfInertia {
        mass: f64,
        shape: InertiaShape,
    },
    Rotation {
        unknown: RotationalUnknown,
    },
    RotationalEnergy {
        inertia: f64,
        angular_velocity: f64,
    },
    SpringMass {
        system: SpringMass,
        duration: f64,
    },
    Pendulum {
        mass: f64,
        length: f64,
        amplitude: Degrees,
        duration: f64,
    },
}

/// Structured result of one [`Calculation`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// A single number (converted value, magnitude, energy, momentum, inertia)
    Scalar(f64),
    Vector(Vector),
    Spatial(Vec3),
    Planar(Vec2),
    Dot(DotProduct),
    Polar(Polar),
    Spherical(Spherical),
    UniformMotion(UniformMotion),
    AcceleratedMotion(AcceleratedMotion),
    FreeFall(FreeFall),
    Projectile(Projectile),
    HorizontalLaunch(HorizontalLaunch),
    RiverCrossing(RiverCrossing),
    CircularMotion(CircularMotion),
    Centripetal(Centripetal),
    Newton(NewtonSolution),
    Friction(Friction),
    InclinedPlane(InclinedPlane),
    Atwood(Atwood),
    Work(Work),
    EnergyCurve(EnergyCurve),
    PendulumSwing(PendulumSwing),
    RollerCoaster(RollerCoaster),
    Power(Power),
    Impulse(Impulse),
    Collision(Collision1D),
    PlanarCollision(Collision2D),
    Torque(Torque),
    Beam(BeamReactions),
    CenterOfMass(CenterOfMass),
    Rotation(RotationalSolution),
    SpringMass(SpringOscillation),
    Pendulum(PendulumOscillation),
}

impl Calculation {
    /// Topic group for menus and logging
    #[must_use]
    pub fn topic(&self) -> Topic {
        use Calculation as C;
        match self {
            C::Convert { .. } => Topic::Conversion,
            C::VectorAdd { .. }
            | C::VectorSubtract { .. }
            | C::VectorMagnitude { .. }
            | C::VectorDot { .. }
            | C::VectorCross { .. }
            | C::VectorNormalize { .. }
            | C::ToPolar { .. }
            | C::FromPolar { .. }
            | C::ToSpherical { .. }
            | C::FromSpherical { .. } => Topic::Vectors,
            C::ConstantVelocity { .. }
            | C::ConstantAcceleration { .. }
            | C::FreeFall { .. }
            | C::Projectile { .. }
            | C::HorizontalLaunch { .. }
            | C::RiverCrossing { .. }
            | C::CircularMotion { .. }
            | C::Centripetal { .. } => Topic::Kinematics,
            C::Newton { .. } | C::Friction { .. } | C::InclinedPlane { .. } | C::Atwood { .. } => {
                Topic::Dynamics
            }
            C::Work { .. }
            | C::KineticEnergy { .. }
            | C::GravitationalEnergy { .. }
            | C::SpringEnergy { .. }
            | C::PendulumSwing { .. }
            | C::RollerCoaster { .. }
            | C::PowerFromWork { .. }
            | C::PowerFromForce { .. } => Topic::Energy,
            C::Momentum { .. }
            | C::Impulse { .. }
            | C::Collision { .. }
            | C::PlanarCollision { .. } => Topic::Momentum,
            C::Torque { .. }
            | C::Beam { .. }
            | C::CenterOfMass { .. }
            | C::ShapeCentroid { .. }
            | C::MomentOfInertia { .. }
            | C::Rotation { .. }
            | C::RotationalEnergy { .. } => Topic::Statics,
            C::SpringMass { .. } | C::Pendulum { .. } => Topic::Oscillations,
        }
    }

    /// Route to the solver for this formula
    pub fn evaluate(&self, config: &SolverConfig) -> Result<Outcome> {
        use Calculation as C;
        config.validate()?;
        trace!(topic = %self.topic(), "dispatching calculation");

        let outcome = match self {
            C::Convert {
                value,
                category,
                from,
                to,
            } => Outcome::Scalar(conversion::convert(*value, *category, from, to)?),
            C::VectorAdd { a, b } => Outcome::Vector(vectors::add(a, b)),
            C::VectorSubtract { a, b } => Outcome::Vector(vectors::subtract(a, b)),
            C::VectorMagnitude { v } => Outcome::Scalar(vectors::magnitude(v)),
            C::VectorDot { a, b } => Outcome::Dot(vectors::dot(a, b)),
            C::VectorCross { a, b } => Outcome::Spatial(vectors::cross(a, b)?),
            C::VectorNormalize { v } => Outcome::Vector(vectors::normalize(v)?),
            C::ToPolar { v } => Outcome::Polar(vectors::to_polar(v)),
            C::FromPolar { magnitude, angle } => {
                Outcome::Planar(vectors::from_polar(*magnitude, *angle)?)
            }
            C::ToSpherical { v } => Outcome::Spherical(vectors::to_spherical(v)),
            C::FromSpherical {
                radius,
                polar,
                azimuth,
            } => Outcome::Spatial(vectors::from_spherical(*radius, *polar, *azimuth)?),
            C::ConstantVelocity { x0, v, t } => {
                Outcome::UniformMotion(kinematics::constant_velocity(*x0, *v, *t, config)?)
            }
            C::ConstantAcceleration { x0, v0, a, t } => Outcome::AcceleratedMotion(
                kinematics::constant_acceleration(*x0, *v0, *a, *t, config)?,
            ),
            C::FreeFall { h0, v0 } => Outcome::FreeFall(kinematics::free_fall(*h0, *v0, config)?),
            C::Projectile { v0, angle, h0 } => {
                Outcome::Projectile(kinematics::projectile(*v0, *angle, *h0, config)?)
            }
            C::HorizontalLaunch { v0, h0 } => {
                Outcome::HorizontalLaunch(kinematics::horizontal_launch(*v0, *h0, config)?)
            }
            C::RiverCrossing {
                swimmer_speed,
                current,
                width,
                angle,
            } => Outcome::RiverCrossing(kinematics::river_crossing(
                *swimmer_speed,
                *current,
                *width,
                *angle,
                config,
            )?),
            C::CircularMotion { rate, radius, mass } => Outcome::CircularMotion(
                kinematics::uniform_circular_motion(*rate, *radius, *mass, config)?,
            ),
            C::Centripetal {
                mass,
                speed,
                radius,
            } => Outcome::Centripetal(kinematics::centripetal(*mass, *speed, *radius)?),
            C::Newton { unknown } => Outcome::Newton(dynamics::solve_newton(*unknown)?),
            C::Friction { surface, applied } => {
                Outcome::Friction(dynamics::friction(surface, *applied, config)?)
            }
            C::InclinedPlane { mass, angle, mu, v0 } => Outcome::InclinedPlane(
                dynamics::inclined_plane(*mass, *angle, *mu, *v0, config)?,
            ),
            C::Atwood { m1, m2 } => Outcome::Atwood(dynamics::atwood(*m1, *m2, config)?),
            C::Work {
                force,
                distance,
                angle,
            } => Outcome::Work(energy::work(*force, *distance, *angle, config)?),
            C::KineticEnergy { mass, speed } => {
                Outcome::EnergyCurve(energy::kinetic_energy(*mass, *speed, config)?)
            }
            C::GravitationalEnergy { mass, height } => {
                Outcome::Scalar(energy::gravitational_energy(*mass, *height, config)?)
            }
            C::SpringEnergy {
                stiffness,
                displacement,
            } => Outcome::EnergyCurve(energy::spring_energy(*stiffness, *displacement, config)?),
            C::PendulumSwing {
                mass,
                length,
                amplitude,
            } => {
                Outcome::PendulumSwing(energy::pendulum_swing(*mass, *length, *amplitude, config)?)
            }
            C::RollerCoaster { mass, h1, v1, h2 } => {
                Outcome::RollerCoaster(energy::roller_coaster(*mass, *h1, *v1, *h2, config)?)
            }
            C::PowerFromWork { work, time } => {
                Outcome::Power(energy::power_from_work(*work, *time)?)
            }
            C::PowerFromForce { force, speed } => {
                Outcome::Power(energy::power_from_force(*force, *speed)?)
            }
            C::Momentum { mass, velocity } => {
                Outcome::Scalar(momentum::momentum(*mass, *velocity)?)
            }
            C::Impulse { mass, v1, v2, dt } => {
                Outcome::Impulse(momentum::impulse(*mass, *v1, *v2, *dt)?)
            }
            C::Collision {
                first,
                second,
                collision,
            } => Outcome::Collision(momentum::collide(*first, *second, *collision, config)?),
            C::PlanarCollision {
                first,
                second,
                collision,
            } => Outcome::PlanarCollision(momentum::collide_2d(*first, *second, *collision)?),
            C::Torque { arm, force, angle } => {
                Outcome::Torque(statics::torque(*arm, *force, *angle, config)?)
            }
            C::Beam { beam } => Outcome::Beam(statics::solve_beam(beam, config)?),
            C::CenterOfMass { points } => Outcome::CenterOfMass(statics::center_of_mass(points)?),
            C::ShapeCentroid { shape } => Outcome::CenterOfMass(statics::shape_centroid(shape)?),
            C::MomentOfInertia { mass, shape } => {
                Outcome::Scalar(statics::moment_of_inertia(*mass, *shape)?)
            }
            C::Rotation { unknown } => Outcome::Rotation(statics::solve_rotation(*unknown)?),
            C::RotationalEnergy {
                inertia,
                angular_velocity,
            } => Outcome::EnergyCurve(statics::rotational_energy(
                *inertia,
                *angular_velocity,
                config,
            )?),
            C::SpringMass { system, duration } => {
                Outcome::SpringMass(oscillations::spring_mass(*system, *duration, config)?)
            }
            C::Pendulum {
                mass,
                length,
                amplitude,
                duration,
            } => Outcome::Pendulum(oscillations::pendulum(
                *mass, *length, *amplitude, *duration, config,
            )?),
        };
        Ok(outcome)
    }
}

/// Evaluate independent requests in parallel, preserving input order
pub fn evaluate_batch(calculations: &[Calculation], config: &SolverConfig) -> Vec<Result<Outcome>> {
    debug!(count = calculations.len(), "evaluating batch");
    let results: Vec<Result<Outcome>> = calculations
        .par_iter()
        .map(|calculation| calculation.evaluate(config))
        .collect();
    let failed = results.iter().filter(|result| result.is_err()).count();
    info!(count = results.len(), failed, "batch evaluation complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechanicsError;

    #[test]
    fn test_topic_grouping() {
        let request = Calculation::FreeFall { h0: 10.0, v0: 0.0 };
        assert_eq!(request.topic(), Topic::Kinematics);
        let request = Calculation::Rotation {
            unknown: RotationalUnknown::Torque {
                inertia: 1.0,
                angular_acceleration: 1.0,
            },
        };
        assert_eq!(request.topic(), Topic::Statics);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_dispatch() {
        let config = SolverConfig::default().with_gravity(-1.0);
        let result = Calculation::Atwood { m1: 1.0, m2: 2.0 }.evaluate(&config);
        assert!(matches!(
            result,
            Err(MechanicsError::Validation {
                parameter: "gravity",
                ..
            })
        ));
    }

    #[test]
    fn test_scalar_outcome() {
        let request = Calculation::Convert {
            value: 1.0,
            category: UnitCategory::Time,
            from: "h".into(),
            to: "min".into(),
        };
        assert_eq!(
            request.evaluate(&SolverConfig::default()),
            Ok(Outcome::Scalar(60.0))
        );
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let requests = vec![
            Calculation::Momentum {
                mass: 2.0,
                velocity: 3.0,
            },
            Calculation::VectorNormalize {
                v: Vector::planar(0.0, 0.0),
            },
            Calculation::Momentum {
                mass: 4.0,
                velocity: 3.0,
            },
        ];
        let results = evaluate_batch(&requests, &SolverConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Ok(Outcome::Scalar(6.0)));
        assert!(results[1].is_err());
        assert_eq!(results[2], Ok(Outcome::Scalar(12.0)));
    }
}
