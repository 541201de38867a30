//! Statics and rigid-body rotation
//!
//! Torque, two-support beam equilibrium, centres of mass for point masses
//! and composite rectangles, moments of inertia, `τ = I·α`, and rotational
//! kinetic energy. Torques are positive counterclockwise.

use crate::config::SolverConfig;
use crate::core_types::sampling::Trajectory;
use crate::core_types::units::Degrees;
use crate::core_types::validation::{checked_div, finite, non_negative, positive, within};
use crate::core_types::vector::Vec2;
use crate::error::{DomainError, Result};
use crate::physics::energy::{EnergyCurve, EnergySample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Direction a torque turns a body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationSense {
    Counterclockwise,
    Clockwise,
    None,
}

/// Torque about a pivot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torque {
    pub torque: f64,
    pub sense: RotationSense,
}

/// `τ = r·F·sin θ`
pub fn torque(arm: f64, force: f64, angle: Degrees, config: &SolverConfig) -> Result<Torque> {
    let arm = non_negative("lever arm", arm)?;
    let force = finite("force", force)?;
    finite("angle", *angle)?;

    let torque = arm * force * angle.to_radians().sin();
    let sense = if torque.abs() <= config.tolerance * (arm * force).abs() {
        RotationSense::None
    } else if torque > 0.0 {
        RotationSense::Counterclockwise
    } else {
        RotationSense::Clockwise
    };

    debug!(arm, force, angle = *angle, torque, ?sense, "torque");
    Ok(Torque { torque, sense })
}

/// Downward force at a position along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Distance from the left end (m)
    pub position: f64,
    /// Downward force (N)
    pub force: f64,
}

/// Uniform beam resting on two supports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beam {
    pub length: f64,
    /// Self-weight acts at the midpoint
    pub mass: f64,
    pub support_a: f64,
    pub support_b: f64,
    pub loads: Vec<PointLoad>,
}

/// Support reactions of a beam in equilibrium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamReactions {
    pub reaction_a: f64,
    pub reaction_b: f64,
    pub beam_weight: f64,
    pub total_downward: f64,
}

/// Solve the two support reactions by taking moments about support A
///
/// # Formula
/// ```text
/// R_B = [Σ Fᵢ·(xᵢ - x_A) + W·(L/2 - x_A)] / (x_B - x_A)
/// R_A = ΣF + W - R_B
/// ```
pub fn solve_beam(beam: &Beam, config: &SolverConfig) -> Result<BeamReactions> {
    let length = positive("beam length", beam.length)?;
    let mass = non_negative("beam mass", beam.mass)?;
    let support_a = finite("support A position", beam.support_a)?;
    let support_b = finite("support B position", beam.support_b)?;
    let g = positive("gravity", config.gravity)?;

    for load in &beam.loads {
        within("load position", load.position, 0.0, length, "must lie on the beam")?;
        finite("load force", load.force)?;
    }

    let separation = support_b - support_a;
    if separation.abs() < config.min_support_separation {
        return Err(DomainError::CoincidentSupports {
            separation: separation.abs(),
        }
        .into());
    }

    let beam_weight = mass * g;
    let load_moment: f64 = beam
        .loads
        .iter()
        .map(|load| load.force * (load.position - support_a))
        .sum();
    let weight_moment = beam_weight * (length / 2.0 - support_a);

    let total_downward = beam_weight + beam.loads.iter().map(|load| load.force).sum::<f64>();
    let reaction_b = (load_moment + weight_moment) / separation;
    let reaction_a = total_downward - reaction_b;

    debug!(
        loads = beam.loads.len(),
        total_downward, reaction_a, reaction_b, "beam equilibrium"
    );
    Ok(BeamReactions {
        reaction_a,
        reaction_b,
        beam_weight,
        total_downward,
    })
}

/// Mass at a planar position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMass {
    pub mass: f64,
    pub position: Vec2,
}

impl PointMass {
    #[must_use]
    pub fn new(mass: f64, x: f64, y: f64) -> Self {
        Self {
            mass,
            position: Vec2::new(x, y),
        }
    }
}

/// Weighted centre of a set of masses or areas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterOfMass {
    /// Total mass, or total area for composite shapes
    pub total: f64,
    pub position: Vec2,
}

/// `x_cm = Σ mᵢ·xᵢ / Σ mᵢ`, same for y
pub fn center_of_mass(points: &[PointMass]) -> Result<CenterOfMass> {
    if points.is_empty() {
        return Err(DomainError::EmptyInput {
            what: "point masses",
        }
        .into());
    }

    let mut total = 0.0;
    let mut moment = Vec2::zeros();
    for point in points {
        let mass = non_negative("mass", point.mass)?;
        finite("position x", point.position.x)?;
        finite("position y", point.position.y)?;
        total += mass;
        moment += point.position * mass;
    }

    let position = Vec2::new(
        checked_div(moment.x, total, "total mass")?,
        checked_div(moment.y, total, "total mass")?,
    );
    debug!(count = points.len(), total, x = position.x, y = position.y, "center of mass");
    Ok(CenterOfMass { total, position })
}

/// Axis-aligned rectangle of uniform density, anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            width,
            height,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[must_use]
    pub fn centroid(&self) -> Vec2 {
        self.origin + Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Plane shapes built from rectangles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle {
        width: f64,
        height: f64,
    },
    /// Base `w1×h1` on the ground with an upright `w2×h2` on its left end
    LShape {
        base_width: f64,
        base_height: f64,
        upright_width: f64,
        upright_height: f64,
    },
    /// Vertical web `w2×h2` with a flange `w1×h1` centred on top of it
    TShape {
        flange_width: f64,
        flange_height: f64,
        web_width: f64,
        web_height: f64,
    },
}

impl Shape {
    /// Decompose into primitive rectangles
    #[must_use]
    pub fn rectangles(&self) -> Vec<Rectangle> {
        match *self {
            Shape::Rectangle { width, height } => vec![Rectangle::new(0.0, 0.0, width, height)],
            Shape::LShape {
                base_width,
                base_height,
                upright_width,
                upright_height,
            } => vec![
                Rectangle::new(0.0, 0.0, base_width, base_height),
                Rectangle::new(0.0, base_height, upright_width, upright_height),
            ],
            Shape::TShape {
                flange_width,
                flange_height,
                web_width,
                web_height,
            } => vec![
                Rectangle::new(
                    (flange_width - web_width) / 2.0,
                    0.0,
                    web_width,
                    web_height,
                ),
                Rectangle::new(0.0, web_height, flange_width, flange_height),
            ],
        }
    }
}

/// Area-weighted centroid of rectangles of uniform density
pub fn composite_centroid(parts: &[Rectangle]) -> Result<CenterOfMass> {
    if parts.is_empty() {
        return Err(DomainError::EmptyInput { what: "shapes" }.into());
    }
    for part in parts {
        positive("width", part.width)?;
        positive("height", part.height)?;
    }

    let points: Vec<PointMass> = parts
        .iter()
        .map(|part| PointMass {
            mass: part.area(),
            position: part.centroid(),
        })
        .collect();
    center_of_mass(&points)
}

/// Centroid of one of the predefined shapes
pub fn shape_centroid(shape: &Shape) -> Result<CenterOfMass> {
    composite_centroid(&shape.rectangles())
}

/// Body and axis for the closed-form moment of inertia table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InertiaShape {
    /// `m·r²`
    PointMass { radius: f64 },
    /// `m·L²/12`
    RodCenter { length: f64 },
    /// `m·L²/3`
    RodEnd { length: f64 },
    /// `m·R²/2`
    Disk { radius: f64 },
    /// `2·m·R²/5`
    SolidSphere { radius: f64 },
    /// `m·R²`
    Ring { radius: f64 },
}

/// Moment of inertia of `mass` distributed as `shape`
pub fn moment_of_inertia(mass: f64, shape: InertiaShape) -> Result<f64> {
    let mass = positive("mass", mass)?;
    let inertia = match shape {
        InertiaShape::PointMass { radius } => mass * non_negative("radius", radius)?.powi(2),
        InertiaShape::RodCenter { length } => mass * positive("length", length)?.powi(2) / 12.0,
        InertiaShape::RodEnd { length } => mass * positive("length", length)?.powi(2) / 3.0,
        InertiaShape::Disk { radius } => 0.5 * mass * positive("radius", radius)?.powi(2),
        InertiaShape::SolidSphere { radius } => 0.4 * mass * positive("radius", radius)?.powi(2),
        InertiaShape::Ring { radius } => mass * positive("radius", radius)?.powi(2),
    };
    debug!(mass, ?shape, inertia, "moment of inertia");
    Ok(inertia)
}

/// Which of `τ = I·α` to solve for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotationalUnknown {
    Torque {
        inertia: f64,
        angular_acceleration: f64,
    },
    Inertia {
        torque: f64,
        angular_acceleration: f64,
    },
    AngularAcceleration {
        torque: f64,
        inertia: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotationalSolution {
    pub torque: f64,
    pub inertia: f64,
    pub angular_acceleration: f64,
}

/// Newton's second law for rotation
pub fn solve_rotation(unknown: RotationalUnknown) -> Result<RotationalSolution> {
    let solution = match unknown {
        RotationalUnknown::Torque {
            inertia,
            angular_acceleration,
        } => {
            let inertia = positive("moment of inertia", inertia)?;
            let angular_acceleration = finite("angular acceleration", angular_acceleration)?;
            RotationalSolution {
                torque: inertia * angular_acceleration,
                inertia,
                angular_acceleration,
            }
        }
        RotationalUnknown::Inertia {
            torque,
            angular_acceleration,
        } => {
            let torque = finite("torque", torque)?;
            let angular_acceleration = finite("angular acceleration", angular_acceleration)?;
            let inertia = checked_div(torque, angular_acceleration, "angular acceleration")?;
            let inertia = positive("moment of inertia", inertia)?;
            RotationalSolution {
                torque,
                inertia,
                angular_acceleration,
            }
        }
        RotationalUnknown::AngularAcceleration { torque, inertia } => {
            let torque = finite("torque", torque)?;
            let angular_acceleration = checked_div(torque, inertia, "moment of inertia")?;
            let inertia = positive("moment of inertia", inertia)?;
            RotationalSolution {
                torque,
                inertia,
                angular_acceleration,
            }
        }
    };
    debug!(?solution, "rotational second law");
    Ok(solution)
}

/// `KE_rot = ½·I·ω²` with the curve over `[0, 2ω]`
pub fn rotational_energy(
    inertia: f64,
    angular_velocity: f64,
    config: &SolverConfig,
) -> Result<EnergyCurve> {
    let inertia = positive("moment of inertia", inertia)?;
    let omega = finite("angular velocity", angular_velocity)?.abs();

    let ke = |w: f64| 0.5 * inertia * w * w;
    debug!(inertia, omega, energy = ke(omega), "rotational energy");
    Ok(EnergyCurve {
        energy: ke(omega),
        curve: Trajectory::sample(0.0, 2.0 * omega, config.samples, |w| EnergySample {
            variable: w,
            energy: ke(w),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MechanicsError;

    fn config() -> SolverConfig {
        SolverConfig::default()
    }

    #[test]
    fn test_torque_sense() {
        let ccw = torque(2.0, 50.0, Degrees::new(90.0), &config()).unwrap();
        assert!((ccw.torque - 100.0).abs() < 1e-12);
        assert_eq!(ccw.sense, RotationSense::Counterclockwise);

        let cw = torque(2.0, -50.0, Degrees::new(90.0), &config()).unwrap();
        assert_eq!(cw.sense, RotationSense::Clockwise);

        let none = torque(2.0, 50.0, Degrees::new(180.0), &config()).unwrap();
        assert_eq!(none.sense, RotationSense::None);
    }

    #[test]
    fn test_symmetric_beam_splits_evenly() {
        let beam = Beam {
            length: 10.0,
            mass: 100.0,
            support_a: 0.0,
            support_b: 10.0,
            loads: vec![],
        };
        let r = solve_beam(&beam, &config()).unwrap();
        assert!((r.reaction_a - 490.5).abs() < 1e-9);
        assert!((r.reaction_b - 490.5).abs() < 1e-9);
    }

    #[test]
    fn test_beam_load_over_support_b() {
        let beam = Beam {
            length: 10.0,
            mass: 0.0,
            support_a: 0.0,
            support_b: 10.0,
            loads: vec![PointLoad {
                position: 10.0,
                force: 300.0,
            }],
        };
        let r = solve_beam(&beam, &config()).unwrap();
        assert!(r.reaction_a.abs() < 1e-9);
        assert!((r.reaction_b - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_beam_coincident_supports() {
        let beam = Beam {
            length: 10.0,
            mass: 10.0,
            support_a: 4.0,
            support_b: 4.0,
            loads: vec![],
        };
        assert!(matches!(
            solve_beam(&beam, &config()),
            Err(MechanicsError::Domain(DomainError::CoincidentSupports { .. }))
        ));
    }

    #[test]
    fn test_beam_load_off_the_end_rejected() {
        let beam = Beam {
            length: 10.0,
            mass: 10.0,
            support_a: 0.0,
            support_b: 10.0,
            loads: vec![PointLoad {
                position: 12.0,
                force: 10.0,
            }],
        };
        assert!(solve_beam(&beam, &config()).is_err());
    }

    #[test]
    fn test_center_of_mass_empty() {
        assert_eq!(
            center_of_mass(&[]),
            Err(MechanicsError::Domain(DomainError::EmptyInput {
                what: "point masses"
            }))
        );
    }

    #[test]
    fn test_center_of_mass_zero_total() {
        let points = [PointMass::new(0.0, 1.0, 1.0), PointMass::new(0.0, 2.0, 2.0)];
        assert!(matches!(
            center_of_mass(&points),
            Err(MechanicsError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_rectangle_centroid() {
        let com = shape_centroid(&Shape::Rectangle {
            width: 4.0,
            height: 2.0,
        })
        .unwrap();
        assert_eq!(com.position, Vec2::new(2.0, 1.0));
        assert_eq!(com.total, 8.0);
    }

    #[test]
    fn test_l_shape_centroid() {
        // Base 4×1 at (2, 0.5), upright 1×3 at (0.5, 2.5)
        let com = shape_centroid(&Shape::LShape {
            base_width: 4.0,
            base_height: 1.0,
            upright_width: 1.0,
            upright_height: 3.0,
        })
        .unwrap();
        assert!((com.position.x - (4.0 * 2.0 + 3.0 * 0.5) / 7.0).abs() < 1e-12);
        assert!((com.position.y - (4.0 * 0.5 + 3.0 * 2.5) / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_t_shape_is_centred() {
        let com = shape_centroid(&Shape::TShape {
            flange_width: 6.0,
            flange_height: 1.0,
            web_width: 2.0,
            web_height: 4.0,
        })
        .unwrap();
        assert!((com.position.x - 3.0).abs() < 1e-12);
        // Web 8 m² at y = 2, flange 6 m² at y = 4.5
        assert!((com.position.y - (8.0 * 2.0 + 6.0 * 4.5) / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_inertia_table() {
        let m = 2.0;
        let cases = [
            (InertiaShape::PointMass { radius: 3.0 }, 18.0),
            (InertiaShape::RodCenter { length: 3.0 }, 1.5),
            (InertiaShape::RodEnd { length: 3.0 }, 6.0),
            (InertiaShape::Disk { radius: 3.0 }, 9.0),
            (InertiaShape::SolidSphere { radius: 3.0 }, 7.2),
            (InertiaShape::Ring { radius: 3.0 }, 18.0),
        ];
        for (shape, expected) in cases {
            let inertia = moment_of_inertia(m, shape).unwrap();
            assert!(
                (inertia - expected).abs() < 1e-12,
                "{shape:?}: expected {expected}, got {inertia}"
            );
        }
    }

    #[test]
    fn test_rotation_zero_divisors() {
        assert_eq!(
            solve_rotation(RotationalUnknown::AngularAcceleration {
                torque: 5.0,
                inertia: 0.0
            }),
            Err(MechanicsError::DivisionByZero {
                quantity: "moment of inertia"
            })
        );
        assert_eq!(
            solve_rotation(RotationalUnknown::Inertia {
                torque: 5.0,
                angular_acceleration: 0.0
            }),
            Err(MechanicsError::DivisionByZero {
                quantity: "angular acceleration"
            })
        );
    }

    #[test]
    fn test_rotation_solves_each_unknown() {
        let s = solve_rotation(RotationalUnknown::Inertia {
            torque: 10.0,
            angular_acceleration: 4.0,
        })
        .unwrap();
        assert_eq!(s.inertia, 2.5);
        let s = solve_rotation(RotationalUnknown::Torque {
            inertia: 2.5,
            angular_acceleration: 4.0,
        })
        .unwrap();
        assert_eq!(s.torque, 10.0);
    }

    #[test]
    fn test_rotational_energy() {
        let ke = rotational_energy(2.0, 3.0, &config()).unwrap();
        assert_eq!(ke.energy, 9.0);
        assert_eq!(ke.curve.last().unwrap().energy, 36.0);
    }
}
