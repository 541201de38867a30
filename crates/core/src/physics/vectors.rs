//! Vector algebra and coordinate conversions
//!
//! Mixed 2D/3D operands are padded to three dimensions for addition,
//! subtraction and the dot product. The cross product refuses planar
//! operands instead of silently padding them.

use crate::core_types::units::{Degrees, Radians};
use crate::core_types::validation::{finite, non_negative};
use crate::core_types::vector::{Vec2, Vec3, Vector};
use crate::error::{MechanicsError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Dot product together with the angle between the operands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DotProduct {
    /// Σ Aᵢ·Bᵢ
    pub value: f64,
    /// Subtended angle, `None` when either operand has zero length
    pub angle: Option<Radians>,
}

/// 2D polar form, angle measured from +x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: Radians,
}

/// 3D spherical form
///
/// `polar` is measured from +z, `azimuth` from +x in the xy plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical {
    pub radius: f64,
    pub polar: Radians,
    pub azimuth: Radians,
}

fn combine(a: &Vector, b: &Vector, sign: f64) -> Vector {
    match (a, b) {
        (Vector::Planar(a), Vector::Planar(b)) => Vector::Planar(a + b * sign),
        _ => Vector::Spatial(a.to_spatial() + b.to_spatial() * sign),
    }
}

/// Component-wise sum. Planar + planar stays planar.
pub fn add(a: &Vector, b: &Vector) -> Vector {
    combine(a, b, 1.0)
}

/// Component-wise difference `a - b`
pub fn subtract(a: &Vector, b: &Vector) -> Vector {
    combine(a, b, -1.0)
}

/// Euclidean length
pub fn magnitude(v: &Vector) -> f64 {
    v.to_spatial().norm()
}

/// Dot product and the angle `acos(clamp(A·B / |A||B|, -1, 1))`
pub fn dot(a: &Vector, b: &Vector) -> DotProduct {
    let (a3, b3) = (a.to_spatial(), b.to_spatial());
    let value = a3.dot(&b3);
    let (mag_a, mag_b) = (a3.norm(), b3.norm());

    let angle = if mag_a > 0.0 && mag_b > 0.0 {
        // Clamp guards acos against rounding just outside [-1, 1]
        let cos_theta = (value / (mag_a * mag_b)).clamp(-1.0, 1.0);
        Some(Radians::new(cos_theta.acos()))
    } else {
        None
    };

    DotProduct { value, angle }
}

/// Cross product, defined only for two spatial operands
pub fn cross(a: &Vector, b: &Vector) -> Result<Vec3> {
    match (a, b) {
        (Vector::Spatial(a), Vector::Spatial(b)) => Ok(a.cross(b)),
        _ => {
            let dimension = a.dimension().min(b.dimension());
            debug!(dimension, "cross product requested on planar operand");
            Err(MechanicsError::InvalidDimension {
                operation: "cross product",
                dimension,
            })
        }
    }
}

/// Unit vector in the direction of `v`
pub fn normalize(v: &Vector) -> Result<Vector> {
    let length = magnitude(v);
    if length == 0.0 {
        return Err(MechanicsError::DivisionByZero {
            quantity: "vector magnitude",
        });
    }
    Ok(match v {
        Vector::Planar(p) => Vector::Planar(p / length),
        Vector::Spatial(s) => Vector::Spatial(s / length),
    })
}

/// Magnitude and direction of a planar vector
pub fn to_polar(v: &Vec2) -> Polar {
    Polar {
        magnitude: v.norm(),
        angle: Radians::new(v.y.atan2(v.x)),
    }
}

/// Components from magnitude and direction
pub fn from_polar(magnitude: f64, angle: Degrees) -> Result<Vec2> {
    let magnitude = non_negative("magnitude", magnitude)?;
    finite("angle", *angle)?;
    let rad = angle.to_radians();
    Ok(Vec2::new(magnitude * rad.cos(), magnitude * rad.sin()))
}

/// Radius, polar and azimuthal angles of a spatial vector
///
/// The polar angle of the zero vector is reported as 0.
pub fn to_spherical(v: &Vec3) -> Spherical {
    let radius = v.norm();
    let polar = if radius > 0.0 {
        (v.z / radius).clamp(-1.0, 1.0).acos()
    } else {
        0.0
    };
    Spherical {
        radius,
        polar: Radians::new(polar),
        azimuth: Radians::new(v.y.atan2(v.x)),
    }
}

/// Components from radius, polar angle (from +z) and azimuth (from +x)
pub fn from_spherical(radius: f64, polar: Degrees, azimuth: Degrees) -> Result<Vec3> {
    let radius = non_negative("radius", radius)?;
    finite("polar angle", *polar)?;
    finite("azimuth", *azimuth)?;
    let (theta, phi) = (polar.to_radians(), azimuth.to_radians());
    Ok(Vec3::new(
        radius * theta.sin() * phi.cos(),
        radius * theta.sin() * phi.sin(),
        radius * theta.cos(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_add_planar_stays_planar() {
        let sum = add(&Vector::planar(3.0, 4.0), &Vector::planar(1.0, 2.0));
        assert_eq!(sum, Vector::planar(4.0, 6.0));
    }

    #[test]
    fn test_mixed_dimensions_pad_with_zero() {
        let diff = subtract(&Vector::spatial(1.0, 1.0, 5.0), &Vector::planar(1.0, 2.0));
        assert_eq!(diff, Vector::spatial(0.0, -1.0, 5.0));
    }

    #[test]
    fn test_dot_perpendicular() {
        let result = dot(&Vector::planar(1.0, 0.0), &Vector::planar(0.0, 2.0));
        assert_eq!(result.value, 0.0);
        let angle = result.angle.unwrap();
        assert!((*angle - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_dot_zero_vector_has_no_angle() {
        let result = dot(&Vector::planar(0.0, 0.0), &Vector::planar(3.0, 4.0));
        assert_eq!(result.value, 0.0);
        assert!(result.angle.is_none());
    }

    #[test]
    fn test_dot_parallel_is_clamped() {
        let result = dot(&Vector::spatial(0.1, 0.2, 0.3), &Vector::spatial(0.2, 0.4, 0.6));
        assert!(*result.angle.unwrap() < 1e-7);
    }

    #[test]
    fn test_cross_unit_axes() {
        let z = cross(&Vector::spatial(1.0, 0.0, 0.0), &Vector::spatial(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(z, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_cross_rejects_planar() {
        let err = cross(&Vector::planar(1.0, 0.0), &Vector::spatial(0.0, 1.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            MechanicsError::InvalidDimension {
                operation: "cross product",
                dimension: 2
            }
        );
    }

    #[test]
    fn test_magnitude_3_4_5() {
        assert_eq!(magnitude(&Vector::planar(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert_eq!(
            normalize(&Vector::spatial(0.0, 0.0, 0.0)),
            Err(MechanicsError::DivisionByZero {
                quantity: "vector magnitude"
            })
        );
    }

    #[test]
    fn test_normalize_keeps_dimension() {
        let unit = normalize(&Vector::planar(3.0, 4.0)).unwrap();
        assert_eq!(unit, Vector::planar(0.6, 0.8));
    }

    #[test]
    fn test_polar_round_trip() {
        let v = from_polar(5.0, Degrees::new(53.13)).unwrap();
        let polar = to_polar(&v);
        assert!((polar.magnitude - 5.0).abs() < 1e-12);
        assert!((*polar.angle.to_degrees() - 53.13).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_round_trip() {
        let v = from_spherical(5.0, Degrees::new(45.0), Degrees::new(30.0)).unwrap();
        let s = to_spherical(&v);
        assert!((s.radius - 5.0).abs() < 1e-12);
        assert!((*s.polar.to_degrees() - 45.0).abs() < 1e-9);
        assert!((*s.azimuth.to_degrees() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_of_origin() {
        let s = to_spherical(&Vec3::zeros());
        assert_eq!(s.radius, 0.0);
        assert_eq!(*s.polar, 0.0);
    }

    #[test]
    fn test_spherical_rejects_nan_angles() {
        assert!(from_spherical(1.0, Degrees::new(f64::NAN), Degrees::new(0.0)).is_err());
        assert!(from_spherical(1.0, Degrees::new(45.0), Degrees::new(f64::INFINITY)).is_err());
    }
}
