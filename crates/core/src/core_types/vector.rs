//! Vector types for positions, velocities, and forces.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// 2D vector type for planar positions and velocities.
///
/// This is a simple alias for `nalgebra::Vector2<f64>`, used for collision
/// velocities, centre-of-mass positions and trajectory points.
pub type Vec2 = Vector2<f64>;

/// 3D vector type for spatial quantities.
pub type Vec3 = Vector3<f64>;

/// A vector as entered by the caller, remembering its dimension.
///
/// Operations that are only defined in three dimensions (the cross product)
/// must be able to tell a planar operand apart from a spatial one whose
/// third component happens to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Vector {
    /// Two components (x, y)
    Planar(Vec2),
    /// Three components (x, y, z)
    Spatial(Vec3),
}

impl Vector {
    /// Planar vector from components
    #[must_use]
    pub fn planar(x: f64, y: f64) -> Self {
        Vector::Planar(Vec2::new(x, y))
    }

    /// Spatial vector from components
    #[must_use]
    pub fn spatial(x: f64, y: f64, z: f64) -> Self {
        Vector::Spatial(Vec3::new(x, y, z))
    }

    /// Number of components (2 or 3)
    #[must_use]
    pub fn dimension(&self) -> usize {
        match self {
            Vector::Planar(_) => 2,
            Vector::Spatial(_) => 3,
        }
    }

    /// View as a 3D vector, padding a planar vector with z = 0
    #[must_use]
    pub fn to_spatial(&self) -> Vec3 {
        match *self {
            Vector::Planar(v) => Vec3::new(v.x, v.y, 0.0),
            Vector::Spatial(v) => v,
        }
    }

    /// Components as a slice-friendly array (z = 0 for planar)
    #[must_use]
    pub fn components(&self) -> [f64; 3] {
        let v = self.to_spatial();
        [v.x, v.y, v.z]
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Self {
        Vector::Planar(v)
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Vector::Spatial(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planar_pads_to_spatial() {
        let v = Vector::planar(3.0, 4.0);
        assert_eq!(v.dimension(), 2);
        assert_eq!(v.to_spatial(), Vec3::new(3.0, 4.0, 0.0));
    }

    #[test]
    fn test_spatial_keeps_dimension() {
        let v: Vector = Vec3::new(1.0, 2.0, 0.0).into();
        assert_eq!(v.dimension(), 3);
        assert_eq!(v.components(), [1.0, 2.0, 0.0]);
    }
}
