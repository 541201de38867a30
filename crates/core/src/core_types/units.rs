//! Angle newtypes for type-safe trigonometry
//!
//! Every user-facing angle in the crate is entered in degrees, while the
//! trigonometric functions work in radians. Wrapping the two in distinct
//! types keeps the conversion explicit at the call site.
//!
//! # Design Philosophy
//! - `f64` inner value, matching the precision of the solvers
//! - `Deref` to the raw value for arithmetic inside formulas
//! - Total ordering via `Ord` (NaN handled as greater than all values)
//! - Serde support for serialization
//!
//! # Usage
//! ```
//! use mechanics_core::core_types::units::{Degrees, Radians};
//!
//! let launch = Degrees::new(45.0);
//! let rad: Radians = launch.into();
//! assert!((rad.sin() - rad.cos()).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, Neg};

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Right angle
    pub const RIGHT: Degrees = Degrees(90.0);

    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to radians
    #[inline]
    #[must_use]
    pub fn to_radians(self) -> Radians {
        Radians(self.0.to_radians())
    }

    /// Absolute angle
    #[inline]
    #[must_use]
    pub fn abs(self) -> Self {
        Degrees(self.0.abs())
    }
}

impl From<f64> for Degrees {
    fn from(v: f64) -> Self {
        Degrees(v)
    }
}

impl From<Degrees> for f64 {
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl From<Degrees> for Radians {
    fn from(d: Degrees) -> Radians {
        d.to_radians()
    }
}

impl Neg for Degrees {
    type Output = Degrees;
    fn neg(self) -> Degrees {
        Degrees(-self.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Radians(f64);

impl Eq for Radians {}

impl PartialOrd for Radians {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Radians {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Deref for Radians {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Get the raw f64 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }

    /// Compute sine
    #[inline]
    #[must_use]
    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    /// Compute cosine
    #[inline]
    #[must_use]
    pub fn cos(self) -> f64 {
        self.0.cos()
    }
}

impl From<f64> for Radians {
    fn from(v: f64) -> Self {
        Radians(v)
    }
}

impl From<Radians> for f64 {
    fn from(r: Radians) -> f64 {
        r.0
    }
}

impl From<Radians> for Degrees {
    fn from(r: Radians) -> Degrees {
        r.to_degrees()
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} rad", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_degrees_to_radians() {
        let rad = Degrees::new(180.0).to_radians();
        assert!((*rad - PI).abs() < 1e-12);
    }

    #[test]
    fn test_radians_to_degrees() {
        let deg: Degrees = Radians::new(PI / 2.0).into();
        assert!((*deg - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_total_ordering() {
        let a = Degrees::new(10.0);
        let b = Degrees::new(20.0);
        assert_eq!(a.max(b), b);
        assert!(Degrees::new(f64::NAN) > b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Degrees::new(45.0).to_string(), "45.0°");
        assert_eq!(Radians::new(1.0).to_string(), "1.0000 rad");
    }
}
