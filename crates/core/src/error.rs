//! Error and warning types for the mechanics solvers
//!
//! Every solver returns [`Result<T>`]. A failed computation yields no usable
//! value for that one request; nothing here is retried or fatal.
//!
//! Degraded-accuracy conditions are not errors. They are reported as
//! [`Warning`] values carried inside the successful result.

use crate::core_types::units::Degrees;
use crate::physics::conversion::UnitCategory;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Convenience alias used by every solver in the crate.
pub type Result<T> = std::result::Result<T, MechanicsError>;

/// Errors that can occur while evaluating a formula
#[derive(Debug, Clone, PartialEq)]
pub enum MechanicsError {
    /// Input violates a hard physical constraint (negative mass, e outside [0, 1], NaN, ...)
    Validation {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },
    /// A divisor was zero; checked before dividing
    DivisionByZero { quantity: &'static str },
    /// Operation is not defined for the operand dimension (cross product on 2D)
    InvalidDimension {
        operation: &'static str,
        dimension: usize,
    },
    /// Unit is not part of the category's table
    InvalidUnit { category: UnitCategory, unit: String },
    /// Physically unreachable state
    Domain(DomainError),
    /// Two formulas that must agree did not
    InconsistentResult {
        check: &'static str,
        lhs: f64,
        rhs: f64,
    },
}

/// Physically unreachable or undefined situations
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Negative discriminant in the time-to-impact quadratic
    NeverLands { discriminant: f64 },
    /// Swimmer has no velocity component towards the far bank
    NeverCrosses { cross_stream_speed: f64 },
    /// Total mechanical energy is below the potential energy at the target
    UnreachableHeight { shortfall: f64 },
    /// Beam supports are too close together to take moments
    CoincidentSupports { separation: f64 },
    /// Bodies already move at the same velocity
    NoRelativeMotion,
    /// 2D elastic collisions need contact geometry that was not supplied
    RequiresCollisionGeometry,
    /// A collection input had no elements
    EmptyInput { what: &'static str },
}

impl fmt::Display for MechanicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MechanicsError::Validation {
                parameter,
                value,
                constraint,
            } => write!(f, "Invalid {parameter}: {constraint}, got {value}"),
            MechanicsError::DivisionByZero { quantity } => {
                write!(f, "Division by zero: {quantity} must be non-zero")
            }
            MechanicsError::InvalidDimension {
                operation,
                dimension,
            } => write!(
                f,
                "{operation} is not defined for {dimension}D vectors, use 3D operands"
            ),
            MechanicsError::InvalidUnit { category, unit } => {
                write!(f, "Unknown {category} unit '{unit}'")
            }
            MechanicsError::Domain(err) => write!(f, "{err}"),
            MechanicsError::InconsistentResult { check, lhs, rhs } => {
                write!(f, "Consistency check '{check}' failed: {lhs} != {rhs}")
            }
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NeverLands { discriminant } => write!(
                f,
                "Body never reaches the ground (discriminant {discriminant} < 0)"
            ),
            DomainError::NeverCrosses { cross_stream_speed } => write!(
                f,
                "Swimmer never reaches the far bank (cross-stream speed {cross_stream_speed} m/s)"
            ),
            DomainError::UnreachableHeight { shortfall } => write!(
                f,
                "Target height is unreachable: {shortfall} J of energy missing"
            ),
            DomainError::CoincidentSupports { separation } => write!(
                f,
                "Supports coincide (separation {separation} m), moment arm is zero"
            ),
            DomainError::NoRelativeMotion => {
                write!(f, "Bodies have no relative velocity, no collision occurs")
            }
            DomainError::RequiresCollisionGeometry => write!(
                f,
                "2D elastic collision requires the collision angle or contact geometry"
            ),
            DomainError::EmptyInput { what } => write!(f, "No {what} supplied"),
        }
    }
}

impl std::error::Error for MechanicsError {}

impl std::error::Error for DomainError {}

impl From<DomainError> for MechanicsError {
    fn from(err: DomainError) -> Self {
        MechanicsError::Domain(err)
    }
}

/// Accuracy warnings attached to otherwise valid results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Warning {
    /// Pendulum amplitude is outside the small-angle regime
    SmallAngleExceeded { angle: Degrees, threshold: Degrees },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::SmallAngleExceeded { angle, threshold } => write!(
                f,
                "Amplitude {angle} exceeds the small-angle limit of {threshold}, results are approximate"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts_into_mechanics_error() {
        let err: MechanicsError = DomainError::NoRelativeMotion.into();
        assert_eq!(err, MechanicsError::Domain(DomainError::NoRelativeMotion));
    }

    #[test]
    fn test_validation_message_names_parameter() {
        let err = MechanicsError::Validation {
            parameter: "mass",
            value: -1.0,
            constraint: "must be positive",
        };
        assert_eq!(err.to_string(), "Invalid mass: must be positive, got -1");
    }

    #[test]
    fn test_warning_display() {
        let warning = Warning::SmallAngleExceeded {
            angle: Degrees::new(30.0),
            threshold: Degrees::new(15.0),
        };
        assert!(warning.to_string().contains("30.0°"));
    }
}
