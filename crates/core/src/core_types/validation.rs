//! Input guards shared by every solver
//!
//! Each guard returns the value unchanged on success so it can be used inline:
//! `let m = positive("mass", m)?;`

use crate::error::{MechanicsError, Result};

/// Reject NaN and infinities
#[inline]
pub fn finite(parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MechanicsError::Validation {
            parameter,
            value,
            constraint: "must be finite",
        })
    }
}

/// Require `value > 0` (mass, radius, period, length, spring constant)
#[inline]
pub fn positive(parameter: &'static str, value: f64) -> Result<f64> {
    finite(parameter, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(MechanicsError::Validation {
            parameter,
            value,
            constraint: "must be positive",
        })
    }
}

/// Require `value >= 0` (time, distance, height above ground)
#[inline]
pub fn non_negative(parameter: &'static str, value: f64) -> Result<f64> {
    finite(parameter, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(MechanicsError::Validation {
            parameter,
            value,
            constraint: "must not be negative",
        })
    }
}

/// Require `0 <= value <= 1` (restitution coefficient)
#[inline]
pub fn unit_interval(parameter: &'static str, value: f64) -> Result<f64> {
    finite(parameter, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(MechanicsError::Validation {
            parameter,
            value,
            constraint: "must be within [0, 1]",
        })
    }
}

/// Require `lower <= value <= upper`
#[inline]
pub fn within(
    parameter: &'static str,
    value: f64,
    lower: f64,
    upper: f64,
    constraint: &'static str,
) -> Result<f64> {
    finite(parameter, value)?;
    if (lower..=upper).contains(&value) {
        Ok(value)
    } else {
        Err(MechanicsError::Validation {
            parameter,
            value,
            constraint,
        })
    }
}

/// Divide, reporting a zero divisor instead of producing inf/NaN
#[inline]
pub fn checked_div(numerator: f64, divisor: f64, quantity: &'static str) -> Result<f64> {
    if divisor == 0.0 {
        Err(MechanicsError::DivisionByZero { quantity })
    } else {
        Ok(numerator / divisor)
    }
}
