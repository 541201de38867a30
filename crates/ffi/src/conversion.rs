use mechanics_core::physics::conversion::{convert, UnitCategory};
use mechanics_core::physics::vectors;
use mechanics_core::{Vec3, Vector};
use std::os::raw::c_char;

use crate::error::{DefaultMechanicsError, MechanicsErrorCode};
use crate::helpers::{handle_ffi_result_error, read_str, write_out};

/// Unit category for `mechanics_convert`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicsUnitCategory {
    Length = 0,
    Mass = 1,
    Time = 2,
    Force = 3,
    Energy = 4,
    Velocity = 5,
    Acceleration = 6,
}

impl From<MechanicsUnitCategory> for UnitCategory {
    fn from(category: MechanicsUnitCategory) -> Self {
        match category {
            MechanicsUnitCategory::Length => UnitCategory::Length,
            MechanicsUnitCategory::Mass => UnitCategory::Mass,
            MechanicsUnitCategory::Time => UnitCategory::Time,
            MechanicsUnitCategory::Force => UnitCategory::Force,
            MechanicsUnitCategory::Energy => UnitCategory::Energy,
            MechanicsUnitCategory::Velocity => UnitCategory::Velocity,
            MechanicsUnitCategory::Acceleration => UnitCategory::Acceleration,
        }
    }
}

#[no_mangle]
/// Convert `value` between two units of the same category.
///
/// Unit symbols are the library's short forms (`"km"`, `"lbf"`, `"km/h"`, ...).
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success with the converted value in `out_value`
/// - `MechanicsErrorCode::NullPointer` if `from`, `to` or `out_value` is null
/// - `MechanicsErrorCode::InvalidUnit` if either symbol is not listed for `category`
///
/// # Safety
///
/// - `from` and `to` must be null-terminated UTF-8 strings.
/// - `out_value` must be a valid, non-null pointer to an `f64`.
///
/// # Example Usage (C)
/// ```c
/// double metres = 0.0;
/// if (mechanics_convert(1.0, Length, "km", "m", &metres) == Ok) {
///     printf("%f\n", metres); // 1000.0
/// }
/// ```
pub unsafe extern "C" fn mechanics_convert(
    value: f64,
    category: MechanicsUnitCategory,
    from: *const c_char,
    to: *const c_char,
    out_value: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let from = unsafe { read_str(from, "from")? };
        let to = unsafe { read_str(to, "to")? };
        let converted = convert(value, category.into(), from, to)?;
        unsafe { write_out(out_value, "out_value", converted) }
    })
}

/// Planar or spatial vector. `z` is ignored when `dimension` is 2.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,

    /// 2 or 3.
    pub dimension: u32,
}

impl TryFrom<MechanicsVector> for Vector {
    type Error = DefaultMechanicsError;

    fn try_from(v: MechanicsVector) -> Result<Self, Self::Error> {
        match v.dimension {
            2 => Ok(Vector::planar(v.x, v.y)),
            3 => Ok(Vector::spatial(v.x, v.y, v.z)),
            other => Err(DefaultMechanicsError::invalid_parameter(format!(
                "Vector dimension must be 2 or 3, got {other}"
            ))),
        }
    }
}

impl From<Vector> for MechanicsVector {
    fn from(v: Vector) -> Self {
        let [x, y, z] = v.components();
        Self {
            x,
            y,
            z,
            dimension: v.dimension() as u32,
        }
    }
}

impl From<Vec3> for MechanicsVector {
    fn from(v: Vec3) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            dimension: 3,
        }
    }
}

#[no_mangle]
/// Component-wise sum; two planar operands give a planar result.
///
/// # Safety
///
/// `out_vector` must be a valid, non-null pointer to a `MechanicsVector`.
pub unsafe extern "C" fn mechanics_vector_add(
    a: MechanicsVector,
    b: MechanicsVector,
    out_vector: *mut MechanicsVector,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let sum = vectors::add(&Vector::try_from(a)?, &Vector::try_from(b)?);
        unsafe { write_out(out_vector, "out_vector", sum.into()) }
    })
}

#[no_mangle]
/// Dot product and the angle between the operands in degrees.
///
/// `out_angle` receives NaN when either operand has zero length. It may be null.
///
/// # Safety
///
/// - `out_value` must be a valid, non-null pointer to an `f64`.
/// - `out_angle` must be null or a valid pointer to an `f64`.
pub unsafe extern "C" fn mechanics_vector_dot(
    a: MechanicsVector,
    b: MechanicsVector,
    out_value: *mut f64,
    out_angle: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let product = vectors::dot(&Vector::try_from(a)?, &Vector::try_from(b)?);
        unsafe { write_out(out_value, "out_value", product.value)? };
        if !out_angle.is_null() {
            let angle = product.angle.map_or(f64::NAN, |angle| *angle.to_degrees());
            unsafe { write_out(out_angle, "out_angle", angle)? };
        }
        Ok(())
    })
}

#[no_mangle]
/// Cross product of two spatial vectors.
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::InvalidDimension` if either operand is planar
///
/// # Safety
///
/// `out_vector` must be a valid, non-null pointer to a `MechanicsVector`.
pub unsafe extern "C" fn mechanics_vector_cross(
    a: MechanicsVector,
    b: MechanicsVector,
    out_vector: *mut MechanicsVector,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let product = vectors::cross(&Vector::try_from(a)?, &Vector::try_from(b)?)?;
        unsafe { write_out(out_vector, "out_vector", product.into()) }
    })
}

#[no_mangle]
/// Vector length.
///
/// # Safety
///
/// `out_value` must be a valid, non-null pointer to an `f64`.
pub unsafe extern "C" fn mechanics_vector_magnitude(
    v: MechanicsVector,
    out_value: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let length = vectors::magnitude(&Vector::try_from(v)?);
        unsafe { write_out(out_value, "out_value", length) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::mechanics_get_last_error_code;
    use std::ffi::CString;

    #[test]
    fn test_convert_km_to_m() {
        let from = CString::new("km").unwrap();
        let to = CString::new("m").unwrap();
        let mut out = 0.0;
        let code = unsafe {
            mechanics_convert(
                2.5,
                MechanicsUnitCategory::Length,
                from.as_ptr(),
                to.as_ptr(),
                &mut out,
            )
        };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert_eq!(out, 2500.0);
    }

    #[test]
    fn test_convert_unknown_unit_sets_last_error() {
        let from = CString::new("parsec").unwrap();
        let to = CString::new("m").unwrap();
        let mut out = 0.0;
        let code = unsafe {
            mechanics_convert(
                1.0,
                MechanicsUnitCategory::Length,
                from.as_ptr(),
                to.as_ptr(),
                &mut out,
            )
        };
        assert_eq!(code, MechanicsErrorCode::InvalidUnit);
        assert_eq!(mechanics_get_last_error_code(), MechanicsErrorCode::InvalidUnit);
    }

    #[test]
    fn test_cross_rejects_planar() {
        let planar = MechanicsVector {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            dimension: 2,
        };
        let mut out = planar;
        let code = unsafe { mechanics_vector_cross(planar, planar, &mut out) };
        assert_eq!(code, MechanicsErrorCode::InvalidDimension);
    }

    #[test]
    fn test_cross_unit_axes() {
        let x = MechanicsVector {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            dimension: 3,
        };
        let y = MechanicsVector { x: 0.0, y: 1.0, ..x };
        let mut out = x;
        let code = unsafe { mechanics_vector_cross(x, y, &mut out) };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert_eq!((out.x, out.y, out.z), (0.0, 0.0, 1.0));
    }
}
