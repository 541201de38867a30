use mechanics_core::physics::dynamics::{atwood, AtwoodDirection};
use mechanics_core::physics::kinematics::{free_fall, projectile};
use mechanics_core::physics::momentum::{collide, Body1D, CollisionKind};
use mechanics_core::physics::statics::{
    center_of_mass, moment_of_inertia, solve_beam, Beam, InertiaShape, PointLoad, PointMass,
};
use mechanics_core::Degrees;

use crate::error::MechanicsErrorCode;
use crate::helpers::{handle_ffi_result_error, read_slice, write_out};
use crate::{config_from_ptr, MechanicsConfig};

// ============================================================================
// KINEMATICS
// ============================================================================

#[repr(C)]
/// Angled launch summary. The sampled path is not exposed over FFI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsProjectile {
    /// Constant horizontal velocity (m/s).
    pub horizontal_velocity: f64,

    /// Initial vertical velocity (m/s).
    pub vertical_velocity: f64,

    /// Time to reach the highest point (s), 0 for downward launches.
    pub time_to_apex: f64,

    /// Highest point above ground (m).
    pub max_height: f64,

    /// Horizontal position of the highest point (m).
    pub apex_distance: f64,

    /// Time until the projectile reaches ground level (s).
    pub flight_time: f64,

    /// Horizontal distance at impact (m).
    pub range: f64,
}

#[no_mangle]
/// Launch at speed `v0` (m/s), `angle` degrees above horizontal, from height `h0` (m).
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::InvalidParameter` if `v0` or `h0` is negative
/// - `MechanicsErrorCode::DomainError` if the projectile never reaches the ground
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_result` must be a valid, non-null pointer to a `MechanicsProjectile`.
pub unsafe extern "C" fn mechanics_projectile(
    v0: f64,
    angle: f64,
    h0: f64,
    config: *const MechanicsConfig,
    out_result: *mut MechanicsProjectile,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let shot = projectile(v0, Degrees::new(angle), h0, &config)?;
        let summary = MechanicsProjectile {
            horizontal_velocity: shot.horizontal_velocity,
            vertical_velocity: shot.vertical_velocity,
            time_to_apex: shot.time_to_apex,
            max_height: shot.max_height,
            apex_distance: shot.apex_distance,
            flight_time: shot.flight_time,
            range: shot.range,
        };
        unsafe { write_out(out_result, "out_result", summary) }
    })
}

#[no_mangle]
/// Drop from height `h0` (m) with initial vertical velocity `v0` (m/s, upward positive).
///
/// `out_impact_velocity` may be null.
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_time` must be a valid, non-null pointer to an `f64`.
/// - `out_impact_velocity` must be null or a valid pointer to an `f64`.
pub unsafe extern "C" fn mechanics_free_fall(
    h0: f64,
    v0: f64,
    config: *const MechanicsConfig,
    out_time: *mut f64,
    out_impact_velocity: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let fall = free_fall(h0, v0, &config)?;
        unsafe { write_out(out_time, "out_time", fall.time_to_impact)? };
        if !out_impact_velocity.is_null() {
            unsafe { write_out(out_impact_velocity, "out_impact_velocity", fall.impact_velocity)? };
        }
        Ok(())
    })
}

// ============================================================================
// DYNAMICS
// ============================================================================

#[repr(C)]
/// Ideal Atwood machine result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsAtwood {
    /// Signed acceleration (m/s²), positive when the first mass descends.
    pub acceleration: f64,

    /// String tension (N).
    pub tension: f64,

    /// 1 if the first mass descends, -1 if the second does, 0 when balanced.
    pub direction: i32,
}

#[no_mangle]
/// Two masses (kg) over a massless, frictionless pulley.
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_result` must be a valid, non-null pointer to a `MechanicsAtwood`.
pub unsafe extern "C" fn mechanics_atwood(
    m1: f64,
    m2: f64,
    config: *const MechanicsConfig,
    out_result: *mut MechanicsAtwood,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let machine = atwood(m1, m2, &config)?;
        let direction = match machine.direction {
            AtwoodDirection::FirstDescends => 1,
            AtwoodDirection::SecondDescends => -1,
            AtwoodDirection::Balanced => 0,
        };
        let result = MechanicsAtwood {
            acceleration: machine.acceleration,
            tension: machine.tension,
            direction,
        };
        unsafe { write_out(out_result, "out_result", result) }
    })
}

// ============================================================================
// MOMENTUM
// ============================================================================

/// Collision model for `mechanics_collide`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicsCollisionKind {
    Elastic = 0,
    PerfectlyInelastic = 1,
    /// Uses the `restitution` argument.
    Partial = 2,
}

#[repr(C)]
/// Head-on collision result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsCollision {
    pub first_velocity: f64,
    pub second_velocity: f64,
    pub momentum_before: f64,
    pub momentum_after: f64,
    pub kinetic_before: f64,
    pub kinetic_after: f64,

    /// Share of the initial kinetic energy lost (%).
    pub energy_loss_percent: f64,
}

#[no_mangle]
/// Head-on collision of two bodies.
///
/// `restitution` is read only for `MechanicsCollisionKind::Partial`.
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::InvalidParameter` for non-positive masses or restitution outside [0, 1]
/// - `MechanicsErrorCode::NoRelativeMotion` if a partial collision has no approach speed
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_result` must be a valid, non-null pointer to a `MechanicsCollision`.
#[expect(clippy::too_many_arguments)]
pub unsafe extern "C" fn mechanics_collide(
    m1: f64,
    v1: f64,
    m2: f64,
    v2: f64,
    kind: MechanicsCollisionKind,
    restitution: f64,
    config: *const MechanicsConfig,
    out_result: *mut MechanicsCollision,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let kind = match kind {
            MechanicsCollisionKind::Elastic => CollisionKind::Elastic,
            MechanicsCollisionKind::PerfectlyInelastic => CollisionKind::PerfectlyInelastic,
            MechanicsCollisionKind::Partial => CollisionKind::Partial { restitution },
        };
        let outcome = collide(Body1D::new(m1, v1), Body1D::new(m2, v2), kind, &config)?;
        let result = MechanicsCollision {
            first_velocity: outcome.first_velocity,
            second_velocity: outcome.second_velocity,
            momentum_before: outcome.momentum_before,
            momentum_after: outcome.momentum_after,
            kinetic_before: outcome.kinetic_before,
            kinetic_after: outcome.kinetic_after,
            energy_loss_percent: outcome.energy_loss_percent,
        };
        unsafe { write_out(out_result, "out_result", result) }
    })
}

// ============================================================================
// STATICS
// ============================================================================

#[repr(C)]
/// Downward point load on a beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsPointLoad {
    /// Distance from the left end (m).
    pub position: f64,

    /// Downward force (N).
    pub force: f64,
}

#[repr(C)]
/// Support reactions of a simply supported beam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsBeamReactions {
    pub reaction_a: f64,
    pub reaction_b: f64,
    pub beam_weight: f64,
    pub total_downward: f64,
}

#[no_mangle]
/// Support reactions for a uniform beam of `length` (m) and `mass` (kg) with supports
/// at `support_a` and `support_b` (m from the left end).
///
/// `loads` may be null when `loads_len` is 0.
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::CoincidentSupports` if the supports are at the same position
/// - `MechanicsErrorCode::InvalidParameter` if a load lies outside the beam
///
/// # Safety
///
/// - `loads` must be valid for reads of `loads_len` elements.
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_result` must be a valid, non-null pointer to a `MechanicsBeamReactions`.
#[expect(clippy::too_many_arguments)]
pub unsafe extern "C" fn mechanics_beam(
    length: f64,
    mass: f64,
    support_a: f64,
    support_b: f64,
    loads: *const MechanicsPointLoad,
    loads_len: usize,
    config: *const MechanicsConfig,
    out_result: *mut MechanicsBeamReactions,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let loads = unsafe { read_slice(loads, loads_len, "loads")? };
        let beam = Beam {
            length,
            mass,
            support_a,
            support_b,
            loads: loads
                .iter()
                .map(|load| PointLoad {
                    position: load.position,
                    force: load.force,
                })
                .collect(),
        };
        let reactions = solve_beam(&beam, &config)?;
        let result = MechanicsBeamReactions {
            reaction_a: reactions.reaction_a,
            reaction_b: reactions.reaction_b,
            beam_weight: reactions.beam_weight,
            total_downward: reactions.total_downward,
        };
        unsafe { write_out(out_result, "out_result", result) }
    })
}

#[repr(C)]
/// Point mass in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsPointMass {
    pub mass: f64,
    pub x: f64,
    pub y: f64,
}

#[no_mangle]
/// Centre of mass of `points_len` point masses.
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::DomainError` if `points_len` is 0
/// - `MechanicsErrorCode::DivisionByZero` if the masses sum to zero
///
/// # Safety
///
/// - `points` must be valid for reads of `points_len` elements.
/// - `out_x` and `out_y` must be valid, non-null pointers to `f64`.
pub unsafe extern "C" fn mechanics_center_of_mass(
    points: *const MechanicsPointMass,
    points_len: usize,
    out_x: *mut f64,
    out_y: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let points = unsafe { read_slice(points, points_len, "points")? };
        let points: Vec<PointMass> = points
            .iter()
            .map(|p| PointMass::new(p.mass, p.x, p.y))
            .collect();
        let com = center_of_mass(&points)?;
        unsafe { write_out(out_x, "out_x", com.position.x)? };
        unsafe { write_out(out_y, "out_y", com.position.y) }
    })
}

/// Body and axis for `mechanics_moment_of_inertia`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicsInertiaShape {
    /// `dimension` is the distance from the axis.
    PointMass = 0,
    /// `dimension` is the rod length.
    RodCenter = 1,
    /// `dimension` is the rod length.
    RodEnd = 2,
    /// `dimension` is the radius.
    Disk = 3,
    /// `dimension` is the radius.
    SolidSphere = 4,
    /// `dimension` is the radius.
    Ring = 5,
}

#[no_mangle]
/// Closed-form moment of inertia (kg·m²) of `mass` distributed as `shape`.
///
/// # Safety
///
/// `out_value` must be a valid, non-null pointer to an `f64`.
pub unsafe extern "C" fn mechanics_moment_of_inertia(
    mass: f64,
    shape: MechanicsInertiaShape,
    dimension: f64,
    out_value: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let shape = match shape {
            MechanicsInertiaShape::PointMass => InertiaShape::PointMass { radius: dimension },
            MechanicsInertiaShape::RodCenter => InertiaShape::RodCenter { length: dimension },
            MechanicsInertiaShape::RodEnd => InertiaShape::RodEnd { length: dimension },
            MechanicsInertiaShape::Disk => InertiaShape::Disk { radius: dimension },
            MechanicsInertiaShape::SolidSphere => InertiaShape::SolidSphere { radius: dimension },
            MechanicsInertiaShape::Ring => InertiaShape::Ring { radius: dimension },
        };
        let inertia = moment_of_inertia(mass, shape)?;
        unsafe { write_out(out_value, "out_value", inertia) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{mechanics_get_last_error, mechanics_get_last_error_code};
    use std::ptr;

    #[test]
    fn test_projectile_default_config() {
        let mut out = MechanicsProjectile {
            horizontal_velocity: 0.0,
            vertical_velocity: 0.0,
            time_to_apex: 0.0,
            max_height: 0.0,
            apex_distance: 0.0,
            flight_time: 0.0,
            range: 0.0,
        };
        let code = unsafe { mechanics_projectile(30.0, 45.0, 0.0, ptr::null(), &mut out) };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert!((out.range - 91.74).abs() < 0.005);
        assert!((out.max_height - 22.94).abs() < 0.005);
        assert!(mechanics_get_last_error().is_null());
    }

    #[test]
    fn test_null_output_reports_null_pointer() {
        let code = unsafe { mechanics_atwood(5.0, 3.0, ptr::null(), ptr::null_mut()) };
        assert_eq!(code, MechanicsErrorCode::NullPointer);
        assert_eq!(mechanics_get_last_error_code(), MechanicsErrorCode::NullPointer);
        assert!(!mechanics_get_last_error().is_null());
    }

    #[test]
    fn test_atwood_direction_code() {
        let mut out = MechanicsAtwood {
            acceleration: 0.0,
            tension: 0.0,
            direction: 99,
        };
        let code = unsafe { mechanics_atwood(3.0, 5.0, ptr::null(), &mut out) };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert_eq!(out.direction, -1);
        assert!(out.acceleration < 0.0);
    }

    #[test]
    fn test_custom_gravity_changes_free_fall_time() {
        let moon = MechanicsConfig {
            gravity: 1.62,
            ..crate::mechanics_default_config()
        };
        let mut earth_time = 0.0;
        let mut moon_time = 0.0;
        unsafe {
            assert_eq!(
                mechanics_free_fall(20.0, 0.0, ptr::null(), &mut earth_time, ptr::null_mut()),
                MechanicsErrorCode::Ok
            );
            assert_eq!(
                mechanics_free_fall(20.0, 0.0, &moon, &mut moon_time, ptr::null_mut()),
                MechanicsErrorCode::Ok
            );
        }
        assert!(moon_time > earth_time);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let broken = MechanicsConfig {
            gravity: -9.81,
            ..crate::mechanics_default_config()
        };
        let mut out = 0.0;
        let code =
            unsafe { mechanics_free_fall(20.0, 0.0, &broken, &mut out, ptr::null_mut()) };
        assert_eq!(code, MechanicsErrorCode::InvalidParameter);
    }

    #[test]
    fn test_partial_collision_without_relative_motion() {
        let mut out = MechanicsCollision {
            first_velocity: 0.0,
            second_velocity: 0.0,
            momentum_before: 0.0,
            momentum_after: 0.0,
            kinetic_before: 0.0,
            kinetic_after: 0.0,
            energy_loss_percent: 0.0,
        };
        let code = unsafe {
            mechanics_collide(
                1.0,
                2.0,
                1.0,
                2.0,
                MechanicsCollisionKind::Partial,
                0.5,
                ptr::null(),
                &mut out,
            )
        };
        assert_eq!(code, MechanicsErrorCode::NoRelativeMotion);
    }

    #[test]
    fn test_beam_coincident_supports() {
        let loads = [MechanicsPointLoad {
            position: 1.0,
            force: 100.0,
        }];
        let mut out = MechanicsBeamReactions {
            reaction_a: 0.0,
            reaction_b: 0.0,
            beam_weight: 0.0,
            total_downward: 0.0,
        };
        let code = unsafe {
            mechanics_beam(4.0, 10.0, 2.0, 2.0, loads.as_ptr(), loads.len(), ptr::null(), &mut out)
        };
        assert_eq!(code, MechanicsErrorCode::CoincidentSupports);
    }

    #[test]
    fn test_beam_without_loads_accepts_null() {
        let mut out = MechanicsBeamReactions {
            reaction_a: 0.0,
            reaction_b: 0.0,
            beam_weight: 0.0,
            total_downward: 0.0,
        };
        let code =
            unsafe { mechanics_beam(4.0, 10.0, 0.0, 4.0, ptr::null(), 0, ptr::null(), &mut out) };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert!((out.reaction_a - out.reaction_b).abs() < 1e-9);
        assert!((out.reaction_a + out.reaction_b - 98.1).abs() < 1e-9);
    }

    #[test]
    fn test_center_of_mass_empty_is_domain_error() {
        let (mut x, mut y) = (0.0, 0.0);
        let code = unsafe { mechanics_center_of_mass(ptr::null(), 0, &mut x, &mut y) };
        assert_eq!(code, MechanicsErrorCode::DomainError);
    }

    #[test]
    fn test_disk_inertia() {
        let mut out = 0.0;
        let code = unsafe {
            mechanics_moment_of_inertia(2.0, MechanicsInertiaShape::Disk, 0.5, &mut out)
        };
        assert_eq!(code, MechanicsErrorCode::Ok);
        assert!((out - 0.25).abs() < 1e-12);
    }
}
