use mechanics_core::physics::oscillations::{
    pendulum, spring_mass, OscillatorSample, PendulumSample, SpringMass,
};
use mechanics_core::Degrees;

use crate::error::MechanicsErrorCode;
use crate::helpers::{fill_buffer, handle_ffi_result_error, write_out};
use crate::{config_from_ptr, MechanicsConfig};

#[repr(C)]
/// Spring-mass state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsOscillatorSample {
    pub time: f64,
    pub position: f64,
    pub velocity: f64,
    pub acceleration: f64,
    pub kinetic: f64,
    pub potential: f64,
}

impl From<&OscillatorSample> for MechanicsOscillatorSample {
    fn from(sample: &OscillatorSample) -> Self {
        Self {
            time: sample.time,
            position: sample.position,
            velocity: sample.velocity,
            acceleration: sample.acceleration,
            kinetic: sample.kinetic,
            potential: sample.potential,
        }
    }
}

#[repr(C)]
/// Pendulum state at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsPendulumSample {
    pub time: f64,

    /// Angle from vertical (degrees).
    pub angle: f64,

    /// Angular velocity (rad/s).
    pub angular_velocity: f64,

    /// Bob position relative to the pivot (m).
    pub x: f64,
    pub y: f64,

    /// Tangential velocity (m/s).
    pub velocity: f64,
    pub kinetic: f64,
    pub potential: f64,
}

impl From<&PendulumSample> for MechanicsPendulumSample {
    fn from(sample: &PendulumSample) -> Self {
        Self {
            time: sample.time,
            angle: *sample.angle.to_degrees(),
            angular_velocity: sample.angular_velocity,
            x: sample.x,
            y: sample.y,
            velocity: sample.velocity,
            kinetic: sample.kinetic,
            potential: sample.potential,
        }
    }
}

#[no_mangle]
/// Sample a mass on an ideal spring over `[0, duration]` into a caller buffer.
///
/// The number of samples is `config.samples` (200 by default). `out_len` always
/// receives the required length, so a first call with `capacity` 0 can size the buffer.
///
/// Returns
/// - `MechanicsErrorCode::Ok` (0) on success
/// - `MechanicsErrorCode::BufferTooSmall` if `capacity` is below the required length
/// - `MechanicsErrorCode::InvalidParameter` for non-positive mass, stiffness, amplitude or duration
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_samples` must be valid for writes of `capacity` elements.
/// - `out_len` must be a valid, non-null pointer to a `usize`.
/// - `out_period` must be null or a valid pointer to an `f64`.
///
/// # Example Usage (C)
/// ```c
/// uintptr_t len = 0;
/// mechanics_spring_mass(0.5, 20.0, 0.1, 0.0, 5.0, NULL, NULL, 0, &len, NULL);
/// MechanicsOscillatorSample* samples = malloc(len * sizeof(MechanicsOscillatorSample));
/// mechanics_spring_mass(0.5, 20.0, 0.1, 0.0, 5.0, NULL, samples, len, &len, NULL);
/// ```
#[expect(clippy::too_many_arguments)]
pub unsafe extern "C" fn mechanics_spring_mass(
    mass: f64,
    stiffness: f64,
    amplitude: f64,
    phase: f64,
    duration: f64,
    config: *const MechanicsConfig,
    out_samples: *mut MechanicsOscillatorSample,
    capacity: usize,
    out_len: *mut usize,
    out_period: *mut f64,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let system = SpringMass::new(mass, stiffness, amplitude).with_phase(Degrees::new(phase));
        let oscillation = spring_mass(system, duration, &config)?;
        if !out_period.is_null() {
            unsafe { write_out(out_period, "out_period", oscillation.period)? };
        }
        let samples = oscillation
            .samples
            .iter()
            .map(MechanicsOscillatorSample::from);
        unsafe { fill_buffer(samples, out_samples, capacity, out_len) }
    })
}

#[no_mangle]
/// Sample a simple pendulum released from rest at `amplitude` degrees.
///
/// Buffer sizing follows `mechanics_spring_mass`. `out_small_angle_warning` is set
/// when the amplitude exceeds `config.small_angle_threshold`, in which case the
/// small-angle solution is less accurate. It may be null.
///
/// # Safety
///
/// - `config` must be null or a valid pointer to a `MechanicsConfig`.
/// - `out_samples` must be valid for writes of `capacity` elements.
/// - `out_len` must be a valid, non-null pointer to a `usize`.
/// - `out_small_angle_warning` must be null or a valid pointer to a `bool`.
#[expect(clippy::too_many_arguments)]
pub unsafe extern "C" fn mechanics_pendulum(
    mass: f64,
    length: f64,
    amplitude: f64,
    duration: f64,
    config: *const MechanicsConfig,
    out_samples: *mut MechanicsPendulumSample,
    capacity: usize,
    out_len: *mut usize,
    out_small_angle_warning: *mut bool,
) -> MechanicsErrorCode {
    handle_ffi_result_error(|| {
        let config = unsafe { config_from_ptr(config)? };
        let oscillation = pendulum(mass, length, Degrees::new(amplitude), duration, &config)?;
        if !out_small_angle_warning.is_null() {
            let warned = oscillation.warning.is_some();
            unsafe { write_out(out_small_angle_warning, "out_small_angle_warning", warned)? };
        }
        let samples = oscillation
            .samples
            .iter()
            .map(MechanicsPendulumSample::from);
        unsafe { fill_buffer(samples, out_samples, capacity, out_len) }
    })
}
