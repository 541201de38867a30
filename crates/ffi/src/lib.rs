//! C interface to the mechanics solvers
//!
//! Every exported function returns a [`MechanicsErrorCode`] and writes its
//! result through out-pointers. On failure the message is available from
//! `mechanics_get_last_error` until the next call on the same thread.
//!
//! Functions that take a `*const MechanicsConfig` accept null for the
//! default Earth configuration.

mod error;
mod helpers;

mod conversion;
mod oscillations;
mod solvers;

pub use conversion::*;
pub use error::*;
pub use oscillations::*;
pub use solvers::*;

use mechanics_core::SolverConfig;

/// Solver settings exposed to C.
///
/// Thresholds not listed here keep their library defaults.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MechanicsConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,

    /// Points per sampled trajectory (at least 2).
    pub samples: usize,

    /// Pendulum amplitude (degrees) above which the small-angle warning fires.
    pub small_angle_threshold: f64,
}

impl From<&MechanicsConfig> for SolverConfig {
    fn from(config: &MechanicsConfig) -> Self {
        let mut solver = SolverConfig::default()
            .with_gravity(config.gravity)
            .with_samples(config.samples);
        solver.small_angle_threshold = config.small_angle_threshold.into();
        solver
    }
}

impl From<&SolverConfig> for MechanicsConfig {
    fn from(config: &SolverConfig) -> Self {
        Self {
            gravity: config.gravity,
            samples: config.samples,
            small_angle_threshold: *config.small_angle_threshold,
        }
    }
}

/// Resolve an optional C config pointer into a validated solver config.
///
/// # Safety
/// `ptr` must be null or point to a valid `MechanicsConfig`.
pub(crate) unsafe fn config_from_ptr(
    ptr: *const MechanicsConfig,
) -> Result<SolverConfig, error::DefaultMechanicsError> {
    let config = if ptr.is_null() {
        SolverConfig::default()
    } else {
        SolverConfig::from(unsafe { &*ptr })
    };
    config.validate()?;
    Ok(config)
}

#[no_mangle]
/// Default Earth configuration (g = 9.81 m/s², 200 samples).
pub extern "C" fn mechanics_default_config() -> MechanicsConfig {
    MechanicsConfig::from(&SolverConfig::default())
}

#[no_mangle]
/// Configuration with custom gravity and default sampling.
pub extern "C" fn mechanics_config_with_gravity(gravity: f64) -> MechanicsConfig {
    MechanicsConfig::from(&SolverConfig::default().with_gravity(gravity))
}
