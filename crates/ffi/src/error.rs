use mechanics_core::{DomainError, MechanicsError};
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// # Design
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait MechanicsFfiError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> MechanicsErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `MechanicsFfiError`.
///
/// Wraps a `MechanicsErrorCode` with a message. Solver errors convert into
/// it through `From<MechanicsError>` so FFI bodies can use `?` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultMechanicsError {
    code: MechanicsErrorCode,
    msg: String,
}

impl DefaultMechanicsError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_result"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: MechanicsErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a C string that is not valid UTF-8.
    pub fn invalid_string(param_name: &str) -> Self {
        Self {
            code: MechanicsErrorCode::InvalidParameter,
            msg: format!("Parameter '{param_name}' is not valid UTF-8"),
        }
    }

    /// Create error for an output buffer that cannot hold every sample.
    ///
    /// # Arguments
    /// * `required` - Number of elements the caller must provide
    /// * `capacity` - Number of elements the caller provided
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: MechanicsErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} samples, {required} required"),
        }
    }

    /// Create error for an enum discriminant outside the declared range.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: MechanicsErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl MechanicsFfiError for DefaultMechanicsError {
    fn code(&self) -> MechanicsErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

impl From<MechanicsError> for DefaultMechanicsError {
    fn from(error: MechanicsError) -> Self {
        let code = match &error {
            MechanicsError::Validation { .. } => MechanicsErrorCode::InvalidParameter,
            MechanicsError::DivisionByZero { .. } => MechanicsErrorCode::DivisionByZero,
            MechanicsError::InvalidDimension { .. } => MechanicsErrorCode::InvalidDimension,
            MechanicsError::InvalidUnit { .. } => MechanicsErrorCode::InvalidUnit,
            MechanicsError::Domain(DomainError::NoRelativeMotion) => {
                MechanicsErrorCode::NoRelativeMotion
            }
            MechanicsError::Domain(DomainError::CoincidentSupports { .. }) => {
                MechanicsErrorCode::CoincidentSupports
            }
            MechanicsError::Domain(_) => MechanicsErrorCode::DomainError,
            MechanicsError::InconsistentResult { .. } => MechanicsErrorCode::InconsistentResult,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

/// FFI error codes returned by mechanics functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicsErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter: negative mass, restitution outside [0, 1], NaN, bad enum value.
    InvalidParameter = 2,

    /// A divisor (mass, time, acceleration, inertia) was zero.
    DivisionByZero = 3,

    /// Cross product requested on planar vectors.
    InvalidDimension = 4,

    /// Unit symbol not listed for the requested category.
    InvalidUnit = 5,

    /// Physically unreachable state (never lands, unreachable height, ...).
    DomainError = 6,

    /// Restitution collision between bodies with no relative velocity.
    NoRelativeMotion = 7,

    /// Beam supports are at the same position.
    CoincidentSupports = 8,

    /// Internal consistency check failed.
    InconsistentResult = 9,

    /// Caller-provided sample buffer is too small; required length is written to `out_len`.
    BufferTooSmall = 10,
}

impl From<DefaultMechanicsError> for MechanicsErrorCode {
    fn from(error: DefaultMechanicsError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, MechanicsErrorCode)> = const { RefCell::new((None, MechanicsErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, MechanicsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, MechanicsErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if an error occurred.
/// - `null` if the last call on this thread succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread (thread-local storage), so this is thread-safe.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// MechanicsProjectileResult result;
/// if (mechanics_projectile(30.0, 45.0, 0.0, NULL, &result) != Ok) {
///     const char* error = mechanics_get_last_error();
///     if (error) {
///         printf("projectile failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn mechanics_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `MechanicsErrorCode::Ok` (0) if the last call on this thread succeeded.
#[no_mangle]
pub extern "C" fn mechanics_get_last_error_code() -> MechanicsErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
