use crate::error::{
    with_last_error_mut, DefaultMechanicsError, MechanicsErrorCode, MechanicsFfiError,
};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
/// Accepts any type implementing `MechanicsFfiError` trait.
pub(crate) fn set_last_error(error: &impl MechanicsFfiError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl MechanicsFfiError) -> MechanicsErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = MechanicsErrorCode::Ok;
    });
}

/// Run an FFI body, recording the error on failure and clearing it on success.
pub(crate) fn handle_ffi_result_error<F>(body: F) -> MechanicsErrorCode
where
    F: FnOnce() -> Result<(), DefaultMechanicsError>,
{
    match body() {
        Ok(()) => {
            clear_last_error();
            MechanicsErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Write `value` through an out-pointer.
///
/// # Safety
/// `ptr` must be null or valid for writes of `T`.
pub(crate) unsafe fn write_out<T>(
    ptr: *mut T,
    name: &str,
    value: T,
) -> Result<(), DefaultMechanicsError> {
    if ptr.is_null() {
        return Err(DefaultMechanicsError::null_pointer(name));
    }
    ptr.write(value);
    Ok(())
}

/// Borrow a null-terminated UTF-8 string from C.
///
/// # Safety
/// `ptr` must be null or point to a null-terminated string that outlives the borrow.
pub(crate) unsafe fn read_str<'a>(
    ptr: *const c_char,
    name: &str,
) -> Result<&'a str, DefaultMechanicsError> {
    if ptr.is_null() {
        return Err(DefaultMechanicsError::null_pointer(name));
    }
    CStr::from_ptr(ptr)
        .to_str()
        .map_err(|_| DefaultMechanicsError::invalid_string(name))
}

/// Borrow a C array as a slice; a zero length accepts a null pointer.
///
/// # Safety
/// When `len > 0`, `ptr` must be valid for reads of `len` elements.
pub(crate) unsafe fn read_slice<'a, T>(
    ptr: *const T,
    len: usize,
    name: &str,
) -> Result<&'a [T], DefaultMechanicsError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(DefaultMechanicsError::null_pointer(name));
    }
    Ok(std::slice::from_raw_parts(ptr, len))
}

/// Copy samples into a caller buffer, reporting the required length either way.
///
/// # Safety
/// `out_len` must be valid for writes. When `capacity > 0`, `out_samples`
/// must be valid for writes of `capacity` elements.
pub(crate) unsafe fn fill_buffer<T, I>(
    samples: I,
    out_samples: *mut T,
    capacity: usize,
    out_len: *mut usize,
) -> Result<(), DefaultMechanicsError>
where
    I: ExactSizeIterator<Item = T>,
{
    let required = samples.len();
    write_out(out_len, "out_len", required)?;
    if required > capacity {
        return Err(DefaultMechanicsError::buffer_too_small(required, capacity));
    }
    if out_samples.is_null() {
        return Err(DefaultMechanicsError::null_pointer("out_samples"));
    }
    for (i, sample) in samples.enumerate() {
        out_samples.add(i).write(sample);
    }
    Ok(())
}
