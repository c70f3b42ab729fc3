use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

/// Common interface for FFI error types.
///
/// - `code()` - the error code passed across the FFI boundary
/// - `msg()` - the diagnostic message kept for `vctl_get_last_error`
pub(crate) trait ControlError {
    fn code(&self) -> ControlErrorCode;

    fn msg(&self) -> &str;
}

/// Default implementation of `ControlError` for the failures this library reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultControlError {
    code: ControlErrorCode,
    msg: String,
}

impl DefaultControlError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out_instance"`, `"ptr"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: ControlErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for invalid parameter.
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: ControlErrorCode::InvalidParameter,
            msg: message,
        }
    }

    /// Create error for a caller buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `param_name` - The output buffer parameter (e.g., `"out_points"`)
    /// * `needed` - Number of elements the result has
    /// * `capacity` - Number of elements the caller provided room for
    pub fn buffer_too_small(param_name: &str, needed: usize, capacity: usize) -> Self {
        Self {
            code: ControlErrorCode::BufferTooSmall,
            msg: format!("Buffer '{param_name}' holds {capacity} elements, {needed} required"),
        }
    }

    /// Create error for a string that is not valid UTF-8 or contains a NUL byte.
    pub fn invalid_string(param_name: &str) -> Self {
        Self {
            code: ControlErrorCode::InvalidString,
            msg: format!("String '{param_name}' is not valid UTF-8 without interior NUL bytes"),
        }
    }
}

impl ControlError for DefaultControlError {
    fn code(&self) -> ControlErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by vehicle control functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Invalid parameter passed to function (e.g., unknown curve selector).
    InvalidParameter = 2,

    /// Output buffer too small. The required length has been written to `out_len`.
    BufferTooSmall = 3,

    /// String argument is not valid UTF-8, or a result contains an interior NUL.
    InvalidString = 4,
}

impl From<DefaultControlError> for ControlErrorCode {
    fn from(error: DefaultControlError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    static LAST_ERROR: RefCell<(Option<CString>, ControlErrorCode)> = const { RefCell::new((None, ControlErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, ControlErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, ControlErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if it succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// VehiclePhysicsInstance* physics = nullptr;
/// vctl_vehicle_physics_new(&physics);
/// uintptr_t len = 0;
/// Vec2Data points[2];
/// if (vctl_vehicle_physics_get_curve(physics, VCTL_CURVE_TORQUE, points, 2, &len) != Ok) {
///     printf("curve read failed: %s\n", vctl_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn vctl_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code (`Ok` if the last call succeeded).
///
/// Error codes are stored per-thread, so this is thread-safe.
#[no_mangle]
pub extern "C" fn vctl_get_last_error_code() -> ControlErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
