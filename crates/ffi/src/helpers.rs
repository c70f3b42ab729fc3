use std::ffi::{c_char, CStr, CString};
use std::slice;

use crate::error::{with_last_error_mut, ControlError, ControlErrorCode, DefaultControlError};

/// Set the thread-local error message and code.
/// Accepts any type implementing `ControlError` trait.
pub(crate) fn set_last_error(error: &impl ControlError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = ControlErrorCode::Ok;
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl ControlError) -> ControlErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the error of a failed result and reduce it to its code.
pub(crate) fn track_result<T>(result: Result<T, DefaultControlError>) -> Result<T, ControlErrorCode> {
    result.map_err(|error| track_error(&error))
}

/// Run an FFI body and translate its outcome into a return code,
/// updating the thread-local error either way.
pub(crate) fn handle_ffi_result_error<F>(f: F) -> ControlErrorCode
where
    F: FnOnce() -> Result<(), DefaultControlError>,
{
    match f() {
        Ok(()) => {
            clear_last_error();
            ControlErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow `*ptr`, reporting null as an error named after `param_name`.
///
/// # Safety
/// `ptr` must be null or valid for reads for the returned lifetime.
pub(crate) unsafe fn ref_from_ptr<'a, T>(
    ptr: *const T,
    param_name: &str,
) -> Result<&'a T, DefaultControlError> {
    unsafe { ptr.as_ref() }.ok_or_else(|| DefaultControlError::null_pointer(param_name))
}

/// Mutably borrow `*ptr`, reporting null as an error named after `param_name`.
///
/// # Safety
/// `ptr` must be null or valid for reads and writes for the returned lifetime,
/// with no other live reference to it.
pub(crate) unsafe fn mut_from_ptr<'a, T>(
    ptr: *mut T,
    param_name: &str,
) -> Result<&'a mut T, DefaultControlError> {
    unsafe { ptr.as_mut() }.ok_or_else(|| DefaultControlError::null_pointer(param_name))
}

/// View a caller array as a slice. `ptr` may be null only when `len` is zero.
///
/// # Safety
/// A non-null `ptr` must point to `len` initialised elements.
pub(crate) unsafe fn slice_from_raw<'a, T>(
    ptr: *const T,
    len: usize,
    param_name: &str,
) -> Result<&'a [T], DefaultControlError> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() {
        return Err(DefaultControlError::null_pointer(param_name));
    }
    Ok(unsafe { slice::from_raw_parts(ptr, len) })
}

/// Copy `items` into a caller buffer of `capacity` elements.
///
/// `*out_len` always receives `items.len()`, so a caller can size its buffer
/// by calling once with a capacity of zero.
///
/// # Safety
/// `out_len` must be null or writable. A non-null `out` must be writable for
/// `capacity` elements.
pub(crate) unsafe fn copy_to_buffer<T: Copy>(
    items: &[T],
    out: *mut T,
    capacity: usize,
    out_len: *mut usize,
    param_name: &str,
) -> Result<(), DefaultControlError> {
    if out_len.is_null() {
        return Err(DefaultControlError::null_pointer("out_len"));
    }
    unsafe {
        *out_len = items.len();
    }

    if items.is_empty() {
        return Ok(());
    }
    if capacity < items.len() {
        return Err(DefaultControlError::buffer_too_small(
            param_name,
            items.len(),
            capacity,
        ));
    }
    if out.is_null() {
        return Err(DefaultControlError::null_pointer(param_name));
    }

    unsafe {
        std::ptr::copy_nonoverlapping(items.as_ptr(), out, items.len());
    }
    Ok(())
}

/// Borrow a C string argument as UTF-8.
///
/// # Safety
/// A non-null `ptr` must point to a NUL-terminated string.
pub(crate) unsafe fn str_from_ptr<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultControlError> {
    if ptr.is_null() {
        return Err(DefaultControlError::null_pointer(param_name));
    }
    unsafe { CStr::from_ptr(ptr) }
        .to_str()
        .map_err(|_| DefaultControlError::invalid_string(param_name))
}

/// Hand a Rust string to the caller, who releases it with `vctl_string_free`.
///
/// # Safety
/// `out_text` must be null or writable.
pub(crate) unsafe fn write_string(
    text: String,
    out_text: *mut *mut c_char,
) -> Result<(), DefaultControlError> {
    if out_text.is_null() {
        return Err(DefaultControlError::null_pointer("out_text"));
    }
    let cstring = CString::new(text).map_err(|_| DefaultControlError::invalid_string("out_text"))?;
    unsafe {
        *out_text = cstring.into_raw();
    }
    Ok(())
}
