use std::ffi::CString;
use std::os::raw::c_char;

/// Release a string returned by any `*_to_string` or `vctl_opendrive_load` call.
///
/// Passing null is a no-op.
///
/// # Safety
/// `text` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn vctl_string_free(text: *mut c_char) {
    if text.is_null() {
        return;
    }

    // SAFETY: the pointer came from `CString::into_raw` in this library.
    unsafe {
        drop(CString::from_raw(text));
    }
}
