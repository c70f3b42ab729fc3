use std::os::raw::c_char;
use std::path::PathBuf;

use vehicle_control_core::{MapLookupConfig, OpenDrive};

use crate::error::ControlErrorCode;
use crate::helpers::{handle_ffi_result_error, str_from_ptr, write_string};

/// Load the `OpenDrive` XML of a map.
///
/// - `content_dir`: directory searched recursively for `<map>.xodr`; null
///   uses the default `Content` directory.
/// - `map_name`: engine map reference such as `/Game/Maps/Town01` or
///   `UEDPIE_0_Town01`.
/// - `out_xml`: receives the file contents, or an empty string if no file
///   matches or it cannot be read.
///
/// Returns
/// - `ControlErrorCode::Ok` - `out_xml` holds a string to release with `vctl_string_free`
/// - `ControlErrorCode::NullPointer` - `map_name` or `out_xml` is null
/// - `ControlErrorCode::InvalidString` - an argument is not valid UTF-8
///
/// # Safety
/// Non-null string arguments must be NUL-terminated. `out_xml` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vctl_opendrive_load(
    content_dir: *const c_char,
    map_name: *const c_char,
    out_xml: *mut *mut c_char,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let map_name = unsafe { str_from_ptr(map_name, "map_name") }?;
        let mut config = MapLookupConfig::default();
        if !content_dir.is_null() {
            config.content_dir = PathBuf::from(unsafe { str_from_ptr(content_dir, "content_dir") }?);
        }

        let xml = OpenDrive::new(config).load(map_name);
        unsafe { write_string(xml, out_xml) }
    })
}
