//! Defaults, equality and rendering of the by-value records.

use std::os::raw::c_char;

use vehicle_control_core::{VehicleControl, WalkerControl, WheelPhysicsControl};

use crate::error::ControlErrorCode;
use crate::helpers::{handle_ffi_result_error, write_string};
use crate::types::{VehicleControlData, WalkerControlData, WheelPhysicsData};

/// Default vehicle control: everything zero or false, gear 0.
#[no_mangle]
pub extern "C" fn vctl_vehicle_control_default() -> VehicleControlData {
    VehicleControl::default().into()
}

/// Field-wise equality, floats compared exactly.
#[no_mangle]
pub extern "C" fn vctl_vehicle_control_equals(a: VehicleControlData, b: VehicleControlData) -> bool {
    VehicleControl::from(a) == VehicleControl::from(b)
}

/// Render `control` in the canonical text form, e.g.
/// `VehicleControl(throttle=0.5, steer=0, brake=0, hand_brake=False, ...)`.
///
/// Returns
/// - `ControlErrorCode::Ok` with a newly allocated string in `out_text`
/// - `ControlErrorCode::NullPointer` if `out_text` is null
///
/// # Safety
/// `out_text` must be null or writable. The string must be released with
/// `vctl_string_free`.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_control_to_string(
    control: VehicleControlData,
    out_text: *mut *mut c_char,
) -> ControlErrorCode {
    handle_ffi_result_error(|| unsafe {
        write_string(VehicleControl::from(control).to_string(), out_text)
    })
}

/// Default walker control: direction (1, 0, 0), standing still, not jumping.
#[no_mangle]
pub extern "C" fn vctl_walker_control_default() -> WalkerControlData {
    WalkerControl::default().into()
}

#[no_mangle]
pub extern "C" fn vctl_walker_control_equals(a: WalkerControlData, b: WalkerControlData) -> bool {
    WalkerControl::from(a) == WalkerControl::from(b)
}

/// Render `control` in the canonical text form.
///
/// # Safety
/// Same contract as `vctl_vehicle_control_to_string`.
#[no_mangle]
pub unsafe extern "C" fn vctl_walker_control_to_string(
    control: WalkerControlData,
    out_text: *mut *mut c_char,
) -> ControlErrorCode {
    handle_ffi_result_error(|| unsafe {
        write_string(WalkerControl::from(control).to_string(), out_text)
    })
}

/// Default wheel: friction 2, damping 0.25, steer angle 70, steering enabled.
#[no_mangle]
pub extern "C" fn vctl_wheel_physics_default() -> WheelPhysicsData {
    WheelPhysicsControl::default().into()
}

#[no_mangle]
pub extern "C" fn vctl_wheel_physics_equals(a: WheelPhysicsData, b: WheelPhysicsData) -> bool {
    WheelPhysicsControl::from(a) == WheelPhysicsControl::from(b)
}

/// Render `wheel` in the canonical text form.
///
/// # Safety
/// Same contract as `vctl_vehicle_control_to_string`.
#[no_mangle]
pub unsafe extern "C" fn vctl_wheel_physics_to_string(
    wheel: WheelPhysicsData,
    out_text: *mut *mut c_char,
) -> ControlErrorCode {
    handle_ffi_result_error(|| unsafe {
        write_string(WheelPhysicsControl::from(wheel).to_string(), out_text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::vctl_string_free;
    use std::ffi::CStr;
    use std::ptr;

    fn render(f: impl FnOnce(*mut *mut c_char) -> ControlErrorCode) -> String {
        let mut text: *mut c_char = ptr::null_mut();
        assert_eq!(f(&mut text), ControlErrorCode::Ok);
        let rendered = unsafe { CStr::from_ptr(text) }
            .to_str()
            .unwrap()
            .to_owned();
        unsafe { vctl_string_free(text) };
        rendered
    }

    #[test]
    fn test_vehicle_control_round_trip() {
        let mut control = vctl_vehicle_control_default();
        assert!(vctl_vehicle_control_equals(control, control));
        assert_eq!(control.gear, 0);

        control.throttle = 0.5;
        control.gear = 1;
        assert!(!vctl_vehicle_control_equals(control, vctl_vehicle_control_default()));
        assert_eq!(
            render(|out| unsafe { vctl_vehicle_control_to_string(control, out) }),
            "VehicleControl(throttle=0.5, steer=0, brake=0, hand_brake=False, reverse=False, manual_gear_shift=False, gear=1)"
        );
    }

    #[test]
    fn test_walker_and_wheel_defaults() {
        let walker = vctl_walker_control_default();
        assert_eq!(walker.direction.x, 1.0);
        assert!(vctl_walker_control_equals(walker, walker));
        assert_eq!(
            render(|out| unsafe { vctl_walker_control_to_string(walker, out) }),
            "WalkerControl(direction=Vector3D(x=1, y=0, z=0), speed=0, jump=False)"
        );

        let wheel = vctl_wheel_physics_default();
        assert_eq!(wheel.steer_angle, 70.0);
        let mut locked = wheel;
        locked.disable_steering = true;
        assert!(!vctl_wheel_physics_equals(wheel, locked));
        assert!(render(|out| unsafe { vctl_wheel_physics_to_string(locked, out) })
            .ends_with("disable_steering=True)"));
    }

    #[test]
    fn test_null_out_text() {
        let code = unsafe {
            vctl_vehicle_control_to_string(vctl_vehicle_control_default(), ptr::null_mut())
        };
        assert_eq!(code, ControlErrorCode::NullPointer);
        assert_eq!(crate::error::vctl_get_last_error_code(), ControlErrorCode::NullPointer);
    }
}
