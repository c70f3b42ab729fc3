use std::os::raw::c_char;
use std::ptr;

use tracing::debug;
use vehicle_control_core::{Vector2D, VehiclePhysicsControl, WheelPhysicsControl};

use crate::error::{ControlErrorCode, DefaultControlError};
use crate::helpers::{
    clear_last_error, copy_to_buffer, handle_ffi_result_error, mut_from_ptr, ref_from_ptr, slice_from_raw,
    track_error, track_result, write_string,
};
use crate::types::{
    Vec2Data, VehiclePhysicsScalars, WheelPhysicsData, VCTL_CURVE_STEERING, VCTL_CURVE_TORQUE,
};

/// Owned `VehiclePhysicsControl` behind an opaque pointer.
///
/// # Thread Safety
/// An instance is a plain value with no internal locking. Callers that share
/// one between threads must synchronise access themselves.
///
/// # Usage
/// ```cpp
/// VehiclePhysicsInstance* physics = nullptr;
/// if (vctl_vehicle_physics_new(&physics) != Ok) {
///     return;
/// }
///
/// Vec2Data torque[] = { {0.0f, 400.0f}, {6000.0f, 300.0f} };
/// vctl_vehicle_physics_set_curve(physics, VCTL_CURVE_TORQUE, torque, 2);
///
/// uintptr_t len = 0;
/// vctl_vehicle_physics_get_wheels(physics, nullptr, 0, &len);  // query size
///
/// vctl_vehicle_physics_destroy(physics);
/// ```
pub struct VehiclePhysicsInstance {
    pub(crate) physics: VehiclePhysicsControl,
}

impl VehiclePhysicsInstance {
    fn new(physics: VehiclePhysicsControl) -> Box<Self> {
        Box::new(Self { physics })
    }

    fn curve(&self, curve: u8) -> Result<&[Vector2D], DefaultControlError> {
        match curve {
            VCTL_CURVE_TORQUE => Ok(self.physics.torque_curve.as_slice()),
            VCTL_CURVE_STEERING => Ok(self.physics.steering_curve.as_slice()),
            _ => Err(unknown_curve(curve)),
        }
    }

    fn curve_mut(&mut self, curve: u8) -> Result<&mut Vec<Vector2D>, DefaultControlError> {
        match curve {
            VCTL_CURVE_TORQUE => Ok(&mut self.physics.torque_curve),
            VCTL_CURVE_STEERING => Ok(&mut self.physics.steering_curve),
            _ => Err(unknown_curve(curve)),
        }
    }
}

fn unknown_curve(curve: u8) -> DefaultControlError {
    DefaultControlError::invalid_parameter(format!(
        "Unknown curve selector {curve}, expected {VCTL_CURVE_TORQUE} (torque) or {VCTL_CURVE_STEERING} (steering)"
    ))
}

/// Store `instance` in `out_instance` and clear the last error, or null it on error.
unsafe fn publish(
    instance: Result<Box<VehiclePhysicsInstance>, DefaultControlError>,
    out_instance: *mut *mut VehiclePhysicsInstance,
) -> ControlErrorCode {
    match track_result(instance) {
        Ok(instance) => {
            unsafe {
                *out_instance = Box::into_raw(instance);
            }
            clear_last_error();
            ControlErrorCode::Ok
        }
        Err(code) => {
            unsafe {
                *out_instance = ptr::null_mut();
            }
            code
        }
    }
}

/// Create an instance holding the default vehicle physics.
///
/// Returns
/// - `ControlErrorCode::Ok` with a valid pointer in `out_instance`
/// - `ControlErrorCode::NullPointer` if `out_instance` is null
///
/// # Safety
/// - `out_instance` must be null or writable.
/// - The caller owns the instance and MUST call `vctl_vehicle_physics_destroy`
///   exactly once.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_new(
    out_instance: *mut *mut VehiclePhysicsInstance,
) -> ControlErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultControlError::null_pointer("out_instance"));
    }

    debug!("Creating default vehicle physics instance");
    let instance = VehiclePhysicsInstance::new(VehiclePhysicsControl::default());
    unsafe { publish(Ok(instance), out_instance) }
}

/// Create an independent copy of `ptr`.
///
/// # Safety
/// - `ptr` must be null or a live instance from this library.
/// - `out_instance` must be null or writable; on failure it is set to null.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_clone(
    ptr: *const VehiclePhysicsInstance,
    out_instance: *mut *mut VehiclePhysicsInstance,
) -> ControlErrorCode {
    if out_instance.is_null() {
        return track_error(&DefaultControlError::null_pointer("out_instance"));
    }

    let copy = unsafe { ref_from_ptr(ptr, "ptr") }
        .map(|instance| VehiclePhysicsInstance::new(instance.physics.clone()));
    unsafe { publish(copy, out_instance) }
}

/// Destroy an instance created by `vctl_vehicle_physics_new` or
/// `vctl_vehicle_physics_clone`. Null is a no-op.
///
/// # Safety
/// `ptr` must not be used again after this call.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_destroy(ptr: *mut VehiclePhysicsInstance) {
    if ptr.is_null() {
        return;
    }

    // SAFETY: created by `Box::into_raw` in `publish` and not freed yet.
    unsafe {
        drop(Box::from_raw(ptr));
    }
}

/// Read the fixed-size fields.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_scalars` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_get_scalars(
    ptr: *const VehiclePhysicsInstance,
    out_scalars: *mut VehiclePhysicsScalars,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { ref_from_ptr(ptr, "ptr") }?;
        let out = unsafe { mut_from_ptr(out_scalars, "out_scalars") }?;
        *out = VehiclePhysicsScalars::from(&instance.physics);
        Ok(())
    })
}

/// Overwrite the fixed-size fields, leaving curves and wheels untouched.
///
/// # Safety
/// `ptr` must be null or a live instance not accessed concurrently.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_set_scalars(
    ptr: *mut VehiclePhysicsInstance,
    scalars: VehiclePhysicsScalars,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { mut_from_ptr(ptr, "ptr") }?;
        scalars.apply_to(&mut instance.physics);
        Ok(())
    })
}

/// Copy a curve into a caller buffer.
///
/// `curve` is `VCTL_CURVE_TORQUE` or `VCTL_CURVE_STEERING`. `*out_len` always
/// receives the curve length; pass `capacity` 0 to query it.
///
/// Returns
/// - `ControlErrorCode::Ok` - the points were copied
/// - `ControlErrorCode::BufferTooSmall` - `capacity` is less than `*out_len`
/// - `ControlErrorCode::InvalidParameter` - unknown curve selector
/// - `ControlErrorCode::NullPointer` - `ptr`, `out_len`, or a needed `out_points` is null
///
/// # Safety
/// `out_points` must be null or writable for `capacity` elements; `out_len`
/// must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_get_curve(
    ptr: *const VehiclePhysicsInstance,
    curve: u8,
    out_points: *mut Vec2Data,
    capacity: usize,
    out_len: *mut usize,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { ref_from_ptr(ptr, "ptr") }?;
        let points: Vec<Vec2Data> = instance
            .curve(curve)?
            .iter()
            .copied()
            .map(Vec2Data::from)
            .collect();
        unsafe { copy_to_buffer(&points, out_points, capacity, out_len, "out_points") }
    })
}

/// Replace a curve with `len` points copied from `points`.
///
/// `points` may be null when `len` is 0, which stores an empty curve.
///
/// # Safety
/// `ptr` must be null or a live instance; a non-null `points` must hold `len`
/// elements.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_set_curve(
    ptr: *mut VehiclePhysicsInstance,
    curve: u8,
    points: *const Vec2Data,
    len: usize,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { mut_from_ptr(ptr, "ptr") }?;
        let points = unsafe { slice_from_raw(points, len, "points") }?;
        *instance.curve_mut(curve)? = points.iter().copied().map(Vector2D::from).collect();
        Ok(())
    })
}

/// Copy the wheels into a caller buffer, in front-left, front-right,
/// rear-left, rear-right order. Sizing works as in `vctl_vehicle_physics_get_curve`.
///
/// # Safety
/// Same contract as `vctl_vehicle_physics_get_curve`.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_get_wheels(
    ptr: *const VehiclePhysicsInstance,
    out_wheels: *mut WheelPhysicsData,
    capacity: usize,
    out_len: *mut usize,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { ref_from_ptr(ptr, "ptr") }?;
        let wheels: Vec<WheelPhysicsData> = instance
            .physics
            .wheels
            .iter()
            .copied()
            .map(WheelPhysicsData::from)
            .collect();
        unsafe { copy_to_buffer(&wheels, out_wheels, capacity, out_len, "out_wheels") }
    })
}

/// Replace the wheels with `len` wheels copied from `wheels`, keeping order.
///
/// # Safety
/// Same contract as `vctl_vehicle_physics_set_curve`.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_set_wheels(
    ptr: *mut VehiclePhysicsInstance,
    wheels: *const WheelPhysicsData,
    len: usize,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { mut_from_ptr(ptr, "ptr") }?;
        let wheels = unsafe { slice_from_raw(wheels, len, "wheels") }?;
        instance.physics.wheels = wheels
            .iter()
            .copied()
            .map(WheelPhysicsControl::from)
            .collect();
        Ok(())
    })
}

/// Field-wise equality of two instances, including curve and wheel order.
///
/// # Safety
/// `a` and `b` must be null or live instances; `out_equal` null or writable.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_equals(
    a: *const VehiclePhysicsInstance,
    b: *const VehiclePhysicsInstance,
    out_equal: *mut bool,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let a = unsafe { ref_from_ptr(a, "a") }?;
        let b = unsafe { ref_from_ptr(b, "b") }?;
        let out = unsafe { mut_from_ptr(out_equal, "out_equal") }?;
        *out = a.physics == b.physics;
        Ok(())
    })
}

/// Render the instance in the canonical text form.
///
/// # Safety
/// `ptr` must be null or a live instance; `out_text` null or writable. The
/// string must be released with `vctl_string_free`.
#[no_mangle]
pub unsafe extern "C" fn vctl_vehicle_physics_to_string(
    ptr: *const VehiclePhysicsInstance,
    out_text: *mut *mut c_char,
) -> ControlErrorCode {
    handle_ffi_result_error(|| {
        let instance = unsafe { ref_from_ptr(ptr, "ptr") }?;
        unsafe { write_string(instance.physics.to_string(), out_text) }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{vctl_get_last_error, vctl_get_last_error_code};
    use std::ffi::CStr;

    struct Handle(*mut VehiclePhysicsInstance);

    impl Handle {
        fn new() -> Self {
            let mut ptr = ptr::null_mut();
            assert_eq!(unsafe { vctl_vehicle_physics_new(&mut ptr) }, ControlErrorCode::Ok);
            assert!(!ptr.is_null());
            Self(ptr)
        }
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            unsafe { vctl_vehicle_physics_destroy(self.0) };
        }
    }

    fn curve_len(handle: &Handle, curve: u8) -> usize {
        let mut len = usize::MAX;
        let code =
            unsafe { vctl_vehicle_physics_get_curve(handle.0, curve, ptr::null_mut(), 0, &mut len) };
        assert!(matches!(code, ControlErrorCode::Ok | ControlErrorCode::BufferTooSmall));
        len
    }

    #[test]
    fn test_scalars_round_trip() {
        let handle = Handle::new();
        let mut scalars = unsafe { std::mem::zeroed::<VehiclePhysicsScalars>() };
        assert_eq!(
            unsafe { vctl_vehicle_physics_get_scalars(handle.0, &mut scalars) },
            ControlErrorCode::Ok
        );
        assert_eq!(scalars.max_rpm, 5000.0);
        assert!(scalars.use_gear_autobox);

        scalars.mass = 1845.0;
        scalars.center_of_mass.z = -0.3;
        assert_eq!(
            unsafe { vctl_vehicle_physics_set_scalars(handle.0, scalars) },
            ControlErrorCode::Ok
        );
        let physics = unsafe { &(*handle.0).physics };
        assert_eq!(physics.mass, 1845.0);
        assert_eq!(physics.center_of_mass.z, -0.3);
        assert_eq!(physics.torque_curve.len(), 2);
    }

    #[test]
    fn test_new_and_clone_clear_previous_error() {
        let mut scalars = unsafe { std::mem::zeroed::<VehiclePhysicsScalars>() };
        assert_eq!(
            unsafe { vctl_vehicle_physics_get_scalars(ptr::null(), &mut scalars) },
            ControlErrorCode::NullPointer
        );
        assert_eq!(vctl_get_last_error_code(), ControlErrorCode::NullPointer);

        let handle = Handle::new();
        assert_eq!(vctl_get_last_error_code(), ControlErrorCode::Ok);
        assert!(vctl_get_last_error().is_null());

        assert_eq!(
            unsafe { vctl_vehicle_physics_get_scalars(ptr::null(), &mut scalars) },
            ControlErrorCode::NullPointer
        );
        let mut copy = ptr::null_mut();
        assert_eq!(
            unsafe { vctl_vehicle_physics_clone(handle.0, &mut copy) },
            ControlErrorCode::Ok
        );
        assert_eq!(vctl_get_last_error_code(), ControlErrorCode::Ok);
        unsafe { vctl_vehicle_physics_destroy(copy) };
    }

    #[test]
    fn test_curve_sizing_protocol() {
        let handle = Handle::new();
        assert_eq!(curve_len(&handle, VCTL_CURVE_TORQUE), 2);

        let mut one = [Vec2Data { x: 0.0, y: 0.0 }];
        let mut len = 0;
        let code = unsafe {
            vctl_vehicle_physics_get_curve(handle.0, VCTL_CURVE_STEERING, one.as_mut_ptr(), 1, &mut len)
        };
        assert_eq!(code, ControlErrorCode::BufferTooSmall);
        assert_eq!(len, 2);
        assert_eq!(vctl_get_last_error_code(), ControlErrorCode::BufferTooSmall);

        let mut two = [Vec2Data { x: 0.0, y: 0.0 }; 2];
        let code = unsafe {
            vctl_vehicle_physics_get_curve(handle.0, VCTL_CURVE_STEERING, two.as_mut_ptr(), 2, &mut len)
        };
        assert_eq!(code, ControlErrorCode::Ok);
        assert_eq!(two[1], Vec2Data { x: 10.0, y: 0.5 });
        assert!(vctl_get_last_error().is_null());
    }

    #[test]
    fn test_set_empty_and_unknown_curve() {
        let handle = Handle::new();
        assert_eq!(
            unsafe { vctl_vehicle_physics_set_curve(handle.0, VCTL_CURVE_TORQUE, ptr::null(), 0) },
            ControlErrorCode::Ok
        );
        assert_eq!(curve_len(&handle, VCTL_CURVE_TORQUE), 0);

        let points = [Vec2Data { x: 1.0, y: 1.0 }];
        assert_eq!(
            unsafe { vctl_vehicle_physics_set_curve(handle.0, 7, points.as_ptr(), 1) },
            ControlErrorCode::InvalidParameter
        );
        let message = unsafe { CStr::from_ptr(vctl_get_last_error()) };
        assert!(message.to_str().unwrap().contains("Unknown curve selector 7"));
    }

    #[test]
    fn test_wheels_keep_order_and_clone_is_independent() {
        let handle = Handle::new();
        let wheels: Vec<WheelPhysicsData> = (1..=4u8)
            .map(|i| WheelPhysicsData {
                tire_friction: f32::from(i),
                ..WheelPhysicsControl::default().into()
            })
            .collect();
        assert_eq!(
            unsafe { vctl_vehicle_physics_set_wheels(handle.0, wheels.as_ptr(), wheels.len()) },
            ControlErrorCode::Ok
        );

        let mut copy = ptr::null_mut();
        assert_eq!(
            unsafe { vctl_vehicle_physics_clone(handle.0, &mut copy) },
            ControlErrorCode::Ok
        );
        let copy = Handle(copy);

        let mut equal = false;
        unsafe { vctl_vehicle_physics_equals(handle.0, copy.0, &mut equal) };
        assert!(equal);

        let reversed: Vec<WheelPhysicsData> = wheels.iter().rev().copied().collect();
        unsafe { vctl_vehicle_physics_set_wheels(copy.0, reversed.as_ptr(), reversed.len()) };
        unsafe { vctl_vehicle_physics_equals(handle.0, copy.0, &mut equal) };
        assert!(!equal);

        let mut out = [WheelPhysicsData::from(WheelPhysicsControl::default()); 4];
        let mut len = 0;
        unsafe { vctl_vehicle_physics_get_wheels(handle.0, out.as_mut_ptr(), 4, &mut len) };
        assert_eq!(len, 4);
        assert_eq!(out.to_vec(), wheels);
    }

    #[test]
    fn test_null_handles() {
        assert_eq!(
            unsafe { vctl_vehicle_physics_new(ptr::null_mut()) },
            ControlErrorCode::NullPointer
        );

        let mut copy = ptr::NonNull::<VehiclePhysicsInstance>::dangling().as_ptr();
        assert_eq!(
            unsafe { vctl_vehicle_physics_clone(ptr::null(), &mut copy) },
            ControlErrorCode::NullPointer
        );
        assert!(copy.is_null());

        let mut len = 0;
        assert_eq!(
            unsafe { vctl_vehicle_physics_get_wheels(ptr::null(), ptr::null_mut(), 0, &mut len) },
            ControlErrorCode::NullPointer
        );
        unsafe { vctl_vehicle_physics_destroy(ptr::null_mut()) };
    }

    #[test]
    fn test_to_string() {
        let handle = Handle::new();
        let mut text = ptr::null_mut();
        assert_eq!(
            unsafe { vctl_vehicle_physics_to_string(handle.0, &mut text) },
            ControlErrorCode::Ok
        );
        let rendered = unsafe { CStr::from_ptr(text) }.to_str().unwrap().to_owned();
        unsafe { crate::strings::vctl_string_free(text) };
        assert!(rendered.starts_with("VehiclePhysicsControl(torque_curve=[Vector2D(x=0, y=500), "));
        assert!(rendered.ends_with("wheels=[])"));
    }
}
