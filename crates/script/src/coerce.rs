//! Scalar and native-object coercions from script values.
//!
//! Floats accept both script floats and integers, matching how numeric
//! literals are written in scripts (`max_rpm = 6000`). Everything else is
//! strict: booleans must be booleans and native objects must be the exact
//! registered type.

use rhai::{Array, Dynamic, FLOAT, INT};
use vehicle_control_core::{Vector2D, Vector3D, WheelPhysicsControl};

use crate::error::BindingError;

/// Narrow a script number to `f32`; values outside its range saturate to infinity.
///
/// # Errors
/// [`BindingError::TypeConversion`] if `value` is neither a float nor an integer.
pub fn to_f32(value: &Dynamic, context: &str) -> Result<f32, BindingError> {
    if let Ok(v) = value.as_float() {
        return Ok(v as f32);
    }
    value
        .as_int()
        .map(|v| v as f32)
        .map_err(|found| BindingError::type_conversion(context, "float", found))
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not a boolean.
pub fn to_bool(value: &Dynamic, context: &str) -> Result<bool, BindingError> {
    value
        .as_bool()
        .map_err(|found| BindingError::type_conversion(context, "bool", found))
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not an integer or does not
/// fit in 32 bits.
pub fn to_i32(value: &Dynamic, context: &str) -> Result<i32, BindingError> {
    let v = value
        .as_int()
        .map_err(|found| BindingError::type_conversion(context, "int", found))?;
    i32::try_from(v).map_err(|_| {
        BindingError::type_conversion(context, "int", format!("out-of-range integer {v}"))
    })
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not an array.
pub fn to_array(value: Dynamic, context: &str) -> Result<Array, BindingError> {
    value
        .into_array()
        .map_err(|found| BindingError::type_conversion(context, "array", found))
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not a `Vector2D`.
pub fn to_vector2(value: Dynamic, context: &str) -> Result<Vector2D, BindingError> {
    let found = value.type_name();
    value
        .try_cast::<Vector2D>()
        .ok_or_else(|| BindingError::type_conversion(context, "Vector2D", found))
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not a `Vector3D`.
pub fn to_vector3(value: Dynamic, context: &str) -> Result<Vector3D, BindingError> {
    let found = value.type_name();
    value
        .try_cast::<Vector3D>()
        .ok_or_else(|| BindingError::type_conversion(context, "Vector3D", found))
}

/// # Errors
/// [`BindingError::TypeConversion`] if `value` is not a `WheelPhysicsControl`.
pub fn to_wheel(value: Dynamic, context: &str) -> Result<WheelPhysicsControl, BindingError> {
    let found = value.type_name();
    value
        .try_cast::<WheelPhysicsControl>()
        .ok_or_else(|| BindingError::type_conversion(context, "WheelPhysicsControl", found))
}

pub fn from_f32(value: f32) -> Dynamic {
    Dynamic::from_float(FLOAT::from(value))
}

pub fn from_i32(value: i32) -> Dynamic {
    Dynamic::from_int(INT::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_accepts_integers() {
        assert_eq!(to_f32(&Dynamic::from_int(6000), "max_rpm"), Ok(6000.0));
        assert_eq!(to_f32(&Dynamic::from_float(0.25), "damping_rate"), Ok(0.25));
    }

    #[test]
    fn test_float_rejects_strings() {
        let err = to_f32(&Dynamic::from("fast"), "max_rpm").unwrap_err();
        assert!(matches!(
            err,
            BindingError::TypeConversion { ref context, expected: "float", .. } if context == "max_rpm"
        ));
    }

    #[test]
    fn test_int_rejects_floats_and_overflow() {
        assert_eq!(to_i32(&Dynamic::from_int(-1), "gear"), Ok(-1));
        assert!(to_i32(&Dynamic::from_float(1.0), "gear").is_err());
        assert!(to_i32(&Dynamic::from_int(INT::from(i32::MAX) + 1), "gear").is_err());
    }

    #[test]
    fn test_bool_is_strict() {
        assert_eq!(to_bool(&Dynamic::from_bool(true), "jump"), Ok(true));
        assert!(to_bool(&Dynamic::from_int(1), "jump").is_err());
    }

    #[test]
    fn test_native_objects() {
        let v = Vector3D::new(0.0, 1.0, 0.0);
        assert_eq!(to_vector3(Dynamic::from(v), "direction"), Ok(v));
        assert!(to_vector3(Dynamic::from(Vector2D::new(0.0, 1.0)), "direction").is_err());
        assert!(to_wheel(Dynamic::from_float(2.0), "wheels").is_err());
    }
}
