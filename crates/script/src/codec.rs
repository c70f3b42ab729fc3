//! Copy-in/copy-out conversion between script arrays and native sequences.
//!
//! Curve points may be written in scripts either as native `Vector2D` values
//! or as `[x, y]` pairs; both shapes may be mixed within one curve. Decoding
//! always produces a fresh native sequence and encoding a fresh script array,
//! so a script mutating a value it read never touches the stored record.

use rhai::{Array, Dynamic};
use vehicle_control_core::{Vector2D, WheelPhysicsControl};

use crate::coerce::{to_f32, to_wheel};
use crate::error::BindingError;

const POINT_SHAPE: &str = "Vector2D or [x, y] pair";

/// Decode a script list of curve points in order.
///
/// # Errors
/// [`BindingError::TypeConversion`] naming the index of the first element
/// that is neither a `Vector2D` nor a numeric array of at least two elements.
/// Elements past the second are ignored.
pub fn decode_curve(list: &[Dynamic]) -> Result<Vec<Vector2D>, BindingError> {
    list.iter()
        .enumerate()
        .map(|(index, item)| decode_point(index, item))
        .collect()
}

fn decode_point(index: usize, item: &Dynamic) -> Result<Vector2D, BindingError> {
    if let Some(point) = item.clone().try_cast::<Vector2D>() {
        return Ok(point);
    }

    let context = format!("curve[{index}]");
    let found = item.type_name();
    let Ok(pair) = item.clone().into_array() else {
        return Err(BindingError::type_conversion(context, POINT_SHAPE, found));
    };

    match pair.as_slice() {
        [x, y, ..] => Ok(Vector2D::new(to_f32(x, &context)?, to_f32(y, &context)?)),
        _ => Err(BindingError::type_conversion(
            context,
            POINT_SHAPE,
            format!("array of length {}", pair.len()),
        )),
    }
}

/// Encode curve points as a script array of `Vector2D` values.
pub fn encode_curve(points: &[Vector2D]) -> Array {
    points.iter().copied().map(Dynamic::from).collect()
}

/// Decode a script list of `WheelPhysicsControl` values, keeping order.
///
/// # Errors
/// [`BindingError::TypeConversion`] for the first element that is not a wheel.
pub fn decode_wheels(list: &[Dynamic]) -> Result<Vec<WheelPhysicsControl>, BindingError> {
    list.iter()
        .enumerate()
        .map(|(index, item)| to_wheel(item.clone(), &format!("wheels[{index}]")))
        .collect()
}

pub fn encode_wheels(wheels: &[WheelPhysicsControl]) -> Array {
    wheels.iter().copied().map(Dynamic::from).collect()
}
