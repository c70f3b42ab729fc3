use rhai::{Dynamic, Engine, EvalAltResult, FLOAT};
use vehicle_control_core::{Rendered, Vector2D, Vector3D};

use crate::coerce::to_f32;
use crate::error::BindingError;

type ScriptResult<T> = Result<T, Box<EvalAltResult>>;

fn component(value: &Dynamic, context: &str) -> ScriptResult<f32> {
    to_f32(value, context).map_err(BindingError::into_eval_error)
}

/// Register `Vector2D` and `Vector3D` value types.
pub fn register_geometry(engine: &mut Engine) -> &mut Engine {
    engine
        .register_type_with_name::<Vector2D>("Vector2D")
        .register_fn("Vector2D", Vector2D::zeros)
        .register_fn("Vector2D", |x: Dynamic, y: Dynamic| -> ScriptResult<Vector2D> {
            Ok(Vector2D::new(component(&x, "x")?, component(&y, "y")?))
        })
        .register_get("x", |v: &mut Vector2D| FLOAT::from(v.x))
        .register_get("y", |v: &mut Vector2D| FLOAT::from(v.y))
        .register_set("x", |v: &mut Vector2D, value: Dynamic| -> ScriptResult<()> {
            v.x = component(&value, "x")?;
            Ok(())
        })
        .register_set("y", |v: &mut Vector2D, value: Dynamic| -> ScriptResult<()> {
            v.y = component(&value, "y")?;
            Ok(())
        })
        .register_fn("==", |a: &mut Vector2D, b: Vector2D| *a == b)
        .register_fn("!=", |a: &mut Vector2D, b: Vector2D| *a != b)
        .register_fn("to_string", |v: &mut Vector2D| Rendered(&*v).to_string())
        .register_fn("to_debug", |v: &mut Vector2D| Rendered(&*v).to_string());

    engine
        .register_type_with_name::<Vector3D>("Vector3D")
        .register_fn("Vector3D", Vector3D::zeros)
        .register_fn(
            "Vector3D",
            |x: Dynamic, y: Dynamic, z: Dynamic| -> ScriptResult<Vector3D> {
                Ok(Vector3D::new(
                    component(&x, "x")?,
                    component(&y, "y")?,
                    component(&z, "z")?,
                ))
            },
        )
        .register_get("x", |v: &mut Vector3D| FLOAT::from(v.x))
        .register_get("y", |v: &mut Vector3D| FLOAT::from(v.y))
        .register_get("z", |v: &mut Vector3D| FLOAT::from(v.z))
        .register_set("x", |v: &mut Vector3D, value: Dynamic| -> ScriptResult<()> {
            v.x = component(&value, "x")?;
            Ok(())
        })
        .register_set("y", |v: &mut Vector3D, value: Dynamic| -> ScriptResult<()> {
            v.y = component(&value, "y")?;
            Ok(())
        })
        .register_set("z", |v: &mut Vector3D, value: Dynamic| -> ScriptResult<()> {
            v.z = component(&value, "z")?;
            Ok(())
        })
        .register_fn("==", |a: &mut Vector3D, b: Vector3D| *a == b)
        .register_fn("!=", |a: &mut Vector3D, b: Vector3D| *a != b)
        .register_fn("to_string", |v: &mut Vector3D| Rendered(&*v).to_string())
        .register_fn("to_debug", |v: &mut Vector3D| Rendered(&*v).to_string())
}
