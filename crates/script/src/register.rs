//! Engine setup: every record, its constructors, properties and operators.

use rhai::{Array, Dynamic, Engine, Map};
use vehicle_control_core::{
    VehicleControl, VehiclePhysicsControl, WalkerControl, WheelPhysicsControl,
};

use crate::construct::{construct, CallArgs};
use crate::error::BindingError;
use crate::geom::register_geometry;
use crate::record::ScriptRecord;

/// Resource limits of a script engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Maximum operations per evaluation (0 = unlimited)
    pub max_operations: u64,
    /// Maximum array length (0 = unlimited)
    pub max_array_size: usize,
    /// Maximum object map size (0 = unlimited)
    pub max_map_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_operations: 1_000_000,
            max_array_size: 10_000,
            max_map_size: 1_000,
        }
    }
}

/// Engine with the control API and default limits.
pub fn create_engine() -> Engine {
    create_engine_with(&EngineConfig::default())
}

pub fn create_engine_with(config: &EngineConfig) -> Engine {
    let mut engine = Engine::new();
    engine
        .set_max_operations(config.max_operations)
        .set_max_array_size(config.max_array_size)
        .set_max_map_size(config.max_map_size);
    register_control_api(&mut engine);
    engine
}

/// Register geometry types and all four control records with `engine`.
pub fn register_control_api(engine: &mut Engine) -> &mut Engine {
    register_geometry(engine);
    register_record::<WheelPhysicsControl>(engine);
    register_record::<VehiclePhysicsControl>(engine);
    register_record::<VehicleControl>(engine);
    register_record::<WalkerControl>(engine)
}

/// Register one record type.
///
/// Constructors are overloaded on arity: `Name()`, `Name(args)`,
/// `Name(kwargs)` and `Name(args, kwargs)` where `args` is an array and
/// `kwargs` an object map. Each slot becomes a read-write property.
pub fn register_record<T: ScriptRecord>(engine: &mut Engine) -> &mut Engine {
    engine
        .register_type_with_name::<T>(T::TYPE_NAME)
        .register_fn(T::TYPE_NAME, T::default)
        .register_fn(T::TYPE_NAME, |args: Array| {
            construct::<T>(&CallArgs::from_script(args, Map::new()))
                .map_err(BindingError::into_eval_error)
        })
        .register_fn(T::TYPE_NAME, |kwargs: Map| {
            construct::<T>(&CallArgs::from_script(Array::new(), kwargs))
                .map_err(BindingError::into_eval_error)
        })
        .register_fn(T::TYPE_NAME, |args: Array, kwargs: Map| {
            construct::<T>(&CallArgs::from_script(args, kwargs))
                .map_err(BindingError::into_eval_error)
        });

    for &name in T::FIELDS {
        engine
            .register_get(name, move |record: &mut T| {
                record
                    .get_field(name)
                    .map_err(BindingError::into_eval_error)
            })
            .register_set(name, move |record: &mut T, value: Dynamic| {
                record
                    .set_field(name, value)
                    .map_err(BindingError::into_eval_error)
            });
    }

    engine
        .register_fn("==", |a: &mut T, b: T| *a == b)
        .register_fn("!=", |a: &mut T, b: T| *a != b)
        .register_fn("to_string", |record: &mut T| record.to_string())
        .register_fn("to_debug", |record: &mut T| record.to_string())
}
