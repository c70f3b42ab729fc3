//! Vehicle Control Scripting Bindings
//!
//! Exposes the control records of `vehicle-control-core` to [rhai] scripts.
//!
//! ```
//! use vehicle_control_core::VehiclePhysicsControl;
//! use vehicle_control_script::create_engine;
//!
//! let engine = create_engine();
//! let physics: VehiclePhysicsControl = engine
//!     .eval(r#"
//!         let p = VehiclePhysicsControl(#{ mass: 1500, torque_curve: [[0, 400], [6000, 300]] });
//!         p.max_rpm = 6000;
//!         p
//!     "#)
//!     .unwrap();
//! assert_eq!(physics.mass, 1500.0);
//! assert_eq!(physics.torque_curve.len(), 2);
//! ```
//!
//! ## Values crossing the boundary
//!
//! - Floats accept script integers and floats; integers must fit in `i32`.
//! - Curves accept `Vector2D` values and `[x, y]` pairs, freely mixed.
//! - Collection properties are copied on read and replaced on write: `p.wheels`
//!   returns a fresh array and mutating it does not change `p`.
//!
//! Failures surface as script runtime errors carrying a [`BindingError`];
//! use [`BindingError::from_eval_error`] to get it back on the host side.

pub mod codec;
pub mod coerce;
pub mod construct;
pub mod error;
mod geom;
mod record;
mod records;
pub mod register;
mod vehicle_physics;

pub use codec::{decode_curve, decode_wheels, encode_curve, encode_wheels};
pub use construct::{construct, CallArgs};
pub use error::BindingError;
pub use geom::register_geometry;
pub use record::ScriptRecord;
pub use register::{
    create_engine, create_engine_with, register_control_api, register_record, EngineConfig,
};
