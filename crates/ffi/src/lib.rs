//! C ABI for the vehicle control records.
//!
//! Small records (`VehicleControlData`, `WalkerControlData`,
//! `WheelPhysicsData`) are passed by value. Vehicle physics lives behind the
//! opaque `VehiclePhysicsInstance` handle because its curves and wheels are
//! variable length; they are copied in and out through caller buffers.
//!
//! Every fallible function returns a `ControlErrorCode` and records a message
//! retrievable with `vctl_get_last_error` on the calling thread. Strings
//! returned by the library are released with `vctl_string_free`.
//!
//! The C header `VehicleControlFFI.h` is generated at build time by cbindgen.

pub mod controls;
pub mod error;
mod helpers;
pub mod opendrive;
pub mod physics;
pub mod strings;
pub mod types;

pub use error::ControlErrorCode;
pub use physics::VehiclePhysicsInstance;
pub use types::{
    Vec2Data, Vec3Data, VehicleControlData, VehiclePhysicsScalars, WalkerControlData,
    WheelPhysicsData, VCTL_CURVE_STEERING, VCTL_CURVE_TORQUE,
};
