//! Vehicle Control Core Library
//!
//! Plain value records describing how an external simulator should drive a
//! vehicle or a walker, and the physical parameters of a vehicle's engine,
//! gearbox, chassis and wheels.
//!
//! ## Records
//!
//! - [`VehicleControl`] - throttle, steering, braking and gear inputs
//! - [`WalkerControl`] - walking direction, speed and jump flag
//! - [`WheelPhysicsControl`] - per-wheel friction, damping and steering limits
//! - [`VehiclePhysicsControl`] - engine curves, mass properties and wheels
//!
//! Every record has documented defaults, exact field-wise equality and a
//! canonical text rendering (see [`render`]) that tooling may parse.
//!
//! The [`opendrive`] module locates and loads `OpenDrive` map files by map name.

pub mod control;
pub mod geom;
pub mod opendrive;
pub mod render;

pub use control::{
    VehicleControl, VehiclePhysicsControl, WalkerControl, WheelPhysicsControl, WheelPosition,
    MAX_WHEELS,
};
pub use geom::{Vector2D, Vector3D};
pub use opendrive::{MapLookupConfig, OpenDrive, OpenDriveError};
pub use render::{Render, Rendered};
