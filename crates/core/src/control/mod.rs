//! Control and physics parameter records

pub mod vehicle;
pub mod vehicle_physics;
pub mod walker;
pub mod wheel_physics;

pub use vehicle::VehicleControl;
pub use vehicle_physics::{VehiclePhysicsControl, WheelPosition, MAX_WHEELS};
pub use walker::WalkerControl;
pub use wheel_physics::WheelPhysicsControl;
