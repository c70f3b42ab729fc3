//! C layouts of the control records.
//!
//! The small records cross the boundary by value. `VehiclePhysicsControl`
//! holds variable-length curves and wheels, so only its fixed-size part has a
//! C mirror ([`VehiclePhysicsScalars`]); the rest is reached through
//! [`crate::physics::VehiclePhysicsInstance`].

use vehicle_control_core::{
    Vector2D, Vector3D, VehicleControl, VehiclePhysicsControl, WalkerControl,
    WheelPhysicsControl,
};

/// Curve selector for the torque curve (`(rpm, torque)` points).
pub const VCTL_CURVE_TORQUE: u8 = 0;
/// Curve selector for the steering curve (`(speed, steer_ratio)` points).
pub const VCTL_CURVE_STEERING: u8 = 1;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2Data {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3Data {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<Vector2D> for Vec2Data {
    fn from(v: Vector2D) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vec2Data> for Vector2D {
    fn from(v: Vec2Data) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector3D> for Vec3Data {
    fn from(v: Vector3D) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<Vec3Data> for Vector3D {
    fn from(v: Vec3Data) -> Self {
        Vector3D::new(v.x, v.y, v.z)
    }
}

/// C layout of `VehicleControl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleControlData {
    /// Throttle in [0, 1]
    pub throttle: f32,
    /// Steering in [-1, 1]
    pub steer: f32,
    /// Brake in [0, 1]
    pub brake: f32,
    pub hand_brake: bool,
    pub reverse: bool,
    pub manual_gear_shift: bool,
    pub gear: i32,
}

impl From<VehicleControl> for VehicleControlData {
    fn from(c: VehicleControl) -> Self {
        Self {
            throttle: c.throttle,
            steer: c.steer,
            brake: c.brake,
            hand_brake: c.hand_brake,
            reverse: c.reverse,
            manual_gear_shift: c.manual_gear_shift,
            gear: c.gear,
        }
    }
}

impl From<VehicleControlData> for VehicleControl {
    fn from(c: VehicleControlData) -> Self {
        VehicleControl::new(
            c.throttle,
            c.steer,
            c.brake,
            c.hand_brake,
            c.reverse,
            c.manual_gear_shift,
            c.gear,
        )
    }
}

/// C layout of `WalkerControl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkerControlData {
    pub direction: Vec3Data,
    pub speed: f32,
    pub jump: bool,
}

impl From<WalkerControl> for WalkerControlData {
    fn from(w: WalkerControl) -> Self {
        Self {
            direction: w.direction.into(),
            speed: w.speed,
            jump: w.jump,
        }
    }
}

impl From<WalkerControlData> for WalkerControl {
    fn from(w: WalkerControlData) -> Self {
        WalkerControl::new(w.direction.into(), w.speed, w.jump)
    }
}

/// C layout of `WheelPhysicsControl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelPhysicsData {
    pub tire_friction: f32,
    pub damping_rate: f32,
    /// Maximum steering angle (degrees)
    pub steer_angle: f32,
    pub disable_steering: bool,
}

impl From<WheelPhysicsControl> for WheelPhysicsData {
    fn from(w: WheelPhysicsControl) -> Self {
        Self {
            tire_friction: w.tire_friction,
            damping_rate: w.damping_rate,
            steer_angle: w.steer_angle,
            disable_steering: w.disable_steering,
        }
    }
}

impl From<WheelPhysicsData> for WheelPhysicsControl {
    fn from(w: WheelPhysicsData) -> Self {
        WheelPhysicsControl::new(
            w.tire_friction,
            w.damping_rate,
            w.steer_angle,
            w.disable_steering,
        )
    }
}

/// Fixed-size fields of `VehiclePhysicsControl`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehiclePhysicsScalars {
    pub max_rpm: f32,
    pub moi: f32,
    pub damping_rate_full_throttle: f32,
    pub damping_rate_zero_throttle_clutch_engaged: f32,
    pub damping_rate_zero_throttle_clutch_disengaged: f32,
    pub use_gear_autobox: bool,
    pub gear_switch_time: f32,
    pub clutch_strength: f32,
    pub mass: f32,
    pub drag_coefficient: f32,
    pub center_of_mass: Vec3Data,
}

impl From<&VehiclePhysicsControl> for VehiclePhysicsScalars {
    fn from(p: &VehiclePhysicsControl) -> Self {
        Self {
            max_rpm: p.max_rpm,
            moi: p.moi,
            damping_rate_full_throttle: p.damping_rate_full_throttle,
            damping_rate_zero_throttle_clutch_engaged: p.damping_rate_zero_throttle_clutch_engaged,
            damping_rate_zero_throttle_clutch_disengaged: p
                .damping_rate_zero_throttle_clutch_disengaged,
            use_gear_autobox: p.use_gear_autobox,
            gear_switch_time: p.gear_switch_time,
            clutch_strength: p.clutch_strength,
            mass: p.mass,
            drag_coefficient: p.drag_coefficient,
            center_of_mass: p.center_of_mass.into(),
        }
    }
}

impl VehiclePhysicsScalars {
    /// Overwrite the fixed-size fields of `physics`, leaving curves and wheels alone.
    pub(crate) fn apply_to(self, physics: &mut VehiclePhysicsControl) {
        physics.max_rpm = self.max_rpm;
        physics.moi = self.moi;
        physics.damping_rate_full_throttle = self.damping_rate_full_throttle;
        physics.damping_rate_zero_throttle_clutch_engaged =
            self.damping_rate_zero_throttle_clutch_engaged;
        physics.damping_rate_zero_throttle_clutch_disengaged =
            self.damping_rate_zero_throttle_clutch_disengaged;
        physics.use_gear_autobox = self.use_gear_autobox;
        physics.gear_switch_time = self.gear_switch_time;
        physics.clutch_strength = self.clutch_strength;
        physics.mass = self.mass;
        physics.drag_coefficient = self.drag_coefficient;
        physics.center_of_mass = self.center_of_mass.into();
    }
}
