//! Vehicle physics parameters: engine, gearbox, chassis and wheels.
//!
//! # Curves
//!
//! Torque and steering curves are ordered point sequences the consuming
//! physics engine interpolates piecewise:
//! - `torque_curve`: `(rpm, torque)` samples
//! - `steering_curve`: `(speed, steer_ratio)` samples
//!
//! A curve needs at least one point to be meaningful to the consumer, but the
//! record itself accepts empty curves.
//!
//! # Wheels
//!
//! The wheel collection is ordered. By convention of the physics consumer the
//! first four entries are front-left, front-right, rear-left and rear-right
//! (see [`WheelPosition`]).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::control::wheel_physics::WheelPhysicsControl;
use crate::geom::{Vector2D, Vector3D};
use crate::render::Rendered;

/// Number of wheel slots the physics consumer understands.
pub const MAX_WHEELS: usize = 4;

/// Conventional position of a wheel inside [`VehiclePhysicsControl::wheels`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WheelPosition {
    FrontLeft = 0,
    FrontRight = 1,
    RearLeft = 2,
    RearRight = 3,
}

impl WheelPosition {
    /// All positions in collection order
    pub const ALL: [WheelPosition; MAX_WHEELS] = [
        WheelPosition::FrontLeft,
        WheelPosition::FrontRight,
        WheelPosition::RearLeft,
        WheelPosition::RearRight,
    ];

    /// Index of this position in the wheel collection
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert a collection index back into a position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether this wheel sits on the front axle
    pub fn is_front(self) -> bool {
        matches!(self, WheelPosition::FrontLeft | WheelPosition::FrontRight)
    }
}

/// Physical parameters of a whole vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehiclePhysicsControl {
    /// Engine torque as a function of rpm
    pub torque_curve: Vec<Vector2D>,
    pub max_rpm: f32,
    /// Engine moment of inertia
    pub moi: f32,
    pub damping_rate_full_throttle: f32,
    pub damping_rate_zero_throttle_clutch_engaged: f32,
    pub damping_rate_zero_throttle_clutch_disengaged: f32,

    pub use_gear_autobox: bool,
    /// Seconds spent switching gears
    pub gear_switch_time: f32,
    pub clutch_strength: f32,

    /// Vehicle mass (kg)
    pub mass: f32,
    pub drag_coefficient: f32,

    /// Center of mass offset, vehicle frame
    pub center_of_mass: Vector3D,

    /// Steering ratio as a function of speed
    pub steering_curve: Vec<Vector2D>,
    pub wheels: Vec<WheelPhysicsControl>,
}

impl Default for VehiclePhysicsControl {
    fn default() -> Self {
        Self {
            torque_curve: vec![Vector2D::new(0.0, 500.0), Vector2D::new(5000.0, 500.0)],
            max_rpm: 5000.0,
            moi: 1.0,
            damping_rate_full_throttle: 0.15,
            damping_rate_zero_throttle_clutch_engaged: 2.0,
            damping_rate_zero_throttle_clutch_disengaged: 0.35,
            use_gear_autobox: true,
            gear_switch_time: 0.5,
            clutch_strength: 10.0,
            mass: 1000.0,
            drag_coefficient: 0.3,
            center_of_mass: Vector3D::zeros(),
            steering_curve: vec![Vector2D::new(0.0, 1.0), Vector2D::new(10.0, 0.5)],
            wheels: Vec::new(),
        }
    }
}

impl VehiclePhysicsControl {
    /// Wheel stored at a conventional position, if the collection is long enough.
    pub fn wheel(&self, position: WheelPosition) -> Option<&WheelPhysicsControl> {
        self.wheels.get(position.index())
    }

    /// Mutable access to the wheel at a conventional position.
    pub fn wheel_mut(&mut self, position: WheelPosition) -> Option<&mut WheelPhysicsControl> {
        self.wheels.get_mut(position.index())
    }

    /// Whether the wheel collection has more entries than the consumer reads.
    pub fn has_excess_wheels(&self) -> bool {
        self.wheels.len() > MAX_WHEELS
    }
}

impl fmt::Display for VehiclePhysicsControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VehiclePhysicsControl(torque_curve={}, max_rpm={}, moi={}, damping_rate_full_throttle={}, \
             damping_rate_zero_throttle_clutch_engaged={}, damping_rate_zero_throttle_clutch_disengaged={}, \
             use_gear_autobox={}, gear_switch_time={}, clutch_strength={}, mass={}, drag_coefficient={}, \
             center_of_mass={}, steering_curve={}, wheels={})",
            Rendered(self.torque_curve.as_slice()),
            Rendered(&self.max_rpm),
            Rendered(&self.moi),
            Rendered(&self.damping_rate_full_throttle),
            Rendered(&self.damping_rate_zero_throttle_clutch_engaged),
            Rendered(&self.damping_rate_zero_throttle_clutch_disengaged),
            Rendered(&self.use_gear_autobox),
            Rendered(&self.gear_switch_time),
            Rendered(&self.clutch_strength),
            Rendered(&self.mass),
            Rendered(&self.drag_coefficient),
            Rendered(&self.center_of_mass),
            Rendered(self.steering_curve.as_slice()),
            Rendered(self.wheels.as_slice()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_positions_follow_collection_order() {
        for (i, position) in WheelPosition::ALL.iter().enumerate() {
            assert_eq!(position.index(), i);
            assert_eq!(WheelPosition::from_index(i), Some(*position));
        }
        assert_eq!(WheelPosition::from_index(MAX_WHEELS), None);
        assert!(WheelPosition::FrontRight.is_front());
        assert!(!WheelPosition::RearLeft.is_front());
    }

    #[test]
    fn test_wheel_lookup_by_position() {
        let mut physics = VehiclePhysicsControl {
            wheels: vec![
                WheelPhysicsControl::new(1.0, 0.25, 70.0, false),
                WheelPhysicsControl::new(2.0, 0.25, 70.0, false),
                WheelPhysicsControl::new(3.0, 0.25, 0.0, true),
            ],
            ..Default::default()
        };

        assert_eq!(
            physics.wheel(WheelPosition::RearLeft).map(|w| w.tire_friction),
            Some(3.0)
        );
        assert!(physics.wheel(WheelPosition::RearRight).is_none());

        if let Some(wheel) = physics.wheel_mut(WheelPosition::FrontLeft) {
            wheel.steer_angle = 35.0;
        }
        assert_eq!(physics.wheels[0].steer_angle, 35.0);
        assert!(!physics.has_excess_wheels());
    }
}
