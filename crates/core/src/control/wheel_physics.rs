use serde::{Deserialize, Serialize};
use std::fmt;

use crate::render::{Render, Rendered};

/// Physical parameters of a single wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelPhysicsControl {
    /// Tire friction scale
    pub tire_friction: f32,
    /// Rotational damping rate
    pub damping_rate: f32,
    /// Maximum steering angle (degrees)
    pub steer_angle: f32,
    pub disable_steering: bool,
}

impl WheelPhysicsControl {
    pub fn new(tire_friction: f32, damping_rate: f32, steer_angle: f32, disable_steering: bool) -> Self {
        Self {
            tire_friction,
            damping_rate,
            steer_angle,
            disable_steering,
        }
    }
}

impl Default for WheelPhysicsControl {
    fn default() -> Self {
        Self {
            tire_friction: 2.0,
            damping_rate: 0.25,
            steer_angle: 70.0,
            disable_steering: false,
        }
    }
}

impl fmt::Display for WheelPhysicsControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WheelPhysicsControl(tire_friction={}, damping_rate={}, steer_angle={}, disable_steering={})",
            Rendered(&self.tire_friction),
            Rendered(&self.damping_rate),
            Rendered(&self.steer_angle),
            Rendered(&self.disable_steering),
        )
    }
}

impl Render for WheelPhysicsControl {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_field_change_breaks_equality() {
        let base = WheelPhysicsControl::new(2.5, 0.3, 45.0, false);
        assert_eq!(base, WheelPhysicsControl::new(2.5, 0.3, 45.0, false));

        let variants = [
            WheelPhysicsControl { tire_friction: 2.6, ..base },
            WheelPhysicsControl { damping_rate: 0.31, ..base },
            WheelPhysicsControl { steer_angle: 44.0, ..base },
            WheelPhysicsControl { disable_steering: true, ..base },
        ];
        for variant in variants {
            assert_ne!(base, variant, "{variant} should differ from {base}");
        }
    }
}
