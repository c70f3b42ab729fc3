use serde::{Deserialize, Serialize};
use std::fmt;

use crate::render::Rendered;

/// Driver inputs applied to a vehicle for one simulation step.
///
/// Ranges are conventions of the consuming simulator and are never clamped
/// here: `throttle` and `brake` in `[0, 1]`, `steer` in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VehicleControl {
    pub throttle: f32,
    pub steer: f32,
    pub brake: f32,
    pub hand_brake: bool,
    pub reverse: bool,
    pub manual_gear_shift: bool,
    /// Gear used when `manual_gear_shift` is set
    pub gear: i32,
}

impl VehicleControl {
    /// Create a control with every field given explicitly.
    #[allow(clippy::fn_params_excessive_bools)]
    pub fn new(
        throttle: f32,
        steer: f32,
        brake: f32,
        hand_brake: bool,
        reverse: bool,
        manual_gear_shift: bool,
        gear: i32,
    ) -> Self {
        Self {
            throttle,
            steer,
            brake,
            hand_brake,
            reverse,
            manual_gear_shift,
            gear,
        }
    }
}

impl fmt::Display for VehicleControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VehicleControl(throttle={}, steer={}, brake={}, hand_brake={}, reverse={}, manual_gear_shift={}, gear={})",
            Rendered(&self.throttle),
            Rendered(&self.steer),
            Rendered(&self.brake),
            Rendered(&self.hand_brake),
            Rendered(&self.reverse),
            Rendered(&self.manual_gear_shift),
            Rendered(&self.gear),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_neutral() {
        let control = VehicleControl::default();
        assert_eq!(control.throttle, 0.0);
        assert_eq!(control.steer, 0.0);
        assert_eq!(control.brake, 0.0);
        assert!(!control.hand_brake);
        assert!(!control.reverse);
        assert!(!control.manual_gear_shift);
        assert_eq!(control.gear, 0);
    }

    #[test]
    fn test_inputs_are_not_clamped() {
        let control = VehicleControl {
            throttle: 1.5,
            steer: -3.0,
            ..Default::default()
        };
        assert_eq!(control.throttle, 1.5);
        assert_eq!(control.steer, -3.0);
    }
}
