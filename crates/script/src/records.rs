//! Slot tables of the small control records.

use rhai::Dynamic;
use vehicle_control_core::{VehicleControl, WalkerControl, WheelPhysicsControl};

use crate::coerce::{from_f32, from_i32, to_bool, to_f32, to_i32, to_vector3};
use crate::error::BindingError;
use crate::record::ScriptRecord;

impl ScriptRecord for VehicleControl {
    const TYPE_NAME: &'static str = "VehicleControl";
    const FIELDS: &'static [&'static str] = &[
        "throttle",
        "steer",
        "brake",
        "hand_brake",
        "reverse",
        "manual_gear_shift",
        "gear",
    ];

    fn get_field(&self, name: &str) -> Result<Dynamic, BindingError> {
        Ok(match name {
            "throttle" => from_f32(self.throttle),
            "steer" => from_f32(self.steer),
            "brake" => from_f32(self.brake),
            "hand_brake" => Dynamic::from_bool(self.hand_brake),
            "reverse" => Dynamic::from_bool(self.reverse),
            "manual_gear_shift" => Dynamic::from_bool(self.manual_gear_shift),
            "gear" => from_i32(self.gear),
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        })
    }

    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<(), BindingError> {
        match name {
            "throttle" => self.throttle = to_f32(&value, name)?,
            "steer" => self.steer = to_f32(&value, name)?,
            "brake" => self.brake = to_f32(&value, name)?,
            "hand_brake" => self.hand_brake = to_bool(&value, name)?,
            "reverse" => self.reverse = to_bool(&value, name)?,
            "manual_gear_shift" => self.manual_gear_shift = to_bool(&value, name)?,
            "gear" => self.gear = to_i32(&value, name)?,
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        }
        Ok(())
    }
}

impl ScriptRecord for WalkerControl {
    const TYPE_NAME: &'static str = "WalkerControl";
    const FIELDS: &'static [&'static str] = &["direction", "speed", "jump"];

    fn get_field(&self, name: &str) -> Result<Dynamic, BindingError> {
        Ok(match name {
            "direction" => Dynamic::from(self.direction),
            "speed" => from_f32(self.speed),
            "jump" => Dynamic::from_bool(self.jump),
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        })
    }

    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<(), BindingError> {
        match name {
            "direction" => self.direction = to_vector3(value, name)?,
            "speed" => self.speed = to_f32(&value, name)?,
            "jump" => self.jump = to_bool(&value, name)?,
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        }
        Ok(())
    }
}

impl ScriptRecord for WheelPhysicsControl {
    const TYPE_NAME: &'static str = "WheelPhysicsControl";
    const FIELDS: &'static [&'static str] = &[
        "tire_friction",
        "damping_rate",
        "steer_angle",
        "disable_steering",
    ];

    fn get_field(&self, name: &str) -> Result<Dynamic, BindingError> {
        Ok(match name {
            "tire_friction" => from_f32(self.tire_friction),
            "damping_rate" => from_f32(self.damping_rate),
            "steer_angle" => from_f32(self.steer_angle),
            "disable_steering" => Dynamic::from_bool(self.disable_steering),
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        })
    }

    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<(), BindingError> {
        match name {
            "tire_friction" => self.tire_friction = to_f32(&value, name)?,
            "damping_rate" => self.damping_rate = to_f32(&value, name)?,
            "steer_angle" => self.steer_angle = to_f32(&value, name)?,
            "disable_steering" => self.disable_steering = to_bool(&value, name)?,
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        }
        Ok(())
    }
}
