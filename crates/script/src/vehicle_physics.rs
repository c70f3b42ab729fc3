use rhai::Dynamic;
use tracing::warn;
use vehicle_control_core::{VehiclePhysicsControl, MAX_WHEELS};

use crate::codec::{decode_curve, decode_wheels, encode_curve, encode_wheels};
use crate::coerce::{from_f32, to_array, to_bool, to_f32, to_vector3};
use crate::error::BindingError;
use crate::record::ScriptRecord;

impl ScriptRecord for VehiclePhysicsControl {
    const TYPE_NAME: &'static str = "VehiclePhysicsControl";
    const FIELDS: &'static [&'static str] = &[
        "torque_curve",
        "max_rpm",
        "moi",
        "damping_rate_full_throttle",
        "damping_rate_zero_throttle_clutch_engaged",
        "damping_rate_zero_throttle_clutch_disengaged",
        "use_gear_autobox",
        "gear_switch_time",
        "clutch_strength",
        "mass",
        "drag_coefficient",
        "center_of_mass",
        "steering_curve",
        "wheels",
    ];

    fn get_field(&self, name: &str) -> Result<Dynamic, BindingError> {
        Ok(match name {
            "torque_curve" => Dynamic::from_array(encode_curve(&self.torque_curve)),
            "max_rpm" => from_f32(self.max_rpm),
            "moi" => from_f32(self.moi),
            "damping_rate_full_throttle" => from_f32(self.damping_rate_full_throttle),
            "damping_rate_zero_throttle_clutch_engaged" => {
                from_f32(self.damping_rate_zero_throttle_clutch_engaged)
            }
            "damping_rate_zero_throttle_clutch_disengaged" => {
                from_f32(self.damping_rate_zero_throttle_clutch_disengaged)
            }
            "use_gear_autobox" => Dynamic::from_bool(self.use_gear_autobox),
            "gear_switch_time" => from_f32(self.gear_switch_time),
            "clutch_strength" => from_f32(self.clutch_strength),
            "mass" => from_f32(self.mass),
            "drag_coefficient" => from_f32(self.drag_coefficient),
            "center_of_mass" => Dynamic::from(self.center_of_mass),
            "steering_curve" => Dynamic::from_array(encode_curve(&self.steering_curve)),
            "wheels" => Dynamic::from_array(encode_wheels(&self.wheels)),
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        })
    }

    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<(), BindingError> {
        match name {
            "torque_curve" => self.torque_curve = decode_curve(&to_array(value, name)?)?,
            "max_rpm" => self.max_rpm = to_f32(&value, name)?,
            "moi" => self.moi = to_f32(&value, name)?,
            "damping_rate_full_throttle" => {
                self.damping_rate_full_throttle = to_f32(&value, name)?;
            }
            "damping_rate_zero_throttle_clutch_engaged" => {
                self.damping_rate_zero_throttle_clutch_engaged = to_f32(&value, name)?;
            }
            "damping_rate_zero_throttle_clutch_disengaged" => {
                self.damping_rate_zero_throttle_clutch_disengaged = to_f32(&value, name)?;
            }
            "use_gear_autobox" => self.use_gear_autobox = to_bool(&value, name)?,
            "gear_switch_time" => self.gear_switch_time = to_f32(&value, name)?,
            "clutch_strength" => self.clutch_strength = to_f32(&value, name)?,
            "mass" => self.mass = to_f32(&value, name)?,
            "drag_coefficient" => self.drag_coefficient = to_f32(&value, name)?,
            "center_of_mass" => self.center_of_mass = to_vector3(value, name)?,
            "steering_curve" => self.steering_curve = decode_curve(&to_array(value, name)?)?,
            "wheels" => {
                let wheels = decode_wheels(&to_array(value, name)?)?;
                if wheels.len() > MAX_WHEELS {
                    warn!(
                        "{} wheels assigned; only the first {} are read by the physics consumer",
                        wheels.len(),
                        MAX_WHEELS
                    );
                }
                self.wheels = wheels;
            }
            _ => return Err(BindingError::unknown_argument(Self::TYPE_NAME, name)),
        }
        Ok(())
    }
}
