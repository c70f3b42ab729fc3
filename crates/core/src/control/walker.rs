use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geom::Vector3D;
use crate::render::Rendered;

/// Movement request for a pedestrian actor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkerControl {
    /// Walking direction, world frame
    pub direction: Vector3D,
    /// Walking speed (m/s)
    pub speed: f32,
    pub jump: bool,
}

impl WalkerControl {
    pub fn new(direction: Vector3D, speed: f32, jump: bool) -> Self {
        Self {
            direction,
            speed,
            jump,
        }
    }
}

impl Default for WalkerControl {
    fn default() -> Self {
        Self {
            direction: Vector3D::new(1.0, 0.0, 0.0),
            speed: 0.0,
            jump: false,
        }
    }
}

impl fmt::Display for WalkerControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WalkerControl(direction={}, speed={}, jump={})",
            Rendered(&self.direction),
            Rendered(&self.speed),
            Rendered(&self.jump),
        )
    }
}
