//! Vector type aliases for curve points, positions and directions.

use nalgebra::{Vector2, Vector3};

/// 2D point type used for torque and steering curve samples.
///
/// This is a simple alias for `nalgebra::Vector2<f32>`. Curve points are
/// `(x, y)` pairs such as `(rpm, torque)` or `(speed, steer_ratio)`.
pub type Vector2D = Vector2<f32>;

/// 3D vector type for centers of mass and walking directions.
pub type Vector3D = Vector3<f32>;
