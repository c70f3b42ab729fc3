//! Canonical text rendering shared by every record.
//!
//! Tooling and tests parse these strings, so the format is fixed:
//! - floats use stream-style general notation with six significant digits
//!   (`0.5`, `70`, `5000`, `1e+06`)
//! - booleans render as the capitalised tokens `True` / `False`
//! - vectors render as `Vector2D(x=.., y=..)` / `Vector3D(x=.., y=.., z=..)`
//! - sequences render as `[a, b, c]`
//!
//! # Usage
//! ```
//! use vehicle_control_core::{Rendered, Vector2D};
//!
//! let curve = [Vector2D::new(0.0, 500.0), Vector2D::new(5000.0, 500.0)];
//! assert_eq!(
//!     Rendered(&curve[..]).to_string(),
//!     "[Vector2D(x=0, y=500), Vector2D(x=5000, y=500)]"
//! );
//! ```

use std::fmt;

use crate::geom::{Vector2D, Vector3D};

/// Significant digits used for float fields.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// Writes a value in the canonical record format.
pub trait Render {
    /// Render `self` into the formatter.
    ///
    /// # Errors
    /// Propagates formatter errors.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Adapter that gives any [`Render`] value a `Display` implementation.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

impl Render for f32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_general(*self))
    }
}

impl Render for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Render for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if *self { "True" } else { "False" })
    }
}

impl Render for Vector2D {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D(x={}, y={})", Rendered(&self.x), Rendered(&self.y))
    }
}

impl Render for Vector3D {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vector3D(x={}, y={}, z={})",
            Rendered(&self.x),
            Rendered(&self.y),
            Rendered(&self.z)
        )
    }
}

impl<T: Render> Render for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// Format a float the way a default C++ output stream does (`%g`, six
/// significant digits, trailing zeros removed).
pub fn format_general(value: f32) -> String {
    if value.is_nan() {
        return String::from("nan");
    }
    if value.is_infinite() {
        return String::from(if value.is_sign_negative() { "-inf" } else { "inf" });
    }
    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    let value = f64::from(value);
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    let precision = SIGNIFICANT_DIGITS as i32;
    if (-4..precision).contains(&exponent) {
        let decimals = (precision - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
