use std::fmt::Display;

use rhai::Dynamic;

use crate::error::BindingError;

/// A native record exposed to scripts field by field.
///
/// `FIELDS` is the slot table: the order positional constructor arguments are
/// bound in and the set of names accepted as named arguments and properties.
pub trait ScriptRecord: Default + Clone + PartialEq + Display + Send + Sync + 'static {
    const TYPE_NAME: &'static str;
    const FIELDS: &'static [&'static str];

    /// Read a field as a fresh script value.
    ///
    /// # Errors
    /// [`BindingError::UnknownArgument`] if `name` is not in `FIELDS`.
    fn get_field(&self, name: &str) -> Result<Dynamic, BindingError>;

    /// Coerce `value` and store it in the named field.
    ///
    /// # Errors
    /// [`BindingError::UnknownArgument`] if `name` is not in `FIELDS` and
    /// [`BindingError::TypeConversion`] if `value` does not fit the field.
    fn set_field(&mut self, name: &str, value: Dynamic) -> Result<(), BindingError>;
}
