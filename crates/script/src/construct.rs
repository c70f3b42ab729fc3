//! Construction from any mix of positional and named arguments.
//!
//! Every record starts from its defaults. Positional arguments fill the slot
//! table left to right, then named arguments overwrite the slots they name.
//! A slot given both ways ends up with the named value.

use rhai::{Array, Dynamic, Map};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::BindingError;
use crate::record::ScriptRecord;

/// Arguments of one constructor call.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<Dynamic>,
    named: FxHashMap<String, Dynamic>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments as a script passes them: an array and an object map.
    pub fn from_script(positional: Array, named: Map) -> Self {
        Self {
            positional,
            named: named
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Dynamic>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument, replacing an earlier one of the same name.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Dynamic>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn positional(&self) -> &[Dynamic] {
        &self.positional
    }

    pub fn named(&self, name: &str) -> Option<&Dynamic> {
        self.named.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Build a `T` from defaults, positional arguments and named arguments.
///
/// # Errors
/// - [`BindingError::TooManyArguments`] if there are more positional
///   arguments than slots.
/// - [`BindingError::UnknownArgument`] for a named argument outside the slot
///   table (the alphabetically first one if there are several).
/// - [`BindingError::TypeConversion`] if a value does not fit its slot.
pub fn construct<T: ScriptRecord>(args: &CallArgs) -> Result<T, BindingError> {
    let slots = T::FIELDS;
    let given = args.positional.len();
    if given > slots.len() {
        return Err(BindingError::TooManyArguments {
            type_name: T::TYPE_NAME,
            max: slots.len(),
            given,
        });
    }

    let mut unknown: Vec<&str> = args
        .named
        .keys()
        .map(String::as_str)
        .filter(|name| !slots.contains(name))
        .collect();
    unknown.sort_unstable();
    if let Some(name) = unknown.first() {
        return Err(BindingError::unknown_argument(T::TYPE_NAME, *name));
    }

    let mut record = T::default();
    for (slot, value) in slots.iter().zip(&args.positional) {
        record.set_field(slot, value.clone())?;
    }
    for slot in slots {
        if let Some(value) = args.named(slot) {
            record.set_field(slot, value.clone())?;
        }
    }

    debug!(
        "Constructed {} from {} positional and {} named arguments",
        T::TYPE_NAME,
        given,
        args.named.len()
    );
    Ok(record)
}
