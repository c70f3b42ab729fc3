use rhai::{Dynamic, EvalAltResult, Position};
use thiserror::Error;

/// Failures while translating between script values and native records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// A value has the wrong shape or type for the slot it is assigned to.
    #[error("cannot convert {found} to {expected} for '{context}'")]
    TypeConversion {
        context: String,
        expected: &'static str,
        found: String,
    },

    /// A named argument does not match any field of the record.
    #[error("{type_name}() got an unexpected argument '{name}'")]
    UnknownArgument {
        type_name: &'static str,
        name: String,
    },

    /// More positional arguments than the record has fields.
    #[error("{type_name}() takes at most {max} positional arguments ({given} given)")]
    TooManyArguments {
        type_name: &'static str,
        max: usize,
        given: usize,
    },
}

impl BindingError {
    pub fn type_conversion(
        context: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::TypeConversion {
            context: context.into(),
            expected,
            found: found.into(),
        }
    }

    pub fn unknown_argument(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownArgument {
            type_name,
            name: name.into(),
        }
    }

    /// Wrap the error as a script runtime error carrying this value.
    pub fn into_eval_error(self) -> Box<EvalAltResult> {
        Box::new(EvalAltResult::ErrorRuntime(Dynamic::from(self), Position::NONE))
    }

    /// Recover the binding error behind a script evaluation failure, looking
    /// through function call frames.
    pub fn from_eval_error(error: &EvalAltResult) -> Option<Self> {
        match error {
            EvalAltResult::ErrorRuntime(value, _) => value.clone().try_cast::<Self>(),
            EvalAltResult::ErrorInFunctionCall(_, _, inner, _) => Self::from_eval_error(inner),
            _ => None,
        }
    }
}
