//! Configuration errors
//!
//! These are programmer mistakes, never validation failures: a constraint
//! name nobody registered, or a registered constraint invoked without the
//! parameters it needs. They halt the pass that hit them.

use crate::foundation::ValidationErrors;

/// A misconfigured constraint discovered while evaluating it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConstraintError {
    /// No function is registered under this name.
    #[error("unknown constraint '{name}'")]
    UnknownConstraint { name: String },

    /// The constraint needs a parameter that was not supplied.
    #[error("{constraint}: {parameter} parameter is not given")]
    MissingParameter {
        constraint: String,
        parameter: &'static str,
    },

    /// A parameter was supplied with the wrong kind of value.
    #[error("{constraint}: parameter {index} must be a {expected}")]
    ParameterType {
        constraint: String,
        index: usize,
        expected: &'static str,
    },
}

impl ConstraintError {
    /// Creates an "unknown constraint" error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownConstraint { name: name.into() }
    }

    /// Creates a "missing parameter" error.
    pub fn missing(constraint: impl Into<String>, parameter: &'static str) -> Self {
        Self::MissingParameter {
            constraint: constraint.into(),
            parameter,
        }
    }

    /// Creates a "wrong parameter type" error.
    pub fn parameter_type(constraint: impl Into<String>, index: usize, expected: &'static str) -> Self {
        Self::ParameterType {
            constraint: constraint.into(),
            index,
            expected,
        }
    }
}

/// A validation pass stopped by a [`ConstraintError`].
///
/// Messages gathered before the failure are kept in `partial`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation stopped after {} message(s): {source}", .partial.len())]
pub struct Incomplete {
    /// Messages collected before evaluation stopped.
    pub partial: ValidationErrors,
    /// What stopped it.
    #[source]
    pub source: ConstraintError,
}

impl Incomplete {
    /// Wraps `source`, keeping the messages gathered so far.
    pub fn new(partial: ValidationErrors, source: ConstraintError) -> Self {
        Self { partial, source }
    }

    /// Prepends messages produced before this pass started.
    #[must_use]
    pub fn after(self, mut earlier: ValidationErrors) -> Self {
        earlier.append(self.partial);
        Self {
            partial: earlier,
            source: self.source,
        }
    }

    /// Splits into the partial messages and the cause.
    pub fn into_parts(self) -> (ValidationErrors, ConstraintError) {
        (self.partial, self.source)
    }
}

/// Failure to load [`Settings`](crate::config::Settings).
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SettingsError {
    /// The document is not valid JSON or has unknown keys.
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
