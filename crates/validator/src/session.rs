//! Validation session
//!
//! A [`Session`] retains every field created through it and evaluates them
//! in creation order, merging their messages into one result.
//!
//! ```rust
//! use okay_validator::field::ConstraintChain;
//! use okay_validator::session::Session;
//!
//! let mut session = Session::new();
//! session.field("", "username").required();
//! session.field("a@b.com", "email").is_email();
//!
//! assert_eq!(session.errors().unwrap().messages(), vec!["username is required"]);
//! ```

use crate::error::Incomplete;
use crate::evaluator::Evaluator;
use crate::field::{Field, FieldBuilder};
use crate::foundation::ValidationErrors;

/// An ordered group of fields validated together.
#[derive(Debug, Clone, Default)]
pub struct Session {
    evaluator: Evaluator,
    fields: Vec<Field>,
}

impl Session {
    /// Creates an empty session using the built-in registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session that evaluates with `evaluator`.
    #[must_use]
    pub fn with_evaluator(evaluator: Evaluator) -> Self {
        Self {
            evaluator,
            fields: Vec::new(),
        }
    }

    /// Creates and retains a field, returning a handle to configure it.
    ///
    /// The field is retained even if the handle is dropped unconfigured.
    pub fn field(&mut self, value: impl Into<String>, name: impl Into<String>) -> FieldBuilder<'_> {
        let index = self.fields.len();
        self.fields.push(Field::new(value, name));
        FieldBuilder::new(&mut self.fields[index])
    }

    /// Retains an already configured field.
    pub fn add(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Evaluates every field in creation order.
    ///
    /// Stops at the first misconfigured constraint; the returned
    /// [`Incomplete`] holds the messages of all earlier fields followed by
    /// the failing field's partial messages. Later fields are not evaluated.
    pub fn errors(&self) -> Result<ValidationErrors, Incomplete> {
        let mut errors = ValidationErrors::new();

        for field in &self.fields {
            match self.evaluator.evaluate(field) {
                Ok(messages) => errors.append(messages),
                Err(incomplete) => return Err(incomplete.after(errors)),
            }
        }

        tracing::debug!(
            fields = self.fields.len(),
            messages = errors.len(),
            "session evaluated"
        );
        Ok(errors)
    }

    /// Number of retained fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Retained fields, in creation order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
