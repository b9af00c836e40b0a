//! Field builder
//!
//! A [`Field`] is one named string value plus the ordered list of constraints
//! declared on it. Declaring constraints never validates anything; the checks
//! run when [`Field::errors`] (or a [`Session`](crate::session::Session)) asks
//! for them.
//!
//! # Examples
//!
//! ```rust
//! use okay_validator::field::{ConstraintChain, Field};
//!
//! let errors = Field::new("", "x")
//!     .required()
//!     .min_length(6)
//!     .errors()
//!     .unwrap();
//!
//! assert_eq!(errors.messages(), vec!["x is required", "minimum length for x is 6"]);
//! ```

use std::borrow::Cow;

use crate::constraint::{Constraint, Param};
use crate::error::Incomplete;
use crate::evaluator::Evaluator;
use crate::foundation::ValidationErrors;

// ============================================================================
// FIELD
// ============================================================================

/// A named string value and its constraints, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a field does nothing until it is evaluated or added to a session"]
pub struct Field {
    value: String,
    name: String,
    constraints: Vec<Constraint>,
}

impl Field {
    /// Creates a field with no constraints.
    pub fn new(value: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    /// The value under validation.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The name used in messages.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared constraints, in order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Evaluates with the built-in registry and default settings.
    pub fn errors(&self) -> Result<ValidationErrors, Incomplete> {
        Evaluator::default().evaluate(self)
    }

    /// Evaluates with `evaluator`.
    pub fn errors_with(&self, evaluator: &Evaluator) -> Result<ValidationErrors, Incomplete> {
        evaluator.evaluate(self)
    }
}

// ============================================================================
// CHAINING
// ============================================================================

/// Fluent constraint declaration, shared by [`Field`] and [`FieldBuilder`].
///
/// Every method appends one constraint and hands the builder back by value.
/// A session handle may be dropped at the end of a chain; its field is
/// already retained.
pub trait ConstraintChain: Sized {
    /// Appends `constraint`.
    fn push_constraint(self, constraint: Constraint) -> Self;

    /// Appends an already built constraint.
    fn constraint(self, constraint: Constraint) -> Self {
        self.push_constraint(constraint)
    }

    /// Appends a constraint resolved by name when evaluated.
    ///
    /// Parameters are not checked until then.
    fn named(
        self,
        name: impl Into<Cow<'static, str>>,
        params: impl IntoIterator<Item = Param>,
    ) -> Self {
        self.push_constraint(Constraint::named(name, params))
    }

    fn required(self) -> Self {
        self.push_constraint(Constraint::Required)
    }

    fn min_length(self, min: usize) -> Self {
        self.push_constraint(Constraint::MinLength(min))
    }

    fn max_length(self, max: usize) -> Self {
        self.push_constraint(Constraint::MaxLength(max))
    }

    fn is_email(self) -> Self {
        self.push_constraint(Constraint::IsEmail)
    }

    /// Value must equal `expected` exactly (case-sensitive).
    fn is(self, expected: impl Into<String>) -> Self {
        self.push_constraint(Constraint::Is(expected.into()))
    }

    fn contains(self, substring: impl Into<String>) -> Self {
        self.push_constraint(Constraint::Contains(substring.into()))
    }

    fn starts_with(self, prefix: impl Into<String>) -> Self {
        self.push_constraint(Constraint::StartsWith(prefix.into()))
    }

    fn does_not_start_with(self, prefix: impl Into<String>) -> Self {
        self.push_constraint(Constraint::DoesNotStartWith(prefix.into()))
    }

    fn ends_with(self, suffix: impl Into<String>) -> Self {
        self.push_constraint(Constraint::EndsWith(suffix.into()))
    }

    fn does_not_end_with(self, suffix: impl Into<String>) -> Self {
        self.push_constraint(Constraint::DoesNotEndWith(suffix.into()))
    }

    fn is_ipv4(self) -> Self {
        self.push_constraint(Constraint::IsIpv4)
    }

    fn is_ipv6(self) -> Self {
        self.push_constraint(Constraint::IsIpv6)
    }

    /// Every character must be an ASCII letter.
    fn is_alpha(self) -> Self {
        self.push_constraint(Constraint::IsAlpha)
    }

    /// Every character must be an ASCII letter or digit.
    fn is_alphanumeric(self) -> Self {
        self.push_constraint(Constraint::IsAlphanumeric)
    }

    /// Every character must be an ASCII digit.
    fn is_only_digits(self) -> Self {
        self.push_constraint(Constraint::IsOnlyDigits)
    }
}

impl ConstraintChain for Field {
    fn push_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

// ============================================================================
// SESSION HANDLE
// ============================================================================

/// Handle to a field retained by a [`Session`](crate::session::Session).
///
/// Borrows the session exclusively until dropped.
#[derive(Debug)]
pub struct FieldBuilder<'a> {
    field: &'a mut Field,
}

impl<'a> FieldBuilder<'a> {
    pub(crate) fn new(field: &'a mut Field) -> Self {
        Self { field }
    }

    /// The field this handle configures.
    #[must_use]
    pub fn field(&self) -> &Field {
        self.field
    }
}

impl ConstraintChain for FieldBuilder<'_> {
    fn push_constraint(self, constraint: Constraint) -> Self {
        self.field.constraints.push(constraint);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_constraints_no_errors() {
        let errors = Field::new("anything", "x").errors().unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_declaration_order_is_kept() {
        let field = Field::new("v", "x")
            .max_length(3)
            .required()
            .named("isurl", [Param::from("https")]);

        assert_eq!(
            field.constraints(),
            &[
                Constraint::MaxLength(3),
                Constraint::Required,
                Constraint::named("isurl", [Param::from("https")]),
            ]
        );
    }

    #[test]
    fn test_declaring_does_not_validate() {
        let field = Field::new("", "x").named("nope", []);
        assert_eq!(field.constraints().len(), 1);
        assert!(field.errors().is_err());
    }

    #[test]
    fn test_builder_appends_to_borrowed_field() {
        let mut field = Field::new("abc", "code");
        FieldBuilder::new(&mut field).required().is_only_digits();
        assert_eq!(
            field.constraints(),
            &[Constraint::Required, Constraint::IsOnlyDigits]
        );
    }
}
