//! Constraint registry for looking up check functions by name.
//!
//! Only [`Constraint::Named`] goes through the registry; the typed variants
//! are dispatched directly. The built-in table maps every built-in identifier
//! to a function that decodes its untyped parameters into the typed variant,
//! so a named and a typed constraint judge values identically.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::constraint::{Constraint, Param, length_param, text_param};
use crate::error::ConstraintError;
use crate::evaluator::Evaluator;
use crate::field::Field;
use crate::foundation::ValidationError;

/// A registered check: `Ok(Some(_))` is a validation failure, `Err(_)` a
/// configuration error.
pub type ConstraintFn =
    fn(&Field, &[Param], &Evaluator) -> Result<Option<ValidationError>, ConstraintError>;

static BUILTIN: LazyLock<Arc<ConstraintRegistry>> =
    LazyLock::new(|| Arc::new(ConstraintRegistry::with_builtins()));

/// Name → check function table.
///
/// # Examples
///
/// ```rust
/// use okay_validator::registry::ConstraintRegistry;
///
/// let registry = ConstraintRegistry::builtin();
/// assert!(registry.contains("minlength"));
/// assert!(registry.lookup("isurl").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstraintRegistry {
    checks: HashMap<Cow<'static, str>, ConstraintFn>,
}

impl ConstraintRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared, immutable built-in table.
    #[must_use]
    pub fn builtin() -> Arc<ConstraintRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Creates an owned registry pre-filled with the built-in identifiers.
    #[must_use]
    pub fn with_builtins() -> Self {
        let entries: [(&'static str, ConstraintFn); 15] = [
            ("required", builtin::required),
            ("minlength", builtin::min_length),
            ("maxlength", builtin::max_length),
            ("isemail", builtin::is_email),
            ("is", builtin::is),
            ("contains", builtin::contains),
            ("startswith", builtin::starts_with),
            ("doesnotstartwith", builtin::does_not_start_with),
            ("endswith", builtin::ends_with),
            ("doesnotendwith", builtin::does_not_end_with),
            ("isipv4", builtin::is_ipv4),
            ("isipv6", builtin::is_ipv6),
            ("isalpha", builtin::is_alpha),
            ("isalphanumeric", builtin::is_alphanumeric),
            ("isonlydigits", builtin::is_only_digits),
        ];

        Self {
            checks: entries
                .into_iter()
                .map(|(name, check)| (Cow::Borrowed(name), check))
                .collect(),
        }
    }

    /// Registers a check under `name`.
    ///
    /// If a check with the same name already exists, it is replaced and
    /// returned.
    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        check: ConstraintFn,
    ) -> Option<ConstraintFn> {
        let name = name.into();
        let previous = self.checks.insert(name.clone(), check);
        if previous.is_some() {
            tracing::debug!(constraint = %name, "replaced registered constraint");
        }
        previous
    }

    /// Looks up a check by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ConstraintFn> {
        self.checks.get(name).copied()
    }

    /// Checks if a check is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Number of registered checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.checks.keys().map(AsRef::as_ref)
    }
}

/// Registry entries for the built-in identifiers.
///
/// Each decodes its parameters and defers to the typed variant.
mod builtin {
    use super::*;

    type Outcome = Result<Option<ValidationError>, ConstraintError>;

    pub(super) fn required(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::Required.check(field, evaluator)
    }

    pub(super) fn min_length(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::MinLength(length_param("minlength", params, 0)?).check(field, evaluator)
    }

    pub(super) fn max_length(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::MaxLength(length_param("maxlength", params, 0)?).check(field, evaluator)
    }

    pub(super) fn is_email(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsEmail.check(field, evaluator)
    }

    pub(super) fn is(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        let expected = text_param("is", params, 0)?;
        Constraint::Is(expected.to_owned()).check(field, evaluator)
    }

    pub(super) fn contains(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        let substring = text_param("contains", params, 0)?;
        Constraint::Contains(substring.to_owned()).check(field, evaluator)
    }

    pub(super) fn starts_with(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        let prefix = text_param("startswith", params, 0)?;
        Constraint::StartsWith(prefix.to_owned()).check(field, evaluator)
    }

    pub(super) fn does_not_start_with(
        field: &Field,
        params: &[Param],
        evaluator: &Evaluator,
    ) -> Outcome {
        let prefix = text_param("doesnotstartwith", params, 0)?;
        Constraint::DoesNotStartWith(prefix.to_owned()).check(field, evaluator)
    }

    pub(super) fn ends_with(field: &Field, params: &[Param], evaluator: &Evaluator) -> Outcome {
        let suffix = text_param("endswith", params, 0)?;
        Constraint::EndsWith(suffix.to_owned()).check(field, evaluator)
    }

    pub(super) fn does_not_end_with(
        field: &Field,
        params: &[Param],
        evaluator: &Evaluator,
    ) -> Outcome {
        let suffix = text_param("doesnotendwith", params, 0)?;
        Constraint::DoesNotEndWith(suffix.to_owned()).check(field, evaluator)
    }

    pub(super) fn is_ipv4(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsIpv4.check(field, evaluator)
    }

    pub(super) fn is_ipv6(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsIpv6.check(field, evaluator)
    }

    pub(super) fn is_alpha(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsAlpha.check(field, evaluator)
    }

    pub(super) fn is_alphanumeric(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsAlphanumeric.check(field, evaluator)
    }

    pub(super) fn is_only_digits(field: &Field, _: &[Param], evaluator: &Evaluator) -> Outcome {
        Constraint::IsOnlyDigits.check(field, evaluator)
    }
}
