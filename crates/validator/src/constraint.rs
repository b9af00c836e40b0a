//! Constraint records attached to a field.
//!
//! Built-in constraints are enum variants with typed parameters and are
//! dispatched by an exhaustive `match`. [`Constraint::Named`] is the open
//! path: it is resolved through the [`ConstraintRegistry`] when the field is
//! evaluated, and its untyped [`Param`]s are checked only then.
//!
//! [`ConstraintRegistry`]: crate::registry::ConstraintRegistry

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::error::ConstraintError;
use crate::evaluator::Evaluator;
use crate::field::Field;
use crate::foundation::{Validate, ValidationError};
use crate::validators;

/// Parameter list of a [`Constraint::Named`].
pub type Params = SmallVec<[Param; 2]>;

/// An untyped constraint parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Param {
    /// A length or count.
    Length(usize),
    /// A string operand.
    Text(String),
}

impl Param {
    /// Returns the length, if this is one.
    pub fn as_length(&self) -> Option<usize> {
        match self {
            Param::Length(n) => Some(*n),
            Param::Text(_) => None,
        }
    }

    /// Returns the text, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Param::Text(s) => Some(s),
            Param::Length(_) => None,
        }
    }
}

impl From<usize> for Param {
    fn from(n: usize) -> Self {
        Param::Length(n)
    }
}

impl From<&str> for Param {
    fn from(s: &str) -> Self {
        Param::Text(s.to_owned())
    }
}

impl From<String> for Param {
    fn from(s: String) -> Self {
        Param::Text(s)
    }
}

/// Fetches parameter `index` of `constraint` as a length.
pub fn length_param(constraint: &str, params: &[Param], index: usize) -> Result<usize, ConstraintError> {
    let param = params
        .get(index)
        .ok_or_else(|| ConstraintError::missing(constraint, "length"))?;
    param
        .as_length()
        .ok_or_else(|| ConstraintError::parameter_type(constraint, index, "length"))
}

/// Fetches parameter `index` of `constraint` as text.
pub fn text_param<'a>(
    constraint: &str,
    params: &'a [Param],
    index: usize,
) -> Result<&'a str, ConstraintError> {
    let param = params
        .get(index)
        .ok_or_else(|| ConstraintError::missing(constraint, "string"))?;
    param
        .as_text()
        .ok_or_else(|| ConstraintError::parameter_type(constraint, index, "string"))
}

/// One check attached to a field, with its static arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Value must not be empty.
    Required,
    /// Length must be at least `n`.
    MinLength(usize),
    /// Length must be at most `n`.
    MaxLength(usize),
    /// Value must be an e-mail address.
    IsEmail,
    /// Value must equal the string exactly.
    Is(String),
    /// Value must contain the substring.
    Contains(String),
    /// Value must start with the prefix.
    StartsWith(String),
    /// Value must not start with the prefix.
    DoesNotStartWith(String),
    /// Value must end with the suffix.
    EndsWith(String),
    /// Value must not end with the suffix.
    DoesNotEndWith(String),
    /// Value must be an IPv4 literal.
    IsIpv4,
    /// Value must be an IPv6 literal.
    IsIpv6,
    /// Every character must be an ASCII letter.
    IsAlpha,
    /// Every character must be an ASCII letter or digit.
    IsAlphanumeric,
    /// Every character must be an ASCII digit.
    IsOnlyDigits,
    /// A constraint looked up by name at evaluation time.
    Named {
        name: Cow<'static, str>,
        params: Params,
    },
}

impl Constraint {
    /// Creates a [`Constraint::Named`].
    pub fn named(
        name: impl Into<Cow<'static, str>>,
        params: impl IntoIterator<Item = Param>,
    ) -> Self {
        Constraint::Named {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    /// The registry identifier of this constraint.
    pub fn name(&self) -> &str {
        match self {
            Constraint::Required => "required",
            Constraint::MinLength(_) => "minlength",
            Constraint::MaxLength(_) => "maxlength",
            Constraint::IsEmail => "isemail",
            Constraint::Is(_) => "is",
            Constraint::Contains(_) => "contains",
            Constraint::StartsWith(_) => "startswith",
            Constraint::DoesNotStartWith(_) => "doesnotstartwith",
            Constraint::EndsWith(_) => "endswith",
            Constraint::DoesNotEndWith(_) => "doesnotendwith",
            Constraint::IsIpv4 => "isipv4",
            Constraint::IsIpv6 => "isipv6",
            Constraint::IsAlpha => "isalpha",
            Constraint::IsAlphanumeric => "isalphanumeric",
            Constraint::IsOnlyDigits => "isonlydigits",
            Constraint::Named { name, .. } => name.as_ref(),
        }
    }

    /// Runs this constraint against `field`.
    ///
    /// Returns `Ok(Some(_))` for a validation failure and `Err(_)` only when
    /// the constraint itself is misconfigured.
    pub fn check(
        &self,
        field: &Field,
        evaluator: &Evaluator,
    ) -> Result<Option<ValidationError>, ConstraintError> {
        let settings = evaluator.settings();
        let outcome = match self {
            Constraint::Named { name, params } => {
                let check = evaluator
                    .registry()
                    .lookup(name)
                    .ok_or_else(|| ConstraintError::unknown(name.clone()))?;
                return check(field, params, evaluator);
            }
            Constraint::Required => validators::Required.validate(field),
            Constraint::MinLength(min) => validators::MinLength::new(*min)
                .with_mode(settings.length_mode)
                .validate(field),
            Constraint::MaxLength(max) => validators::MaxLength::new(*max)
                .with_mode(settings.length_mode)
                .validate(field),
            Constraint::IsEmail => validators::Email.validate(field),
            Constraint::Is(expected) => validators::Is::new(expected.as_str()).validate(field),
            Constraint::Contains(s) => validators::Contains::new(s.as_str()).validate(field),
            Constraint::StartsWith(s) => validators::StartsWith::new(s.as_str()).validate(field),
            Constraint::DoesNotStartWith(s) => {
                validators::DoesNotStartWith::new(s.as_str()).validate(field)
            }
            Constraint::EndsWith(s) => validators::EndsWith::new(s.as_str()).validate(field),
            Constraint::DoesNotEndWith(s) => {
                validators::DoesNotEndWith::new(s.as_str()).validate(field)
            }
            Constraint::IsIpv4 => validators::Ipv4 {
                family: settings.ip_family,
            }
            .validate(field),
            Constraint::IsIpv6 => validators::Ipv6 {
                family: settings.ip_family,
            }
            .validate(field),
            Constraint::IsAlpha => validators::Alpha.validate(field),
            Constraint::IsAlphanumeric => validators::Alphanumeric.validate(field),
            Constraint::IsOnlyDigits => validators::OnlyDigits.validate(field),
        };
        Ok(outcome.err())
    }
}
