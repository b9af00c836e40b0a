//! String pattern validators
//!
//! Exact-match, substring, prefix and suffix checks, plus ASCII character
//! class checks. All comparisons are case-sensitive.

use crate::field::Field;
use crate::foundation::{Validate, ValidationError};

// ============================================================================
// EQUALITY AND SUBSTRINGS
// ============================================================================

crate::validator! {
    /// Validates that a field value equals an expected string exactly.
    #[derive(PartialEq, Eq, Hash)]
    pub Is { expected: String } for Field;
    rule(self, input) { input.value() == self.expected }
    error(self, input) {
        ValidationError::new("is", format!("{} must be '{}'", input.name(), self.expected))
            .with_field(input.name().to_owned())
            .with_param("expected", self.expected.clone())
    }
    new(expected: impl Into<String>) { Self { expected: expected.into() } }
    fn is(expected: impl Into<String>);
}

crate::validator! {
    /// Validates that a field value contains a substring.
    #[derive(PartialEq, Eq, Hash)]
    pub Contains { substring: String } for Field;
    rule(self, input) { input.value().contains(self.substring.as_str()) }
    error(self, input) {
        ValidationError::new(
            "contains",
            format!("{} must contain '{}'", input.name(), self.substring),
        )
        .with_field(input.name().to_owned())
        .with_param("substring", self.substring.clone())
    }
    new(substring: impl Into<String>) { Self { substring: substring.into() } }
    fn contains(substring: impl Into<String>);
}

crate::validator! {
    /// Validates that a field value starts with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub StartsWith { prefix: String } for Field;
    rule(self, input) { input.value().starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "starts_with",
            format!("{} must start with '{}'", input.name(), self.prefix),
        )
        .with_field(input.name().to_owned())
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn starts_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a field value does not start with a prefix.
    #[derive(PartialEq, Eq, Hash)]
    pub DoesNotStartWith { prefix: String } for Field;
    rule(self, input) { !input.value().starts_with(self.prefix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "does_not_start_with",
            format!("{} must not start with '{}'", input.name(), self.prefix),
        )
        .with_field(input.name().to_owned())
        .with_param("prefix", self.prefix.clone())
    }
    new(prefix: impl Into<String>) { Self { prefix: prefix.into() } }
    fn does_not_start_with(prefix: impl Into<String>);
}

crate::validator! {
    /// Validates that a field value ends with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub EndsWith { suffix: String } for Field;
    rule(self, input) { input.value().ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "ends_with",
            format!("{} must end with '{}'", input.name(), self.suffix),
        )
        .with_field(input.name().to_owned())
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn ends_with(suffix: impl Into<String>);
}

crate::validator! {
    /// Validates that a field value does not end with a suffix.
    #[derive(PartialEq, Eq, Hash)]
    pub DoesNotEndWith { suffix: String } for Field;
    rule(self, input) { !input.value().ends_with(self.suffix.as_str()) }
    error(self, input) {
        ValidationError::new(
            "does_not_end_with",
            format!("{} must not end with '{}'", input.name(), self.suffix),
        )
        .with_field(input.name().to_owned())
        .with_param("suffix", self.suffix.clone())
    }
    new(suffix: impl Into<String>) { Self { suffix: suffix.into() } }
    fn does_not_end_with(suffix: impl Into<String>);
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

/// Rejects the first character of `input` outside `allowed`.
///
/// Only the first offender is reported.
fn reject_outside(
    input: &Field,
    code: &'static str,
    class: &str,
    allowed: fn(&char) -> bool,
) -> Result<(), ValidationError> {
    match input.value().chars().find(|c| !allowed(c)) {
        None => Ok(()),
        Some(ch) => Err(ValidationError::new(
            code,
            format!(
                "{} must not contain non-{class} characters ('{ch}')",
                input.name()
            ),
        )
        .with_field(input.name().to_owned())
        .with_param("character", ch.to_string())),
    }
}

/// Validates that every character is an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alpha;

impl Validate for Alpha {
    type Input = Field;

    fn validate(&self, input: &Field) -> Result<(), ValidationError> {
        reject_outside(input, "alpha", "alpha", char::is_ascii_alphabetic)
    }
}

/// Validates that every character is an ASCII letter or digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Alphanumeric;

impl Validate for Alphanumeric {
    type Input = Field;

    fn validate(&self, input: &Field) -> Result<(), ValidationError> {
        reject_outside(
            input,
            "alphanumeric",
            "alphanumeric",
            char::is_ascii_alphanumeric,
        )
    }
}

/// Validates that every character is an ASCII digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OnlyDigits;

impl Validate for OnlyDigits {
    type Input = Field;

    fn validate(&self, input: &Field) -> Result<(), ValidationError> {
        reject_outside(input, "only_digits", "numeric", char::is_ascii_digit)
    }
}
