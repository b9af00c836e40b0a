//! String length validators
//!
//! By default, length is the UTF-8 byte count. [`LengthMode::Chars`] counts
//! Unicode scalar values instead.

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a field value is not empty.
    pub Required for Field;
    rule(input) { !input.value().is_empty() }
    error(input) { ValidationError::required(input.name().to_owned()) }
    fn required();
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a field value has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode } for Field;
    rule(self, input) { self.mode.measure(input.value()) >= self.min }
    error(self, input) {
        ValidationError::min_length(input.name().to_owned(), self.min, self.mode.measure(input.value()))
    }
    new(min: usize) { Self { min, mode: LengthMode::Bytes } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length validator that counts chars.
    #[must_use]
    pub fn chars(min: usize) -> Self {
        Self::new(min).with_mode(LengthMode::Chars)
    }

    /// Returns this validator counting with `mode`.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a field value does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode } for Field;
    rule(self, input) { self.mode.measure(input.value()) <= self.max }
    error(self, input) {
        ValidationError::max_length(input.name().to_owned(), self.max, self.mode.measure(input.value()))
    }
    new(max: usize) { Self { max, mode: LengthMode::Bytes } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length validator that counts chars.
    #[must_use]
    pub fn chars(max: usize) -> Self {
        Self::new(max).with_mode(LengthMode::Chars)
    }

    /// Returns this validator counting with `mode`.
    #[must_use]
    pub fn with_mode(self, mode: LengthMode) -> Self {
        Self { mode, ..self }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn field(value: &str) -> Field {
        Field::new(value, "x")
    }

    #[test]
    fn test_required() {
        assert!(required().validate(&field("a")).is_ok());
        assert!(required().validate(&field(" ")).is_ok()); // whitespace is not empty

        let err = required().validate(&field("")).unwrap_err();
        assert_eq!(err.code, "required");
        assert_eq!(err.message, "x is required");
    }

    #[test]
    fn test_min_length_boundary() {
        let validator = MinLength::new(5);
        assert!(validator.validate(&field("hello")).is_ok());
        assert!(validator.validate(&field("hello world")).is_ok());

        let err = validator.validate(&field("hi")).unwrap_err();
        assert_eq!(err.message, "minimum length for x is 5");
        assert_eq!(err.param("actual"), Some("2"));
    }

    #[test]
    fn test_max_length_boundary() {
        let validator = MaxLength::new(5);
        assert!(validator.validate(&field("hello")).is_ok());
        assert!(validator.validate(&field("")).is_ok());

        let err = validator.validate(&field("toolong")).unwrap_err();
        assert_eq!(err.message, "maximum length for x is 5");
    }

    #[test]
    fn test_unicode_handling() {
        // Default mode counts bytes (e with accent = 2 bytes)
        assert!(MinLength::new(6).validate(&field("h\u{e9}llo")).is_ok());
        let err = MaxLength::new(5).validate(&field("h\u{e9}llo")).unwrap_err();
        assert_eq!(err.message, "maximum length for x is 5");
        assert_eq!(err.param("actual"), Some("6"));

        // Chars mode counts Unicode scalar values
        assert!(MinLength::chars(6).validate(&field("h\u{e9}llo")).is_err());
        assert!(MaxLength::chars(5).validate(&field("h\u{e9}llo")).is_ok());
    }

    #[test]
    fn test_length_mode_names() {
        assert_eq!(LengthMode::default(), LengthMode::Bytes);
        assert_eq!(serde_json::to_string(&LengthMode::Bytes).unwrap(), "\"bytes\"");
        let mode: LengthMode = serde_json::from_str("\"chars\"").unwrap();
        assert_eq!(mode, LengthMode::Chars);
    }
}
