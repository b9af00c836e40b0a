//! Core traits for the validation system
//!
//! This module defines the trait every built-in check implements.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators must implement.
///
/// Validators are generic over their input type. The built-in string checks
/// validate a whole [`Field`](crate::field::Field) so their messages can name
/// the field they reject.
///
/// # Examples
///
/// ```rust
/// use okay_validator::field::Field;
/// use okay_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = Field;
///
///     fn validate(&self, input: &Field) -> Result<(), ValidationError> {
///         if input.value().contains(' ') {
///             Err(ValidationError::new("no_spaces", format!("{} must not contain spaces", input.name())))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.validate(&Field::new("a b", "slug")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}
