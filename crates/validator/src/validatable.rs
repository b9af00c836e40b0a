//! Validator contract
//!
//! A type opts into validation by describing its fields in
//! [`Validatable::validation`]. [`validate`] is the entry point callers use.
//!
//! ```rust
//! use okay_validator::prelude::*;
//!
//! struct Signup {
//!     username: String,
//!     email: String,
//! }
//!
//! impl Validatable for Signup {
//!     fn validation(&self) -> Result<ValidationErrors, Incomplete> {
//!         let mut session = Session::new();
//!         session.field(self.username.as_str(), "username").required().max_length(16);
//!         session.field(self.email.as_str(), "email").required().is_email();
//!         session.errors()
//!     }
//! }
//!
//! let signup = Signup { username: String::new(), email: "a@b".into() };
//! assert_eq!(
//!     validate(&signup).unwrap().messages(),
//!     vec!["username is required", "invalid e-mail"]
//! );
//! ```

use crate::error::Incomplete;
use crate::field::Field;
use crate::foundation::ValidationErrors;
use crate::session::Session;

/// A type that can produce its own validation result.
pub trait Validatable {
    /// Declares constraints on this value's fields and evaluates them.
    fn validation(&self) -> Result<ValidationErrors, Incomplete>;
}

/// Validates `item`.
pub fn validate<T: Validatable + ?Sized>(item: &T) -> Result<ValidationErrors, Incomplete> {
    item.validation()
}

impl Validatable for Session {
    fn validation(&self) -> Result<ValidationErrors, Incomplete> {
        self.errors()
    }
}

impl Validatable for Field {
    fn validation(&self) -> Result<ValidationErrors, Incomplete> {
        self.errors()
    }
}

impl<T: Validatable + ?Sized> Validatable for &T {
    fn validation(&self) -> Result<ValidationErrors, Incomplete> {
        (**self).validation()
    }
}

impl<T: Validatable> Validatable for [T] {
    /// Validates each item in order, stopping at the first configuration error.
    fn validation(&self) -> Result<ValidationErrors, Incomplete> {
        let mut errors = ValidationErrors::new();
        for item in self {
            match item.validation() {
                Ok(messages) => errors.append(messages),
                Err(incomplete) => return Err(incomplete.after(errors)),
            }
        }
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ConstraintChain;

    #[test]
    fn test_validate_forwards() {
        let field = Field::new("abc", "code").is_only_digits();
        assert_eq!(validate(&field), field.errors());
    }

    #[test]
    fn test_slice_concatenates() {
        let fields = [
            Field::new("", "a").required(),
            Field::new("b", "b").is("c"),
        ];
        assert_eq!(
            validate(&fields[..]).unwrap().messages(),
            vec!["a is required", "b must be 'c'"]
        );
    }
}
