//! Core validation types and traits
//!
//! - **Traits**: [`Validate`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! A [`ValidationError`] is an expected outcome of checking user data. It is
//! never used for misconfigured validators; those surface as
//! [`ConstraintError`](crate::error::ConstraintError).

pub mod error;
pub mod traits;

pub use error::{ErrorParams, ValidationError, ValidationErrors};
pub use traits::Validate;
