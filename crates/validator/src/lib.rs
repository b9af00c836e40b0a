//! # okay-validator
//!
//! Declarative string validation: attach an ordered chain of constraints to a
//! named value and get back every human-readable message it fails.
//!
//! ## Quick Start
//!
//! ```rust
//! use okay_validator::prelude::*;
//!
//! let mut session = Session::new();
//! session.field("", "username").required().min_length(3);
//! session.field("bob@example.com", "email").required().is_email();
//!
//! assert_eq!(
//!     session.errors().unwrap().messages(),
//!     vec!["username is required", "minimum length for username is 3"]
//! );
//! ```
//!
//! ## Two kinds of failure
//!
//! A value that breaks a constraint is a *validation failure*: it becomes a
//! [`ValidationError`](foundation::ValidationError) in the result and the pass
//! continues. A constraint that cannot run at all (an unregistered name, a
//! missing parameter) is a [`ConstraintError`](error::ConstraintError): the
//! pass stops and returns an [`Incomplete`](error::Incomplete) that still
//! holds the messages gathered so far.
//!
//! ## Extending
//!
//! Built-in constraints are variants of [`Constraint`](constraint::Constraint).
//! Additional checks are registered by name in a
//! [`ConstraintRegistry`](registry::ConstraintRegistry) and attached with
//! [`ConstraintChain::named`](field::ConstraintChain::named). The
//! [`validator!`] macro builds the [`Validate`](foundation::Validate)
//! implementation such a check usually wraps.

// ValidationError is returned by value from every check.
#![allow(clippy::result_large_err)]

pub mod config;
pub mod constraint;
pub mod error;
pub mod evaluator;
pub mod field;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod session;
pub mod validatable;
pub mod validators;

pub use field::Field;
pub use session::Session;
pub use validatable::{Validatable, validate};
