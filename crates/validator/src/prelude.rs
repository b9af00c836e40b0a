//! Prelude module for convenient imports.
//!
//! ```rust
//! use okay_validator::prelude::*;
//!
//! let errors = Field::new("1234", "pin").is_only_digits().max_length(4).errors().unwrap();
//! assert!(errors.is_empty());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::config::Settings;
pub use crate::constraint::{Constraint, Param};
pub use crate::error::{ConstraintError, Incomplete};
pub use crate::evaluator::Evaluator;
pub use crate::field::{ConstraintChain, Field, FieldBuilder};
pub use crate::registry::{ConstraintFn, ConstraintRegistry};
pub use crate::session::Session;
pub use crate::validatable::{Validatable, validate};

// ============================================================================
// VALIDATOR OPTIONS
// ============================================================================

pub use crate::validators::{IpFamilyCheck, LengthMode};
