//! Built-in validators
//!
//! One [`Validate`](crate::foundation::Validate) implementation per built-in
//! constraint. Each validates a whole [`Field`](crate::field::Field) so its
//! message can name the field.
//!
//! # Categories
//!
//! - **Length**: required, minimum and maximum length
//! - **Pattern**: equality, substring, prefix/suffix, ASCII character classes
//! - **Content**: e-mail address syntax
//! - **Network**: IPv4 and IPv6 literals
//!
//! # Examples
//!
//! ```rust
//! use okay_validator::field::Field;
//! use okay_validator::foundation::Validate;
//! use okay_validator::validators::{email, min_length};
//!
//! let field = Field::new("a@b.com", "email");
//! assert!(email().validate(&field).is_ok());
//! assert!(min_length(10).validate(&field).is_err());
//! ```

pub mod content;
pub mod ip_address;
pub mod length;
pub mod pattern;

pub use content::{Email, email};
pub use ip_address::{IpFamilyCheck, Ipv4, Ipv6, ipv4, ipv6};
pub use length::{LengthMode, MaxLength, MinLength, Required, max_length, min_length, required};
pub use pattern::{
    Alpha, Alphanumeric, Contains, DoesNotEndWith, DoesNotStartWith, EndsWith, Is, OnlyDigits,
    StartsWith, contains, does_not_end_with, does_not_start_with, ends_with, is, starts_with,
};
