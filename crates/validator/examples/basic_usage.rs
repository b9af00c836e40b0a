//! Basic usage example for okay-validator
//!
//! Installs a DEBUG-level subscriber so the evaluation events the library
//! emits are printed alongside the results.

use okay_validator::prelude::*;

struct Signup<'a> {
    username: &'a str,
    email: &'a str,
    referrer: &'a str,
}

impl Validatable for Signup<'_> {
    fn validation(&self) -> Result<ValidationErrors, Incomplete> {
        let mut session = Session::new();
        session
            .field(self.username, "username")
            .required()
            .min_length(3)
            .is_alphanumeric();
        session.field(self.email, "email").required().is_email();
        session
            .field(self.referrer, "referrer")
            .does_not_start_with("http://");
        session.errors()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let signups = [
        Signup {
            username: "gopher42",
            email: "gopher@example.com",
            referrer: "https://example.com",
        },
        Signup {
            username: "g!",
            email: "gopher@localhost",
            referrer: "http://example.com",
        },
    ];

    for signup in &signups {
        match validate(signup) {
            Ok(errors) if errors.is_empty() => println!("✓ {} is valid", signup.username),
            Ok(errors) => {
                println!("✗ {} has {} problem(s):", signup.username, errors.len());
                for message in errors.messages() {
                    println!("  - {message}");
                }
            }
            Err(incomplete) => println!("validator is misconfigured: {incomplete}"),
        }
    }
}
