//! String content validators
//!
//! E-mail address syntax checking.

use std::sync::LazyLock;

use regex::Regex;

use crate::field::Field;
use crate::foundation::ValidationError;

/// RFC 5322 `atext` run, widened to UTF-8 by RFC 6532.
const ATOM: &str = r"[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{10FFFF}-]+";

/// RFC 5322 `quoted-string` without folding whitespace.
const QUOTED: &str = r#""(?:[^"\\\r\n]|\\.)+""#;

/// RFC 5322 `domain-literal`.
const DOMAIN_LITERAL: &str = r"\[[^\[\]\\\r\n]*\]";

/// `addr-spec` or `[display-name] <addr-spec>`, with optional surrounding
/// whitespace.
///
/// A dot-atom domain needs at least two labels. A display name is a phrase:
/// atoms and quoted strings separated by whitespace, with the obsolete
/// period allowed between words.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let local = ["(?:", ATOM, r"(?:\.", ATOM, ")*|", QUOTED, ")"].concat();
    let domain = ["(?:", ATOM, r"(?:\.", ATOM, ")+|", DOMAIN_LITERAL, ")"].concat();
    let addr = [local.as_str(), "@", domain.as_str()].concat();
    let word = ["(?:", ATOM, "|", QUOTED, ")"].concat();
    let phrase = [word.as_str(), r"(?:\s*\.|\s+", word.as_str(), ")*"].concat();
    let pattern = [
        r"^\s*(?:",
        addr.as_str(),
        "|(?:",
        phrase.as_str(),
        r"\s*)?<",
        addr.as_str(),
        r">)\s*$",
    ]
    .concat();
    Regex::new(&pattern).expect("e-mail pattern is a valid regex")
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates e-mail address syntax.
    ///
    /// Accepts `local@domain` and `Name <local@domain>`.
    pub Email for Field;
    rule(input) { EMAIL_REGEX.is_match(input.value()) }
    error(input) { ValidationError::new("email", "invalid e-mail").with_field(input.name().to_owned()) }
    fn email();
}

// ============================================================================
// TESTS
// ============================================================================
