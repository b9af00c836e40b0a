//! IP address validators.
//!
//! Parsing uses [`std::net`] only. How strictly the two families are kept
//! apart is governed by [`IpFamilyCheck`].

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use serde::{Deserialize, Serialize};

use crate::field::Field;
use crate::foundation::ValidationError;

/// Which address families satisfy an IPv4 or IPv6 check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IpFamilyCheck {
    /// Each check accepts only its own family.
    #[default]
    Strict,
    /// Any parseable IP literal passes either check.
    Any,
}

impl IpFamilyCheck {
    fn accepts<T: std::str::FromStr>(self, value: &str) -> bool {
        match self {
            IpFamilyCheck::Strict => value.parse::<T>().is_ok(),
            IpFamilyCheck::Any => value.parse::<IpAddr>().is_ok(),
        }
    }
}

crate::validator! {
    /// Validates an IPv4 address literal (dotted decimal).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Ipv4 { family: IpFamilyCheck } for Field;
    rule(self, input) { self.family.accepts::<Ipv4Addr>(input.value()) }
    error(self, input) { ValidationError::invalid_format("ipv4", input.name().to_owned(), "IPv4 address") }
    new() { Self { family: IpFamilyCheck::Strict } }
    fn ipv4();
}

crate::validator! {
    /// Validates an IPv6 address literal.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Ipv6 { family: IpFamilyCheck } for Field;
    rule(self, input) { self.family.accepts::<Ipv6Addr>(input.value()) }
    error(self, input) { ValidationError::invalid_format("ipv6", input.name().to_owned(), "IPv6 address") }
    new() { Self { family: IpFamilyCheck::Strict } }
    fn ipv6();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    fn field(value: &str) -> Field {
        Field::new(value, "addr")
    }

    #[test]
    fn test_ipv4() {
        assert!(ipv4().validate(&field("192.168.1.1")).is_ok());
        assert!(ipv4().validate(&field("0.0.0.0")).is_ok());
        assert!(ipv4().validate(&field("256.1.1.1")).is_err());
        assert!(ipv4().validate(&field("1.2.3")).is_err());

        let err = ipv4().validate(&field("not an ip")).unwrap_err();
        assert_eq!(err.message, "addr must be a valid IPv4 address");
        assert_eq!(err.code, "ipv4");
    }

    #[test]
    fn test_ipv6() {
        assert!(ipv6().validate(&field("::1")).is_ok());
        assert!(ipv6().validate(&field("2001:db8::ff00:42:8329")).is_ok());
        assert!(ipv6().validate(&field("::ffff:192.0.2.1")).is_ok());
        assert_eq!(
            ipv6().validate(&field("2001:db8::g")).unwrap_err().message,
            "addr must be a valid IPv6 address"
        );
    }

    #[test]
    fn test_strict_rejects_other_family() {
        assert!(ipv4().validate(&field("::1")).is_err());
        assert!(ipv6().validate(&field("10.0.0.1")).is_err());
    }

    #[test]
    fn test_any_family_accepts_either() {
        let v4 = Ipv4 { family: IpFamilyCheck::Any };
        let v6 = Ipv6 { family: IpFamilyCheck::Any };
        assert!(v4.validate(&field("::1")).is_ok());
        assert!(v6.validate(&field("10.0.0.1")).is_ok());
        assert!(v4.validate(&field("nope")).is_err());
    }
}
