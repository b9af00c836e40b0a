//! Evaluation settings.
//!
//! ```rust
//! use okay_validator::config::Settings;
//! use okay_validator::validators::{IpFamilyCheck, LengthMode};
//!
//! let settings = Settings::from_json(r#"{ "length_mode": "chars" }"#).unwrap();
//! assert_eq!(settings.length_mode, LengthMode::Chars);
//! assert_eq!(settings.ip_family, IpFamilyCheck::Strict);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::validators::{IpFamilyCheck, LengthMode};

/// Options that change how built-in constraints judge a value.
///
/// Missing keys fall back to their defaults; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// How `minlength` / `maxlength` count characters.
    pub length_mode: LengthMode,
    /// Whether `isipv4` / `isipv6` reject the other family.
    pub ip_family: IpFamilyCheck,
}

impl Settings {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets the IP family policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_ip_family(mut self, family: IpFamilyCheck) -> Self {
        self.ip_family = family;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.length_mode, LengthMode::Bytes);
        assert_eq!(settings.ip_family, IpFamilyCheck::Strict);
        assert_eq!(Settings::from_json("{}").unwrap(), settings);
    }

    #[test]
    fn test_from_json() {
        let settings =
            Settings::from_json(r#"{ "length_mode": "chars", "ip_family": "any" }"#).unwrap();
        assert_eq!(
            settings,
            Settings::default()
                .with_length_mode(LengthMode::Chars)
                .with_ip_family(IpFamilyCheck::Any)
        );
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = Settings::from_json(r#"{ "lenght_mode": "chars" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid settings:"));
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(Settings::from_json(r#"{ "ip_family": "loose" }"#).is_err());
    }
}
