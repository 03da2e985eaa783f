//! Color token value object for theme colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A hex color token (`#rgb` or `#rrggbb`), stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken(String);

impl ColorToken {
    /// Creates a ColorToken, returning error if the value is not a hex color.
    pub fn try_new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref().trim();
        if value.is_empty() {
            return Err(ValidationError::empty_field("primary_color"));
        }
        if !Self::is_valid(value) {
            return Err(ValidationError::invalid_format(
                "primary_color",
                format!("'{}' is not a #rgb or #rrggbb color", value),
            ));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    /// Builds a token from catalog data. Validity is re-checked by
    /// `SpecialtyRegistry::validate`.
    pub(crate) fn from_static(value: &'static str) -> Self {
        debug_assert!(Self::is_valid(value), "invalid catalog color {}", value);
        Self(value.to_ascii_lowercase())
    }

    /// Returns true if `value` is a `#rgb` or `#rrggbb` hex color.
    pub fn is_valid(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(hex) => {
                matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => false,
        }
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColorToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for ColorToken {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.0
    }
}
