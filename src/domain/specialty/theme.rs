//! Theme configuration for a specialty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SpecialtyId;
use crate::domain::foundation::{ColorToken, ValidationError};

pub const PRIMARY_COLOR_TOKEN: &str = "--specialty-primary";
pub const DISPLAY_NAME_TOKEN: &str = "--specialty-name";
pub const ICON_TOKEN: &str = "--specialty-icon";
pub const SPECIALTY_ID_TOKEN: &str = "--specialty-id";

/// Visual branding bundle applied for the active specialty.
///
/// Deserialization goes through `validate`, so a decoded theme always
/// holds its invariants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ThemeConfigRecord")]
pub struct ThemeConfig {
    pub primary_color: ColorToken,
    pub display_name: String,
    pub icon: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeConfigRecord {
    primary_color: ColorToken,
    display_name: String,
    icon: String,
}

impl TryFrom<ThemeConfigRecord> for ThemeConfig {
    type Error = ValidationError;

    fn try_from(record: ThemeConfigRecord) -> Result<Self, Self::Error> {
        Self::new(record.primary_color, record.display_name, record.icon)
    }
}

impl ThemeConfig {
    /// Creates a validated theme.
    pub fn new(
        primary_color: ColorToken,
        display_name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let theme = Self {
            primary_color,
            display_name: display_name.into(),
            icon: icon.into(),
        };
        theme.validate()?;
        Ok(theme)
    }

    /// Checks the theme invariants: valid color and non-empty display name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !ColorToken::is_valid(self.primary_color.as_str()) {
            return Err(ValidationError::invalid_format(
                "primary_color",
                format!("'{}' is not a hex color", self.primary_color),
            ));
        }
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }
        Ok(())
    }

    /// Returns the rendering tokens this theme writes for `id`.
    pub fn tokens(&self, id: SpecialtyId) -> ThemeTokens {
        let mut tokens = BTreeMap::new();
        tokens.insert(PRIMARY_COLOR_TOKEN.to_string(), self.primary_color.to_string());
        tokens.insert(DISPLAY_NAME_TOKEN.to_string(), self.display_name.clone());
        tokens.insert(ICON_TOKEN.to_string(), self.icon.clone());
        tokens.insert(SPECIALTY_ID_TOKEN.to_string(), id.slug().to_string());
        ThemeTokens(tokens)
    }
}

/// The key/value set a theme writes into the rendering context,
/// keyed by CSS custom property name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeTokens(BTreeMap<String, String>);

impl ThemeTokens {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates tokens in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
