//! Dashboard configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::specialty::SpecialtyId;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Environment name
    #[serde(default = "default_environment")]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Specialty slug used when a route has no first segment
    #[serde(default = "default_specialty")]
    pub default_specialty: String,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl DashboardConfig {
    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Parsed default specialty.
    ///
    /// Only canonical slugs are accepted; `validate` reports anything else.
    pub fn default_specialty_id(&self) -> Result<SpecialtyId, ValidationError> {
        self.default_specialty
            .parse()
            .map_err(|_| ValidationError::UnknownDefaultSpecialty(self.default_specialty.clone()))
    }

    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::MissingRequired("dashboard.log_level"));
        }
        self.default_specialty_id()?;
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            default_specialty: default_specialty(),
        }
    }
}

fn default_environment() -> Environment {
    Environment::Development
}

fn default_log_level() -> String {
    "info,specialty_dashboard=debug".to_string()
}

fn default_specialty() -> String {
    SpecialtyId::Generic.slug().to_string()
}
