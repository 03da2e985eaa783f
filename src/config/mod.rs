//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! and optional config files using the `config` and `dotenvy` crates. Environment
//! variables use the `SPECIALTY_DASHBOARD` prefix and `__` between nested values.
//!
//! # Example
//!
//! ```no_run
//! use specialty_dashboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default specialty: {}", config.dashboard.default_specialty);
//! ```

mod dashboard;
mod error;
mod features;

pub use dashboard::{DashboardConfig, Environment, LogFormat};
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;

use std::path::Path;

use serde::Deserialize;

const ENV_PREFIX: &str = "SPECIALTY_DASHBOARD";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dashboard configuration (environment, logging, default specialty)
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SPECIALTY_DASHBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SPECIALTY_DASHBOARD__DASHBOARD__LOG_LEVEL=debug` -> `dashboard.log_level = debug`
    /// - `SPECIALTY_DASHBOARD__FEATURES__PREMIUM_POLICY=hide` -> `features.premium_policy = hide`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables on top.
    ///
    /// The format follows the file extension (`.toml`, `.yaml`, `.json`).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter is empty or the default
    /// specialty is not a canonical slug.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dashboard.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.dashboard.is_production()
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
