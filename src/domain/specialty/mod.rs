//! Specialty domain module.
//!
//! The static catalog of medical specialties and what each one contributes
//! to the dashboard: theme, terminology and feature tools.
//!
//! # Module Structure
//!
//! - `specialty_id` - Canonical SpecialtyId vocabulary and legacy code mapping
//! - `theme` - ThemeConfig branding bundle and its rendering tokens
//! - `feature` - FeatureDescriptor tool entries
//! - `terminology` - CustomTerminology overrides
//! - `config` - SpecialtyConfig aggregate
//! - `registry` - SpecialtyRegistry lookup with generic fallback

mod catalog;
mod config;
mod feature;
mod registry;
mod specialty_id;
mod terminology;
mod theme;

pub use config::SpecialtyConfig;
pub use feature::FeatureDescriptor;
pub use registry::{get_specialty_config, Resolution, SpecialtyRegistry};
pub use specialty_id::{ParseSpecialtyError, SpecialtyId};
pub use terminology::CustomTerminology;
pub use theme::{
    ThemeConfig, ThemeTokens, DISPLAY_NAME_TOKEN, ICON_TOKEN, PRIMARY_COLOR_TOKEN,
    SPECIALTY_ID_TOKEN,
};
