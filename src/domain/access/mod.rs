//! Access domain module.
//!
//! Capability checks that decide which features and settings entries
//! appear in a viewer's navigation.
//!
//! # Module Structure
//!
//! - `context` - AccessContext viewer capabilities
//! - `settings` - SettingsEntry and the default settings entries
//! - `gate` - FeatureGate, PremiumPolicy and access results

mod context;
mod gate;
mod settings;

pub use context::AccessContext;
pub use gate::{
    AccessDeniedReason, AccessResult, FeatureGate, Gated, PremiumPolicy, ADMIN_BADGE, PRO_BADGE,
};
pub use settings::SettingsEntry;
