//! Feature flags configuration

use serde::Deserialize;

use crate::domain::access::PremiumPolicy;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Log a warning when a route names an unknown specialty
    #[serde(default = "default_true")]
    pub warn_on_unknown_specialty: bool,

    /// How premium tools are shown to non-premium viewers
    #[serde(default)]
    pub premium_policy: PremiumPolicy,

    /// Memoize resolved navigation per specialty and viewer
    #[serde(default = "default_true")]
    pub cache_navigation: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            warn_on_unknown_specialty: true,
            premium_policy: PremiumPolicy::default(),
            cache_navigation: true,
        }
    }
}

fn default_true() -> bool {
    true
}
