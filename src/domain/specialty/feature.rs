//! Feature descriptors - toggleable specialty tools.

use serde::{Deserialize, Serialize};

/// A specialty-specific tool entry (e.g. "EEG Analysis").
///
/// `enabled` decides whether the tool exists in navigation at all;
/// `premium` marks it as part of the paid tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub enabled: bool,
    pub premium: bool,
}

impl FeatureDescriptor {
    /// Creates an enabled, non-premium feature.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            enabled: true,
            premium: false,
        }
    }

    /// Marks the feature as premium.
    pub fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    /// Marks the feature as disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_feature_is_enabled_and_not_premium() {
        let feature = FeatureDescriptor::new("ecg", "ECG Analysis", "12-lead review", "activity");
        assert!(feature.enabled);
        assert!(!feature.premium);
    }

    #[test]
    fn builders_set_flags() {
        let feature = FeatureDescriptor::new("ai", "AI Insights", "", "sparkles")
            .premium()
            .disabled();
        assert!(feature.premium);
        assert!(!feature.enabled);
    }
}
