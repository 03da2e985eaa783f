//! SpecialtyConfig - everything a specialty contributes to the dashboard.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{CustomTerminology, FeatureDescriptor, SpecialtyId, ThemeConfig};
use crate::domain::foundation::ValidationError;

/// Static configuration for one specialty.
///
/// Built once at process start and never mutated afterwards. Decoding
/// runs `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SpecialtyConfigRecord")]
pub struct SpecialtyConfig {
    pub id: SpecialtyId,
    pub theme: ThemeConfig,
    pub custom_terminology: CustomTerminology,
    pub features: Vec<FeatureDescriptor>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpecialtyConfigRecord {
    id: SpecialtyId,
    theme: ThemeConfig,
    #[serde(default)]
    custom_terminology: CustomTerminology,
    #[serde(default)]
    features: Vec<FeatureDescriptor>,
}

impl TryFrom<SpecialtyConfigRecord> for SpecialtyConfig {
    type Error = ValidationError;

    fn try_from(record: SpecialtyConfigRecord) -> Result<Self, Self::Error> {
        let config = Self {
            id: record.id,
            theme: record.theme,
            custom_terminology: record.custom_terminology,
            features: record.features,
        };
        config.validate()?;
        Ok(config)
    }
}

impl SpecialtyConfig {
    /// Returns the specialty term for `generic`, or `generic` itself.
    pub fn term<'a>(&'a self, generic: &'a str) -> &'a str {
        self.custom_terminology.term(generic)
    }

    /// Returns the features with `enabled == true`, in declaration order.
    pub fn enabled_features(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.iter().filter(|f| f.enabled)
    }

    /// Looks up a feature by id.
    pub fn feature(&self, id: &str) -> Option<&FeatureDescriptor> {
        self.features.iter().find(|f| f.id == id)
    }

    /// Checks the config invariants.
    ///
    /// - theme is valid
    /// - feature ids and names are non-empty
    /// - feature ids are unique within the specialty
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.theme.validate()?;

        let mut seen = HashSet::new();
        for feature in &self.features {
            if feature.id.trim().is_empty() {
                return Err(ValidationError::empty_field("feature.id"));
            }
            if feature.name.trim().is_empty() {
                return Err(ValidationError::empty_field("feature.name"));
            }
            if !seen.insert(feature.id.as_str()) {
                return Err(ValidationError::duplicate("feature.id", feature.id.clone()));
            }
        }
        Ok(())
    }
}
