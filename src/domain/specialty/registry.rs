//! Specialty Registry - static catalog of specialty configurations.
//!
//! Lookups never fail: any identifier the registry does not know resolves
//! to the generic fallback configuration.
//!
//! # Example
//!
//! ```
//! use specialty_dashboard::domain::specialty::{SpecialtyId, SpecialtyRegistry};
//!
//! let registry = SpecialtyRegistry::builtin();
//!
//! let cardiology = registry.get(SpecialtyId::Cardiology);
//! assert_eq!(cardiology.theme.display_name, "Cardiology");
//!
//! let (config, resolution) = registry.get_or_fallback("made-up-specialty");
//! assert_eq!(config.id, SpecialtyId::Generic);
//! assert!(resolution.is_fallback());
//! ```

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

use super::{catalog, SpecialtyConfig, SpecialtyId};
use crate::domain::foundation::{DomainError, ErrorCode};

static BUILTIN: Lazy<Arc<SpecialtyRegistry>> = Lazy::new(|| {
    Arc::new(SpecialtyRegistry {
        configs: catalog::specialties()
            .into_iter()
            .map(|config| (config.id, config))
            .collect(),
        fallback: catalog::generic(),
    })
});

/// How a requested identifier was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The identifier named a configured specialty.
    Known,
    /// The identifier was not recognized; the generic config was used.
    Fallback { requested: String },
}

impl Resolution {
    /// Returns true if the generic fallback was used.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback { .. })
    }
}

/// Catalog mapping each specialty id to its configuration.
#[derive(Debug, Clone)]
pub struct SpecialtyRegistry {
    /// Configured specialties other than the fallback
    configs: HashMap<SpecialtyId, SpecialtyConfig>,

    /// Generic configuration returned for anything unknown
    fallback: SpecialtyConfig,
}

impl SpecialtyRegistry {
    /// Returns the catalog compiled into the application.
    pub fn builtin() -> &'static SpecialtyRegistry {
        &BUILTIN
    }

    /// Returns a shared handle to the built-in catalog.
    pub fn shared() -> Arc<SpecialtyRegistry> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a registry from explicit configurations.
    ///
    /// Exactly one config must have id `Generic`; it becomes the fallback.
    /// Every config is validated and ids must not repeat.
    pub fn new(configs: Vec<SpecialtyConfig>) -> Result<Self, DomainError> {
        let mut map = HashMap::new();
        let mut fallback = None;

        for config in configs {
            config
                .validate()
                .map_err(|e| DomainError::from(e).with_detail("specialty", config.id.slug()))?;

            let id = config.id;
            let duplicate = if id.is_fallback() {
                fallback.replace(config).is_some()
            } else {
                map.insert(id, config).is_some()
            };
            if duplicate {
                return Err(DomainError::validation(
                    "specialty.id",
                    format!("Specialty '{}' is configured more than once", id),
                ));
            }
        }

        let fallback = fallback.ok_or_else(|| {
            DomainError::new(
                ErrorCode::UnknownSpecialty,
                "Registry requires a generic fallback configuration",
            )
        })?;

        Ok(Self {
            configs: map,
            fallback,
        })
    }

    /// Returns the configuration for `id`, or the fallback if `id` is not
    /// configured.
    pub fn get(&self, id: SpecialtyId) -> &SpecialtyConfig {
        self.configs.get(&id).unwrap_or(&self.fallback)
    }

    /// Returns true if `id` has its own configuration.
    pub fn contains(&self, id: SpecialtyId) -> bool {
        id.is_fallback() || self.configs.contains_key(&id)
    }

    /// Resolves a raw identifier string, falling back to the generic
    /// configuration for anything unrecognized.
    pub fn get_or_fallback(&self, raw: &str) -> (&SpecialtyConfig, Resolution) {
        match raw.parse::<SpecialtyId>() {
            Ok(id) if self.contains(id) => (self.get(id), Resolution::Known),
            _ => (
                &self.fallback,
                Resolution::Fallback {
                    requested: raw.to_string(),
                },
            ),
        }
    }

    /// Returns the generic fallback configuration.
    pub fn fallback(&self) -> &SpecialtyConfig {
        &self.fallback
    }

    /// Returns all configurations in `SpecialtyId::all()` order.
    pub fn configs(&self) -> Vec<&SpecialtyConfig> {
        SpecialtyId::all()
            .iter()
            .filter(|id| self.contains(**id))
            .map(|id| self.get(*id))
            .collect()
    }

    /// Re-checks every configuration invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        for config in self.configs() {
            config
                .validate()
                .map_err(|e| DomainError::from(e).with_detail("specialty", config.id.slug()))?;
        }
        for (id, config) in &self.configs {
            if *id != config.id {
                return Err(DomainError::validation(
                    "specialty.id",
                    format!("Config for '{}' is registered under '{}'", config.id, id),
                ));
            }
        }
        if !self.fallback.id.is_fallback() {
            return Err(DomainError::validation(
                "specialty.id",
                "Fallback configuration must have the generic id",
            ));
        }
        Ok(())
    }
}

/// Looks up a specialty in the built-in catalog by its raw identifier.
pub fn get_specialty_config(raw: &str) -> &'static SpecialtyConfig {
    SpecialtyRegistry::builtin().get_or_fallback(raw).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ColorToken;
    use crate::domain::specialty::{CustomTerminology, FeatureDescriptor, ThemeConfig};
    use proptest::prelude::*;

    fn minimal(id: SpecialtyId, name: &str) -> SpecialtyConfig {
        SpecialtyConfig {
            id,
            theme: ThemeConfig::new(ColorToken::try_new("#123456").unwrap(), name, "icon").unwrap(),
            custom_terminology: CustomTerminology::new(),
            features: vec![],
        }
    }

    #[test]
    fn builtin_catalog_is_valid() {
        assert!(SpecialtyRegistry::builtin().validate().is_ok());
    }

    #[test]
    fn every_known_specialty_has_display_name_and_valid_color() {
        let registry = SpecialtyRegistry::builtin();
        for id in SpecialtyId::all() {
            let config = registry.get(*id);
            assert_eq!(config.id, *id);
            assert!(!config.theme.display_name.is_empty());
            assert!(ColorToken::is_valid(config.theme.primary_color.as_str()));
        }
    }

    #[test]
    fn unknown_id_resolves_to_generic() {
        let (config, resolution) = SpecialtyRegistry::builtin().get_or_fallback("made-up-specialty");
        assert_eq!(config.id, SpecialtyId::Generic);
        assert_eq!(config.theme.display_name, "Medical Dashboard");
        assert!(config.features.is_empty());
        assert_eq!(
            resolution,
            Resolution::Fallback {
                requested: "made-up-specialty".to_string()
            }
        );
    }

    #[test]
    fn legacy_short_code_is_not_an_alias() {
        let (config, resolution) = SpecialtyRegistry::builtin().get_or_fallback("cardio");
        assert_eq!(config.id, SpecialtyId::Generic);
        assert!(resolution.is_fallback());
    }

    #[test]
    fn generic_slug_is_known() {
        let (config, resolution) = SpecialtyRegistry::builtin().get_or_fallback("generic");
        assert_eq!(config.id, SpecialtyId::Generic);
        assert_eq!(resolution, Resolution::Known);
    }

    #[test]
    fn get_specialty_config_uses_builtin() {
        assert_eq!(get_specialty_config("neurology").id, SpecialtyId::Neurology);
        assert_eq!(get_specialty_config("").id, SpecialtyId::Generic);
    }

    #[test]
    fn new_requires_fallback() {
        let result = SpecialtyRegistry::new(vec![minimal(SpecialtyId::Cardiology, "Cardiology")]);
        assert_eq!(result.unwrap_err().code, ErrorCode::UnknownSpecialty);
    }

    #[test]
    fn new_rejects_duplicate_specialty() {
        let result = SpecialtyRegistry::new(vec![
            minimal(SpecialtyId::Generic, "Generic"),
            minimal(SpecialtyId::Cardiology, "Cardiology"),
            minimal(SpecialtyId::Cardiology, "Cardiology Again"),
        ]);
        assert_eq!(result.unwrap_err().code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let mut bad = minimal(SpecialtyId::Neurology, "Neurology");
        bad.features = vec![
            FeatureDescriptor::new("eeg", "EEG", "", "zap"),
            FeatureDescriptor::new("eeg", "EEG", "", "zap"),
        ];
        let err = SpecialtyRegistry::new(vec![minimal(SpecialtyId::Generic, "Generic"), bad])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateFeature);
        assert_eq!(err.details.get("specialty"), Some(&"neurology".to_string()));
    }

    #[test]
    fn sparse_registry_falls_back_for_missing_specialty() {
        let registry = SpecialtyRegistry::new(vec![
            minimal(SpecialtyId::Generic, "Generic"),
            minimal(SpecialtyId::Cardiology, "Cardiology"),
        ])
        .unwrap();

        assert_eq!(registry.get(SpecialtyId::Neurology).id, SpecialtyId::Generic);
        let (_, resolution) = registry.get_or_fallback("neurology");
        assert!(resolution.is_fallback());
        assert_eq!(registry.configs().len(), 2);
    }

    proptest! {
        #[test]
        fn unrecognized_strings_always_resolve_to_same_generic(raw in "\\PC*") {
            prop_assume!(raw.parse::<SpecialtyId>().is_err());
            let registry = SpecialtyRegistry::builtin();
            let (first, _) = registry.get_or_fallback(&raw);
            let (second, _) = registry.get_or_fallback(&raw);
            prop_assert_eq!(first, registry.fallback());
            prop_assert_eq!(first, second);
        }
    }
}
