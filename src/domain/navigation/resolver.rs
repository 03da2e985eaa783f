//! Navigation Resolver - merges base, specialty and caller groups.
//!
//! # Algorithm
//!
//! 1. Fixed "Main" group (dashboard, patients, appointments, records)
//!    rooted at the specialty's route root
//! 2. "{displayName} Tools" group from the specialty's features that pass
//!    the feature gate; premium tools carry a "Pro" badge
//! 3. Fixed "Settings" group from the settings entries that pass the gate;
//!    admin-only entries carry an "Admin" badge
//! 4. Caller-supplied custom groups, in caller order
//! 5. Groups with no items are dropped
//!
//! The output depends only on its inputs.

use tracing::debug;

use super::{NavigationGroup, NavigationItem};
use crate::domain::access::{AccessContext, FeatureGate, SettingsEntry};
use crate::domain::specialty::{SpecialtyConfig, SpecialtyId, SpecialtyRegistry};

pub const MAIN_GROUP_ID: &str = "main";
pub const TOOLS_GROUP_ID: &str = "tools";
pub const SETTINGS_GROUP_ID: &str = "settings";

/// Builds the resolved navigation for a specialty.
#[derive(Debug, Clone)]
pub struct NavigationResolver {
    gate: FeatureGate,
    settings: Vec<SettingsEntry>,
}

impl Default for NavigationResolver {
    fn default() -> Self {
        Self::new(FeatureGate::default())
    }
}

impl NavigationResolver {
    /// Creates a resolver with the default settings entries.
    pub fn new(gate: FeatureGate) -> Self {
        Self {
            gate,
            settings: SettingsEntry::defaults(),
        }
    }

    /// Replaces the settings entries used for the Settings group.
    pub fn with_settings(mut self, settings: Vec<SettingsEntry>) -> Self {
        self.settings = settings;
        self
    }

    pub fn gate(&self) -> &FeatureGate {
        &self.gate
    }

    /// Resolves the navigation groups for `config`.
    pub fn resolve(
        &self,
        config: &SpecialtyConfig,
        custom_groups: &[NavigationGroup],
        ctx: &AccessContext,
    ) -> Vec<NavigationGroup> {
        let mut groups = Vec::with_capacity(3 + custom_groups.len());
        groups.push(self.main_group(config.id));
        groups.push(self.tools_group(config, ctx));
        groups.push(self.settings_group(config.id, ctx));
        groups.extend(custom_groups.iter().cloned());

        groups.retain(|group| !group.is_empty());

        debug!(
            specialty = %config.id,
            groups = groups.len(),
            custom = custom_groups.len(),
            "Resolved navigation"
        );

        groups
    }

    fn main_group(&self, id: SpecialtyId) -> NavigationGroup {
        NavigationGroup::new(
            MAIN_GROUP_ID,
            "Main",
            vec![
                NavigationItem::new("dashboard", "Dashboard", id.href(""), "layout-dashboard"),
                NavigationItem::new("patients", "Patients", id.href("patients"), "users"),
                NavigationItem::new(
                    "appointments",
                    "Appointments",
                    id.href("appointments"),
                    "calendar",
                ),
                NavigationItem::new("records", "Records", id.href("records"), "file-text"),
            ],
        )
    }

    fn tools_group(&self, config: &SpecialtyConfig, ctx: &AccessContext) -> NavigationGroup {
        let items = self
            .gate
            .filter(&config.features, ctx)
            .into_iter()
            .map(|feature| {
                let mut item = NavigationItem::new(
                    feature.id.clone(),
                    feature.name.clone(),
                    config.id.href(&feature.id),
                    feature.icon.clone(),
                );
                item.is_premium = feature.premium;
                item.badge = self.gate.badge(feature).map(str::to_string);
                item
            })
            .collect();

        NavigationGroup::new(
            TOOLS_GROUP_ID,
            format!("{} Tools", config.theme.display_name),
            items,
        )
        .collapsible(true)
    }

    fn settings_group(&self, id: SpecialtyId, ctx: &AccessContext) -> NavigationGroup {
        let items = self
            .gate
            .filter(&self.settings, ctx)
            .into_iter()
            .map(|entry| {
                let mut item = NavigationItem::new(
                    entry.id.clone(),
                    entry.title.clone(),
                    id.href(&entry.href),
                    entry.icon.clone(),
                );
                item.badge = self.gate.badge(entry).map(str::to_string);
                item
            })
            .collect();

        NavigationGroup::new(SETTINGS_GROUP_ID, "Settings", items).collapsible(false)
    }
}

/// Resolves navigation from the built-in catalog for an anonymous viewer
/// with the default gate.
pub fn resolve_navigation(id: SpecialtyId, custom_groups: &[NavigationGroup]) -> Vec<NavigationGroup> {
    let config = SpecialtyRegistry::builtin().get(id);
    NavigationResolver::default().resolve(config, custom_groups, &AccessContext::anonymous())
}
