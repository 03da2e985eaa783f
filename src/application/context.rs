//! SpecialtyContext - the resolved specialty for one route tree.
//!
//! Produced once by the shell when a route is entered and passed down to
//! every consumer (sidebar, navigation component, specialty pages). Consumers
//! read from it instead of re-deriving the specialty themselves.

use std::sync::Arc;

use serde::Serialize;

use super::ThemeApplication;
use crate::domain::navigation::{ActiveTrail, NavigationGroup};
use crate::domain::specialty::{Resolution, SpecialtyConfig, SpecialtyId};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyContext {
    pub specialty: SpecialtyId,
    /// Set when the requested identifier was unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<String>,
    pub config: Arc<SpecialtyConfig>,
    pub navigation: Arc<Vec<NavigationGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActiveTrail>,
    pub theme: ThemeApplication,
}

impl SpecialtyContext {
    pub(crate) fn from_resolution(
        config: Arc<SpecialtyConfig>,
        resolution: Resolution,
        navigation: Arc<Vec<NavigationGroup>>,
        active: Option<ActiveTrail>,
        theme: ThemeApplication,
    ) -> Self {
        let requested = match resolution {
            Resolution::Known => None,
            Resolution::Fallback { requested } => Some(requested),
        };
        Self {
            specialty: config.id,
            requested,
            config,
            navigation,
            active,
            theme,
        }
    }

    /// Returns true if the generic fallback was used.
    pub fn is_fallback(&self) -> bool {
        self.requested.is_some()
    }

    pub fn display_name(&self) -> &str {
        &self.config.theme.display_name
    }

    /// Returns the specialty term for `generic`, or `generic` itself.
    pub fn term<'a>(&'a self, generic: &'a str) -> &'a str {
        self.config.term(generic)
    }

    /// Returns the id of the active navigation item, if any.
    pub fn active_item_id(&self) -> Option<&str> {
        self.active.as_ref().and_then(ActiveTrail::item_id)
    }

    /// Returns true if `item_id` is the active item.
    pub fn is_active(&self, item_id: &str) -> bool {
        self.active_item_id() == Some(item_id)
    }
}
