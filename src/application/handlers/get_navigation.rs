//! GetNavigationHandler - query handler for the generic navigation component.
//!
//! Delegates entirely to the registry, resolver and cache. It never touches
//! the theme; that belongs to whoever owns the route tree.

use std::sync::Arc;

use serde::Serialize;

use crate::application::ConfigCache;
use crate::domain::access::AccessContext;
use crate::domain::navigation::{active_trail, ActiveTrail, NavigationGroup};
use crate::domain::specialty::SpecialtyId;

/// Query for a specialty's navigation.
#[derive(Debug, Clone)]
pub struct GetNavigationQuery {
    /// Raw specialty identifier; unknown values fall back to generic.
    pub specialty: String,
    pub custom_groups: Vec<NavigationGroup>,
    pub access: AccessContext,
    /// Current location, used for active-item detection.
    pub current_path: Option<String>,
}

impl GetNavigationQuery {
    pub fn new(specialty: impl Into<String>, access: AccessContext) -> Self {
        Self {
            specialty: specialty.into(),
            custom_groups: Vec::new(),
            access,
            current_path: None,
        }
    }

    pub fn with_custom_groups(mut self, custom_groups: Vec<NavigationGroup>) -> Self {
        self.custom_groups = custom_groups;
        self
    }

    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.current_path = Some(path.into());
        self
    }
}

/// Resolved navigation as the component renders it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationView {
    pub specialty: SpecialtyId,
    pub groups: Arc<Vec<NavigationGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<ActiveTrail>,
}

pub struct GetNavigationHandler {
    cache: Arc<ConfigCache>,
}

impl GetNavigationHandler {
    pub fn new(cache: Arc<ConfigCache>) -> Self {
        Self { cache }
    }

    pub fn handle(&self, query: GetNavigationQuery) -> NavigationView {
        let (config, _) = self.cache.resolve(&query.specialty);
        let groups = self
            .cache
            .navigation(config.id, &query.custom_groups, &query.access);
        let active = query
            .current_path
            .as_deref()
            .and_then(|path| {
                active_trail(&groups, config.id.tree_path(path), config.id.route_root())
            });

        NavigationView {
            specialty: config.id,
            groups,
            active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::NavigationResolver;
    use crate::domain::specialty::SpecialtyRegistry;

    fn handler() -> GetNavigationHandler {
        GetNavigationHandler::new(Arc::new(ConfigCache::new(
            SpecialtyRegistry::shared(),
            NavigationResolver::default(),
        )))
    }

    #[test]
    fn resolves_navigation_for_known_specialty() {
        let view = handler().handle(GetNavigationQuery::new("neurology", AccessContext::anonymous()));
        assert_eq!(view.specialty, SpecialtyId::Neurology);
        assert_eq!(view.groups[1].title, "Neurology Tools");
        assert!(view.active.is_none());
    }

    #[test]
    fn computes_active_item_when_path_given() {
        let view = handler().handle(
            GetNavigationQuery::new("orthopedics", AccessContext::anonymous())
                .at_path("/orthopedics/xray/12"),
        );
        assert_eq!(view.active.and_then(|t| t.item_id().map(str::to_string)).as_deref(), Some("xray"));
    }

    #[test]
    fn generic_prefixed_path_is_matched_against_generic_hrefs() {
        let view = handler().handle(
            GetNavigationQuery::new("generic", AccessContext::anonymous()).at_path("/generic/records"),
        );
        assert_eq!(view.active.as_ref().and_then(|t| t.item_id()), Some("records"));
    }

    #[test]
    fn repeated_queries_share_the_cached_groups() {
        let handler = handler();
        let first = handler.handle(GetNavigationQuery::new("neurology", AccessContext::anonymous()));
        let second = handler.handle(GetNavigationQuery::new("neurology", AccessContext::anonymous()));
        assert!(Arc::ptr_eq(&first.groups, &second.groups));
    }

    #[test]
    fn unknown_specialty_uses_generic_navigation() {
        let view = handler().handle(GetNavigationQuery::new("podiatry", AccessContext::anonymous()));
        assert_eq!(view.specialty, SpecialtyId::Generic);
        assert_eq!(view.groups[0].items[0].href, "/");
    }
}
