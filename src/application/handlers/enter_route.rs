//! EnterRouteHandler - resolves the specialty for a route tree.
//!
//! Runs once per route change in the application shell:
//! route path -> specialty id -> registry lookup -> theme + navigation.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::{ConfigCache, SpecialtyContext, ThemeProvider};
use crate::domain::access::AccessContext;
use crate::domain::navigation::{active_trail, NavigationGroup};
use crate::domain::specialty::{Resolution, SpecialtyId};

/// Query to enter a route.
#[derive(Debug, Clone)]
pub struct EnterRouteQuery {
    pub path: String,
    pub access: AccessContext,
    pub custom_groups: Vec<NavigationGroup>,
}

impl EnterRouteQuery {
    pub fn new(path: impl Into<String>, access: AccessContext) -> Self {
        Self {
            path: path.into(),
            access,
            custom_groups: Vec::new(),
        }
    }

    pub fn with_custom_groups(mut self, custom_groups: Vec<NavigationGroup>) -> Self {
        self.custom_groups = custom_groups;
        self
    }
}

/// Handler for entering a route.
pub struct EnterRouteHandler {
    cache: Arc<ConfigCache>,
    theme: Arc<ThemeProvider>,
    default_specialty: SpecialtyId,
    warn_on_unknown: bool,
}

impl EnterRouteHandler {
    pub fn new(cache: Arc<ConfigCache>, theme: Arc<ThemeProvider>) -> Self {
        Self {
            cache,
            theme,
            default_specialty: SpecialtyId::Generic,
            warn_on_unknown: true,
        }
    }

    /// Specialty used when the path has no first segment.
    pub fn with_default_specialty(mut self, id: SpecialtyId) -> Self {
        self.default_specialty = id;
        self
    }

    pub fn with_unknown_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_unknown = enabled;
        self
    }

    pub fn handle(&self, query: EnterRouteQuery) -> SpecialtyContext {
        let raw = SpecialtyId::first_segment(&query.path).unwrap_or(self.default_specialty.slug());
        let (config, mut resolution) = self.cache.resolve(raw);

        let navigation = self
            .cache
            .navigation(config.id, &query.custom_groups, &query.access);
        let active = active_trail(
            &navigation,
            config.id.tree_path(&query.path),
            config.id.route_root(),
        );

        // Generic hrefs sit at `/`, so their first segment is never a slug.
        // A path that lands on a generic item is a known route.
        if resolution.is_fallback() && active.is_some() {
            resolution = Resolution::Known;
        }

        if let Resolution::Fallback { requested } = &resolution {
            if self.warn_on_unknown {
                warn!(
                    requested = %requested,
                    path = %query.path,
                    "Unknown specialty, using generic configuration"
                );
            }
        }

        let theme = self.theme.apply(config.id);

        debug!(
            specialty = %config.id,
            path = %query.path,
            active = ?active.as_ref().and_then(|trail| trail.item_id()),
            theme = ?theme,
            "Entered route"
        );

        SpecialtyContext::from_resolution(config, resolution, navigation, active, theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryThemeSink;
    use crate::application::ThemeApplication;
    use crate::domain::navigation::NavigationResolver;
    use crate::domain::specialty::SpecialtyRegistry;

    fn handler() -> (EnterRouteHandler, InMemoryThemeSink) {
        let registry = SpecialtyRegistry::shared();
        let sink = InMemoryThemeSink::new();
        let cache = Arc::new(ConfigCache::new(registry.clone(), NavigationResolver::default()));
        let theme = Arc::new(ThemeProvider::new(registry, Arc::new(sink.clone())));
        (EnterRouteHandler::new(cache, theme), sink)
    }

    #[test]
    fn resolves_specialty_from_first_segment() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new(
            "/cardiology/patients/42",
            AccessContext::anonymous(),
        ));

        assert_eq!(ctx.specialty, SpecialtyId::Cardiology);
        assert!(!ctx.is_fallback());
        assert_eq!(ctx.active_item_id(), Some("patients"));
        assert_eq!(ctx.theme, ThemeApplication::Applied);
    }

    #[test]
    fn unknown_segment_falls_back_to_generic() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new("/made-up-specialty", AccessContext::anonymous()));

        assert_eq!(ctx.specialty, SpecialtyId::Generic);
        assert_eq!(ctx.requested.as_deref(), Some("made-up-specialty"));
        assert_eq!(ctx.display_name(), "Medical Dashboard");
    }

    #[test]
    fn generic_href_resolves_as_known_generic() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new("/patients/42", AccessContext::anonymous()));

        assert_eq!(ctx.specialty, SpecialtyId::Generic);
        assert!(!ctx.is_fallback());
        assert_eq!(ctx.requested, None);
        assert_eq!(ctx.active_item_id(), Some("patients"));
    }

    #[test]
    fn generic_prefixed_path_highlights_item() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new(
            "/generic/appointments",
            AccessContext::anonymous(),
        ));

        assert_eq!(ctx.specialty, SpecialtyId::Generic);
        assert!(!ctx.is_fallback());
        assert_eq!(ctx.active_item_id(), Some("appointments"));
    }

    #[test]
    fn unmatched_segment_under_generic_stays_a_fallback() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new(
            "/made-up-specialty/patients",
            AccessContext::anonymous(),
        ));

        assert!(ctx.is_fallback());
        assert!(ctx.active.is_none());
    }

    #[test]
    fn empty_path_uses_default_specialty() {
        let (handler, _) = handler();
        let handler = handler.with_default_specialty(SpecialtyId::GeneralMedicine);
        let ctx = handler.handle(EnterRouteQuery::new("/", AccessContext::anonymous()));

        assert_eq!(ctx.specialty, SpecialtyId::GeneralMedicine);
        assert!(!ctx.is_fallback());
    }

    #[test]
    fn theme_is_applied_only_when_specialty_changes() {
        let (handler, sink) = handler();
        let ctx = AccessContext::anonymous();

        handler.handle(EnterRouteQuery::new("/neurology", ctx));
        let second = handler.handle(EnterRouteQuery::new("/neurology/records", ctx));
        assert_eq!(second.theme, ThemeApplication::Unchanged);
        assert_eq!(sink.write_count(), 1);

        let third = handler.handle(EnterRouteQuery::new("/orthopedics", ctx));
        assert_eq!(third.theme, ThemeApplication::Applied);
        assert_eq!(sink.write_count(), 2);
    }

    #[test]
    fn custom_groups_reach_navigation() {
        let (handler, _) = handler();
        let query = EnterRouteQuery::new("/ophthalmology", AccessContext::anonymous())
            .with_custom_groups(vec![NavigationGroup::new(
                "shortcuts",
                "Shortcuts",
                vec![crate::domain::navigation::NavigationItem::new(
                    "clinic",
                    "Clinic Today",
                    "/ophthalmology/clinic",
                    "calendar",
                )],
            )]);
        let ctx = handler.handle(query);
        assert_eq!(ctx.navigation.last().map(|g| g.id.as_str()), Some("shortcuts"));
    }

    #[test]
    fn terminology_is_exposed_through_context() {
        let (handler, _) = handler();
        let ctx = handler.handle(EnterRouteQuery::new("/cardiology", AccessContext::anonymous()));
        assert_eq!(ctx.term("appointment"), "Consultation");
        assert_eq!(ctx.term("prescription"), "prescription");
    }
}
