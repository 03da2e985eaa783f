//! DashboardShell - composition root for the dashboard engine.
//!
//! Owns the registry, the config cache and the theme provider, and wires the
//! route handlers from `AppConfig`. One shell serves one rendering context.

use std::sync::Arc;

use super::handlers::{
    EnterRouteHandler, EnterRouteQuery, GetNavigationHandler, GetNavigationQuery, NavigationView,
};
use super::{ConfigCache, SpecialtyContext, ThemeProvider};
use crate::config::{AppConfig, ValidationError};
use crate::domain::access::{AccessContext, FeatureGate};
use crate::domain::navigation::{NavigationGroup, NavigationResolver};
use crate::domain::specialty::SpecialtyRegistry;
use crate::ports::ThemeSink;

pub struct DashboardShell {
    cache: Arc<ConfigCache>,
    theme: Arc<ThemeProvider>,
    enter_route: EnterRouteHandler,
    get_navigation: GetNavigationHandler,
}

impl DashboardShell {
    /// Builds a shell over `registry` and `sink` from `config`.
    pub fn new(
        config: &AppConfig,
        registry: Arc<SpecialtyRegistry>,
        sink: Arc<dyn ThemeSink>,
    ) -> Result<Self, ValidationError> {
        let default_specialty = config.dashboard.default_specialty_id()?;

        let resolver = NavigationResolver::new(FeatureGate::new(config.features.premium_policy));
        let cache = Arc::new(
            ConfigCache::new(Arc::clone(&registry), resolver)
                .with_navigation_caching(config.features.cache_navigation),
        );
        let theme = Arc::new(ThemeProvider::new(registry, sink));

        let enter_route = EnterRouteHandler::new(Arc::clone(&cache), Arc::clone(&theme))
            .with_default_specialty(default_specialty)
            .with_unknown_warnings(config.features.warn_on_unknown_specialty);
        let get_navigation = GetNavigationHandler::new(Arc::clone(&cache));

        Ok(Self {
            cache,
            theme,
            enter_route,
            get_navigation,
        })
    }

    /// Builds a shell over the built-in catalog.
    pub fn from_config(config: &AppConfig, sink: Arc<dyn ThemeSink>) -> Result<Self, ValidationError> {
        Self::new(config, SpecialtyRegistry::shared(), sink)
    }

    /// Resolves the specialty for `path`, applies its theme and resolves
    /// its navigation.
    pub fn enter_route(
        &self,
        path: &str,
        access: AccessContext,
        custom_groups: Vec<NavigationGroup>,
    ) -> SpecialtyContext {
        self.enter_route
            .handle(EnterRouteQuery::new(path, access).with_custom_groups(custom_groups))
    }

    /// Resolves navigation for a raw specialty identifier without touching
    /// the theme.
    pub fn navigation(
        &self,
        specialty: &str,
        access: AccessContext,
        custom_groups: Vec<NavigationGroup>,
    ) -> NavigationView {
        self.get_navigation
            .handle(GetNavigationQuery::new(specialty, access).with_custom_groups(custom_groups))
    }

    pub fn cache(&self) -> &ConfigCache {
        &self.cache
    }

    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }
}
