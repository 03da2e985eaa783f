//! ConfigCache - memoized specialty configs and resolved navigation.
//!
//! Configs are cached per specialty id. Navigation is cached per
//! (specialty id, viewer capabilities), since the feature gate makes the
//! output depend on the viewer. Each navigation slot remembers the custom
//! groups it was resolved with; a call with different custom groups
//! replaces the slot instead of adding one, so the cache holds at most one
//! navigation per specialty and viewer. A hit returns the same `Arc`, so
//! callers can compare results with `Arc::ptr_eq`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::debug;

use crate::domain::access::AccessContext;
use crate::domain::navigation::{NavigationGroup, NavigationResolver};
use crate::domain::specialty::{Resolution, SpecialtyConfig, SpecialtyId, SpecialtyRegistry};

type NavigationKey = (SpecialtyId, AccessContext);

#[derive(Debug)]
struct NavigationSlot {
    custom_groups: Vec<NavigationGroup>,
    groups: Arc<Vec<NavigationGroup>>,
}

/// Cache counters. Config and navigation lookups are counted separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub config_hits: u64,
    pub config_misses: u64,
    pub navigation_hits: u64,
    pub navigation_misses: u64,
    pub cached_configs: usize,
    pub cached_navigations: usize,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Counters {
    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }
}

/// Memoizes registry lookups and navigation resolution.
#[derive(Debug)]
pub struct ConfigCache {
    registry: Arc<SpecialtyRegistry>,
    resolver: NavigationResolver,
    cache_navigation: bool,
    configs: Mutex<HashMap<SpecialtyId, Arc<SpecialtyConfig>>>,
    navigation: Mutex<HashMap<NavigationKey, NavigationSlot>>,
    config_counters: Counters,
    navigation_counters: Counters,
}

impl ConfigCache {
    pub fn new(registry: Arc<SpecialtyRegistry>, resolver: NavigationResolver) -> Self {
        Self {
            registry,
            resolver,
            cache_navigation: true,
            configs: Mutex::new(HashMap::new()),
            navigation: Mutex::new(HashMap::new()),
            config_counters: Counters::default(),
            navigation_counters: Counters::default(),
        }
    }

    /// Turns navigation memoization on or off. Configs are always cached.
    pub fn with_navigation_caching(mut self, enabled: bool) -> Self {
        self.cache_navigation = enabled;
        self
    }

    pub fn registry(&self) -> &SpecialtyRegistry {
        &self.registry
    }

    /// Returns the config for `id`.
    pub fn config(&self, id: SpecialtyId) -> Arc<SpecialtyConfig> {
        self.lookup_config(id, Some(&self.config_counters))
    }

    fn lookup_config(&self, id: SpecialtyId, counters: Option<&Counters>) -> Arc<SpecialtyConfig> {
        let mut configs = self.configs.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(config) = configs.get(&id) {
            if let Some(counters) = counters {
                counters.hit();
            }
            return Arc::clone(config);
        }

        if let Some(counters) = counters {
            counters.miss();
        }
        debug!(specialty = %id, "Config cache miss");
        let config = Arc::new(self.registry.get(id).clone());
        configs.insert(id, Arc::clone(&config));
        config
    }

    /// Resolves a raw identifier through the registry, then the cache.
    pub fn resolve(&self, raw: &str) -> (Arc<SpecialtyConfig>, Resolution) {
        let (config, resolution) = self.registry.get_or_fallback(raw);
        let id = config.id;
        (self.config(id), resolution)
    }

    /// Returns the resolved navigation for `id`.
    ///
    /// Only navigation lookups are counted here; the config fetched along
    /// the way does not touch the config counters.
    pub fn navigation(
        &self,
        id: SpecialtyId,
        custom_groups: &[NavigationGroup],
        access: &AccessContext,
    ) -> Arc<Vec<NavigationGroup>> {
        let config = self.lookup_config(id, None);
        if !self.cache_navigation {
            return Arc::new(self.resolver.resolve(&config, custom_groups, access));
        }

        let mut navigation = self.navigation.lock().unwrap_or_else(PoisonError::into_inner);
        let key = (id, *access);
        if let Some(slot) = navigation.get(&key) {
            if slot.custom_groups.as_slice() == custom_groups {
                self.navigation_counters.hit();
                return Arc::clone(&slot.groups);
            }
        }

        self.navigation_counters.miss();
        debug!(specialty = %id, custom = custom_groups.len(), "Navigation cache miss");
        let groups = Arc::new(self.resolver.resolve(&config, custom_groups, access));
        navigation.insert(
            key,
            NavigationSlot {
                custom_groups: custom_groups.to_vec(),
                groups: Arc::clone(&groups),
            },
        );
        groups
    }

    /// Drops every cached entry for `id`.
    pub fn invalidate(&self, id: SpecialtyId) {
        self.configs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
        self.navigation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(specialty, _), _| *specialty != id);
        debug!(specialty = %id, "Invalidated cached specialty");
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.configs.lock().unwrap_or_else(PoisonError::into_inner).clear();
        self.navigation.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            config_hits: self.config_counters.hits.load(Ordering::Relaxed),
            config_misses: self.config_counters.misses.load(Ordering::Relaxed),
            navigation_hits: self.navigation_counters.hits.load(Ordering::Relaxed),
            navigation_misses: self.navigation_counters.misses.load(Ordering::Relaxed),
            cached_configs: self.configs.lock().unwrap_or_else(PoisonError::into_inner).len(),
            cached_navigations: self
                .navigation
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len(),
        }
    }
}
