//! Application layer - Handlers, caching and theme application.
//!
//! This layer orchestrates domain operations and coordinates with ports.
//! The shell is the composition root; the handlers are read-only queries
//! apart from the single theme write performed on a specialty change.

mod config_cache;
mod context;
pub mod handlers;
mod shell;
mod theme_provider;

pub use config_cache::{CacheStats, ConfigCache};
pub use context::SpecialtyContext;
pub use handlers::{
    EnterRouteHandler, EnterRouteQuery, GetNavigationHandler, GetNavigationQuery, NavigationView,
};
pub use shell::DashboardShell;
pub use theme_provider::{apply_specialty_theme, ThemeApplication, ThemeProvider};
