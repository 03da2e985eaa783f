//! ThemeProvider - applies a specialty's theme to the rendering context.
//!
//! The provider is the single writer of the shared theme. It is created once
//! per rendered route tree and handed down to consumers, who read the
//! active theme from it instead of writing their own.
//!
//! Applying is guarded by the specialty id: applying the id that is already
//! active does not touch the rendering context. When the context rejects a
//! write, the previous theme stays active and the failure is logged.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::specialty::{SpecialtyId, SpecialtyRegistry, ThemeTokens};
use crate::ports::ThemeSink;

/// Outcome of applying a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeApplication {
    /// The tokens were written to the rendering context.
    Applied,
    /// The specialty was already active; nothing was written.
    Unchanged,
    /// The rendering context rejected the write; the previous theme stays.
    KeptPrevious,
}

#[derive(Debug, Clone)]
struct ActiveTheme {
    id: SpecialtyId,
    tokens: ThemeTokens,
}

/// Single writer of the shared theme context.
pub struct ThemeProvider {
    registry: Arc<SpecialtyRegistry>,
    sink: Arc<dyn ThemeSink>,
    active: Mutex<Option<ActiveTheme>>,
}

impl ThemeProvider {
    pub fn new(registry: Arc<SpecialtyRegistry>, sink: Arc<dyn ThemeSink>) -> Self {
        Self {
            registry,
            sink,
            active: Mutex::new(None),
        }
    }

    /// Applies the theme for `id`.
    ///
    /// Idempotent: a second call with the active id writes nothing.
    pub fn apply(&self, id: SpecialtyId) -> ThemeApplication {
        let mut active = self.active.lock().unwrap_or_else(PoisonError::into_inner);

        if active.as_ref().map(|theme| theme.id) == Some(id) {
            return ThemeApplication::Unchanged;
        }

        let tokens = self.registry.get(id).theme.tokens(id);
        match self.sink.write_tokens(&tokens) {
            Ok(()) => {
                debug!(specialty = %id, "Applied specialty theme");
                *active = Some(ActiveTheme { id, tokens });
                ThemeApplication::Applied
            }
            Err(e) => {
                warn!(
                    specialty = %id,
                    previous = ?active.as_ref().map(|theme| theme.id),
                    error = %e,
                    "Theme context rejected write, keeping previous theme"
                );
                ThemeApplication::KeptPrevious
            }
        }
    }

    /// Returns the specialty whose theme is currently active.
    pub fn active_specialty(&self) -> Option<SpecialtyId> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|theme| theme.id)
    }

    /// Returns the tokens of the active theme.
    pub fn active_tokens(&self) -> Option<ThemeTokens> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|theme| theme.tokens.clone())
    }

    /// Forgets the active theme so the next `apply` writes again, e.g. after
    /// the rendering context was recreated.
    pub fn invalidate(&self) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl std::fmt::Debug for ThemeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeProvider")
            .field("active", &self.active_specialty())
            .finish_non_exhaustive()
    }
}

/// Applies the built-in catalog's theme for `id` to `sink`.
///
/// Stateless: every call writes. Prefer a long-lived `ThemeProvider`.
pub fn apply_specialty_theme(sink: &dyn ThemeSink, id: SpecialtyId) -> ThemeApplication {
    let tokens = SpecialtyRegistry::builtin().get(id).theme.tokens(id);
    match sink.write_tokens(&tokens) {
        Ok(()) => ThemeApplication::Applied,
        Err(e) => {
            warn!(specialty = %id, error = %e, "Theme context rejected write");
            ThemeApplication::KeptPrevious
        }
    }
}
