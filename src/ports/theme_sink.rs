//! Theme Sink Port - Interface for the shared rendering context.
//!
//! The theme provider writes a specialty's tokens through this port
//! (e.g. CSS custom properties on a root scope). Consumers read the
//! active tokens back rather than holding their own copy.

use crate::domain::specialty::ThemeTokens;

/// Errors that can occur while writing to the rendering context
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeSinkError {
    #[error("Rendering context unavailable: {0}")]
    Unavailable(String),

    #[error("Rendering context rejected token '{key}': {reason}")]
    Rejected { key: String, reason: String },
}

/// Port for the rendering context that theme tokens are written into
pub trait ThemeSink: Send + Sync {
    /// Replace every theme token in the context with `tokens`.
    ///
    /// Implementations must leave the context unchanged when they
    /// return an error.
    ///
    /// # Errors
    /// Returns `ThemeSinkError` if the context cannot be written
    fn write_tokens(&self, tokens: &ThemeTokens) -> Result<(), ThemeSinkError>;

    /// Read the tokens currently in the context.
    ///
    /// # Errors
    /// Returns `ThemeSinkError::Unavailable` if the context cannot be read
    fn read_tokens(&self) -> Result<ThemeTokens, ThemeSinkError>;
}
