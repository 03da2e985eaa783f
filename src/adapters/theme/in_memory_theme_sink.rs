//! In-Memory Theme Sink Adapter
//!
//! Holds the active theme tokens in memory and renders them as a
//! `:root { ... }` block of CSS custom properties. Used by the demo
//! binary and by tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::specialty::{ThemeTokens, PRIMARY_COLOR_TOKEN};
use crate::ports::{ThemeSink, ThemeSinkError};

/// In-memory rendering context for theme tokens
#[derive(Debug, Clone)]
pub struct InMemoryThemeSink {
    tokens: Arc<RwLock<ThemeTokens>>,
    writes: Arc<AtomicUsize>,
    available: Arc<AtomicBool>,
}

impl InMemoryThemeSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self {
            tokens: Arc::new(RwLock::new(ThemeTokens::default())),
            writes: Arc::new(AtomicUsize::new(0)),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Simulate the rendering context going away (or coming back)
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Render the current tokens as CSS custom properties on `:root`
    pub fn to_css(&self) -> Result<String, ThemeSinkError> {
        let tokens = self.read_tokens()?;
        let mut css = String::from(":root {\n");
        for (key, value) in tokens.iter() {
            css.push_str(&format!("  {}: {};\n", key, css_value(key, value)));
        }
        css.push('}');
        Ok(css)
    }

    fn ensure_available(&self) -> Result<(), ThemeSinkError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ThemeSinkError::Unavailable("context detached".to_string()))
        }
    }
}

impl Default for InMemoryThemeSink {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors are emitted bare; everything else is quoted.
fn css_value(key: &str, value: &str) -> String {
    if key == PRIMARY_COLOR_TOKEN {
        value.to_string()
    } else {
        format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl ThemeSink for InMemoryThemeSink {
    fn write_tokens(&self, tokens: &ThemeTokens) -> Result<(), ThemeSinkError> {
        self.ensure_available()?;
        let mut current = self
            .tokens
            .write()
            .map_err(|e| ThemeSinkError::Unavailable(e.to_string()))?;
        *current = tokens.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn read_tokens(&self) -> Result<ThemeTokens, ThemeSinkError> {
        self.ensure_available()?;
        self.tokens
            .read()
            .map(|tokens| tokens.clone())
            .map_err(|e| ThemeSinkError::Unavailable(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::specialty::{SpecialtyId, SpecialtyRegistry};

    fn cardiology_tokens() -> ThemeTokens {
        SpecialtyRegistry::builtin()
            .get(SpecialtyId::Cardiology)
            .theme
            .tokens(SpecialtyId::Cardiology)
    }

    #[test]
    fn new_sink_is_empty() {
        let sink = InMemoryThemeSink::new();
        assert!(sink.read_tokens().unwrap().is_empty());
        assert_eq!(sink.write_count(), 0);
    }

    #[test]
    fn write_replaces_tokens() {
        let sink = InMemoryThemeSink::new();
        sink.write_tokens(&cardiology_tokens()).unwrap();

        let tokens = sink.read_tokens().unwrap();
        assert_eq!(tokens.get(PRIMARY_COLOR_TOKEN), Some("#e11d48"));
        assert_eq!(sink.write_count(), 1);
    }

    #[test]
    fn unavailable_sink_rejects_writes_and_keeps_state() {
        let sink = InMemoryThemeSink::new();
        sink.write_tokens(&cardiology_tokens()).unwrap();
        sink.set_available(false);

        let neuro = SpecialtyRegistry::builtin()
            .get(SpecialtyId::Neurology)
            .theme
            .tokens(SpecialtyId::Neurology);
        assert!(matches!(sink.write_tokens(&neuro), Err(ThemeSinkError::Unavailable(_))));

        sink.set_available(true);
        assert_eq!(sink.read_tokens().unwrap(), cardiology_tokens());
        assert_eq!(sink.write_count(), 1);
    }

    #[test]
    fn clones_share_the_same_context() {
        let sink = InMemoryThemeSink::new();
        let view = sink.clone();
        sink.write_tokens(&cardiology_tokens()).unwrap();
        assert_eq!(view.read_tokens().unwrap(), cardiology_tokens());
    }

    #[test]
    fn renders_css_custom_properties() {
        let sink = InMemoryThemeSink::new();
        sink.write_tokens(&cardiology_tokens()).unwrap();

        let css = sink.to_css().unwrap();
        assert_eq!(
            css,
            ":root {\n  --specialty-icon: \"heart\";\n  --specialty-id: \"cardiology\";\n  --specialty-name: \"Cardiology\";\n  --specialty-primary: #e11d48;\n}"
        );
    }
}
