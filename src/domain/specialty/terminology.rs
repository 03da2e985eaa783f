//! Specialty-specific terminology overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a generic term (e.g. "patient") to the specialty's term.
///
/// Terms without an override resolve to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomTerminology(BTreeMap<String, String>);

impl CustomTerminology {
    /// Creates an empty terminology (every term falls back).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an override, replacing any previous one for the same term.
    pub fn with(mut self, generic: impl Into<String>, specific: impl Into<String>) -> Self {
        self.0.insert(generic.into(), specific.into());
        self
    }

    /// Returns the specialty term for `generic`, or `generic` itself.
    pub fn term<'a>(&'a self, generic: &'a str) -> &'a str {
        self.0.get(generic).map(String::as_str).unwrap_or(generic)
    }

    /// Returns true if `generic` has an override.
    pub fn overrides(&self, generic: &str) -> bool {
        self.0.contains_key(generic)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
