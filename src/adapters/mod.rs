//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `theme` - Rendering contexts that receive theme tokens (in-memory / CSS)

pub mod theme;

pub use theme::InMemoryThemeSink;
