//! Theme adapters - rendering contexts for specialty theme tokens.

mod in_memory_theme_sink;

pub use in_memory_theme_sink::InMemoryThemeSink;
