//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Rendering Ports
//!
//! - `ThemeSink` - Shared rendering context that receives theme tokens

mod theme_sink;

pub use theme_sink::{ThemeSink, ThemeSinkError};
