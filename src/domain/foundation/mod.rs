//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the specialty dashboard domain.

mod color;
mod errors;

pub use color::ColorToken;
pub use errors::{DomainError, ErrorCode, ValidationError};
