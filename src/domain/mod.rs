//! Domain layer containing the resolution logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `specialty` - Specialty vocabulary, static catalog and registry
//! - `access` - Feature gate and viewer capabilities
//! - `navigation` - Navigation model, merge algorithm and active-item detection

pub mod access;
pub mod foundation;
pub mod navigation;
pub mod specialty;
