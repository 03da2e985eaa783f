//! Specialty Dashboard - specialty-aware configuration for a clinical dashboard
//!
//! This crate resolves which medical specialty a route belongs to, applies that
//! specialty's theme to a shared rendering context, and builds the navigation
//! a viewer is allowed to see. Unknown specialties fall back to a generic
//! configuration rather than failing.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
