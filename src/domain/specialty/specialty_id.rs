//! SpecialtyId enum - the one canonical specialty vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Medical practice area that scopes navigation, theme, and terminology.
///
/// Serialized as the canonical route slug (`general-medicine`, ...).
/// `Generic` is the fallback used for unrecognized identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialtyId {
    Cardiology,
    Neurology,
    Orthopedics,
    Ophthalmology,
    GeneralMedicine,
    Generic,
}

/// Error returned by strict parsing of a specialty slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSpecialtyError {
    #[error("Unknown specialty '{0}'")]
    Unknown(String),
}

impl SpecialtyId {
    /// Returns all specialty ids in catalog order.
    pub fn all() -> &'static [SpecialtyId] {
        &[
            SpecialtyId::Cardiology,
            SpecialtyId::Neurology,
            SpecialtyId::Orthopedics,
            SpecialtyId::Ophthalmology,
            SpecialtyId::GeneralMedicine,
            SpecialtyId::Generic,
        ]
    }

    /// Returns the canonical slug used in routes and configuration.
    pub fn slug(&self) -> &'static str {
        match self {
            SpecialtyId::Cardiology => "cardiology",
            SpecialtyId::Neurology => "neurology",
            SpecialtyId::Orthopedics => "orthopedics",
            SpecialtyId::Ophthalmology => "ophthalmology",
            SpecialtyId::GeneralMedicine => "general-medicine",
            SpecialtyId::Generic => "generic",
        }
    }

    /// Returns the short code the authentication layer uses for this
    /// specialty, if it has one.
    ///
    /// This match is the only mapping between the two vocabularies.
    pub fn legacy_auth_code(&self) -> Option<&'static str> {
        match self {
            SpecialtyId::Cardiology => Some("cardio"),
            SpecialtyId::Neurology => Some("neurology"),
            SpecialtyId::Generic => Some("generic"),
            SpecialtyId::Orthopedics
            | SpecialtyId::Ophthalmology
            | SpecialtyId::GeneralMedicine => None,
        }
    }

    /// Maps an authentication-layer short code to its specialty.
    pub fn from_legacy_auth_code(code: &str) -> Option<SpecialtyId> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.legacy_auth_code() == Some(code))
    }

    /// Returns true for the fallback specialty.
    pub fn is_fallback(&self) -> bool {
        matches!(self, SpecialtyId::Generic)
    }

    /// Returns the root href of this specialty's route tree.
    ///
    /// The fallback specialty lives at `/`.
    pub fn route_root(&self) -> &'static str {
        match self {
            SpecialtyId::Cardiology => "/cardiology",
            SpecialtyId::Neurology => "/neurology",
            SpecialtyId::Orthopedics => "/orthopedics",
            SpecialtyId::Ophthalmology => "/ophthalmology",
            SpecialtyId::GeneralMedicine => "/general-medicine",
            SpecialtyId::Generic => "/",
        }
    }

    /// Builds an href below this specialty's root.
    pub fn href(&self, segment: &str) -> String {
        let segment = segment.trim_matches('/');
        let root = self.route_root();
        if segment.is_empty() {
            root.to_string()
        } else if root == "/" {
            format!("/{}", segment)
        } else {
            format!("{}/{}", root, segment)
        }
    }

    /// Maps a route path onto this specialty's navigation tree.
    ///
    /// Generic hrefs live at `/`, so a `/generic` prefix is stripped before
    /// matching. Every other specialty's hrefs already carry its root.
    pub fn tree_path<'a>(&self, path: &'a str) -> &'a str {
        if *self != SpecialtyId::Generic {
            return path;
        }
        match path.strip_prefix("/generic") {
            Some(rest) if rest.is_empty() || rest.starts_with(['?', '#']) => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }

    /// Extracts the specialty from the first segment of a route path.
    ///
    /// Returns `None` when the path has no first segment or the segment is
    /// not a canonical slug.
    pub fn from_route_path(path: &str) -> Option<SpecialtyId> {
        Self::first_segment(path).and_then(|segment| segment.parse().ok())
    }

    /// Returns the first non-empty path segment, ignoring query and fragment.
    pub fn first_segment(path: &str) -> Option<&str> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        path.split('/').find(|segment| !segment.is_empty())
    }
}

impl fmt::Display for SpecialtyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for SpecialtyId {
    type Err = ParseSpecialtyError;

    /// Accepts canonical slugs only; no aliases, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.slug() == s)
            .ok_or_else(|| ParseSpecialtyError::Unknown(s.to_string()))
    }
}
