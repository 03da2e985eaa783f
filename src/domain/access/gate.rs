//! Feature gate - decides which entries a viewer may see.
//!
//! The gate is consulted before an entry is placed in the resolved
//! navigation, not merely before it is decorated with a badge. An entry
//! that fails the check is left out of the output entirely.
//!
//! # Example
//!
//! ```
//! use specialty_dashboard::domain::access::{AccessContext, FeatureGate, SettingsEntry};
//!
//! let gate = FeatureGate::default();
//! let admin_panel = SettingsEntry::new("administration", "Administration", "admin", "shield")
//!     .admin_only();
//!
//! assert!(!gate.is_visible(&admin_panel, &AccessContext::anonymous()));
//! assert!(gate.is_visible(&admin_panel, &AccessContext::admin()));
//! ```

use serde::{Deserialize, Serialize};

use super::{AccessContext, SettingsEntry};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::specialty::FeatureDescriptor;

/// Badge shown on premium entries.
pub const PRO_BADGE: &str = "Pro";

/// Badge shown on admin-only entries.
pub const ADMIN_BADGE: &str = "Admin";

/// How premium entries are treated for viewers without a premium subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PremiumPolicy {
    /// Show premium entries to everyone, decorated with a "Pro" badge.
    #[default]
    Badge,
    /// Hide premium entries from viewers without a premium subscription.
    Hide,
}

/// An entry the gate can make a decision about.
pub trait Gated {
    /// Identifier used in denial reasons.
    fn gate_id(&self) -> &str;

    fn is_enabled(&self) -> bool {
        true
    }

    fn is_admin_only(&self) -> bool {
        false
    }

    fn is_premium(&self) -> bool {
        false
    }
}

impl Gated for FeatureDescriptor {
    fn gate_id(&self) -> &str {
        &self.id
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn is_premium(&self) -> bool {
        self.premium
    }
}

impl Gated for SettingsEntry {
    fn gate_id(&self) -> &str {
        &self.id
    }

    fn is_admin_only(&self) -> bool {
        self.admin_only
    }
}

/// Result of a gate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessResult {
    /// The entry is visible.
    Allowed,
    /// The entry is withheld for the given reason.
    Denied(AccessDeniedReason),
}

impl AccessResult {
    /// Returns true if access is allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessResult::Allowed)
    }

    /// Returns true if access is denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, AccessResult::Denied(_))
    }

    /// Converts the result to a Result type, with denied becoming a
    /// `Forbidden` domain error.
    pub fn into_result(self) -> Result<(), DomainError> {
        match self {
            AccessResult::Allowed => Ok(()),
            AccessResult::Denied(reason) => Err(DomainError::new(
                ErrorCode::Forbidden,
                reason.user_message(),
            )
            .with_detail("entry", reason.entry_id())),
        }
    }
}

/// Reason why an entry was withheld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessDeniedReason {
    /// The entry is switched off for this specialty.
    Disabled { entry: String },

    /// The entry is restricted to administrators.
    AdminOnly { entry: String },

    /// The entry requires a premium subscription.
    PremiumRequired { entry: String },
}

impl AccessDeniedReason {
    /// Returns the id of the entry that was withheld.
    pub fn entry_id(&self) -> &str {
        match self {
            AccessDeniedReason::Disabled { entry }
            | AccessDeniedReason::AdminOnly { entry }
            | AccessDeniedReason::PremiumRequired { entry } => entry,
        }
    }

    /// Get a user-facing message for the denial reason.
    pub fn user_message(&self) -> String {
        match self {
            AccessDeniedReason::Disabled { entry } => {
                format!("'{}' is not available for this specialty.", entry)
            }
            AccessDeniedReason::AdminOnly { entry } => {
                format!("'{}' is only available to administrators.", entry)
            }
            AccessDeniedReason::PremiumRequired { entry } => {
                format!("'{}' requires a premium subscription.", entry)
            }
        }
    }
}

impl std::fmt::Display for AccessDeniedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

/// Capability check applied to features and settings entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureGate {
    premium_policy: PremiumPolicy,
}

impl FeatureGate {
    pub fn new(premium_policy: PremiumPolicy) -> Self {
        Self { premium_policy }
    }

    pub fn premium_policy(&self) -> PremiumPolicy {
        self.premium_policy
    }

    /// Decides whether `entry` may be shown to the viewer described by `ctx`.
    ///
    /// Checks run in order: enabled, admin-only, premium.
    pub fn check<E: Gated + ?Sized>(&self, entry: &E, ctx: &AccessContext) -> AccessResult {
        let id = entry.gate_id().to_string();

        if !entry.is_enabled() {
            return AccessResult::Denied(AccessDeniedReason::Disabled { entry: id });
        }
        if entry.is_admin_only() && !ctx.is_admin {
            return AccessResult::Denied(AccessDeniedReason::AdminOnly { entry: id });
        }
        if entry.is_premium() && self.premium_policy == PremiumPolicy::Hide && !ctx.is_premium {
            return AccessResult::Denied(AccessDeniedReason::PremiumRequired { entry: id });
        }
        AccessResult::Allowed
    }

    /// Returns true if `entry` may be shown to the viewer.
    pub fn is_visible<E: Gated + ?Sized>(&self, entry: &E, ctx: &AccessContext) -> bool {
        self.check(entry, ctx).is_allowed()
    }

    /// Returns the visible entries, preserving order.
    pub fn filter<'a, E: Gated>(&self, entries: &'a [E], ctx: &AccessContext) -> Vec<&'a E> {
        entries
            .iter()
            .filter(|entry| self.is_visible(*entry, ctx))
            .collect()
    }

    /// Returns the badge an entry carries once it is visible.
    pub fn badge<E: Gated + ?Sized>(&self, entry: &E) -> Option<&'static str> {
        if entry.is_admin_only() {
            Some(ADMIN_BADGE)
        } else if entry.is_premium() {
            Some(PRO_BADGE)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premium_feature() -> FeatureDescriptor {
        FeatureDescriptor::new("risk-calculator", "Cardiac Risk Calculator", "", "calculator")
            .premium()
    }

    fn admin_entry() -> SettingsEntry {
        SettingsEntry::new("administration", "Administration", "admin", "shield").admin_only()
    }

    #[test]
    fn disabled_feature_is_never_visible() {
        let gate = FeatureGate::default();
        let feature = FeatureDescriptor::new("holter", "Holter", "", "watch").disabled();
        let ctx = AccessContext::admin().with_premium(true);

        assert_eq!(
            gate.check(&feature, &ctx),
            AccessResult::Denied(AccessDeniedReason::Disabled {
                entry: "holter".to_string()
            })
        );
    }

    #[test]
    fn admin_only_entry_requires_admin() {
        let gate = FeatureGate::default();
        assert!(!gate.is_visible(&admin_entry(), &AccessContext::anonymous()));
        assert!(gate.is_visible(&admin_entry(), &AccessContext::admin()));
    }

    #[test]
    fn premium_feature_visible_under_badge_policy() {
        let gate = FeatureGate::new(PremiumPolicy::Badge);
        assert!(gate.is_visible(&premium_feature(), &AccessContext::anonymous()));
    }

    #[test]
    fn premium_feature_hidden_under_hide_policy_without_subscription() {
        let gate = FeatureGate::new(PremiumPolicy::Hide);
        let result = gate.check(&premium_feature(), &AccessContext::anonymous());
        assert!(matches!(
            result,
            AccessResult::Denied(AccessDeniedReason::PremiumRequired { .. })
        ));
        assert!(gate.is_visible(&premium_feature(), &AccessContext::anonymous().with_premium(true)));
    }

    #[test]
    fn badges_follow_flags() {
        let gate = FeatureGate::default();
        assert_eq!(gate.badge(&premium_feature()), Some(PRO_BADGE));
        assert_eq!(gate.badge(&admin_entry()), Some(ADMIN_BADGE));
        assert_eq!(gate.badge(&SettingsEntry::new("help", "Help", "help", "help")), None);
    }

    #[test]
    fn filter_preserves_order() {
        let gate = FeatureGate::default();
        let entries = SettingsEntry::defaults();
        let visible: Vec<_> = gate
            .filter(&entries, &AccessContext::anonymous())
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(visible, vec!["settings", "help"]);
    }

    #[test]
    fn denied_result_converts_to_forbidden() {
        let gate = FeatureGate::default();
        let err = gate
            .check(&admin_entry(), &AccessContext::anonymous())
            .into_result()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.details.get("entry"), Some(&"administration".to_string()));
    }

    #[test]
    fn denial_reason_serializes_with_type_tag() {
        let reason = AccessDeniedReason::AdminOnly {
            entry: "administration".to_string(),
        };
        let json = serde_json::to_value(&reason).unwrap();
        assert_eq!(json["type"], "admin_only");
        assert_eq!(json["entry"], "administration");
    }

    #[test]
    fn premium_policy_deserializes_lowercase() {
        let policy: PremiumPolicy = serde_json::from_str("\"hide\"").unwrap();
        assert_eq!(policy, PremiumPolicy::Hide);
    }
}
