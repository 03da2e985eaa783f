//! Authorization context consulted by the feature gate.

use serde::{Deserialize, Serialize};

/// Capabilities of the viewer the navigation is resolved for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessContext {
    pub is_admin: bool,
    pub is_premium: bool,
}

impl AccessContext {
    /// A viewer with no elevated capabilities.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An administrator without a premium subscription.
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            is_premium: false,
        }
    }

    /// Sets the premium capability.
    pub fn with_premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    /// Sets the admin capability.
    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_capabilities() {
        let ctx = AccessContext::anonymous();
        assert!(!ctx.is_admin);
        assert!(!ctx.is_premium);
    }

    #[test]
    fn builders_compose() {
        let ctx = AccessContext::admin().with_premium(true);
        assert!(ctx.is_admin);
        assert!(ctx.is_premium);
        assert!(!ctx.with_admin(false).is_admin);
    }
}
