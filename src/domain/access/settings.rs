//! Settings entries shown in the fixed Settings navigation group.

use serde::{Deserialize, Serialize};

/// A settings-area navigation entry.
///
/// `href` is relative to the specialty root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsEntry {
    pub id: String,
    pub title: String,
    pub href: String,
    pub icon: String,
    pub admin_only: bool,
}

impl SettingsEntry {
    /// Creates an entry visible to every viewer.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: href.into(),
            icon: icon.into(),
            admin_only: false,
        }
    }

    /// Restricts the entry to administrators.
    pub fn admin_only(mut self) -> Self {
        self.admin_only = true;
        self
    }

    /// The entries every specialty's Settings group starts from.
    pub fn defaults() -> Vec<SettingsEntry> {
        vec![
            SettingsEntry::new("settings", "Settings", "settings", "settings"),
            SettingsEntry::new("help", "Help & Support", "help", "help-circle"),
            SettingsEntry::new("administration", "Administration", "admin", "shield").admin_only(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_settings_and_help() {
        let ids: Vec<_> = SettingsEntry::defaults().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["settings", "help", "administration"]);
    }

    #[test]
    fn only_administration_is_admin_only() {
        let admin_only: Vec<_> = SettingsEntry::defaults()
            .into_iter()
            .filter(|e| e.admin_only)
            .map(|e| e.id)
            .collect();
        assert_eq!(admin_only, vec!["administration"]);
    }
}
