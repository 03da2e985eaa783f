//! Navigation items and groups as rendered by the sidebar.

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A single navigation link, optionally with nested children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationItem {
    pub id: String,
    pub title: String,
    pub href: String,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_premium: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavigationItem>,
}

impl NavigationItem {
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
            badge: None,
            is_new: false,
            is_premium: false,
            children: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_children(mut self, children: Vec<NavigationItem>) -> Self {
        self.children = children;
        self
    }

    pub fn marked_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn marked_premium(mut self) -> Self {
        self.is_premium = true;
        self
    }
}

/// A titled cluster of navigation links shown together in the sidebar.
///
/// Collapsed/expanded state is per-session UI state and is not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationGroup {
    pub id: String,
    pub title: String,
    pub items: Vec<NavigationItem>,
    #[serde(default)]
    pub collapsible: bool,
    #[serde(default = "default_true")]
    pub default_open: bool,
}

impl NavigationGroup {
    /// Creates a non-collapsible group that starts open.
    pub fn new(id: impl Into<String>, title: impl Into<String>, items: Vec<NavigationItem>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items,
            collapsible: false,
            default_open: true,
        }
    }

    pub fn collapsible(mut self, default_open: bool) -> Self {
        self.collapsible = true;
        self.default_open = default_open;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Finds an item by id anywhere in the group, children included.
    pub fn find_item(&self, id: &str) -> Option<&NavigationItem> {
        fn find<'a>(items: &'a [NavigationItem], id: &str) -> Option<&'a NavigationItem> {
            items.iter().find_map(|item| {
                if item.id == id {
                    Some(item)
                } else {
                    find(&item.children, id)
                }
            })
        }
        find(&self.items, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_are_omitted_when_unset() {
        let item = NavigationItem::new("patients", "Patients", "/cardiology/patients", "users");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("badge").is_none());
        assert!(json.get("isPremium").is_none());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn premium_item_serializes_camel_case_flags() {
        let item = NavigationItem::new("risk", "Risk", "/cardiology/risk", "calculator")
            .with_badge("Pro")
            .marked_premium();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["badge"], "Pro");
        assert_eq!(json["isPremium"], true);
    }

    #[test]
    fn group_deserializes_with_defaults() {
        let group: NavigationGroup = serde_json::from_str(
            r#"{"id":"shortcuts","title":"Shortcuts","items":[
                {"id":"today","title":"Today","href":"/cardiology/today","icon":"calendar"}
            ]}"#,
        )
        .unwrap();
        assert!(!group.collapsible);
        assert!(group.default_open);
        assert_eq!(group.items[0].id, "today");
    }

    #[test]
    fn find_item_searches_children() {
        let group = NavigationGroup::new(
            "main",
            "Main",
            vec![NavigationItem::new("records", "Records", "/records", "file").with_children(vec![
                NavigationItem::new("labs", "Labs", "/records/labs", "flask"),
            ])],
        );
        assert_eq!(group.find_item("labs").map(|i| i.href.as_str()), Some("/records/labs"));
        assert!(group.find_item("missing").is_none());
    }
}
