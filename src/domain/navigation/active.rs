//! Active-item detection for the current location.
//!
//! The specialty root matches only on an exact path match, otherwise the
//! dashboard link would be active on every page. Every other item matches
//! when the path equals its href or continues it past a `/`. When several
//! items match, the longest href wins; equal lengths keep the first item
//! in navigation order.

use serde::Serialize;

use super::{NavigationGroup, NavigationItem};

/// The chain from a group down to the active item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTrail {
    pub group_id: String,
    /// Item ids from the top-level item to the active item.
    pub item_ids: Vec<String>,
}

impl ActiveTrail {
    /// Returns the id of the active item itself.
    pub fn item_id(&self) -> Option<&str> {
        self.item_ids.last().map(String::as_str)
    }
}

/// Strips query, fragment and trailing slashes (keeping a bare `/`).
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Returns the length of the match between `href` and `path`, if any.
fn match_len(href: &str, path: &str, root: &str) -> Option<usize> {
    let href = normalize(href);
    let path = normalize(path);

    if href == normalize(root) || href == "/" {
        return (path == href).then_some(href.len());
    }
    if path == href {
        return Some(href.len());
    }
    path.strip_prefix(href)
        .filter(|rest| rest.starts_with('/'))
        .map(|_| href.len())
}

/// Returns true if `item` matches `current_path` on its own (children are
/// not considered).
///
/// Stricter than a plain prefix test: the href must end at a `/` segment
/// boundary, so `/cardiology/patients-archive` does not activate
/// `/cardiology/patients`.
pub fn is_item_active(item: &NavigationItem, current_path: &str, root: &str) -> bool {
    match_len(&item.href, current_path, root).is_some()
}

struct Candidate {
    group_index: usize,
    chain: Vec<usize>,
    len: usize,
}

fn visit(
    items: &[NavigationItem],
    group_index: usize,
    chain: &mut Vec<usize>,
    current_path: &str,
    root: &str,
    best: &mut Option<Candidate>,
) {
    for (index, item) in items.iter().enumerate() {
        chain.push(index);
        if let Some(len) = match_len(&item.href, current_path, root) {
            if best.as_ref().map_or(true, |b| len > b.len) {
                *best = Some(Candidate {
                    group_index,
                    chain: chain.clone(),
                    len,
                });
            }
        }
        visit(&item.children, group_index, chain, current_path, root, best);
        chain.pop();
    }
}

fn best_candidate(groups: &[NavigationGroup], current_path: &str, root: &str) -> Option<Candidate> {
    let mut best = None;
    let mut chain = Vec::new();
    for (group_index, group) in groups.iter().enumerate() {
        visit(&group.items, group_index, &mut chain, current_path, root, &mut best);
    }
    best
}

/// Finds the active item for `current_path`, searching children too.
///
/// `root` is the specialty's route root, which only matches exactly.
pub fn active_item<'a>(
    groups: &'a [NavigationGroup],
    current_path: &str,
    root: &str,
) -> Option<&'a NavigationItem> {
    let candidate = best_candidate(groups, current_path, root)?;
    let mut items = &groups[candidate.group_index].items;
    let mut found = None;
    for index in candidate.chain {
        let item = &items[index];
        found = Some(item);
        items = &item.children;
    }
    found
}

/// Returns the group id and item chain leading to the active item.
pub fn active_trail(groups: &[NavigationGroup], current_path: &str, root: &str) -> Option<ActiveTrail> {
    let candidate = best_candidate(groups, current_path, root)?;
    let group = &groups[candidate.group_index];
    let mut items = &group.items;
    let mut item_ids = Vec::with_capacity(candidate.chain.len());
    for index in candidate.chain {
        let item = &items[index];
        item_ids.push(item.id.clone());
        items = &item.children;
    }
    Some(ActiveTrail {
        group_id: group.id.clone(),
        item_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::navigation::resolve_navigation;
    use crate::domain::specialty::SpecialtyId;
    use proptest::prelude::*;

    fn active_id(groups: &[NavigationGroup], path: &str, root: &str) -> Option<String> {
        active_item(groups, path, root).map(|i| i.id.clone())
    }

    #[test]
    fn sub_route_activates_prefix_item_not_root() {
        let groups = resolve_navigation(SpecialtyId::Cardiology, &[]);
        let root = SpecialtyId::Cardiology.route_root();

        assert_eq!(active_id(&groups, "/cardiology/patients/42", root).as_deref(), Some("patients"));

        let dashboard = groups[0].find_item("dashboard").unwrap();
        assert!(!is_item_active(dashboard, "/cardiology/patients/42", root));
    }

    #[test]
    fn root_path_activates_dashboard() {
        let groups = resolve_navigation(SpecialtyId::Cardiology, &[]);
        assert_eq!(active_id(&groups, "/cardiology", "/cardiology").as_deref(), Some("dashboard"));
        assert_eq!(active_id(&groups, "/cardiology/", "/cardiology").as_deref(), Some("dashboard"));
    }

    #[test]
    fn generic_root_slash_does_not_match_everything() {
        let groups = resolve_navigation(SpecialtyId::Generic, &[]);
        assert_eq!(active_id(&groups, "/", "/").as_deref(), Some("dashboard"));
        assert_eq!(active_id(&groups, "/appointments/7", "/").as_deref(), Some("appointments"));
        assert_eq!(active_id(&groups, "/unknown", "/"), None);
    }

    #[test]
    fn prefix_match_respects_segment_boundaries() {
        let groups = resolve_navigation(SpecialtyId::Cardiology, &[]);
        assert_eq!(active_id(&groups, "/cardiology/patients-archive", "/cardiology"), None);
    }

    #[test]
    fn longest_prefix_wins() {
        let custom = vec![NavigationGroup::new(
            "shortcuts",
            "Shortcuts",
            vec![NavigationItem::new(
                "patient-42",
                "Patient 42",
                "/cardiology/patients/42",
                "user",
            )],
        )];
        let groups = resolve_navigation(SpecialtyId::Cardiology, &custom);
        assert_eq!(
            active_id(&groups, "/cardiology/patients/42/ecg", "/cardiology").as_deref(),
            Some("patient-42")
        );
        assert_eq!(
            active_id(&groups, "/cardiology/patients/43", "/cardiology").as_deref(),
            Some("patients")
        );
    }

    #[test]
    fn equal_length_tie_keeps_first_in_order() {
        let groups = vec![
            NavigationGroup::new("a", "A", vec![NavigationItem::new("first", "First", "/x/y", "i")]),
            NavigationGroup::new("b", "B", vec![NavigationItem::new("second", "Second", "/x/y", "i")]),
        ];
        assert_eq!(active_id(&groups, "/x/y/z", "/x").as_deref(), Some("first"));
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let groups = resolve_navigation(SpecialtyId::Neurology, &[]);
        assert_eq!(
            active_id(&groups, "/neurology/records?page=2#top", "/neurology").as_deref(),
            Some("records")
        );
    }

    #[test]
    fn trail_descends_into_children() {
        let groups = vec![NavigationGroup::new(
            "main",
            "Main",
            vec![NavigationItem::new("records", "Records", "/neurology/records", "file")
                .with_children(vec![NavigationItem::new(
                    "imaging",
                    "Imaging",
                    "/neurology/records/imaging",
                    "scan",
                )])],
        )];

        let trail = active_trail(&groups, "/neurology/records/imaging/3", "/neurology").unwrap();
        assert_eq!(trail.group_id, "main");
        assert_eq!(trail.item_ids, vec!["records", "imaging"]);
        assert_eq!(trail.item_id(), Some("imaging"));
        assert_eq!(
            active_id(&groups, "/neurology/records/imaging/3", "/neurology").as_deref(),
            Some("imaging")
        );
    }

    #[test]
    fn no_match_returns_none() {
        let groups = resolve_navigation(SpecialtyId::Ophthalmology, &[]);
        assert!(active_trail(&groups, "/cardiology/patients", "/ophthalmology").is_none());
    }

    proptest! {
        #[test]
        fn active_item_always_matches_path(tail in "[a-z]{1,8}(/[a-z0-9]{1,4}){0,3}") {
            let groups = resolve_navigation(SpecialtyId::Cardiology, &[]);
            let path = format!("/cardiology/{}", tail);
            if let Some(item) = active_item(&groups, &path, "/cardiology") {
                prop_assert!(is_item_active(item, &path, "/cardiology"));
                prop_assert_ne!(item.id.as_str(), "dashboard");
            }
        }
    }
}
