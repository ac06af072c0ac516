//! Hierarchical sidebar model.
//!
//! Top-level entries are either sections that own child links or plain
//! links. A section is *active* when the current path lies under its path;
//! a child link is *selected* only on an exact path match.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::i18n::LocalizationStore;
use crate::router::{is_under, normalize_path};

/// Icon shown next to a top-level entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    /// Dashboard tiles.
    Dashboard,
    /// Magnifying glass.
    Search,
    /// Node graph.
    Network,
    /// Fermentation flask.
    Flask,
    /// Microscope.
    Microscope,
    /// Database cylinder.
    Database,
    /// Assistant sparkle.
    Assistant,
    /// Briefcase.
    Briefcase,
    /// Lab beaker.
    Beaker,
}

/// A child link inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLink {
    /// Localization key of the label.
    pub label_key: String,
    /// Exact path this link activates.
    pub path: String,
}

impl NavigationLink {
    /// Create a child link.
    pub fn new(label_key: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label_key: label_key.into(),
            path: path.into(),
        }
    }
}

/// A top-level entry that owns child links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationSection {
    /// Unique short identifier.
    pub id: String,
    /// Localization key of the label.
    pub label_key: String,
    /// Icon.
    pub icon: Icon,
    /// Landing path; also the prefix used for activation.
    pub path: String,
    /// Child links in display order.
    pub children: Vec<NavigationLink>,
}

/// A top-level entry without children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLeaf {
    /// Unique short identifier.
    pub id: String,
    /// Localization key of the label.
    pub label_key: String,
    /// Icon.
    pub icon: Icon,
    /// Target path; also the prefix used for activation.
    pub path: String,
}

/// A top-level sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEntry {
    /// Expandable section with child links.
    Section(NavigationSection),
    /// Plain link.
    Link(NavigationLeaf),
}

impl NavigationEntry {
    /// Create a section entry.
    pub fn section(
        id: impl Into<String>,
        label_key: impl Into<String>,
        icon: Icon,
        path: impl Into<String>,
        children: Vec<NavigationLink>,
    ) -> Self {
        Self::Section(NavigationSection {
            id: id.into(),
            label_key: label_key.into(),
            icon,
            path: path.into(),
            children,
        })
    }

    /// Create a plain link entry.
    pub fn link(
        id: impl Into<String>,
        label_key: impl Into<String>,
        icon: Icon,
        path: impl Into<String>,
    ) -> Self {
        Self::Link(NavigationLeaf {
            id: id.into(),
            label_key: label_key.into(),
            icon,
            path: path.into(),
        })
    }

    /// Entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Section(section) => &section.id,
            Self::Link(leaf) => &leaf.id,
        }
    }

    /// Label key.
    #[must_use]
    pub fn label_key(&self) -> &str {
        match self {
            Self::Section(section) => &section.label_key,
            Self::Link(leaf) => &leaf.label_key,
        }
    }

    /// Icon.
    #[must_use]
    pub const fn icon(&self) -> Icon {
        match self {
            Self::Section(section) => section.icon,
            Self::Link(leaf) => leaf.icon,
        }
    }

    /// Landing path.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Section(section) => &section.path,
            Self::Link(leaf) => &leaf.path,
        }
    }

    /// Child links; empty for plain links.
    #[must_use]
    pub fn children(&self) -> &[NavigationLink] {
        match self {
            Self::Section(section) => &section.children,
            Self::Link(_) => &[],
        }
    }

    /// Whether this entry is an expandable section.
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }

    fn path_mut(&mut self) -> &mut String {
        match self {
            Self::Section(section) => &mut section.path,
            Self::Link(leaf) => &mut leaf.path,
        }
    }
}

/// Whether a top-level entry is highlighted for the current path.
#[must_use]
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    is_under(&normalize_path(current_path), &normalize_path(entry_path))
}

/// Whether a child link is highlighted for the current path.
#[must_use]
pub fn is_selected(link_path: &str, current_path: &str) -> bool {
    normalize_path(link_path) == normalize_path(current_path)
}

/// Set of expanded section ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState(BTreeSet<String>);

impl ExpansionState {
    /// Empty (all collapsed) state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given sections expanded.
    pub fn seeded<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(ids.into_iter().map(Into::into).collect())
    }

    /// Flip a section's membership, returning whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = if self.0.remove(id) {
            false
        } else {
            self.0.insert(id.to_string());
            true
        };
        debug!("Section '{}' expanded: {}", id, expanded);
        expanded
    }

    /// Whether a section is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Expanded ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Drop ids that are not sections of `tree`.
    pub fn retain_sections(&mut self, tree: &NavigationTree) {
        self.0.retain(|id| tree.get(id).is_some_and(NavigationEntry::is_section));
    }

    /// Number of expanded sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every section is collapsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A rendered child link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    /// Resolved label.
    pub label: String,
    /// Target path.
    pub path: String,
    /// Exact match with the current path.
    pub selected: bool,
}

/// A rendered top-level row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    /// Entry id.
    pub id: String,
    /// Resolved label.
    pub label: String,
    /// Landing path.
    pub path: String,
    /// Icon.
    pub icon: Icon,
    /// Whether this row is the active one.
    pub active: bool,
    /// Whether the row has a drawer of children.
    pub expandable: bool,
    /// Whether the drawer is open.
    pub expanded: bool,
    /// Visible children; empty unless expanded.
    pub children: Vec<SidebarLink>,
}

/// Validated, ordered list of top-level entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTree {
    entries: Vec<NavigationEntry>,
}

impl NavigationTree {
    /// Validate and build a tree.
    ///
    /// Ids must be unique, paths absolute, and child paths unique per section.
    pub fn new(entries: Vec<NavigationEntry>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut validated = Vec::with_capacity(entries.len());

        for mut entry in entries {
            if !ids.insert(entry.id().to_string()) {
                return Err(Error::DuplicateNavigationId(entry.id().to_string()));
            }

            let path = entry.path_mut();
            *path = absolute(path)?;

            if let NavigationEntry::Section(section) = &mut entry {
                let mut paths = HashSet::new();
                for child in &mut section.children {
                    child.path = absolute(&child.path)?;
                    if !paths.insert(child.path.clone()) {
                        return Err(Error::DuplicateLinkPath {
                            section: section.id.clone(),
                            path: child.path.clone(),
                        });
                    }
                }
            }

            validated.push(entry);
        }

        Ok(Self { entries: validated })
    }

    /// Entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[NavigationEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// The single active entry for a path: the longest matching prefix.
    #[must_use]
    pub fn active_entry(&self, current_path: &str) -> Option<&NavigationEntry> {
        self.entries
            .iter()
            .filter(|entry| is_active(entry.path(), current_path))
            .max_by_key(|entry| entry.path().len())
    }

    /// Every localization key the tree references.
    #[must_use]
    pub fn label_keys(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|entry| {
                std::iter::once(entry.label_key())
                    .chain(entry.children().iter().map(|child| child.label_key.as_str()))
            })
            .collect()
    }

    /// Build the sidebar view for the current path.
    #[must_use]
    pub fn sidebar(
        &self,
        current_path: &str,
        expansion: &ExpansionState,
        localization: &LocalizationStore,
    ) -> Vec<SidebarItem> {
        let active_id = self.active_entry(current_path).map(NavigationEntry::id);

        self.entries
            .iter()
            .map(|entry| {
                let expandable = entry.is_section();
                let expanded = expandable && expansion.is_expanded(entry.id());
                let children = if expanded {
                    entry
                        .children()
                        .iter()
                        .map(|child| SidebarLink {
                            label: localization.translate(&child.label_key),
                            path: child.path.clone(),
                            selected: is_selected(&child.path, current_path),
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                SidebarItem {
                    id: entry.id().to_string(),
                    label: localization.translate(entry.label_key()),
                    path: entry.path().to_string(),
                    icon: entry.icon(),
                    active: active_id == Some(entry.id()),
                    expandable,
                    expanded,
                    children,
                }
            })
            .collect()
    }
}

fn absolute(path: &str) -> Result<String> {
    if path.trim().starts_with('/') {
        Ok(normalize_path(path))
    } else {
        Err(Error::InvalidNavigationPath(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn tree() -> NavigationTree {
        NavigationTree::new(vec![
            NavigationEntry::link("dashboard", "nav.dashboard", Icon::Dashboard, "/dashboard"),
            NavigationEntry::section(
                "discovery",
                "nav.discovery",
                Icon::Search,
                "/discovery",
                vec![NavigationLink::new("nav.discovery.library", "/discovery/library")],
            ),
        ])
        .expect("valid tree")
    }

    #[test]
    fn test_section_is_prefix_link_is_exact() {
        assert!(is_active("/discovery", "/discovery/bgc"));
        assert!(!is_selected("/discovery/library", "/discovery/bgc"));
        assert!(is_active("/discovery", "/discovery/library"));
        assert!(is_selected("/discovery/library", "/discovery/library/"));
        assert!(!is_active("/discovery", "/discoveryx"));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = ExpansionState::seeded(["discovery", "design"]);
        let before = state.clone();
        assert!(!state.toggle("discovery"));
        assert!(state.toggle("discovery"));
        assert_eq!(state, before);

        assert!(state.toggle("twin"));
        assert!(!state.toggle("twin"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let result = NavigationTree::new(vec![
            NavigationEntry::link("dashboard", "nav.dashboard", Icon::Dashboard, "/dashboard"),
            NavigationEntry::link("dashboard", "nav.dashboard", Icon::Dashboard, "/home"),
        ]);
        assert!(matches!(result, Err(Error::DuplicateNavigationId(id)) if id == "dashboard"));
    }

    #[test]
    fn test_duplicate_child_path_is_rejected() {
        let result = NavigationTree::new(vec![NavigationEntry::section(
            "twin",
            "nav.twin",
            Icon::Flask,
            "/twin",
            vec![
                NavigationLink::new("nav.twin.qc", "/twin/qc"),
                NavigationLink::new("nav.twin.qc", "/twin/qc/"),
            ],
        )]);
        assert!(matches!(result, Err(Error::DuplicateLinkPath { .. })));
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let result = NavigationTree::new(vec![NavigationEntry::link(
            "dashboard",
            "nav.dashboard",
            Icon::Dashboard,
            "dashboard",
        )]);
        assert!(matches!(result, Err(Error::InvalidNavigationPath(_))));
    }

    #[test]
    fn test_active_entry_prefers_longest_prefix() {
        let tree = NavigationTree::new(vec![
            NavigationEntry::link("home", "nav.home", Icon::Dashboard, "/"),
            NavigationEntry::link("dashboard", "nav.dashboard", Icon::Dashboard, "/dashboard"),
        ])
        .expect("valid tree");
        assert_eq!(
            tree.active_entry("/dashboard").map(NavigationEntry::id),
            Some("dashboard")
        );
        assert_eq!(tree.active_entry("/other").map(NavigationEntry::id), Some("home"));
    }

    #[test]
    fn test_sidebar_shows_children_only_when_expanded() {
        let tree = tree();
        let store = LocalizationStore::new(Language::En, Language::En);

        let collapsed = tree.sidebar("/discovery/bgc", &ExpansionState::new(), &store);
        assert!(collapsed[1].active);
        assert!(!collapsed[1].expanded);
        assert!(collapsed[1].children.is_empty());
        assert!(!collapsed[0].active);
        assert!(!collapsed[0].expandable);

        let expanded = tree.sidebar(
            "/discovery/library",
            &ExpansionState::seeded(["discovery"]),
            &store,
        );
        assert!(expanded[1].expanded);
        assert_eq!(expanded[1].children.len(), 1);
        assert!(expanded[1].children[0].selected);
        // Missing keys degrade to the raw key.
        assert_eq!(expanded[1].label, "nav.discovery");
    }

    #[test]
    fn test_expansion_ignores_links() {
        let tree = tree();
        let store = LocalizationStore::new(Language::En, Language::En);
        let state = ExpansionState::seeded(["dashboard"]);
        let items = tree.sidebar("/dashboard", &state, &store);
        assert!(!items[0].expanded);
    }

    #[test]
    fn test_retain_sections() {
        let tree = tree();
        let mut state = ExpansionState::seeded(["discovery", "dashboard", "retired"]);
        state.retain_sections(&tree);
        assert_eq!(state.ids().collect::<Vec<_>>(), vec!["discovery"]);
    }

    #[test]
    fn test_label_keys() {
        assert_eq!(
            tree().label_keys(),
            vec!["nav.dashboard", "nav.discovery", "nav.discovery.library"]
        );
    }
}
