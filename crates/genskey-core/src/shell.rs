//! The navigation shell: one owner for routing, sidebar and language state.
//!
//! A sidebar click flows through [`Shell::activate`]: the entry's path is
//! resolved by the route table, the current path is updated, and sections
//! additionally toggle their drawer. Every render reads from the same shell,
//! so the highlighted row, the open drawers and the page always agree.

use tracing::{debug, info, warn};

use crate::config::ShellConfig;
use crate::error::Result;
use crate::i18n::{Language, LocalizationStore, Translation};
use crate::navigation::{ExpansionState, NavigationEntry, NavigationTree, SidebarItem};
use crate::preferences::{PreferenceStore, Preferences};
use crate::router::{RouteMatch, RouteTable, normalize_path};

/// Navigation shell state.
pub struct Shell<P> {
    routes: RouteTable<P>,
    navigation: NavigationTree,
    expansion: ExpansionState,
    localization: LocalizationStore,
    current_path: String,
    preferences: Option<Box<dyn PreferenceStore>>,
}

impl<P: Clone> Shell<P> {
    /// Create a shell seeded from configuration, positioned at `/`.
    pub fn new(
        routes: RouteTable<P>,
        navigation: NavigationTree,
        mut localization: LocalizationStore,
        config: &ShellConfig,
    ) -> Self {
        localization.set_current(config.default_language);
        let mut expansion = ExpansionState::seeded(config.initially_expanded.iter().cloned());
        expansion.retain_sections(&navigation);

        let mut shell = Self {
            routes,
            navigation,
            expansion,
            localization,
            current_path: "/".to_string(),
            preferences: None,
        };
        shell.navigate("/");
        shell
    }

    /// Attach a preference store and apply whatever it has saved.
    ///
    /// Load failures are logged and leave the configured defaults in place.
    #[must_use]
    pub fn with_preferences(mut self, store: Box<dyn PreferenceStore>) -> Self {
        match store.load() {
            Ok(Some(saved)) => {
                info!("Restoring saved preferences (language '{}')", saved.language);
                self.localization.set_current(saved.language);
                self.expansion = saved.expanded;
                self.expansion.retain_sections(&self.navigation);
            }
            Ok(None) => debug!("No saved preferences, keeping defaults"),
            Err(e) => warn!("Failed to load preferences, keeping defaults: {}", e),
        }
        self.preferences = Some(store);
        self
    }

    /// Navigate to a path.
    ///
    /// On a match the current path becomes the resolved path (after
    /// redirects); otherwise the normalized requested path is kept so the
    /// sidebar still reflects where the user is.
    pub fn navigate(&mut self, path: &str) -> RouteMatch<P> {
        let resolved = self.routes.resolve(path);
        self.current_path = match &resolved {
            RouteMatch::Found { path, .. } => path.clone(),
            RouteMatch::NotFound { .. } => normalize_path(path),
        };
        debug!("Current path is now '{}'", self.current_path);
        resolved
    }

    /// Resolve the current path again.
    pub fn current_route(&self) -> RouteMatch<P> {
        self.routes.resolve(&self.current_path)
    }

    /// The current (normalized) path.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Handle a click on a top-level sidebar entry.
    ///
    /// Every entry navigates to its path; sections also toggle their drawer.
    /// Returns `None` for an unknown id.
    pub fn activate(&mut self, entry_id: &str) -> Option<RouteMatch<P>> {
        let Some(entry) = self.navigation.get(entry_id) else {
            warn!("Unknown navigation entry '{}'", entry_id);
            return None;
        };
        let path = entry.path().to_string();
        let is_section = entry.is_section();

        let resolved = self.navigate(&path);
        if is_section {
            self.toggle_expanded(entry_id);
        }
        Some(resolved)
    }

    /// Flip a section's drawer, returning whether it is now open.
    ///
    /// Ids that do not name a section are ignored and report `false`.
    pub fn toggle_expanded(&mut self, section_id: &str) -> bool {
        if !self
            .navigation
            .get(section_id)
            .is_some_and(NavigationEntry::is_section)
        {
            debug!("Ignoring expansion toggle for non-section '{}'", section_id);
            return false;
        }
        let expanded = self.expansion.toggle(section_id);
        self.persist();
        expanded
    }

    /// Whether a section's drawer is open.
    #[must_use]
    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expansion.is_expanded(section_id)
    }

    /// The expansion set.
    #[must_use]
    pub const fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// The navigation tree.
    #[must_use]
    pub const fn navigation(&self) -> &NavigationTree {
        &self.navigation
    }

    /// The route table.
    #[must_use]
    pub const fn routes(&self) -> &RouteTable<P> {
        &self.routes
    }

    /// The localization store.
    #[must_use]
    pub const fn localization(&self) -> &LocalizationStore {
        &self.localization
    }

    /// Active language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.localization.current_language()
    }

    /// Switch language by code; unsupported codes leave the shell unchanged.
    pub fn set_language(&mut self, code: &str) -> Result<Language> {
        let language = self.localization.set_language(code)?;
        self.persist();
        Ok(language)
    }

    /// Switch to the other supported language.
    pub fn toggle_language(&mut self) -> Language {
        let language = self.localization.toggle_language();
        self.persist();
        language
    }

    /// Resolve a key in the active language.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.localization.translate(key)
    }

    /// Look up a key, reporting misses explicitly.
    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> Translation<'a> {
        self.localization.lookup(key)
    }

    /// Sidebar view for the current state.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        self.navigation
            .sidebar(&self.current_path, &self.expansion, &self.localization)
    }

    /// Snapshot of what would be persisted.
    #[must_use]
    pub fn preferences(&self) -> Preferences {
        Preferences {
            language: self.language(),
            expanded: self.expansion.clone(),
        }
    }

    fn persist(&self) {
        let Some(store) = &self.preferences else {
            return;
        };
        if let Err(e) = store.save(&self.preferences()) {
            warn!("Failed to save preferences: {}", e);
        }
    }
}
