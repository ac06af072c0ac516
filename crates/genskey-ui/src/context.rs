//! Reactive access to the navigation shell.
//!
//! The [`Shell`] is owned by a single [`RwSignal`] provided through Leptos
//! context. The router owns the URL; [`ShellContext::sync_path`] feeds every
//! location change into the shell, and components read derived view models
//! from it.

use genskey_core::{Language, Page, RouteMatch, Shell, SidebarItem, SidebarLink, is_selected};
use leptos::prelude::*;

/// Handle to the shell shared by every component.
#[derive(Clone, Copy)]
pub struct ShellContext {
    shell: RwSignal<Shell<Page>>,
}

impl ShellContext {
    /// Wrap a shell in a signal.
    #[must_use]
    pub fn new(shell: Shell<Page>) -> Self {
        Self {
            shell: RwSignal::new(shell),
        }
    }

    /// Sidebar rows for the current path, expansion and language.
    #[must_use]
    pub fn sidebar(&self) -> Vec<SidebarItem> {
        self.shell.with(Shell::sidebar)
    }

    /// The page for the current path.
    #[must_use]
    pub fn route(&self) -> RouteMatch<Page> {
        self.shell.with(Shell::current_route)
    }

    /// Active display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.shell.with(Shell::language)
    }

    /// Translate a key in the active language.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.shell.with(|shell| shell.translate(key))
    }

    /// Translate a key and fill its `{name}` placeholders.
    #[must_use]
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.shell
            .with(|shell| shell.localization().translate_with(key, args))
    }

    /// Tabs for a module page: the children of its sidebar section.
    #[must_use]
    pub fn module_tabs(&self, page: Page) -> Vec<SidebarLink> {
        self.shell.with(|shell| {
            shell
                .navigation()
                .get(page.navigation_id())
                .map(|entry| {
                    entry
                        .children()
                        .iter()
                        .map(|link| SidebarLink {
                            label: shell.translate(&link.label_key),
                            path: link.path.clone(),
                            selected: is_selected(&link.path, shell.current_path()),
                        })
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    /// Move the shell to the router's current path.
    ///
    /// Returns the path the shell settled on, which differs from `requested`
    /// after a redirect or normalization.
    pub fn sync_path(&self, requested: &str) -> String {
        self.shell
            .try_update(|shell| {
                shell.navigate(requested);
                shell.current_path().to_string()
            })
            .unwrap_or_else(|| requested.to_string())
    }

    /// Open or close a section drawer.
    pub fn toggle_expanded(&self, section_id: &str) {
        self.shell.update(|shell| {
            shell.toggle_expanded(section_id);
        });
    }

    /// Switch between Chinese and English.
    pub fn toggle_language(&self) {
        self.shell.update(|shell| {
            let language = shell.toggle_language();
            leptos::logging::log!("Language switched to {}", language);
        });
    }
}

/// The shell provided by [`crate::App`].
///
/// # Panics
///
/// Panics when called outside the component tree of [`crate::App`].
#[must_use]
pub fn use_shell() -> ShellContext {
    expect_context::<ShellContext>()
}

#[cfg(test)]
mod tests {
    use genskey_core::{ShellConfig, catalog};

    use super::*;

    fn with_context(test: impl FnOnce(ShellContext)) {
        let owner = Owner::new();
        owner.with(|| {
            let shell = catalog::dashboard_shell(&ShellConfig::default()).expect("valid catalog");
            test(ShellContext::new(shell));
        });
    }

    #[test]
    fn test_sync_path_reports_redirect_target() {
        with_context(|ctx| {
            assert_eq!(ctx.sync_path("/"), "/dashboard");
            assert_eq!(ctx.route().page(), Some(&Page::Dashboard));
        });
    }

    #[test]
    fn test_sync_path_normalizes_trailing_slash() {
        with_context(|ctx| {
            assert_eq!(ctx.sync_path("/twin/batches/"), "/twin/batches");
            assert_eq!(ctx.route().page(), Some(&Page::Twin));
        });
    }

    #[test]
    fn test_module_tabs_follow_current_path() {
        with_context(|ctx| {
            ctx.sync_path("/discovery/bgc");
            let tabs = ctx.module_tabs(Page::Discovery);
            assert_eq!(tabs.len(), 5);
            let selected: Vec<_> = tabs.iter().filter(|tab| tab.selected).collect();
            assert_eq!(selected.len(), 1);
            assert_eq!(selected[0].path, "/discovery/bgc");
        });
    }

    #[test]
    fn test_toggle_expanded_and_language() {
        with_context(|ctx| {
            let open_before = ctx.sidebar().iter().filter(|item| item.expanded).count();
            ctx.toggle_expanded("twin");
            let open_after = ctx.sidebar().iter().filter(|item| item.expanded).count();
            assert_eq!(open_after, open_before + 1);

            assert_eq!(ctx.language(), Language::Zh);
            ctx.toggle_language();
            assert_eq!(ctx.language(), Language::En);
            assert_eq!(ctx.translate("nav.dashboard"), "Dashboard");
        });
    }
}
