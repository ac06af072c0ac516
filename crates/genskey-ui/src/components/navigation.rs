//! Sidebar navigation.
//!
//! Renders the shell's sidebar view model: one row per top-level entry, an
//! expandable drawer of child links under each section, and the language
//! toggle in the footer.

use genskey_core::{SidebarItem, SidebarLink};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::layout::MobileMenuContext;
use crate::context::use_shell;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The full sidebar: brand, entries and footer.
#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell();

    view! {
        <div class="sidebar">
            <div class="sidebar-brand">
                <div class="sidebar-brand-mark">"G"</div>
                <div class="sidebar-brand-text">
                    <div class="sidebar-brand-name">{move || shell.translate("shell.brand")}</div>
                    <div class="sidebar-brand-tagline">{move || shell.translate("shell.tagline")}</div>
                </div>
            </div>
            <nav class="sidebar-nav">
                {move || {
                    shell
                        .sidebar()
                        .into_iter()
                        .map(|item| view! { <NavSection item=item /> })
                        .collect_view()
                }}
            </nav>
            <div class="sidebar-footer">
                <LanguageToggle />
                <div class="sidebar-version">
                    {move || shell.translate_with("shell.version", &[("version", VERSION)])}
                </div>
            </div>
        </div>
    }
}

/// A top-level entry with its drawer of child links.
#[component]
pub fn NavSection(
    /// The rendered row.
    item: SidebarItem,
) -> impl IntoView {
    let shell = use_shell();
    let menu = use_context::<MobileMenuContext>();
    let id = item.id.clone();
    let expandable = item.expandable;
    // The router handles the navigation; sections also toggle their drawer
    let on_click = Callback::new(move |()| {
        if expandable {
            shell.toggle_expanded(&id);
        } else if let Some(menu) = menu {
            menu.close();
        }
    });

    view! {
        <div class="nav-section" class:expanded=item.expanded>
            <NavItem
                label=item.label
                path=item.path
                active=item.active
                icon=icons::for_icon(item.icon)
                expandable=expandable
                expanded=item.expanded
                on_click=on_click
            />
            {(!item.children.is_empty()).then(|| view! {
                <div class="nav-section-items">
                    {item
                        .children
                        .into_iter()
                        .map(|link| view! { <NavLink link=link /> })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// A top-level row with icon, label and an optional chevron.
#[component]
pub fn NavItem(
    /// The item label.
    #[prop(into)]
    label: String,
    /// Target path.
    #[prop(into)]
    path: String,
    /// Whether this item is currently active.
    #[prop(default = false)]
    active: bool,
    /// Icon to display (as SVG path data).
    icon: &'static str,
    /// Whether the item owns a drawer.
    #[prop(default = false)]
    expandable: bool,
    /// Whether the drawer is open.
    #[prop(default = false)]
    expanded: bool,
    /// Called after the router has taken the click.
    on_click: Callback<()>,
) -> impl IntoView {
    let class = if active { "nav-item active" } else { "nav-item" };

    view! {
        <A
            href=path
            attr:class=class
            attr:aria-expanded=expandable.then(|| expanded.to_string())
            on:click=move |_| on_click.run(())
        >
            <svg class="nav-item-icon" viewBox="0 0 24 24" width="20" height="20" fill="currentColor">
                <path d=icon />
            </svg>
            <span class="nav-item-label">{label}</span>
            {expandable.then(|| view! {
                <svg
                    class="nav-item-chevron"
                    class:expanded=expanded
                    viewBox="0 0 24 24"
                    width="16"
                    height="16"
                    fill="currentColor"
                >
                    <path d=icons::CHEVRON />
                </svg>
            })}
        </A>
    }
}

/// A child link inside a section drawer.
#[component]
pub fn NavLink(
    /// The rendered link.
    link: SidebarLink,
) -> impl IntoView {
    let menu = use_context::<MobileMenuContext>();
    let class = if link.selected { "nav-link selected" } else { "nav-link" };

    view! {
        <A
            href=link.path
            attr:class=class
            on:click=move |_| {
                if let Some(menu) = menu {
                    menu.close();
                }
            }
        >
            {link.label}
        </A>
    }
}

/// Toggles between Chinese and English, showing the active language.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let shell = use_shell();

    view! {
        <button
            class="language-toggle btn btn-ghost"
            title=move || shell.language().toggled().native_name()
            on:click=move |_| shell.toggle_language()
        >
            <svg viewBox="0 0 24 24" width="18" height="18" fill="currentColor">
                <path d=icons::LANGUAGE />
            </svg>
            <span>{move || shell.language().native_name()}</span>
        </button>
    }
}

/// Icon paths for navigation items.
pub mod icons {
    use genskey_core::Icon;

    /// Dashboard tiles.
    pub const DASHBOARD: &str = "M3 13h8V3H3v10zm0 8h8v-6H3v6zm10 0h8V11h-8v10zm0-18v6h8V3h-8z";
    /// Magnifying glass.
    pub const SEARCH: &str = "M15.5 14h-.79l-.28-.27C15.41 12.59 16 11.11 16 9.5 16 5.91 13.09 3 9.5 3S3 5.91 3 9.5 5.91 16 9.5 16c1.61 0 3.09-.59 4.23-1.57l.27.28v.79l5 4.99L20.49 19l-4.99-5zm-6 0C7.01 14 5 11.99 5 9.5S7.01 5 9.5 5 14 7.01 14 9.5 11.99 14 9.5 14z";
    /// Node graph.
    pub const NETWORK: &str = "M17 16l-4-4V8.82C14.16 8.4 15 7.3 15 6c0-1.66-1.34-3-3-3S9 4.34 9 6c0 1.3.84 2.4 2 2.82V12l-4 4H3v5h5v-3.05l4-4.2 4 4.2V21h5v-5h-4z";
    /// Fermentation flask.
    pub const FLASK: &str = "M19.8 18.4L14 10.67V6.5l1.35-1.69c.26-.33.03-.81-.39-.81H9.04c-.42 0-.65.48-.39.81L10 6.5v4.17L4.2 18.4c-.49.66-.02 1.6.8 1.6h14c.82 0 1.29-.94.8-1.6z";
    /// Microscope.
    pub const MICROSCOPE: &str = "M7 19c-1.1 0-2 .9-2 2h14c0-1.1-.9-2-2-2h-4v-2h3c1.1 0 2-.9 2-2h-8c-1.66 0-3-1.34-3-3 0-1.09.59-2.04 1.46-2.56C8.17 9.03 8 8.54 8 8c0-.21.04-.42.09-.62C6.28 8.13 5 9.92 5 12c0 2.76 2.24 5 5 5v2H7zm6.56-14.87c.39-.39 1.02-.39 1.41 0l2.83 2.83c.39.39.39 1.02 0 1.41l-2.12 2.12-4.24-4.24 2.12-2.12z";
    /// Database cylinder.
    pub const DATABASE: &str = "M2 20h20v-4H2v4zm2-3h2v2H4v-2zM2 4v4h20V4H2zm4 3H4V5h2v2zm-4 7h20v-4H2v4zm2-3h2v2H4v-2z";
    /// Assistant sparkle.
    pub const ASSISTANT: &str = "M19 9l1.25-2.75L23 5l-2.75-1.25L19 1l-1.25 2.75L15 5l2.75 1.25L19 9zm-7.5.5L9 4 6.5 9.5 1 12l5.5 2.5L9 20l2.5-5.5L17 12l-5.5-2.5zM19 15l-1.25 2.75L15 19l2.75 1.25L19 23l1.25-2.75L23 19l-2.75-1.25L19 15z";
    /// Briefcase.
    pub const BRIEFCASE: &str = "M20 6h-4V4c0-1.11-.89-2-2-2h-4c-1.11 0-2 .89-2 2v2H4c-1.11 0-1.99.89-1.99 2L2 19c0 1.11.89 2 2 2h16c1.11 0 2-.89 2-2V8c0-1.11-.89-2-2-2zm-6 0h-4V4h4v2z";
    /// Lab beaker.
    pub const BEAKER: &str = "M7 2v2h1v14c0 2.21 1.79 4 4 4s4-1.79 4-4V4h1V2H7zm4 14c-.55 0-1-.45-1-1s.45-1 1-1 1 .45 1 1-.45 1-1 1zm2-4c-.55 0-1-.45-1-1s.45-1 1-1 1 .45 1 1-.45 1-1 1zm1-5h-4V4h4v3z";
    /// Drawer chevron.
    pub const CHEVRON: &str = "M10 6L8.59 7.41 13.17 12l-4.58 4.59L10 18l6-6z";
    /// Globe for the language toggle.
    pub const LANGUAGE: &str = "M11.99 2C6.47 2 2 6.48 2 12s4.47 10 9.99 10C17.52 22 22 17.52 22 12S17.52 2 11.99 2zm6.93 6h-2.95c-.32-1.25-.78-2.45-1.38-3.56 1.84.63 3.37 1.91 4.33 3.56zM12 4.04c.83 1.2 1.48 2.53 1.91 3.96h-3.82c.43-1.43 1.08-2.76 1.91-3.96zM4.26 14C4.1 13.36 4 12.69 4 12s.1-1.36.26-2h3.38c-.08.66-.14 1.32-.14 2s.06 1.34.14 2H4.26zm.82 2h2.95c.32 1.25.78 2.45 1.38 3.56-1.84-.63-3.37-1.9-4.33-3.56zm2.95-8H5.08c.96-1.66 2.49-2.93 4.33-3.56C8.81 5.55 8.35 6.75 8.03 8zM12 19.96c-.83-1.2-1.48-2.53-1.91-3.96h3.82c-.43 1.43-1.08 2.76-1.91 3.96zM14.34 14H9.66c-.09-.66-.16-1.32-.16-2s.07-1.35.16-2h4.68c.09.65.16 1.32.16 2s-.07 1.34-.16 2zm.25 5.56c.6-1.11 1.06-2.31 1.38-3.56h2.95c-.96 1.65-2.49 2.93-4.33 3.56zM16.36 14c.08-.66.14-1.32.14-2s-.06-1.34-.14-2h3.38c.16.64.26 1.31.26 2s-.1 1.36-.26 2h-3.38z";

    /// SVG path for a sidebar icon.
    #[must_use]
    pub const fn for_icon(icon: Icon) -> &'static str {
        match icon {
            Icon::Dashboard => DASHBOARD,
            Icon::Search => SEARCH,
            Icon::Network => NETWORK,
            Icon::Flask => FLASK,
            Icon::Microscope => MICROSCOPE,
            Icon::Database => DATABASE,
            Icon::Assistant => ASSISTANT,
            Icon::Briefcase => BRIEFCASE,
            Icon::Beaker => BEAKER,
        }
    }
}
