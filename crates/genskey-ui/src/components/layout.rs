//! Layout component for the application structure.
//!
//! Provides a responsive layout with a header, the navigation sidebar and the
//! routed content area. On narrow screens the sidebar becomes an overlay.

use leptos::prelude::*;

use crate::context::use_shell;

/// Provides access to the mobile menu state for child components.
#[derive(Clone, Copy)]
pub struct MobileMenuContext {
    /// Whether the mobile menu is currently open.
    pub is_open: ReadSignal<bool>,
    /// Set the mobile menu open state.
    pub set_open: WriteSignal<bool>,
}

impl MobileMenuContext {
    /// Toggle the mobile menu.
    pub fn toggle(&self) {
        self.set_open.update(|open| *open = !*open);
    }

    /// Close the mobile menu.
    pub fn close(&self) {
        self.set_open.set(false);
    }
}

/// The main layout component that provides the application structure.
///
/// Use `LayoutSidebar` and `LayoutMain` as children to populate the layout.
#[component]
pub fn Layout(
    /// Content for the layout (should use LayoutSidebar and LayoutMain).
    children: Children,
) -> impl IntoView {
    let shell = use_shell();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let menu = MobileMenuContext {
        is_open: mobile_menu_open,
        set_open: set_mobile_menu_open,
    };
    provide_context(menu);

    view! {
        <div class="layout">
            <header class="layout-header">
                <button
                    class="layout-menu-toggle btn btn-ghost btn-icon"
                    on:click=move |_| menu.toggle()
                    aria-label=move || shell.translate("shell.menu_toggle")
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    <svg viewBox="0 0 24 24" width="24" height="24" fill="currentColor">
                        {move || if mobile_menu_open.get() {
                            view! {
                                <path d="M19 6.41L17.59 5 12 10.59 6.41 5 5 6.41 10.59 12 5 17.59 6.41 19 12 13.41 17.59 19 19 17.59 13.41 12z"/>
                            }.into_any()
                        } else {
                            view! {
                                <path d="M3 18h18v-2H3v2zm0-5h18v-2H3v2zm0-7v2h18V6H3z"/>
                            }.into_any()
                        }}
                    </svg>
                </button>
                <div class="logo">
                    <span class="logo-text">{move || shell.translate("shell.brand")}</span>
                </div>
            </header>

            <div
                class="layout-overlay"
                class:visible=move || mobile_menu_open.get()
                on:click=move |_| menu.close()
            ></div>

            <div class="layout-container">
                {children()}
            </div>
        </div>
    }
}

/// Sidebar component for use within Layout.
#[component]
pub fn LayoutSidebar(
    /// Content to render in the sidebar.
    children: Children,
) -> impl IntoView {
    let menu_ctx = expect_context::<MobileMenuContext>();

    view! {
        <aside
            class="layout-sidebar"
            class:open=move || menu_ctx.is_open.get()
        >
            {children()}
        </aside>
    }
}

/// Main content area component for use within Layout.
#[component]
pub fn LayoutMain(
    /// Content to render in the main area.
    children: Children,
) -> impl IntoView {
    view! {
        <main class="layout-content">
            {children()}
        </main>
    }
}

/// A section within the content area.
#[component]
pub fn ContentSection(
    /// The content of the section.
    children: Children,
) -> impl IntoView {
    view! {
        <section class="content-section">
            <div class="content-section-body">
                {children()}
            </div>
        </section>
    }
}

/// A responsive grid for displaying cards.
#[component]
pub fn ResponsiveGrid(
    /// Minimum width of each item in the grid.
    #[prop(default = "240px".to_string(), into)]
    min_item_width: String,
    /// The grid items.
    children: Children,
) -> impl IntoView {
    let style = format!("--grid-min-width: {min_item_width}");

    view! {
        <div class="responsive-grid" style=style>
            {children()}
        </div>
    }
}
