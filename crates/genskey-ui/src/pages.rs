//! Leaf pages rendered in the content area.
//!
//! Module pages are placeholders: they show their title, a tab per child
//! link of their sidebar section, and the sub-path they were routed with.

use genskey_core::{Page, RouteMatch};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navigation::icons;
use crate::components::{ContentSection, ResponsiveGrid};
use crate::context::use_shell;

/// Renders whatever the current path resolves to.
///
/// The page is rebuilt only when the route changes; language and drawer
/// updates reach it through its own reactive text.
#[component]
pub fn PageOutlet() -> impl IntoView {
    let shell = use_shell();
    let route = Memo::new(move |_| shell.route());

    view! {
        <div class="page">
            {move || match route.get() {
                RouteMatch::Found { page: Page::Dashboard, .. } => {
                    view! { <DashboardPage /> }.into_any()
                }
                RouteMatch::Found { page, remainder, .. } => {
                    view! { <ModulePage page=page remainder=remainder /> }.into_any()
                }
                RouteMatch::NotFound { path } => view! { <NotFoundPage path=path /> }.into_any(),
            }}
        </div>
    }
}

/// Landing page with headline figures and a card per module.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let shell = use_shell();
    let stats = ["dashboard.projects", "dashboard.strains", "dashboard.trials"];

    view! {
        <div class="page-header">
            <h1>{move || shell.translate("dashboard.title")}</h1>
            <p class="page-subtitle">{move || shell.translate("dashboard.welcome")}</p>
        </div>
        <ResponsiveGrid>
            {stats
                .into_iter()
                .map(|key| view! {
                    <div class="stat-card">
                        <div class="stat-card-label">{move || shell.translate(key)}</div>
                        <div class="stat-card-value">"—"</div>
                    </div>
                })
                .collect_view()}
        </ResponsiveGrid>
        <ContentSection>
            <ResponsiveGrid min_item_width="200px">
                {move || {
                    shell
                        .sidebar()
                        .into_iter()
                        .filter(|item| item.expandable)
                        .map(|item| view! {
                            <A href=item.path attr:class="module-card">
                                <svg class="module-card-icon" viewBox="0 0 24 24" width="28" height="28" fill="currentColor">
                                    <path d=icons::for_icon(item.icon) />
                                </svg>
                                <span class="module-card-label">{item.label}</span>
                            </A>
                        })
                        .collect_view()
                }}
            </ResponsiveGrid>
        </ContentSection>
    }
}

/// Placeholder for a module page.
#[component]
pub fn ModulePage(
    /// The routed page.
    page: Page,
    /// Path below the page's route, handled by the module itself.
    remainder: String,
) -> impl IntoView {
    let shell = use_shell();

    view! {
        <div class="page-header">
            <h1>{move || shell.translate(page.title_key())}</h1>
            {(!remainder.is_empty()).then(|| view! {
                <p class="page-subpath">{format!("/{remainder}")}</p>
            })}
        </div>
        <nav class="module-tabs">
            {move || {
                shell
                    .module_tabs(page)
                    .into_iter()
                    .map(|tab| {
                        let class = if tab.selected {
                            "module-tab selected"
                        } else {
                            "module-tab"
                        };
                        view! { <A href=tab.path attr:class=class>{tab.label}</A> }
                    })
                    .collect_view()
            }}
        </nav>
        <ContentSection>
            <p class="placeholder">{move || shell.translate("shell.placeholder")}</p>
        </ContentSection>
    }
}

/// Shown when no route matches.
#[component]
pub fn NotFoundPage(
    /// The unmatched path.
    path: String,
) -> impl IntoView {
    let shell = use_shell();

    view! {
        <div class="not-found">
            <h1>{move || shell.translate("shell.not_found.title")}</h1>
            <p>
                {move || shell.translate_with("shell.not_found.body", &[("path", path.as_str())])}
            </p>
            <A href="/" attr:class="btn btn-primary">
                {move || shell.translate("shell.not_found.home")}
            </A>
        </div>
    }
}
