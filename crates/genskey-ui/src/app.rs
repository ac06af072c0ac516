//! Main application component.

use genskey_core::{Page, Shell, ShellConfig, catalog};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Router;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::{Layout, LayoutMain, LayoutSidebar, Sidebar};
use crate::context::{ShellContext, use_shell};
use crate::pages::PageOutlet;
use crate::storage::LocalStoragePreferences;
use crate::theme::generate_css_variables;

/// Build the dashboard shell for the browser.
///
/// Preferences are restored from `localStorage` when enabled.
pub fn browser_shell(config: &ShellConfig) -> genskey_core::Result<Shell<Page>> {
    let shell = catalog::dashboard_shell(config)?;
    if config.persist_preferences {
        return Ok(shell.with_preferences(Box::new(LocalStoragePreferences)));
    }
    Ok(shell)
}

/// The root application component.
#[component]
pub fn App() -> impl IntoView {
    let css_vars = generate_css_variables();

    let content = match browser_shell(&ShellConfig::default()) {
        Ok(shell) => {
            provide_context(ShellContext::new(shell));
            view! {
                <Router>
                    <AppContent />
                </Router>
            }
            .into_any()
        }
        Err(e) => {
            leptos::logging::error!("Failed to build the navigation shell: {}", e);
            view! {
                <div class="startup-error">
                    <h1>"Genskey"</h1>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <style>{css_vars}</style>
        <style>{include_str!("../styles/main.css")}</style>
        {content}
    }
}

#[component]
fn AppContent() -> impl IntoView {
    let shell = use_shell();
    let location = use_location();
    let navigate = use_navigate();

    // Render the first frame at the URL's page rather than the default one
    shell.sync_path(&location.pathname.get_untracked());

    // Every location change goes through the route table; redirects and
    // normalized paths rewrite the URL in place
    Effect::new(move |_| {
        let requested = location.pathname.get();
        let resolved = shell.sync_path(&requested);
        if resolved != requested {
            navigate(
                &resolved,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Layout>
            <LayoutSidebar>
                <Sidebar />
            </LayoutSidebar>
            <LayoutMain>
                <PageOutlet />
            </LayoutMain>
        </Layout>
    }
}
