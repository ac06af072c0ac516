//! Integration tests for the Genskey navigation shell.
//!
//! These tests drive the built-in dashboard catalog end to end:
//! - Route precedence and the root redirect
//! - Section activation versus link selection
//! - Language switching and fallback
//! - Dictionary completeness for every sidebar label
//! - Preference persistence across shell instances

use genskey_core::{
    ExpansionState, FilePreferenceStore, Icon, Language, LocalizationStore, NavigationEntry,
    NavigationLink, NavigationTree, Page, PreferenceStore, RouteMatch, RouteTable, Shell,
    ShellConfig, Translation, catalog,
};
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

fn dashboard() -> Shell<Page> {
    catalog::dashboard_shell(&ShellConfig::default()).expect("built-in catalog is valid")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

// =============================================================================
// Routing
// =============================================================================

#[test]
fn literal_route_wins_over_module_wildcard() {
    let routes = RouteTable::builder()
        .page("/discovery/library", "library")
        .page("/discovery/*", "discovery")
        .build()
        .expect("valid routes");

    assert_eq!(routes.resolve("/discovery/library").page(), Some(&"library"));
    assert_eq!(routes.resolve("/discovery/phage").page(), Some(&"discovery"));
}

#[test]
fn root_resolves_like_dashboard() {
    let shell = dashboard();
    let routes = shell.routes();
    assert_eq!(
        routes.resolve("/").page(),
        routes.resolve("/dashboard").page()
    );
    assert_eq!(routes.resolve("/").page(), Some(&Page::Dashboard));
}

#[test]
fn configured_home_path_drives_root_redirect() {
    let config = ShellConfig {
        home_path: "/twin/qc".to_string(),
        ..Default::default()
    };
    let shell = catalog::dashboard_shell(&config).expect("valid catalog");
    assert_eq!(shell.current_path(), "/twin/qc");
    assert_eq!(shell.current_route().page(), Some(&Page::QualityControl));
}

#[test]
fn unmatched_route_is_reported() {
    init_tracing();
    let mut shell = dashboard();
    let resolved = shell.navigate("/nonexistent/page");
    assert_eq!(
        resolved,
        RouteMatch::NotFound {
            path: "/nonexistent/page".to_string()
        }
    );
}

#[test]
fn module_pages_receive_their_sub_path() {
    let mut shell = dashboard();
    match shell.navigate("/twin/batches/") {
        RouteMatch::Found {
            page, remainder, ..
        } => {
            assert_eq!(page, Page::Twin);
            assert_eq!(remainder, "batches");
        }
        RouteMatch::NotFound { path } => panic!("expected a match for {path}"),
    }
}

// =============================================================================
// Navigation
// =============================================================================

#[test]
fn expansion_toggle_is_its_own_inverse() {
    let mut shell = dashboard();
    let before = shell.expansion().clone();
    shell.toggle_expanded("twin");
    shell.toggle_expanded("twin");
    assert_eq!(shell.expansion(), &before);
}

#[test]
fn section_activation_is_looser_than_link_selection() {
    let tree = NavigationTree::new(vec![NavigationEntry::section(
        "discovery",
        "nav.discovery",
        Icon::Search,
        "/discovery",
        vec![NavigationLink::new(
            "nav.discovery.library",
            "/discovery/library",
        )],
    )])
    .expect("valid tree");
    let store = LocalizationStore::new(Language::En, Language::En);
    let expanded = ExpansionState::seeded(["discovery"]);

    let on_bgc = tree.sidebar("/discovery/bgc", &expanded, &store);
    assert!(on_bgc[0].active);
    assert!(on_bgc[0].children.iter().all(|link| !link.selected));

    let on_library = tree.sidebar("/discovery/library", &expanded, &store);
    assert!(on_library[0].active);
    assert!(on_library[0].children[0].selected);
}

#[test]
fn exactly_one_entry_is_active() {
    let mut shell = dashboard();
    for path in ["/dashboard", "/discovery/bgc", "/twin/qc", "/executive/finance"] {
        shell.navigate(path);
        let active: Vec<_> = shell
            .sidebar()
            .into_iter()
            .filter(|item| item.active)
            .collect();
        assert_eq!(active.len(), 1, "path {path}");
    }
}

// =============================================================================
// Localization
// =============================================================================

#[test]
fn translation_falls_back_then_degrades_to_key() {
    let mut store = LocalizationStore::new(Language::Zh, Language::En);
    store.insert(Language::En, "nav.dashboard", "Dashboard");

    assert_eq!(store.translate("nav.dashboard"), "Dashboard");
    assert_eq!(store.translate("nav.absent"), "nav.absent");
    assert_eq!(store.lookup("nav.absent"), Translation::Missing("nav.absent"));
}

#[test]
fn language_switch_affects_all_subsequent_lookups() {
    let mut shell = dashboard();
    shell.set_language("en").expect("supported language");

    for key in ["nav.dashboard", "nav.discovery", "common.search", "twin.title"] {
        assert_eq!(
            shell.lookup(key),
            Translation::Resolved {
                text: shell
                    .localization()
                    .dictionary(Language::En)
                    .and_then(|d| d.get(key))
                    .map(String::as_str)
                    .expect("english key"),
                language: Language::En,
            }
        );
    }
    assert!(shell.sidebar().iter().all(|item| item.label.is_ascii()));
}

#[test]
fn every_sidebar_label_exists_in_both_dictionaries() {
    let shell = dashboard();
    let localization = shell.localization();
    for key in shell.navigation().label_keys() {
        for language in Language::ALL {
            assert!(
                localization.has_key(language, key),
                "{key} missing in {language}"
            );
        }
    }
}

#[test]
fn dictionaries_expose_the_same_keys() {
    let shell = dashboard();
    assert!(shell.localization().missing_keys(Language::Zh).is_empty());
    assert!(shell.localization().missing_keys(Language::En).is_empty());
}

// =============================================================================
// End-to-end
// =============================================================================

#[test]
fn chinese_session_on_bgc_page() {
    let mut shell = dashboard();
    assert_eq!(shell.language(), Language::Zh);
    assert_eq!(
        shell.expansion().ids().collect::<Vec<_>>(),
        vec!["design", "discovery"]
    );

    let resolved = shell.navigate("/discovery/bgc");
    assert_eq!(resolved.page(), Some(&Page::Discovery));

    let sidebar = shell.sidebar();
    let discovery = sidebar
        .iter()
        .find(|item| item.id == "discovery")
        .expect("discovery section");
    assert!(discovery.active);
    assert!(discovery.expanded);
    assert_eq!(discovery.label, "发现引擎");

    let bgc = discovery
        .children
        .iter()
        .find(|link| link.path == "/discovery/bgc")
        .expect("bgc link");
    assert!(bgc.selected);
    assert_eq!(bgc.label, "BGC挖掘");
    assert_eq!(
        discovery.children.iter().filter(|link| link.selected).count(),
        1
    );

    let design = sidebar
        .iter()
        .find(|item| item.id == "design")
        .expect("design section");
    assert!(design.expanded);
    assert!(!design.active);

    let expanded: Vec<_> = sidebar
        .iter()
        .filter(|item| item.expanded)
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(expanded, vec!["discovery", "design"]);

    assert_eq!(sidebar[0].label, "首页");

    let zh = shell
        .localization()
        .dictionary(Language::Zh)
        .expect("chinese dictionary");
    for item in &sidebar {
        let entry = shell.navigation().get(&item.id).expect("known entry");
        assert_eq!(Some(&item.label), zh.get(entry.label_key()), "{}", item.id);
        for (link, source) in item.children.iter().zip(entry.children()) {
            assert_eq!(link.path, source.path);
            assert_eq!(Some(&link.label), zh.get(&source.label_key), "{}", link.path);
        }
    }
    let visible_links: usize = sidebar.iter().map(|item| item.children.len()).sum();
    assert_eq!(visible_links, 9);
}

#[test]
fn section_header_click_navigates_and_toggles() {
    let mut shell = dashboard();
    let resolved = shell.activate("twin").expect("known section");
    assert_eq!(resolved.page(), Some(&Page::Twin));
    assert_eq!(shell.current_path(), "/twin");
    assert!(shell.is_expanded("twin"));
}

#[test]
fn preferences_survive_a_new_shell() {
    let temp_dir = TempDir::new().expect("Should create temp dir");
    let path = temp_dir.path().join("preferences.json");

    {
        let mut shell =
            dashboard().with_preferences(Box::new(FilePreferenceStore::new(&path)));
        shell.set_language("en").expect("supported language");
        shell.toggle_expanded("discovery");
        shell.toggle_expanded("lab");
    }

    let saved = FilePreferenceStore::new(&path)
        .load()
        .expect("Should load")
        .expect("Should have saved preferences");
    assert_eq!(saved.language, Language::En);

    let shell = dashboard().with_preferences(Box::new(FilePreferenceStore::new(&path)));
    assert_eq!(shell.language(), Language::En);
    assert!(!shell.is_expanded("discovery"));
    assert!(shell.is_expanded("design"));
    assert!(shell.is_expanded("lab"));
}
