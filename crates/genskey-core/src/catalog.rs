//! Built-in pages, routes, sidebar and dictionaries of the Genskey dashboard.

use crate::config::ShellConfig;
use crate::error::Result;
use crate::i18n::{Dictionary, Language, LocalizationStore};
use crate::navigation::{Icon, NavigationEntry, NavigationLink, NavigationTree};
use crate::router::RouteTable;
use crate::shell::Shell;

const ZH_DICTIONARY: &str = include_str!("../locales/zh.json");
const EN_DICTIONARY: &str = include_str!("../locales/en.json");

/// Leaf views the route table can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Mission control landing page.
    Dashboard,
    /// Phage and BGC discovery module.
    Discovery,
    /// Strain library, claimed ahead of the discovery module.
    StrainLibrary,
    /// Consortium design module.
    Design,
    /// Fermentation digital twin module.
    Twin,
    /// Quality control, claimed ahead of the twin module.
    QualityControl,
    /// Clinical and regulatory module.
    Trial,
    /// Data science module.
    DataScience,
    /// AI copilot module.
    Copilot,
    /// Executive cockpit module.
    Executive,
    /// Financial overview, claimed ahead of the executive module.
    Finance,
    /// Lab operations module.
    Lab,
}

impl Page {
    /// Localization key of the page title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard.title",
            Self::Discovery => "discovery.title",
            Self::StrainLibrary => "discovery.library.title",
            Self::Design => "design.title",
            Self::Twin => "twin.title",
            Self::QualityControl => "twin.qc.title",
            Self::Trial => "trial.title",
            Self::DataScience => "data.title",
            Self::Copilot => "copilot.title",
            Self::Executive => "executive.title",
            Self::Finance => "executive.finance.title",
            Self::Lab => "lab.title",
        }
    }

    /// Id of the sidebar entry the page belongs to.
    #[must_use]
    pub const fn navigation_id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Discovery | Self::StrainLibrary => "discovery",
            Self::Design => "design",
            Self::Twin | Self::QualityControl => "twin",
            Self::Trial => "trial",
            Self::DataScience => "data",
            Self::Copilot => "copilot",
            Self::Executive | Self::Finance => "executive",
            Self::Lab => "lab",
        }
    }
}

/// The dashboard's route table. `/` redirects to the configured home path.
pub fn route_table(config: &ShellConfig) -> Result<RouteTable<Page>> {
    RouteTable::builder()
        .redirect("/", config.home_path.as_str())
        .page("/dashboard", Page::Dashboard)
        .page("/discovery/library", Page::StrainLibrary)
        .page("/discovery/*", Page::Discovery)
        .page("/design/*", Page::Design)
        .page("/twin/qc", Page::QualityControl)
        .page("/twin/*", Page::Twin)
        .page("/trial/*", Page::Trial)
        .page("/data/*", Page::DataScience)
        .page("/copilot/*", Page::Copilot)
        .page("/executive/finance", Page::Finance)
        .page("/executive/*", Page::Executive)
        .page("/lab/*", Page::Lab)
        .build()
}

fn section(id: &str, icon: Icon, children: &[&str]) -> NavigationEntry {
    NavigationEntry::section(
        id,
        format!("nav.{id}"),
        icon,
        format!("/{id}"),
        children
            .iter()
            .map(|child| {
                NavigationLink::new(format!("nav.{id}.{child}"), format!("/{id}/{child}"))
            })
            .collect(),
    )
}

/// The dashboard's sidebar.
pub fn navigation_tree() -> Result<NavigationTree> {
    NavigationTree::new(vec![
        NavigationEntry::link("dashboard", "nav.dashboard", Icon::Dashboard, "/dashboard"),
        section(
            "discovery",
            Icon::Search,
            &["upload", "phage", "bgc", "genome", "library"],
        ),
        section(
            "design",
            Icon::Network,
            &["network", "optimize", "simulate", "formulation"],
        ),
        section(
            "twin",
            Icon::Flask,
            &["batches", "realtime", "scenarios", "qc", "schedule"],
        ),
        section(
            "trial",
            Icon::Microscope,
            &["safety", "clinical", "audit", "recruitment", "pharmacovigilance"],
        ),
        section(
            "data",
            Icon::Database,
            &["lake", "analytics", "mlops", "knowledge"],
        ),
        section(
            "copilot",
            Icon::Assistant,
            &["chat", "dashboard", "documents", "llm"],
        ),
        section(
            "executive",
            Icon::Briefcase,
            &["portfolio", "finance", "team"],
        ),
        section(
            "lab",
            Icon::Beaker,
            &["samples", "equipment", "protocols", "supply"],
        ),
    ])
}

/// The bundled Chinese and English dictionaries.
pub fn localization_store(config: &ShellConfig) -> Result<LocalizationStore> {
    let zh: Dictionary = serde_json::from_str(ZH_DICTIONARY)?;
    let en: Dictionary = serde_json::from_str(EN_DICTIONARY)?;
    Ok(
        LocalizationStore::new(config.default_language, config.fallback_language)
            .with_dictionary(Language::Zh, zh)
            .with_dictionary(Language::En, en),
    )
}

/// A fully wired shell for the dashboard.
pub fn dashboard_shell(config: &ShellConfig) -> Result<Shell<Page>> {
    Ok(Shell::new(
        route_table(config)?,
        navigation_tree()?,
        localization_store(config)?,
        config,
    ))
}
