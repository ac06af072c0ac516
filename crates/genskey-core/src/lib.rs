//! Genskey Core Library
//!
//! This crate provides the navigation shell of the Genskey dashboard:
//! - Route table with first-match-wins dispatch and redirects
//! - Navigation tree with section/link activation and sidebar expansion
//! - Localization store with current and fallback languages
//! - A shell object that owns all of the above plus the current path
//! - Configuration, preference persistence and logging
//!
//! # Error Handling
//!
//! Misses that a user can trigger (unknown paths, untranslated keys) are
//! reported as values ([`RouteMatch::NotFound`], [`Translation::Missing`]).
//! Build-time problems such as shadowed routes surface as [`Error`].
//!
//! ```rust,ignore
//! use genskey_core::{ShellConfig, catalog};
//!
//! let mut shell = catalog::dashboard_shell(&ShellConfig::default())?;
//! shell.navigate("/discovery/bgc");
//! let sidebar = shell.sidebar();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod navigation;
pub mod preferences;
pub mod router;
pub mod shell;

pub use catalog::Page;
pub use config::{ShellConfig, config_directory};
pub use error::{Error, Result};
pub use i18n::{Dictionary, Language, LocalizationStore, Translation};
pub use navigation::{
    ExpansionState, Icon, NavigationEntry, NavigationLeaf, NavigationLink, NavigationSection,
    NavigationTree, SidebarItem, SidebarLink, is_active, is_selected,
};
pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences,
};
pub use router::{
    MAX_REDIRECTS, RouteEntry, RouteMatch, RoutePattern, RouteTable, RouteTableBuilder,
    RouteTarget, normalize_path,
};
pub use shell::Shell;
