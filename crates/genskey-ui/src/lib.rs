//! Genskey UI - Leptos-based user interface.
//!
//! This crate renders the dashboard shell in the browser: the collapsible
//! sidebar, the language toggle and the routed content area. All state lives
//! in a [`genskey_core::Shell`] held by [`context::ShellContext`].

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]
// Pass by value suggestions for small types like bool - not always clearer
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod app;
pub mod components;
pub mod context;
pub mod pages;
pub mod storage;
pub mod theme;

pub use app::App;
pub use context::{ShellContext, use_shell};
pub use storage::LocalStoragePreferences;
