//! UI components for the Genskey dashboard shell.

pub mod layout;
pub mod navigation;

pub use layout::{
    ContentSection, Layout, LayoutMain, LayoutSidebar, MobileMenuContext, ResponsiveGrid,
};
pub use navigation::{LanguageToggle, NavItem, NavLink, NavSection, Sidebar};
