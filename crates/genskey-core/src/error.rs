//! Error types for Genskey shell operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or driving the navigation shell.
#[derive(Debug, Error)]
pub enum Error {
    /// Language code is not one of the supported languages.
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Route pattern could not be parsed.
    #[error("Invalid route pattern: {0}")]
    InvalidRoutePattern(String),

    /// The root path was declared more than once.
    #[error("Root path '/' may only be declared once")]
    DuplicateRootRoute,

    /// A route can never match because an earlier route claims all its paths.
    #[error("Route '{pattern}' is unreachable: shadowed by earlier route '{shadowed_by}'")]
    ShadowedRoute {
        /// The unreachable pattern.
        pattern: String,
        /// The earlier pattern that claims it.
        shadowed_by: String,
    },

    /// A redirect chain loops or is too long to follow.
    #[error("Redirect loop starting at: {0}")]
    RedirectLoop(String),

    /// Two navigation entries share the same id.
    #[error("Duplicate navigation id: {0}")]
    DuplicateNavigationId(String),

    /// Two links in one section share the same path.
    #[error("Duplicate link path '{path}' in section '{section}'")]
    DuplicateLinkPath {
        /// Section id.
        section: String,
        /// The repeated path.
        path: String,
    },

    /// A navigation path is not absolute.
    #[error("Navigation path must start with '/': {0}")]
    InvalidNavigationPath(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Preference storage error.
    #[error("Preferences error: {0}")]
    Preferences(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
