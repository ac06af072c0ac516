//! Shell configuration management.
//!
//! Handles loading and saving the settings that seed the shell on startup:
//! languages, the initially expanded sidebar sections and the home route.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::i18n::Language;

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShellConfig {
    /// Language used on first paint.
    #[serde(default)]
    pub default_language: Language,
    /// Language consulted when the active one lacks a key.
    #[serde(default = "default_fallback_language")]
    pub fallback_language: Language,
    /// Sections expanded when no saved preferences exist.
    #[serde(default = "default_initially_expanded")]
    pub initially_expanded: Vec<String>,
    /// Where `/` redirects to.
    #[serde(default = "default_home_path")]
    pub home_path: String,
    /// Whether language and sidebar choices survive a reload.
    #[serde(default = "default_true")]
    pub persist_preferences: bool,
}

const fn default_fallback_language() -> Language {
    Language::En
}

fn default_initially_expanded() -> Vec<String> {
    vec!["discovery".to_string(), "design".to_string()]
}

fn default_home_path() -> String {
    "/dashboard".to_string()
}

const fn default_true() -> bool {
    true
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            fallback_language: default_fallback_language(),
            initially_expanded: default_initially_expanded(),
            home_path: default_home_path(),
            persist_preferences: true,
        }
    }
}

impl ShellConfig {
    /// Load configuration from the default location, or use defaults if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or use defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_json::from_str(&content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config file: {e}")))?;
        config.validate()?;

        info!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;

        info!("Saved shell config to {}", path.display());
        Ok(())
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.home_path.starts_with('/') || self.home_path.trim() == "/" {
            return Err(Error::Configuration(format!(
                "Home path must be an absolute path other than '/': {}",
                self.home_path
            )));
        }
        if self.default_language == self.fallback_language {
            warn!(
                "Default and fallback language are both '{}'; missing keys will show raw",
                self.default_language
            );
        }
        Ok(())
    }

    /// Get the path to the config file.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        config_file_path()
    }
}

/// Directory holding Genskey configuration and preferences.
#[must_use]
pub fn config_directory() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("genskey")
}

fn config_file_path() -> PathBuf {
    config_directory().join("shell.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.default_language, Language::Zh);
        assert_eq!(config.fallback_language, Language::En);
        assert_eq!(config.initially_expanded, vec!["discovery", "design"]);
        assert_eq!(config.home_path, "/dashboard");
        assert!(config.persist_preferences);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ShellConfig =
            serde_json::from_str(r#"{"default_language": "en"}"#).expect("Should deserialize");
        assert_eq!(config.default_language, Language::En);
        assert_eq!(config.initially_expanded, vec!["discovery", "design"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("nested").join("shell.json");

        let config = ShellConfig {
            default_language: Language::En,
            initially_expanded: vec!["twin".to_string()],
            ..Default::default()
        };
        config.save_to(&path).expect("Should save");

        let loaded = ShellConfig::load_from(&path).expect("Should load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let loaded =
            ShellConfig::load_from(&temp_dir.path().join("absent.json")).expect("Should load");
        assert_eq!(loaded, ShellConfig::default());
    }

    #[test]
    fn test_invalid_file_is_error() {
        let temp_dir = TempDir::new().expect("Should create temp dir");
        let path = temp_dir.path().join("shell.json");
        fs::write(&path, "{ not json").expect("Should write");
        assert!(matches!(
            ShellConfig::load_from(&path),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn test_root_home_path_is_rejected() {
        let config = ShellConfig {
            home_path: "/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
