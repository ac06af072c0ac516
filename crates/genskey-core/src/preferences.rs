//! Persistence of user choices between sessions.
//!
//! Only the display language and the expanded sidebar sections are kept.
//! Stores are pluggable so the browser frontend can use `localStorage`
//! while native tooling and tests use a file or memory.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::config_directory;
use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::navigation::ExpansionState;

/// Saved user choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Last selected language.
    pub language: Language,
    /// Sections left expanded.
    #[serde(default)]
    pub expanded: ExpansionState,
}

/// Where preferences are read from and written to.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Load saved preferences; `Ok(None)` when nothing was saved yet.
    fn load(&self) -> Result<Option<Preferences>>;

    /// Persist preferences, replacing any previous value.
    fn save(&self, preferences: &Preferences) -> Result<()>;
}

/// JSON file store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the platform config directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(config_directory().join("preferences.json"))
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<Preferences>> {
        if !self.path.exists() {
            debug!("No saved preferences at {}", self.path.display());
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let preferences = serde_json::from_str(&content)?;
        info!("Loaded preferences from {}", self.path.display());
        Ok(Some(preferences))
    }

    fn save(&self, preferences: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(preferences)?)?;
        debug!("Saved preferences to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store; lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    saved: Mutex<Option<Preferences>>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds `preferences`.
    #[must_use]
    pub fn with(preferences: Preferences) -> Self {
        Self {
            saved: Mutex::new(Some(preferences)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<Preferences>> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .map_err(|e| Error::Preferences(format!("Preference lock poisoned: {e}")))
    }

    fn save(&self, preferences: &Preferences) -> Result<()> {
        let mut saved = self
            .saved
            .lock()
            .map_err(|e| Error::Preferences(format!("Preference lock poisoned: {e}")))?;
        *saved = Some(preferences.clone());
        Ok(())
    }
}
