//! Localization store with a current language and a fallback language.
//!
//! Lookups walk `current -> fallback -> raw key`. The store never panics on a
//! missing key; [`LocalizationStore::lookup`] reports the miss explicitly and
//! [`LocalizationStore::translate`] degrades to the key after logging it.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Supported display languages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Simplified Chinese (default).
    #[default]
    Zh,
    /// English.
    En,
}

impl Language {
    /// Every supported language, in toggle order.
    pub const ALL: [Self; 2] = [Self::Zh, Self::En];

    /// Stable language code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
        }
    }

    /// The other supported language.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Zh => Self::En,
            Self::En => Self::Zh,
        }
    }

    /// Parse a language code, ignoring case and any region subtag.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Some(Self::Zh),
            "en" => Some(Self::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::UnsupportedLanguage(s.to_string()))
    }
}

/// Flat key to text mapping for one language.
pub type Dictionary = BTreeMap<String, String>;

/// Result of looking up a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Translation<'a> {
    /// Text found in `language`.
    Resolved {
        /// The display text.
        text: &'a str,
        /// Which dictionary provided it.
        language: Language,
    },
    /// No dictionary has the key.
    Missing(&'a str),
}

impl<'a> Translation<'a> {
    /// Text to display: the translation, or the raw key when missing.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        match *self {
            Self::Resolved { text, .. } => text,
            Self::Missing(key) => key,
        }
    }

    /// Whether the key was missing from every dictionary.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// Dictionaries per language plus the current/fallback selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationStore {
    current: Language,
    fallback: Language,
    dictionaries: HashMap<Language, Dictionary>,
}

impl LocalizationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new(current: Language, fallback: Language) -> Self {
        Self {
            current,
            fallback,
            dictionaries: HashMap::new(),
        }
    }

    /// Load dictionaries from a JSON object keyed by language code.
    ///
    /// ```json
    /// { "zh": { "nav.dashboard": "首页" }, "en": { "nav.dashboard": "Dashboard" } }
    /// ```
    pub fn from_json(current: Language, fallback: Language, json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Dictionary> = serde_json::from_str(json)?;
        let mut store = Self::new(current, fallback);
        for (code, dictionary) in raw {
            let language: Language = code.parse()?;
            store.add_dictionary(language, dictionary);
        }
        Ok(store)
    }

    /// Add (or extend) the dictionary for a language.
    pub fn add_dictionary(&mut self, language: Language, dictionary: Dictionary) {
        self.dictionaries
            .entry(language)
            .or_default()
            .extend(dictionary);
    }

    /// Builder-style variant of [`Self::add_dictionary`].
    #[must_use]
    pub fn with_dictionary(mut self, language: Language, dictionary: Dictionary) -> Self {
        self.add_dictionary(language, dictionary);
        self
    }

    /// Insert a single string.
    pub fn insert(&mut self, language: Language, key: impl Into<String>, text: impl Into<String>) {
        self.dictionaries
            .entry(language)
            .or_default()
            .insert(key.into(), text.into());
    }

    /// The active language.
    #[must_use]
    pub const fn current_language(&self) -> Language {
        self.current
    }

    /// The language consulted when the active one lacks a key.
    #[must_use]
    pub const fn fallback_language(&self) -> Language {
        self.fallback
    }

    /// Dictionary for a language, if loaded.
    #[must_use]
    pub fn dictionary(&self, language: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&language)
    }

    /// Look up a key without degrading silently.
    ///
    /// Blank entries count as absent, so they fall through to the fallback
    /// language and then to [`Translation::Missing`].
    #[must_use]
    pub fn lookup<'a>(&'a self, key: &'a str) -> Translation<'a> {
        for language in [self.current, self.fallback] {
            if let Some(text) = self
                .dictionaries
                .get(&language)
                .and_then(|dictionary| dictionary.get(key))
                .filter(|text| !text.trim().is_empty())
            {
                return Translation::Resolved {
                    text: text.as_str(),
                    language,
                };
            }
        }
        Translation::Missing(key)
    }

    /// Resolve a key to display text, falling back to the key itself.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        let translation = self.lookup(key);
        if translation.is_missing() {
            warn!(
                "Missing translation for '{}' in '{}' and fallback '{}'",
                key, self.current, self.fallback
            );
        }
        translation.text().to_string()
    }

    /// Resolve a key and substitute `{name}` placeholders in one pass.
    ///
    /// Placeholders without a matching argument are left as-is.
    #[must_use]
    pub fn translate_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.translate(key), args)
    }

    /// Whether a key exists in the given language's own dictionary.
    #[must_use]
    pub fn has_key(&self, language: Language, key: &str) -> bool {
        self.dictionaries
            .get(&language)
            .and_then(|dictionary| dictionary.get(key))
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// Switch the active language by code.
    ///
    /// The store is left unchanged when the code is not supported.
    pub fn set_language(&mut self, code: &str) -> Result<Language> {
        let language: Language = code.parse()?;
        self.set_current(language);
        Ok(language)
    }

    /// Switch the active language.
    pub fn set_current(&mut self, language: Language) {
        if self.current != language {
            debug!("Switching language from '{}' to '{}'", self.current, language);
        }
        self.current = language;
    }

    /// Switch to the other supported language, returning it.
    pub fn toggle_language(&mut self) -> Language {
        let next = self.current.toggled();
        self.set_current(next);
        next
    }

    /// Keys present in the fallback dictionary but absent from `language`.
    #[must_use]
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let Some(reference) = self.dictionaries.get(&self.fallback) else {
            return Vec::new();
        };
        reference
            .keys()
            .filter(|key| !self.has_key(language, key))
            .map(String::as_str)
            .collect()
    }
}

fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
