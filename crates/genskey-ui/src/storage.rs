//! Preferences persisted in the browser's `localStorage`.

use genskey_core::{Error, PreferenceStore, Preferences, Result};
use wasm_bindgen::{JsCast, JsValue};

/// `localStorage` key holding the serialized [`Preferences`].
pub const PREFERENCES_KEY: &str = "genskey.preferences";

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// Loading outside a browser, or with storage disabled, yields no
/// preferences rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn load(&self) -> Result<Option<Preferences>> {
        let Some(storage) = local_storage()? else {
            return Ok(None);
        };
        let raw = storage
            .get_item(PREFERENCES_KEY)
            .map_err(|e| Error::Preferences(js_error_message(&e)))?;
        raw.map(|json| serde_json::from_str(&json).map_err(Error::from))
            .transpose()
    }

    fn save(&self, preferences: &Preferences) -> Result<()> {
        let storage = local_storage()?
            .ok_or_else(|| Error::Preferences("localStorage is unavailable".to_string()))?;
        let json = serde_json::to_string(preferences)?;
        storage
            .set_item(PREFERENCES_KEY, &json)
            .map_err(|e| Error::Preferences(js_error_message(&e)))
    }
}

fn local_storage() -> Result<Option<web_sys::Storage>> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    window
        .local_storage()
        .map_err(|e| Error::Preferences(js_error_message(&e)))
}

/// Best-effort message for a thrown JavaScript value.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|error| String::from(error.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
