//! Interface preferences
//!
//! The handful of preference flags that survive a reload: sidebar state,
//! dark mode, and interface language. Each is persisted under its own key
//! in the exact string encoding the interface has always used ("true" /
//! "false", language codes). Loading tolerates anything: missing or
//! unrecognized stored values fall back to defaults, and a failed write
//! keeps the in-memory value.

use crate::config::{
    DARK_MODE_STORAGE_KEY, DEFAULT_LANGUAGE, LANGUAGE_STORAGE_KEY, SIDEBAR_STORAGE_KEY,
    VALID_LANGUAGES,
};
use crate::error::{AppError, Result};
use crate::storage::LocalStore;

/// Persisted interface preference flags
#[derive(Debug, Clone)]
pub struct Preferences {
    store: LocalStore,
    is_sidebar_open: bool,
    dark_mode: bool,
    language: String,
}

impl Preferences {
    /// Load preferences from storage, falling back to defaults for
    /// anything missing or unrecognized
    pub async fn load(store: LocalStore) -> Self {
        let is_sidebar_open = read_flag(&store, SIDEBAR_STORAGE_KEY).await;
        let dark_mode = read_flag(&store, DARK_MODE_STORAGE_KEY).await;

        let language = match store.get(LANGUAGE_STORAGE_KEY).await {
            Some(stored) if VALID_LANGUAGES.contains(&stored.as_str()) => stored,
            Some(stored) => {
                tracing::warn!("Ignoring unknown stored language: {}", stored);
                DEFAULT_LANGUAGE.to_string()
            }
            None => DEFAULT_LANGUAGE.to_string(),
        };

        Self {
            store,
            is_sidebar_open,
            dark_mode,
            language,
        }
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.is_sidebar_open
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub async fn set_sidebar_open(&mut self, open: bool) {
        self.is_sidebar_open = open;
        self.write_flag(SIDEBAR_STORAGE_KEY, open).await;
    }

    pub async fn toggle_sidebar(&mut self) -> bool {
        self.set_sidebar_open(!self.is_sidebar_open).await;
        self.is_sidebar_open
    }

    pub async fn set_dark_mode(&mut self, on: bool) {
        self.dark_mode = on;
        self.write_flag(DARK_MODE_STORAGE_KEY, on).await;
    }

    pub async fn toggle_dark_mode(&mut self) -> bool {
        self.set_dark_mode(!self.dark_mode).await;
        self.dark_mode
    }

    /// Select the interface language; only the offered codes are accepted
    pub async fn set_language(&mut self, language: &str) -> Result<()> {
        if !VALID_LANGUAGES.contains(&language) {
            return Err(AppError::Generic(format!(
                "Unsupported language: {}",
                language
            )));
        }

        self.language = language.to_string();
        if let Err(e) = self.store.set(LANGUAGE_STORAGE_KEY, language).await {
            tracing::warn!("Failed to persist language: {}", e);
        }
        Ok(())
    }

    /// Best-effort write of a string-encoded boolean flag
    async fn write_flag(&self, key: &str, value: bool) {
        let encoded = if value { "true" } else { "false" };
        if let Err(e) = self.store.set(key, encoded).await {
            tracing::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

/// A flag is on only when the stored string is exactly "true"
async fn read_flag(store: &LocalStore, key: &str) -> bool {
    matches!(store.get(key).await.as_deref(), Some("true"))
}
