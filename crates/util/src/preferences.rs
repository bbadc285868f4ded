//! User preference persistence for the side menu demo.
//!
//! This module provides a tiny JSON-backed store that records the demo's
//! lightweight configuration: preferred theme, the user name shown in the user
//! menu header and whether the menu caption carries a logo. The file is
//! written to the standard configuration directory
//! (`~/.config/sidemenu/preferences.json` on most platforms) and is safe to
//! read/write from multiple threads thanks to the internal `Mutex`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use dirs_next::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::expand_tilde;

/// Environment variable allowing callers to override the preferences file path.
pub const PREFERENCES_PATH_ENV: &str = "SIDEMENU_PREFERENCES_PATH";

/// Default filename for the JSON payload.
pub const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Error surfaced when reading or writing preferences fails.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("preferences serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted preference values.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    /// Name of the theme selected for the TUI.
    pub preferred_theme: Option<String>,
    /// Name displayed in the user menu header.
    pub user_name: Option<String>,
    /// Whether the menu caption shows its logo.
    pub show_logo: Option<bool>,
}

/// Thread-safe preferences store backed by a JSON file.
#[derive(Debug, Default)]
pub struct UserPreferences {
    path: PathBuf,
    payload: Mutex<PreferencesPayload>,
    persist_to_disk: bool,
}

impl UserPreferences {
    /// Create a store rooted at the provided path. When `path` is `None`, the
    /// environment override or the default config directory path is used.
    pub fn new(path: Option<PathBuf>) -> Result<Self, PreferencesError> {
        let resolved_path = path.unwrap_or_else(default_preferences_path);
        let payload = load_payload(&resolved_path)?;
        Ok(Self {
            path: resolved_path,
            payload: Mutex::new(payload),
            persist_to_disk: true,
        })
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(PreferencesPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").preferred_theme.clone()
    }

    pub fn user_name(&self) -> Option<String> {
        self.payload.lock().expect("preferences lock poisoned").user_name.clone()
    }

    /// Logo visibility, `true` unless a preference says otherwise.
    pub fn show_logo(&self) -> bool {
        self.payload.lock().expect("preferences lock poisoned").show_logo.unwrap_or(true)
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), PreferencesError> {
        self.update(|payload| payload.preferred_theme = theme_id)
    }

    /// Persist the logo visibility toggled from the user menu.
    pub fn set_show_logo(&self, show_logo: bool) -> Result<(), PreferencesError> {
        self.update(|payload| payload.show_logo = Some(show_logo))
    }

    fn update(&self, apply: impl FnOnce(&mut PreferencesPayload)) -> Result<(), PreferencesError> {
        let mut payload = self.payload.lock().expect("preferences lock poisoned");
        apply(&mut payload);
        if self.persist_to_disk {
            self.save_locked(&payload)?;
        }
        Ok(())
    }

    fn save_locked(&self, payload: &PreferencesPayload) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn default_preferences_path() -> PathBuf {
    if let Ok(path) = env::var(PREFERENCES_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_tilde(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sidemenu")
        .join(PREFERENCES_FILE_NAME)
}

fn load_payload(path: &Path) -> Result<PreferencesPayload, PreferencesError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(payload),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse preferences file; using defaults"
                );
                Ok(PreferencesPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(PreferencesPayload::default()),
        Err(error) => Err(PreferencesError::Io(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let preferences = UserPreferences::new(Some(dir.path().join("preferences.json"))).unwrap();
        assert_eq!(preferences.preferred_theme(), None);
        assert_eq!(preferences.user_name(), None);
        assert!(preferences.show_logo());
    }

    #[test]
    fn values_persist_across_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");
        let preferences = UserPreferences::new(Some(path.clone())).unwrap();
        preferences.set_preferred_theme(Some("nord".into())).unwrap();
        preferences.set_show_logo(false).unwrap();

        let reloaded = UserPreferences::new(Some(path)).unwrap();
        assert_eq!(reloaded.preferred_theme().as_deref(), Some("nord"));
        assert!(!reloaded.show_logo());
        assert_eq!(reloaded.user_name(), None);
    }

    #[test]
    fn partial_payload_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, r#"{"user_name": "Guest"}"#).unwrap();

        let preferences = UserPreferences::new(Some(path)).unwrap();
        assert_eq!(preferences.user_name().as_deref(), Some("Guest"));
        assert_eq!(preferences.preferred_theme(), None);
    }

    #[test]
    fn invalid_json_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let preferences = UserPreferences::new(Some(path)).unwrap();
        assert_eq!(preferences.user_name(), None);
        assert!(preferences.show_logo());
    }

    #[test]
    fn ephemeral_store_never_touches_disk() {
        let preferences = UserPreferences::ephemeral();
        preferences.set_show_logo(false).unwrap();
        assert!(!preferences.show_logo());
        assert_eq!(preferences.path(), Path::new(""));
    }

    #[test]
    fn default_path_honors_env_override() {
        temp_env::with_var(PREFERENCES_PATH_ENV, Some("/tmp/sidemenu-test/preferences.json"), || {
            assert_eq!(default_preferences_path(), PathBuf::from("/tmp/sidemenu-test/preferences.json"));
        });
    }
}
