//! Theme styling module for the TUI UI layer.
//!
//! This module defines the Dracula and Nord palettes, semantic theme roles,
//! and helper builders for Ratatui widgets and styles. Prefer these helpers
//! over hard-coding colors to keep the UI consistent.

use std::env;

use tracing::{debug, warn};

pub mod dracula;
pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use dracula::DraculaTheme;
pub use nord::NordTheme;
pub use roles::Theme;

/// Environment variable that wins over any configured theme name.
pub const THEME_ENV: &str = "SIDEMENU_THEME";

/// Names accepted by [`load`].
pub const THEME_NAMES: &[&str] = &["dracula", "nord"];

/// Resolves a theme by name, case-insensitively.
pub fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "dracula" => Some(Box::new(DraculaTheme::new())),
        "nord" => Some(Box::new(NordTheme::new())),
        _ => None,
    }
}

/// Selects a theme from the environment override, then the preferred name, then Dracula.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    if let Ok(theme_name) = env::var(THEME_ENV)
        && let Some(theme) = resolve(&theme_name)
    {
        debug!(theme = %theme_name, "theme selected from environment");
        return theme;
    }
    if let Some(name) = preferred_theme {
        match resolve(name) {
            Some(theme) => return theme,
            None => warn!(theme = %name, "unknown theme; falling back to dracula"),
        }
    }
    Box::new(DraculaTheme::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names_case_insensitively() {
        assert!(resolve("Nord").is_some());
        assert!(resolve(" dracula ").is_some());
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn unknown_preference_falls_back_to_dracula() {
        temp_env::with_var(THEME_ENV, None::<&str>, || {
            let theme = load(Some("solarized"));
            assert_eq!(theme.roles().accent_primary, dracula::PINK);
        });
    }

    #[test]
    fn environment_override_wins() {
        temp_env::with_var(THEME_ENV, Some("nord"), || {
            let theme = load(Some("dracula"));
            assert_eq!(theme.roles().accent_primary, nord::F1);
        });
    }
}
