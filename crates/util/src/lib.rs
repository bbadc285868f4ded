//! Shared helpers for the side menu demo: preferences persistence and path resolution.

pub mod path_processing;
pub mod preferences;

pub use path_processing::*;
pub use preferences::{PreferencesError, PreferencesPayload, UserPreferences};
