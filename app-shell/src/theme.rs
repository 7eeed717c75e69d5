use serde::{Deserialize, Serialize};

use crate::env::Environment;

/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Literal written to preference storage.
    pub fn storage_value(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// A stored value is a preference whatever it says; only `"dark"` means dark.
    pub fn from_storage_value(value: &str) -> Self {
        Theme::from_dark(value == "dark")
    }

    pub fn toggled(&self) -> Self {
        Theme::from_dark(!self.is_dark())
    }
}

/// Resolve the starting theme: stored preference, then ambient signal, then light.
pub fn init_theme(env: &impl Environment) -> bool {
    let stored = match env.read_preference(THEME_KEY) {
        Ok(value) => value
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(Theme::from_storage_value),
        Err(err) => {
            tracing::warn!(error = %err, "theme preference unreadable");
            None
        }
    };
    let is_dark = stored
        .map(|t| t.is_dark())
        .or_else(|| env.prefers_dark_scheme())
        .unwrap_or(false);
    tracing::debug!(is_dark, from_storage = stored.is_some(), "initial theme");
    is_dark
}

/// Flip the theme, persist it and apply it. Storage failures are logged and ignored;
/// the returned value is authoritative for the session either way.
pub fn toggle_theme(env: &impl Environment, current: bool) -> bool {
    let next = Theme::from_dark(current).toggled();
    if let Err(err) = env.write_preference(THEME_KEY, next.storage_value()) {
        tracing::warn!(error = %err, "theme preference not persisted");
    }
    env.apply_color_scheme(next.is_dark());
    next.is_dark()
}
