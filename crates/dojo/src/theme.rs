//! Light/dark presentation mode.

use crate::storage::{KeyValueStore, keys};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persists the presentation mode under its own key, independent of the session.
pub struct ThemeStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The persisted mode, light when nothing was stored.
    pub fn load(&self) -> Theme {
        self.storage
            .get::<bool>(keys::DARK_MODE)
            .map(Theme::from_dark)
            .unwrap_or_default()
    }

    /// Flips `current`, persists the result and returns it.
    pub fn toggle(&self, current: Theme) -> Theme {
        let next = current.toggled();
        if let Err(err) = self.storage.set(keys::DARK_MODE, &next.is_dark()) {
            tracing::error!(%err, "Failed to persist presentation mode");
        }
        tracing::debug!(theme = next.as_str(), "Presentation mode toggled");
        next
    }
}
