use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ThemeConfig;

/// The currently applied visual theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Token written to the preference store
    pub fn as_token(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ThemeError::UnknownToken(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error("unrecognized theme token {0:?}")]
    UnknownToken(String),
    #[error("preference store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("failed to persist theme preference: {0}")]
    WriteFailed(String),
}

/// Persistent key-value store that survives restarts
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// The document the theme is rendered into
pub trait ThemeEnvironment {
    /// System-level dark mode signal
    fn prefers_dark(&self) -> bool;
    /// Set the document-level visual flag
    fn apply(&mut self, mode: ThemeMode);
}

/// Owns the theme preference and keeps the store and document flag in step with it.
pub struct ThemeController<S, E> {
    store: S,
    environment: E,
    storage_key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore, E: ThemeEnvironment> ThemeController<S, E> {
    pub fn new(store: S, environment: E) -> Self {
        Self::with_config(store, environment, &ThemeConfig::default())
    }

    pub fn with_config(store: S, environment: E, config: &ThemeConfig) -> Self {
        Self {
            store,
            environment,
            storage_key: config.storage_key.clone(),
            mode: ThemeMode::default(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Resolve the starting theme from the store, falling back to the system
    /// preference, and apply it right away.
    pub fn resolve_initial(&mut self) -> ThemeMode {
        let mode = match self.saved_mode() {
            Some(mode) => mode,
            None => ThemeMode::from_dark(self.environment.prefers_dark()),
        };
        debug!(mode = %mode, "resolved initial theme");
        self.mode = mode;
        self.settle();
        mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        debug!(mode = %self.mode, "theme toggled");
        self.settle();
        self.mode
    }

    /// Read errors and unknown tokens both count as "no saved preference".
    fn saved_mode(&self) -> Option<ThemeMode> {
        match self.store.load(&self.storage_key) {
            Ok(Some(token)) => match token.parse() {
                Ok(mode) => Some(mode),
                Err(e) => {
                    warn!(error = %e, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "theme preference unreadable");
                None
            }
        }
    }

    fn settle(&mut self) {
        self.environment.apply(self.mode);
        if let Err(e) = self.store.save(&self.storage_key, self.mode.as_token()) {
            warn!(error = %e, "theme preference not persisted");
        }
    }
}
