//! Persisted user preferences.
//!
//! Two values survive restarts: theme and interface language, stored as
//! a small JSON file in the app config directory. A missing or corrupt
//! file silently yields defaults; only writes can fail loudly.

use std::fs;
use std::io;
use std::path::PathBuf;

use fizlab_core::enums::{Language, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to write preferences: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The persisted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

/// Preferences plus where they live on disk.
pub struct PreferenceStore {
    path: Option<PathBuf>,
    current: Preferences,
}

impl PreferenceStore {
    /// A store that never touches disk. Used before the config
    /// directory is known and in tests.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: Preferences::default(),
        }
    }

    /// Open the store at `path`, reading any previously saved values.
    pub fn open(path: PathBuf) -> Self {
        let current = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(prefs) => prefs,
                Err(err) => {
                    log::warn!("corrupt preferences file {}: {err}", path.display());
                    Preferences::default()
                }
            },
            Err(_) => Preferences::default(),
        };
        Self {
            path: Some(path),
            current,
        }
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PrefsError> {
        self.current.theme = theme;
        self.save()
    }

    pub fn set_language(&mut self, language: Language) -> Result<(), PrefsError> {
        self.current.language = language;
        self.save()
    }

    fn save(&self) -> Result<(), PrefsError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.current)?)?;
        Ok(())
    }
}
