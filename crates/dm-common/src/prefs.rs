//! Persisted display preferences.
//!
//! The site exposes a dark-mode default and a default display language.
//! Both live in one store, loaded once at startup and written back on
//! every change, and handed to consumers through app state instead of
//! being re-read ad hoc.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::Language;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to read preferences file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse preferences file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    #[serde(default)]
    pub dark_mode: bool,
    #[serde(default)]
    pub default_language: Language,
}

/// Single owner of the preference state. Load once, inject, mutate
/// through the setters so the in-memory copy and the file never drift.
pub struct PreferenceStore {
    path: PathBuf,
    current: Mutex<UiPreferences>,
}

impl PreferenceStore {
    /// Load from `path`, falling back to defaults when the file does not
    /// exist yet. A corrupt file is an error; a missing one is not.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let current = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => UiPreferences::default(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            current: Mutex::new(current),
        })
    }

    pub fn get(&self) -> UiPreferences {
        *self.current.lock().expect("preference lock poisoned")
    }

    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.update(|prefs| prefs.dark_mode = dark_mode);
    }

    pub fn toggle_dark_mode(&self) -> bool {
        let mut toggled = false;
        self.update(|prefs| {
            prefs.dark_mode = !prefs.dark_mode;
            toggled = prefs.dark_mode;
        });
        toggled
    }

    pub fn set_default_language(&self, lang: Language) {
        self.update(|prefs| prefs.default_language = lang);
    }

    pub fn replace(&self, prefs: UiPreferences) {
        self.update(|current| *current = prefs);
    }

    fn update(&self, apply: impl FnOnce(&mut UiPreferences)) {
        let snapshot = {
            let mut current = self.current.lock().expect("preference lock poisoned");
            apply(&mut current);
            *current
        };
        self.persist(snapshot);
    }

    // Persistence is best-effort: losing a preference write must never
    // take the process down.
    fn persist(&self, prefs: UiPreferences) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!(error = %err, path = %self.path.display(), "failed to create preferences dir");
                return;
            }
        }

        match serde_json::to_string_pretty(&prefs) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.path, json) {
                    warn!(error = %err, path = %self.path.display(), "failed to persist preferences");
                }
            }
            Err(err) => warn!(error = %err, "failed to serialize preferences"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
