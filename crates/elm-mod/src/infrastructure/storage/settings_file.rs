//! The `Key=Value` light settings file.
//!
//! [`SettingsFile`] is the [`SettingsPersistence`] adapter used in production.
//! Parsing and formatting live in `elm_core::format`; this module only moves
//! text between that codec and the disk.
//!
//! Reads never fail.  A missing file is the normal first-run case and yields
//! the defaults silently; any other read error (permissions, not UTF-8) is
//! logged at `warn` and also yields the defaults.  Writes replace the whole
//! file and create its directory if needed.

use std::io;
use std::path::{Path, PathBuf};

use elm_core::{decode_settings, encode_settings, SettingsMap};
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::lifecycle::SettingsPersistence;

#[derive(Debug, Error)]
pub enum SettingsFileError {
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A settings file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and decodes the file, distinguishing "absent" from "present".
    ///
    /// # Errors
    ///
    /// Returns [`SettingsFileError::Io`] for any failure other than the file
    /// not existing.
    pub fn read(&self) -> Result<Option<SettingsMap>, SettingsFileError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(decode_settings(&text))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SettingsFileError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl SettingsPersistence for SettingsFile {
    type Error = SettingsFileError;

    fn load(&self) -> SettingsMap {
        match self.read() {
            Ok(Some(settings)) => settings,
            Ok(None) => {
                debug!("no settings file at {}; using defaults", self.path.display());
                SettingsMap::default()
            }
            Err(e) => {
                warn!("{e}; using defaults");
                SettingsMap::default()
            }
        }
    }

    fn save(&self, settings: &SettingsMap) -> Result<(), SettingsFileError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|source| SettingsFileError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, encode_settings(settings)).map_err(|source| {
            SettingsFileError::Io {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!("settings written to {}", self.path.display());
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
