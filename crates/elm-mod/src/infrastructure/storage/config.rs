//! TOML-based runtime configuration for the mod.
//!
//! Reads `ModConfig` from the platform-appropriate config file:
//! - Windows:  `%APPDATA%\EmergencyLightsManager\config.toml`
//! - Linux:    `~/.config/emergency-lights-manager/config.toml`
//! - macOS:    `~/Library/Application Support/EmergencyLightsManager/config.toml`
//!
//! This file only says *where* the light settings live and how loud the log
//! is.  The light settings themselves are in the plain `Key=Value` file
//! handled by [`super::settings_file`].
//!
//! ```toml
//! [storage]
//! settings_dir = "/games/cities/mods"
//! file_name = "EmergencyLightsManagerV2.txt"
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Every field has a `#[serde(default = ...)]`, so a missing file, a missing
//! section or a missing field all fall back to the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the light settings file.
pub const DEFAULT_SETTINGS_FILE_NAME: &str = "EmergencyLightsManagerV2.txt";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the light settings file lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Directory of the settings file.  Absent means the platform config dir.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter used when `RUST_LOG` is unset (e.g. `"info"`, `"elm_mod=debug"`).
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_file_name() -> String {
    DEFAULT_SETTINGS_FILE_NAME.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            settings_dir: None,
            file_name: default_file_name(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ModConfig {
    /// Full path of the light settings file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] when no `settings_dir` is
    /// configured and the platform directory cannot be determined.
    pub fn settings_path(&self) -> Result<PathBuf, ConfigError> {
        let dir = match &self.storage.settings_dir {
            Some(dir) => dir.clone(),
            None => config_dir()?,
        };
        Ok(dir.join(&self.storage.file_name))
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `ModConfig` from the platform config file.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<ModConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `ModConfig` from `path`, returning `ModConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<ModConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ModConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("EmergencyLightsManager"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("emergency-lights-manager"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("EmergencyLightsManager")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("elm_config_test_{}", Uuid::new_v4()))
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_mod_config_default_uses_canonical_file_name() {
        let cfg = ModConfig::default();
        assert_eq!(cfg.storage.file_name, "EmergencyLightsManagerV2.txt");
        assert!(cfg.storage.settings_dir.is_none());
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let cfg: ModConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, ModConfig::default());
    }

    #[test]
    fn test_deserialize_partial_storage_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[storage]
settings_dir = "/tmp/elm"
"#;

        // Act
        let cfg: ModConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.storage.settings_dir, Some(PathBuf::from("/tmp/elm")));
        assert_eq!(cfg.storage.file_name, DEFAULT_SETTINGS_FILE_NAME);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_default_config_omits_settings_dir_when_serialized() {
        let toml_str = toml::to_string_pretty(&ModConfig::default()).expect("serialize");
        assert!(!toml_str.contains("settings_dir"));
        assert!(toml_str.contains("file_name"));
    }

    // ── settings_path ─────────────────────────────────────────────────────────

    #[test]
    fn test_settings_path_joins_configured_dir_and_file_name() {
        let mut cfg = ModConfig::default();
        cfg.storage.settings_dir = Some(PathBuf::from("/games/mods"));
        cfg.storage.file_name = "lights.txt".to_string();

        let path = cfg.settings_path().unwrap();

        assert_eq!(path, PathBuf::from("/games/mods").join("lights.txt"));
    }

    #[test]
    fn test_settings_path_defaults_to_platform_dir() {
        // A stripped environment without HOME may return NoPlatformConfigDir.
        if let Ok(path) = ModConfig::default().settings_path() {
            assert!(path.ends_with(DEFAULT_SETTINGS_FILE_NAME));
        }
    }

    // ── File round-trip ───────────────────────────────────────────────────────

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("config.toml");
        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg, ModConfig::default());
    }

    #[test]
    fn test_load_config_from_reads_written_toml() {
        // Arrange
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut cfg = ModConfig::default();
        cfg.storage.settings_dir = Some(dir.clone());
        cfg.logging.level = "debug".to_string();
        std::fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        // Act
        let loaded = load_config_from(&path).unwrap();

        // Assert
        assert_eq!(loaded, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_from_invalid_toml_returns_parse_error() {
        // Arrange
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
    }
}
