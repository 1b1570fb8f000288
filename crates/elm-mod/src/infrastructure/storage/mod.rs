//! Storage infrastructure: file persistence.
//!
//! - `settings_file` – the `Key=Value` light settings file, implementing
//!   [`crate::application::lifecycle::SettingsPersistence`].
//! - `config`        – the TOML runtime config that says where that file
//!   lives and which log level to use.

pub mod config;
pub mod settings_file;
