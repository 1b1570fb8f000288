//! Domain entities for Emergency Lights Manager.
//!
//! This module contains pure rules with no infrastructure dependencies: which
//! settings exist and what their defaults are, which colors the player may
//! choose, what each preset means, and which named effects receive which
//! color.  Outer layers (storage, the options panel, the scene adapter) depend
//! on these types; nothing here depends on them.

use thiserror::Error;

pub mod lights;
pub mod palette;
pub mod plan;
pub mod preset;
pub mod setting;
pub mod settings_map;

/// Errors raised when text supplied by a caller does not name a known entity.
///
/// Settings files never produce these: the codec treats unknown tokens as
/// "skip this line".  They surface only from strict parsing via [`std::str::FromStr`]
/// (e.g. command-line overrides) and from [`settings_map::SettingsMap::set`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The token is not one of the [`setting::SettingKey`] names.
    #[error("unknown setting: {0:?}")]
    UnknownSetting(String),

    /// The token is not one of the palette's color names.
    #[error("unknown color: {0:?}")]
    UnknownColor(String),

    /// The preset index is outside `0..=6` or not a number.
    #[error("invalid preset index: {0:?}")]
    InvalidPreset(String),

    /// The value would not read back unchanged from the settings file.
    #[error("{key} cannot store {value:?}")]
    UnstorableValue {
        key: setting::SettingKey,
        value: String,
    },
}
