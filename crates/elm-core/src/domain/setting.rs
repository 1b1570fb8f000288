//! The closed set of persisted setting keys and their defaults.

use std::fmt;
use std::str::FromStr;

use super::palette::ColorName;
use super::DomainError;

/// One configurable value in the settings file.
///
/// The textual name of each key (see [`SettingKey::name`]) is exactly the
/// variant name, and it is what appears left of the `=` in the settings file.
/// Declaration order is the order keys are written back to disk; `Ord` follows
/// it, so a `BTreeMap<SettingKey, _>` iterates in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    /// Selected preset index, stored as a decimal string.
    Preset,
    PoliceLeft,
    PoliceRight,
    FireLeft,
    FireRight,
    AmbulanceLeft,
    AmbulanceRight,
    /// `True` when fire truck rear lights use their own colors.
    ManualRearFire,
    /// `True` when ambulance rear lights use their own colors.
    ManualRearAmbulance,
    FireLeftRear,
    FireRightRear,
    AmbulanceLeftRear,
    AmbulanceRightRear,
    SnowPlowLeft,
    SnowPlowRight,
}

/// How the string value of a [`SettingKey`] is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    /// A decimal preset index.
    Preset,
    /// A palette color name such as `Light Blue`.
    Color,
    /// `True` or `False`.
    Flag,
}

impl SettingKey {
    /// Every key, in declaration (and file) order.
    pub const ALL: [SettingKey; 15] = [
        SettingKey::Preset,
        SettingKey::PoliceLeft,
        SettingKey::PoliceRight,
        SettingKey::FireLeft,
        SettingKey::FireRight,
        SettingKey::AmbulanceLeft,
        SettingKey::AmbulanceRight,
        SettingKey::ManualRearFire,
        SettingKey::ManualRearAmbulance,
        SettingKey::FireLeftRear,
        SettingKey::FireRightRear,
        SettingKey::AmbulanceLeftRear,
        SettingKey::AmbulanceRightRear,
        SettingKey::SnowPlowLeft,
        SettingKey::SnowPlowRight,
    ];

    /// Returns the stable textual name used in the settings file.
    pub fn name(self) -> &'static str {
        match self {
            SettingKey::Preset => "Preset",
            SettingKey::PoliceLeft => "PoliceLeft",
            SettingKey::PoliceRight => "PoliceRight",
            SettingKey::FireLeft => "FireLeft",
            SettingKey::FireRight => "FireRight",
            SettingKey::AmbulanceLeft => "AmbulanceLeft",
            SettingKey::AmbulanceRight => "AmbulanceRight",
            SettingKey::ManualRearFire => "ManualRearFire",
            SettingKey::ManualRearAmbulance => "ManualRearAmbulance",
            SettingKey::FireLeftRear => "FireLeftRear",
            SettingKey::FireRightRear => "FireRightRear",
            SettingKey::AmbulanceLeftRear => "AmbulanceLeftRear",
            SettingKey::AmbulanceRightRear => "AmbulanceRightRear",
            SettingKey::SnowPlowLeft => "SnowPlowLeft",
            SettingKey::SnowPlowRight => "SnowPlowRight",
        }
    }

    /// Looks up a key by its exact, case-sensitive name.
    ///
    /// Returns `None` for anything else; an unknown name is an ordinary
    /// outcome when reading a hand-edited or newer-version file.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.name() == token)
    }

    /// Returns the value a key takes when the settings file does not supply one.
    pub fn default_value(self) -> &'static str {
        match self {
            SettingKey::Preset => "0",
            SettingKey::PoliceLeft => "Red",
            SettingKey::PoliceRight => "Blue",
            SettingKey::FireLeft => "Light Blue",
            SettingKey::FireRight => "Light Blue",
            SettingKey::AmbulanceLeft => "Red",
            SettingKey::AmbulanceRight => "Blue",
            SettingKey::ManualRearFire => "False",
            SettingKey::ManualRearAmbulance => "False",
            SettingKey::FireLeftRear => "Light Blue",
            SettingKey::FireRightRear => "Light Blue",
            SettingKey::AmbulanceLeftRear => "Red",
            SettingKey::AmbulanceRightRear => "Blue",
            SettingKey::SnowPlowLeft => "Orange",
            SettingKey::SnowPlowRight => "Orange",
        }
    }

    /// Returns how this key's value is encoded.
    pub fn kind(self) -> SettingKind {
        match self {
            SettingKey::Preset => SettingKind::Preset,
            SettingKey::ManualRearFire | SettingKey::ManualRearAmbulance => SettingKind::Flag,
            _ => SettingKind::Color,
        }
    }

    /// Returns the default color for a color key, `None` for the others.
    pub fn default_color(self) -> Option<ColorName> {
        match self.kind() {
            SettingKind::Color => ColorName::parse(self.default_value()),
            SettingKind::Preset | SettingKind::Flag => None,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| DomainError::UnknownSetting(s.to_string()))
    }
}
