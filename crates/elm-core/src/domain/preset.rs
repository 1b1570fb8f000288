//! Named bundles of light colors selectable instead of manual customization.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// The presets shown in the "Select Preset" dropdown, in index order.
///
/// Only [`Preset::Custom`] reads the per-field color settings; every other
/// preset ignores them and applies a fixed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// The game's stock colors.
    #[default]
    Default,
    /// Per-service colors taken from the settings map.
    Custom,
    /// Every light off.
    NoLights,
    American,
    European,
    Japanese,
    /// Tuned for the "Ninja" vehicle asset pack.
    Ninja,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Custom,
        Preset::NoLights,
        Preset::American,
        Preset::European,
        Preset::Japanese,
        Preset::Ninja,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Preset::Default => "Default",
            Preset::Custom => "Custom",
            Preset::NoLights => "No Lights (All Off)",
            Preset::American => "American (Red-Blue)",
            Preset::European => "European (Blue-Blue)",
            Preset::Japanese => "Japanese (Red-Red)",
            Preset::Ninja => "Ideal Settings For Ninja's Vehicles",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Resolves the stored `Preset` setting value.
    ///
    /// Anything that is not a decimal integer naming a valid preset index
    /// (`"abc"`, `"-1"`, `"99"`) resolves to [`Preset::Default`].
    pub fn from_setting(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .and_then(Self::from_index)
            .unwrap_or_default()
    }

    /// The string stored under the `Preset` setting key.
    pub fn to_setting(self) -> String {
        self.index().to_string()
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|preset| preset.label()).collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Preset {
    type Err = DomainError;

    /// Strict parse: unlike [`Preset::from_setting`], out-of-range input is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_index)
            .ok_or_else(|| DomainError::InvalidPreset(s.to_string()))
    }
}
