//! The fixed color palette offered in every color dropdown.

use std::fmt;
use std::str::FromStr;

use super::DomainError;

/// A linear RGB triple in `0.0..=1.0`, as handed to the scene's light component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// One of the eight colors a light can be set to.
///
/// `Off` is black: the effect still exists but emits nothing visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    White,
    Red,
    Blue,
    LightBlue,
    Green,
    Purple,
    Orange,
    Off,
}

impl ColorName {
    /// Palette in dropdown order.
    pub const ALL: [ColorName; 8] = [
        ColorName::White,
        ColorName::Red,
        ColorName::Blue,
        ColorName::LightBlue,
        ColorName::Green,
        ColorName::Purple,
        ColorName::Orange,
        ColorName::Off,
    ];

    /// Human-readable name, also the value stored in the settings file.
    pub fn label(self) -> &'static str {
        match self {
            ColorName::White => "White",
            ColorName::Red => "Red",
            ColorName::Blue => "Blue",
            ColorName::LightBlue => "Light Blue",
            ColorName::Green => "Green",
            ColorName::Purple => "Purple",
            ColorName::Orange => "Orange",
            ColorName::Off => "Off",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            ColorName::White => Rgb::new(1.0, 0.98, 0.96),
            ColorName::Red => Rgb::new(1.0, 0.0, 0.0),
            ColorName::Blue => Rgb::new(0.0, 0.5, 1.0),
            ColorName::LightBlue => Rgb::new(0.5, 0.75, 1.0),
            ColorName::Green => Rgb::new(0.0, 1.0, 0.0),
            ColorName::Purple => Rgb::new(0.5, 0.0, 1.0),
            ColorName::Orange => Rgb::new(1.0, 0.75, 0.0),
            ColorName::Off => Rgb::new(0.0, 0.0, 0.0),
        }
    }

    /// Looks up a color by its exact label (`"Light Blue"`, not `"LightBlue"`).
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.label() == label)
    }

    /// Position of this color in [`ColorName::ALL`], i.e. its dropdown index.
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&color| color == self)
            .unwrap_or_default()
    }

    /// Inverse of [`ColorName::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Dropdown option labels in palette order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|color| color.label()).collect()
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ColorName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim()).ok_or_else(|| DomainError::UnknownColor(s.to_string()))
    }
}
