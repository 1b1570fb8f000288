//! # elm-core
//!
//! Shared library for Emergency Lights Manager containing the closed set of
//! setting keys, the color palette, the presets, the `key=value` settings
//! codec, and the light plan that turns settings into effect-color requests.
//!
//! This crate has zero dependencies on the file system, the host game's UI
//! toolkit, or its scene graph.  Everything here is a pure function of its
//! inputs, which is what makes the mod testable outside the game.
//!
//! # Architecture overview
//!
//! The mod lets a player pick the colors of the flashing lights on police
//! cars, fire trucks, ambulances, and snow plows.  The choices live in a flat
//! text file and are re-applied to the live scene whenever a level loads.
//!
//! - **`domain`** – The vocabulary: [`SettingKey`], [`ColorName`],
//!   [`Preset`], the always-complete [`SettingsMap`], and the
//!   [`LightPlan`] that resolves settings into `effect name → color` requests.
//!
//! - **`format`** – How settings travel to and from disk: one `Key=Value`
//!   pair per line, malformed lines skipped, missing keys defaulted.

pub mod domain;
pub mod format;

pub use domain::lights::{all_effect_names, effect_name, Mount, Service, Side};
pub use domain::palette::{ColorName, Rgb};
pub use domain::plan::{LightPlan, LightRequest};
pub use domain::preset::Preset;
pub use domain::setting::{SettingKey, SettingKind};
pub use domain::settings_map::{is_storable_value, SettingsMap};
pub use domain::DomainError;
pub use format::codec::{decode_settings, encode_settings, parse_line};
