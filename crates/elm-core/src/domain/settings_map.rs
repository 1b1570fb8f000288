//! The always-complete mapping from setting key to string value.

use std::collections::BTreeMap;

use tracing::debug;

use super::palette::ColorName;
use super::preset::Preset;
use super::setting::SettingKey;
use super::DomainError;

/// Returns `true` if `value` survives a write and re-read of the settings
/// file unchanged: non-empty, no surrounding whitespace, no line breaks.
///
/// `=` is allowed; lines split on the first one, so `Red=Blue` reads back whole.
pub fn is_storable_value(value: &str) -> bool {
    !value.is_empty() && value.trim() == value && !value.contains(['\n', '\r'])
}

/// Mapping from every [`SettingKey`] to its string-encoded value.
///
/// # Invariant
///
/// Every key in [`SettingKey::ALL`] has an entry, and every value passes
/// [`is_storable_value`].  The only constructors are [`SettingsMap::default`]
/// (all defaults) and [`SettingsMap::from_partial`] (drops unstorable values,
/// fills gaps from the defaults), and [`SettingsMap::set`] refuses unstorable
/// values, so `decode_settings(&encode_settings(&m)) == m` for every map.
///
/// Values are kept as strings, exactly as persisted.  A color key may hold a
/// name that is not in the palette (hand-edited file); typed accessors return
/// `None` for those instead of guessing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsMap {
    entries: BTreeMap<SettingKey, String>,
}

impl Default for SettingsMap {
    fn default() -> Self {
        Self::from_partial(BTreeMap::new())
    }
}

impl SettingsMap {
    /// Builds a complete map from whatever entries were read, defaulting the rest.
    pub fn from_partial(mut entries: BTreeMap<SettingKey, String>) -> Self {
        entries.retain(|key, value| {
            let keep = is_storable_value(value);
            if !keep {
                debug!("dropping unstorable value for {key}: {value:?}");
            }
            keep
        });
        for key in SettingKey::ALL {
            entries
                .entry(key)
                .or_insert_with(|| key.default_value().to_string());
        }
        Self { entries }
    }

    /// Returns the current value for `key`.
    pub fn get(&self, key: SettingKey) -> &str {
        self.entries
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_value())
    }

    /// Overwrites the value for `key`.  Persisting the change is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnstorableValue`] and leaves the map unchanged if
    /// `value` fails [`is_storable_value`].
    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) -> Result<(), DomainError> {
        let value = value.into();
        if !is_storable_value(&value) {
            return Err(DomainError::UnstorableValue { key, value });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    fn insert(&mut self, key: SettingKey, value: &str) {
        self.entries.insert(key, value.to_string());
    }

    /// Iterates `(key, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, &str)> {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the entry for `key` still holds its default value.
    pub fn is_default(&self, key: SettingKey) -> bool {
        self.get(key) == key.default_value()
    }

    /// The color stored under `key`, or `None` if it is not a palette name.
    pub fn color(&self, key: SettingKey) -> Option<ColorName> {
        ColorName::parse(self.get(key))
    }

    pub fn set_color(&mut self, key: SettingKey, color: ColorName) {
        self.insert(key, color.label());
    }

    /// Reads a `True`/`False` flag.  Matching is case-insensitive; any other
    /// text reads as `false`.
    pub fn flag(&self, key: SettingKey) -> bool {
        self.get(key).trim().eq_ignore_ascii_case("true")
    }

    pub fn set_flag(&mut self, key: SettingKey, value: bool) {
        self.insert(key, if value { "True" } else { "False" });
    }

    /// The selected preset, with invalid stored values coerced to [`Preset::Default`].
    pub fn selected_preset(&self) -> Preset {
        Preset::from_setting(self.get(SettingKey::Preset))
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.insert(SettingKey::Preset, &preset.to_setting());
    }
}
