//! Text codec for the settings file.
//!
//! File format:
//! ```text
//! Preset=1
//! PoliceLeft=Red
//! FireLeft=Light Blue
//! ManualRearFire=False
//! ```
//!
//! No quoting, escaping, or comments.  Reading is forgiving: a line that is not
//! `Token=Token` with both sides non-empty after trimming, or whose key is not a
//! known [`SettingKey`], is skipped.  Writing always emits every key in
//! declaration order.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::setting::SettingKey;
use crate::domain::settings_map::{is_storable_value, SettingsMap};

/// Parses one line into a key and its trimmed value.
///
/// The line is split on the first `=`.  Returns `None` when there is no `=`,
/// when either side is empty after trimming, or when the key is unknown.
///
/// # Examples
///
/// ```rust
/// use elm_core::{parse_line, SettingKey};
///
/// assert_eq!(parse_line("PoliceLeft=Red"), Some((SettingKey::PoliceLeft, "Red")));
/// assert_eq!(parse_line("PoliceLeft="), None);
/// assert_eq!(parse_line("FooBar=Red"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(SettingKey, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    SettingKey::parse(key).map(|key| (key, value))
}

/// Decodes settings text into a complete [`SettingsMap`].
///
/// Never fails: malformed and unknown lines are skipped and every key the text
/// does not supply takes its default.  When a key appears more than once the
/// last occurrence wins.
///
/// # Examples
///
/// ```rust
/// use elm_core::{decode_settings, SettingKey};
///
/// let map = decode_settings("PoliceLeft=Green\nnot a setting\n");
/// assert_eq!(map.get(SettingKey::PoliceLeft), "Green");
/// assert_eq!(map.get(SettingKey::PoliceRight), "Blue");
/// ```
pub fn decode_settings(text: &str) -> SettingsMap {
    let mut entries = BTreeMap::new();
    for (number, line) in text.lines().enumerate() {
        let line = line.replace('\r', "");
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some((key, value)) => {
                entries.insert(key, value.to_string());
            }
            None => debug!("skipping settings line {}: {line:?}", number + 1),
        }
    }
    SettingsMap::from_partial(entries)
}

/// Encodes every entry as `KeyName=Value\n`, in declaration order.
///
/// [`SettingsMap`] only holds values that pass [`is_storable_value`], so the
/// output always decodes back to an equal map.
///
/// # Examples
///
/// ```rust
/// use elm_core::{encode_settings, SettingsMap};
///
/// let text = encode_settings(&SettingsMap::default());
/// assert!(text.starts_with("Preset=0\nPoliceLeft=Red\n"));
/// ```
pub fn encode_settings(map: &SettingsMap) -> String {
    let mut out = String::new();
    for (key, value) in map.iter() {
        debug_assert!(is_storable_value(value), "{key} holds unstorable {value:?}");
        out.push_str(key.name());
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::palette::ColorName;
    use crate::domain::preset::Preset;

    // ── parse_line ────────────────────────────────────────────────────────────

    #[test]
    fn test_parse_line_trims_both_tokens() {
        assert_eq!(
            parse_line("  FireLeft =  Light Blue  "),
            Some((SettingKey::FireLeft, "Light Blue"))
        );
    }

    #[test]
    fn test_parse_line_rejects_missing_delimiter() {
        assert_eq!(parse_line("PoliceLeft Red"), None);
    }

    #[test]
    fn test_parse_line_rejects_empty_key_or_value() {
        assert_eq!(parse_line("=Red"), None);
        assert_eq!(parse_line("PoliceLeft="), None);
        assert_eq!(parse_line("PoliceLeft=   "), None);
        assert_eq!(parse_line("   =   "), None);
    }

    #[test]
    fn test_parse_line_rejects_unknown_key() {
        assert_eq!(parse_line("FooBar=Red"), None);
    }

    #[test]
    fn test_parse_line_splits_on_first_delimiter_only() {
        assert_eq!(
            parse_line("PoliceLeft=Red=Blue"),
            Some((SettingKey::PoliceLeft, "Red=Blue"))
        );
    }

    // ── decode_settings ───────────────────────────────────────────────────────

    #[test]
    fn test_decode_empty_text_yields_defaults() {
        // Arrange / Act
        let map = decode_settings("");

        // Assert
        assert_eq!(map, SettingsMap::default());
        assert_eq!(map.get(SettingKey::PoliceLeft), "Red");
        assert_eq!(map.get(SettingKey::PoliceRight), "Blue");
        assert_eq!(map.get(SettingKey::FireLeft), "Light Blue");
        assert_eq!(map.get(SettingKey::ManualRearFire), "False");
        assert_eq!(map.get(SettingKey::Preset), "0");
        assert_eq!(map.selected_preset(), Preset::Default);
    }

    #[test]
    fn test_decode_tolerates_malformed_lines() {
        // Arrange
        let text = "FooBar=Red\n=Red\nPoliceLeft=\nPoliceLeft=Red\n";

        // Act
        let map = decode_settings(text);

        // Assert
        assert_eq!(map.get(SettingKey::PoliceLeft), "Red");
        assert_eq!(map.len(), SettingKey::ALL.len());
        assert!(!encode_settings(&map).contains("FooBar"));
        for key in SettingKey::ALL {
            assert!(map.is_default(key), "{key} must keep its default");
        }
    }

    #[test]
    fn test_decode_handles_crlf_line_endings() {
        let map = decode_settings("PoliceLeft=Green\r\nPoliceRight=Purple\r\n");
        assert_eq!(map.color(SettingKey::PoliceLeft), Some(ColorName::Green));
        assert_eq!(map.color(SettingKey::PoliceRight), Some(ColorName::Purple));
    }

    #[test]
    fn test_decode_last_duplicate_wins() {
        let map = decode_settings("SnowPlowLeft=Red\nSnowPlowLeft=Blue\n");
        assert_eq!(map.get(SettingKey::SnowPlowLeft), "Blue");
    }

    #[test]
    fn test_decode_preset_coercion() {
        assert_eq!(decode_settings("Preset=99").selected_preset(), Preset::Default);
        assert_eq!(decode_settings("Preset=abc").selected_preset(), Preset::Default);
        assert_eq!(decode_settings("Preset=2").selected_preset(), Preset::NoLights);
    }

    #[test]
    fn test_decode_keeps_raw_preset_value() {
        // The stored string is preserved; only the resolved preset is coerced.
        let map = decode_settings("Preset=abc");
        assert_eq!(map.get(SettingKey::Preset), "abc");
    }

    // ── encode_settings ───────────────────────────────────────────────────────

    #[test]
    fn test_encode_emits_every_key_in_order() {
        let text = encode_settings(&SettingsMap::default());
        let keys: Vec<&str> = text
            .lines()
            .map(|line| line.split_once('=').map(|(k, _)| k).unwrap_or(line))
            .collect();
        let expected: Vec<&str> = SettingKey::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_encode_then_decode_reproduces_map() {
        // Arrange
        let mut map = SettingsMap::default();
        map.set_preset(Preset::Custom);
        map.set_color(SettingKey::AmbulanceLeftRear, ColorName::White);
        map.set_flag(SettingKey::ManualRearAmbulance, true);

        // Act
        let restored = decode_settings(&encode_settings(&map));

        // Assert
        assert_eq!(restored, map);
    }

    #[test]
    fn test_unstorable_values_never_reach_the_file() {
        // Arrange
        let mut map = SettingsMap::default();
        map.set(SettingKey::FireRight, "Red=Blue").unwrap();
        let rejected = ["", " Red", "Red ", "Green\nPreset=3", "Green\r\nPreset=3"];

        // Act
        for value in rejected {
            assert!(map.set(SettingKey::PoliceLeft, value).is_err(), "{value:?}");
            assert!(map.set(SettingKey::FireLeft, value).is_err(), "{value:?}");
        }
        let restored = decode_settings(&encode_settings(&map));

        // Assert
        assert_eq!(restored, map);
        assert_eq!(restored.get(SettingKey::FireRight), "Red=Blue");
        assert_eq!(restored.selected_preset(), Preset::Default);
    }
}
