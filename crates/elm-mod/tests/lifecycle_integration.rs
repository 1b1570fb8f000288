//! Integration tests for a full mod session.
//!
//! These tests exercise elm-mod end-to-end: `ModLifecycle` + `SettingsFile`
//! on a real temp directory + a recording scene.

use std::path::PathBuf;

use elm_core::{ColorName, Preset, SettingKey, SettingsMap};
use elm_mod::application::lifecycle::{ModLifecycle, SettingsPersistence};
use elm_mod::infrastructure::scene::mock::RecordingEffectHost;
use elm_mod::infrastructure::storage::settings_file::SettingsFile;
use uuid::Uuid;

fn temp_settings_path() -> (PathBuf, PathBuf) {
    let dir = std::env::temp_dir().join(format!("elm_session_test_{}", Uuid::new_v4()));
    let path = dir.join("EmergencyLightsManagerV2.txt");
    (dir, path)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_first_run_applies_default_preset_and_writes_file_on_release() {
    // Arrange
    let (dir, path) = temp_settings_path();
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    let mut scene = RecordingEffectHost::new();

    // Act
    lc.on_created();
    let report = lc.on_level_loaded(&mut scene);
    lc.on_level_unloading();
    lc.on_released().expect("release must save");

    // Assert
    assert_eq!(report.applied.len(), 12);
    assert_eq!(scene.last_color("Police Car Light Left"), Some(ColorName::Red.rgb()));
    assert_eq!(scene.last_color("Ambulance Light Right2"), Some(ColorName::Blue.rgb()));
    assert_eq!(scene.last_color("Snowplow Light 2"), Some(ColorName::Orange.rgb()));
    assert_eq!(SettingsFile::new(&path).load(), SettingsMap::default());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_menu_edits_survive_into_next_session() {
    // Arrange: first session edits from the main menu
    let (dir, path) = temp_settings_path();
    let mut scene = RecordingEffectHost::new();
    {
        let mut lc = ModLifecycle::new(SettingsFile::new(&path));
        lc.on_created();
        lc.select_option(&mut scene, SettingKey::Preset, Preset::Custom.index())
            .unwrap();
        lc.select_option(&mut scene, SettingKey::SnowPlowLeft, ColorName::Green.index())
            .unwrap();
        // No release: write-through must already have saved.
    }
    assert!(scene.calls().is_empty(), "menu edits must not touch the scene");

    // Act: second session loads a level
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    lc.on_created();
    lc.on_level_loaded(&mut scene);

    // Assert
    assert_eq!(scene.last_color("Snowplow Light 1"), Some(ColorName::Green.rgb()));
    assert_eq!(scene.last_color("Snowplow Light 2"), Some(ColorName::Orange.rgb()));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_separate_rear_lights_only_after_toggle() {
    // Arrange
    let (dir, path) = temp_settings_path();
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    let mut scene = RecordingEffectHost::new();
    lc.on_level_loaded(&mut scene);
    lc.select_option(&mut scene, SettingKey::Preset, Preset::Custom.index())
        .unwrap();

    // Act: rear color is edited while the checkbox is still off
    lc.select_option(&mut scene, SettingKey::AmbulanceLeftRear, ColorName::Purple.index())
        .unwrap();

    // Assert: rear follows the front
    assert_eq!(scene.last_color("Ambulance Light Left2"), Some(ColorName::Red.rgb()));

    // Act: turn separate rear lights on
    let outcome = lc
        .toggle_option(&mut scene, SettingKey::ManualRearAmbulance, true)
        .unwrap();

    // Assert
    assert!(outcome.change.changed);
    assert_eq!(scene.last_color("Ambulance Light Left2"), Some(ColorName::Purple.rgb()));
    assert_eq!(scene.last_color("Ambulance Light Left"), Some(ColorName::Red.rgb()));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_missing_scene_effects_do_not_block_the_rest() {
    let (dir, path) = temp_settings_path();
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    let mut scene = RecordingEffectHost::new()
        .without("Fire Truck Light Left")
        .without("Fire Truck Light Right");

    let report = lc.on_level_loaded(&mut scene);

    assert_eq!(report.missing.len(), 2);
    assert_eq!(report.applied.len(), 10);
    assert_eq!(scene.last_color("Fire Truck Light Left2"), Some(ColorName::LightBlue.rgb()));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_hand_edited_file_with_bad_preset_falls_back_to_default_plan() {
    // Arrange
    let (dir, path) = temp_settings_path();
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(&path, "Preset=99\nPoliceLeft=Green\nnot a setting\n").unwrap();
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    let mut scene = RecordingEffectHost::new();

    // Act
    lc.on_level_loaded(&mut scene);

    // Assert: the preset wins over the custom color
    assert_eq!(scene.last_color("Police Car Light Left"), Some(ColorName::Red.rgb()));
    assert_eq!(lc.settings().get(SettingKey::PoliceLeft), "Green");
    assert_eq!(lc.panel().preset.selected, Some(0));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_reapplying_same_settings_is_idempotent() {
    let (dir, path) = temp_settings_path();
    let mut lc = ModLifecycle::new(SettingsFile::new(&path));
    let mut first = RecordingEffectHost::new();
    let mut second = RecordingEffectHost::new();

    lc.on_level_loaded(&mut first);
    lc.on_level_unloading();
    lc.on_level_loaded(&mut second);

    assert_eq!(first.calls(), second.calls());

    std::fs::remove_dir_all(&dir).ok();
}
