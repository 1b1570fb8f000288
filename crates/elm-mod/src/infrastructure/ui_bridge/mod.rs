//! UI command bridge: exposes the options panel to the host's UI layer.
//!
//! The host renders the panel from a [`PanelDto`] and reports player input
//! back through [`select_option`] and [`toggle_option`].  Field keys cross
//! the bridge as their settings-file names (`"FireLeft"`, `"ManualRearFire"`)
//! so the UI never needs this crate's enums.
//!
//! # `CommandResult<T>` wrapper
//!
//! All commands return `CommandResult<T>` rather than `Result<T, E>`, so every
//! response has the same JSON shape:
//! `{ "success": bool, "data": T | null, "error": string | null }`.

use elm_core::SettingKey;
use serde::{Deserialize, Serialize};

use crate::application::{
    apply_lights::ApplyReport,
    lifecycle::{EditOutcome, ModLifecycle, SettingsPersistence},
    options_panel::{Checkbox, Dropdown, Field, OptionsPanel, PanelError},
};
use crate::infrastructure::{
    scene::effect_collection::EffectCollection,
    storage::{
        config::{ConfigError, ModConfig},
        settings_file::SettingsFile,
    },
};

// ── Mod state ─────────────────────────────────────────────────────────────────

/// Everything a UI command needs: the lifecycle (owning the settings) and the
/// scene it applies to.
pub struct ModState<P: SettingsPersistence> {
    pub lifecycle: ModLifecycle<P>,
    pub scene: EffectCollection,
}

impl<P: SettingsPersistence> ModState<P> {
    pub fn new(persistence: P, scene: EffectCollection) -> Self {
        Self {
            lifecycle: ModLifecycle::new(persistence),
            scene,
        }
    }

    /// Signals that a level finished loading.
    pub fn level_loaded(&mut self) -> ApplyReport {
        self.lifecycle.on_level_loaded(&mut self.scene)
    }
}

impl ModState<SettingsFile> {
    /// Builds the production state: the settings file named by `config` and
    /// a scene holding every known effect.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoPlatformConfigDir`] if the settings path
    /// cannot be resolved.
    pub fn from_config(config: &ModConfig) -> Result<Self, ConfigError> {
        let path = config.settings_path()?;
        Ok(Self::new(
            SettingsFile::new(path),
            EffectCollection::with_known_effects(),
        ))
    }
}

// ── Data Transfer Objects ─────────────────────────────────────────────────────

/// The whole options panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDto {
    pub preset: FieldDto,
    pub tabs_visible: bool,
    pub tabs: Vec<TabDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDto {
    pub label: String,
    pub fields: Vec<FieldDto>,
}

/// One widget.  Serialized with a `"kind"` tag: `"dropdown"` or `"checkbox"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDto {
    Dropdown {
        key: String,
        label: String,
        options: Vec<String>,
        selected: Option<usize>,
        visible: bool,
    },
    Checkbox {
        key: String,
        label: String,
        checked: bool,
        visible: bool,
    },
}

impl From<&Dropdown> for FieldDto {
    fn from(d: &Dropdown) -> Self {
        FieldDto::Dropdown {
            key: d.key.name().to_string(),
            label: d.label.to_string(),
            options: d.options.iter().map(|o| o.to_string()).collect(),
            selected: d.selected,
            visible: d.visible,
        }
    }
}

impl From<&Checkbox> for FieldDto {
    fn from(c: &Checkbox) -> Self {
        FieldDto::Checkbox {
            key: c.key.name().to_string(),
            label: c.label.to_string(),
            checked: c.checked,
            visible: c.visible,
        }
    }
}

impl From<&Field> for FieldDto {
    fn from(field: &Field) -> Self {
        match field {
            Field::Dropdown(d) => d.into(),
            Field::Checkbox(c) => c.into(),
        }
    }
}

impl From<&OptionsPanel> for PanelDto {
    fn from(panel: &OptionsPanel) -> Self {
        Self {
            preset: (&panel.preset).into(),
            tabs_visible: panel.tabs_visible,
            tabs: panel
                .tabs
                .iter()
                .map(|tab| TabDto {
                    label: tab.label.to_string(),
                    fields: tab.fields.iter().map(FieldDto::from).collect(),
                })
                .collect(),
        }
    }
}

/// Current state of one scene light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDto {
    pub effect_name: String,
    /// Palette label, or `None` if uncolored or not a palette color.
    pub color: Option<String>,
    pub rgb: Option<[f32; 3]>,
}

/// Unified response wrapper used by UI commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResult<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T: Serialize> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns the panel for the current settings.
pub fn get_panel<P: SettingsPersistence>(state: &mut ModState<P>) -> CommandResult<PanelDto> {
    CommandResult::ok(PanelDto::from(&state.lifecycle.panel()))
}

/// Dropdown change.  Returns the updated panel.
///
/// # Example
/// ```no_run
/// use elm_mod::infrastructure::scene::effect_collection::EffectCollection;
/// use elm_mod::infrastructure::storage::settings_file::SettingsFile;
/// use elm_mod::infrastructure::ui_bridge::{select_option, ModState};
///
/// let file = SettingsFile::new("EmergencyLightsManagerV2.txt");
/// let mut state = ModState::new(file, EffectCollection::with_known_effects());
/// let result = select_option(&mut state, "FireLeft".to_string(), 5);
/// assert!(result.success);
/// ```
pub fn select_option<P: SettingsPersistence>(
    state: &mut ModState<P>,
    key: String,
    index: usize,
) -> CommandResult<PanelDto> {
    let key = match key.parse::<SettingKey>() {
        Ok(k) => k,
        Err(e) => return CommandResult::err(e.to_string()),
    };
    let outcome = state.lifecycle.select_option(&mut state.scene, key, index);
    edit_result(state, outcome)
}

/// Checkbox change.  Returns the updated panel.
pub fn toggle_option<P: SettingsPersistence>(
    state: &mut ModState<P>,
    key: String,
    checked: bool,
) -> CommandResult<PanelDto> {
    let key = match key.parse::<SettingKey>() {
        Ok(k) => k,
        Err(e) => return CommandResult::err(e.to_string()),
    };
    let outcome = state.lifecycle.toggle_option(&mut state.scene, key, checked);
    edit_result(state, outcome)
}

/// Returns every light in the scene with its current color.
pub fn get_light_colors<P: SettingsPersistence>(state: &ModState<P>) -> CommandResult<Vec<LightDto>> {
    let lights = state
        .scene
        .iter()
        .map(|(name, effect)| LightDto {
            effect_name: name.to_string(),
            color: state.scene.color_name(name).map(|c| c.label().to_string()),
            rgb: effect.color.map(|c| [c.r, c.g, c.b]),
        })
        .collect();
    CommandResult::ok(lights)
}

fn edit_result<P: SettingsPersistence>(
    state: &mut ModState<P>,
    outcome: Result<EditOutcome, PanelError>,
) -> CommandResult<PanelDto> {
    match outcome {
        Ok(outcome) if !outcome.saved => {
            CommandResult::err("setting changed but could not be saved")
        }
        Ok(_) => get_panel(state),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
