//! OptionsPanel: the options-panel model bound to the settings map.
//!
//! The host game supplies the actual widgets (dropdowns, checkboxes, a tab
//! strip).  This module decides *what* those widgets show and what happens
//! when the player changes one:
//!
//! ```text
//! Select Preset  [Default | Custom | No Lights | American | ...]
//! ── tabs (visible only for the Custom preset) ──────────────────
//! Police Car               Left  Right
//! Fire Truck               Left  Right  [x] Configure Rear Lights Separately
//!                                       Left  Right   (rear, visible when checked)
//! Ambulance                (same layout as Fire Truck)
//! Rotary (e.g. Snow Plow)  Left  Right
//! ```
//!
//! Every editable field corresponds to exactly one [`SettingKey`], so the key
//! doubles as the field id.  The change handlers mutate the [`SettingsMap`]
//! (the single source of truth) and rebuild the view from it; persisting and
//! re-applying are the caller's job (see [`super::lifecycle::ModLifecycle::select_option`]).

use elm_core::{ColorName, Mount, Preset, Service, SettingKey, SettingKind, SettingsMap, Side};
use thiserror::Error;

/// Label of the per-vehicle rear-lights checkbox.
pub const MANUAL_REAR_LABEL: &str = "Configure Rear Lights Separately";
/// Label of the preset dropdown.
pub const PRESET_LABEL: &str = "Select Preset";

/// Error type for panel change handlers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("index {index} out of range for {key} ({len} options)")]
    IndexOutOfRange {
        key: SettingKey,
        index: usize,
        len: usize,
    },
    #[error("{key} is not a {expected}")]
    WrongFieldKind {
        key: SettingKey,
        expected: &'static str,
    },
}

/// Result of a successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelChange {
    pub key: SettingKey,
    /// `false` when the new value equals the old one.
    pub changed: bool,
}

/// A labeled list of choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    pub key: SettingKey,
    pub label: &'static str,
    pub options: Vec<&'static str>,
    /// `None` when the stored value is not one of the options.
    pub selected: Option<usize>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub key: SettingKey,
    pub label: &'static str,
    pub checked: bool,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Dropdown(Dropdown),
    Checkbox(Checkbox),
}

impl Field {
    pub fn key(&self) -> SettingKey {
        match self {
            Field::Dropdown(d) => d.key,
            Field::Checkbox(c) => c.key,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Field::Dropdown(d) => d.visible,
            Field::Checkbox(c) => c.visible,
        }
    }
}

/// One vehicle tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub service: Service,
    pub label: &'static str,
    pub fields: Vec<Field>,
}

/// Snapshot of the whole panel, derived from a [`SettingsMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsPanel {
    pub preset: Dropdown,
    pub tabs: Vec<Tab>,
    /// The tab strip is shown only for [`Preset::Custom`].
    pub tabs_visible: bool,
}

impl OptionsPanel {
    /// Builds the panel for the current settings.
    pub fn build(settings: &SettingsMap) -> Self {
        let preset = settings.selected_preset();
        Self {
            preset: Dropdown {
                key: SettingKey::Preset,
                label: PRESET_LABEL,
                options: Preset::labels(),
                selected: Some(preset.index()),
                visible: true,
            },
            tabs: Service::ALL
                .into_iter()
                .map(|service| build_tab(service, settings))
                .collect(),
            tabs_visible: preset == Preset::Custom,
        }
    }

    /// Finds the field bound to `key`.
    pub fn field(&self, key: SettingKey) -> Option<&Field> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.fields.iter())
            .find(|field| field.key() == key)
    }

    pub fn dropdown(&self, key: SettingKey) -> Option<&Dropdown> {
        if key == SettingKey::Preset {
            return Some(&self.preset);
        }
        match self.field(key)? {
            Field::Dropdown(d) => Some(d),
            Field::Checkbox(_) => None,
        }
    }

    pub fn checkbox(&self, key: SettingKey) -> Option<&Checkbox> {
        match self.field(key)? {
            Field::Checkbox(c) => Some(c),
            Field::Dropdown(_) => None,
        }
    }

    pub fn tab(&self, service: Service) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.service == service)
    }

    /// Dropdown change handler: the player picked option `index` of `key`.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::WrongFieldKind`] if `key` is a checkbox and
    /// [`PanelError::IndexOutOfRange`] if `index` is not an option.
    pub fn on_select(
        &mut self,
        settings: &mut SettingsMap,
        key: SettingKey,
        index: usize,
    ) -> Result<PanelChange, PanelError> {
        match key.kind() {
            SettingKind::Preset => {
                let preset = Preset::from_index(index).ok_or(PanelError::IndexOutOfRange {
                    key,
                    index,
                    len: Preset::ALL.len(),
                })?;
                Ok(self.commit(settings, key, |s| s.set_preset(preset)))
            }
            SettingKind::Color => {
                let color = ColorName::from_index(index).ok_or(PanelError::IndexOutOfRange {
                    key,
                    index,
                    len: ColorName::ALL.len(),
                })?;
                Ok(self.commit(settings, key, |s| s.set_color(key, color)))
            }
            SettingKind::Flag => Err(PanelError::WrongFieldKind {
                key,
                expected: "dropdown",
            }),
        }
    }

    /// Checkbox change handler.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::WrongFieldKind`] if `key` is not a checkbox.
    pub fn on_toggle(
        &mut self,
        settings: &mut SettingsMap,
        key: SettingKey,
        checked: bool,
    ) -> Result<PanelChange, PanelError> {
        if key.kind() != SettingKind::Flag {
            return Err(PanelError::WrongFieldKind {
                key,
                expected: "checkbox",
            });
        }
        Ok(self.commit(settings, key, |s| s.set_flag(key, checked)))
    }

    fn commit<F>(&mut self, settings: &mut SettingsMap, key: SettingKey, update: F) -> PanelChange
    where
        F: FnOnce(&mut SettingsMap),
    {
        let before = settings.get(key).to_string();
        update(settings);
        let changed = settings.get(key) != before;
        *self = Self::build(settings);
        PanelChange { key, changed }
    }
}

fn build_tab(service: Service, settings: &SettingsMap) -> Tab {
    let mut fields: Vec<Field> = Side::ALL
        .into_iter()
        .filter_map(|side| {
            let key = service.color_key(side, Mount::Front)?;
            Some(Field::Dropdown(color_dropdown(key, side, settings, true)))
        })
        .collect();

    if let Some(flag) = service.manual_rear_key() {
        let checked = settings.flag(flag);
        fields.push(Field::Checkbox(Checkbox {
            key: flag,
            label: MANUAL_REAR_LABEL,
            checked,
            visible: true,
        }));
        for side in Side::ALL {
            if let Some(key) = service.color_key(side, Mount::Rear) {
                fields.push(Field::Dropdown(color_dropdown(key, side, settings, checked)));
            }
        }
    }

    Tab {
        service,
        label: service.label(),
        fields,
    }
}

fn color_dropdown(key: SettingKey, side: Side, settings: &SettingsMap, visible: bool) -> Dropdown {
    Dropdown {
        key,
        label: side.label(),
        options: ColorName::labels(),
        selected: settings.color(key).map(ColorName::index),
        visible,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
