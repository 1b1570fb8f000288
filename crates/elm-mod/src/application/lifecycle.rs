//! ModLifecycle: the mod's load/unload callbacks.
//!
//! The host engine drives the mod through four events:
//!
//! | Event               | Effect                                              |
//! |---------------------|-----------------------------------------------------|
//! | `on_created`        | settings are loaded (once; later calls are no-ops)  |
//! | `on_level_loaded`   | the current plan is applied; "loaded" flag set      |
//! | `on_level_unloading`| "loaded" flag cleared                               |
//! | `on_released`       | settings are saved                                  |
//!
//! Player edits go through [`ModLifecycle::select_option`] and
//! [`ModLifecycle::toggle_option`]: the settings map is updated, written
//! through to persistence, and re-applied to the scene if a level is loaded.
//! Edits made from the main menu only update and save.

use elm_core::{SettingKey, SettingsMap};
use tracing::{error, info};

use super::apply_lights::{ApplyLightsUseCase, ApplyReport, EffectHost};
use super::options_panel::{OptionsPanel, PanelChange, PanelError};

/// Port to wherever the settings are stored.
pub trait SettingsPersistence {
    type Error: std::error::Error;

    /// Reads the stored settings.
    ///
    /// Never fails: a missing or unreadable store yields the defaults.
    fn load(&self) -> SettingsMap;

    /// Writes every key, replacing what was stored before.
    fn save(&self, settings: &SettingsMap) -> Result<(), Self::Error>;
}

/// Outcome of a player edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub change: PanelChange,
    /// `false` if the write-through save failed (already logged).
    pub saved: bool,
    /// Present only when a level was loaded and the plan was re-applied.
    pub applied: Option<ApplyReport>,
}

/// Owns the settings and the level-loaded flag for one game session.
pub struct ModLifecycle<P: SettingsPersistence> {
    persistence: P,
    settings: Option<SettingsMap>,
    level_loaded: bool,
    apply: ApplyLightsUseCase,
}

impl<P: SettingsPersistence> ModLifecycle<P> {
    pub fn new(persistence: P) -> Self {
        Self {
            persistence,
            settings: None,
            level_loaded: false,
            apply: ApplyLightsUseCase::new(),
        }
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// The mod was enabled.  Loads the settings if not yet loaded.
    pub fn on_created(&mut self) {
        self.ensure_loaded();
    }

    /// The mod is being disabled or the game is quitting.
    ///
    /// # Errors
    ///
    /// Returns the persistence error if the final save fails.
    pub fn on_released(&mut self) -> Result<(), P::Error> {
        let Some(settings) = &self.settings else {
            return Ok(());
        };
        self.persistence.save(settings).map_err(|e| {
            error!("failed to save settings on release: {e}");
            e
        })?;
        info!("settings saved on release");
        Ok(())
    }

    /// A map or scenario finished loading.  Applies the current plan.
    pub fn on_level_loaded<H>(&mut self, host: &mut H) -> ApplyReport
    where
        H: EffectHost + ?Sized,
    {
        self.level_loaded = true;
        let settings = load_once(&mut self.settings, &self.persistence);
        let report = self.apply.apply_settings(settings, host);
        info!(
            "level loaded: applied {} light colors ({} effects missing)",
            report.applied.len(),
            report.missing.len()
        );
        report
    }

    pub fn on_level_unloading(&mut self) {
        self.level_loaded = false;
        info!("level unloading");
    }

    pub fn is_level_loaded(&self) -> bool {
        self.level_loaded
    }

    /// Current settings, loading them first if needed.
    pub fn settings(&mut self) -> &SettingsMap {
        self.ensure_loaded()
    }

    /// Options panel for the current settings.
    pub fn panel(&mut self) -> OptionsPanel {
        OptionsPanel::build(self.ensure_loaded())
    }

    /// Dropdown edit from the options panel.
    ///
    /// # Errors
    ///
    /// Propagates [`PanelError`]; the settings are untouched in that case.
    pub fn select_option<H>(
        &mut self,
        host: &mut H,
        key: SettingKey,
        index: usize,
    ) -> Result<EditOutcome, PanelError>
    where
        H: EffectHost + ?Sized,
    {
        self.edit(host, |panel, settings| panel.on_select(settings, key, index))
    }

    /// Checkbox edit from the options panel.
    ///
    /// # Errors
    ///
    /// Propagates [`PanelError`]; the settings are untouched in that case.
    pub fn toggle_option<H>(
        &mut self,
        host: &mut H,
        key: SettingKey,
        checked: bool,
    ) -> Result<EditOutcome, PanelError>
    where
        H: EffectHost + ?Sized,
    {
        self.edit(host, |panel, settings| panel.on_toggle(settings, key, checked))
    }

    fn edit<H, F>(&mut self, host: &mut H, f: F) -> Result<EditOutcome, PanelError>
    where
        H: EffectHost + ?Sized,
        F: FnOnce(&mut OptionsPanel, &mut SettingsMap) -> Result<PanelChange, PanelError>,
    {
        let settings = load_once(&mut self.settings, &self.persistence);
        let mut panel = OptionsPanel::build(settings);
        let change = f(&mut panel, settings)?;
        info!("{} set to {:?}", change.key, settings.get(change.key));

        let saved = match self.persistence.save(settings) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to save settings after edit: {e}");
                false
            }
        };

        let applied = if self.level_loaded {
            Some(self.apply.apply_settings(settings, host))
        } else {
            None
        };

        Ok(EditOutcome {
            change,
            saved,
            applied,
        })
    }

    fn ensure_loaded(&mut self) -> &mut SettingsMap {
        load_once(&mut self.settings, &self.persistence)
    }
}

fn load_once<'a, P: SettingsPersistence>(
    slot: &'a mut Option<SettingsMap>,
    persistence: &P,
) -> &'a mut SettingsMap {
    slot.get_or_insert_with(|| {
        let settings = persistence.load();
        info!(
            "settings loaded (preset {})",
            settings.selected_preset().label()
        );
        settings
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
