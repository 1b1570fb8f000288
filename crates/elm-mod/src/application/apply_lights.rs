//! ApplyLightsUseCase: pushes a light plan into the live scene.
//!
//! The scene is reached only through the [`EffectHost`] trait.  In the game
//! this is "find the effect named S in the effect collection and set its light
//! component's color"; in tests and the headless driver it is an in-memory
//! table or a mock.
//!
//! A missing effect (another mod removed it, or the vehicle asset is not
//! installed) skips that one light.  The remaining requests still run.

use elm_core::{LightPlan, Rgb, SettingsMap};
use tracing::debug;

/// Port to the scene's named light effects.
pub trait EffectHost {
    /// Sets the light color of the effect named `effect_name`.
    ///
    /// Returns `false` if the scene has no such effect (or it has no light
    /// component); nothing is changed in that case.
    fn set_light_color(&mut self, effect_name: &str, color: Rgb) -> bool;
}

/// Outcome of one apply pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Effects whose color was set, in plan order.
    pub applied: Vec<String>,
    /// Effects the scene did not have.
    pub missing: Vec<String>,
}

impl ApplyReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// The Apply Lights use case.  Holds no state: the same plan applied to
/// the same scene always yields the same report.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApplyLightsUseCase;

impl ApplyLightsUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Requests every color in `plan` from `host`.
    pub fn apply<H>(&self, plan: &LightPlan, host: &mut H) -> ApplyReport
    where
        H: EffectHost + ?Sized,
    {
        let mut report = ApplyReport::default();
        for request in plan {
            if host.set_light_color(&request.effect_name, request.rgb()) {
                report.applied.push(request.effect_name.clone());
            } else {
                debug!("effect {:?} not found; skipping", request.effect_name);
                report.missing.push(request.effect_name.clone());
            }
        }
        debug!(
            "apply: {} applied, {} missing",
            report.applied.len(),
            report.missing.len()
        );
        report
    }

    /// Resolves `settings` into a plan and applies it.
    pub fn apply_settings<H>(&self, settings: &SettingsMap, host: &mut H) -> ApplyReport
    where
        H: EffectHost + ?Sized,
    {
        let plan = LightPlan::for_settings(settings);
        self.apply(&plan, host)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
