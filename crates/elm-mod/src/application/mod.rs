//! Application layer use cases for the mod.
//!
//! Use cases here orchestrate `elm_core` domain objects to fulfil a player
//! goal, and reach the outside world only through traits:
//!
//! - [`apply_lights::EffectHost`] – the live scene's named light effects.
//! - [`lifecycle::SettingsPersistence`] – wherever the settings file lives.
//!
//! No file system access and no host-engine calls happen in this layer.
//!
//! # Sub-modules
//!
//! - **`apply_lights`**  – Executes a [`elm_core::LightPlan`] against the scene,
//!   skipping effects the scene does not have.
//!
//! - **`options_panel`** – The options-panel model: which dropdowns and
//!   checkboxes exist, which are visible, and what each change handler does
//!   to the settings.
//!
//! - **`lifecycle`**     – The mod's load/unload callbacks, owning the
//!   settings and the "level is loaded" flag.

pub mod apply_lights;
pub mod lifecycle;
pub mod options_panel;
