//! Infrastructure layer for the mod.
//!
//! Contains the outward-facing adapters: the settings file and TOML config on
//! disk, the scene's effect collection, and the UI command bridge.
//!
//! **Dependency rule**: this layer may depend on `application` and `elm_core`,
//! but MUST NOT be imported by the `application` or domain layers.

pub mod scene;
pub mod storage;
pub mod ui_bridge;
