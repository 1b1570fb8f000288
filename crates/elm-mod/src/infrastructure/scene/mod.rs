//! Scene adapters implementing [`crate::application::apply_lights::EffectHost`].
//!
//! - `effect_collection` – named effects with optional light components; used
//!   by the headless driver and the UI bridge.
//! - `mock`              – a call-recording host for tests.

pub mod effect_collection;
pub mod mock;
