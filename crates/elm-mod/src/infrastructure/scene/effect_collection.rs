//! In-memory stand-in for the engine's effect collection.
//!
//! The game keeps light effects in a global collection looked up by exact
//! name.  Each effect may or may not carry a light component; only effects
//! with one can be recolored.  [`EffectCollection`] models exactly that, and
//! is what the headless driver and the UI bridge apply plans against.

use std::collections::BTreeMap;

use elm_core::{all_effect_names, ColorName, Rgb};

use crate::application::apply_lights::EffectHost;

/// A named effect as the scene sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effect {
    pub has_light: bool,
    /// Last color set on the light component.
    pub color: Option<Rgb>,
}

#[derive(Debug, Clone, Default)]
pub struct EffectCollection {
    effects: BTreeMap<String, Effect>,
}

impl EffectCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding every effect the mod knows how to recolor.
    pub fn with_known_effects() -> Self {
        let mut collection = Self::new();
        for name in all_effect_names() {
            collection.insert_light(name);
        }
        collection
    }

    /// Adds an uncolored effect with a light component.
    pub fn insert_light(&mut self, name: impl Into<String>) {
        self.effects.insert(
            name.into(),
            Effect {
                has_light: true,
                color: None,
            },
        );
    }

    /// Adds an effect that has no light component.
    pub fn insert_unlit(&mut self, name: impl Into<String>) {
        self.effects.insert(
            name.into(),
            Effect {
                has_light: false,
                color: None,
            },
        );
    }

    pub fn remove(&mut self, name: &str) -> Option<Effect> {
        self.effects.remove(name)
    }

    pub fn color(&self, name: &str) -> Option<Rgb> {
        self.effects.get(name).and_then(|e| e.color)
    }

    /// Palette name of the color currently on `name`, if it is a palette color.
    pub fn color_name(&self, name: &str) -> Option<ColorName> {
        let rgb = self.color(name)?;
        ColorName::ALL.into_iter().find(|c| c.rgb() == rgb)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effects in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Effect)> {
        self.effects.iter().map(|(name, effect)| (name.as_str(), effect))
    }
}

impl EffectHost for EffectCollection {
    fn set_light_color(&mut self, effect_name: &str, color: Rgb) -> bool {
        match self.effects.get_mut(effect_name) {
            Some(effect) if effect.has_light => {
                effect.color = Some(color);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::apply_lights::ApplyLightsUseCase;
    use elm_core::{Preset, SettingsMap};

    #[test]
    fn test_with_known_effects_holds_twelve_uncolored_lights() {
        let scene = EffectCollection::with_known_effects();
        assert_eq!(scene.len(), 12);
        assert!(scene.iter().all(|(_, e)| e.has_light && e.color.is_none()));
    }

    #[test]
    fn test_set_light_color_on_unknown_effect_returns_false() {
        let mut scene = EffectCollection::new();
        assert!(!scene.set_light_color("Police Car Light Left", ColorName::Red.rgb()));
    }

    #[test]
    fn test_set_light_color_on_unlit_effect_returns_false() {
        let mut scene = EffectCollection::new();
        scene.insert_unlit("Police Car Light Left");

        assert!(!scene.set_light_color("Police Car Light Left", ColorName::Red.rgb()));
        assert_eq!(scene.color("Police Car Light Left"), None);
    }

    #[test]
    fn test_lookup_is_exact_name_match() {
        let mut scene = EffectCollection::with_known_effects();
        assert!(!scene.set_light_color("police car light left", ColorName::Red.rgb()));
        assert!(!scene.set_light_color(" Police Car Light Left", ColorName::Red.rgb()));
    }

    #[test]
    fn test_apply_default_preset_colors_scene() {
        // Arrange
        let mut scene = EffectCollection::with_known_effects();

        // Act
        let report = ApplyLightsUseCase::new().apply_settings(&SettingsMap::default(), &mut scene);

        // Assert
        assert!(report.is_complete());
        assert_eq!(scene.color_name("Police Car Light Left"), Some(ColorName::Red));
        assert_eq!(scene.color_name("Police Car Light Right"), Some(ColorName::Blue));
        assert_eq!(scene.color_name("Fire Truck Light Left2"), Some(ColorName::LightBlue));
        assert_eq!(scene.color_name("Snowplow Light 1"), Some(ColorName::Orange));
    }

    #[test]
    fn test_removed_effect_is_reported_missing() {
        // Arrange
        let mut scene = EffectCollection::with_known_effects();
        scene.remove("Ambulance Light Right2");
        let mut settings = SettingsMap::default();
        settings.set_preset(Preset::European);

        // Act
        let report = ApplyLightsUseCase::new().apply_settings(&settings, &mut scene);

        // Assert
        assert_eq!(report.missing, vec!["Ambulance Light Right2".to_string()]);
        assert_eq!(scene.len(), 11);
    }
}
