//! Recording effect host for tests.
//!
//! Unlike a `mockall` mock it sets no expectations up front.  It records every
//! call so a test can assert on the sequence afterwards.

use std::collections::HashSet;

use elm_core::Rgb;

use crate::application::apply_lights::EffectHost;

/// An [`EffectHost`] that records calls and knows every effect by default.
#[derive(Debug, Default)]
pub struct RecordingEffectHost {
    calls: Vec<(String, Rgb)>,
    absent: HashSet<String>,
}

impl RecordingEffectHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the host report `name` as not present in the scene.
    pub fn without(mut self, name: impl Into<String>) -> Self {
        self.absent.insert(name.into());
        self
    }

    /// Every successful `set_light_color` call, in order.
    pub fn calls(&self) -> &[(String, Rgb)] {
        &self.calls
    }

    /// Most recent color set on `name`.
    pub fn last_color(&self, name: &str) -> Option<Rgb> {
        self.calls
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, rgb)| *rgb)
    }
}

impl EffectHost for RecordingEffectHost {
    fn set_light_color(&mut self, effect_name: &str, color: Rgb) -> bool {
        if self.absent.contains(effect_name) {
            return false;
        }
        self.calls.push((effect_name.to_string(), color));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elm_core::ColorName;

    #[test]
    fn test_records_calls_in_order() {
        let mut host = RecordingEffectHost::new();

        host.set_light_color("A", ColorName::Red.rgb());
        host.set_light_color("B", ColorName::Blue.rgb());
        host.set_light_color("A", ColorName::Off.rgb());

        assert_eq!(host.calls().len(), 3);
        assert_eq!(host.last_color("A"), Some(ColorName::Off.rgb()));
        assert_eq!(host.last_color("C"), None);
    }

    #[test]
    fn test_absent_effect_is_not_recorded() {
        let mut host = RecordingEffectHost::new().without("Snowplow Light 1");

        assert!(!host.set_light_color("Snowplow Light 1", ColorName::Orange.rgb()));
        assert!(host.calls().is_empty());
    }
}
