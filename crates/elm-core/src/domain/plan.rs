//! Resolves a [`SettingsMap`] into the list of light-color changes to request.
//!
//! The plan is computed once per apply and handed to the scene port.  Building
//! it is a pure function of the settings, so applying the same settings twice
//! requests exactly the same colors.

use tracing::warn;

use super::lights::{effect_name, Mount, Service, Side};
use super::palette::{ColorName, Rgb};
use super::preset::Preset;
use super::setting::SettingKey;
use super::settings_map::SettingsMap;

/// One "set the light of effect `effect_name` to `color`" request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightRequest {
    pub effect_name: String,
    pub service: Service,
    pub side: Side,
    pub mount: Mount,
    pub color: ColorName,
}

impl LightRequest {
    pub fn rgb(&self) -> Rgb {
        self.color.rgb()
    }
}

/// Ordered light requests for one apply pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightPlan {
    requests: Vec<LightRequest>,
}

impl LightPlan {
    /// Builds the plan for the preset selected in `settings`.
    pub fn for_settings(settings: &SettingsMap) -> Self {
        Self::for_preset(settings.selected_preset(), settings)
    }

    /// Builds the plan for `preset`.  `settings` is consulted only for
    /// [`Preset::Custom`].
    pub fn for_preset(preset: Preset, settings: &SettingsMap) -> Self {
        use ColorName::*;

        let mut plan = PlanBuilder::default();
        match preset {
            Preset::Default => {
                plan.both(Service::Police, Red, Blue);
                plan.both(Service::Fire, LightBlue, LightBlue);
                plan.both(Service::Ambulance, Red, Blue);
                plan.plow(Orange, Orange);
            }
            Preset::Custom => plan.custom(settings),
            Preset::NoLights => {
                plan.both(Service::Police, Off, Off);
                plan.both(Service::Fire, Off, Off);
                plan.both(Service::Ambulance, Off, Off);
                plan.plow(Off, Off);
            }
            Preset::American => {
                plan.both(Service::Police, Red, Blue);
                plan.both(Service::Fire, Red, Blue);
                plan.both(Service::Ambulance, Red, Blue);
                plan.plow(Red, Orange);
            }
            Preset::European => {
                plan.both(Service::Police, Blue, Blue);
                plan.both(Service::Fire, LightBlue, LightBlue);
                plan.both(Service::Ambulance, Blue, Blue);
                plan.plow(Blue, Orange);
            }
            Preset::Japanese => {
                plan.both(Service::Police, Red, Red);
                plan.both(Service::Fire, Red, Red);
                plan.both(Service::Ambulance, Red, Red);
                plan.plow(Red, Orange);
            }
            Preset::Ninja => {
                plan.both(Service::Police, Red, Blue);
                plan.pair(Service::Fire, Mount::Front, Red, Red);
                plan.pair(Service::Fire, Mount::Rear, Red, Red);
                plan.pair(Service::Ambulance, Mount::Front, Red, Red);
                plan.pair(Service::Ambulance, Mount::Rear, White, White);
                plan.plow(Red, Orange);
            }
        }
        Self {
            requests: plan.requests,
        }
    }

    pub fn requests(&self) -> &[LightRequest] {
        &self.requests
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LightRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The color requested for `effect_name`, if the plan touches it.
    pub fn color_of(&self, effect_name: &str) -> Option<ColorName> {
        self.requests
            .iter()
            .find(|request| request.effect_name == effect_name)
            .map(|request| request.color)
    }
}

impl<'a> IntoIterator for &'a LightPlan {
    type Item = &'a LightRequest;
    type IntoIter = std::slice::Iter<'a, LightRequest>;

    fn into_iter(self) -> Self::IntoIter {
        self.requests.iter()
    }
}

#[derive(Default)]
struct PlanBuilder {
    requests: Vec<LightRequest>,
}

impl PlanBuilder {
    fn push(&mut self, service: Service, side: Side, mount: Mount, color: ColorName) {
        // Lights the vehicle does not have (police rear) are dropped here.
        if let Some(name) = effect_name(service, side, mount) {
            self.requests.push(LightRequest {
                effect_name: name,
                service,
                side,
                mount,
                color,
            });
        }
    }

    fn pair(&mut self, service: Service, mount: Mount, left: ColorName, right: ColorName) {
        self.push(service, Side::Left, mount, left);
        self.push(service, Side::Right, mount, right);
    }

    /// Same colors on the front and rear sets.
    fn both(&mut self, service: Service, left: ColorName, right: ColorName) {
        self.pair(service, Mount::Front, left, right);
        self.pair(service, Mount::Rear, left, right);
    }

    fn plow(&mut self, left: ColorName, right: ColorName) {
        self.pair(Service::Rotary, Mount::Front, left, right);
    }

    fn custom(&mut self, settings: &SettingsMap) {
        let color = |key: SettingKey| stored_color(settings, key);

        self.pair(
            Service::Police,
            Mount::Front,
            color(SettingKey::PoliceLeft),
            color(SettingKey::PoliceRight),
        );
        for service in [Service::Fire, Service::Ambulance] {
            let (Some(left), Some(right)) = (
                service.color_key(Side::Left, Mount::Front),
                service.color_key(Side::Right, Mount::Front),
            ) else {
                continue;
            };
            let separate_rear = service
                .manual_rear_key()
                .is_some_and(|flag| settings.flag(flag));
            if separate_rear {
                self.pair(service, Mount::Front, color(left), color(right));
                if let (Some(rear_left), Some(rear_right)) = (
                    service.color_key(Side::Left, Mount::Rear),
                    service.color_key(Side::Right, Mount::Rear),
                ) {
                    self.pair(service, Mount::Rear, color(rear_left), color(rear_right));
                }
            } else {
                self.both(service, color(left), color(right));
            }
        }
        self.plow(
            color(SettingKey::SnowPlowLeft),
            color(SettingKey::SnowPlowRight),
        );
    }
}

/// Reads a color setting, falling back to the key's default for names outside
/// the palette.
fn stored_color(settings: &SettingsMap, key: SettingKey) -> ColorName {
    settings.color(key).unwrap_or_else(|| {
        warn!(
            "setting {key} holds unknown color {:?}; using default {:?}",
            settings.get(key),
            key.default_value()
        );
        key.default_color().unwrap_or(ColorName::Off)
    })
}
