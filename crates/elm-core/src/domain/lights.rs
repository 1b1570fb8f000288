//! Vehicles, light positions, and the scene effect names they map to.
//!
//! The host scene exposes each beacon as a named effect.  Names follow a fixed
//! pattern:
//!
//! ```text
//! front:  "<vehicle> Light <Left|Right>"     e.g. "Fire Truck Light Left"
//! rear:   "<vehicle> Light <Left|Right>2"    e.g. "Ambulance Light Right2"
//! plow:   "Snowplow Light 1" (left), "Snowplow Light 2" (right)
//! ```
//!
//! Police cars and snow plows have no rear set.

use std::fmt;

use super::setting::SettingKey;

/// An emergency service whose lights can be recolored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Police,
    Fire,
    Ambulance,
    /// Rotary beacons, i.e. the snow plow.
    Rotary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Which of a vehicle's two beacon sets a light belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mount {
    Front,
    Rear,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Police,
        Service::Fire,
        Service::Ambulance,
        Service::Rotary,
    ];

    /// Tab label in the options panel.
    pub fn label(self) -> &'static str {
        match self {
            Service::Police => "Police Car",
            Service::Fire => "Fire Truck",
            Service::Ambulance => "Ambulance",
            Service::Rotary => "Rotary (e.g. Snow Plow)",
        }
    }

    /// `true` if the vehicle has a rear beacon set.
    pub fn has_rear(self) -> bool {
        matches!(self, Service::Fire | Service::Ambulance)
    }

    /// The flag that switches rear lights to their own colors, if any.
    pub fn manual_rear_key(self) -> Option<SettingKey> {
        match self {
            Service::Fire => Some(SettingKey::ManualRearFire),
            Service::Ambulance => Some(SettingKey::ManualRearAmbulance),
            Service::Police | Service::Rotary => None,
        }
    }

    /// The color setting for one light, `None` where the vehicle has no such light.
    pub fn color_key(self, side: Side, mount: Mount) -> Option<SettingKey> {
        use SettingKey as K;
        let key = match (self, mount, side) {
            (Service::Police, Mount::Front, Side::Left) => K::PoliceLeft,
            (Service::Police, Mount::Front, Side::Right) => K::PoliceRight,
            (Service::Fire, Mount::Front, Side::Left) => K::FireLeft,
            (Service::Fire, Mount::Front, Side::Right) => K::FireRight,
            (Service::Fire, Mount::Rear, Side::Left) => K::FireLeftRear,
            (Service::Fire, Mount::Rear, Side::Right) => K::FireRightRear,
            (Service::Ambulance, Mount::Front, Side::Left) => K::AmbulanceLeft,
            (Service::Ambulance, Mount::Front, Side::Right) => K::AmbulanceRight,
            (Service::Ambulance, Mount::Rear, Side::Left) => K::AmbulanceLeftRear,
            (Service::Ambulance, Mount::Rear, Side::Right) => K::AmbulanceRightRear,
            (Service::Rotary, Mount::Front, Side::Left) => K::SnowPlowLeft,
            (Service::Rotary, Mount::Front, Side::Right) => K::SnowPlowRight,
            (Service::Police | Service::Rotary, Mount::Rear, _) => return None,
        };
        Some(key)
    }
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the scene effect name for one light, or `None` if the vehicle has
/// no light at that position.
pub fn effect_name(service: Service, side: Side, mount: Mount) -> Option<String> {
    let vehicle = match service {
        Service::Police => "Police Car",
        Service::Fire => "Fire Truck",
        Service::Ambulance => "Ambulance",
        Service::Rotary => {
            return match mount {
                Mount::Front => Some(match side {
                    Side::Left => "Snowplow Light 1".to_string(),
                    Side::Right => "Snowplow Light 2".to_string(),
                }),
                Mount::Rear => None,
            };
        }
    };
    if mount == Mount::Rear && !service.has_rear() {
        return None;
    }
    let suffix = match mount {
        Mount::Front => "",
        Mount::Rear => "2",
    };
    Some(format!("{vehicle} Light {}{suffix}", side.label()))
}

/// Every effect name the mod may touch, front lights first.
pub fn all_effect_names() -> Vec<String> {
    let mut names = Vec::new();
    for mount in [Mount::Front, Mount::Rear] {
        for service in Service::ALL {
            for side in Side::ALL {
                if let Some(name) = effect_name(service, side, mount) {
                    names.push(name);
                }
            }
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_effect_names() {
        assert_eq!(
            effect_name(Service::Police, Side::Left, Mount::Front).as_deref(),
            Some("Police Car Light Left")
        );
        assert_eq!(
            effect_name(Service::Fire, Side::Right, Mount::Front).as_deref(),
            Some("Fire Truck Light Right")
        );
    }

    #[test]
    fn test_rear_effect_names_have_suffix_two() {
        assert_eq!(
            effect_name(Service::Ambulance, Side::Left, Mount::Rear).as_deref(),
            Some("Ambulance Light Left2")
        );
        assert_eq!(
            effect_name(Service::Fire, Side::Right, Mount::Rear).as_deref(),
            Some("Fire Truck Light Right2")
        );
    }

    #[test]
    fn test_police_has_no_rear_effect() {
        assert_eq!(effect_name(Service::Police, Side::Left, Mount::Rear), None);
        assert_eq!(effect_name(Service::Police, Side::Right, Mount::Rear), None);
    }

    #[test]
    fn test_plow_uses_numbered_names_and_has_no_rear() {
        assert_eq!(
            effect_name(Service::Rotary, Side::Left, Mount::Front).as_deref(),
            Some("Snowplow Light 1")
        );
        assert_eq!(
            effect_name(Service::Rotary, Side::Right, Mount::Front).as_deref(),
            Some("Snowplow Light 2")
        );
        assert_eq!(effect_name(Service::Rotary, Side::Left, Mount::Rear), None);
    }

    #[test]
    fn test_all_effect_names_lists_twelve_unique_effects() {
        let names = all_effect_names();
        assert_eq!(names.len(), 12);
        let mut deduped = names.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 12);
    }

    #[test]
    fn test_color_key_matches_light_existence() {
        for service in Service::ALL {
            for side in Side::ALL {
                for mount in [Mount::Front, Mount::Rear] {
                    assert_eq!(
                        service.color_key(side, mount).is_some(),
                        effect_name(service, side, mount).is_some(),
                        "{service:?} {side:?} {mount:?}"
                    );
                }
            }
        }
    }
}
