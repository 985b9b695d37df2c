//! Delay units and distance conversion.

use serde::{Deserialize, Serialize};

const METERS_PER_FOOT: f32 = 0.3048;

/// How delay values are entered in the console. A process-wide preference,
/// not per-speaker. Serialized as the store's TEXT column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DelayUnit {
    Ms,
    #[default]
    Feet,
    Meters,
}

impl DelayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DelayUnit::Ms => "MS",
            DelayUnit::Feet => "FEET",
            DelayUnit::Meters => "METERS",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ms" => Some(DelayUnit::Ms),
            "feet" => Some(DelayUnit::Feet),
            "meters" => Some(DelayUnit::Meters),
            _ => None,
        }
    }
}

/// The active delay-unit preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayState {
    pub unit: DelayUnit,
}

pub fn feet_to_meters(feet: f32) -> f32 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f32) -> f32 {
    meters / METERS_PER_FOOT
}

/// Result of interpreting a delay edit under the active unit, merged into
/// a speaker's delay fields by the speaker reducer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelayConversion {
    pub delay: f32,
    pub distance_in_feet: Option<f32>,
    pub distance_in_meters: Option<f32>,
}

/// Interpret `value` under `unit`.
///
/// Distance units zero the millisecond field and fill in both distance
/// figures; milliseconds clear the cached distances instead of
/// back-converting them. Distance only becomes a concrete delay in the
/// store, at save time.
pub fn convert_delay(unit: DelayUnit, value: f32) -> DelayConversion {
    match unit {
        DelayUnit::Feet => DelayConversion {
            delay: 0.0,
            distance_in_feet: Some(value),
            distance_in_meters: Some(feet_to_meters(value)),
        },
        DelayUnit::Meters => DelayConversion {
            delay: 0.0,
            distance_in_feet: Some(meters_to_feet(value)),
            distance_in_meters: Some(value),
        },
        DelayUnit::Ms => DelayConversion {
            delay: value,
            distance_in_feet: None,
            distance_in_meters: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_to_meters_round_trips() {
        for x in [0.0_f32, 0.5, 3.0, 12.25, 1000.0] {
            assert!((meters_to_feet(feet_to_meters(x)) - x).abs() < 1e-4);
        }
    }

    #[test]
    fn feet_fills_both_distances_and_zeroes_the_delay() {
        let conv = convert_delay(DelayUnit::Feet, 3.0);
        assert_eq!(conv.delay, 0.0);
        assert_eq!(conv.distance_in_feet, Some(3.0));
        assert!((conv.distance_in_meters.unwrap() - 0.9144).abs() < 1e-5);
    }

    #[test]
    fn meters_fills_both_distances_and_zeroes_the_delay() {
        let conv = convert_delay(DelayUnit::Meters, 3.0);
        assert_eq!(conv.delay, 0.0);
        assert_eq!(conv.distance_in_meters, Some(3.0));
        assert!((conv.distance_in_feet.unwrap() - 9.84252).abs() < 1e-4);
    }

    #[test]
    fn milliseconds_clear_cached_distances() {
        let conv = convert_delay(DelayUnit::Ms, 3.0);
        assert_eq!(conv.delay, 3.0);
        assert_eq!(conv.distance_in_feet, None);
        assert_eq!(conv.distance_in_meters, None);
    }

    #[test]
    fn names_round_trip() {
        for unit in [DelayUnit::Ms, DelayUnit::Feet, DelayUnit::Meters] {
            assert_eq!(DelayUnit::from_name(unit.as_str()), Some(unit));
        }
        assert_eq!(DelayUnit::from_name("feet"), Some(DelayUnit::Feet));
        assert_eq!(DelayUnit::from_name("furlongs"), None);
    }
}
