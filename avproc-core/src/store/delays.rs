//! Distance-to-delay resolution, performed once at save time.
//!
//! A speaker farther from the listening position needs less delay, so each
//! delay is computed relative to the farthest speaker. This is the only
//! place a distance becomes milliseconds; the console itself never
//! back-converts.

use avproc_types::{DelayUnit, Speaker};

const METERS_PER_MS: f32 = 0.3430;
const FEET_PER_MS: f32 = 1.1164;

fn distance(speaker: &Speaker, unit: DelayUnit) -> f32 {
    match unit {
        DelayUnit::Ms => speaker.delay,
        DelayUnit::Feet => speaker.distance_in_feet.unwrap_or(0.0),
        DelayUnit::Meters => speaker.distance_in_meters.unwrap_or(0.0),
    }
}

fn distance_to_delay(largest_distance: f32, current_distance: f32, distance_per_ms: f32) -> f32 {
    (largest_distance - current_distance) / distance_per_ms
}

/// Resolve each speaker's distance into the millisecond delay the device
/// needs. Millisecond input passes through unchanged.
pub fn update_speaker_delays(unit: DelayUnit, speakers: &[Speaker]) -> Vec<Speaker> {
    let largest = match unit {
        DelayUnit::Ms => 0.0,
        _ => speakers
            .iter()
            .map(|s| distance(s, unit))
            .fold(0.0_f32, f32::max),
    };
    speakers
        .iter()
        .map(|speaker| {
            let delay = match unit {
                DelayUnit::Ms => speaker.delay,
                DelayUnit::Feet => {
                    distance_to_delay(largest, distance(speaker, unit), FEET_PER_MS)
                }
                DelayUnit::Meters => {
                    distance_to_delay(largest, distance(speaker, unit), METERS_PER_MS)
                }
            };
            Speaker {
                delay,
                distance_in_feet: None,
                distance_in_meters: None,
                ..speaker.clone()
            }
        })
        .collect()
}
