//! Speaker records and the speaker-list state.

use serde::{Deserialize, Serialize};

/// One output channel of the processor.
///
/// `delay` is the canonical millisecond delay. When the console is working
/// in a distance unit, the matching `distance_in_*` fields hold the
/// authoritative value instead and `delay` is zeroed; the store resolves
/// distances back into milliseconds at save time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    /// Role name, unique within a layout (e.g. "Left", "Subwoofer 1").
    pub speaker: String,
    /// High-pass cutoff in Hz; `None` means the crossover is disabled.
    pub crossover: Option<i32>,
    /// Delay in milliseconds.
    pub delay: f32,
    /// Trim in dB.
    pub gain: f32,
    pub is_subwoofer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_in_feet: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_in_meters: Option<f32>,
}

impl Speaker {
    /// A role synthesized during layout reconciliation: crossover disabled,
    /// no delay, no trim.
    pub fn with_defaults(role: &str, is_subwoofer: bool) -> Self {
        Speaker {
            speaker: role.to_string(),
            crossover: None,
            delay: 0.0,
            gain: 0.0,
            is_subwoofer,
            distance_in_feet: None,
            distance_in_meters: None,
        }
    }
}

/// The speaker list plus the active layout label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeakerState {
    pub layout: String,
    pub speakers: Vec<Speaker>,
}

impl SpeakerState {
    pub fn speaker(&self, role: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.speaker == role)
    }

    pub fn speaker_mut(&mut self, role: &str) -> Option<&mut Speaker> {
        self.speakers.iter_mut().find(|s| s.speaker == role)
    }
}

/// Classify a speaker list as "<mains>.<subwoofers>". Order-independent.
pub fn derive_layout(speakers: &[Speaker]) -> String {
    let subs = speakers.iter().filter(|s| s.is_subwoofer).count();
    format!("{}.{}", speakers.len() - subs, subs)
}
