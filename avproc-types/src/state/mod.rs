pub mod delay;
pub mod device;
pub mod filter;
pub mod io;
pub mod speaker;
pub mod version;

pub use delay::*;
pub use device::*;
pub use filter::*;
pub use io::*;
pub use speaker::*;
pub use version::*;

use crate::layout::SPEAKER_LAYOUTS;

/// Initial settings used to seed a fresh [`AppState`], normally read from
/// the host's configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorDefaults {
    pub layout: String,
    pub delay_unit: DelayUnit,
    pub device: DeviceType,
}

impl Default for ProcessorDefaults {
    fn default() -> Self {
        ProcessorDefaults {
            layout: SPEAKER_LAYOUTS[0].label.to_string(),
            delay_unit: DelayUnit::default(),
            device: DeviceType::default(),
        }
    }
}

/// Complete console state: one struct per domain state machine.
///
/// Mutation goes through `reduce::reduce_action` (or the coordinating
/// dispatch layer in avproc-core); nothing here mutates itself.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub speakers: SpeakerState,
    pub filters: FilterState,
    pub versions: VersionState,
    pub delay: DelayState,
    pub device: DeviceState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed state with the configured layout label, delay unit, and device.
    /// The speaker and filter lists start empty; the host populates them by
    /// dispatching a layout selection or loading a saved version.
    pub fn new_with_defaults(defaults: &ProcessorDefaults) -> Self {
        AppState {
            speakers: SpeakerState {
                layout: defaults.layout.clone(),
                speakers: Vec::new(),
            },
            delay: DelayState {
                unit: defaults.delay_unit,
            },
            device: DeviceState {
                device: defaults.device,
            },
            ..Self::default()
        }
    }
}
