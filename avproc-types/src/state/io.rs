//! Wire records exchanged with the store and transport layers.

use serde::{Deserialize, Serialize};

use super::{DelayUnit, DeviceType, Filter, Speaker};

/// A complete saved configuration: everything needed to restore the
/// console and to program the device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPayload {
    pub speakers: Vec<Speaker>,
    pub filters: Vec<Filter>,
    pub selected_distance: DelayUnit,
    pub device: DeviceType,
}
