//! Output device selection.

use serde::{Deserialize, Serialize};

/// The DAC/interface the processor drives. Part of every saved
/// configuration version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    OktoDac8,
    #[default]
    ToppingDm7,
    MotuMk5,
    Hdmi,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::OktoDac8 => "oktodac8",
            DeviceType::ToppingDm7 => "toppingdm7",
            DeviceType::MotuMk5 => "motumk5",
            DeviceType::Hdmi => "hdmi",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "oktodac8" => Some(DeviceType::OktoDac8),
            "toppingdm7" => Some(DeviceType::ToppingDm7),
            "motumk5" => Some(DeviceType::MotuMk5),
            "hdmi" => Some(DeviceType::Hdmi),
            _ => None,
        }
    }
}

/// The active output device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    pub device: DeviceType,
}
