use std::path::PathBuf;

use serde::Deserialize;

use avproc_types::{find_layout, DelayUnit, DeviceType, ProcessorDefaults};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
    #[serde(default)]
    runtime: RuntimeConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    layout: Option<String>,
    delay_unit: Option<String>,
    device: Option<String>,
}

#[derive(Deserialize, Default)]
struct RuntimeConfig {
    store_path: Option<PathBuf>,
}

pub struct Config {
    defaults: DefaultsConfig,
    runtime: RuntimeConfig,
}

impl Config {
    pub fn load() -> Self {
        let mut base: ConfigFile =
            toml::from_str(DEFAULT_CONFIG).expect("Failed to parse embedded config.toml");

        if let Some(path) = user_config_path() {
            if path.exists() {
                match std::fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => {
                            merge_defaults(&mut base.defaults, user.defaults);
                            merge_runtime(&mut base.runtime, user.runtime);
                        }
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
            runtime: base.runtime,
        }
    }

    /// Initial settings for a fresh state. Keys that are missing, or that
    /// name an unknown layout/unit/device, fall back to the built-ins.
    pub fn defaults(&self) -> ProcessorDefaults {
        let fallback = ProcessorDefaults::default();
        ProcessorDefaults {
            layout: self
                .defaults
                .layout
                .clone()
                .filter(|label| find_layout(label).is_some())
                .unwrap_or(fallback.layout),
            delay_unit: self
                .defaults
                .delay_unit
                .as_deref()
                .and_then(DelayUnit::from_name)
                .unwrap_or(fallback.delay_unit),
            device: self
                .defaults
                .device
                .as_deref()
                .and_then(DeviceType::from_name)
                .unwrap_or(fallback.device),
        }
    }

    /// Location of the version store.
    pub fn store_path(&self) -> PathBuf {
        self.runtime
            .store_path
            .clone()
            .unwrap_or_else(default_store_path)
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("avproc").join("config.toml"))
}

/// Default path for the version store.
pub fn default_store_path() -> PathBuf {
    if let Some(dir) = dirs::data_dir() {
        dir.join("avproc").join("settings.sqlite")
    } else {
        PathBuf::from("settings.sqlite")
    }
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.layout.is_some() {
        base.layout = user.layout;
    }
    if user.delay_unit.is_some() {
        base.delay_unit = user.delay_unit;
    }
    if user.device.is_some() {
        base.device = user.device;
    }
}

fn merge_runtime(base: &mut RuntimeConfig, user: RuntimeConfig) {
    if user.store_path.is_some() {
        base.store_path = user.store_path;
    }
}
