//! # Configuration Management
//!
//! Loads runtime settings from `sun-config.toml`: the sunrise/sunset
//! schedule fed to the widget and the display geometry of the preview.
//! A missing or invalid file falls back to built-in defaults so the demo
//! always has something to draw.

use crate::TimeOfDay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Errors from reading or writing the configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File could not be read or written
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    /// File contents are not valid configuration
    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("config encode: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Application configuration loaded from sun-config.toml
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Sunrise/sunset schedule
    pub schedule: ScheduleConfig,
    /// Display and preview configuration
    pub display: DisplayConfig,
}

/// The daylight window, as the hour/minute pairs a host screen would supply.
#[derive(Debug, Deserialize, Serialize)]
pub struct ScheduleConfig {
    pub sunrise_hour: u8,
    pub sunrise_minute: u8,
    pub sunset_hour: u8,
    pub sunset_minute: u8,
}

impl ScheduleConfig {
    pub fn sunrise(&self) -> TimeOfDay {
        TimeOfDay::new(self.sunrise_hour, self.sunrise_minute)
    }

    pub fn sunset(&self) -> TimeOfDay {
        TimeOfDay::new(self.sunset_hour, self.sunset_minute)
    }
}

/// Widget geometry and animation settings for the preview binary.
#[derive(Debug, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Widget width in pixels (and preview columns)
    pub width: u32,
    /// Inset on every edge in pixels
    pub padding: u32,
    /// Refresh sweep duration in milliseconds
    pub sweep_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schedule: ScheduleConfig {
                sunrise_hour: 6,
                sunrise_minute: 17,
                sunset_hour: 18,
                sunset_minute: 32,
            },
            display: DisplayConfig {
                width: 72,
                padding: 2,
                sweep_ms: 1200,
            },
        }
    }
}

/// Default configuration file name, looked up in the working directory.
const CONFIG_FILE: &str = "sun-config.toml";

impl Config {
    /// Load configuration from sun-config.toml, falling back to the default
    /// configuration if the file is missing or invalid.
    pub fn load() -> Self {
        Self::load_or_default(CONFIG_FILE)
    }

    /// Load from `path`, falling back to defaults with a note on stderr.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Parse(e)) => {
                eprintln!("Warning: invalid config file format: {e}");
                eprintln!("Using default configuration");
                Self::default()
            }
            Err(_) => {
                eprintln!("Info: no config file found, using default configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from the specified path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save the current configuration to sun-config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(CONFIG_FILE, contents)?;
        Ok(())
    }
}
