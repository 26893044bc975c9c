//! Configuration management.
//!
//! Loads preferences from a TOML file in the platform config directory.
//! The file is only ever read; a missing or broken file means defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::estimate::{ChronoFormatter, DEFAULT_DATE_PATTERN};
use crate::units::{SizeUnit, SpeedUnit};

/// Main configuration structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preferences: PreferencesConfig,
    pub units: UnitsConfig,
    pub format: FormatConfig,
}

/// User interface preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// Theme name to use for the TUI.
    pub theme: String,

    /// Key binding preset name.
    pub key_preset: String,
}

/// Initial unit selections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitsConfig {
    /// Size unit label (`B`, `KB`, `MB`, `GB`, `TB`).
    pub size: String,

    /// Speed unit label (`bs`, `Kbs`, `Mbs`, `Gbs`, `Bs`, `KBs`, `MBs`, `GBs`).
    pub speed: String,
}

/// Output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// strftime pattern for the completion date.
    pub date: String,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            theme: "tokyo-night".to_string(),
            key_preset: "vim".to_string(),
        }
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            size: SizeUnit::default().label().to_string(),
            speed: SpeedUnit::default().label().to_string(),
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            date: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

impl UnitsConfig {
    /// Configured size unit, or the default if the label is unknown
    pub fn size_unit(&self) -> SizeUnit {
        SizeUnit::from_label(&self.size).unwrap_or_else(|| {
            tracing::warn!("Unknown size unit {:?} in config, using default", self.size);
            SizeUnit::default()
        })
    }

    /// Configured speed unit, or the default if the label is unknown
    pub fn speed_unit(&self) -> SpeedUnit {
        SpeedUnit::from_label(&self.speed).unwrap_or_else(|| {
            tracing::warn!("Unknown speed unit {:?} in config, using default", self.speed);
            SpeedUnit::default()
        })
    }
}

impl FormatConfig {
    /// Formatter for the configured date pattern, or the default pattern
    /// if chrono rejects it
    pub fn formatter(&self) -> ChronoFormatter {
        ChronoFormatter::with_pattern(&self.date).unwrap_or_else(|e| {
            tracing::warn!("{}. Using default date pattern.", e);
            ChronoFormatter::default()
        })
    }
}

impl Config {
    /// Returns the default configuration file path using XDG conventions.
    ///
    /// Returns None if the project directories cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "eta").map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Loads configuration from a specific path.
    ///
    /// If path is None or the file doesn't exist, returns default configuration.
    /// Read and parse errors are logged and also fall back to defaults.
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let Some(config_path) = path else {
            return Self::default();
        };

        match fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config file at {}: {}. Using defaults.",
                        config_path.display(),
                        e
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file at {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
