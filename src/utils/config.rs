//! Configuration management for player-controls
//!
//! Configuration is read-only: it tunes the control surface thresholds and
//! the speed selector, and is never written back.

use crate::utils::error::{ControlsError, IntoControlsError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Volume and icon thresholds
    pub controls: ControlsConfig,

    /// Playback speed selector
    pub speed: SpeedConfig,

    /// General application settings
    pub general: GeneralConfig,
}

/// Volume control thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Level restored when unmuting with no remembered volume
    pub min_audible_volume: f64,

    /// Volume fractions below this snap to 0
    pub mute_dead_zone: f64,

    /// Volume fractions above this snap to 1
    pub full_dead_zone: f64,

    /// Volumes above this show the loud icon
    pub loud_threshold: f64,

    /// Remembered volume before any interaction
    pub initial_last_volume: f64,
}

/// Playback speed selector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Discrete rates offered by the selector
    pub options: Vec<f64>,

    /// Initially selected rate
    pub default: f64,
}

/// General application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            min_audible_volume: 0.15,
            mute_dead_zone: 0.1,
            full_dead_zone: 0.9,
            loud_threshold: 0.7,
            initial_last_volume: 1.0,
        }
    }
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            options: vec![0.5, 0.75, 1.0, 1.5, 2.0],
            default: 1.0,
        }
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from various sources
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. Default values
    /// 2. User config file (~/.config/player-controls/config.toml on Linux)
    /// 3. Environment variables (PLAYER_CONTROLS_* prefix)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(user_path) = Self::user_config_path() {
            if user_path.exists() {
                config = Self::from_file(&user_path)?;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from an explicit file, then apply environment overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file; missing keys keep their defaults
    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .config_err(&format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&contents).config_err("Failed to parse config file")
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Example: PLAYER_CONTROLS_MIN_VOLUME=0.2
        if let Some(volume) = lookup("PLAYER_CONTROLS_MIN_VOLUME") {
            self.controls.min_audible_volume = volume.parse().map_err(|_| {
                ControlsError::Config("Invalid PLAYER_CONTROLS_MIN_VOLUME".to_string())
            })?;
        }

        if let Some(speed) = lookup("PLAYER_CONTROLS_DEFAULT_SPEED") {
            self.speed.default = speed.parse().map_err(|_| {
                ControlsError::Config("Invalid PLAYER_CONTROLS_DEFAULT_SPEED".to_string())
            })?;
        }

        if let Some(log_level) = lookup("PLAYER_CONTROLS_LOG_LEVEL") {
            self.general.log_level = log_level;
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let c = &self.controls;
        let unit = 0.0..=1.0;

        for (name, value) in [
            ("min_audible_volume", c.min_audible_volume),
            ("mute_dead_zone", c.mute_dead_zone),
            ("full_dead_zone", c.full_dead_zone),
            ("loud_threshold", c.loud_threshold),
            ("initial_last_volume", c.initial_last_volume),
        ] {
            if !unit.contains(&value) {
                return Err(ControlsError::Config(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        if c.min_audible_volume == 0.0 {
            return Err(ControlsError::Config("min_audible_volume must be audible".to_string()));
        }

        if c.mute_dead_zone >= c.full_dead_zone {
            return Err(ControlsError::Config(
                "mute_dead_zone must be below full_dead_zone".to_string(),
            ));
        }

        if self.speed.options.is_empty() {
            return Err(ControlsError::Config("Speed options must not be empty".to_string()));
        }

        if self.speed.options.iter().any(|rate| !rate.is_finite() || *rate <= 0.0) {
            return Err(ControlsError::Config("Speed options must be positive".to_string()));
        }

        if !self.speed.options.contains(&self.speed.default) {
            return Err(ControlsError::Config(format!(
                "Default speed {} is not one of the options {:?}",
                self.speed.default, self.speed.options
            )));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.general.log_level.as_str()) {
            return Err(ControlsError::Config(format!(
                "Invalid log level '{}', must be one of: {:?}",
                self.general.log_level, valid_log_levels
            )));
        }

        Ok(())
    }

    /// Get user config file path
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("player-controls").join("config.toml"))
    }
}
