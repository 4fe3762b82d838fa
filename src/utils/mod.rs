//! Utility module for player-controls
//!
//! This module provides common utilities used throughout the crate:
//! - Error handling with custom error types
//! - Configuration management
//! - Small numeric helpers shared by the control handlers

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::{Config, ControlsConfig, GeneralConfig, SpeedConfig};
pub use error::{ControlsError, IntoControlsError, Result};

/// Initialize the application configuration
///
/// Loads configuration from defaults, the user configuration file and
/// environment variables, or from `path` when one is given.
pub fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Replace NaN and infinities with zero
///
/// Media timing is unknown before metadata loads; the visual layer must never
/// see those values.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Fraction of `part` over `whole`, clamped to [0, 1]
///
/// A zero or unknown `whole` yields 0.
pub fn fraction(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    finite_or_zero(part / whole).clamp(0.0, 1.0)
}
