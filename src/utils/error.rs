//! Error types for the player control surface
//!
//! Control handlers never fail; these errors cover the edges of the crate:
//! configuration loading, session scripts, the speed selector and the
//! fullscreen host. We use thiserror for the library error type and anyhow
//! in the binary.

use thiserror::Error;

/// Main error type for player-controls
#[derive(Error, Debug)]
pub enum ControlsError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed session script command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Speed selector was asked for a value it does not offer
    #[error("Unsupported playback speed: {0}")]
    UnsupportedSpeed(f64),

    /// Fullscreen host rejected a request or exit
    #[error("Fullscreen error: {0}")]
    Fullscreen(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),
}

/// Convenience type alias for Results in player-controls
pub type Result<T> = std::result::Result<T, ControlsError>;

/// Extension trait for converting other errors to ControlsError
pub trait IntoControlsError<T> {
    /// Convert this error into a ControlsError with the given context
    fn config_err(self, context: &str) -> Result<T>;
    fn command_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoControlsError<T> for std::result::Result<T, E> {
    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ControlsError::Config(format!("{}: {}", context, e)))
    }

    fn command_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ControlsError::InvalidCommand(format!("{}: {}", context, e)))
    }
}
