//! Media element abstraction for player-controls
//!
//! The control surface never decodes or renders anything itself. It drives a
//! media element through this trait and reads its timing and volume back.

pub mod headless;

pub use headless::HeadlessMedia;

/// Media element trait defining the playback surface the controls bind to
pub trait MediaElement {
    /// Start or resume playback
    fn play(&mut self);

    /// Pause playback
    fn pause(&mut self);

    /// Whether playback is currently paused
    fn paused(&self) -> bool;

    /// Current position in seconds
    fn current_time(&self) -> f64;

    /// Seek to a position in seconds
    fn set_current_time(&mut self, time: f64);

    /// Media duration in seconds
    ///
    /// NaN until metadata has loaded.
    fn duration(&self) -> f64;

    /// Volume level (0.0 to 1.0)
    fn volume(&self) -> f64;

    /// Set volume level (0.0 to 1.0)
    fn set_volume(&mut self, volume: f64);

    /// Playback speed multiplier (1.0 = normal)
    fn playback_rate(&self) -> f64;

    /// Set playback speed multiplier
    fn set_playback_rate(&mut self, rate: f64);
}

/// Derived playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum PlaybackState {
    /// Currently playing
    Playing,

    /// Playback paused
    Paused,
}

impl PlaybackState {
    /// Read the playback state off a media element
    pub fn of(media: &dyn MediaElement) -> Self {
        if media.paused() {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        }
    }
}
