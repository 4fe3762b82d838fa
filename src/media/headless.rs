//! In-memory media element
//!
//! Keeps playback position, volume and rate without any decoding, and turns
//! elapsed wall time into the lifecycle notifications a real media element
//! would fire.

use crate::media::MediaElement;
use crate::player::PlayerEvent;
use log::debug;

/// Headless media element driven by explicit time steps
#[derive(Debug, Clone)]
pub struct HeadlessMedia {
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
    playback_rate: f64,
    ended: bool,

    /// Notifications raised by setters, waiting to be published
    pending: Vec<PlayerEvent>,
}

impl Default for HeadlessMedia {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadlessMedia {
    /// Create a paused element with no metadata
    pub fn new() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
            playback_rate: 1.0,
            ended: false,
            pending: Vec::new(),
        }
    }

    /// Create an element whose metadata is already known
    pub fn with_duration(duration: f64) -> Self {
        let mut media = Self::new();
        media.load_metadata(duration);
        media
    }

    /// Load metadata, resetting the position
    ///
    /// Returns the ready-to-play notification.
    pub fn load_metadata(&mut self, duration: f64) -> PlayerEvent {
        self.duration = duration;
        self.current_time = 0.0;
        self.ended = false;
        debug!("Metadata loaded: duration {:.3}s", duration);
        PlayerEvent::Ready
    }

    /// Whether playback reached the end
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Drain notifications raised by seeking
    pub fn take_notifications(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Advance playback by `secs` of wall time
    ///
    /// Returns the notifications produced: a position update while playing,
    /// followed by `Ended` when the end is reached (which also pauses).
    pub fn advance(&mut self, secs: f64) -> Vec<PlayerEvent> {
        if self.paused || !self.duration.is_finite() || secs <= 0.0 {
            return Vec::new();
        }

        self.current_time += secs * self.playback_rate;

        let mut events = Vec::with_capacity(2);
        if self.current_time >= self.duration {
            self.current_time = self.duration;
            self.paused = true;
            self.ended = true;
            events.push(PlayerEvent::PositionUpdate);
            events.push(PlayerEvent::Ended);
            debug!("End of media reached");
        } else {
            events.push(PlayerEvent::PositionUpdate);
        }
        events
    }
}

impl MediaElement for HeadlessMedia {
    fn play(&mut self) {
        if self.ended {
            self.current_time = 0.0;
            self.ended = false;
        }
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, time: f64) {
        let upper = if self.duration.is_finite() { self.duration } else { 0.0 };
        self.current_time = time.clamp(0.0, upper);
        self.ended = false;
        self.pending.push(PlayerEvent::PositionUpdate);
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }
}
