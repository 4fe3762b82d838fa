//! player-controls: a custom video player control surface
//!
//! Binds play/pause, scrub bar, volume, speed and fullscreen controls to a
//! media element's playback state.

pub mod fullscreen;
pub mod media;
pub mod player;
pub mod session;
pub mod utils;
pub mod widgets;

pub use fullscreen::{Fullscreen, FullscreenApi, FullscreenHost, SimulatedFullscreenHost};
pub use media::{HeadlessMedia, MediaElement, PlaybackState};
pub use player::{EventBus, EventKind, PlayerController, PlayerEvent, Target};
pub use utils::{Config, ControlsError, Result};
pub use widgets::{ControlWidgets, WidgetLayout};
