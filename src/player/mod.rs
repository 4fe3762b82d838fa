//! Player controller module
//!
//! This module binds the control widgets to a media element: the controller
//! itself, the event bus it subscribes to, and the pure helpers for time
//! labels and volume handling.

mod controller;
pub mod events;
pub mod time;
pub mod volume;

pub use controller::PlayerController;
pub use events::{EventBus, EventKind, PlayerEvent, Subscription, Target};
pub use time::display_time;
pub use volume::{snap_volume, VolumeIcon};
