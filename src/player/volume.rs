//! Volume snapping and icon selection

use crate::utils::config::ControlsConfig;
use crate::widgets::{VOLUME_DOWN_ICON, VOLUME_MUTE_ICON, VOLUME_UP_ICON};
use serde::Serialize;

/// Volume icon shown next to the volume track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolumeIcon {
    Up,
    Down,
    Mute,
}

impl VolumeIcon {
    /// Pick the icon for a volume level
    ///
    /// Above `loud_threshold` is loud, anything else above zero is quiet,
    /// and everything else is muted.
    pub fn for_volume(volume: f64, loud_threshold: f64) -> Self {
        if volume > loud_threshold {
            VolumeIcon::Up
        } else if volume > 0.0 {
            VolumeIcon::Down
        } else {
            VolumeIcon::Mute
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            VolumeIcon::Up => VOLUME_UP_ICON,
            VolumeIcon::Down => VOLUME_DOWN_ICON,
            VolumeIcon::Mute => VOLUME_MUTE_ICON,
        }
    }

    /// Tooltip: what clicking the icon will do
    pub fn title(self) -> &'static str {
        match self {
            VolumeIcon::Mute => "Unmute",
            VolumeIcon::Up | VolumeIcon::Down => "Mute",
        }
    }

    pub const ALL: [VolumeIcon; 3] = [VolumeIcon::Up, VolumeIcon::Down, VolumeIcon::Mute];
}

/// Snap a volume-track fraction into the dead zones at both ends
pub fn snap_volume(fraction: f64, controls: &ControlsConfig) -> f64 {
    if fraction < controls.mute_dead_zone {
        0.0
    } else if fraction > controls.full_dead_zone {
        1.0
    } else {
        fraction
    }
}
