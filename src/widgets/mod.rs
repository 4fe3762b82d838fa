//! Control widget model
//!
//! Retained visual state of the control surface: icon classes and titles,
//! bar fills, time labels and the speed selector. The controller writes into
//! these; a front end reads them back to paint.

use crate::utils::config::SpeedConfig;
use crate::utils::error::{ControlsError, Result};
use serde::Serialize;
use std::fmt;

pub const PLAY_ICON: &str = "fa-play";
pub const PAUSE_ICON: &str = "fa-pause";
pub const VOLUME_UP_ICON: &str = "fa-volume-up";
pub const VOLUME_DOWN_ICON: &str = "fa-volume-down";
pub const VOLUME_MUTE_ICON: &str = "fa-volume-mute";
pub const ICON_FONT_CLASS: &str = "fas";
pub const FULLSCREEN_CLASS: &str = "video-fullscreen";

/// Ordered set of CSS-like classes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from class names, skipping duplicates
    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for class in classes {
            list.add(class);
        }
        list
    }

    /// Add a class if not present
    pub fn add(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.contains(&class) {
            self.0.push(class);
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    /// Replace `old` with `new` in place
    ///
    /// Returns false and leaves the list untouched when `old` is absent.
    pub fn replace(&mut self, old: &str, new: &str) -> bool {
        let Some(index) = self.0.iter().position(|c| c == old) else {
            return false;
        };
        if self.contains(new) {
            self.0.remove(index);
        } else {
            self.0[index] = new.to_string();
        }
        true
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Clickable icon with a tooltip title
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IconButton {
    pub classes: ClassList,
    pub title: String,
}

impl IconButton {
    pub fn new(classes: &[&str], title: &str) -> Self {
        Self {
            classes: ClassList::from_classes(classes.iter().copied()),
            title: title.to_string(),
        }
    }

    /// Whether the given icon class is currently shown
    pub fn shows(&self, icon: &str) -> bool {
        self.classes.contains(icon)
    }
}

/// Horizontal clickable track with a proportional fill
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    /// Track width in pixels
    pub width: f64,

    /// Fill width in percent of the track (0 to 100)
    pub fill_percent: f64,
}

impl Track {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            fill_percent: 0.0,
        }
    }

    /// Set the fill from a [0, 1] fraction
    pub fn set_fill_fraction(&mut self, fraction: f64) {
        self.fill_percent = fraction * 100.0;
    }

    /// Current fill as a [0, 1] fraction
    pub fn fill_fraction(&self) -> f64 {
        self.fill_percent / 100.0
    }
}

/// Discrete-choice playback speed selector
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedSelector {
    options: Vec<f64>,
    selected: f64,
}

impl SpeedSelector {
    pub fn new(config: &SpeedConfig) -> Self {
        Self {
            options: config.options.clone(),
            selected: config.default,
        }
    }

    pub fn options(&self) -> &[f64] {
        &self.options
    }

    pub fn selected(&self) -> f64 {
        self.selected
    }

    /// Select one of the offered rates
    pub fn select(&mut self, rate: f64) -> Result<()> {
        if !self.options.contains(&rate) {
            return Err(ControlsError::UnsupportedSpeed(rate));
        }
        self.selected = rate;
        Ok(())
    }
}

/// Layout parameters for the widget model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetLayout {
    pub progress_width: f64,
    pub volume_width: f64,
}

impl Default for WidgetLayout {
    fn default() -> Self {
        Self {
            progress_width: 640.0,
            volume_width: 100.0,
        }
    }
}

/// Every widget of one player surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlWidgets {
    pub play_button: IconButton,
    pub progress: Track,
    pub time_elapsed: String,
    pub time_duration: String,
    pub volume_icon: IconButton,
    pub volume: Track,
    pub speed: SpeedSelector,
    pub fullscreen_button: IconButton,
    pub media_surface: ClassList,
}

impl ControlWidgets {
    /// Widgets in their initial page state: paused, full volume, nothing loaded
    pub fn new(layout: WidgetLayout, speed: &SpeedConfig) -> Self {
        let mut volume = Track::new(layout.volume_width);
        volume.set_fill_fraction(1.0);

        Self {
            play_button: IconButton::new(&[ICON_FONT_CLASS, PLAY_ICON], "Play"),
            progress: Track::new(layout.progress_width),
            time_elapsed: "0:00".to_string(),
            time_duration: "0:00".to_string(),
            volume_icon: IconButton::new(&[ICON_FONT_CLASS, VOLUME_UP_ICON], "Mute"),
            volume,
            speed: SpeedSelector::new(speed),
            fullscreen_button: IconButton::new(&[ICON_FONT_CLASS, "fa-expand"], "Fullscreen"),
            media_surface: ClassList::from_classes(["video"]),
        }
    }
}

fn primary_icon(button: &IconButton) -> &str {
    button
        .classes
        .iter()
        .find(|c| c.starts_with("fa-"))
        .unwrap_or("-")
}

impl fmt::Display for ControlWidgets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} \"{}\"] {} / {} progress={:.1}% [{} \"{}\"] volume={:.1}% speed={}x",
            primary_icon(&self.play_button),
            self.play_button.title,
            self.time_elapsed,
            self.time_duration,
            self.progress.fill_percent,
            primary_icon(&self.volume_icon),
            self.volume_icon.title,
            self.volume.fill_percent,
            self.speed.selected(),
        )?;
        if self.media_surface.contains(FULLSCREEN_CLASS) {
            write!(f, " fullscreen")?;
        }
        Ok(())
    }
}
