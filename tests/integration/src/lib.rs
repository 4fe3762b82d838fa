//! Integration test utilities for player-controls
//!
//! This module provides common utilities for integration testing including:
//! - A mockall media element
//! - Controller fixtures over the headless media element
//! - Script files on disk

use anyhow::Result;
use mockall::mock;
use player_controls::fullscreen::{FullscreenApi, SimulatedFullscreenHost};
use player_controls::media::{HeadlessMedia, MediaElement};
use player_controls::player::{EventBus, PlayerController};
use player_controls::utils::config::{ControlsConfig, SpeedConfig};
use player_controls::widgets::{ControlWidgets, WidgetLayout};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

mock! {
    pub Media {}

    impl MediaElement for Media {
        fn play(&mut self);
        fn pause(&mut self);
        fn paused(&self) -> bool;
        fn current_time(&self) -> f64;
        fn set_current_time(&mut self, time: f64);
        fn duration(&self) -> f64;
        fn volume(&self) -> f64;
        fn set_volume(&mut self, volume: f64);
        fn playback_rate(&self) -> f64;
        fn set_playback_rate(&mut self, rate: f64);
    }
}

pub const PROGRESS_WIDTH: f64 = 500.0;
pub const VOLUME_WIDTH: f64 = 80.0;

pub fn layout() -> WidgetLayout {
    WidgetLayout {
        progress_width: PROGRESS_WIDTH,
        volume_width: VOLUME_WIDTH,
    }
}

/// Controller fixture with a bus and an observable fullscreen host
pub struct ControllerFixture<M: MediaElement> {
    pub bus: EventBus,
    pub host: SimulatedFullscreenHost,
    pub controller: PlayerController<M>,
}

impl<M: MediaElement> ControllerFixture<M> {
    pub fn with_media(media: M, apis: Vec<FullscreenApi>) -> Self {
        let bus = EventBus::new();
        let host = SimulatedFullscreenHost::new(apis);
        let controller = PlayerController::new(
            media,
            ControlWidgets::new(layout(), &SpeedConfig::default()),
            Box::new(host.clone()),
            &bus,
            ControlsConfig::default(),
        );

        Self {
            bus,
            host,
            controller,
        }
    }
}

impl ControllerFixture<HeadlessMedia> {
    /// Headless media with known duration and every fullscreen API available
    pub fn headless(duration: f64) -> Self {
        Self::with_media(
            HeadlessMedia::with_duration(duration),
            FullscreenApi::DETECTION_ORDER.to_vec(),
        )
    }
}

/// Script files written to a temporary directory
pub struct ScriptFixture {
    pub temp_dir: TempDir,
}

impl ScriptFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    /// Write a script file and return its path
    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
