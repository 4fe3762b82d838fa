//! Scripted control sessions
//!
//! A `Session` wires a headless media element, the widget model, an event
//! bus and a controller together, then replays interaction scripts against
//! them. Every command becomes the same events a real front end would emit.

pub mod script;

pub use script::Command;

use crate::fullscreen::FullscreenHost;
use crate::media::{HeadlessMedia, MediaElement, PlaybackState};
use crate::player::{EventBus, PlayerController, PlayerEvent, Target};
use crate::utils::config::Config;
use crate::utils::error::{IntoControlsError, Result};
use crate::widgets::{ControlWidgets, WidgetLayout};
use log::debug;
use serde::Serialize;
use std::io::{BufRead, Write};

/// How `show` renders the control surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Point-in-time view of the media and its controls
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub state: PlaybackState,
    pub current_time: f64,
    pub duration: f64,
    pub volume: f64,
    pub playback_rate: f64,
    pub fullscreen: bool,
    pub widgets: &'a ControlWidgets,
}

/// Headless player driven by scripted commands
pub struct Session {
    bus: EventBus,
    controller: PlayerController<HeadlessMedia>,
    format: OutputFormat,
}

impl Session {
    pub fn new(
        config: &Config,
        layout: WidgetLayout,
        host: Box<dyn FullscreenHost>,
        format: OutputFormat,
    ) -> Self {
        let bus = EventBus::new();
        let widgets = ControlWidgets::new(layout, &config.speed);
        let controller = PlayerController::new(
            HeadlessMedia::new(),
            widgets,
            host,
            &bus,
            config.controls.clone(),
        );

        Self {
            bus,
            controller,
            format,
        }
    }

    pub fn controller(&self) -> &PlayerController<HeadlessMedia> {
        &self.controller
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let media = self.controller.media();
        Snapshot {
            state: self.controller.playback_state(),
            current_time: media.current_time(),
            duration: media.duration(),
            volume: media.volume(),
            playback_rate: media.playback_rate(),
            fullscreen: self.controller.is_fullscreen(),
            widgets: self.controller.widgets(),
        }
    }

    /// Render the control surface in the session's output format
    pub fn render(&self) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.controller.widgets().to_string()),
            OutputFormat::Json => {
                serde_json::to_string(&self.snapshot()).command_err("Failed to render snapshot")
            }
        }
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.bus.emit(event);
        self.controller.pump();

        // Seeks made by handlers raise their own position updates
        loop {
            let pending = self.controller.media_mut().take_notifications();
            if pending.is_empty() {
                break;
            }
            for event in pending {
                self.bus.emit(event);
            }
            self.controller.pump();
        }
    }

    /// Apply one command; returns the rendering for `show`
    pub fn apply(&mut self, command: Command) -> Result<Option<String>> {
        debug!("Applying {:?}", command);
        match command {
            Command::Load(duration) => {
                let ready = self.controller.media_mut().load_metadata(duration);
                self.emit(ready);
            }
            Command::Play => self.emit(PlayerEvent::click(Target::PlayButton)),
            Command::ClickVideo => self.emit(PlayerEvent::click(Target::MediaSurface)),
            Command::Tick(secs) => {
                let events = self.controller.media_mut().advance(secs);
                for event in events {
                    self.emit(event);
                }
            }
            Command::Seek(offset) => {
                self.emit(PlayerEvent::click_at(Target::ProgressTrack, offset))
            }
            Command::Volume(offset) => {
                self.emit(PlayerEvent::click_at(Target::VolumeTrack, offset))
            }
            Command::Mute => self.emit(PlayerEvent::click(Target::VolumeIcon)),
            Command::Speed(rate) => {
                self.controller.widgets_mut().speed.select(rate)?;
                self.emit(PlayerEvent::Change {
                    target: Target::SpeedSelector,
                });
            }
            Command::Fullscreen => self.emit(PlayerEvent::click(Target::FullscreenButton)),
            Command::Show => return self.render().map(Some),
        }
        Ok(None)
    }

    /// Run a whole script, writing every `show` rendering to `writer`
    ///
    /// Returns the number of commands applied.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<usize> {
        let mut applied = 0;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let context = format!("line {}", index + 1);

            let Some(command) = Command::parse_line(&line).command_err(&context)? else {
                continue;
            };
            if let Some(output) = self.apply(command)? {
                writeln!(writer, "{}", output)?;
            }
            applied += 1;
        }
        writer.flush()?;
        Ok(applied)
    }
}
