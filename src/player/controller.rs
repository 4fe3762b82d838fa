//! Player controller implementation
//!
//! The `PlayerController` mirrors a media element's playback state into the
//! control widgets and turns widget interactions into media calls. Every
//! handler runs to completion on the calling thread.

use crate::fullscreen::{Fullscreen, FullscreenHost};
use crate::media::{MediaElement, PlaybackState};
use crate::player::events::{EventBus, EventKind, PlayerEvent, Subscription, Target};
use crate::player::time::display_time;
use crate::player::volume::{snap_volume, VolumeIcon};
use crate::utils::config::ControlsConfig;
use crate::utils::{finite_or_zero, fraction};
use crate::widgets::{ControlWidgets, FULLSCREEN_CLASS, ICON_FONT_CLASS, PAUSE_ICON, PLAY_ICON};
use log::{debug, info};

/// Controller binding one set of control widgets to one media element
pub struct PlayerController<M: MediaElement> {
    media: M,
    widgets: ControlWidgets,
    fullscreen: Fullscreen,
    controls: ControlsConfig,

    /// Volume to restore on unmute
    last_volume: f64,

    /// Optimistic fullscreen state; not reconciled with the host
    is_fullscreen: bool,

    subscription: Subscription,
}

impl<M: MediaElement> PlayerController<M> {
    /// Build a controller and subscribe it to every event kind on `bus`
    ///
    /// The fullscreen entry points are detected on `host` here, once.
    pub fn new(
        media: M,
        widgets: ControlWidgets,
        host: Box<dyn FullscreenHost>,
        bus: &EventBus,
        controls: ControlsConfig,
    ) -> Self {
        let subscription = bus.subscribe(&EventKind::ALL);

        Self {
            media,
            widgets,
            fullscreen: Fullscreen::resolve(host),
            last_volume: controls.initial_last_volume,
            controls,
            is_fullscreen: false,
            subscription,
        }
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn widgets(&self) -> &ControlWidgets {
        &self.widgets
    }

    pub fn widgets_mut(&mut self) -> &mut ControlWidgets {
        &mut self.widgets
    }

    pub fn last_volume(&self) -> f64 {
        self.last_volume
    }

    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    pub fn fullscreen(&self) -> &Fullscreen {
        &self.fullscreen
    }

    pub fn playback_state(&self) -> PlaybackState {
        PlaybackState::of(&self.media)
    }

    /// Tear down: unsubscribe and hand the collaborators back
    pub fn into_parts(self) -> (M, ControlWidgets, Box<dyn FullscreenHost>) {
        let Self {
            media,
            widgets,
            fullscreen,
            subscription,
            ..
        } = self;
        drop(subscription);
        (media, widgets, fullscreen.into_host())
    }

    /// Handle every queued event in arrival order
    ///
    /// Returns the number of events handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.subscription.try_next() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Route one event to its handler
    pub fn handle(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::Click { target, offset_x } => match target {
                Target::PlayButton | Target::MediaSurface => self.toggle_play(),
                Target::ProgressTrack => self.set_progress(offset_x),
                Target::VolumeIcon => self.toggle_mute(),
                Target::VolumeTrack => self.change_volume(offset_x),
                Target::FullscreenButton => self.toggle_fullscreen(),
                Target::SpeedSelector => debug!("Ignoring click on speed selector"),
            },
            PlayerEvent::Change {
                target: Target::SpeedSelector,
            } => self.change_speed(),
            PlayerEvent::Change { target } => debug!("Ignoring change on {:?}", target),
            PlayerEvent::PositionUpdate | PlayerEvent::Ready => self.update_progress(),
            PlayerEvent::Ended => self.show_play_icon(),
        }
    }

    // Play & pause

    pub fn show_play_icon(&mut self) {
        let button = &mut self.widgets.play_button;
        button.classes.replace(PAUSE_ICON, PLAY_ICON);
        button.title = "Play".to_string();
    }

    pub fn show_pause_icon(&mut self) {
        let button = &mut self.widgets.play_button;
        button.classes.replace(PLAY_ICON, PAUSE_ICON);
        button.title = "Pause".to_string();
    }

    /// Play when paused, pause otherwise
    pub fn toggle_play(&mut self) {
        if self.media.paused() {
            self.media.play();
            self.show_pause_icon();
            debug!("Playback started");
        } else {
            self.media.pause();
            self.show_play_icon();
            debug!("Playback paused");
        }
    }

    // Progress

    /// Refresh the progress fill and both time labels from the media
    pub fn update_progress(&mut self) {
        let current = self.media.current_time();
        let duration = self.media.duration();

        let percent = finite_or_zero(current / duration * 100.0).clamp(0.0, 100.0);
        self.widgets.progress.fill_percent = percent;
        self.widgets.time_elapsed = display_time(current, duration);
        self.widgets.time_duration = display_time(duration, duration);
    }

    /// Seek to the position clicked on the progress track
    ///
    /// The fill moves immediately, before the media reports the new position.
    pub fn set_progress(&mut self, offset_x: f64) {
        let f = fraction(offset_x, self.widgets.progress.width);
        self.widgets.progress.set_fill_fraction(f);

        let target = finite_or_zero(f * self.media.duration());
        self.media.set_current_time(target);
        debug!("Seek to {:.3}s ({:.1}%)", target, f * 100.0);
    }

    // Volume

    pub fn volume_mute(&mut self) {
        self.last_volume = self.media.volume();
        self.media.set_volume(0.0);
        self.widgets.volume.set_fill_fraction(0.0);
    }

    pub fn volume_up(&mut self) {
        self.media.set_volume(self.last_volume);
        self.widgets.volume.set_fill_fraction(self.last_volume);
    }

    /// Unmute at the minimal audible level
    pub fn volume_on_min(&mut self) {
        let level = self.controls.min_audible_volume;
        self.media.set_volume(level);
        self.last_volume = level;
        self.widgets.volume.set_fill_fraction(level);
    }

    /// Restore sound for `volume`: the remembered level when it is audible,
    /// the minimal level otherwise
    pub fn control_sound(&mut self, volume: f64) {
        if volume > 0.0 {
            self.volume_up();
        } else {
            self.volume_on_min();
        }
    }

    /// Show the single volume icon matching `volume`
    pub fn toggle_sound_icons(&mut self, volume: f64) {
        let icon = VolumeIcon::for_volume(volume, self.controls.loud_threshold);
        self.change_icon(icon);
    }

    fn change_icon(&mut self, icon: VolumeIcon) {
        let button = &mut self.widgets.volume_icon;
        button.classes.clear();
        button.classes.add(ICON_FONT_CLASS);
        button.classes.add(icon.class());
        button.title = icon.title().to_string();
    }

    pub fn toggle_mute(&mut self) {
        if self.media.volume() > 0.0 {
            self.volume_mute();
            self.change_icon(VolumeIcon::Mute);
            debug!("Muted, remembering volume {:.2}", self.last_volume);
        } else {
            self.control_sound(self.last_volume);
            // control_sound may have moved last_volume to the minimal level
            self.toggle_sound_icons(self.last_volume);
            debug!("Unmuted to {:.2}", self.media.volume());
        }
    }

    /// Set the volume from a click on the volume track
    pub fn change_volume(&mut self, offset_x: f64) {
        let raw = fraction(offset_x, self.widgets.volume.width);
        let volume = snap_volume(raw, &self.controls);

        self.widgets.volume.set_fill_fraction(volume);
        self.media.set_volume(volume);
        self.last_volume = volume;
        self.toggle_sound_icons(volume);
        debug!("Volume set to {:.2}", volume);
    }

    // Speed

    /// Apply the speed selector's current value
    pub fn change_speed(&mut self) {
        let rate = self.widgets.speed.selected();
        self.media.set_playback_rate(rate);
        info!("Playback speed set to {}x", rate);
    }

    // Fullscreen

    pub fn toggle_fullscreen(&mut self) {
        if !self.is_fullscreen {
            self.fullscreen.request();
            self.widgets.media_surface.add(FULLSCREEN_CLASS);
        } else {
            self.fullscreen.exit();
            self.widgets.media_surface.remove(FULLSCREEN_CLASS);
        }
        self.is_fullscreen = !self.is_fullscreen;
        info!("Fullscreen {}", if self.is_fullscreen { "on" } else { "off" });
    }
}
