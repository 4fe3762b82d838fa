//! Integration tests for the player controller
//!
//! These tests verify the media calls the controller issues (against a mock
//! media element) and full event flows over the headless media element.

use mockall::predicate::eq;
use player_controls::fullscreen::simulated::FullscreenCall;
use player_controls::fullscreen::FullscreenApi;
use player_controls::media::{MediaElement, PlaybackState};
use player_controls::player::{PlayerEvent, Target};
use player_controls::widgets::{FULLSCREEN_CLASS, PAUSE_ICON, PLAY_ICON};
use player_controls_integration_tests::{ControllerFixture, MockMedia, PROGRESS_WIDTH, VOLUME_WIDTH};
use proptest::prelude::*;

#[test]
fn test_toggle_issues_exactly_one_call() {
    let mut media = MockMedia::new();
    media.expect_paused().times(1).return_const(true);
    media.expect_play().times(1).return_const(());
    media.expect_pause().never();

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.controller.toggle_play();
    assert!(fixture.controller.widgets().play_button.shows(PAUSE_ICON));
}

#[test]
fn test_toggle_pauses_when_playing() {
    let mut media = MockMedia::new();
    media.expect_paused().times(1).return_const(false);
    media.expect_pause().times(1).return_const(());
    media.expect_play().never();

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.controller.toggle_play();
    assert!(fixture.controller.widgets().play_button.shows(PLAY_ICON));
}

#[test]
fn test_seek_sets_fraction_of_duration() {
    let mut media = MockMedia::new();
    media.expect_duration().return_const(200.0);
    media
        .expect_set_current_time()
        .with(eq(50.0))
        .times(1)
        .return_const(());

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.bus.emit(PlayerEvent::click_at(Target::ProgressTrack, PROGRESS_WIDTH / 4.0));
    assert_eq!(fixture.controller.pump(), 1);
    assert_eq!(fixture.controller.widgets().progress.fill_percent, 25.0);
}

#[test]
fn test_seek_before_metadata_targets_zero() {
    let mut media = MockMedia::new();
    media.expect_duration().return_const(f64::NAN);
    media
        .expect_set_current_time()
        .with(eq(0.0))
        .times(1)
        .return_const(());

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.controller.set_progress(PROGRESS_WIDTH / 2.0);
}

#[test]
fn test_volume_click_snaps_before_applying() {
    let mut media = MockMedia::new();
    media
        .expect_set_volume()
        .with(eq(1.0))
        .times(1)
        .return_const(());

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.controller.change_volume(VOLUME_WIDTH * 0.95);
    assert_eq!(fixture.controller.last_volume(), 1.0);
}

#[test]
fn test_speed_change_applies_selected_rate() {
    let mut media = MockMedia::new();
    media
        .expect_set_playback_rate()
        .with(eq(0.75))
        .times(1)
        .return_const(());

    let mut fixture = ControllerFixture::with_media(media, Vec::new());
    fixture.controller.widgets_mut().speed.select(0.75).unwrap();
    fixture.bus.emit(PlayerEvent::Change {
        target: Target::SpeedSelector,
    });
    fixture.controller.pump();
}

#[test]
fn test_full_playback_flow() {
    let mut fixture = ControllerFixture::headless(30.0);

    fixture.bus.emit(PlayerEvent::Ready);
    fixture.bus.emit(PlayerEvent::click(Target::PlayButton));
    fixture.controller.pump();
    assert_eq!(fixture.controller.widgets().time_duration, "0:30");
    assert_eq!(fixture.controller.playback_state(), PlaybackState::Playing);

    for event in fixture.controller.media_mut().advance(12.0) {
        fixture.bus.emit(event);
    }
    fixture.controller.pump();
    assert_eq!(fixture.controller.widgets().time_elapsed, "0:12");
    assert_eq!(fixture.controller.widgets().progress.fill_percent, 40.0);

    for event in fixture.controller.media_mut().advance(60.0) {
        fixture.bus.emit(event);
    }
    fixture.controller.pump();
    let widgets = fixture.controller.widgets();
    assert!(widgets.play_button.shows(PLAY_ICON));
    assert_eq!(widgets.play_button.title, "Play");
    assert_eq!(widgets.progress.fill_percent, 100.0);
    assert_eq!(fixture.controller.playback_state(), PlaybackState::Paused);

    // Playing again after the end starts over
    fixture.bus.emit(PlayerEvent::click(Target::MediaSurface));
    fixture.controller.pump();
    assert_eq!(fixture.controller.media().current_time(), 0.0);
    assert!(fixture.controller.widgets().play_button.shows(PAUSE_ICON));
}

#[test]
fn test_fullscreen_round_trip_through_bus() {
    let mut fixture = ControllerFixture::headless(30.0);

    fixture.bus.emit(PlayerEvent::click(Target::FullscreenButton));
    fixture.bus.emit(PlayerEvent::click(Target::FullscreenButton));
    assert_eq!(fixture.controller.pump(), 2);

    assert!(!fixture.controller.is_fullscreen());
    assert!(!fixture.controller.widgets().media_surface.contains(FULLSCREEN_CLASS));
    assert_eq!(
        fixture.host.calls(),
        vec![
            FullscreenCall::Request(FullscreenApi::Standard),
            FullscreenCall::Exit(FullscreenApi::Standard),
        ]
    );
}

#[test]
fn test_teardown_stops_delivery() {
    let fixture = ControllerFixture::headless(30.0);
    assert_eq!(fixture.bus.subscriber_count(), 1);

    let ControllerFixture { bus, controller, .. } = fixture;
    drop(controller);
    assert_eq!(bus.subscriber_count(), 0);
    assert_eq!(bus.emit(PlayerEvent::Ended), 0);
}

proptest! {
    #[test]
    fn two_toggles_return_to_paused(duration in 1.0f64..10_000.0) {
        let mut fixture = ControllerFixture::headless(duration);
        fixture.controller.toggle_play();
        fixture.controller.toggle_play();

        prop_assert!(fixture.controller.media().paused());
        prop_assert!(fixture.controller.widgets().play_button.shows(PLAY_ICON));
    }

    #[test]
    fn ended_always_shows_play(toggles in 0usize..5) {
        let mut fixture = ControllerFixture::headless(60.0);
        for _ in 0..toggles {
            fixture.controller.toggle_play();
        }
        fixture.controller.handle(PlayerEvent::Ended);
        prop_assert!(fixture.controller.widgets().play_button.shows(PLAY_ICON));
        prop_assert!(!fixture.controller.widgets().play_button.shows(PAUSE_ICON));
    }

    #[test]
    fn volume_clicks_are_idempotent(offset in 0.0f64..=VOLUME_WIDTH) {
        let mut fixture = ControllerFixture::headless(60.0);
        fixture.controller.change_volume(offset);
        let first = fixture.controller.media().volume();
        let widgets = fixture.controller.widgets().clone();

        fixture.controller.change_volume(offset);
        prop_assert_eq!(fixture.controller.media().volume(), first);
        prop_assert_eq!(fixture.controller.widgets(), &widgets);
    }
}
