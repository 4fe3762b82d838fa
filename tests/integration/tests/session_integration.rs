//! Integration tests for scripted sessions and configuration files

use anyhow::Result;
use player_controls::fullscreen::{FullscreenApi, SimulatedFullscreenHost};
use player_controls::media::MediaElement;
use player_controls::session::{OutputFormat, Session};
use player_controls::utils::load_config;
use player_controls::ControlsError;
use player_controls_integration_tests::{layout, ScriptFixture};
use std::fs::File;
use std::io::BufReader;

#[test]
fn test_script_file_session() -> Result<()> {
    let fixture = ScriptFixture::new()?;
    let script = fixture.write(
        "session.txt",
        "load 125.5\n\
         play\n\
         tick 61.2\n\
         show\n\
         click video\n\
         volume 20\n\
         show\n",
    )?;

    let host = SimulatedFullscreenHost::new(vec![FullscreenApi::Moz]);
    let mut session = Session::new(
        &Default::default(),
        layout(),
        Box::new(host),
        OutputFormat::Text,
    );

    let mut out = Vec::new();
    let applied = session.run(BufReader::new(File::open(&script)?), &mut out)?;
    assert_eq!(applied, 7);

    let out = String::from_utf8(out)?;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    // 125.5s leaves a 500ms remainder, so labels round
    assert!(lines[0].starts_with("[fa-pause \"Pause\"] 1:01 / 2:06"));
    assert!(lines[1].starts_with("[fa-play \"Play\"] 1:01 / 2:06"));
    assert!(lines[1].contains("[fa-volume-down \"Mute\"] volume=25.0%"));
    Ok(())
}

#[test]
fn test_config_file_changes_speed_options() -> Result<()> {
    let fixture = ScriptFixture::new()?;
    let config_path = fixture.write(
        "config.toml",
        "[speed]\noptions = [1.0, 3.0]\ndefault = 1.0\n\n[controls]\nmin_audible_volume = 0.3\n",
    )?;
    let config = load_config(Some(config_path.as_path()))?;

    let host = SimulatedFullscreenHost::new(Vec::new());
    let mut session = Session::new(&config, layout(), Box::new(host), OutputFormat::Json);

    session.run("load 10\nspeed 3\nvolume 0\nmute\n".as_bytes(), Vec::new())?;
    let controller = session.controller();
    assert_eq!(controller.media().playback_rate(), 3.0);
    assert_eq!(controller.last_volume(), 0.3);

    let err = session.run("speed 1.5\n".as_bytes(), Vec::new()).unwrap_err();
    assert!(matches!(err, ControlsError::UnsupportedSpeed(_)));
    Ok(())
}

#[test]
fn test_invalid_config_file_is_rejected() -> Result<()> {
    let fixture = ScriptFixture::new()?;
    let config_path = fixture.write(
        "config.toml",
        "[controls]\nmute_dead_zone = 0.95\nfull_dead_zone = 0.9\n",
    )?;

    let err = load_config(Some(config_path.as_path())).unwrap_err();
    assert!(matches!(err, ControlsError::Config(_)));
    assert!(fixture.path().exists());
    Ok(())
}
