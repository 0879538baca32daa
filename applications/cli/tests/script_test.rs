//! End-to-end script runs through the driver
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use vmp_cli::{AppConfig, CliError, Driver, OnError};
use vmp_core::PlaybackMode;

fn run(
    script: &str,
    config: &AppConfig,
    on_error: OnError,
) -> (Driver, String, vmp_cli::Result<()>) {
    let mut driver = Driver::new(config);
    let mut out = Vec::new();
    let result = driver.run(Cursor::new(script), &mut out, on_error);
    (driver, String::from_utf8(out).unwrap(), result)
}

/// Forward twice then pause lands on twenty seconds
#[test]
fn test_audio_forward_script() {
    let script = "\
# skip ahead twice
audio
play
forward
forward
pause
status
";
    let (driver, out, result) = run(script, &AppConfig::default(), OnError::Abort);
    result.unwrap();

    assert!(out.contains("audio seeked to 10.000s"));
    assert!(out.contains("audio seeked to 20.000s"));
    assert!(out.contains("screen: audio | paused | position: 20.000s"));
    assert!(!driver.app().is_playing());
}

/// Interruptions pause and resume audio
#[test]
fn test_interruption_script() {
    let script = "audio\nplay\nwait 5\ninterrupt begin\ninterrupt end resume\nstatus\n";
    let (driver, out, result) = run(script, &AppConfig::default(), OnError::Abort);
    result.unwrap();

    assert!(out.contains("audio interrupted"));
    assert!(out.contains("screen: audio | playing"));
    assert!(driver.app().is_playing());
}

/// Video resumes after a background/foreground round trip
#[test]
fn test_video_lifecycle_script() {
    let script = "\
video
layout 390 844
play
wait 20
pause
background
foreground
status
";
    let (driver, out, result) = run(script, &AppConfig::default(), OnError::Abort);
    result.unwrap();

    assert!(out.contains("surface detached"));
    assert!(out.contains("live: 20.000s"));
    assert!(out.contains("surface: 390x744"));
    assert!(driver.app().is_playing());
}

/// Quit stops reading further commands
#[test]
fn test_quit_stops_script() {
    let (driver, _out, result) = run("audio\nquit\nback\n", &AppConfig::default(), OnError::Abort);
    result.unwrap();
    assert_eq!(driver.app().mode(), PlaybackMode::Audio);
}

/// Bad lines abort scripts with the line number
#[test]
fn test_parse_error_aborts() {
    let (_driver, _out, result) = run("audio\n\njump\n", &AppConfig::default(), OnError::Abort);
    match result {
        Err(CliError::Parse { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("jump"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

/// Interactive mode reports errors and keeps going
#[test]
fn test_report_mode_continues() {
    let script = "jump\naudio\nvideo\nback\nvideo\nstatus\n";
    let (driver, out, result) = run(script, &AppConfig::default(), OnError::Report);
    result.unwrap();

    assert!(out.contains("error: Parse error on line 1"));
    assert!(out.contains("error: Cannot switch from audio to video"));
    assert_eq!(driver.app().mode(), PlaybackMode::Video);
}

/// Invalid transitions abort scripts
#[test]
fn test_invalid_transition_aborts() {
    let (_driver, _out, result) = run("audio\nvideo\n", &AppConfig::default(), OnError::Abort);
    assert!(matches!(result, Err(CliError::Player(_))));
}

/// Transport on the chooser is reported, not fatal
#[test]
fn test_transport_on_chooser() {
    let (driver, out, result) = run("play\n", &AppConfig::default(), OnError::Abort);
    result.unwrap();
    assert!(out.contains("no player open"));
    assert!(driver.sim().engine.journal().calls().is_empty());
}

/// Asset directory without the audio file leaves play without effect
#[test]
fn test_asset_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("test-video.mp4"), b"not really a video").unwrap();

    let mut config = AppConfig::default();
    config.assets.root = Some(dir.path().to_path_buf());
    config.validate().unwrap();

    let (driver, out, result) = run("audio\nplay\nback\nvideo\nplay\n", &config, OnError::Abort);
    result.unwrap();

    assert!(out.contains("asset test-audio.mp3 missing"));
    assert!(out.contains("video playing"));
    assert!(driver.app().is_playing());
}

/// Leaving a player screen prints its final events
#[test]
fn test_back_prints_stop() {
    let (_driver, out, result) = run("audio\nplay\nback\n", &AppConfig::default(), OnError::Abort);
    result.unwrap();

    let after_play = out.split("audio playing").nth(1).unwrap();
    assert!(after_play.contains("audio paused"));
    assert!(after_play.contains("audio stopped"));
}
