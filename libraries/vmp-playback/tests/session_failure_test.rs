//! Audio session failures never stop playback
//!
//! Uses a mocked session so each failure mode can be scripted.

use mockall::mock;
use std::sync::Arc;
use vmp_core::{
    AudioSession, MediaKind, NotificationCenter, Platform, Result, SessionCategory, SessionMode,
    VmpError,
};
use vmp_playback::{AudioController, MediaApp, PlaybackConfig, PlaybackEvent, VideoController};
use vmp_sim::SimPlatform;

mock! {
    Session {}

    impl AudioSession for Session {
        fn set_category(&self, category: SessionCategory, mode: SessionMode) -> Result<()>;
        fn set_active(&self, active: bool) -> Result<()>;
    }
}

fn platform_with(session: MockSession) -> (SimPlatform, Platform) {
    let sim = SimPlatform::new();
    let platform = Platform::new(
        sim.engine.clone(),
        Arc::new(session),
        sim.bundle.clone(),
        NotificationCenter::clone(&sim.notifications),
    );
    (sim, platform)
}

fn refusing_category() -> MockSession {
    let mut session = MockSession::new();
    session
        .expect_set_category()
        .returning(|_, _| Err(VmpError::session("category refused")));
    session.expect_set_active().never();
    session
}

#[test]
fn audio_setup_reports_category_failure_as_event() {
    let (_sim, platform) = platform_with(refusing_category());
    let mut audio = AudioController::new(platform, PlaybackConfig::default());

    audio.setup();

    let events = audio.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        PlaybackEvent::SessionUnavailable { reason } => {
            assert!(reason.contains("category refused"));
        }
        other => panic!("expected SessionUnavailable, got {:?}", other),
    }
}

#[test]
fn audio_plays_after_activation_failure() {
    let mut session = MockSession::new();
    session
        .expect_set_category()
        .withf(|category, mode| {
            *category == SessionCategory::Playback && *mode == SessionMode::Default
        })
        .times(1)
        .returning(|_, _| Ok(()));
    session
        .expect_set_active()
        .withf(|active| *active)
        .times(1)
        .returning(|_| Err(VmpError::session("activation refused")));

    let (_sim, platform) = platform_with(session);
    let mut audio = AudioController::new(platform, PlaybackConfig::default());
    audio.setup();
    audio.play();

    assert!(audio.is_playing());
    assert!(audio.is_observing_interruptions());
}

#[test]
fn video_play_survives_session_failure() {
    let (_sim, platform) = platform_with(refusing_category());
    let mut video = VideoController::new(platform, PlaybackConfig::default());

    video.play();

    assert!(video.is_playing());
    assert!(video
        .drain_events()
        .iter()
        .any(|event| matches!(event, PlaybackEvent::SessionUnavailable { .. })));
}

#[test]
fn app_selection_succeeds_without_session() {
    let (_sim, platform) = platform_with(refusing_category());
    let mut app = MediaApp::new(platform, PlaybackConfig::default());

    assert!(app.select(MediaKind::Audio).is_ok());
    assert!(app.audio().is_some());
}
