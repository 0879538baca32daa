//! Audio playback controller
//!
//! Owns one audio handle for the lifetime of the audio screen. The controller
//! keeps its own copy of the playback position: pause records it, play seeks
//! back to it. Skips start from the engine's live position and store their
//! target as the new recorded position.

use crate::events::{EventQueue, PlaybackEvent};
use crate::position::{clamp_to_duration, step_back, step_forward};
use crate::transport::Transport;
use crate::types::PlaybackConfig;
use std::time::Duration;
use tracing::{debug, info, warn};
use vmp_core::{
    HandleId, Interruption, InterruptionPayload, MediaKind, MediaPlayer, Notification, Platform,
    Subscription, Topic, VmpError,
};

/// Controller behind the audio screen
pub struct AudioController {
    platform: Platform,
    config: PlaybackConfig,

    /// Opened lazily on the first successful play
    player: Option<Box<dyn MediaPlayer>>,

    current_position: Duration,
    is_playing: bool,

    /// Interruption observer, registered by `setup`
    interruptions: Option<Subscription>,

    events: EventQueue,
}

impl AudioController {
    /// Create a controller with no media opened
    pub fn new(platform: Platform, config: PlaybackConfig) -> Self {
        Self {
            platform,
            config,
            player: None,
            current_position: Duration::ZERO,
            is_playing: false,
            interruptions: None,
            events: EventQueue::default(),
        }
    }

    // ===== Session =====

    /// Configure the audio session and start observing interruptions
    ///
    /// Safe to call any number of times. A session failure is logged and
    /// reported as an event; playback still proceeds without routing
    /// guarantees.
    pub fn setup(&mut self) {
        if let Err(e) = self.platform.session.configure_for_playback() {
            warn!("Failed to set up audio session: {}", e);
            self.events.push(PlaybackEvent::SessionUnavailable {
                reason: e.to_string(),
            });
        }

        if self.interruptions.is_none() {
            self.interruptions = Some(self.platform.notifications.subscribe(Topic::Interruption));
        }
    }

    // ===== Playback Control =====

    /// Start or resume playback from the recorded position
    ///
    /// Opens the bundled audio asset on first use. Returns silently if the
    /// asset is missing or cannot be opened.
    pub fn play(&mut self) {
        if self.player.is_none() {
            match self.open_asset() {
                Some(player) => self.player = Some(player),
                None => return,
            }
        }

        let Some(player) = self.player.as_mut() else {
            return;
        };

        let position = clamp_to_duration(self.current_position, player.duration());
        player.seek(position);
        player.play();
        self.current_position = position;
        self.set_playing(true);
    }

    /// Pause and record where playback stopped
    pub fn pause(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.pause();
            self.current_position = clamp_to_duration(player.current_time(), player.duration());
        }
        self.set_playing(false);
    }

    /// Pause and rewind to the start
    ///
    /// The handle stays open.
    pub fn stop(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.pause();
            player.seek(Duration::ZERO);
        }
        self.current_position = Duration::ZERO;
        self.set_playing(false);
        self.events.push(PlaybackEvent::Stopped {
            kind: MediaKind::Audio,
        });
    }

    /// Skip ahead by the configured interval
    ///
    /// Does nothing until media has been opened by `play`.
    pub fn forward(&mut self) {
        self.skip(true);
    }

    /// Skip back by the configured interval, never before the start
    ///
    /// Does nothing until media has been opened by `play`.
    pub fn rewind(&mut self) {
        self.skip(false);
    }

    fn skip(&mut self, ahead: bool) {
        let step = self.config.skip_interval();
        let timescale = self.config.seek_timescale;

        let Some(player) = self.player.as_mut() else {
            debug!("Ignoring audio skip: no media open");
            return;
        };

        let from = player.current_time();
        let duration = player.duration();
        let target = if ahead {
            step_forward(from, step, duration, timescale)
        } else {
            step_back(from, step, duration, timescale)
        };

        player.seek(target);
        self.current_position = target;
        self.events.push(PlaybackEvent::Seeked {
            kind: MediaKind::Audio,
            position: target,
        });
    }

    // ===== Interruptions =====

    /// Handle every interruption delivered since the last call
    ///
    /// Returns how many notifications changed or confirmed playback state.
    pub fn handle_pending_notifications(&mut self) -> usize {
        let pending = match &self.interruptions {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };

        let mut handled = 0;
        for notification in pending {
            if let Notification::Interruption(payload) = notification {
                if self.handle_interruption(&payload) {
                    handled += 1;
                }
            }
        }
        handled
    }

    /// React to one interruption payload
    ///
    /// Began pauses. Ended resumes only when the payload carries the
    /// should-resume hint. Anything unparseable is ignored and returns `false`.
    pub fn handle_interruption(&mut self, payload: &InterruptionPayload) -> bool {
        match payload.parse() {
            Some(Interruption::Began) => {
                let was_playing = self.is_playing;
                info!("Audio interrupted, pausing");
                self.pause();
                if was_playing {
                    self.events.push(PlaybackEvent::Interrupted {
                        kind: MediaKind::Audio,
                    });
                }
                true
            }
            Some(Interruption::Ended {
                should_resume: true,
            }) => {
                info!("Audio interruption ended, resuming");
                self.play();
                true
            }
            Some(Interruption::Ended {
                should_resume: false,
            }) => {
                debug!("Audio interruption ended without resume hint, staying paused");
                true
            }
            None => {
                debug!("Ignoring interruption payload {:?}", payload);
                false
            }
        }
    }

    // ===== Lifecycle =====

    /// Release the handle and every observer
    ///
    /// Idempotent. Runs automatically on drop.
    pub fn teardown(&mut self) {
        if let Some(mut player) = self.player.take() {
            player.pause();
            debug!("Released audio handle {}", player.id());
        }
        self.interruptions = None;
        self.is_playing = false;
    }

    // ===== Getters =====

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Position recorded at the last play, pause, stop, or skip
    pub fn current_position(&self) -> Duration {
        self.current_position
    }

    /// Whether a media handle is open
    pub fn has_media(&self) -> bool {
        self.player.is_some()
    }

    pub fn handle_id(&self) -> Option<HandleId> {
        self.player.as_ref().map(|player| player.id())
    }

    /// Whether interruption notifications are being observed
    pub fn is_observing_interruptions(&self) -> bool {
        self.interruptions.is_some()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    // ===== Events =====

    /// Take all queued events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain()
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.events.is_empty()
    }

    // ===== Internal =====

    fn open_asset(&mut self) -> Option<Box<dyn MediaPlayer>> {
        match self.platform.open_asset(&self.config.audio_asset) {
            Ok(player) => {
                info!("Opened audio {} as handle {}", self.config.audio_asset, player.id());
                Some(player)
            }
            Err(VmpError::AssetMissing(asset)) => {
                debug!("Audio asset {} not bundled, play ignored", asset);
                self.events.push(PlaybackEvent::AssetMissing { asset });
                None
            }
            Err(e) => {
                warn!("Failed to open audio {}: {}", self.config.audio_asset, e);
                None
            }
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.events.push(PlaybackEvent::StateChanged {
                kind: MediaKind::Audio,
                playing,
            });
        }
    }
}

impl Transport for AudioController {
    fn play(&mut self) {
        AudioController::play(self);
    }

    fn pause(&mut self) {
        AudioController::pause(self);
    }

    fn stop(&mut self) {
        AudioController::stop(self);
    }

    fn forward(&mut self) {
        AudioController::forward(self);
    }

    fn rewind(&mut self) {
        AudioController::rewind(self);
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn current_position(&self) -> Duration {
        self.current_position
    }
}

impl Drop for AudioController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for AudioController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioController")
            .field("handle", &self.handle_id())
            .field("current_position", &self.current_position)
            .field("is_playing", &self.is_playing)
            .field("observing_interruptions", &self.interruptions.is_some())
            .finish()
    }
}
