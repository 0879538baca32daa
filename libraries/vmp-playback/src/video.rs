//! Video playback controller
//!
//! Owns one video handle and the surface that renders it. Skips act directly
//! on the engine's live position. On backgrounding the surface lets go of the
//! handle; on foregrounding a fresh handle is opened and playback continues
//! from where the app left off.

use crate::events::{EventQueue, PlaybackEvent};
use crate::position::{clamp_to_duration, step_back, step_forward};
use crate::surface::RenderSurface;
use crate::transport::Transport;
use crate::types::{ForegroundResume, PlaybackConfig};
use std::time::Duration;
use tracing::{debug, info, warn};
use vmp_core::{
    HandleId, LifecycleEvent, MediaKind, MediaPlayer, Notification, Platform, Size, Subscription,
    Topic, VmpError,
};

/// Controller behind the video screen
pub struct VideoController {
    platform: Platform,
    config: PlaybackConfig,

    player: Option<Box<dyn MediaPlayer>>,
    surface: RenderSurface,

    /// Position snapshot taken on pause, stop, and backgrounding
    current_position: Duration,
    is_playing: bool,

    /// Playing flag captured when the app went to background
    was_playing: bool,

    /// Background/foreground observer, registered on construction
    lifecycle: Option<Subscription>,

    events: EventQueue,
}

impl VideoController {
    /// Create a controller and start observing app lifecycle transitions
    pub fn new(platform: Platform, config: PlaybackConfig) -> Self {
        let lifecycle = platform.notifications.subscribe(Topic::Lifecycle);
        Self {
            platform,
            config,
            player: None,
            surface: RenderSurface::new(),
            current_position: Duration::ZERO,
            is_playing: false,
            was_playing: false,
            lifecycle: Some(lifecycle),
            events: EventQueue::default(),
        }
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// Opens the bundled video asset on first use and seeks it to the
    /// recorded position; an already open handle resumes from its own
    /// position. Returns silently if the asset is missing.
    pub fn play(&mut self) {
        if self.player.is_none() {
            let Some(mut player) = self.open_asset() else {
                return;
            };
            player.seek(clamp_to_duration(self.current_position, player.duration()));
            self.player = Some(player);
        }

        let Some(player) = self.player.as_mut() else {
            return;
        };

        let handle = player.id();
        player.play();
        self.bind_surface(handle);
        self.set_playing(true);
        self.configure_session();
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
    pub fn stop(&mut self) {
        if let Some(player) = self.player.as_mut() {
            player.pause();
            player.seek(Duration::ZERO);
        }
        self.current_position = Duration::ZERO;
        self.set_playing(false);
        self.events.push(PlaybackEvent::Stopped {
            kind: MediaKind::Video,
        });
    }

    /// Seek the live position ahead by the configured interval
    pub fn forward(&mut self) {
        self.skip(true);
    }

    /// Seek the live position back by the configured interval, floored at zero
    pub fn rewind(&mut self) {
        self.skip(false);
    }

    fn skip(&mut self, ahead: bool) {
        let step = self.config.skip_interval();
        let timescale = self.config.seek_timescale;

        let Some(player) = self.player.as_mut() else {
            debug!("Ignoring video skip: no media open");
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
        self.events.push(PlaybackEvent::Seeked {
            kind: MediaKind::Video,
            position: target,
        });
    }

    // ===== Layout =====

    /// Recompute the surface frame after the container changed size
    pub fn layout(&mut self, container: Size) {
        self.surface
            .layout(container, self.config.transport_bar_height.max(0.0));
        debug!("Video surface laid out at {:?}", self.surface.frame());
    }

    // ===== Lifecycle =====

    /// Handle every lifecycle notification delivered since the last call
    pub fn handle_pending_notifications(&mut self) -> usize {
        let pending = match &self.lifecycle {
            Some(subscription) => subscription.drain(),
            None => return 0,
        };

        let mut handled = 0;
        for notification in pending {
            if let Notification::Lifecycle(event) = notification {
                self.handle_lifecycle(event);
                handled += 1;
            }
        }
        handled
    }

    pub fn handle_lifecycle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::DidEnterBackground => self.enter_background(),
            LifecycleEvent::WillEnterForeground => self.enter_foreground(),
        }
    }

    /// Record the live position and stop feeding the surface
    ///
    /// The handle itself stays open.
    pub fn enter_background(&mut self) {
        self.current_position = self
            .player
            .as_ref()
            .map(|player| clamp_to_duration(player.current_time(), player.duration()))
            .unwrap_or(Duration::ZERO);
        self.was_playing = self.is_playing;

        if self.surface.detach().is_some() {
            self.events.push(PlaybackEvent::SurfaceDetached);
        }
        info!(
            "Video backgrounded at {:?} (playing: {})",
            self.current_position, self.was_playing
        );
    }

    /// Reopen the video and continue from the recorded position
    ///
    /// With the default policy playback resumes even if it was paused
    /// before backgrounding.
    pub fn enter_foreground(&mut self) {
        let resume = match self.config.foreground_resume {
            ForegroundResume::Always => true,
            ForegroundResume::RestorePrevious => self.was_playing,
        };

        let Some(mut player) = self.open_asset() else {
            return;
        };

        let handle = player.id();
        let position = clamp_to_duration(self.current_position, player.duration());
        player.seek(position);
        if resume {
            player.play();
        }

        // Replacing the handle releases the one opened before backgrounding.
        self.player = Some(player);
        self.current_position = position;
        self.bind_surface(handle);
        self.set_playing(resume);
        info!("Video foregrounded at {:?} (resumed: {})", position, resume);
    }

    /// Release the handle, detach the surface, and drop every observer
    ///
    /// Idempotent. Runs automatically on drop.
    pub fn teardown(&mut self) {
        self.lifecycle = None;
        self.surface.detach();
        if let Some(mut player) = self.player.take() {
            player.pause();
            debug!("Released video handle {}", player.id());
        }
        self.is_playing = false;
    }

    // ===== Getters =====

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Position snapshot from the last pause, stop, or lifecycle transition
    pub fn current_position(&self) -> Duration {
        self.current_position
    }

    /// Engine position right now, if media is open
    pub fn live_position(&self) -> Option<Duration> {
        self.player.as_ref().map(|player| player.current_time())
    }

    pub fn has_media(&self) -> bool {
        self.player.is_some()
    }

    pub fn handle_id(&self) -> Option<HandleId> {
        self.player.as_ref().map(|player| player.id())
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    /// Whether lifecycle notifications are being observed
    pub fn is_observing_lifecycle(&self) -> bool {
        self.lifecycle.is_some()
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
        match self.platform.open_asset(&self.config.video_asset) {
            Ok(player) => {
                info!("Opened video {} as handle {}", self.config.video_asset, player.id());
                Some(player)
            }
            Err(VmpError::AssetMissing(asset)) => {
                debug!("Video asset {} not bundled, ignored", asset);
                self.events.push(PlaybackEvent::AssetMissing { asset });
                None
            }
            Err(e) => {
                warn!("Failed to open video {}: {}", self.config.video_asset, e);
                None
            }
        }
    }

    fn bind_surface(&mut self, handle: HandleId) {
        if self.surface.attach(handle) {
            self.events.push(PlaybackEvent::SurfaceAttached { handle });
        }
    }

    fn configure_session(&mut self) {
        if let Err(e) = self.platform.session.configure_for_playback() {
            warn!("Failed to set up audio session: {}", e);
            self.events.push(PlaybackEvent::SessionUnavailable {
                reason: e.to_string(),
            });
        }
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.events.push(PlaybackEvent::StateChanged {
                kind: MediaKind::Video,
                playing,
            });
        }
    }
}

impl Transport for VideoController {
    fn play(&mut self) {
        VideoController::play(self);
    }

    fn pause(&mut self) {
        VideoController::pause(self);
    }

    fn stop(&mut self) {
        VideoController::stop(self);
    }

    fn forward(&mut self) {
        VideoController::forward(self);
    }

    fn rewind(&mut self) {
        VideoController::rewind(self);
    }

    fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn current_position(&self) -> Duration {
        self.current_position
    }
}

impl Drop for VideoController {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for VideoController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoController")
            .field("handle", &self.handle_id())
            .field("surface", &self.surface)
            .field("current_position", &self.current_position)
            .field("is_playing", &self.is_playing)
            .field("observing_lifecycle", &self.lifecycle.is_some())
            .finish()
    }
}
