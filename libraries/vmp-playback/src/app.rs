//! Root composition
//!
//! Holds the one piece of navigation state, the selected media type, and the
//! screen that goes with it. Each player screen owns a fresh controller that
//! lives exactly as long as the screen.

use crate::audio::AudioController;
use crate::events::{EventQueue, PlaybackEvent};
use crate::transport::{Transport, TransportAction};
use crate::types::PlaybackConfig;
use crate::video::VideoController;
use std::time::Duration;
use tracing::info;
use vmp_core::{MediaKind, Platform, PlaybackMode, Result, Size, VmpError};

/// The visible screen and the controller it owns
#[derive(Debug, Default)]
pub enum Screen {
    /// Media type chooser
    #[default]
    Chooser,
    Audio(AudioController),
    Video(VideoController),
}

impl Screen {
    pub fn mode(&self) -> PlaybackMode {
        match self {
            Screen::Chooser => PlaybackMode::None,
            Screen::Audio(_) => PlaybackMode::Audio,
            Screen::Video(_) => PlaybackMode::Video,
        }
    }

    fn transport_mut(&mut self) -> Option<&mut dyn Transport> {
        match self {
            Screen::Chooser => None,
            Screen::Audio(controller) => Some(controller as &mut dyn Transport),
            Screen::Video(controller) => Some(controller as &mut dyn Transport),
        }
    }

    fn transport(&self) -> Option<&dyn Transport> {
        match self {
            Screen::Chooser => None,
            Screen::Audio(controller) => Some(controller as &dyn Transport),
            Screen::Video(controller) => Some(controller as &dyn Transport),
        }
    }
}

/// Application root: chooser plus the two player screens
#[derive(Debug)]
pub struct MediaApp {
    platform: Platform,
    config: PlaybackConfig,
    screen: Screen,

    /// Events from controllers that have already been torn down
    events: EventQueue,
}

impl MediaApp {
    /// Start on the chooser
    pub fn new(platform: Platform, config: PlaybackConfig) -> Self {
        Self {
            platform,
            config,
            screen: Screen::Chooser,
            events: EventQueue::default(),
        }
    }

    // ===== Navigation =====

    /// Open the player screen for `kind`
    ///
    /// Only allowed from the chooser. The new screen gets a fresh
    /// controller; the audio screen configures its session on appearance.
    pub fn select(&mut self, kind: MediaKind) -> Result<()> {
        if !matches!(self.screen, Screen::Chooser) {
            return Err(VmpError::InvalidTransition {
                from: self.mode(),
                to: kind.into(),
            });
        }

        self.screen = match kind {
            MediaKind::Audio => {
                let mut controller =
                    AudioController::new(self.platform.clone(), self.config.clone());
                controller.setup();
                Screen::Audio(controller)
            }
            MediaKind::Video => {
                Screen::Video(VideoController::new(self.platform.clone(), self.config.clone()))
            }
        };
        info!("Showing {} player", kind);
        Ok(())
    }

    /// Return to the chooser
    ///
    /// The active controller is stopped and torn down before the chooser is
    /// shown, so nothing keeps playing. Its last events stay available from
    /// `drain_events`. No-op on the chooser.
    pub fn back(&mut self) {
        let mode = self.mode();
        let final_events = match &mut self.screen {
            Screen::Chooser => return,
            Screen::Audio(controller) => {
                controller.stop();
                controller.teardown();
                controller.drain_events()
            }
            Screen::Video(controller) => {
                controller.stop();
                controller.teardown();
                controller.drain_events()
            }
        };
        for event in final_events {
            self.events.push(event);
        }
        self.screen = Screen::Chooser;
        info!("Left {} player, back to chooser", mode);
    }

    pub fn mode(&self) -> PlaybackMode {
        self.screen.mode()
    }

    // ===== Routing =====

    /// Press a transport button on the active player screen
    ///
    /// Returns `false` on the chooser, which has no transport bar.
    pub fn press(&mut self, action: TransportAction) -> bool {
        match self.screen.transport_mut() {
            Some(transport) => {
                transport.apply(action);
                true
            }
            None => false,
        }
    }

    /// Deliver pending platform notifications to the active controller
    pub fn pump(&mut self) -> usize {
        match &mut self.screen {
            Screen::Chooser => 0,
            Screen::Audio(controller) => controller.handle_pending_notifications(),
            Screen::Video(controller) => controller.handle_pending_notifications(),
        }
    }

    /// Forward a container size change to the video screen
    pub fn layout(&mut self, container: Size) {
        if let Screen::Video(controller) = &mut self.screen {
            controller.layout(container);
        }
    }

    /// Take queued events, oldest first
    ///
    /// Includes the final events of controllers closed by `back`.
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        let mut events = self.events.drain();
        match &mut self.screen {
            Screen::Chooser => {}
            Screen::Audio(controller) => events.extend(controller.drain_events()),
            Screen::Video(controller) => events.extend(controller.drain_events()),
        }
        events
    }

    // ===== Getters =====

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn audio(&self) -> Option<&AudioController> {
        match &self.screen {
            Screen::Audio(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn audio_mut(&mut self) -> Option<&mut AudioController> {
        match &mut self.screen {
            Screen::Audio(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn video(&self) -> Option<&VideoController> {
        match &self.screen {
            Screen::Video(controller) => Some(controller),
            _ => None,
        }
    }

    pub fn video_mut(&mut self) -> Option<&mut VideoController> {
        match &mut self.screen {
            Screen::Video(controller) => Some(controller),
            _ => None,
        }
    }

    /// Playing flag of the active controller
    pub fn is_playing(&self) -> bool {
        self.screen
            .transport()
            .is_some_and(|transport| transport.is_playing())
    }

    /// Recorded position of the active controller
    pub fn current_position(&self) -> Option<Duration> {
        self.screen
            .transport()
            .map(|transport| transport.current_position())
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }
}
