//! VMP - Playback Controllers
//!
//! Platform-agnostic playback bookkeeping for the VMP audio/video player.
//!
//! This crate provides:
//! - Audio controller (lazy open, shadow position, interruption handling)
//! - Video controller (render surface, background/foreground resync)
//! - Transport actions shared by both player screens
//! - Root composition switching between chooser and player screens
//! - Playback events for UI synchronization
//!
//! # Architecture
//!
//! `vmp-playback` never talks to a media framework directly. Engines,
//! audio sessions, bundles, and notifications arrive through the traits in
//! `vmp-core`, bundled as a [`Platform`](vmp_core::Platform).
//!
//! Controllers are owned by their screen. Observers are subscription handles
//! held by the controller and released when it is torn down, so no platform
//! notification can reach a destroyed controller.
//!
//! # Example: Switching Screens
//!
//! ```rust
//! use vmp_core::{MediaKind, PlaybackMode};
//! use vmp_playback::{MediaApp, PlaybackConfig, TransportAction};
//! use vmp_sim::SimPlatform;
//!
//! let sim = SimPlatform::new();
//! let mut app = MediaApp::new(sim.platform(), PlaybackConfig::default());
//!
//! app.select(MediaKind::Audio).unwrap();
//! app.press(TransportAction::Play);
//! assert!(app.is_playing());
//!
//! app.back();
//! assert_eq!(app.mode(), PlaybackMode::None);
//! assert!(!app.is_playing());
//! ```
//!
//! # Example: Interruptions
//!
//! ```rust
//! use vmp_core::{InterruptionPayload, Notification};
//! use vmp_playback::{AudioController, PlaybackConfig};
//! use vmp_sim::SimPlatform;
//!
//! let sim = SimPlatform::new();
//! let mut audio = AudioController::new(sim.platform(), PlaybackConfig::default());
//! audio.setup();
//! audio.play();
//!
//! sim.notifications
//!     .post(Notification::Interruption(InterruptionPayload::began()));
//! audio.handle_pending_notifications();
//! assert!(!audio.is_playing());
//! ```

mod app;
mod audio;
mod events;
pub mod position;
mod surface;
mod transport;
pub mod types;
mod video;

// Public exports
pub use app::{MediaApp, Screen};
pub use audio::AudioController;
pub use events::PlaybackEvent;
pub use surface::{RenderSurface, VideoGravity};
pub use transport::{Transport, TransportAction};
pub use types::{ForegroundResume, PlaybackConfig};
pub use video::VideoController;
