//! Playback Events
//!
//! Controllers queue these for the UI layer, which drains them after each
//! interaction to refresh what it shows.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vmp_core::{Asset, HandleId, MediaKind};

/// Events emitted by the playback controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing flag changed
    StateChanged {
        kind: MediaKind,
        playing: bool,
    },

    /// A seek was requested
    Seeked {
        kind: MediaKind,
        position: Duration,
    },

    /// Playback stopped and rewound to the start
    Stopped { kind: MediaKind },

    /// An audio interruption paused playback
    Interrupted { kind: MediaKind },

    /// The bundled asset is missing, so play had no effect
    AssetMissing { asset: Asset },

    /// Audio session could not be configured; playback continues without routing guarantees
    SessionUnavailable { reason: String },

    /// Video surface now renders the given handle
    SurfaceAttached { handle: HandleId },

    /// Video surface stopped rendering
    SurfaceDetached,
}

/// Pending event queue owned by a controller
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
    pending: Vec<PlaybackEvent>,
}

impl EventQueue {
    pub(crate) fn push(&mut self, event: PlaybackEvent) {
        self.pending.push(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
