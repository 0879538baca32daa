//! Platform traits for VMP
//!
//! The controllers only ever talk to the platform through these seams, so the
//! same state machine runs against a native media framework or the simulated
//! platform in `vmp-sim`.
use crate::error::Result;
use crate::types::{Asset, HandleId, SessionCategory, SessionMode};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// An opened media resource
///
/// Calls are requests: an engine may apply a seek or a play asynchronously.
/// Callers never wait for confirmation.
pub trait MediaPlayer: Send {
    /// Identity of this handle
    fn id(&self) -> HandleId;

    /// Request a seek to `position`
    fn seek(&mut self, position: Duration);

    /// Start or resume rendering
    fn play(&mut self);

    /// Pause rendering, keeping the current position
    fn pause(&mut self);

    /// Engine's current playback position
    fn current_time(&self) -> Duration;

    /// Total duration, if the engine knows it yet
    fn duration(&self) -> Option<Duration>;
}

/// Opens media resources
pub trait MediaEngine: Send + Sync {
    /// Open the resource at `path` and return a paused handle at position zero
    ///
    /// # Errors
    /// Returns an error if the resource cannot be opened
    fn open(&self, path: &Path) -> Result<Box<dyn MediaPlayer>>;
}

/// The process-wide audio output session
pub trait AudioSession: Send + Sync {
    /// Set the output category and mode
    fn set_category(&self, category: SessionCategory, mode: SessionMode) -> Result<()>;

    /// Activate or deactivate the session
    fn set_active(&self, active: bool) -> Result<()>;

    /// Set the category and activate in one step
    ///
    /// Safe to call repeatedly.
    fn configure_for_playback(&self) -> Result<()> {
        self.set_category(SessionCategory::Playback, SessionMode::Default)?;
        self.set_active(true)
    }
}

/// Read-only resources bundled with the application
pub trait AssetBundle: Send + Sync {
    /// Location of `asset`, or `None` if it is not in the bundle
    fn locate(&self, asset: &Asset) -> Option<PathBuf>;
}
