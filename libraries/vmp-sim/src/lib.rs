//! VMP Simulated Platform
//!
//! Deterministic stand-ins for the platform services the controllers consume:
//! a manually advanced clock, a media engine whose handles follow that clock,
//! an audio session that can be made to fail, and an in-memory asset bundle.
//!
//! Used by the test suites and by the `vmp` command-line driver.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vmp_core::{Asset, MediaEngine};
//! use vmp_sim::SimPlatform;
//!
//! let sim = SimPlatform::new();
//! let path = sim.bundle.path_of(&Asset::default_audio());
//! let mut player = sim.engine.open(&path).unwrap();
//!
//! player.play();
//! sim.clock.advance(Duration::from_secs(2));
//! assert_eq!(player.current_time(), Duration::from_secs(2));
//! ```

#![forbid(unsafe_code)]

mod bundle;
mod clock;
mod engine;
mod session;

pub use bundle::StaticBundle;
pub use clock::SimClock;
pub use engine::{EngineCall, Journal, SimEngine, SimPlayer, DEFAULT_DURATION, DEFAULT_TIMESCALE};
pub use session::SimAudioSession;

use std::sync::Arc;
use vmp_core::{NotificationCenter, Platform};

/// Root of the simulated bundle
pub const BUNDLE_ROOT: &str = "/bundle";

/// A complete simulated platform with handles kept for inspection
#[derive(Debug, Clone)]
pub struct SimPlatform {
    pub clock: SimClock,
    pub engine: Arc<SimEngine>,
    pub session: Arc<SimAudioSession>,
    pub bundle: Arc<StaticBundle>,
    pub notifications: NotificationCenter,
}

impl SimPlatform {
    /// Simulated platform with both default assets bundled
    pub fn new() -> Self {
        let clock = SimClock::new();
        Self {
            engine: Arc::new(SimEngine::new(clock.clone())),
            clock,
            session: Arc::new(SimAudioSession::new()),
            bundle: Arc::new(StaticBundle::with_default_assets(BUNDLE_ROOT)),
            notifications: NotificationCenter::new(),
        }
    }

    /// Rebuild the engine on the shared clock, e.g. to change its timescale
    pub fn with_engine(mut self, build: impl FnOnce(SimEngine) -> SimEngine) -> Self {
        self.engine = Arc::new(build(SimEngine::new(self.clock.clone())));
        self
    }

    /// Platform services backed by this simulation
    pub fn platform(&self) -> Platform {
        Platform::new(
            self.engine.clone(),
            self.session.clone(),
            self.bundle.clone(),
            self.notifications.clone(),
        )
    }
}

impl Default for SimPlatform {
    fn default() -> Self {
        Self::new()
    }
}
