//! Simulated media engine
//!
//! Handles advance with the shared [`SimClock`] while playing, clamp at the
//! media duration, and round seek targets to the engine timescale the way a
//! rational-time media framework does.

use crate::clock::SimClock;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::trace;
use vmp_core::time::round_to_timescale;
use vmp_core::{HandleId, MediaEngine, MediaPlayer, Result, VmpError};

/// Default timescale (units per second) for seek rounding
pub const DEFAULT_TIMESCALE: u32 = 600;

/// Default duration of media opened without an explicit duration
pub const DEFAULT_DURATION: Duration = Duration::from_secs(180);

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A call the engine observed, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Open { handle: HandleId, path: PathBuf },
    Seek { handle: HandleId, position: Duration },
    Play { handle: HandleId },
    Pause { handle: HandleId },
    Release { handle: HandleId },
}

/// Shared, append-only record of engine calls
#[derive(Debug, Clone, Default)]
pub struct Journal {
    calls: Arc<Mutex<Vec<EngineCall>>>,
}

impl Journal {
    fn record(&self, call: EngineCall) {
        trace!("engine: {:?}", call);
        lock(&self.calls).push(call);
    }

    /// Snapshot of every call so far
    pub fn calls(&self) -> Vec<EngineCall> {
        lock(&self.calls).clone()
    }

    /// Number of handles opened so far
    pub fn opened(&self) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| matches!(call, EngineCall::Open { .. }))
            .count()
    }

    /// Handles opened and not yet released
    pub fn live_handles(&self) -> Vec<HandleId> {
        let calls = lock(&self.calls);
        let mut live = Vec::new();
        for call in calls.iter() {
            match call {
                EngineCall::Open { handle, .. } => live.push(*handle),
                EngineCall::Release { handle } => live.retain(|h| h != handle),
                _ => {}
            }
        }
        live
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }
}

/// In-process media engine driven by a [`SimClock`]
#[derive(Debug)]
pub struct SimEngine {
    clock: SimClock,
    timescale: u32,
    default_duration: Duration,
    durations: Mutex<HashMap<PathBuf, Duration>>,
    failing: Mutex<HashSet<PathBuf>>,
    next_id: AtomicU64,
    journal: Journal,
}

impl SimEngine {
    pub fn new(clock: SimClock) -> Self {
        Self {
            clock,
            timescale: DEFAULT_TIMESCALE,
            default_duration: DEFAULT_DURATION,
            durations: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            next_id: AtomicU64::new(1),
            journal: Journal::default(),
        }
    }

    /// Seek rounding timescale (units per second, 0 disables rounding)
    pub fn with_timescale(mut self, timescale: u32) -> Self {
        self.timescale = timescale;
        self
    }

    /// Duration used for paths without an explicit duration
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.default_duration = duration;
        self
    }

    /// Report `duration` for media opened from `path`
    pub fn set_duration(&self, path: impl Into<PathBuf>, duration: Duration) {
        lock(&self.durations).insert(path.into(), duration);
    }

    /// Make opening `path` fail
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        lock(&self.failing).insert(path.into());
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }
}

impl MediaEngine for SimEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn MediaPlayer>> {
        if lock(&self.failing).contains(path) {
            return Err(VmpError::engine(format!("cannot decode {:?}", path)));
        }

        let duration = lock(&self.durations)
            .get(path)
            .copied()
            .unwrap_or(self.default_duration);
        let id = HandleId::new(self.next_id.fetch_add(1, Ordering::Relaxed));

        self.journal.record(EngineCall::Open {
            handle: id,
            path: path.to_path_buf(),
        });

        Ok(Box::new(SimPlayer {
            id,
            clock: self.clock.clone(),
            timescale: self.timescale,
            duration,
            anchor: Duration::ZERO,
            started_at: None,
            journal: self.journal.clone(),
        }))
    }
}

/// Handle returned by [`SimEngine`]
#[derive(Debug)]
pub struct SimPlayer {
    id: HandleId,
    clock: SimClock,
    timescale: u32,
    duration: Duration,

    /// Position when playback last started, or the paused position
    anchor: Duration,

    /// Clock reading when playback last started; `None` while paused
    started_at: Option<Duration>,

    journal: Journal,
}

impl SimPlayer {
    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }
}

impl MediaPlayer for SimPlayer {
    fn id(&self) -> HandleId {
        self.id
    }

    fn seek(&mut self, position: Duration) {
        let target = round_to_timescale(position, self.timescale).min(self.duration);
        self.anchor = target;
        if self.started_at.is_some() {
            self.started_at = Some(self.clock.now());
        }
        self.journal.record(EngineCall::Seek {
            handle: self.id,
            position: target,
        });
    }

    fn play(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
        }
        self.journal.record(EngineCall::Play { handle: self.id });
    }

    fn pause(&mut self) {
        self.anchor = self.current_time();
        self.started_at = None;
        self.journal.record(EngineCall::Pause { handle: self.id });
    }

    fn current_time(&self) -> Duration {
        match self.started_at {
            Some(started) => {
                let elapsed = self.clock.now().saturating_sub(started);
                (self.anchor + elapsed).min(self.duration)
            }
            None => self.anchor,
        }
    }

    fn duration(&self) -> Option<Duration> {
        Some(self.duration)
    }
}

impl Drop for SimPlayer {
    fn drop(&mut self) {
        self.journal.record(EngineCall::Release { handle: self.id });
    }
}
