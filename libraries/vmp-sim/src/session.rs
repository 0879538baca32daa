//! Simulated audio session

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use vmp_core::{AudioSession, Result, SessionCategory, SessionMode, VmpError};

/// Audio session that records configuration and can be told to fail
#[derive(Debug, Default)]
pub struct SimAudioSession {
    category: Mutex<Option<(SessionCategory, SessionMode)>>,
    active: AtomicBool,
    fail: AtomicBool,
    configure_calls: AtomicUsize,
}

impl SimAudioSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail
    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn category(&self) -> Option<(SessionCategory, SessionMode)> {
        *self.category.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Number of `set_category` calls, successful or not
    pub fn configure_calls(&self) -> usize {
        self.configure_calls.load(Ordering::SeqCst)
    }
}

impl AudioSession for SimAudioSession {
    fn set_category(&self, category: SessionCategory, mode: SessionMode) -> Result<()> {
        self.configure_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(VmpError::session("category change refused"));
        }
        *self.category.lock().unwrap_or_else(PoisonError::into_inner) = Some((category, mode));
        Ok(())
    }

    fn set_active(&self, active: bool) -> Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(VmpError::session("activation refused"));
        }
        self.active.store(active, Ordering::SeqCst);
        Ok(())
    }
}
