//! Bundle of platform services handed to each controller

use crate::error::{Result, VmpError};
use crate::notifications::NotificationCenter;
use crate::traits::{AssetBundle, AudioSession, MediaEngine, MediaPlayer};
use crate::types::Asset;
use std::sync::Arc;
use tracing::debug;

/// Platform services a controller consumes
///
/// Every field is shared; controllers clone the bundle on construction and
/// never hold process-wide player state.
#[derive(Clone)]
pub struct Platform {
    pub engine: Arc<dyn MediaEngine>,
    pub session: Arc<dyn AudioSession>,
    pub bundle: Arc<dyn AssetBundle>,
    pub notifications: NotificationCenter,
}

impl Platform {
    pub fn new(
        engine: Arc<dyn MediaEngine>,
        session: Arc<dyn AudioSession>,
        bundle: Arc<dyn AssetBundle>,
        notifications: NotificationCenter,
    ) -> Self {
        Self {
            engine,
            session,
            bundle,
            notifications,
        }
    }

    /// Locate `asset` in the bundle and open it with the engine
    ///
    /// # Errors
    /// `VmpError::AssetMissing` if the bundle does not contain the asset,
    /// otherwise whatever the engine reports.
    pub fn open_asset(&self, asset: &Asset) -> Result<Box<dyn MediaPlayer>> {
        let path = self
            .bundle
            .locate(asset)
            .ok_or_else(|| VmpError::AssetMissing(asset.clone()))?;
        debug!("Opening {} from {:?}", asset, path);
        self.engine.open(&path)
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("notifications", &self.notifications)
            .finish_non_exhaustive()
    }
}
