//! In-memory asset bundle

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use vmp_core::{Asset, AssetBundle};

/// Bundle whose contents are declared up front
///
/// Located assets resolve to `<root>/<name>.<ext>` without touching disk.
#[derive(Debug)]
pub struct StaticBundle {
    root: PathBuf,
    assets: Mutex<HashSet<Asset>>,
}

impl StaticBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            assets: Mutex::new(HashSet::new()),
        }
    }

    /// Bundle containing the default audio and video assets
    pub fn with_default_assets(root: impl Into<PathBuf>) -> Self {
        let bundle = Self::new(root);
        bundle.insert(Asset::default_audio());
        bundle.insert(Asset::default_video());
        bundle
    }

    pub fn insert(&self, asset: Asset) {
        self.assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(asset);
    }

    pub fn remove(&self, asset: &Asset) {
        self.assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(asset);
    }

    /// Path an asset resolves to when present
    pub fn path_of(&self, asset: &Asset) -> PathBuf {
        self.root.join(asset.file_name())
    }
}

impl AssetBundle for StaticBundle {
    fn locate(&self, asset: &Asset) -> Option<PathBuf> {
        let present = self
            .assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(asset);
        present.then(|| self.path_of(asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bundle_has_both_assets() {
        let bundle = StaticBundle::with_default_assets("/bundle");
        assert_eq!(
            bundle.locate(&Asset::default_audio()),
            Some(PathBuf::from("/bundle/test-audio.mp3"))
        );
        assert!(bundle.locate(&Asset::default_video()).is_some());
    }

    #[test]
    fn removed_asset_is_missing() {
        let bundle = StaticBundle::with_default_assets("/bundle");
        bundle.remove(&Asset::default_video());
        assert!(bundle.locate(&Asset::default_video()).is_none());
    }
}
