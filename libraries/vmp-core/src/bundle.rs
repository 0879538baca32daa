//! Filesystem-backed asset bundle

use crate::traits::AssetBundle;
use crate::types::Asset;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves assets as `<root>/<name>.<extension>`
#[derive(Debug, Clone)]
pub struct DirectoryBundle {
    root: PathBuf,
}

impl DirectoryBundle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetBundle for DirectoryBundle {
    fn locate(&self, asset: &Asset) -> Option<PathBuf> {
        let path = self.root.join(asset.file_name());
        if path.is_file() {
            Some(path)
        } else {
            debug!("Asset {} not present under {:?}", asset, self.root);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn locates_existing_asset() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("test-audio.mp3"), b"ID3").unwrap();

        let bundle = DirectoryBundle::new(dir.path());
        let path = bundle.locate(&Asset::default_audio()).unwrap();
        assert_eq!(path, dir.path().join("test-audio.mp3"));
    }

    #[test]
    fn missing_asset_is_none() {
        let dir = TempDir::new().unwrap();
        let bundle = DirectoryBundle::new(dir.path());
        assert!(bundle.locate(&Asset::default_video()).is_none());
    }

    #[test]
    fn directory_with_asset_name_is_not_an_asset() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("test-video.mp4")).unwrap();

        let bundle = DirectoryBundle::new(dir.path());
        assert!(bundle.locate(&Asset::default_video()).is_none());
    }
}
