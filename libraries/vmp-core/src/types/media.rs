//! Media selection and asset types
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of media the app can play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Audio => write!(f, "audio"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Which screen is visible
///
/// `None` is the chooser. Only a selection or a "back" action changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    #[default]
    None,
    Audio,
    Video,
}

impl PlaybackMode {
    /// The selected media kind, if any
    pub fn kind(self) -> Option<MediaKind> {
        match self {
            PlaybackMode::None => None,
            PlaybackMode::Audio => Some(MediaKind::Audio),
            PlaybackMode::Video => Some(MediaKind::Video),
        }
    }
}

impl From<Option<MediaKind>> for PlaybackMode {
    fn from(kind: Option<MediaKind>) -> Self {
        match kind {
            None => PlaybackMode::None,
            Some(MediaKind::Audio) => PlaybackMode::Audio,
            Some(MediaKind::Video) => PlaybackMode::Video,
        }
    }
}

impl From<MediaKind> for PlaybackMode {
    fn from(kind: MediaKind) -> Self {
        Some(kind).into()
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::None => write!(f, "chooser"),
            PlaybackMode::Audio => write!(f, "audio"),
            PlaybackMode::Video => write!(f, "video"),
        }
    }
}

/// A read-only resource shipped inside the application bundle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asset {
    /// Resource name without extension
    pub name: String,

    /// File extension without the leading dot
    pub extension: String,
}

impl Asset {
    /// Create a new asset reference
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extension: extension.into(),
        }
    }

    /// Default bundled audio asset (`test-audio.mp3`)
    pub fn default_audio() -> Self {
        Self::new("test-audio", "mp3")
    }

    /// Default bundled video asset (`test-video.mp4`)
    pub fn default_video() -> Self {
        Self::new("test-video", "mp4")
    }

    /// File name as it appears in the bundle
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.name, self.extension)
    }
}

/// Identity of an opened media handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HandleId(u64);

impl HandleId {
    /// Wrap a raw handle number
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle number
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_kind() {
        assert_eq!(PlaybackMode::from(None), PlaybackMode::None);
        assert_eq!(PlaybackMode::from(MediaKind::Audio), PlaybackMode::Audio);
        assert_eq!(PlaybackMode::Video.kind(), Some(MediaKind::Video));
        assert_eq!(PlaybackMode::default(), PlaybackMode::None);
    }

    #[test]
    fn default_assets() {
        assert_eq!(Asset::default_audio().file_name(), "test-audio.mp3");
        assert_eq!(Asset::default_video().to_string(), "test-video.mp4");
    }
}
