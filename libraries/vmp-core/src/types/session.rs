//! Audio session configuration types
use serde::{Deserialize, Serialize};

/// Audio output category requested from the platform session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionCategory {
    /// Audio is central to the app; keeps playing with the ringer silenced
    #[default]
    Playback,
}

/// Mode applied on top of the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    #[default]
    Default,
}
