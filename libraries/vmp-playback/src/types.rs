//! Configuration types for playback controllers

use serde::{Deserialize, Serialize};
use std::time::Duration;
use vmp_core::{Asset, Result, VmpError};

/// What the video controller does when the app returns to the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForegroundResume {
    /// Resume playback regardless of the state before backgrounding
    #[default]
    Always,

    /// Resume only if playback was running when the app went to background
    RestorePrevious,
}

/// Configuration shared by the audio and video controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Forward/rewind step in seconds (default: 10)
    #[serde(default = "default_skip_interval_secs")]
    pub skip_interval_secs: f64,

    /// Seek rounding in units per second (default: 600, 0 disables rounding)
    #[serde(default = "default_seek_timescale")]
    pub seek_timescale: u32,

    /// Space kept free below the video surface for the transport bar, in points (default: 100)
    #[serde(default = "default_transport_bar_height")]
    pub transport_bar_height: f64,

    /// Bundled audio asset (default: `test-audio.mp3`)
    #[serde(default = "Asset::default_audio")]
    pub audio_asset: Asset,

    /// Bundled video asset (default: `test-video.mp4`)
    #[serde(default = "Asset::default_video")]
    pub video_asset: Asset,

    /// Video foreground policy (default: always resume)
    #[serde(default)]
    pub foreground_resume: ForegroundResume,
}

impl PlaybackConfig {
    /// Forward/rewind step
    ///
    /// Falls back to the default when the configured value is not a valid
    /// duration; `validate` reports that case.
    pub fn skip_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.skip_interval_secs)
            .ok()
            .filter(|step| !step.is_zero())
            .unwrap_or_else(|| Duration::from_secs_f64(default_skip_interval_secs()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !self.skip_interval_secs.is_finite() || self.skip_interval_secs <= 0.0 {
            return Err(VmpError::config(format!(
                "skip_interval_secs must be a positive number of seconds, got {}",
                self.skip_interval_secs
            )));
        }

        if !self.transport_bar_height.is_finite() || self.transport_bar_height < 0.0 {
            return Err(VmpError::config(format!(
                "transport_bar_height must be zero or more points, got {}",
                self.transport_bar_height
            )));
        }

        for asset in [&self.audio_asset, &self.video_asset] {
            if asset.name.is_empty() || asset.extension.is_empty() {
                return Err(VmpError::config(format!(
                    "asset needs a name and an extension, got {:?}",
                    asset
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_skip_interval_secs() -> f64 {
    10.0
}

fn default_seek_timescale() -> u32 {
    600
}

fn default_transport_bar_height() -> f64 {
    100.0
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            skip_interval_secs: default_skip_interval_secs(),
            seek_timescale: default_seek_timescale(),
            transport_bar_height: default_transport_bar_height(),
            audio_asset: Asset::default_audio(),
            video_asset: Asset::default_video(),
            foreground_resume: ForegroundResume::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.skip_interval(), Duration::from_secs(10));
        assert_eq!(config.seek_timescale, 600);
        assert_eq!(config.transport_bar_height, 100.0);
        assert_eq!(config.audio_asset, Asset::default_audio());
        assert_eq!(config.video_asset, Asset::default_video());
        assert_eq!(config.foreground_resume, ForegroundResume::Always);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: PlaybackConfig =
            serde_json::from_str(r#"{ "skip_interval_secs": 15.0, "foreground_resume": "restore_previous" }"#)
                .unwrap();
        assert_eq!(config.skip_interval(), Duration::from_secs(15));
        assert_eq!(config.foreground_resume, ForegroundResume::RestorePrevious);
        assert_eq!(config.seek_timescale, 600);
    }

    #[test]
    fn invalid_skip_interval_is_rejected_and_falls_back() {
        let config = PlaybackConfig {
            skip_interval_secs: -3.0,
            ..PlaybackConfig::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.skip_interval(), Duration::from_secs(10));
    }

    #[test]
    fn empty_asset_name_is_rejected() {
        let config = PlaybackConfig {
            video_asset: Asset::new("", "mp4"),
            ..PlaybackConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
