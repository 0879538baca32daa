//! CLI configuration
//!
//! Loaded from an optional TOML file and `VMP_`-prefixed environment
//! variables. Nested keys use a double underscore, e.g.
//! `VMP_PLAYBACK__SKIP_INTERVAL_SECS=15` or `VMP_ASSETS__ROOT=./media`.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use vmp_playback::PlaybackConfig;

/// File picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "vmp.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_assets")]
    pub assets: AssetSettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSettings {
    /// Directory holding the media files; the built-in bundle is used when unset
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Length the simulated engine reports for the audio asset
    #[serde(default = "default_audio_duration_secs")]
    pub audio_duration_secs: u64,

    /// Length the simulated engine reports for the video asset
    #[serde(default = "default_video_duration_secs")]
    pub video_duration_secs: u64,
}

impl AssetSettings {
    pub fn audio_duration(&self) -> Duration {
        Duration::from_secs(self.audio_duration_secs)
    }

    pub fn video_duration(&self) -> Duration {
        Duration::from_secs(self.video_duration_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// Fallback filter when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `vmp.toml` in the working
    /// directory is read if present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with VMP_)
        settings = settings.add_source(
            config::Environment::with_prefix("VMP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.playback
            .validate()
            .map_err(|e| CliError::Config(e.to_string()))?;

        if self.assets.audio_duration_secs == 0 || self.assets.video_duration_secs == 0 {
            return Err(CliError::Config(
                "media durations must be at least one second".to_string(),
            ));
        }

        if let Some(root) = &self.assets.root {
            if !root.is_dir() {
                return Err(CliError::Config(format!(
                    "asset directory {:?} does not exist",
                    root
                )));
            }
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::Config("log filter must not be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            assets: default_assets(),
            logging: default_logging(),
        }
    }
}

// Default values
fn default_assets() -> AssetSettings {
    AssetSettings {
        root: None,
        audio_duration_secs: default_audio_duration_secs(),
        video_duration_secs: default_video_duration_secs(),
    }
}

fn default_audio_duration_secs() -> u64 {
    180
}

fn default_video_duration_secs() -> u64 {
    120
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_log_filter(),
    }
}

fn default_log_filter() -> String {
    "vmp=info,vmp_playback=info".to_string()
}
