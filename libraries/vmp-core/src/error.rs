//! Core error types for VMP
use thiserror::Error;

use crate::types::{Asset, PlaybackMode};

/// Result type alias using `VmpError`
pub type Result<T> = std::result::Result<T, VmpError>;

/// Core error type for VMP
#[derive(Error, Debug)]
pub enum VmpError {
    /// Bundled asset could not be located
    #[error("Asset not found: {0}")]
    AssetMissing(Asset),

    /// Audio session could not be configured or activated
    #[error("Audio session error: {0}")]
    Session(String),

    /// Media engine failed to open or drive a handle
    #[error("Media engine error: {0}")]
    Engine(String),

    /// Screen transition not allowed from the current mode
    #[error("Cannot switch from {from} to {to}")]
    InvalidTransition {
        from: PlaybackMode,
        to: PlaybackMode,
    },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VmpError {
    /// Create an audio session error
    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    /// Create a media engine error
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
