//! VMP command-line driver
//!
//! Drives the player state machine from a command script or stdin against the
//! simulated platform. This library exposes the pieces for testing.

pub mod commands;
pub mod config;
pub mod driver;
pub mod error;

pub use commands::Command;
pub use config::AppConfig;
pub use driver::{Driver, Flow, OnError};
pub use error::{CliError, Result};
