//! Transport controls shared by the audio and video screens

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use vmp_core::VmpError;

/// One of the five transport buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportAction {
    Play,
    Pause,
    Stop,
    Forward,
    Rewind,
}

impl TransportAction {
    /// Buttons in the order they appear in the transport bar
    pub const ALL: [TransportAction; 5] = [
        TransportAction::Play,
        TransportAction::Pause,
        TransportAction::Stop,
        TransportAction::Forward,
        TransportAction::Rewind,
    ];

    /// Symbol drawn on the button
    pub fn symbol_name(self) -> &'static str {
        match self {
            TransportAction::Play => "play.fill",
            TransportAction::Pause => "pause.fill",
            TransportAction::Stop => "stop.fill",
            TransportAction::Forward => "goforward.10",
            TransportAction::Rewind => "gobackward.10",
        }
    }
}

impl fmt::Display for TransportAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportAction::Play => "play",
            TransportAction::Pause => "pause",
            TransportAction::Stop => "stop",
            TransportAction::Forward => "forward",
            TransportAction::Rewind => "rewind",
        };
        f.write_str(name)
    }
}

impl FromStr for TransportAction {
    type Err = VmpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "play" => Ok(TransportAction::Play),
            "pause" => Ok(TransportAction::Pause),
            "stop" => Ok(TransportAction::Stop),
            "forward" | "ff" => Ok(TransportAction::Forward),
            "rewind" | "rw" => Ok(TransportAction::Rewind),
            other => Err(VmpError::invalid_input(format!(
                "unknown transport action: {other}"
            ))),
        }
    }
}

/// Operations every player screen exposes through its transport bar
///
/// None of these block or fail; problems degrade to no-ops and log lines.
pub trait Transport {
    fn play(&mut self);

    fn pause(&mut self);

    fn stop(&mut self);

    fn forward(&mut self);

    fn rewind(&mut self);

    /// Optimistic playing flag
    fn is_playing(&self) -> bool;

    /// Last position recorded by the controller
    fn current_position(&self) -> Duration;

    /// Dispatch a button press
    fn apply(&mut self, action: TransportAction) {
        match action {
            TransportAction::Play => self.play(),
            TransportAction::Pause => self.pause(),
            TransportAction::Stop => self.stop(),
            TransportAction::Forward => self.forward(),
            TransportAction::Rewind => self.rewind(),
        }
    }
}
