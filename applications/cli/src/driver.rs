//! Command driver
//!
//! Runs commands against a [`MediaApp`] wired to the simulated platform and
//! prints what the player reports back.

use crate::commands::{Command, HELP};
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use vmp_core::{Asset, AssetBundle, DirectoryBundle, Notification, Platform};
use vmp_playback::{MediaApp, PlaybackEvent};
use vmp_sim::SimPlatform;

/// Whether to keep going after a bad line or a rejected command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop and return the error
    Abort,
    /// Print the error and continue with the next line
    Report,
}

/// Whether the driver should read another command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Driver {
    sim: SimPlatform,
    app: MediaApp,
}

impl Driver {
    /// Build the simulated platform described by `config` and start on the chooser
    pub fn new(config: &AppConfig) -> Self {
        let playback = &config.playback;
        let sim = SimPlatform::new()
            .with_engine(|engine| engine.with_timescale(playback.seek_timescale));
        sim.bundle.insert(playback.audio_asset.clone());
        sim.bundle.insert(playback.video_asset.clone());

        let bundle: Arc<dyn AssetBundle> = match &config.assets.root {
            Some(root) => {
                info!("Reading assets from {:?}", root);
                Arc::new(DirectoryBundle::new(root.clone()))
            }
            None => sim.bundle.clone(),
        };

        let path_of = |asset: &Asset| -> PathBuf {
            match &config.assets.root {
                Some(root) => root.join(asset.file_name()),
                None => sim.bundle.path_of(asset),
            }
        };
        sim.engine
            .set_duration(path_of(&playback.audio_asset), config.assets.audio_duration());
        sim.engine
            .set_duration(path_of(&playback.video_asset), config.assets.video_duration());

        let platform = Platform::new(
            sim.engine.clone(),
            sim.session.clone(),
            bundle,
            sim.notifications.clone(),
        );
        let app = MediaApp::new(platform, playback.clone());

        Self { sim, app }
    }

    pub fn app(&self) -> &MediaApp {
        &self.app
    }

    pub fn sim(&self) -> &SimPlatform {
        &self.sim
    }

    /// Read commands line by line until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        out: &mut W,
        on_error: OnError,
    ) -> Result<()> {
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(message) => {
                    let err = CliError::Parse {
                        line: line_no,
                        message,
                    };
                    match on_error {
                        OnError::Abort => return Err(err),
                        OnError::Report => {
                            writeln!(out, "error: {}", err)?;
                            continue;
                        }
                    }
                }
            };

            match self.execute(&command, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Player(e)) if on_error == OnError::Report => {
                    writeln!(out, "error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    /// Run one command and print the events it produced
    pub fn execute<W: Write>(&mut self, command: &Command, out: &mut W) -> Result<Flow> {
        debug!("Executing '{}'", command);

        match command {
            Command::Select(kind) => self.app.select(*kind)?,
            Command::Back => self.app.back(),
            Command::Transport(action) => {
                if !self.app.press(*action) {
                    warn!("No transport bar on the chooser, '{}' ignored", action);
                    writeln!(out, "no player open; choose audio or video first")?;
                }
            }
            Command::Interrupt(payload) => {
                self.post(Notification::Interruption(*payload));
            }
            Command::Lifecycle(event) => {
                self.post(Notification::Lifecycle(*event));
            }
            Command::Layout(size) => self.app.layout(*size),
            Command::Wait(duration) => self.sim.clock.advance(*duration),
            Command::Status => self.write_status(out)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        for event in self.app.drain_events() {
            writeln!(out, "  {}", describe(&event))?;
        }
        Ok(Flow::Continue)
    }

    fn post(&mut self, notification: Notification) {
        let delivered = self.sim.notifications.post(notification);
        let handled = self.app.pump();
        debug!("Notification reached {} observer(s), {} handled", delivered, handled);
    }

    fn write_status<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "screen: {}", self.app.mode())?;
        if let Some(position) = self.app.current_position() {
            write!(
                out,
                " | {} | position: {}",
                if self.app.is_playing() { "playing" } else { "paused" },
                format_time(position)
            )?;
        }
        if let Some(video) = self.app.video() {
            if let Some(live) = video.live_position() {
                write!(out, " | live: {}", format_time(live))?;
            }
            let frame = video.surface().frame();
            write!(out, " | surface: {}x{}", frame.width, frame.height)?;
        }
        writeln!(out, " | clock: {}", format_time(self.sim.clock.now()))?;
        Ok(())
    }
}

/// One-line human description of an event
pub fn describe(event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::StateChanged {
            kind,
            playing: true,
        } => format!("{kind} playing"),
        PlaybackEvent::StateChanged {
            kind,
            playing: false,
        } => format!("{kind} paused"),
        PlaybackEvent::Seeked { kind, position } => {
            format!("{kind} seeked to {}", format_time(*position))
        }
        PlaybackEvent::Stopped { kind } => format!("{kind} stopped"),
        PlaybackEvent::Interrupted { kind } => format!("{kind} interrupted"),
        PlaybackEvent::AssetMissing { asset } => format!("asset {asset} missing"),
        PlaybackEvent::SessionUnavailable { reason } => {
            format!("audio session unavailable: {reason}")
        }
        PlaybackEvent::SurfaceAttached { handle } => format!("surface attached to {handle}"),
        PlaybackEvent::SurfaceDetached => "surface detached".to_string(),
    }
}

/// Format a position as seconds with millisecond precision
pub fn format_time(position: Duration) -> String {
    format!("{:.3}s", position.as_secs_f64())
}
