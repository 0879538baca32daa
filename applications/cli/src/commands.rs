//! Script commands
//!
//! One command per line. Blank lines and `#` comments are skipped.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use vmp_core::{InterruptionPayload, LifecycleEvent, MediaKind, Size};
use vmp_playback::TransportAction;

/// A single user interaction or platform event
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Pick a media type on the chooser
    Select(MediaKind),
    /// Leave the player screen
    Back,
    /// Press a transport button
    Transport(TransportAction),
    /// Deliver an audio interruption
    Interrupt(InterruptionPayload),
    /// Deliver an app lifecycle transition
    Lifecycle(LifecycleEvent),
    /// Resize the player container
    Layout(Size),
    /// Let the virtual clock run
    Wait(Duration),
    Status,
    Help,
    Quit,
}

impl Command {
    /// Parse one script line, skipping blanks and comments
    pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
        let line = match line.split_once('#') {
            Some((code, _comment)) => code,
            None => line,
        }
        .trim();

        if line.is_empty() {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<String> = s.split_whitespace().map(str::to_ascii_lowercase).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["audio"] => Ok(Command::Select(MediaKind::Audio)),
            ["video"] => Ok(Command::Select(MediaKind::Video)),
            ["back"] => Ok(Command::Back),
            ["interrupt", "begin"] => Ok(Command::Interrupt(InterruptionPayload::began())),
            ["interrupt", "end"] => Ok(Command::Interrupt(InterruptionPayload::ended(false))),
            ["interrupt", "end", "resume"] => {
                Ok(Command::Interrupt(InterruptionPayload::ended(true)))
            }
            ["background"] => Ok(Command::Lifecycle(LifecycleEvent::DidEnterBackground)),
            ["foreground"] => Ok(Command::Lifecycle(LifecycleEvent::WillEnterForeground)),
            ["layout", width, height] => {
                let width = parse_points(width)?;
                let height = parse_points(height)?;
                Ok(Command::Layout(Size::new(width, height)))
            }
            ["wait", secs] => {
                let secs: f64 = secs
                    .parse()
                    .map_err(|_| format!("invalid number of seconds: {secs}"))?;
                Duration::try_from_secs_f64(secs)
                    .map(Command::Wait)
                    .map_err(|_| format!("invalid number of seconds: {secs}"))
            }
            ["status"] => Ok(Command::Status),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [action] => action
                .parse::<TransportAction>()
                .map(Command::Transport)
                .map_err(|_| format!("unknown command: {s}")),
            _ => Err(format!("unknown command: {s}")),
        }
    }
}

fn parse_points(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(points) if points.is_finite() && points >= 0.0 => Ok(points),
        _ => Err(format!("invalid size: {value}")),
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Select(kind) => write!(f, "{kind}"),
            Command::Back => f.write_str("back"),
            Command::Transport(action) => write!(f, "{action}"),
            Command::Interrupt(payload) => match payload.parse() {
                Some(vmp_core::Interruption::Began) => f.write_str("interrupt begin"),
                Some(vmp_core::Interruption::Ended {
                    should_resume: true,
                }) => f.write_str("interrupt end resume"),
                _ => f.write_str("interrupt end"),
            },
            Command::Lifecycle(LifecycleEvent::DidEnterBackground) => f.write_str("background"),
            Command::Lifecycle(LifecycleEvent::WillEnterForeground) => f.write_str("foreground"),
            Command::Layout(size) => write!(f, "layout {} {}", size.width, size.height),
            Command::Wait(duration) => write!(f, "wait {}", duration.as_secs_f64()),
            Command::Status => f.write_str("status"),
            Command::Help => f.write_str("help"),
            Command::Quit => f.write_str("quit"),
        }
    }
}

/// Usage text printed by `help`
pub const HELP: &str = "\
commands:
  audio | video              open a player screen from the chooser
  back                       stop playback and return to the chooser
  play | pause | stop        transport controls
  forward | rewind           skip 10 seconds
  interrupt begin            simulate an audio interruption
  interrupt end [resume]     end the interruption, optionally asking to resume
  background | foreground    simulate app lifecycle transitions
  layout <width> <height>    resize the player container
  wait <secs>                advance the clock
  status                     print the current screen and position
  quit                       exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_navigation_and_transport() {
        assert_eq!("audio".parse::<Command>(), Ok(Command::Select(MediaKind::Audio)));
        assert_eq!("VIDEO".parse::<Command>(), Ok(Command::Select(MediaKind::Video)));
        assert_eq!("back".parse::<Command>(), Ok(Command::Back));
        assert_eq!(
            "play".parse::<Command>(),
            Ok(Command::Transport(TransportAction::Play))
        );
        assert_eq!("ff".parse::<Command>(), Ok(Command::Transport(TransportAction::Forward)));
        assert_eq!(
            "rewind".parse::<Command>(),
            Ok(Command::Transport(TransportAction::Rewind))
        );
    }

    #[test]
    fn parses_interruptions() {
        assert_eq!(
            "interrupt begin".parse::<Command>(),
            Ok(Command::Interrupt(InterruptionPayload::began()))
        );
        assert_eq!(
            "interrupt end".parse::<Command>(),
            Ok(Command::Interrupt(InterruptionPayload::ended(false)))
        );
        assert_eq!(
            "interrupt   end  resume".parse::<Command>(),
            Ok(Command::Interrupt(InterruptionPayload::ended(true)))
        );
    }

    #[test]
    fn parses_arguments() {
        assert_eq!(
            "layout 390 844".parse::<Command>(),
            Ok(Command::Layout(Size::new(390.0, 844.0)))
        );
        assert_eq!(
            "wait 2.5".parse::<Command>(),
            Ok(Command::Wait(Duration::from_millis(2500)))
        );
        assert!("wait -1".parse::<Command>().is_err());
        assert!("layout 390".parse::<Command>().is_err());
        assert!("layout wide 10".parse::<Command>().is_err());
    }

    #[test]
    fn rejects_unknown_commands() {
        let err = "dance".parse::<Command>().unwrap_err();
        assert!(err.contains("dance"));
        assert!("play now".parse::<Command>().is_err());
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(Command::parse_line(""), Ok(None));
        assert_eq!(Command::parse_line("   # just a note"), Ok(None));
        assert_eq!(
            Command::parse_line("pause  # hold it"),
            Ok(Some(Command::Transport(TransportAction::Pause)))
        );
    }

    #[test]
    fn display_parses_back() {
        let commands = [
            Command::Select(MediaKind::Audio),
            Command::Interrupt(InterruptionPayload::ended(true)),
            Command::Lifecycle(LifecycleEvent::WillEnterForeground),
            Command::Layout(Size::new(320.0, 480.0)),
            Command::Wait(Duration::from_secs(3)),
            Command::Transport(TransportAction::Stop),
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>(), Ok(command));
        }
    }
}
