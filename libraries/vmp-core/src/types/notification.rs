//! System notifications delivered to controllers
//!
//! Interruption payloads arrive as raw numeric codes, the way the platform
//! hands them over, and are parsed on the receiving side. Anything that does
//! not parse is ignored by the controllers.

use serde::{Deserialize, Serialize};

/// Raw interruption type code for "interruption began"
pub const INTERRUPTION_TYPE_BEGAN: u64 = 1;

/// Raw interruption type code for "interruption ended"
pub const INTERRUPTION_TYPE_ENDED: u64 = 0;

/// Option bit set when the system suggests resuming playback
pub const INTERRUPTION_OPTION_SHOULD_RESUME: u64 = 1;

/// Channel a notification is posted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    /// Audio session interruptions (phone calls, alarms, other apps)
    Interruption,

    /// Application background/foreground transitions
    Lifecycle,
}

/// A notification posted by the platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    Interruption(InterruptionPayload),
    Lifecycle(LifecycleEvent),
}

impl Notification {
    /// Topic this notification is delivered on
    pub fn topic(&self) -> Topic {
        match self {
            Notification::Interruption(_) => Topic::Interruption,
            Notification::Lifecycle(_) => Topic::Lifecycle,
        }
    }
}

/// Application lifecycle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleEvent {
    DidEnterBackground,
    WillEnterForeground,
}

/// Unparsed interruption payload
///
/// Either field may be missing; a payload without a recognised type code
/// carries no interruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterruptionPayload {
    /// Interruption type code
    pub type_code: Option<u64>,

    /// Interruption option bits (only meaningful for "ended")
    pub options: Option<u64>,
}

impl InterruptionPayload {
    /// Payload for an interruption that just began
    pub fn began() -> Self {
        Self {
            type_code: Some(INTERRUPTION_TYPE_BEGAN),
            options: None,
        }
    }

    /// Payload for an interruption that ended
    pub fn ended(should_resume: bool) -> Self {
        Self {
            type_code: Some(INTERRUPTION_TYPE_ENDED),
            options: should_resume.then_some(INTERRUPTION_OPTION_SHOULD_RESUME),
        }
    }

    /// Parse into a typed interruption
    ///
    /// Returns `None` when the type code is missing or unknown.
    pub fn parse(&self) -> Option<Interruption> {
        match self.type_code? {
            INTERRUPTION_TYPE_BEGAN => Some(Interruption::Began),
            INTERRUPTION_TYPE_ENDED => Some(Interruption::Ended {
                should_resume: self
                    .options
                    .is_some_and(|bits| bits & INTERRUPTION_OPTION_SHOULD_RESUME != 0),
            }),
            _ => None,
        }
    }
}

/// Parsed audio interruption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interruption {
    Began,
    Ended { should_resume: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_began() {
        assert_eq!(InterruptionPayload::began().parse(), Some(Interruption::Began));
    }

    #[test]
    fn parse_ended_with_and_without_resume_hint() {
        assert_eq!(
            InterruptionPayload::ended(true).parse(),
            Some(Interruption::Ended {
                should_resume: true
            })
        );
        assert_eq!(
            InterruptionPayload::ended(false).parse(),
            Some(Interruption::Ended {
                should_resume: false
            })
        );
    }

    #[test]
    fn ended_with_unrelated_option_bits_does_not_resume() {
        let payload = InterruptionPayload {
            type_code: Some(INTERRUPTION_TYPE_ENDED),
            options: Some(0b100),
        };
        assert_eq!(
            payload.parse(),
            Some(Interruption::Ended {
                should_resume: false
            })
        );
    }

    #[test]
    fn unknown_or_missing_type_is_ignored() {
        assert_eq!(InterruptionPayload::default().parse(), None);
        let payload = InterruptionPayload {
            type_code: Some(7),
            options: Some(INTERRUPTION_OPTION_SHOULD_RESUME),
        };
        assert_eq!(payload.parse(), None);
    }

    #[test]
    fn notification_topics() {
        assert_eq!(
            Notification::Interruption(InterruptionPayload::began()).topic(),
            Topic::Interruption
        );
        assert_eq!(
            Notification::Lifecycle(LifecycleEvent::DidEnterBackground).topic(),
            Topic::Lifecycle
        );
    }
}
