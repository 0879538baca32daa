//! Domain types shared by every VMP crate

mod geometry;
mod media;
mod notification;
mod session;

pub use geometry::{Rect, Size};
pub use media::{Asset, HandleId, MediaKind, PlaybackMode};
pub use notification::{
    Interruption, InterruptionPayload, LifecycleEvent, Notification, Topic,
    INTERRUPTION_OPTION_SHOULD_RESUME, INTERRUPTION_TYPE_BEGAN, INTERRUPTION_TYPE_ENDED,
};
pub use session::{SessionCategory, SessionMode};
