//! Position arithmetic shared by both controllers
//!
//! Positions are `Duration`s, so they cannot go negative. The upper bound is
//! the media duration when the engine reports one.

use std::time::Duration;
use vmp_core::time::round_to_timescale;

/// Clamp `position` into `[0, duration]`
pub fn clamp_to_duration(position: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(duration) => position.min(duration),
        None => position,
    }
}

/// Target `step` after `from`, rounded then clamped
pub fn step_forward(
    from: Duration,
    step: Duration,
    duration: Option<Duration>,
    timescale: u32,
) -> Duration {
    let target = round_to_timescale(from.saturating_add(step), timescale);
    clamp_to_duration(target, duration)
}

/// Target `step` before `from`, floored at zero
pub fn step_back(
    from: Duration,
    step: Duration,
    duration: Option<Duration>,
    timescale: u32,
) -> Duration {
    let target = round_to_timescale(from.saturating_sub(step), timescale);
    clamp_to_duration(target, duration)
}
