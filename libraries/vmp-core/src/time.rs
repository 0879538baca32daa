//! Media time helpers

use std::time::Duration;

/// Round `position` to the nearest `1 / timescale` seconds
///
/// Media frameworks store time as a rational value over a timescale; a seek to
/// an arbitrary `Duration` lands on that grid. A timescale of 0 leaves the
/// position unchanged.
pub fn round_to_timescale(position: Duration, timescale: u32) -> Duration {
    if timescale == 0 {
        return position;
    }
    let units = (position.as_secs_f64() * f64::from(timescale)).round();
    Duration::from_secs_f64(units / f64::from(timescale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_are_unchanged() {
        assert_eq!(
            round_to_timescale(Duration::from_secs(20), 600),
            Duration::from_secs(20)
        );
    }

    #[test]
    fn rounds_to_nearest_unit() {
        let rounded = round_to_timescale(Duration::from_micros(1_000_900), 600);
        let units = rounded.as_secs_f64() * 600.0;
        assert!((units - units.round()).abs() < 1e-6);
        assert!((rounded.as_secs_f64() - 1.0).abs() < 1.0 / 600.0);
    }

    #[test]
    fn zero_timescale_disables_rounding() {
        let position = Duration::from_nanos(1_000_000_001);
        assert_eq!(round_to_timescale(position, 0), position);
    }
}
