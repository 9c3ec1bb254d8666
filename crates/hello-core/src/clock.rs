//! Clock abstraction for determinism.

use std::fmt::Display;

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// 24-hour `HH:MM:SS`, no zone suffix.
const HMS_FORMAT: &str = "%H:%M:%S";

/// Abstraction over system time for deterministic behavior.
///
/// Instants carry their own UTC offset; formatting renders the wall-clock
/// time in that offset rather than converting to the host zone.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Production clock that delegates to the host's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Renders `instant` as `HH:MM:SS` in its own offset.
///
/// Sub-second precision is truncated, so the result is always exactly eight
/// characters.
#[must_use]
pub fn format_hms<Tz>(instant: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    instant.format(HMS_FORMAT).to_string()
}

/// Returns the current time of `clock` formatted as `HH:MM:SS`.
#[must_use]
pub fn now(clock: &dyn Clock) -> String {
    format_hms(&clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Timelike, Utc};

    struct StoppedClock(DateTime<FixedOffset>);

    impl Clock for StoppedClock {
        fn now(&self) -> DateTime<FixedOffset> {
            self.0
        }
    }

    fn is_hms(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 8
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b':',
                _ => b.is_ascii_digit(),
            })
    }

    #[test]
    fn test_midnight_renders_all_zeros() {
        let midnight = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format_hms(&midnight), "00:00:00");
    }

    #[test]
    fn test_last_second_of_day_uses_24_hour_clock() {
        let late = Utc.with_ymd_and_hms(2021, 6, 30, 23, 59, 59).unwrap();
        assert_eq!(format_hms(&late), "23:59:59");
    }

    #[test]
    fn test_subsecond_precision_is_truncated() {
        let instant = Utc
            .with_ymd_and_hms(2020, 12, 25, 1, 2, 3)
            .unwrap()
            .with_nanosecond(999_999_999)
            .unwrap();
        assert_eq!(format_hms(&instant), "01:02:03");
    }

    #[test]
    fn test_format_preserves_embedded_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let instant = tokyo.with_ymd_and_hms(2020, 12, 25, 1, 2, 3).unwrap();
        assert_eq!(format_hms(&instant), "01:02:03");
        assert_eq!(format_hms(&instant.with_timezone(&Utc)), "16:02:03");
    }

    #[test]
    fn test_now_formats_the_clock_reading() {
        let instant = Utc.with_ymd_and_hms(2022, 3, 4, 5, 6, 7).unwrap().fixed_offset();
        let clock = StoppedClock(instant);
        assert_eq!(now(&clock), format_hms(&clock.now()));
        assert_eq!(now(&clock), "05:06:07");
    }

    #[test]
    fn test_format_is_always_eight_characters() {
        for hour in [0, 1, 9, 10, 12, 23] {
            for minute in [0, 7, 30, 59] {
                let instant = Utc.with_ymd_and_hms(2020, 2, 29, hour, minute, 5).unwrap();
                let rendered = format_hms(&instant);
                assert!(is_hms(&rendered), "unexpected rendering: {rendered}");
            }
        }
    }

    #[test]
    fn test_system_clock_renders_hms() {
        assert!(is_hms(&now(&SystemClock)));
    }
}
