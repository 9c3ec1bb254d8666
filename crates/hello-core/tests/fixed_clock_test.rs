//! Formatting behavior against the shared `FixedClock`.

use chrono::{FixedOffset, TimeZone, Utc};
use hello_core::{Clock, now};
use hello_test_support::FixedClock;

#[test]
fn test_fixed_clock_at_christmas_formats_to_01_02_03() {
    let clock = FixedClock::from(Utc.with_ymd_and_hms(2020, 12, 25, 1, 2, 3).unwrap());

    assert_eq!(now(&clock), "01:02:03");
}

#[test]
fn test_identical_instants_format_identically() {
    let clock = FixedClock::utc(2020, 12, 25, 1, 2, 3);

    assert_eq!(now(&clock), now(&clock));
    assert_eq!(clock.now(), clock.now());
}

#[test]
fn test_fixed_clock_keeps_its_own_offset() {
    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let clock = FixedClock(offset.with_ymd_and_hms(2020, 12, 24, 20, 2, 3).unwrap());

    assert_eq!(now(&clock), "20:02:03");
}
