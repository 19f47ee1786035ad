// ABOUTME: Sleep duration derived from the profile's wake-up time and bedtime
// ABOUTME: Handles rest that crosses midnight and formats as "H jam M menit"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eatitude

use tracing::debug;

/// Shown when either time is absent or unparseable
pub const UNKNOWN_DURATION: &str = "-";

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minutes since midnight for a `HH:MM` string
#[must_use]
pub fn minutes_of_day(time: &str) -> Option<u32> {
    let (hours, minutes) = time.trim().split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}

/// Minutes slept between `sleep_time` and the following `wake_time`
///
/// A bedtime later in the day than the wake-up time means the rest crossed
/// midnight. Otherwise both fall on the same day. Equal times give zero.
#[must_use]
pub fn sleep_duration_minutes(wake_time: &str, sleep_time: &str) -> Option<u32> {
    let wake = minutes_of_day(wake_time)?;
    let sleep = minutes_of_day(sleep_time)?;
    Some(if sleep > wake {
        MINUTES_PER_DAY - sleep + wake
    } else {
        wake - sleep
    })
}

/// Sleep duration as `"H jam M menit"`, or `"-"` when it cannot be computed
#[must_use]
pub fn format_sleep_duration(wake_time: &str, sleep_time: &str) -> String {
    sleep_duration_minutes(wake_time, sleep_time).map_or_else(
        || {
            debug!(wake_time, sleep_time, "Sleep duration unavailable");
            UNKNOWN_DURATION.to_owned()
        },
        |total| format!("{} jam {} menit", total / 60, total % 60),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overnight_sleep() {
        assert_eq!(format_sleep_duration("06:00", "22:00"), "8 jam 0 menit");
        assert_eq!(format_sleep_duration("05:45", "23:30"), "6 jam 15 menit");
    }

    #[test]
    fn test_same_day_rest() {
        assert_eq!(sleep_duration_minutes("14:00", "13:00"), Some(60));
        assert_eq!(format_sleep_duration("06:00", "01:30"), "4 jam 30 menit");
    }

    #[test]
    fn test_equal_times() {
        assert_eq!(format_sleep_duration("07:00", "07:00"), "0 jam 0 menit");
    }

    #[test]
    fn test_missing_or_malformed_times() {
        assert_eq!(format_sleep_duration("", "22:00"), UNKNOWN_DURATION);
        assert_eq!(format_sleep_duration("06:00", "abc"), UNKNOWN_DURATION);
        assert_eq!(format_sleep_duration("24:00", "22:00"), UNKNOWN_DURATION);
        assert_eq!(minutes_of_day("06:61"), None);
    }
}
