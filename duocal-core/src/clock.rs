//! Parsing of `HH:MM` draft times.
//!
//! Drafts carry free-text clock times. Each hour/minute field that cannot be
//! read falls back to a default, and the result records which path was taken.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Serialize;

use crate::constants::{FALLBACK_START_HOUR, FALLBACK_START_MINUTE};

/// One hour or minute field of a draft time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum ClockField {
    /// Read from the input
    Parsed(u32),
    /// Input was missing or malformed, fallback applied
    Defaulted(u32),
}

impl ClockField {
    pub fn value(self) -> u32 {
        match self {
            ClockField::Parsed(v) | ClockField::Defaulted(v) => v,
        }
    }

    pub fn was_defaulted(self) -> bool {
        matches!(self, ClockField::Defaulted(_))
    }

    fn or_default(parsed: Option<u32>, fallback: u32) -> Self {
        match parsed {
            Some(v) => ClockField::Parsed(v),
            None => ClockField::Defaulted(fallback),
        }
    }
}

/// Start and end clock times of a draft after fallbacks were applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockSpan {
    pub start_hour: ClockField,
    pub start_minute: ClockField,
    pub end_hour: ClockField,
    pub end_minute: ClockField,
}

impl ClockSpan {
    /// Resolve `start`/`end` inputs such as `"09:30"`.
    ///
    /// Fallbacks: start hour 9, start minute 0, end hour one past the start
    /// hour, end minute equal to the start minute.
    pub fn resolve(start: &str, end: &str) -> Self {
        let (sh, sm) = parse_clock(start);
        let (eh, em) = parse_clock(end);

        let start_hour = ClockField::or_default(sh, FALLBACK_START_HOUR);
        let start_minute = ClockField::or_default(sm, FALLBACK_START_MINUTE);
        let end_hour = ClockField::or_default(eh, start_hour.value() + 1);
        let end_minute = ClockField::or_default(em, start_minute.value());

        ClockSpan {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    pub fn any_defaulted(&self) -> bool {
        [
            self.start_hour,
            self.start_minute,
            self.end_hour,
            self.end_minute,
        ]
        .iter()
        .any(|f| f.was_defaulted())
    }

    /// Place the span on `day` in `tz`.
    ///
    /// An end hour of 24 (a defaulted end after a 23:xx start) lands on the
    /// following day. None if either wall time cannot be placed in `tz`.
    pub fn anchor<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        tz: &Tz,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = wall_time(day, self.start_hour.value(), self.start_minute.value())?;
        let end = wall_time(day, self.end_hour.value(), self.end_minute.value())?;
        Some((localize(tz, start)?, localize(tz, end)?))
    }
}

/// Split `"HH:MM"` into hour and minute, each None when missing or out of range.
/// Anything after a second colon is ignored.
pub fn parse_clock(input: &str) -> (Option<u32>, Option<u32>) {
    let mut parts = input.split(':');
    let hour = parts.next().and_then(|p| parse_component(p, 23));
    let minute = parts.next().and_then(|p| parse_component(p, 59));
    (hour, minute)
}

fn parse_component(part: &str, max: u32) -> Option<u32> {
    part.trim().parse::<u32>().ok().filter(|v| *v <= max)
}

fn wall_time(day: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(Duration::hours(i64::from(hour)) + Duration::minutes(i64::from(minute)))
}

/// Interpret a wall-clock time in `tz`. Ambiguous times take the earlier
/// instant; times skipped by a DST jump move forward one hour.
fn localize<Tz: TimeZone>(tz: &Tz, wall: NaiveDateTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&wall)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(wall + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Berlin;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    #[test]
    fn parses_well_formed_times() {
        assert_eq!(parse_clock("09:30"), (Some(9), Some(30)));
        assert_eq!(parse_clock("23:59"), (Some(23), Some(59)));
        assert_eq!(parse_clock(" 7 : 05 "), (Some(7), Some(5)));
        assert_eq!(parse_clock("18:45:10"), (Some(18), Some(45)));
    }

    #[test]
    fn rejects_malformed_components() {
        assert_eq!(parse_clock("ab:cd"), (None, None));
        assert_eq!(parse_clock("9"), (Some(9), None));
        assert_eq!(parse_clock(""), (None, None));
        assert_eq!(parse_clock("24:00"), (None, Some(0)));
        assert_eq!(parse_clock("10:60"), (Some(10), None));
        assert_eq!(parse_clock("-1:30"), (None, Some(30)));
    }

    #[test]
    fn resolve_keeps_parsed_values() {
        let span = ClockSpan::resolve("14:15", "16:00");
        assert_eq!(span.start_hour, ClockField::Parsed(14));
        assert_eq!(span.start_minute, ClockField::Parsed(15));
        assert_eq!(span.end_hour, ClockField::Parsed(16));
        assert_eq!(span.end_minute, ClockField::Parsed(0));
        assert!(!span.any_defaulted());
    }

    #[test]
    fn resolve_applies_start_fallbacks() {
        let span = ClockSpan::resolve("garbage", "11:00");
        assert_eq!(span.start_hour, ClockField::Defaulted(9));
        assert_eq!(span.start_minute, ClockField::Defaulted(0));
        assert!(span.any_defaulted());
    }

    #[test]
    fn resolve_derives_end_from_start() {
        let span = ClockSpan::resolve("13:20", "later");
        assert_eq!(span.end_hour, ClockField::Defaulted(14));
        assert_eq!(span.end_minute, ClockField::Defaulted(20));

        let span = ClockSpan::resolve("13:20", "15");
        assert_eq!(span.end_hour, ClockField::Parsed(15));
        assert_eq!(span.end_minute, ClockField::Defaulted(20));
    }

    #[test]
    fn anchor_in_utc() {
        let (start, end) = ClockSpan::resolve("09:00", "10:30").anchor(day(), &Utc).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-03-20T09:00:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-03-20T10:30:00+00:00");
    }

    #[test]
    fn anchor_converts_from_session_zone() {
        // Berlin is UTC+1 in March before the DST switch
        let (start, _) = ClockSpan::resolve("09:00", "10:00").anchor(day(), &Berlin).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-03-20T08:00:00+00:00");
    }

    #[test]
    fn defaulted_end_after_late_start_rolls_into_next_day() {
        let span = ClockSpan::resolve("23:30", "x");
        assert_eq!(span.end_hour, ClockField::Defaulted(24));

        let (start, end) = span.anchor(day(), &Utc).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-03-20T23:30:00+00:00");
        assert_eq!(end.to_rfc3339(), "2025-03-21T00:30:00+00:00");
    }

    #[test]
    fn anchor_skips_forward_over_dst_gap() {
        // 02:30 does not exist in Berlin on 2025-03-30
        let gap_day = NaiveDate::from_ymd_opt(2025, 3, 30).unwrap();
        let (start, _) = ClockSpan::resolve("02:30", "04:00").anchor(gap_day, &Berlin).unwrap();
        assert_eq!(start.to_rfc3339(), "2025-03-30T01:30:00+00:00");
    }
}
