//! Calendar arithmetic behind the month grid and week strip.
//!
//! Everything here works at day granularity on [`NaiveDate`]. Callers convert
//! timestamps into the session's time zone first, so "same day" always means
//! the same wall-calendar day for the people looking at the calendar.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone};

/// True if both instants fall on the same calendar day, each read in its own zone.
pub fn same_day<A: TimeZone, B: TimeZone>(a: &DateTime<A>, b: &DateTime<B>) -> bool {
    a.date_naive() == b.date_naive()
}

/// Number of days in `month` (1-12) of `year`. None for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from((next - first).num_days()).ok()
}

/// The 1st of the reference's month.
pub fn first_of_month(reference: NaiveDate) -> NaiveDate {
    reference - Days::new(u64::from(reference.day0()))
}

/// Every date of the reference's month, from the 1st to the last day.
pub fn days_of_month(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = first_of_month(reference);
    first
        .iter_days()
        .take_while(|day| day.month() == first.month())
        .collect()
}

/// The Monday on or before `reference`. Sundays belong to the week that began six days earlier.
pub fn start_of_week(reference: NaiveDate) -> NaiveDate {
    reference - Days::new(u64::from(reference.weekday().num_days_from_monday()))
}

/// Seven consecutive dates, Monday through Sunday, of the week containing `reference`.
pub fn week_days(reference: NaiveDate) -> Vec<NaiveDate> {
    start_of_week(reference).iter_days().take(7).collect()
}

/// Same day-of-month `delta` months away, clamped to the end of shorter months
/// (Jan 31 + 1 month = Feb 28/29). None if the result is out of chrono's range.
pub fn shift_month(reference: NaiveDate, delta: i32) -> Option<NaiveDate> {
    let months = Months::new(delta.unsigned_abs());
    if delta >= 0 {
        reference.checked_add_months(months)
    } else {
        reference.checked_sub_months(months)
    }
}
