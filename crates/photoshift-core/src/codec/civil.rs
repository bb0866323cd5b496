//! Civil-time reconstruction for packed `YYYYMMDDhhmmss` integers.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Asia::Tokyo;

const YEAR_SHIFT: i64 = 10_000_000_000;
const MONTH_SHIFT: i64 = 100_000_000;
const DAY_SHIFT: i64 = 1_000_000;
const HOUR_SHIFT: i64 = 10_000;
const MINUTE_SHIFT: i64 = 100;

/// Calendar fields as decomposed from a packed integer. Values are not
/// range-checked; out-of-range fields roll over into the next unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CivilFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

impl CivilFields {
    /// Splits `n` by fixed decimal shifts. Division truncates toward zero, so
    /// negative inputs give negative fields.
    pub fn from_packed(mut n: i64) -> Self {
        let year = n / YEAR_SHIFT;
        n %= YEAR_SHIFT;
        let month = n / MONTH_SHIFT;
        n %= MONTH_SHIFT;
        let day = n / DAY_SHIFT;
        n %= DAY_SHIFT;
        let hour = n / HOUR_SHIFT;
        n %= HOUR_SHIFT;
        let minute = n / MINUTE_SHIFT;
        let second = n % MINUTE_SHIFT;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Unix seconds for `fields` read as Asia/Tokyo wall-clock time.
///
/// Returns `None` when the normalized date is outside the calendar's range.
pub fn epoch_seconds(fields: &CivilFields) -> Option<i64> {
    let wall = normalized_wall_clock(fields)?;
    Some(tokyo_wall_to_epoch(wall))
}

/// Months normalize first (month 13 is January of the next year, month 0 is
/// December of the previous one), then day/hour/minute/second are added as
/// offsets from the first of that month.
fn normalized_wall_clock(f: &CivilFields) -> Option<NaiveDateTime> {
    let months = f.year.checked_mul(12)?.checked_add(f.month - 1)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    first
        .checked_add_signed(Duration::days(f.day - 1))?
        .checked_add_signed(Duration::hours(f.hour))?
        .checked_add_signed(Duration::minutes(f.minute))?
        .checked_add_signed(Duration::seconds(f.second))
}

/// Resolves the zone offset by looking it up at the wall time taken as UTC,
/// then again at the adjusted instant in case that crossed a transition.
fn tokyo_wall_to_epoch(wall: NaiveDateTime) -> i64 {
    let local = wall.and_utc().timestamp();
    let guess = tokyo_offset_at(&wall);
    let utc = local - guess;
    match DateTime::from_timestamp(utc, 0) {
        Some(instant) => local - tokyo_offset_at(&instant.naive_utc()),
        None => utc,
    }
}

fn tokyo_offset_at(utc: &NaiveDateTime) -> i64 {
    i64::from(Tokyo.offset_from_utc_datetime(utc).fix().local_minus_utc())
}
