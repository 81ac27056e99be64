//! Calendar-date value type and civil-calendar arithmetic.
//!
//! All dates are plain UTC calendar dates in `YYYY-MM-DD` form with no
//! time-of-day and no timezone offset. Conversions go through Howard
//! Hinnant's civil calendar algorithms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const MS_PER_DAY: i64 = 86_400_000;

/// A UTC calendar date. Component order makes the derived `Ord`
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// The instant at 00:00:00.000 UTC on this date, in milliseconds since
    /// the Unix epoch.
    pub fn to_utc_midnight(self) -> i64 {
        ymd_to_days(self.year as i64, self.month, self.day) * MS_PER_DAY
    }

    /// The calendar date `n` days after this one (`n` may be negative),
    /// with correct month/year rollover.
    pub fn add_days(self, n: i64) -> CalendarDate {
        let days = ymd_to_days(self.year as i64, self.month, self.day) + n;
        let (year, month, day) = days_to_ymd(days);
        CalendarDate {
            year: year as i32,
            month,
            day,
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` date. Rejects malformed strings and
    /// non-existent dates such as `2025-02-30`.
    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = s.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !well_formed {
            return Err(Error::InvalidDate(s.to_string()));
        }

        let year: i32 = s[0..4].parse().map_err(|_| Error::InvalidDate(s.to_string()))?;
        let month: u32 = s[5..7].parse().map_err(|_| Error::InvalidDate(s.to_string()))?;
        let day: u32 = s[8..10].parse().map_err(|_| Error::InvalidDate(s.to_string()))?;

        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return Err(Error::InvalidDate(s.to_string()));
        }

        Ok(CalendarDate { year, month, day })
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid date: {s}")))
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Convert days since Unix epoch to (year, month, day).
///
/// Algorithm based on `civil_from_days` by Howard Hinnant.
fn days_to_ymd(days: i64) -> (i64, u32, u32) {
    let z = days + 719468;
    let era = if z >= 0 { z } else { z - 146096 } / 146097;
    let doe = (z - era * 146097) as u64;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
    let y = yoe as i64 + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y, m as u32, d as u32)
}

/// Convert (year, month, day) to days since Unix epoch.
///
/// Inverse of [`days_to_ymd`]. Algorithm based on Howard Hinnant's
/// `days_from_civil`.
fn ymd_to_days(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 {
        month as i64 + 9
    } else {
        month as i64 - 3
    };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = (y - era * 400) as u64;
    let doy = (153 * m as u64 + 2) / 5 + day as u64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146097 + doe as i64 - 719468
}
