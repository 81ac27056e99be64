use std::collections::BTreeMap;

use crate::date::CalendarDate;
use crate::error::Error;
use crate::model::{DailyDataPoint, MonthlyBucket, YearlyBucket};
use crate::series;

/// Aggregate a daily series into calendar-month buckets.
///
/// The grouping key is the calendar month of each day; there is no range
/// parameter and no clamping — the span is implicitly the span of the
/// input. Bucket timestamps are UTC midnight of day 01 whether or not that
/// day appears in the input.
pub fn by_month(daily: &[DailyDataPoint]) -> Result<Vec<MonthlyBucket>, Error> {
    let series = series::build(daily)?;

    let mut totals: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for p in &series {
        *totals.entry((p.day.year, p.day.month)).or_insert(0) += p.downloads;
    }

    // BTreeMap iteration gives ascending chronological order
    Ok(totals
        .into_iter()
        .map(|((year, month), downloads)| MonthlyBucket {
            month: format!("{year:04}-{month:02}"),
            downloads,
            timestamp: CalendarDate {
                year,
                month,
                day: 1,
            }
            .to_utc_midnight(),
        })
        .collect())
}

/// Aggregate a daily series into calendar-year buckets. Bucket timestamps
/// are UTC midnight of January 1.
pub fn by_year(daily: &[DailyDataPoint]) -> Result<Vec<YearlyBucket>, Error> {
    let series = series::build(daily)?;

    let mut totals: BTreeMap<i32, u64> = BTreeMap::new();
    for p in &series {
        *totals.entry(p.day.year).or_insert(0) += p.downloads;
    }

    Ok(totals
        .into_iter()
        .map(|(year, downloads)| YearlyBucket {
            year: format!("{year:04}"),
            downloads,
            timestamp: CalendarDate {
                year,
                month: 1,
                day: 1,
            }
            .to_utc_midnight(),
        })
        .collect())
}
