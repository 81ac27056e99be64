use crate::date::CalendarDate;
use crate::error::Error;
use crate::model::{DailyDataPoint, WeeklyBucket};
use crate::series;

/// Fold a daily series into consecutive 7-day windows over the inclusive
/// range `[start, end]`.
///
/// Windows are contiguous and non-overlapping, anchored at `start`; the
/// final window is clamped to `end` even when that leaves it shorter than
/// 7 days. Days absent from the series count zero, and points outside the
/// range are never counted. An empty series yields no buckets regardless
/// of the range — this never synthesizes zero-filled weeks.
pub fn aggregate(
    daily: &[DailyDataPoint],
    start: CalendarDate,
    end: CalendarDate,
) -> Result<Vec<WeeklyBucket>, Error> {
    if start > end {
        return Err(Error::InvalidRange { start, end });
    }

    let series = series::build(daily)?;
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let mut buckets = Vec::new();
    let mut week_start = start;
    while week_start <= end {
        let week_end = week_start.add_days(6).min(end);
        let downloads = series
            .iter()
            .filter(|p| p.day >= week_start && p.day <= week_end)
            .map(|p| p.downloads)
            .sum();
        buckets.push(WeeklyBucket {
            week_start,
            week_end,
            downloads,
        });
        week_start = week_end.add_days(1);
    }

    Ok(buckets)
}
