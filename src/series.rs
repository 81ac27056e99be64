use crate::error::Error;
use crate::model::{DailyDataPoint, DailyEvolutionPoint};

/// Validate a raw daily series and normalize it into a dated, timestamped
/// sequence sorted ascending by day.
///
/// This is the single validation point for daily input: every aggregator
/// runs its input through here first. Empty input is valid and yields an
/// empty series.
pub fn build(points: &[DailyDataPoint]) -> Result<Vec<DailyEvolutionPoint>, Error> {
    let mut series = Vec::with_capacity(points.len());

    for point in points {
        let day = point.day.parse()?;
        if point.downloads < 0 {
            return Err(Error::InvalidCount {
                day: point.day.clone(),
                count: point.downloads,
            });
        }
        series.push(DailyEvolutionPoint {
            day,
            downloads: point.downloads as u64,
            timestamp: day.to_utc_midnight(),
        });
    }

    // Stable, so duplicate days (which the source should not produce)
    // keep their input order
    series.sort_by_key(|p| p.day);
    Ok(series)
}
