use thiserror::Error;

use crate::date::CalendarDate;

/// Validation failures surfaced by the aggregation engine.
///
/// These are raised eagerly at ingestion, before any aggregation runs; an
/// empty input series is never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid date '{0}': expected YYYY-MM-DD naming a real calendar date")]
    InvalidDate(String),

    #[error("invalid download count {count} for day '{day}': must be non-negative")]
    InvalidCount { day: String, count: i64 },

    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange {
        start: CalendarDate,
        end: CalendarDate,
    },
}
