use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::date::CalendarDate;

/// One raw record of the npm downloads-range API: a calendar day and its
/// download count. Kept loose (string day, signed count) so validation has
/// one home in the series builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDataPoint {
    pub day: String,
    pub downloads: i64,
}

/// A validated daily point, augmented with the UTC-midnight instant of its
/// day in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyEvolutionPoint {
    pub day: CalendarDate,
    pub downloads: u64,
    pub timestamp: i64,
}

/// A rolling 7-day window. The last bucket of a series may span fewer than
/// 7 days when the requested range does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyBucket {
    pub week_start: CalendarDate,
    pub week_end: CalendarDate,
    pub downloads: u64,
}

/// A calendar-month bucket; `timestamp` is UTC midnight of day 01.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub downloads: u64,
    pub timestamp: i64,
}

/// A calendar-year bucket; `timestamp` is UTC midnight of January 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearlyBucket {
    pub year: String,
    pub downloads: u64,
    pub timestamp: i64,
}

/// A package registry metadata document (packument), reduced to the
/// per-version publication-timestamp map this engine reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Packument {
    #[serde(default)]
    pub time: Option<BTreeMap<String, String>>,
}

/// Classification of a key in a packument's `time` map. The labels
/// `created` and `modified` are reserved; every other key names a
/// published release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKey<'a> {
    Created,
    Modified,
    Version(&'a str),
}

impl<'a> TimeKey<'a> {
    pub fn classify(key: &'a str) -> TimeKey<'a> {
        match key {
            "created" => TimeKey::Created,
            "modified" => TimeKey::Modified,
            version => TimeKey::Version(version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── TimeKey ──────────────────────────────────────────────

    #[test]
    fn classify_reserved_labels() {
        assert_eq!(TimeKey::classify("created"), TimeKey::Created);
        assert_eq!(TimeKey::classify("modified"), TimeKey::Modified);
    }

    #[test]
    fn classify_version_keys() {
        assert_eq!(TimeKey::classify("1.0.0"), TimeKey::Version("1.0.0"));
        assert_eq!(
            TimeKey::classify("2.0.0-beta.1"),
            TimeKey::Version("2.0.0-beta.1")
        );
        // Only exact label matches are reserved
        assert_eq!(TimeKey::classify("Created"), TimeKey::Version("Created"));
    }

    // ── serde shapes ─────────────────────────────────────────

    #[test]
    fn daily_point_deserializes_from_npm_shape() {
        let p: DailyDataPoint =
            serde_json::from_str(r#"{"day":"2025-03-01","downloads":10}"#).unwrap();
        assert_eq!(p.day, "2025-03-01");
        assert_eq!(p.downloads, 10);
    }

    #[test]
    fn weekly_bucket_serializes_camel_case() {
        let bucket = WeeklyBucket {
            week_start: "2025-03-01".parse().unwrap(),
            week_end: "2025-03-07".parse().unwrap(),
            downloads: 70,
        };
        let json = serde_json::to_value(bucket).unwrap();
        assert_eq!(json["weekStart"], "2025-03-01");
        assert_eq!(json["weekEnd"], "2025-03-07");
        assert_eq!(json["downloads"], 70);
    }

    #[test]
    fn packument_without_time_map() {
        let doc: Packument = serde_json::from_str("{}").unwrap();
        assert!(doc.time.is_none());
    }
}
