use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::model::{Packument, TimeKey};

/// Resolve a package's creation timestamp from its packument `time` map.
///
/// The `created` entry wins verbatim when present. Otherwise the earliest
/// version-publication instant decides, and its original string value is
/// returned untouched — no reformatting. Registry data is not uniformly
/// well-formed, so version entries whose value does not parse as RFC 3339
/// are skipped rather than aborting the resolution.
///
/// Returns `None` when the map is absent, empty, or holds no qualifying
/// version entry.
pub fn resolve(doc: &Packument) -> Option<String> {
    let times = doc.time.as_ref()?;

    let mut earliest: Option<(OffsetDateTime, &String)> = None;
    for (key, value) in times {
        match TimeKey::classify(key) {
            TimeKey::Created => return Some(value.clone()),
            TimeKey::Modified => {}
            TimeKey::Version(_) => {
                let Ok(instant) = OffsetDateTime::parse(value, &Rfc3339) else {
                    continue;
                };
                // Strict less-than keeps the first qualifying key on ties
                if earliest.is_none_or(|(best, _)| instant < best) {
                    earliest = Some((instant, value));
                }
            }
        }
    }

    earliest.map(|(_, value)| value.clone())
}
