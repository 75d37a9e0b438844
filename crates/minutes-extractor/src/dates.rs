//! Meeting date normalisation

use chrono::{Datelike, NaiveDate};

/// Accepted input formats, tried in order
const DATE_FORMATS: [&str; 6] = [
    "%Y-%m-%d",  // 2004-01-21
    "%B %d, %Y", // January 21, 2004 / Jan 21, 2004
    "%B %d %Y",  // January 21 2004 / Jan 21 2004
    "%b %d, %Y", // Jan 21, 2004
    "%b %d %Y",  // Jan 21 2004
    "%m/%d/%Y",  // 01/21/2004
];

/// Normalise a date string to `YYYY-MM-DD`
///
/// Trailing text after a recognised date ("January 21, 2004 at 7pm") is
/// ignored. Returns `None` when no format matches or the year is not written
/// with four digits.
pub fn normalize_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_and_remainder(raw, fmt)
            .ok()
            .filter(|(date, _)| (1000..=9999).contains(&date.year()))
            .map(|(date, _)| date.format("%Y-%m-%d").to_string())
    })
}
