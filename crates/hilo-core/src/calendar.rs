//! Calendar arithmetic for trailing-year windows

use chrono::{Duration, NaiveDate};

/// Date format used across the dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing-year window in days. 366 keeps the window a full
/// year even when it spans a leap day.
pub const TRAILING_YEAR_DAYS: i64 = 366;

/// Start of the trailing-year window ending at `reference` (inclusive on
/// both ends).
///
/// `reference` must be a well-formed `YYYY-MM-DD` date; parse failures are
/// returned to the caller rather than swallowed.
pub fn trailing_year_start(reference: &str) -> Result<String, chrono::ParseError> {
    let end = NaiveDate::parse_from_str(reference, DATE_FORMAT)?;
    let start = end - Duration::days(TRAILING_YEAR_DAYS);
    Ok(start.format(DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_366_days() {
        assert_eq!(trailing_year_start("2017-08-23").unwrap(), "2016-08-22");
    }

    #[test]
    fn spans_leap_day() {
        // 2016-02-29 lies inside the window, so the start lands a calendar
        // year before the reference date.
        assert_eq!(trailing_year_start("2017-02-28").unwrap(), "2016-02-28");
    }

    #[test]
    fn rejects_malformed_reference() {
        assert!(trailing_year_start("not-a-date").is_err());
        assert!(trailing_year_start("2017-13-01").is_err());
    }
}
