//! Crash datetime parsing.
//!
//! Dataset exports carry `crash_datetime` in a handful of shapes: ISO 8601
//! with or without fractional seconds, a space-separated variant, or a bare
//! date. Values are civil NYC times; they are parsed and bucketed as naive
//! datetimes with no offset applied.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a crash datetime string. Returns `None` for missing or
/// unparseable input; records without a usable date are simply excluded
/// from temporal views.
#[must_use]
pub fn parse_crash_datetime(s: &str) -> Option<NaiveDateTime> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_with_fractional() {
        let dt = parse_crash_datetime("2022-03-05T14:30:00.000").unwrap();
        assert_eq!(dt.to_string(), "2022-03-05 14:30:00");
    }

    #[test]
    fn parses_iso_without_fractional() {
        let dt = parse_crash_datetime("2022-03-05T14:30:00").unwrap();
        assert_eq!(dt.to_string(), "2022-03-05 14:30:00");
    }

    #[test]
    fn parses_space_separated() {
        let dt = parse_crash_datetime("2022-03-05 14:30:00").unwrap();
        assert_eq!(dt.to_string(), "2022-03-05 14:30:00");
    }

    #[test]
    fn parses_bare_date_at_midnight() {
        let dt = parse_crash_datetime("2022-03-05").unwrap();
        assert_eq!(dt.to_string(), "2022-03-05 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_crash_datetime("not-a-date").is_none());
        assert!(parse_crash_datetime("").is_none());
        assert!(parse_crash_datetime("   ").is_none());
    }
}
