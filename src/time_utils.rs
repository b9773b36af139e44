//! Calendar-date helpers for the JSON boundary.
//!
//! Dates travel as ISO-8601 strings (`2026-08-26`) so a malformed value
//! surfaces as a validation error instead of a serde rejection.

use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

use crate::error::AppError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub fn parse_date(s: &str) -> Result<Date, AppError> {
    Date::parse(s, DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("malformed date: {s:?}, expected YYYY-MM-DD")))
}

pub fn format_date(date: Date) -> String {
    // The format description cannot fail for a valid Date.
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Three-letter weekday abbreviation, as shown in the weekly chart.
pub fn weekday_abbrev(date: Date) -> &'static str {
    use time::Weekday::*;
    match date.weekday() {
        Monday => "Mon",
        Tuesday => "Tue",
        Wednesday => "Wed",
        Thursday => "Thu",
        Friday => "Fri",
        Saturday => "Sat",
        Sunday => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parse_and_format_roundtrip() {
        let d = parse_date("2026-08-26").expect("valid date");
        assert_eq!(d, date!(2026 - 08 - 26));
        assert_eq!(format_date(d), "2026-08-26");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in ["26-08-2026", "2026/08/26", "yesterday", ""] {
            let err = parse_date(bad).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "input {bad:?}");
        }
    }

    #[test]
    fn weekday_abbreviations() {
        assert_eq!(weekday_abbrev(date!(2026 - 08 - 24)), "Mon");
        assert_eq!(weekday_abbrev(date!(2026 - 08 - 30)), "Sun");
    }
}
