/// Utilities for date handling in the browser
///
/// Wire formats live in `contracts::shared::dates`; this module covers the
/// clock and `<input type="date">` plumbing.
use chrono::{Local, NaiveDate};
use contracts::shared::dates;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Value for `<input type="date">` (always ISO, empty when unset)
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(dates::to_iso).unwrap_or_default()
}

/// Read an `<input type="date">` value. An empty field clears the date.
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    dates::parse_flexible(value)
}

/// Number of days from `today` until `date` (negative when past)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// Whether the date falls within the configured warning window
pub fn expires_within(date: Option<NaiveDate>, today: NaiveDate, days: i64) -> bool {
    match date {
        Some(d) => days_until(d, today) <= days,
        None => false,
    }
}

/// Date part of download file names
pub fn file_stamp(date: NaiveDate) -> String {
    dates::to_iso(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_date_input_round_trip() {
        assert_eq!(date_input_value(Some(d(2025, 3, 15))), "2025-03-15");
        assert_eq!(date_input_value(None), "");
        assert_eq!(parse_date_input("2025-03-15"), Some(d(2025, 3, 15)));
        assert_eq!(parse_date_input("  "), None);
    }

    #[test]
    fn test_expiry_window() {
        let today = d(2025, 1, 1);
        assert_eq!(days_until(d(2025, 1, 31), today), 30);
        assert!(expires_within(Some(d(2025, 1, 31)), today, 90));
        assert!(expires_within(Some(d(2024, 12, 1)), today, 90));
        assert!(!expires_within(Some(d(2026, 1, 1)), today, 90));
        assert!(!expires_within(None, today, 90));
    }
}
