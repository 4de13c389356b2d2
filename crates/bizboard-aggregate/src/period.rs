//! Lenient timestamp parsing and period keys.
//!
//! Backend timestamps arrive in several shapes (RFC 3339, naive datetimes,
//! bare dates). Everything is reduced to a calendar date, then to a sortable
//! key: `YYYY-MM` for months and `YYYY-Www` for ISO weeks. Both sort
//! lexicographically in chronological order.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveDateTime};

/// Parse a backend timestamp to its calendar date.
///
/// Offsets are kept as written: `2024-01-31T23:30:00-05:00` is January 31st.
/// Returns `None` for anything unparseable.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            raw.get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

/// `YYYY-MM`
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// ISO week key, `YYYY-Www`. The year is the ISO week-year.
pub fn week_key(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// ISO 8601 week number (1-53).
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Month key of a raw timestamp, if it parses.
pub fn month_key_of(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(month_key)
}

/// Week key of a raw timestamp, if it parses.
pub fn week_key_of(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(week_key)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Keys of the `n` months ending with the month of `today`, oldest first.
pub fn trailing_month_keys(today: NaiveDate, n: u32) -> Vec<String> {
    let start = month_start(today);
    (0..n)
        .rev()
        .filter_map(|back| start.checked_sub_months(Months::new(back)))
        .map(month_key)
        .collect()
}

/// Keys of the `n` ISO weeks ending with the week of `today`, oldest first.
pub fn trailing_week_keys(today: NaiveDate, n: u32) -> Vec<String> {
    (0..n)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(7 * u64::from(back))))
        .map(week_key)
        .collect()
}

/// Shift a `YYYY-MM` key by `offset` months.
pub fn shift_month_key(key: &str, offset: i32) -> Option<String> {
    let date = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()?;
    let months = Months::new(offset.unsigned_abs());
    let shifted = if offset >= 0 {
        date.checked_add_months(months)?
    } else {
        date.checked_sub_months(months)?
    };
    Some(month_key(shifted))
}

/// Short label for a `YYYY-MM` key, e.g. `Jan 2024`.
pub fn month_label(key: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d").ok()?;
    Some(date.format("%b %Y").to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_shapes() {
        let expected = Some(date(2024, 1, 15));
        assert_eq!(parse_timestamp("2024-01-15"), expected);
        assert_eq!(parse_timestamp("2024-01-15T10:20:30Z"), expected);
        assert_eq!(parse_timestamp("2024-01-15T10:20:30.123+02:00"), expected);
        assert_eq!(parse_timestamp("2024-01-15T10:20:30"), expected);
        assert_eq!(parse_timestamp("2024-01-15T10:20:30.456789"), expected);
        assert_eq!(parse_timestamp("2024-01-15 10:20:30"), expected);
        assert_eq!(parse_timestamp(" 2024-01-15 "), expected);
    }

    #[test]
    fn test_parse_keeps_written_offset() {
        assert_eq!(
            parse_timestamp("2024-01-31T23:30:00-05:00"),
            Some(date(2024, 1, 31))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01"), None);
        assert_eq!(parse_timestamp("2024-02-30"), None);
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(date(2024, 3, 9)), "2024-03");
        assert_eq!(month_key_of("2023-12-31T23:59:59Z").unwrap(), "2023-12");
    }

    #[test]
    fn test_week_key_uses_iso_year() {
        // 2021-01-01 is a Friday in ISO week 53 of 2020
        assert_eq!(week_key(date(2021, 1, 1)), "2020-W53");
        assert_eq!(week_key(date(2024, 1, 1)), "2024-W01");
        // 2024-12-30 is a Monday in ISO week 1 of 2025
        assert_eq!(week_key(date(2024, 12, 30)), "2025-W01");
        assert_eq!(iso_week_number(date(2024, 6, 14)), 24);
    }

    #[test]
    fn test_trailing_month_keys() {
        let keys = trailing_month_keys(date(2024, 2, 29), 4);
        assert_eq!(keys, vec!["2023-11", "2023-12", "2024-01", "2024-02"]);
        assert!(trailing_month_keys(date(2024, 2, 29), 0).is_empty());
    }

    #[test]
    fn test_trailing_week_keys() {
        let keys = trailing_week_keys(date(2024, 1, 10), 3);
        assert_eq!(keys, vec!["2023-W52", "2024-W01", "2024-W02"]);
    }

    #[test]
    fn test_shift_month_key() {
        assert_eq!(shift_month_key("2024-11", 3).unwrap(), "2025-02");
        assert_eq!(shift_month_key("2024-01", -1).unwrap(), "2023-12");
        assert_eq!(shift_month_key("garbage", 1), None);
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2024-01").unwrap(), "Jan 2024");
        assert_eq!(month_label("nope"), None);
    }
}
