//! Property tests for the aggregation helpers.

#![allow(clippy::unwrap_used)]

use bizboard_aggregate::forecast::{CONFIDENCE_BAND, linear_forecast};
use bizboard_aggregate::period::{month_key_of, shift_month_key, trailing_month_keys};
use bizboard_aggregate::{count_by, growth_rate, last_n, month_key, parse_timestamp, percentage, week_key};
use chrono::NaiveDate;
use proptest::prelude::*;

fn date() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2040, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn prop_month_key_roundtrips_through_parse(d in date()) {
        let key = month_key(d);
        let parsed = parse_timestamp(&format!("{key}-01")).unwrap();
        prop_assert_eq!(month_key(parsed), key);
    }

    #[test]
    fn prop_datetime_and_date_share_keys(d in date(), h in 0u32..24, min in 0u32..60) {
        let stamp = format!("{}T{h:02}:{min:02}:00Z", d.format("%Y-%m-%d"));
        prop_assert_eq!(parse_timestamp(&stamp), Some(d));
        prop_assert_eq!(week_key(parse_timestamp(&stamp).unwrap()), week_key(d));
    }

    #[test]
    fn prop_count_by_preserves_total(dates in proptest::collection::vec(date(), 0..50)) {
        let stamps: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
        let groups = count_by(stamps.iter(), |s| month_key_of(s));
        prop_assert_eq!(groups.values().sum::<usize>(), dates.len());
    }

    #[test]
    fn prop_last_n_is_suffix(items in proptest::collection::vec(any::<u8>(), 0..30), n in 0usize..40) {
        let window = last_n(&items, n);
        prop_assert_eq!(window.len(), n.min(items.len()));
        prop_assert!(items.ends_with(window));
    }

    #[test]
    fn prop_growth_inverts(previous in 1.0f64..1e6, current in 0.0f64..1e6) {
        let rate = growth_rate(current, previous);
        let rebuilt = previous * (1.0 + rate / 100.0);
        prop_assert!((rebuilt - current).abs() < 1e-6 * previous.max(1.0));
    }

    #[test]
    fn prop_percentage_of_self_is_hundred(total in 0.001f64..1e9) {
        prop_assert!((percentage(total, total) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn prop_forecast_band_brackets_value(history in proptest::collection::vec(-1e6f64..1e6, 1..12), periods in 0usize..6) {
        let forecast = linear_forecast(&history, periods);
        prop_assert_eq!(forecast.len(), periods);
        for point in forecast {
            prop_assert!(point.low <= point.value && point.value <= point.high);
            let width = point.high - point.low;
            prop_assert!((width - 2.0 * CONFIDENCE_BAND * point.value.abs()).abs() < 1e-6);
        }
    }

    #[test]
    fn prop_trailing_months_are_consecutive(d in date(), n in 1u32..24) {
        let keys = trailing_month_keys(d, n);
        prop_assert_eq!(keys.len(), n as usize);
        prop_assert_eq!(keys.last().unwrap(), &month_key(d));
        for pair in keys.windows(2) {
            prop_assert_eq!(shift_month_key(&pair[0], 1).unwrap(), pair[1].clone());
        }
    }
}

#[test]
fn test_growth_examples() {
    assert_eq!(growth_rate(0.0, 0.0), 0.0);
    assert_eq!(growth_rate(50.0, 0.0), 100.0);
    assert_eq!(growth_rate(80.0, 40.0), 100.0);
    assert_eq!(growth_rate(40.0, 80.0), -50.0);
}

#[test]
fn test_monthly_counts() {
    let groups = count_by(["2024-01-15", "2024-01-20", "2024-02-01"], |s| month_key_of(s));
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["2024-01"], 2);
    assert_eq!(groups["2024-02"], 1);
}

#[test]
fn test_last_six_months_of_ten() {
    let keys: Vec<String> = (1..=10).map(|m| format!("2023-{m:02}")).collect();
    let window = last_n(&keys, 6);
    assert_eq!(window.to_vec(), keys[4..].to_vec());
}
