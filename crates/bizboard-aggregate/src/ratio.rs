//! Growth rates and percentages.

use std::collections::BTreeMap;

/// Period-over-period growth in percent.
///
/// `(current - previous) / previous * 100`. When `previous` is zero the
/// result is `0` if `current` is also zero and `100` otherwise.
pub fn growth_rate(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current == 0.0 { 0.0 } else { 100.0 };
    }
    (current - previous) / previous * 100.0
}

/// `part / total * 100`, or `0` when `total` is zero.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Each value's share of the sum, in percent.
pub fn share_of_total<K: Ord + Clone>(values: &BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    let total: f64 = values.values().sum();
    values
        .iter()
        .map(|(key, value)| (key.clone(), percentage(*value, total)))
        .collect()
}

/// Growth of the last value over the one before it.
///
/// Fewer than two values: 0.
pub fn trailing_growth(values: &[f64]) -> f64 {
    match values {
        [.., previous, current] => growth_rate(*current, *previous),
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_rate_cases() {
        assert_eq!(growth_rate(0.0, 0.0), 0.0);
        assert_eq!(growth_rate(50.0, 0.0), 100.0);
        assert_eq!(growth_rate(80.0, 40.0), 100.0);
        assert_eq!(growth_rate(40.0, 80.0), -50.0);
    }

    #[test]
    fn test_growth_rate_negative_current_with_zero_previous() {
        assert_eq!(growth_rate(-10.0, 0.0), 100.0);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1.0, 4.0), 25.0);
        assert_eq!(percentage(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.33333, 1), 33.3);
        assert_eq!(round_to(2.675, 0), 3.0);
    }

    #[test]
    fn test_share_of_total() {
        let mut values = BTreeMap::new();
        values.insert("sales", 30.0);
        values.insert("ops", 10.0);
        let shares = share_of_total(&values);
        assert_eq!(shares["sales"], 75.0);
        assert_eq!(shares["ops"], 25.0);
    }

    #[test]
    fn test_trailing_growth() {
        assert_eq!(trailing_growth(&[10.0, 40.0, 80.0]), 100.0);
        assert_eq!(trailing_growth(&[10.0]), 0.0);
        assert_eq!(trailing_growth(&[]), 0.0);
    }
}
