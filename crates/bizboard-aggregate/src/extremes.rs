//! Minimum and maximum by a numeric value.

/// The items with the smallest and largest `value`.
///
/// Ties keep the first occurrence for the minimum and the last for the
/// maximum. NaN values are ordered with `f64::total_cmp`.
pub fn min_max_by<T>(items: &[T], value: impl Fn(&T) -> f64) -> Option<(&T, &T)> {
    let min = items
        .iter()
        .min_by(|a, b| value(a).total_cmp(&value(b)))?;
    let max = items
        .iter()
        .max_by(|a, b| value(a).total_cmp(&value(b)))?;
    Some((min, max))
}

/// Smallest and largest of `values`.
pub fn range(values: &[f64]) -> Option<(f64, f64)> {
    min_max_by(values, |v| *v).map(|(min, max)| (*min, *max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_by() {
        let months = [("2024-01", 5.0), ("2024-02", 12.0), ("2024-03", 1.0)];
        let (min, max) = min_max_by(&months, |m| m.1).unwrap();
        assert_eq!(min.0, "2024-03");
        assert_eq!(max.0, "2024-02");
    }

    #[test]
    fn test_empty() {
        assert!(min_max_by(&[] as &[f64], |v| *v).is_none());
        assert_eq!(range(&[]), None);
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&[3.0, -1.0, 7.5]), Some((-1.0, 7.5)));
    }
}
