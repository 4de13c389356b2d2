//! Linear extrapolation for forecast widgets.
//!
//! This is presentation dressing, not a statistical model: the average
//! period-over-period change is carried forward from the last observation,
//! and every projected point gets a fixed ±20 % band.

use serde::Serialize;

/// Relative half-width of the confidence band.
pub const CONFIDENCE_BAND: f64 = 0.2;

/// One projected period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastPoint {
    /// 1 for the first period after the history
    pub step: usize,
    /// Projected value
    pub value: f64,
    /// Lower edge of the confidence band
    pub low: f64,
    /// Upper edge of the confidence band
    pub high: f64,
}

impl ForecastPoint {
    fn new(step: usize, value: f64) -> Self {
        let a = value * (1.0 - CONFIDENCE_BAND);
        let b = value * (1.0 + CONFIDENCE_BAND);
        Self {
            step,
            value,
            low: a.min(b),
            high: a.max(b),
        }
    }
}

/// Mean of successive differences; 0 with fewer than two values.
pub fn average_delta(history: &[f64]) -> f64 {
    match history {
        [first, .., last] => (last - first) / (history.len() - 1) as f64,
        _ => 0.0,
    }
}

/// Project `periods` values past the end of `history`.
///
/// Empty history gives an empty forecast; a single observation is carried
/// forward flat.
pub fn linear_forecast(history: &[f64], periods: usize) -> Vec<ForecastPoint> {
    let Some(&last) = history.last() else {
        return Vec::new();
    };
    let delta = average_delta(history);
    (1..=periods)
        .map(|step| ForecastPoint::new(step, last + delta * step as f64))
        .collect()
}
