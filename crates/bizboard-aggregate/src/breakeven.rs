//! Cumulative net and time to break even.

use serde::Serialize;

/// Trailing periods averaged into the recent net rate.
pub const RECENT_PERIODS: usize = 3;

/// When cumulative net reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreakEven {
    /// Cumulative net is already non-negative.
    AlreadyReached,
    /// Periods still needed at the recent net rate.
    InPeriods {
        /// Whole periods, rounded up
        periods: u32,
    },
    /// Recent net is not positive, or there is no data.
    Unreachable,
}

/// Result of [`estimate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakEvenAnalysis {
    /// Running total of `revenue - expenses`, one entry per period
    pub cumulative: Vec<f64>,
    /// Mean net over the last [`RECENT_PERIODS`] periods
    pub recent_net: f64,
    /// Where the business stands
    pub outcome: BreakEven,
}

/// Estimate break-even from per-period revenue and expenses.
///
/// The slices are aligned by index; a missing entry on either side counts
/// as zero.
pub fn estimate(revenue: &[f64], expenses: &[f64]) -> BreakEvenAnalysis {
    let periods = revenue.len().max(expenses.len());
    let net: Vec<f64> = (0..periods)
        .map(|i| revenue.get(i).copied().unwrap_or(0.0) - expenses.get(i).copied().unwrap_or(0.0))
        .collect();

    let mut running = 0.0;
    let cumulative: Vec<f64> = net
        .iter()
        .map(|n| {
            running += n;
            running
        })
        .collect();

    let recent = crate::window::last_n(&net, RECENT_PERIODS);
    let recent_net = if recent.is_empty() {
        0.0
    } else {
        recent.iter().sum::<f64>() / recent.len() as f64
    };

    let outcome = match cumulative.last() {
        None => BreakEven::Unreachable,
        Some(&position) if position >= 0.0 => BreakEven::AlreadyReached,
        Some(&position) if recent_net > 0.0 => BreakEven::InPeriods {
            periods: (-position / recent_net).ceil() as u32,
        },
        Some(_) => BreakEven::Unreachable,
    };

    BreakEvenAnalysis {
        cumulative,
        recent_net,
        outcome,
    }
}
