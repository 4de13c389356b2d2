//! Monthly net cash flow with a short linear forecast.

use async_trait::async_trait;

use bizboard_aggregate::forecast::linear_forecast;
use bizboard_aggregate::group::sum_by;
use bizboard_aggregate::period::shift_month_key;
use bizboard_aggregate::window::last_n_sorted;
use bizboard_core::models::Transaction;
use bizboard_core::{ListQuery, Result};

use super::month_of;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "cash-flow-forecast";

/// Projected cash flow.
#[derive(Debug, Clone)]
pub struct CashFlowForecast {
    /// Months of history shown and used for the trend
    pub history: usize,
    /// Months projected past the last observed one
    pub horizon: usize,
}

impl Default for CashFlowForecast {
    fn default() -> Self {
        Self {
            history: 6,
            horizon: 3,
        }
    }
}

#[async_trait]
impl Widget for CashFlowForecast {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Cash flow forecast"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["transactions"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let transactions = ctx.list_all::<Transaction>(&ListQuery::new()).await?;
        Ok(summarize(&transactions, self.history, self.horizon))
    }
}

/// Observed points carry `net`; projected points carry `forecast`, `low`
/// and `high`.
pub fn summarize(transactions: &[Transaction], history: usize, horizon: usize) -> Option<Chart> {
    let by_month = sum_by(transactions, |t| month_of(t.date.as_deref()), |t| t.signed_amount());
    let observed = last_n_sorted(&by_month, history);
    let (last_month, last_net) = observed.last().cloned()?;

    let nets: Vec<f64> = observed.iter().map(|(_, net)| *net).collect();
    let forecast = linear_forecast(&nets, horizon);

    let mut chart = Chart::new(ChartKind::Area)
        .series(["net", "forecast", "low", "high"])
        .points(
            observed
                .iter()
                .map(|(month, net)| Point::new(month.as_str()).with("net", *net)),
        );

    for point in &forecast {
        let Some(month) = shift_month_key(&last_month, point.step as i32) else {
            continue;
        };
        chart = chart.point(
            Point::new(month)
                .with("forecast", point.value)
                .with("low", point.low)
                .with("high", point.high),
        );
    }

    chart = chart.highlight("Net (latest month)", last_net, Unit::Currency);
    if let Some(end) = forecast.last() {
        chart = chart.highlight("Projected", end.value, Unit::Currency);
    }
    Some(chart)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bizboard_core::models::TransactionKind;

    fn tx(date: &str, kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            date: Some(date.to_string()),
            kind: Some(kind),
            amount: Some(amount),
            ..Default::default()
        }
    }

    #[test]
    fn test_history_and_projection() {
        let transactions = vec![
            tx("2024-01-05", TransactionKind::Income, 100.0),
            tx("2024-02-05", TransactionKind::Income, 150.0),
            tx("2024-02-10", TransactionKind::Expense, 40.0),
            tx("2024-03-05", TransactionKind::Income, 120.0),
        ];
        let chart = summarize(&transactions, 6, 3).unwrap();

        assert_eq!(
            chart.keys(),
            vec!["2024-01", "2024-02", "2024-03", "2024-04", "2024-05", "2024-06"]
        );
        assert_eq!(chart.get("2024-02").unwrap().value("net"), Some(110.0));

        // Average delta (120 - 100) / 2 = 10
        let april = chart.get("2024-04").unwrap();
        assert_eq!(april.value("forecast"), Some(130.0));
        assert!((april.value("low").unwrap() - 104.0).abs() < 1e-9);
        assert!((april.value("high").unwrap() - 156.0).abs() < 1e-9);
        assert_eq!(chart.highlight_value("Projected"), Some(150.0));
    }

    #[test]
    fn test_forecast_crosses_year_end() {
        let chart = summarize(&[tx("2024-11-01", TransactionKind::Income, 10.0)], 6, 2).unwrap();
        assert_eq!(chart.keys(), vec!["2024-11", "2024-12", "2025-01"]);
    }

    #[test]
    fn test_no_dated_transactions_is_empty() {
        let undated = Transaction {
            amount: Some(5.0),
            ..Default::default()
        };
        assert!(summarize(&[undated], 6, 3).is_none());
    }
}
