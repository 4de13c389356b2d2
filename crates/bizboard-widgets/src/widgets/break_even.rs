//! Cumulative net position and time to break even.

use async_trait::async_trait;

use bizboard_aggregate::breakeven::{BreakEven, estimate};
use bizboard_aggregate::group::group_by;
use bizboard_core::models::{Transaction, TransactionKind};
use bizboard_core::{ListQuery, Result};

use super::month_of;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "break-even";

#[derive(Debug, Clone, Copy, Default)]
struct Flows {
    income: f64,
    expense: f64,
}

/// Break-even point from income and costs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakEvenWidget;

#[async_trait]
impl Widget for BreakEvenWidget {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Break-even"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["transactions"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let transactions = ctx.list_all::<Transaction>(&ListQuery::new()).await?;
        Ok(summarize(&transactions))
    }
}

/// Monthly income and expense, the running net, and the break-even outlook.
///
/// The "Periods to break even" highlight is `0` once reached and absent
/// when break-even is out of reach.
pub fn summarize(transactions: &[Transaction]) -> Option<Chart> {
    let by_month = group_by(
        transactions,
        |t| month_of(t.date.as_deref()),
        Flows::default,
        |flows, t| {
            let amount = t.amount.unwrap_or(0.0).abs();
            match t.kind {
                Some(TransactionKind::Income) => flows.income += amount,
                Some(TransactionKind::Expense) => flows.expense += amount,
                _ => {}
            }
        },
    );
    if by_month.is_empty() {
        return None;
    }

    let income: Vec<f64> = by_month.values().map(|f| f.income).collect();
    let expense: Vec<f64> = by_month.values().map(|f| f.expense).collect();
    let analysis = estimate(&income, &expense);

    let points = by_month
        .iter()
        .zip(&analysis.cumulative)
        .map(|((month, flows), cumulative)| {
            Point::new(month.as_str())
                .with("income", flows.income)
                .with("expense", flows.expense)
                .with("cumulative", *cumulative)
        });

    let position = analysis.cumulative.last().copied().unwrap_or(0.0);
    let mut chart = Chart::new(ChartKind::Line)
        .series(["cumulative", "income", "expense"])
        .points(points)
        .highlight("Cumulative net", position, Unit::Currency)
        .highlight("Recent monthly net", analysis.recent_net, Unit::Currency);

    match analysis.outcome {
        BreakEven::AlreadyReached => {
            chart = chart.highlight("Periods to break even", 0.0, Unit::Periods);
        }
        BreakEven::InPeriods { periods } => {
            chart = chart.highlight("Periods to break even", f64::from(periods), Unit::Periods);
        }
        BreakEven::Unreachable => {}
    }
    Some(chart)
}
