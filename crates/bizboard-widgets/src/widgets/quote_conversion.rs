//! Quote outcomes and acceptance rate.

use async_trait::async_trait;

use bizboard_aggregate::group::totals_by;
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_core::models::{Quote, QuoteStatus};
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "quote-conversion";

/// Quotes converted to invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteConversion;

#[async_trait]
impl Widget for QuoteConversion {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Quote conversion"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["quotes"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let quotes = ctx.list_all::<Quote>(&ListQuery::new()).await?;
        Ok(summarize(&quotes))
    }
}

/// Counts per status. The acceptance rate is accepted over decided quotes
/// (accepted, rejected, or expired).
pub fn summarize(quotes: &[Quote]) -> Option<Chart> {
    if quotes.is_empty() {
        return None;
    }
    let by_status = totals_by(
        quotes,
        |q| Some(q.status.unwrap_or_default()),
        |q| q.total_amount.unwrap_or(0.0),
    );
    let get = |status: QuoteStatus| by_status.get(&status).copied().unwrap_or_default();

    let accepted = get(QuoteStatus::Accepted);
    let decided =
        accepted.count + get(QuoteStatus::Rejected).count + get(QuoteStatus::Expired).count;

    let points = by_status.iter().map(|(status, totals)| {
        Point::new(status.as_str())
            .with("count", totals.count as f64)
            .with("amount", totals.sum)
    });

    Some(
        Chart::new(ChartKind::Pie)
            .series(["count", "amount"])
            .points(points)
            .highlight("Quotes", quotes.len() as f64, Unit::Count)
            .highlight(
                "Acceptance rate",
                round_to(percentage(accepted.count as f64, decided as f64), 1),
                Unit::Percent,
            )
            .highlight("Accepted value", accepted.sum, Unit::Currency),
    )
}
