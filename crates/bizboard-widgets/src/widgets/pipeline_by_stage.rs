//! Open pipeline by sales stage.

use async_trait::async_trait;

use bizboard_aggregate::group::totals_by;
use bizboard_core::models::{Opportunity, OpportunityStage};
use bizboard_core::{ListQuery, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "pipeline-by-stage";

/// Open opportunity value per stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineByStage;

#[async_trait]
impl Widget for PipelineByStage {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Pipeline by stage"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["opportunities"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let opportunities = ctx.list_all::<Opportunity>(&ListQuery::new()).await?;
        Ok(summarize(&opportunities))
    }
}

/// Count and amount per stage, in lifecycle order.
pub fn summarize(opportunities: &[Opportunity]) -> Option<Chart> {
    if opportunities.is_empty() {
        return None;
    }

    let by_stage = totals_by(
        opportunities,
        |o| Some(o.stage.unwrap_or_default()),
        |o| o.amount.unwrap_or(0.0),
    );

    let open = opportunities
        .iter()
        .filter(|o| !o.stage.unwrap_or_default().is_closed());
    let (open_amount, weighted) = open.fold((0.0, 0.0), |(amount, weighted), o| {
        (amount + o.amount.unwrap_or(0.0), weighted + o.weighted_amount())
    });

    let points = by_stage.iter().map(|(stage, totals)| {
        Point::new(stage.as_str())
            .with("count", totals.count as f64)
            .with("amount", totals.sum)
    });

    Some(
        Chart::new(ChartKind::Bar)
            .series(["count", "amount"])
            .points(points)
            .highlight("Opportunities", opportunities.len() as f64, Unit::Count)
            .highlight("Open pipeline", open_amount, Unit::Currency)
            .highlight("Weighted pipeline", weighted, Unit::Currency),
    )
}
