//! Share of closed deals won, per month.

use async_trait::async_trait;

use bizboard_aggregate::group::group_by;
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_aggregate::window::last_n_sorted;
use bizboard_core::models::{Opportunity, OpportunityStage};
use bizboard_core::{ListQuery, Result};

use super::month_of;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "win-rate";

#[derive(Debug, Clone, Copy, Default)]
struct Outcomes {
    won: usize,
    lost: usize,
}

impl Outcomes {
    fn rate(&self) -> f64 {
        percentage(self.won as f64, (self.won + self.lost) as f64)
    }
}

/// Won share of closed opportunities per month.
#[derive(Debug, Clone)]
pub struct WinRate {
    /// Number of trailing months shown.
    pub months: usize,
}

impl Default for WinRate {
    fn default() -> Self {
        Self { months: 12 }
    }
}

#[async_trait]
impl Widget for WinRate {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Win rate"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["opportunities"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let opportunities = ctx.list_all::<Opportunity>(&ListQuery::new()).await?;
        Ok(summarize(&opportunities, self.months))
    }
}

/// `won / (won + lost)` per closing month.
///
/// Deals without a close date fall back to their expected close date.
pub fn summarize(opportunities: &[Opportunity], months: usize) -> Option<Chart> {
    let by_month = group_by(
        opportunities
            .iter()
            .filter(|o| o.stage.is_some_and(|s| s.is_closed())),
        |o| month_of(o.closed_at.as_deref().or(o.expected_close_date.as_deref())),
        Outcomes::default,
        |outcomes, o| match o.stage {
            Some(OpportunityStage::Won) => outcomes.won += 1,
            _ => outcomes.lost += 1,
        },
    );
    if by_month.is_empty() {
        return None;
    }

    let window = last_n_sorted(&by_month, months);
    let overall = window.iter().fold(Outcomes::default(), |acc, (_, o)| Outcomes {
        won: acc.won + o.won,
        lost: acc.lost + o.lost,
    });

    let points = window.iter().map(|(month, outcomes)| {
        Point::new(month.as_str())
            .with("won", outcomes.won as f64)
            .with("lost", outcomes.lost as f64)
            .with("rate", round_to(outcomes.rate(), 1))
    });

    Some(
        Chart::new(ChartKind::Line)
            .series(["rate", "won", "lost"])
            .points(points)
            .highlight("Win rate", round_to(overall.rate(), 1), Unit::Percent)
            .highlight("Closed deals", (overall.won + overall.lost) as f64, Unit::Count),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn closed(stage: OpportunityStage, date: &str) -> Opportunity {
        Opportunity {
            stage: Some(stage),
            closed_at: Some(date.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_rate_per_month() {
        let opportunities = vec![
            closed(OpportunityStage::Won, "2024-01-03"),
            closed(OpportunityStage::Lost, "2024-01-09"),
            closed(OpportunityStage::Lost, "2024-01-20"),
            closed(OpportunityStage::Won, "2024-02-11"),
            Opportunity {
                stage: Some(OpportunityStage::Proposal),
                closed_at: Some("2024-02-01".into()),
                ..Default::default()
            },
        ];
        let chart = summarize(&opportunities, 12).unwrap();

        assert_eq!(chart.keys(), vec!["2024-01", "2024-02"]);
        assert_eq!(chart.get("2024-01").unwrap().value("rate"), Some(33.3));
        assert_eq!(chart.get("2024-02").unwrap().value("rate"), Some(100.0));
        assert_eq!(chart.highlight_value("Win rate"), Some(50.0));
    }

    #[test]
    fn test_no_closed_deals_is_empty() {
        let open = Opportunity {
            stage: Some(OpportunityStage::Lead),
            ..Default::default()
        };
        assert!(summarize(&[open], 12).is_none());
    }
}
