//! Company count per industry.

use async_trait::async_trait;

use bizboard_aggregate::group::count_by;
use bizboard_aggregate::ratio::{percentage, round_to};
use bizboard_core::models::Company;
use bizboard_core::{ListQuery, Result};

use super::label_or;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "companies-overview";

/// Companies by industry.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompaniesOverview;

#[async_trait]
impl Widget for CompaniesOverview {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Companies"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["companies"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let companies = ctx.list_all::<Company>(&ListQuery::new()).await?;
        Ok(summarize(&companies))
    }
}

/// Chart for already fetched records, `None` when there are none.
pub fn summarize(companies: &[Company]) -> Option<Chart> {
    if companies.is_empty() {
        return None;
    }
    let total = companies.len();
    let by_industry = count_by(companies, |c| Some(label_or(c.industry.as_deref(), "Unspecified")));

    let points = by_industry.iter().map(|(industry, count)| {
        Point::new(industry.as_str())
            .with("companies", *count as f64)
            .with("share", round_to(percentage(*count as f64, total as f64), 1))
    });

    Some(
        Chart::new(ChartKind::Pie)
            .series(["companies", "share"])
            .points(points)
            .highlight("Total", total as f64, Unit::Count)
            .highlight("Industries", by_industry.len() as f64, Unit::Count),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn company(industry: Option<&str>) -> Company {
        Company {
            industry: industry.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_is_empty() {
        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_counts_per_industry() {
        let companies = vec![
            company(Some("Retail")),
            company(Some("Retail")),
            company(None),
            company(Some("Energy")),
        ];
        let chart = summarize(&companies).unwrap();

        assert_eq!(chart.keys(), vec!["Energy", "Retail", "Unspecified"]);
        assert_eq!(chart.get("Retail").unwrap().value("companies"), Some(2.0));
        assert_eq!(chart.get("Retail").unwrap().value("share"), Some(50.0));
        assert_eq!(chart.highlight_value("Total"), Some(4.0));
    }
}
