//! Issued and collected invoice totals per month.

use async_trait::async_trait;

use bizboard_aggregate::group::group_by;
use bizboard_aggregate::ratio::growth_rate;
use bizboard_aggregate::window::last_n_sorted;
use bizboard_core::models::{Invoice, InvoiceStatus};
use bizboard_core::{ListQuery, Result};

use super::month_of;
use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "revenue-by-month";

/// Months shown by default.
pub const DEFAULT_MONTHS: usize = 6;

#[derive(Debug, Clone, Copy, Default)]
struct MonthTotals {
    issued: f64,
    paid: f64,
}

/// Revenue per month over the most recent months with invoices.
#[derive(Debug, Clone)]
pub struct RevenueByMonth {
    /// Number of trailing months shown.
    pub months: usize,
}

impl Default for RevenueByMonth {
    fn default() -> Self {
        Self {
            months: DEFAULT_MONTHS,
        }
    }
}

#[async_trait]
impl Widget for RevenueByMonth {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Revenue by month"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["invoices"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let invoices = ctx.list_all::<Invoice>(&ListQuery::new()).await?;
        Ok(summarize(&invoices, self.months))
    }
}

/// Amount collected on an invoice. A `paid` invoice without an explicit
/// payment counts as fully paid.
fn collected(invoice: &Invoice) -> f64 {
    match (invoice.amount_paid, invoice.status) {
        (Some(paid), _) => paid,
        (None, Some(InvoiceStatus::Paid)) => invoice.total_amount.unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Group by billing month, keep the last `months`, and compute growth of
/// the latest month over the one before.
pub fn summarize(invoices: &[Invoice], months: usize) -> Option<Chart> {
    let groups = group_by(
        invoices.iter().filter(|i| i.counts_as_revenue()),
        |i| month_of(i.billing_date()),
        MonthTotals::default,
        |totals, invoice| {
            totals.issued += invoice.total_amount.unwrap_or(0.0);
            totals.paid += collected(invoice);
        },
    );
    if groups.is_empty() {
        return None;
    }

    let window = last_n_sorted(&groups, months);
    let issued: Vec<f64> = window.iter().map(|(_, t)| t.issued).collect();
    let growth = match issued.as_slice() {
        [.., previous, current] => growth_rate(*current, *previous),
        _ => 0.0,
    };

    let points = window.iter().map(|(month, totals)| {
        Point::new(month.as_str())
            .with("issued", totals.issued)
            .with("paid", totals.paid)
    });

    Some(
        Chart::new(ChartKind::Bar)
            .series(["issued", "paid"])
            .points(points)
            .highlight("Issued", issued.iter().sum(), Unit::Currency)
            .highlight("Collected", window.iter().map(|(_, t)| t.paid).sum(), Unit::Currency)
            .highlight("Growth", growth, Unit::Percent),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn invoice(date: &str, total: f64, status: InvoiceStatus) -> Invoice {
        Invoice {
            issue_date: Some(date.to_string()),
            total_amount: Some(total),
            status: Some(status),
            ..Default::default()
        }
    }

    #[test]
    fn test_groups_by_month_with_growth() {
        let invoices = vec![
            invoice("2024-01-15", 40.0, InvoiceStatus::Paid),
            invoice("2024-02-01", 50.0, InvoiceStatus::Sent),
            invoice("2024-02-20", 30.0, InvoiceStatus::Paid),
        ];
        let chart = summarize(&invoices, 6).unwrap();

        assert_eq!(chart.keys(), vec!["2024-01", "2024-02"]);
        assert_eq!(chart.get("2024-02").unwrap().value("issued"), Some(80.0));
        assert_eq!(chart.get("2024-02").unwrap().value("paid"), Some(30.0));
        assert_eq!(chart.highlight_value("Growth"), Some(100.0));
        assert_eq!(chart.highlight_value("Issued"), Some(120.0));
    }

    #[test]
    fn test_keeps_last_six_months() {
        let invoices: Vec<Invoice> = (1..=10)
            .map(|m| invoice(&format!("2023-{m:02}-10"), 10.0, InvoiceStatus::Sent))
            .collect();
        let chart = summarize(&invoices, 6).unwrap();
        assert_eq!(
            chart.keys(),
            vec!["2023-05", "2023-06", "2023-07", "2023-08", "2023-09", "2023-10"]
        );
    }

    #[test]
    fn test_cancelled_and_undated_are_ignored() {
        let mut undated = invoice("", 10.0, InvoiceStatus::Sent);
        undated.issue_date = None;
        let invoices = vec![invoice("2024-01-15", 10.0, InvoiceStatus::Cancelled), undated];
        assert!(summarize(&invoices, 6).is_none());
    }

    #[test]
    fn test_falls_back_to_created_at() {
        let mut inv = invoice("", 25.0, InvoiceStatus::Sent);
        inv.issue_date = None;
        inv.created_at = Some("2024-03-05T09:00:00Z".to_string());
        let chart = summarize(&[inv], 6).unwrap();
        assert_eq!(chart.keys(), vec!["2024-03"]);
        assert_eq!(chart.highlight_value("Growth"), Some(0.0));
    }
}
