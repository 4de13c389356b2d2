//! The concrete dashboard widgets.
//!
//! Each module pairs a [`Widget`] implementation (fetching) with a pure
//! `summarize` function (aggregation), so the numbers can be tested without
//! a backend.

use std::sync::Arc;

use bizboard_aggregate::period::{month_key_of, week_key_of};

use crate::widget::Widget;

pub mod api_keys;
pub mod break_even;
pub mod cash_flow_forecast;
pub mod companies_overview;
pub mod expense_approvals;
pub mod headcount_by_department;
pub mod pipeline_by_stage;
pub mod project_progress;
pub mod quote_conversion;
pub mod revenue_by_month;
pub mod team_workload;
pub mod upcoming_events;
pub mod weekly_hours;
pub mod win_rate;

pub use api_keys::ApiKeys;
pub use break_even::BreakEvenWidget;
pub use cash_flow_forecast::CashFlowForecast;
pub use companies_overview::CompaniesOverview;
pub use expense_approvals::ExpenseApprovals;
pub use headcount_by_department::HeadcountByDepartment;
pub use pipeline_by_stage::PipelineByStage;
pub use project_progress::ProjectProgress;
pub use quote_conversion::QuoteConversion;
pub use revenue_by_month::RevenueByMonth;
pub use team_workload::TeamWorkload;
pub use upcoming_events::UpcomingEvents;
pub use weekly_hours::WeeklyHours;
pub use win_rate::WinRate;

/// Ids of every built-in widget, in default dashboard order.
pub const IDS: [&str; 14] = [
    revenue_by_month::ID,
    companies_overview::ID,
    pipeline_by_stage::ID,
    win_rate::ID,
    cash_flow_forecast::ID,
    break_even::ID,
    expense_approvals::ID,
    headcount_by_department::ID,
    weekly_hours::ID,
    team_workload::ID,
    project_progress::ID,
    quote_conversion::ID,
    upcoming_events::ID,
    api_keys::ID,
];

/// Every built-in widget with its default settings.
pub fn all() -> Vec<Arc<dyn Widget>> {
    IDS.iter().filter_map(|id| by_id(id)).collect()
}

/// The built-in widget with `id`.
pub fn by_id(id: &str) -> Option<Arc<dyn Widget>> {
    let widget: Arc<dyn Widget> = match id {
        revenue_by_month::ID => Arc::new(RevenueByMonth::default()),
        companies_overview::ID => Arc::new(CompaniesOverview),
        pipeline_by_stage::ID => Arc::new(PipelineByStage),
        win_rate::ID => Arc::new(WinRate::default()),
        cash_flow_forecast::ID => Arc::new(CashFlowForecast::default()),
        break_even::ID => Arc::new(BreakEvenWidget),
        expense_approvals::ID => Arc::new(ExpenseApprovals),
        headcount_by_department::ID => Arc::new(HeadcountByDepartment),
        weekly_hours::ID => Arc::new(WeeklyHours::default()),
        team_workload::ID => Arc::new(TeamWorkload),
        project_progress::ID => Arc::new(ProjectProgress),
        quote_conversion::ID => Arc::new(QuoteConversion),
        upcoming_events::ID => Arc::new(UpcomingEvents::default()),
        api_keys::ID => Arc::new(ApiKeys),
        _ => return None,
    };
    Some(widget)
}

fn month_of(raw: Option<&str>) -> Option<String> {
    raw.and_then(month_key_of)
}

fn week_of(raw: Option<&str>) -> Option<String> {
    raw.and_then(week_key_of)
}

/// Trimmed, non-empty label or `fallback`.
fn label_or(raw: Option<&str>, fallback: &str) -> String {
    match raw.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_ids() {
        let widgets = all();
        assert_eq!(widgets.len(), IDS.len());
        for (widget, id) in widgets.iter().zip(IDS) {
            assert_eq!(widget.id(), id);
        }
        assert!(by_id("no-such-widget").is_none());
    }

    #[test]
    fn test_label_or() {
        assert_eq!(label_or(Some("  Sales "), "Other"), "Sales");
        assert_eq!(label_or(Some(""), "Other"), "Other");
        assert_eq!(label_or(None, "Other"), "Other");
    }
}
