//! Expense claims by approval status, with approve and reject actions.

use async_trait::async_trait;

use bizboard_aggregate::group::totals_by;
use bizboard_client::ApiClient;
use bizboard_core::models::{ExpenseAccount, ExpenseStatus};
use bizboard_core::{ListQuery, RecordId, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "expense-approvals";

/// Expense accounts awaiting a decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpenseApprovals;

impl ExpenseApprovals {
    /// Approve a submitted claim.
    pub async fn approve(client: ApiClient, id: RecordId) -> Result<ExpenseAccount> {
        client.expense_accounts().approve(id).await
    }

    /// Reject a submitted claim with a reason.
    pub async fn reject(client: ApiClient, id: RecordId, reason: String) -> Result<ExpenseAccount> {
        client.expense_accounts().reject(id, &reason).await
    }
}

#[async_trait]
impl Widget for ExpenseApprovals {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "Expense approvals"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["expense-accounts"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let expenses = ctx.list_all::<ExpenseAccount>(&ListQuery::new()).await?;
        Ok(summarize(&expenses))
    }
}

/// Chart for already fetched records, `None` when there are none.
pub fn summarize(expenses: &[ExpenseAccount]) -> Option<Chart> {
    if expenses.is_empty() {
        return None;
    }
    let by_status = totals_by(
        expenses,
        |e| Some(e.status.unwrap_or_default()),
        |e| e.amount.unwrap_or(0.0),
    );
    let pending = by_status
        .get(&ExpenseStatus::Submitted)
        .copied()
        .unwrap_or_default();

    let points = by_status.iter().map(|(status, totals)| {
        Point::new(status.as_str())
            .with("count", totals.count as f64)
            .with("amount", totals.sum)
    });

    Some(
        Chart::new(ChartKind::Stacked)
            .series(["count", "amount"])
            .points(points)
            .highlight("Awaiting approval", pending.count as f64, Unit::Count)
            .highlight("Pending amount", pending.sum, Unit::Currency),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn expense(status: ExpenseStatus, amount: f64) -> ExpenseAccount {
        ExpenseAccount {
            status: Some(status),
            amount: Some(amount),
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_per_status() {
        let expenses = vec![
            expense(ExpenseStatus::Submitted, 120.0),
            expense(ExpenseStatus::Submitted, 30.0),
            expense(ExpenseStatus::Approved, 80.0),
        ];
        let chart = summarize(&expenses).unwrap();

        assert_eq!(chart.keys(), vec!["submitted", "approved"]);
        assert_eq!(chart.highlight_value("Awaiting approval"), Some(2.0));
        assert_eq!(chart.highlight_value("Pending amount"), Some(150.0));
    }

    #[test]
    fn test_nothing_pending() {
        let chart = summarize(&[expense(ExpenseStatus::Reimbursed, 10.0)]).unwrap();
        assert_eq!(chart.highlight_value("Awaiting approval"), Some(0.0));
    }
}
