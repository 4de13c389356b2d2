use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Approval state of an expense report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    /// Being prepared
    Draft,
    /// Handed in, awaiting a decision
    Submitted,
    /// Approved internally
    Approved,
    /// Turned down
    Rejected,
    /// Paid back to the employee
    Reimbursed,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(ExpenseStatus {
    Draft => "draft",
    Submitted => "submitted",
    Approved => "approved",
    Rejected => "rejected",
    Reimbursed => "reimbursed",
    Unknown => "unknown",
});

/// An employee expense report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpenseAccount {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Employee claiming the expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<RecordId>,
    /// What was paid for
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Bookkeeping category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Amount in the account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Workflow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ExpenseStatus>,
    /// When the expense was incurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expense_date: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
