use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Invoice payment state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Being prepared
    Draft,
    /// Sent to the customer
    Sent,
    /// Fully paid
    Paid,
    /// Past its due date, unpaid
    Overdue,
    /// Cancelled
    Cancelled,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(InvoiceStatus {
    Draft => "draft",
    Sent => "sent",
    Paid => "paid",
    Overdue => "overdue",
    Cancelled => "cancelled",
    Unknown => "unknown",
});

/// A customer invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Human-facing document number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Owning company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// Billing status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InvoiceStatus>,
    /// Total including taxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    /// Amount received so far
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_paid: Option<f64>,
    /// Billing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<String>,
    /// Payment or completion deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// When the invoice was settled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Invoice {
    /// Remaining amount due, never negative.
    pub fn outstanding(&self) -> f64 {
        (self.total_amount.unwrap_or(0.0) - self.amount_paid.unwrap_or(0.0)).max(0.0)
    }

    /// Issue date, falling back to the creation timestamp.
    pub fn billing_date(&self) -> Option<&str> {
        self.issue_date.as_deref().or(self.created_at.as_deref())
    }

    /// Cancelled invoices do not count towards revenue.
    pub fn counts_as_revenue(&self) -> bool {
        !matches!(
            self.status,
            Some(InvoiceStatus::Cancelled) | Some(InvoiceStatus::Draft)
        )
    }
}
