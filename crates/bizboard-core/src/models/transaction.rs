use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Direction of a ledger movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money in
    Income,
    /// Money out
    Expense,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(TransactionKind {
    Income => "income",
    Expense => "expense",
    Unknown => "unknown",
});

/// A finance ledger entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Income or expense
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    /// Always positive; direction comes from `kind`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Calendar date (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Bookkeeping category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Transaction {
    /// Income positive, expense negative, unknown kinds zero.
    pub fn signed_amount(&self) -> f64 {
        let amount = self.amount.unwrap_or(0.0).abs();
        match self.kind {
            Some(TransactionKind::Income) => amount,
            Some(TransactionKind::Expense) => -amount,
            _ => 0.0,
        }
    }
}
