use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Lifecycle of a commercial quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    /// Being prepared
    Draft,
    /// Handed in, awaiting a decision
    Submitted,
    /// Approved internally
    Approved,
    /// Turned down
    Rejected,
    /// Accepted by the customer
    Accepted,
    /// No longer valid
    Expired,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(QuoteStatus {
    Draft => "draft",
    Submitted => "submitted",
    Approved => "approved",
    Rejected => "rejected",
    Accepted => "accepted",
    Expired => "expired",
    Unknown => "unknown",
});

/// A priced offer attached to an opportunity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quote {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Human-facing document number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Opportunity the quote answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<RecordId>,
    /// Owning company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// Workflow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuoteStatus>,
    /// Total including taxes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    /// Expiry date of the offer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
