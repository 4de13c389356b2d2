use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Sales pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityStage {
    /// Unqualified lead
    Lead,
    /// Qualified, need confirmed
    Qualified,
    /// Proposal sent
    Proposal,
    /// Terms under negotiation
    Negotiation,
    /// Closed, won
    Won,
    /// Closed, lost
    Lost,
    /// Any stage this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(OpportunityStage {
    Lead => "lead",
    Qualified => "qualified",
    Proposal => "proposal",
    Negotiation => "negotiation",
    Won => "won",
    Lost => "lost",
    Unknown => "unknown",
});

impl OpportunityStage {
    /// Won or lost.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A potential deal with a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Opportunity {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Deal name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Owning company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// Amount in the account currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Win probability, 0-100
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Pipeline stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<OpportunityStage>,
    /// Forecast closing date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_close_date: Option<String>,
    /// When the deal was won or lost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Opportunity {
    /// Amount scaled by probability. Missing amount or probability count as 0.
    pub fn weighted_amount(&self) -> f64 {
        self.amount.unwrap_or(0.0) * self.probability.unwrap_or(0.0) / 100.0
    }
}
