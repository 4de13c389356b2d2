use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// State of a tender submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Being prepared
    Draft,
    /// Handed in, awaiting a decision
    Submitted,
    /// Awarded
    Won,
    /// Not awarded
    Lost,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(SubmissionStatus {
    Draft => "draft",
    Submitted => "submitted",
    Won => "won",
    Lost => "lost",
    Unknown => "unknown",
});

/// A response to a call for tenders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Submission {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Tender name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Workflow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SubmissionStatus>,
    /// Offered amount
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Submission deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    /// When it was handed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
