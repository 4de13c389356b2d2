use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Project lifecycle state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Not started yet
    Planned,
    /// In progress
    Active,
    /// Paused
    OnHold,
    /// Delivered
    Completed,
    /// Cancelled
    Cancelled,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(ProjectStatus {
    Planned => "planned",
    Active => "active",
    OnHold => "on_hold",
    Completed => "completed",
    Cancelled => "cancelled",
    Unknown => "unknown",
});

/// A client or internal project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning company
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<RecordId>,
    /// Delivery status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// Planned budget
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    /// Planned start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Planned end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
