use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A calendar entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarEvent {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Short title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Start timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// End timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Where it takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Spans whole days
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_day: Option<bool>,
}
