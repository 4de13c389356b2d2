use serde::{Deserialize, Serialize};

use crate::RecordId;

/// An in-app notification for the current user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Body text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Backend category, e.g. `invoice`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Whether it was read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Notification {
    /// Missing `read` counts as unread.
    pub fn is_unread(&self) -> bool {
        !self.read.unwrap_or(false)
    }
}
