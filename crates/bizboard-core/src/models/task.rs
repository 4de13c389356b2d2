use serde::{Deserialize, Serialize};

use super::status_labels;
use crate::RecordId;

/// Task workflow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    Todo,
    /// Being worked on
    InProgress,
    /// Waiting for review
    Review,
    /// Finished
    Done,
    /// Any status this client does not know about
    #[default]
    #[serde(other)]
    Unknown,
}

status_labels!(TaskStatus {
    Todo => "todo",
    InProgress => "in_progress",
    Review => "review",
    Done => "done",
    Unknown => "unknown",
});

/// A unit of work inside a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Project this belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<RecordId>,
    /// Short title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Workflow status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Employee the task is assigned to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<RecordId>,
    /// Payment or completion deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Effort estimate in hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
}

impl Task {
    /// Anything not `done` is open, including unknown states.
    pub fn is_open(&self) -> bool {
        self.status != Some(TaskStatus::Done)
    }
}
