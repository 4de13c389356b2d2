use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Hours logged by an employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Employee this belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<RecordId>,
    /// Project this belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<RecordId>,
    /// Task the time was spent on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<RecordId>,
    /// Calendar date (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Hours worked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    /// Billable to the customer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
    /// What was done
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
