use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A member of staff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Employee {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Given name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Department name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// First working day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    /// Employment status; absent means active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Employee {
    /// "First Last", or the id when both names are missing.
    pub fn full_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        match (name.is_empty(), &self.id) {
            (false, _) => name,
            (true, Some(id)) => format!("#{id}"),
            (true, None) => String::new(),
        }
    }

    /// Employees are active unless the backend says otherwise.
    pub fn active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}
