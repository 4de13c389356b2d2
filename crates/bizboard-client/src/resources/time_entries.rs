use bizboard_core::models::TimeEntry;
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for TimeEntry {
    const PATH: &'static str = "time-entries";
    const NAME: &'static str = "time entry";
    type Input = TimeEntry;
}

impl ResourceClient<'_, TimeEntry> {
    /// Submit logged hours for approval.
    pub async fn submit(&self, id: impl Into<RecordId>) -> Result<TimeEntry> {
        self.action(&id.into(), "submit", None).await
    }

    /// Approve submitted hours.
    pub async fn approve(&self, id: impl Into<RecordId>) -> Result<TimeEntry> {
        self.action(&id.into(), "approve", None).await
    }
}
