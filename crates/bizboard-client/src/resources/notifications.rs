use bizboard_core::models::Notification;
use bizboard_core::{ListQuery, RecordId, Result};

use crate::resource::{Resource, ResourceClient, UpdateMethod};

impl Resource for Notification {
    const PATH: &'static str = "notifications";
    const NAME: &'static str = "notification";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
    type Input = Notification;
}

impl ResourceClient<'_, Notification> {
    /// Unread notifications only (`?read=false` on top of `query`).
    pub async fn unread(&self, query: &ListQuery) -> Result<Vec<Notification>> {
        let query = query.clone().filter("read", false);
        self.list(&query).await
    }

    /// Mark one notification read.
    pub async fn mark_read(&self, id: impl Into<RecordId>) -> Result<Notification> {
        self.action(&id.into(), "read", None).await
    }

    /// Mark everything read. The backend's reply, if any, is ignored.
    pub async fn mark_all_read(&self) -> Result<()> {
        self.collection_command("read-all", None).await
    }
}
