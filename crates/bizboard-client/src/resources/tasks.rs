use bizboard_core::models::Task;
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient, UpdateMethod};

impl Resource for Task {
    const PATH: &'static str = "tasks";
    const NAME: &'static str = "task";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
    type Input = Task;
}

impl ResourceClient<'_, Task> {
    /// Mark a task done.
    pub async fn complete(&self, id: impl Into<RecordId>) -> Result<Task> {
        self.action(&id.into(), "complete", None).await
    }
}
