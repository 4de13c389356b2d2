use bizboard_core::models::{Project, Task};
use bizboard_core::{ListQuery, RecordId, Result};

use crate::resource::{Resource, ResourceClient, UpdateMethod};

impl Resource for Project {
    const PATH: &'static str = "projects";
    const NAME: &'static str = "project";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
    type Input = Project;
}

impl ResourceClient<'_, Project> {
    /// Tasks of one project (`GET projects/{id}/tasks`).
    pub async fn tasks(&self, project_id: impl Into<RecordId>, query: &ListQuery) -> Result<Vec<Task>> {
        let id = project_id.into();
        self.list_at(&[Project::PATH, id.as_str(), Task::PATH], query)
            .await
    }
}
