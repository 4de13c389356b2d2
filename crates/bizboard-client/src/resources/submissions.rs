use bizboard_core::models::Submission;
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for Submission {
    const PATH: &'static str = "submissions";
    const NAME: &'static str = "submission";
    type Input = Submission;
}

impl ResourceClient<'_, Submission> {
    /// Send a draft submission to the tendering party.
    pub async fn submit(&self, id: impl Into<RecordId>) -> Result<Submission> {
        self.action(&id.into(), "submit", None).await
    }
}
