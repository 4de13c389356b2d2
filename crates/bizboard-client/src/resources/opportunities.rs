use serde_json::json;

use bizboard_core::models::{Opportunity, OpportunityStage};
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient, UpdateMethod};

impl Resource for Opportunity {
    const PATH: &'static str = "opportunities";
    const NAME: &'static str = "opportunity";
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Patch;
    type Input = Opportunity;
}

impl ResourceClient<'_, Opportunity> {
    /// Move an opportunity to another pipeline stage.
    pub async fn move_stage(
        &self,
        id: impl Into<RecordId>,
        stage: OpportunityStage,
    ) -> Result<Opportunity> {
        self.action(&id.into(), "stage", Some(json!({ "stage": stage })))
            .await
    }

    /// Close as won.
    pub async fn mark_won(&self, id: impl Into<RecordId>) -> Result<Opportunity> {
        self.action(&id.into(), "won", None).await
    }

    /// Close as lost, with an optional reason.
    pub async fn mark_lost(
        &self,
        id: impl Into<RecordId>,
        reason: Option<&str>,
    ) -> Result<Opportunity> {
        let body = reason.map(|reason| json!({ "reason": reason }));
        self.action(&id.into(), "lost", body).await
    }
}
