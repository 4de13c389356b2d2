use serde_json::json;

use bizboard_core::models::ExpenseAccount;
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for ExpenseAccount {
    const PATH: &'static str = "expense-accounts";
    const NAME: &'static str = "expense account";
    type Input = ExpenseAccount;
}

impl ResourceClient<'_, ExpenseAccount> {
    /// Submit a draft expense account for approval.
    pub async fn submit(&self, id: impl Into<RecordId>) -> Result<ExpenseAccount> {
        self.action(&id.into(), "submit", None).await
    }

    /// Approve a submitted expense account.
    pub async fn approve(&self, id: impl Into<RecordId>) -> Result<ExpenseAccount> {
        self.action(&id.into(), "approve", None).await
    }

    /// Reject a submitted expense account, recording `reason`.
    pub async fn reject(&self, id: impl Into<RecordId>, reason: &str) -> Result<ExpenseAccount> {
        self.action(&id.into(), "reject", Some(json!({ "reason": reason })))
            .await
    }
}
