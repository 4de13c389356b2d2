use serde_json::json;

use bizboard_core::models::{Invoice, Quote};
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for Quote {
    const PATH: &'static str = "quotes";
    const NAME: &'static str = "quote";
    type Input = Quote;
}

impl ResourceClient<'_, Quote> {
    /// Submit a draft quote for internal approval.
    pub async fn submit(&self, id: impl Into<RecordId>) -> Result<Quote> {
        self.action(&id.into(), "submit", None).await
    }

    /// Approve a submitted quote.
    pub async fn approve(&self, id: impl Into<RecordId>) -> Result<Quote> {
        self.action(&id.into(), "approve", None).await
    }

    /// Reject a submitted quote, recording `reason`.
    pub async fn reject(&self, id: impl Into<RecordId>, reason: &str) -> Result<Quote> {
        self.action(&id.into(), "reject", Some(json!({ "reason": reason })))
            .await
    }

    /// Turn an accepted quote into an invoice; returns the new invoice.
    pub async fn convert_to_invoice(&self, id: impl Into<RecordId>) -> Result<Invoice> {
        self.action(&id.into(), "convert", None).await
    }
}
