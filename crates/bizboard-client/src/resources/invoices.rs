use serde_json::json;

use bizboard_core::models::Invoice;
use bizboard_core::{RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for Invoice {
    const PATH: &'static str = "invoices";
    const NAME: &'static str = "invoice";
    type Input = Invoice;
}

impl ResourceClient<'_, Invoice> {
    /// Email the invoice to the customer.
    pub async fn send(&self, id: impl Into<RecordId>) -> Result<Invoice> {
        self.action(&id.into(), "send", None).await
    }

    /// Record a payment. `None` settles the full outstanding amount.
    pub async fn mark_paid(&self, id: impl Into<RecordId>, amount: Option<f64>) -> Result<Invoice> {
        let body = amount.map(|amount| json!({ "amount": amount }));
        self.action(&id.into(), "pay", body).await
    }
}
