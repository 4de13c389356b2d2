use serde_json::Value;

use bizboard_core::models::{ApiKey, ApiKeySecret, NewApiKey};
use bizboard_core::{Error, RecordId, Result};

use crate::resource::{Resource, ResourceClient};

impl Resource for ApiKey {
    const PATH: &'static str = "api-keys";
    const NAME: &'static str = "api key";
    type Input = NewApiKey;
}

impl ResourceClient<'_, ApiKey> {
    /// Create a key and return it with its one-time secret.
    ///
    /// Use this rather than `create`, which drops the secret.
    pub async fn create_key(&self, input: &NewApiKey) -> Result<ApiKeySecret> {
        let body = serde_json::to_value(input)?;
        let raw = self
            .api()
            .send(reqwest::Method::POST, &[ApiKey::PATH], &[], Some(&body))
            .await?;
        bizboard_core::envelope::decode_payload(raw)?.ok_or(Error::CreationFailed {
            resource: ApiKey::NAME,
        })
    }

    /// Issue a new secret for an existing key; the old one stops working.
    pub async fn rotate(&self, id: impl Into<RecordId>) -> Result<ApiKeySecret> {
        self.action(&id.into(), "rotate", None).await
    }

    /// Revoke a key. Returns the key in its revoked state.
    pub async fn revoke(&self, id: impl Into<RecordId>) -> Result<ApiKey> {
        self.action(&id.into(), "revoke", None::<Value>).await
    }
}
