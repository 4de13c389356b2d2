//! API key inventory with create, rotate, and revoke actions.

use async_trait::async_trait;

use bizboard_client::ApiClient;
use bizboard_core::models::{ApiKey, ApiKeySecret, NewApiKey};
use bizboard_core::{ListQuery, RecordId, Result};

use crate::chart::{Chart, ChartKind, Point, Unit};
use crate::widget::{Widget, WidgetContext};

/// Stable widget id, also the dashboard panel key.
pub const ID: &str = "api-keys";

/// API key counts by status.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiKeys;

impl ApiKeys {
    /// Create a key. The secret in the result is shown once and never
    /// fetched again.
    pub async fn create(client: ApiClient, input: NewApiKey) -> Result<ApiKeySecret> {
        client.api_keys().create_key(&input).await
    }

    /// Replace the key's secret; the new secret is shown once.
    pub async fn rotate(client: ApiClient, id: RecordId) -> Result<ApiKeySecret> {
        client.api_keys().rotate(id).await
    }

    /// Revoke the key for good.
    pub async fn revoke(client: ApiClient, id: RecordId) -> Result<ApiKey> {
        client.api_keys().revoke(id).await
    }
}

#[async_trait]
impl Widget for ApiKeys {
    fn id(&self) -> &'static str {
        ID
    }

    fn title(&self) -> &'static str {
        "API keys"
    }

    fn resources(&self) -> &'static [&'static str] {
        &["api-keys"]
    }

    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>> {
        let keys = ctx.list_all::<ApiKey>(&ListQuery::new()).await?;
        Ok(summarize(&keys))
    }
}

/// Chart for already fetched records, `None` when there are none.
pub fn summarize(keys: &[ApiKey]) -> Option<Chart> {
    if keys.is_empty() {
        return None;
    }
    let active = keys.iter().filter(|k| k.is_active()).count();
    let revoked = keys.len() - active;
    let never_used = keys
        .iter()
        .filter(|k| k.is_active() && k.last_used_at.is_none())
        .count();

    Some(
        Chart::new(ChartKind::Pie)
            .series(["keys"])
            .point(Point::new("active").with("keys", active as f64))
            .point(Point::new("revoked").with("keys", revoked as f64))
            .highlight("Active", active as f64, Unit::Count)
            .highlight("Revoked", revoked as f64, Unit::Count)
            .highlight("Never used", never_used as f64, Unit::Count),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_active_and_revoked() {
        let keys = vec![
            ApiKey {
                last_used_at: Some("2024-05-01".into()),
                ..Default::default()
            },
            ApiKey::default(),
            ApiKey {
                revoked: Some(true),
                ..Default::default()
            },
        ];
        let chart = summarize(&keys).unwrap();

        assert_eq!(chart.get("active").unwrap().value("keys"), Some(2.0));
        assert_eq!(chart.highlight_value("Revoked"), Some(1.0));
        assert_eq!(chart.highlight_value("Never used"), Some(1.0));
    }

    #[test]
    fn test_no_keys_is_empty() {
        assert!(summarize(&[]).is_none());
    }
}
