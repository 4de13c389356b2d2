//! The widget trait and the context widgets load through.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use bizboard_client::{ApiClient, Resource};
use bizboard_core::{ListQuery, Result};

use crate::cache::QueryCache;
use crate::chart::Chart;

/// A dashboard panel: fetches, aggregates, and returns chart data.
///
/// Implementations hold only configuration; all fetched data lives in the
/// value returned by [`load`](Widget::load).
#[async_trait]
pub trait Widget: Send + Sync + 'static {
    /// Stable identifier, e.g. `revenue-by-month`.
    fn id(&self) -> &'static str;

    /// Human-readable title.
    fn title(&self) -> &'static str;

    /// Resource paths this widget reads. Mutations through the host
    /// invalidate these cache prefixes; an empty slice clears the cache.
    fn resources(&self) -> &'static [&'static str] {
        &[]
    }

    /// Fetch and aggregate. `Ok(None)` means there is nothing to chart.
    async fn load(&self, ctx: &WidgetContext) -> Result<Option<Chart>>;
}

/// Shared handles a widget loads through.
///
/// Cheap to clone; clones share the client and the cache.
#[derive(Debug, Clone)]
pub struct WidgetContext {
    client: ApiClient,
    cache: Option<Arc<QueryCache>>,
    today: Option<NaiveDate>,
}

impl WidgetContext {
    /// Context without a cache: every load hits the backend.
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: None,
            today: None,
        }
    }

    /// Serve lists through `cache`.
    pub fn with_cache(mut self, cache: Arc<QueryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Pin the reference date used for trailing windows.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The shared API client.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The attached cache, if any.
    pub fn cache(&self) -> Option<&Arc<QueryCache>> {
        self.cache.as_ref()
    }

    /// Reference date: the pinned one, or the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// One page of `R`, consulting the cache first when one is attached.
    pub async fn list<R: Resource + Clone>(&self, query: &ListQuery) -> Result<Vec<R>> {
        let resource = self.client.resource::<R>();
        let fetch = resource.list(query);
        self.cached(cache_key::<R>(query), fetch).await
    }

    /// Every page of `R` from `query.skip` on, cached as one entry.
    ///
    /// Widgets aggregate through this so trailing windows see the newest
    /// records, not just the first page.
    pub async fn list_all<R: Resource + Clone>(&self, query: &ListQuery) -> Result<Vec<R>> {
        let resource = self.client.resource::<R>();
        let fetch = resource.list_all(query);
        self.cached(all_cache_key::<R>(query), fetch).await
    }

    async fn cached<T, F>(&self, key: String, fetch: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = Result<T>>,
    {
        let Some(cache) = &self.cache else {
            return fetch.await;
        };

        if let Some(hit) = cache.get::<T>(&key) {
            tracing::trace!(key = %key, "Cache hit");
            return Ok(hit.as_ref().clone());
        }

        let value = fetch.await?;
        cache.insert(key, Arc::new(value.clone()));
        Ok(value)
    }

    /// Drop cached lists for `paths`, or everything when `paths` is empty.
    pub fn invalidate(&self, paths: &[&str]) {
        let Some(cache) = &self.cache else {
            return;
        };
        if paths.is_empty() {
            cache.clear();
            return;
        }
        for path in paths {
            cache.invalidate_prefix(&format!("{path}?"));
        }
    }
}

/// `{PATH}?{query}`.
pub fn cache_key<R: Resource>(query: &ListQuery) -> String {
    format!("{}?{}", R::PATH, query.cache_key())
}

/// `{PATH}?all&{query}`, for [`WidgetContext::list_all`].
pub fn all_cache_key<R: Resource>(query: &ListQuery) -> String {
    format!("{}?all&{}", R::PATH, query.cache_key())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bizboard_client::ClientConfig;
    use bizboard_core::models::Invoice;

    fn context() -> WidgetContext {
        let client = ApiClient::new(&ClientConfig::default()).unwrap();
        WidgetContext::new(client)
    }

    #[test]
    fn test_cache_key() {
        let key = cache_key::<Invoice>(&ListQuery::new().filter("status", "paid"));
        assert_eq!(key, "invoices?skip=0&limit=100&status=paid");
    }

    #[test]
    fn test_all_cache_key_shares_resource_prefix() {
        let key = all_cache_key::<Invoice>(&ListQuery::new());
        assert_eq!(key, "invoices?all&skip=0&limit=100");
        assert!(key.starts_with("invoices?"));
    }

    #[test]
    fn test_pinned_today() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(context().with_today(day).today(), day);
    }

    #[test]
    fn test_invalidate_scoped_and_full() {
        let cache = Arc::new(QueryCache::default());
        let ctx = context().with_cache(Arc::clone(&cache));
        cache.insert("invoices?skip=0", Arc::new(1));
        cache.insert("quotes?skip=0", Arc::new(2));

        ctx.invalidate(&["invoices"]);
        assert_eq!(cache.len(), 1);

        ctx.invalidate(&[]);
        assert!(cache.is_empty());
    }
}
