//! Generic CRUD over a backend resource.
//!
//! Every resource lives at `{prefix}/{PATH}` and follows the same contract:
//!
//! | Operation | Request | Empty payload |
//! |---|---|---|
//! | `list` | `GET {PATH}?skip&limit&filters` | empty `Vec` |
//! | `list_all` | `list`, following `skip` until a short page | empty `Vec` |
//! | `get` | `GET {PATH}/{id}` | [`Error::NotFound`] |
//! | `create` | `POST {PATH}` | [`Error::CreationFailed`] |
//! | `update` | `PUT`/`PATCH {PATH}/{id}` | [`Error::NoDataReturned`] |
//! | `delete` | `DELETE {PATH}/{id}` | ignored |
//! | actions | `POST {PATH}/{id}/{action}` | [`Error::NoDataReturned`] |

use std::marker::PhantomData;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use bizboard_core::envelope::{decode_payload, list_items, unwrap_envelope};
use bizboard_core::query::DEFAULT_LIMIT;
use bizboard_core::{Error, ListQuery, RecordId, Result};

use crate::client::ApiClient;

/// Most pages `list_all` requests before giving up on reaching the end.
pub const MAX_PAGES: u32 = 1_000;

/// HTTP verb used for partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMethod {
    /// `PUT {PATH}/{id}`
    Put,
    /// `PATCH {PATH}/{id}`
    Patch,
}

impl UpdateMethod {
    fn as_method(self) -> Method {
        match self {
            UpdateMethod::Put => Method::PUT,
            UpdateMethod::Patch => Method::PATCH,
        }
    }
}

/// A backend entity reachable under the versioned API prefix.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Path segment, e.g. `"expense-accounts"`.
    const PATH: &'static str;

    /// Singular name used in error messages, e.g. `"expense account"`.
    const NAME: &'static str;

    /// Verb used by `update`.
    const UPDATE_METHOD: UpdateMethod = UpdateMethod::Put;

    /// Payload accepted by `create`.
    type Input: Serialize + Send + Sync;
}

/// Typed operations on one resource, borrowed from an [`ApiClient`].
pub struct ResourceClient<'a, R: Resource> {
    api: &'a ApiClient,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceClient<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ResourceClient<'_, R> {}

impl<'a, R: Resource> ResourceClient<'a, R> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            _marker: PhantomData,
        }
    }

    /// The underlying client.
    pub fn api(&self) -> &'a ApiClient {
        self.api
    }

    /// List records in backend order.
    ///
    /// Never fails on a bad payload: absent, `null`, non-list, or
    /// undecodable bodies produce an empty `Vec`; individual records that
    /// fail to decode are skipped. Transport and status errors still
    /// propagate.
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<R>> {
        self.list_at(&[R::PATH], query).await
    }

    /// Every record matching `query`, in backend order.
    ///
    /// Pages start at `query.skip` and hold `query.limit` records (the
    /// default limit when zero). Paging stops at the first page with fewer
    /// items than the limit, counting items that failed to decode, or after
    /// [`MAX_PAGES`] pages.
    pub async fn list_all(&self, query: &ListQuery) -> Result<Vec<R>> {
        let limit = if query.limit == 0 {
            DEFAULT_LIMIT
        } else {
            query.limit
        };
        let mut page = query.clone().page(query.skip, limit);
        let mut records = Vec::new();

        for pages in 1..=MAX_PAGES {
            let (batch, received) = self.fetch_page(&[R::PATH], &page).await?;
            records.extend(batch);
            if received < limit as usize {
                tracing::debug!(
                    resource = R::NAME,
                    pages,
                    count = records.len(),
                    "Listed all records"
                );
                return Ok(records);
            }
            page.skip = page.skip.saturating_add(limit);
        }

        tracing::warn!(
            resource = R::NAME,
            pages = MAX_PAGES,
            "Page limit reached, results may be incomplete"
        );
        Ok(records)
    }

    /// Fetch one record.
    pub async fn get(&self, id: impl Into<RecordId>) -> Result<R> {
        let id = id.into();
        let raw = self
            .api
            .send(Method::GET, &[R::PATH, id.as_str()], &[], None)
            .await?;
        decode_payload(raw)?.ok_or_else(|| Error::not_found(R::NAME, id.as_str()))
    }

    /// Create a record from the full input payload.
    pub async fn create(&self, input: &R::Input) -> Result<R> {
        let body = serde_json::to_value(input)?;
        let raw = self
            .api
            .send(Method::POST, &[R::PATH], &[], Some(&body))
            .await?;
        decode_payload(raw)?.ok_or(Error::CreationFailed { resource: R::NAME })
    }

    /// Send the fields present in `changes`.
    pub async fn update(&self, id: impl Into<RecordId>, changes: &R) -> Result<R> {
        let id = id.into();
        let body = serde_json::to_value(changes)?;
        let raw = self
            .api
            .send(
                R::UPDATE_METHOD.as_method(),
                &[R::PATH, id.as_str()],
                &[],
                Some(&body),
            )
            .await?;
        decode_payload(raw)?.ok_or_else(|| Error::no_data(R::NAME, "update"))
    }

    /// Delete a record. Any response body is ignored.
    pub async fn delete(&self, id: impl Into<RecordId>) -> Result<()> {
        let id = id.into();
        self.api
            .send(Method::DELETE, &[R::PATH, id.as_str()], &[], None)
            .await?;
        tracing::debug!(resource = R::NAME, id = %id, "Deleted");
        Ok(())
    }

    /// `POST {PATH}/{id}/{action}` and decode the returned record.
    pub async fn action<T: DeserializeOwned>(
        &self,
        id: &RecordId,
        action: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let raw = self
            .api
            .send(
                Method::POST,
                &[R::PATH, id.as_str(), action],
                &[],
                body.as_ref(),
            )
            .await?;
        decode_payload(raw)?.ok_or_else(|| Error::no_data(R::NAME, action))
    }

    /// `POST {PATH}/{action}` on the collection, decoding the result.
    pub async fn collection_action<T: DeserializeOwned>(
        &self,
        action: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let raw = self
            .api
            .send(Method::POST, &[R::PATH, action], &[], body.as_ref())
            .await?;
        decode_payload(raw)?.ok_or_else(|| Error::no_data(R::NAME, action))
    }

    /// `POST {PATH}/{action}` where no payload is expected back.
    pub async fn collection_command(&self, action: &str, body: Option<Value>) -> Result<()> {
        self.api
            .send(Method::POST, &[R::PATH, action], &[], body.as_ref())
            .await?;
        Ok(())
    }

    /// List at arbitrary segments, with the same lenient decoding as `list`.
    pub async fn list_at<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &ListQuery,
    ) -> Result<Vec<T>> {
        let (records, _) = self.fetch_page(segments, query).await?;
        Ok(records)
    }

    /// One decoded page plus the number of items the backend sent.
    async fn fetch_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &ListQuery,
    ) -> Result<(Vec<T>, usize)> {
        let raw = match self
            .api
            .send(Method::GET, segments, &query.to_pairs(), None)
            .await
        {
            Ok(raw) => raw,
            Err(Error::Serialization(e)) => {
                tracing::warn!(resource = R::NAME, "Malformed list body, treating as empty: {e}");
                return Ok((Vec::new(), 0));
            }
            Err(e) => return Err(e),
        };
        Ok(decode_page(R::NAME, raw))
    }
}

/// Decode a raw list body, skipping anything that does not fit.
///
/// Also returns how many items the payload held, decodable or not.
fn decode_page<T: DeserializeOwned>(resource: &str, raw: Value) -> (Vec<T>, usize) {
    let payload = unwrap_envelope(raw);
    let was_null = payload.is_null();
    let Some(items) = list_items(payload) else {
        if !was_null {
            tracing::warn!(resource, "List payload is not a list, treating as empty");
        }
        return (Vec::new(), 0);
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(resource, "Skipping undecodable record: {e}");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!(resource, kept = records.len(), total, "Dropped records while decoding");
    }
    (records, total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use bizboard_core::models::Company;
    use serde_json::json;

    #[test]
    fn test_decode_page_bare_array() {
        let companies: Vec<Company> = decode_page("company", json!([{"id": 1}, {"id": 2}])).0;
        assert_eq!(companies.len(), 2);
    }

    #[test]
    fn test_decode_page_envelope_and_items() {
        let raw = json!({"success": true, "data": {"items": [{"id": 1, "name": "Acme"}]}});
        let companies: Vec<Company> = decode_page("company", raw).0;
        assert_eq!(companies[0].name.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_decode_page_malformed_is_empty() {
        let companies: Vec<Company> = decode_page("company", json!({"unexpected": true})).0;
        assert!(companies.is_empty());

        let companies: Vec<Company> = decode_page("company", Value::Null).0;
        assert!(companies.is_empty());

        let companies: Vec<Company> = decode_page("company", json!({"success": true})).0;
        assert!(companies.is_empty());
    }

    #[test]
    fn test_decode_page_skips_bad_records() {
        let raw = json!([{"id": 1}, "garbage", {"id": 3, "name": 7}, {"id": 4}]);
        let companies: Vec<Company> = decode_page("company", raw).0;
        let ids: Vec<_> = companies
            .iter()
            .map(|c| c.id.as_ref().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_decode_page_counts_skipped_items() {
        let (companies, received): (Vec<Company>, usize) =
            decode_page("company", json!([{"id": 1}, "garbage", {"id": 3}]));
        assert_eq!(companies.len(), 2);
        assert_eq!(received, 3);
    }
}
