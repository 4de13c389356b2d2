//! Bizboard API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode, Url};
use serde_json::Value;

use bizboard_core::envelope::envelope_message;
use bizboard_core::{Error, Result};

use crate::config::ClientConfig;
use crate::credentials::{AuthFailureHandler, CredentialProvider, LogAuthFailure, NoCredentials};
use crate::resource::{Resource, ResourceClient};

/// Async client for the Bizboard REST API.
///
/// Cheap to clone (Arc internals); clones share the connection pool,
/// the credential provider, and the auth-failure hook.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    http: reqwest::Client,
    base: Url,
    prefix: Vec<String>,
    credentials: Arc<dyn CredentialProvider>,
    on_auth_failure: Arc<dyn AuthFailureHandler>,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: ClientConfig,
    credentials: Arc<dyn CredentialProvider>,
    on_auth_failure: Arc<dyn AuthFailureHandler>,
}

impl ApiClientBuilder {
    /// Attach a credential provider (default: none).
    pub fn credentials(mut self, provider: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = provider;
        self
    }

    /// Hook run on HTTP 401 (default: [`LogAuthFailure`]).
    pub fn on_auth_failure(mut self, handler: Arc<dyn AuthFailureHandler>) -> Self {
        self.on_auth_failure = handler;
        self
    }

    /// Validate the configuration and build the client.
    pub fn build(self) -> Result<ApiClient> {
        self.config.validate()?;

        let base = Url::parse(self.config.base_url.trim())
            .map_err(|e| Error::config(format!("Invalid base_url: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::config(format!(
                "base_url cannot carry a path: {}",
                self.config.base_url
            )));
        }

        let mut http = reqwest::Client::builder().user_agent(self.config.user_agent.clone());
        if let Some(secs) = self.config.timeout_secs {
            http = http.timeout(Duration::from_secs(secs));
        }
        let http = http
            .build()
            .map_err(|e| Error::transport_with_source("Failed to build HTTP client", e))?;

        tracing::debug!(base_url = %base, prefix = %self.config.api_prefix, "API client ready");

        Ok(ApiClient {
            inner: Arc::new(Inner {
                http,
                base,
                prefix: self.config.prefix_segments(),
                credentials: self.credentials,
                on_auth_failure: self.on_auth_failure,
            }),
        })
    }
}

impl ApiClient {
    /// Client without credentials.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::builder(config.clone()).build()
    }

    /// Start building a client from `config`.
    pub fn builder(config: ClientConfig) -> ApiClientBuilder {
        ApiClientBuilder {
            config,
            credentials: Arc::new(NoCredentials),
            on_auth_failure: Arc::new(LogAuthFailure),
        }
    }

    /// Typed access to one backend resource.
    pub fn resource<R: Resource>(&self) -> ResourceClient<'_, R> {
        ResourceClient::new(self)
    }

    /// Full URL for `segments` under the versioned prefix.
    ///
    /// Segments are percent-encoded, so ids can never escape their position.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.inner.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::config("base_url cannot carry a path"))?;
            path.pop_if_empty();
            for segment in &self.inner.prefix {
                path.push(segment);
            }
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// Issue a request and return the raw (still enveloped) JSON body.
    ///
    /// An empty body yields `Value::Null`. Non-2xx statuses become
    /// [`Error::Api`]; 401 runs the auth-failure hook first and becomes
    /// [`Error::Unauthorized`].
    pub async fn send(
        &self,
        method: Method,
        segments: &[&str],
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let mut url = self.endpoint(segments)?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = self.inner.http.request(method.clone(), url.clone());
        if let Some(token) = self.inner.credentials.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        tracing::debug!(%method, %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, "Request failed: {e}");
            Error::transport_with_source(format!("{method} {url} failed"), e)
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            Error::transport_with_source(format!("{method} {url}: failed to read body"), e)
        })?;

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(%method, %url, "Unauthorized");
            self.inner.on_auth_failure.on_unauthorized();
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let message = error_message(status, &bytes);
            tracing::warn!(%method, %url, status = status.as_u16(), "API error: {message}");
            return Err(Error::api(status.as_u16(), message));
        }

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.inner.base.as_str())
            .field("prefix", &self.inner.prefix)
            .finish()
    }
}

/// Best-effort message from an error body.
fn error_message(status: StatusCode, bytes: &[u8]) -> String {
    if let Ok(value) = serde_json::from_slice::<Value>(bytes) {
        if let Some(message) = envelope_message(&value) {
            return message.to_string();
        }
        for key in ["message", "detail", "error"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let text = String::from_utf8_lossy(bytes);
    let text = text.trim();
    if !text.is_empty() && text.len() <= 200 {
        return text.to_string();
    }

    status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string()
}
