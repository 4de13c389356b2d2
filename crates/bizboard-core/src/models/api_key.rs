use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A programmatic access key. The secret is never part of this record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiKey {
    /// Backend identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// First characters of the key, for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Granted permission scopes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    /// Creation timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last authenticated request, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<String>,
    /// Whether the key was revoked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
}

impl ApiKey {
    /// Keys are active unless explicitly revoked.
    pub fn is_active(&self) -> bool {
        !self.revoked.unwrap_or(false)
    }
}

/// Input for creating a key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewApiKey {
    /// Label for the new key
    pub name: String,
    /// Requested permission scopes; `None` lets the backend decide
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scopes: Vec<String>,
}

impl NewApiKey {
    /// Request for a key labelled `name` with default scopes.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scopes: Vec::new(),
        }
    }

    /// Adds a requested scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.push(scope.into());
        self
    }
}

/// A key together with its plaintext secret.
///
/// Returned once, on create and rotate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKeySecret {
    /// The key record
    #[serde(flatten)]
    pub key: ApiKey,
    /// Plain-text secret, shown only once
    pub secret: String,
}
