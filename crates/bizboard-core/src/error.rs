//! Error types for Bizboard.

/// Errors that can occur while talking to the backend or reducing its data.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A `get` returned an empty payload.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Singular resource name (e.g. "company")
        resource: &'static str,
        /// Identifier that was requested
        id: String,
    },

    /// A `create` returned an empty payload.
    #[error("{resource} creation failed: no data returned")]
    CreationFailed {
        /// Singular resource name
        resource: &'static str,
    },

    /// An update or custom action returned an empty payload.
    #[error("No data returned from {resource} {operation}")]
    NoDataReturned {
        /// Singular resource name
        resource: &'static str,
        /// Operation that was expected to yield a record
        operation: String,
    },

    /// The backend rejected the credentials (HTTP 401).
    #[error("Authentication required")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Server-provided message, or the canonical reason
        message: String,
    },

    /// The request never produced a response (connect, DNS, timeout, ...).
    #[error("Transport error: {message}")]
    Transport {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (config and token files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// The operation was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,
}

/// Convenience `Result` type alias for Bizboard operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error is retryable.
    ///
    /// The client never retries on its own; this is advisory for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Transport { .. } => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            Error::Io(_) => true,
            Error::NotFound { .. } => false,
            Error::CreationFailed { .. } => false,
            Error::NoDataReturned { .. } => false,
            Error::Unauthorized => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
            Error::Cancelled => false,
        }
    }

    /// Creates a new not-found error.
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Error::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Creates a new no-data error for the given operation.
    pub fn no_data(resource: &'static str, operation: impl Into<String>) -> Self {
        Error::NoDataReturned {
            resource,
            operation: operation.into(),
        }
    }

    /// Creates a new API status error.
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Error::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates a new transport error with a message.
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Error::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new transport error with a message and source error.
    pub fn transport_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
