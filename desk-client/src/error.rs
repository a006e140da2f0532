//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The sheet endpoint answered with its `{error}` envelope
    #[error("Endpoint error: {0}")]
    Endpoint(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local storage failed
    #[error("Storage error: {0}")]
    Store(#[from] desk_store::StoreError),

    /// Attachment file I/O failed
    #[error("Attachment error: {0}")]
    Io(#[from] std::io::Error),

    /// A save lost the revision check; the collection changed behind
    /// this session and has been re-fetched
    #[error("Edit conflict: collection was modified by another session")]
    Conflict,

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// The capability is shipped disabled; the message is user-facing
    #[error("{0}")]
    FeatureDisabled(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
