//! Shared error types for the dojo crates.
//!
//! HTTP failures live next to the client in [`crate::api::ApiError`].

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },
    #[error("Failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum HandshakeError {
    #[error("{0} sign-in is not available")]
    Unavailable(crate::data::OAuthProvider),
}
