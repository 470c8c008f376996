//! Shared error types for provider generation requests

use thiserror::Error;

/// Result type for provider generation requests
pub type GenerationResult<T> = Result<T, GenerationError>;

/// Failure modes for a single provider request
///
/// Every failure is terminal for the request; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("no API key configured for provider: {provider}")]
    MissingCredential { provider: String },

    #[error("provider request failed: {message}")]
    NetworkError { message: String },

    #[error("unexpected response shape: {message}")]
    MalformedResponse { message: String },
}
