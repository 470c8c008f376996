//! Composer error types

use shared::GenerationError;
use thiserror::Error;

/// Result type for composer operations
pub type ComposerResult<T> = Result<T, ComposerError>;

/// Composer error types
#[derive(Error, Debug)]
pub enum ComposerError {
    #[error("blog topic must not be empty")]
    MissingTopic,

    #[error("generation failed: {provider} - {reason}")]
    ProviderError { provider: String, reason: GenerationError },

    #[error("configuration error: {message}")]
    ConfigError { message: String },

    #[error("serialization error: {message}")]
    SerializationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
