//! Composer-specific data types

use serde::Serialize;
use std::time::Duration;

/// Result of one provider generation
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedBlog {
    /// Markdown text returned by the provider
    pub content: String,
    pub model_used: String,
    pub tokens_used: u32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    #[serde(rename = "response_time_ms", serialize_with = "serialize_millis")]
    pub response_time: Duration,
}

fn serialize_millis<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration.as_millis() as u64)
}
