//! Tests for the environment API key source

use crate::services::api_keys::RealApiKeySource;
use crate::traits::ApiKeySource;
use shared::ProviderId;

#[tokio::test]
async fn test_env_key_lookup() {
    std::env::set_var("GROQ_API_KEY", "gsk-test");

    let source = RealApiKeySource;
    assert_eq!(source.api_key(ProviderId::Groq).await.as_deref(), Some("gsk-test"));

    std::env::remove_var("GROQ_API_KEY");
}

#[tokio::test]
async fn test_missing_key_is_none() {
    std::env::remove_var("LOCAL_API_KEY");

    let source = RealApiKeySource;
    assert_eq!(source.api_key(ProviderId::LocalApi).await, None);
}

#[tokio::test]
async fn test_blank_key_is_none() {
    std::env::set_var("ANTHROPIC_API_KEY", "   ");

    let source = RealApiKeySource;
    assert_eq!(source.api_key(ProviderId::Anthropic).await, None);

    std::env::remove_var("ANTHROPIC_API_KEY");
}
