//! Tests for provider profiles and the generation client

use crate::error::ComposerError;
use crate::services::provider_client::{AuthScheme, ProviderClient, ProviderProfile, ResponseShape};
use shared::{BlogRequest, GenerationError, ProviderId};

fn request_for(topic: &str) -> BlogRequest {
    BlogRequest {
        topic: topic.to_string(),
        ..BlogRequest::default()
    }
}

#[test]
fn test_openai_profile() {
    let profile = ProviderProfile::resolve(ProviderId::OpenAI, None).unwrap();

    assert_eq!(profile.endpoint, "https://api.openai.com/v1/chat/completions");
    assert_eq!(profile.auth, AuthScheme::Bearer);
    assert_eq!(profile.shape, ResponseShape::ChatCompletions);
    assert!(profile.requires_key);
    assert_eq!(profile.default_model, "gpt-4o-mini");
}

#[test]
fn test_groq_profile() {
    let profile = ProviderProfile::resolve(ProviderId::Groq, None).unwrap();

    assert_eq!(profile.endpoint, "https://api.groq.com/openai/v1/chat/completions");
    assert_eq!(profile.auth, AuthScheme::Bearer);
    assert_eq!(profile.shape, ResponseShape::ChatCompletions);
    assert!(profile.requires_key);
}

#[test]
fn test_anthropic_profile() {
    let profile = ProviderProfile::resolve(ProviderId::Anthropic, None).unwrap();

    assert_eq!(profile.endpoint, "https://api.anthropic.com/v1/messages");
    assert_eq!(profile.auth, AuthScheme::XApiKey);
    assert_eq!(profile.shape, ResponseShape::AnthropicMessages);
    assert!(profile.requires_key);
}

#[test]
fn test_local_profile_joins_base_url() {
    let profile =
        ProviderProfile::resolve(ProviderId::LocalApi, Some("http://localhost:11434")).unwrap();
    assert_eq!(profile.endpoint, "http://localhost:11434/v1/chat/completions");
    assert_eq!(profile.auth, AuthScheme::Unauthenticated);
    assert!(!profile.requires_key);

    // A /v1 root is not doubled
    let profile =
        ProviderProfile::resolve(ProviderId::LocalApi, Some("http://localhost:11434/v1/")).unwrap();
    assert_eq!(profile.endpoint, "http://localhost:11434/v1/chat/completions");

    // A complete completions URL is used as-is
    let profile = ProviderProfile::resolve(
        ProviderId::LocalApi,
        Some("http://127.0.0.1:8080/v1/chat/completions"),
    )
    .unwrap();
    assert_eq!(profile.endpoint, "http://127.0.0.1:8080/v1/chat/completions");
}

#[test]
fn test_local_profile_requires_base_url() {
    let result = ProviderProfile::resolve(ProviderId::LocalApi, None);
    assert!(matches!(result, Err(ComposerError::ConfigError { .. })));
}

#[test]
fn test_local_profile_rejects_invalid_base_url() {
    let result = ProviderProfile::resolve(ProviderId::LocalApi, Some("not a url"));
    assert!(matches!(result, Err(ComposerError::ConfigError { .. })));
}

#[tokio::test]
async fn test_missing_credential_short_circuits() {
    let client = ProviderClient::new();
    let profile = ProviderProfile::resolve(ProviderId::OpenAI, None).unwrap();
    let request = request_for("rust");

    // No key and a whitespace-only key both fail before any network use
    let result = client.generate(&request, &profile, None).await;
    assert!(matches!(result, Err(GenerationError::MissingCredential { .. })));

    let result = client.generate(&request, &profile, Some("   ")).await;
    assert!(matches!(result, Err(GenerationError::MissingCredential { .. })));
}
