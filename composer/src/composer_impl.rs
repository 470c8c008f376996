//! Composer implementation with dependency injection

use crate::error::{ComposerError, ComposerResult};
use crate::services::provider_client::{ProviderClient, ProviderProfile};
use crate::traits::ApiKeySource;
use crate::types::GeneratedBlog;
use shared::BlogRequest;

/// Blog composer with dependency injection
pub struct Composer<K>
where
    K: ApiKeySource,
{
    key_source: K,
    client: ProviderClient,
}

impl<K> Composer<K>
where
    K: ApiKeySource,
{
    /// Create new composer instance
    pub fn new(key_source: K, client: ProviderClient) -> Self {
        Self { key_source, client }
    }

    /// Run one generation request end to end
    ///
    /// Validates the topic, resolves the provider profile, looks up the API
    /// key, and delegates to the client. An empty topic is rejected before
    /// any profile or key work happens.
    pub async fn compose(
        &self,
        request: &BlogRequest,
        base_url: Option<&str>,
    ) -> ComposerResult<GeneratedBlog> {
        if request.topic.trim().is_empty() {
            return Err(ComposerError::MissingTopic);
        }

        let profile = ProviderProfile::resolve(request.provider, base_url)?;
        let api_key = self.key_source.api_key(request.provider).await;

        self.client
            .generate(request, &profile, api_key.as_deref())
            .await
            .map_err(|reason| ComposerError::ProviderError {
                provider: request.provider.to_string(),
                reason,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::MockApiKeySource;
    use shared::{GenerationError, ProviderId};

    #[tokio::test]
    async fn test_blank_topic_rejected_before_key_lookup() {
        let mut key_source = MockApiKeySource::new();
        key_source.expect_api_key().times(0);

        let composer = Composer::new(key_source, ProviderClient::new());
        let request = BlogRequest {
            topic: "   ".to_string(),
            ..BlogRequest::default()
        };

        let result = composer.compose(&request, None).await;
        assert!(matches!(result, Err(ComposerError::MissingTopic)));
    }

    #[tokio::test]
    async fn test_local_provider_requires_base_url() {
        let mut key_source = MockApiKeySource::new();
        key_source.expect_api_key().times(0);

        let composer = Composer::new(key_source, ProviderClient::new());
        let request = BlogRequest {
            topic: "rust".to_string(),
            provider: ProviderId::LocalApi,
            ..BlogRequest::default()
        };

        let result = composer.compose(&request, None).await;
        assert!(matches!(result, Err(ComposerError::ConfigError { .. })));
    }

    #[tokio::test]
    async fn test_missing_key_wrapped_as_provider_error() {
        let mut key_source = MockApiKeySource::new();
        key_source.expect_api_key().returning(|_| None);

        let composer = Composer::new(key_source, ProviderClient::new());
        let request = BlogRequest {
            topic: "rust".to_string(),
            ..BlogRequest::default()
        };

        match composer.compose(&request, None).await {
            Err(ComposerError::ProviderError { provider, reason }) => {
                assert_eq!(provider, "openai");
                assert!(matches!(reason, GenerationError::MissingCredential { .. }));
            }
            other => panic!("unexpected result: {:?}", other.map(|blog| blog.content)),
        }
    }
}
