//! Composer trait definitions for dependency injection

use async_trait::async_trait;
use shared::ProviderId;

/// Source of provider API keys
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiKeySource: Send + Sync {
    /// Look up the API key for a provider, if one is configured
    async fn api_key(&self, provider: ProviderId) -> Option<String>;
}
