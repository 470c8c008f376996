//! Environment-based API key lookup
//!
//! Keys are loaded from a `.env` file in the current or parent directories
//! (if present) and from process environment variables. Environment
//! variables take precedence over `.env` values.
//!
//! One variable per provider: `OPENAI_API_KEY`, `GROQ_API_KEY`,
//! `ANTHROPIC_API_KEY`, and the optional `LOCAL_API_KEY` for self-hosted
//! servers that expect a bearer token.

use async_trait::async_trait;

use crate::traits::ApiKeySource;
use shared::ProviderId;

/// Real API key source using environment variables
pub struct RealApiKeySource;

impl RealApiKeySource {
    /// Initialize environment by loading .env file if present
    ///
    /// Safe to call multiple times; already-set variables are not touched.
    fn init_env() {
        let _ = dotenvy::dotenv();
    }
}

#[async_trait]
impl ApiKeySource for RealApiKeySource {
    async fn api_key(&self, provider: ProviderId) -> Option<String> {
        Self::init_env();

        std::env::var(provider.env_key())
            .ok()
            .filter(|value| !value.trim().is_empty())
    }
}
