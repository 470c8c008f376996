//! Provider profiles and the single-request generation client
//!
//! Each provider maps to a static [`ProviderProfile`] describing its
//! endpoint, auth header shape, and response extraction path. The client
//! issues exactly one POST per generation: no retries, no streaming, no
//! fallback to another provider.

use std::time::{Duration, Instant};

use url::Url;

use crate::core::prompt::build_prompt;
use crate::error::{ComposerError, ComposerResult};
use crate::types::GeneratedBlog;
use shared::{BlogRequest, GenerationError, ProviderId, RequestId};

/// Fixed timeout for one generation request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// How much of an HTTP error body is carried into the error message
const ERROR_BODY_LIMIT: usize = 200;

/// Authentication header shape for a provider endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `x-api-key: <key>` plus the fixed `anthropic-version` header
    XApiKey,
    /// No key required; a supplied key is still sent as a bearer token
    Unauthenticated,
}

/// Response body shape to extract generated text from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// `choices[0].message.content`
    ChatCompletions,
    /// `content[0].text`
    AnthropicMessages,
}

/// Static per-provider request configuration
#[derive(Debug, Clone)]
pub struct ProviderProfile {
    pub provider: ProviderId,
    pub endpoint: String,
    pub auth: AuthScheme,
    pub shape: ResponseShape,
    pub requires_key: bool,
    pub default_model: &'static str,
}

impl ProviderProfile {
    /// Resolve the profile for a provider
    ///
    /// `base_url` is only consulted for [`ProviderId::LocalApi`], where it
    /// is required.
    pub fn resolve(provider: ProviderId, base_url: Option<&str>) -> ComposerResult<Self> {
        match provider {
            ProviderId::OpenAI => Ok(Self {
                provider,
                endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
                auth: AuthScheme::Bearer,
                shape: ResponseShape::ChatCompletions,
                requires_key: true,
                default_model: "gpt-4o-mini",
            }),
            ProviderId::Groq => Ok(Self {
                provider,
                endpoint: "https://api.groq.com/openai/v1/chat/completions".to_string(),
                auth: AuthScheme::Bearer,
                shape: ResponseShape::ChatCompletions,
                requires_key: true,
                default_model: "llama-3.3-70b-versatile",
            }),
            ProviderId::Anthropic => Ok(Self {
                provider,
                endpoint: "https://api.anthropic.com/v1/messages".to_string(),
                auth: AuthScheme::XApiKey,
                shape: ResponseShape::AnthropicMessages,
                requires_key: true,
                default_model: "claude-3-5-sonnet-latest",
            }),
            ProviderId::LocalApi => {
                let base = base_url.ok_or_else(|| ComposerError::ConfigError {
                    message: "local provider requires a base URL".to_string(),
                })?;

                Ok(Self {
                    provider,
                    endpoint: local_endpoint(base)?,
                    auth: AuthScheme::Unauthenticated,
                    shape: ResponseShape::ChatCompletions,
                    requires_key: false,
                    default_model: "local-model",
                })
            }
        }
    }
}

/// Join a local server base URL with the chat completions path
///
/// Accepts a server root, a `/v1` root, or an already-complete completions
/// URL.
fn local_endpoint(base: &str) -> ComposerResult<String> {
    let trimmed = base.trim_end_matches('/');

    let url = Url::parse(trimmed).map_err(|e| ComposerError::ConfigError {
        message: format!("invalid base URL '{base}': {e}"),
    })?;

    if url.path().ends_with("/chat/completions") {
        return Ok(trimmed.to_string());
    }

    let suffix = if url.path().trim_end_matches('/').ends_with("/v1") {
        "chat/completions"
    } else {
        "v1/chat/completions"
    };

    Ok(format!("{trimmed}/{suffix}"))
}

/// Issues single generation requests against a provider profile
pub struct ProviderClient {
    http: reqwest::Client,
}

impl ProviderClient {
    /// Create new provider client
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Send one generation request and extract the generated text
    ///
    /// Fails fast with `MissingCredential` before any network activity when
    /// the profile requires a key and none is supplied.
    pub async fn generate(
        &self,
        request: &BlogRequest,
        profile: &ProviderProfile,
        api_key: Option<&str>,
    ) -> Result<GeneratedBlog, GenerationError> {
        let key = api_key.map(str::trim).filter(|k| !k.is_empty());
        if profile.requires_key && key.is_none() {
            return Err(GenerationError::MissingCredential {
                provider: profile.provider.to_string(),
            });
        }

        let request_id = RequestId::new();
        let prompt = build_prompt(request);
        let model = request.model.as_deref().unwrap_or(profile.default_model);
        let max_tokens = request.word_count.saturating_mul(2);

        let body = serde_json::json!({
            "model": model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "temperature": request.temperature,
            "max_tokens": max_tokens
        });

        let mut http_request = self
            .http
            .post(&profile.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("Content-Type", "application/json")
            .json(&body);

        match (profile.auth, key) {
            (AuthScheme::Bearer, Some(key)) | (AuthScheme::Unauthenticated, Some(key)) => {
                http_request = http_request.header("Authorization", format!("Bearer {key}"));
            }
            (AuthScheme::XApiKey, Some(key)) => {
                http_request = http_request
                    .header("x-api-key", key)
                    .header("anthropic-version", "2023-06-01");
            }
            (_, None) => {}
        }

        tracing::debug!(
            request_id = %request_id,
            provider = %profile.provider,
            model,
            "sending generation request"
        );

        let request_start = Instant::now();

        let response = http_request
            .send()
            .await
            .map_err(|e| GenerationError::NetworkError { message: e.to_string() })?;

        let response_time = request_start.elapsed();
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            return Err(GenerationError::NetworkError {
                message: format!("HTTP {status}: {snippet}"),
            });
        }

        let response_json: serde_json::Value =
            response
                .json()
                .await
                .map_err(|e| GenerationError::MalformedResponse {
                    message: format!("failed to parse response: {e}"),
                })?;

        let content = extract_content(&response_json, profile.shape)?;
        let (prompt_tokens, completion_tokens, tokens_used) =
            extract_usage(&response_json, profile.shape);

        tracing::info!(
            request_id = %request_id,
            provider = %profile.provider,
            model,
            elapsed_ms = response_time.as_millis() as u64,
            tokens = tokens_used,
            "generation complete"
        );

        Ok(GeneratedBlog {
            content,
            model_used: model.to_string(),
            tokens_used,
            prompt_tokens,
            completion_tokens,
            response_time,
        })
    }
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract generated text via the provider-specific response path
fn extract_content(
    response: &serde_json::Value,
    shape: ResponseShape,
) -> Result<String, GenerationError> {
    let content = match shape {
        ResponseShape::ChatCompletions => response
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .ok_or_else(|| GenerationError::MalformedResponse {
                message: "missing choices[0].message.content".to_string(),
            })?,
        ResponseShape::AnthropicMessages => response
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|item| item.get("text"))
            .and_then(|text| text.as_str())
            .ok_or_else(|| GenerationError::MalformedResponse {
                message: "missing content[0].text".to_string(),
            })?,
    };

    Ok(content.to_string())
}

/// Extract usage token counts, defaulting to zero when absent
fn extract_usage(response: &serde_json::Value, shape: ResponseShape) -> (u32, u32, u32) {
    let usage = response.get("usage");
    let field = |name: &str| {
        usage
            .and_then(|u| u.get(name))
            .and_then(|t| t.as_u64())
            .unwrap_or(0) as u32
    };

    match shape {
        ResponseShape::ChatCompletions => {
            let prompt_tokens = field("prompt_tokens");
            let completion_tokens = field("completion_tokens");
            let total = usage
                .and_then(|u| u.get("total_tokens"))
                .and_then(|t| t.as_u64())
                .unwrap_or(u64::from(prompt_tokens + completion_tokens))
                as u32;

            (prompt_tokens, completion_tokens, total)
        }
        ResponseShape::AnthropicMessages => {
            let input_tokens = field("input_tokens");
            let output_tokens = field("output_tokens");

            (input_tokens, output_tokens, input_tokens + output_tokens)
        }
    }
}
