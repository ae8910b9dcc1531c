//! OpenAI-compatible chat-completions client
//!
//! Talks to any endpoint implementing `POST {base_url}/chat/completions`
//! with bearer-token auth (OpenAI, OpenRouter, AI Pipe).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Result, RouterError};
use crate::llm::client::LlmClient;
use crate::llm::types::{CompletionRequest, CompletionResponse};

/// Default completion endpoint base URL
pub const DEFAULT_BASE_URL: &str = "https://aipipe.org/openrouter/v1";

/// Default model to use
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

/// Environment variable holding the API token
pub const DEFAULT_API_KEY_ENV: &str = "AIPIPE_TOKEN";

/// Longest error body kept in an upstream error message
const MAX_ERROR_BODY: usize = 512;

/// Configuration for the OpenAI-compatible client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key_env: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// OpenAI-compatible API client
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new client, reading the token from `config.api_key_env`
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| RouterError::Config(format!("{} not set", config.api_key_env)))?;

        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(api_key: String, config: OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RouterError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// Full URL of the chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Send a request and decode the body
    async fn send_request(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| RouterError::Upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let mut error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            truncate_at_char_boundary(&mut error_body, MAX_ERROR_BODY);
            return Err(RouterError::Upstream(format!("API error {}: {}", status, error_body)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RouterError::Upstream(format!("Failed to read response: {}", e)))?;

        serde_json::from_slice(&body)
            .map_err(|e| RouterError::Upstream(format!("Malformed response: {}", e)))
    }
}

fn truncate_at_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
    s.push_str("...");
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        tracing::debug!(
            endpoint = %self.endpoint(),
            model = %request.model,
            tools = request.tools.len(),
            "Sending completion request"
        );
        let response = self.send_request(&request).await?;
        if let Some(usage) = response.usage {
            tracing::debug!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total(),
                "Completion finished"
            );
        }
        Ok(response)
    }

    fn model(&self) -> &str {
        &self.config.model
    }
}

// Keep the token out of debug output
impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = OpenAiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.api_key_env, DEFAULT_API_KEY_ENV);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_client_without_api_key() {
        let config = OpenAiConfig {
            api_key_env: "TOOLROUTE_TEST_TOKEN_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        let result = OpenAiClient::new(config);
        assert!(matches!(result, Err(RouterError::Config(_))));
    }

    #[test]
    fn test_client_with_api_key() {
        let client = OpenAiClient::with_api_key("test-key".to_string(), OpenAiConfig::default()).unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.endpoint(), "https://aipipe.org/openrouter/v1/chat/completions");
    }

    #[test]
    fn test_endpoint_trailing_slash() {
        let config = OpenAiConfig {
            base_url: "http://localhost:9000/v1/".to_string(),
            ..Default::default()
        };
        let client = OpenAiClient::with_api_key("k".to_string(), config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9000/v1/chat/completions");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = OpenAiClient::with_api_key("secret-token".to_string(), OpenAiConfig::default()).unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains(DEFAULT_MODEL));
    }

    #[test]
    fn test_truncate_error_body() {
        let mut body = "é".repeat(400);
        truncate_at_char_boundary(&mut body, 511);
        assert!(body.ends_with("..."));
        assert!(body.len() <= 514);

        let mut short = "bad request".to_string();
        truncate_at_char_boundary(&mut short, MAX_ERROR_BODY);
        assert_eq!(short, "bad request");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_upstream_error() {
        let config = OpenAiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        let client = OpenAiClient::with_api_key("k".to_string(), config).unwrap();
        let result = client.complete(CompletionRequest::new(DEFAULT_MODEL)).await;
        assert!(matches!(result, Err(RouterError::Upstream(_))));
    }
}
