//! LLM Gateway implementation for OpenAI-compatible services

use crate::openai::error::OpenAiError;
use crate::openai::protocol::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use debate_application::ports::llm_gateway::{GatewayError, LlmGateway};
use debate_domain::Model;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Gateway adapter for any chat-completions-compatible HTTP service
///
/// Maps transport failures into the port's error variants: HTTP 429 is
/// `RateLimited`, a client timeout is `Timeout`, and every other non-2xx
/// or malformed response is `ServiceError`.
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiLlmGateway {
    /// Create a gateway against the default OpenAI endpoint
    pub fn new(api_key: impl Into<String>) -> Result<Self, OpenAiError> {
        Self::with_base_url(
            api_key,
            DEFAULT_BASE_URL,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Create a gateway with a custom base URL and request timeout
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, OpenAiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(OpenAiError::MissingApiKey);
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("OpenAiLlmGateway initialized against {}", base_url);

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn generate(
        &self,
        model: &Model,
        system_prompt: &str,
        directive: &str,
    ) -> Result<String, GatewayError> {
        let request = ChatRequest {
            model: model.as_str(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(directive),
            ],
            temperature: 0.7,
        };

        debug!("Requesting completion from {}", model);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(GatewayError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::ServiceError(format!("HTTP {status}: {body}")));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::ServiceError(format!("malformed response: {e}")))?;

        match parsed.first_content() {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(GatewayError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            OpenAiLlmGateway::new(""),
            Err(OpenAiError::MissingApiKey)
        ));
        assert!(matches!(
            OpenAiLlmGateway::new("   "),
            Err(OpenAiError::MissingApiKey)
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let gateway = OpenAiLlmGateway::with_base_url(
            "key",
            "http://localhost:8080/v1/",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:8080/v1");
    }
}
