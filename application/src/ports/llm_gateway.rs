//! LLM Gateway port
//!
//! Defines the interface for the external text-generation capability.
//! The debate core treats generation as opaque: given system instructions
//! and a user directive, it returns text or fails.

use async_trait::async_trait;
use debate_domain::Model;
use thiserror::Error;

/// Generation failure, as seen by the debate controller
///
/// Adapters map their transport-specific failures (rate limiting,
/// timeouts, service errors, empty responses) into these variants.
/// No variant is retried inside the core; retry is the caller's policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("rate limited by the generation service")]
    RateLimited,

    #[error("generation request timed out")]
    Timeout,

    #[error("generation service error: {0}")]
    ServiceError(String),

    #[error("generation service returned an empty response")]
    EmptyResponse,

    #[error("connection error: {0}")]
    ConnectionError(String),
}

/// Gateway for text generation
///
/// This port defines how the application layer reaches the generation
/// service. Implementations (adapters) live in the infrastructure layer.
/// Each call is stateless: no memory persists between invocations except
/// what is explicitly passed in the prompt.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Generate text for one directive under the given system instructions
    async fn generate(
        &self,
        model: &Model,
        system_prompt: &str,
        directive: &str,
    ) -> Result<String, GatewayError>;
}
