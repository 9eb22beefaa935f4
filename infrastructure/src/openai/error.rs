//! Error types for the OpenAI gateway adapter

use thiserror::Error;

/// Errors raised while constructing the gateway
///
/// Request-time failures are mapped directly into the application
/// layer's `GatewayError` instead.
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("no API key provided (set OPENAI_API_KEY)")]
    MissingApiKey,

    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
