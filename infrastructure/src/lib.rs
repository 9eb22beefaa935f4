//! Infrastructure layer for debate-club
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlTraceLogger;
pub use openai::{OpenAiError, OpenAiLlmGateway, DEFAULT_BASE_URL};
