//! OpenAI-compatible generation gateway adapter

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::OpenAiError;
pub use gateway::{OpenAiLlmGateway, DEFAULT_BASE_URL};
