//! Ports (interfaces) implemented by outer layers

pub mod llm_gateway;
pub mod progress;
pub mod trace_logger;

pub use llm_gateway::{GatewayError, LlmGateway};
pub use progress::{NoProgress, ProgressNotifier};
pub use trace_logger::{NoTraceLogger, TraceEvent, TraceLogger};
