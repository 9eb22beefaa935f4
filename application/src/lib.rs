//! Application layer for debate-club
//!
//! This crate defines the ports the outer layers implement and the use
//! cases that orchestrate the debate protocol over them.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::llm_gateway::{GatewayError, LlmGateway};
pub use ports::progress::{NoProgress, ProgressNotifier};
pub use ports::trace_logger::{NoTraceLogger, TraceEvent, TraceLogger};
pub use use_cases::persona_invoker::PersonaInvoker;
pub use use_cases::run_debate::{DebateOutcome, RunDebateError, RunDebateInput, RunDebateUseCase};
