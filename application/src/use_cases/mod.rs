//! Application use cases

pub mod persona_invoker;
pub mod run_debate;

pub use persona_invoker::PersonaInvoker;
pub use run_debate::{DebateOutcome, RunDebateError, RunDebateInput, RunDebateUseCase};
