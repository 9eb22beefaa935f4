//! Domain layer for debate-club
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Fixed-protocol debate
//!
//! A debate run is a fixed sequence of six utterances, driven by the
//! [`debate::Phase`] state machine:
//!
//! - Openings: Pro, then Con (topic only)
//! - Rebuttals: Con rebuts the Pro opening, Pro rebuts the Con opening
//! - Final positions: Pro, then Con (full prior transcript)
//!
//! The order and count of turns is fully deterministic; only the text of
//! each utterance is delegated to the external generation capability.
//!
//! ## Personas as data
//!
//! Both advocates share identical invocation machinery and differ only by
//! a [`persona::Persona`] configuration record (name, stance, system prompt).

pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::{model::Model, topic::Topic};
pub use debate::{
    phase::{DirectiveKind, Phase, Turn},
    report::{IncompleteTranscript, Report, ReportSection},
    spec::{ConfigError, DebateSpec, PROTOCOL_TURNS},
    transcript::{OrderViolation, Speaker, Transcript, TranscriptEntry},
};
pub use persona::{Persona, Stance};
pub use prompt::DebatePrompt;
