//! Debate protocol domain
//!
//! This module contains the core concepts of the fixed six-turn debate
//! protocol.
//!
//! # Core Concepts
//!
//! ## Phase state machine
//! A debate run moves through a fixed sequence of phases. Each generation
//! phase names exactly one speaker and one directive kind; the order never
//! depends on generated content.
//!
//! ## Transcript
//! The append-only record of utterances. It is the single source of truth
//! for both the conversational view and the compiled report, and it
//! enforces the protocol order on every append.
//!
//! ## Report
//! A read-only projection of a completed transcript into six fixed,
//! named sections. Compiling is pure: the same transcript and topic
//! always produce the same report.

pub mod phase;
pub mod report;
pub mod spec;
pub mod transcript;

// Re-export main types
pub use phase::{DirectiveKind, Phase, Turn};
pub use report::{IncompleteTranscript, Report, ReportSection};
pub use spec::{ConfigError, DebateSpec, PROTOCOL_TURNS};
pub use transcript::{OrderViolation, Speaker, Transcript, TranscriptEntry};
