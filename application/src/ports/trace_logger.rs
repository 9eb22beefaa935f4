//! Port for structured interaction tracing.
//!
//! Defines the [`TraceLogger`] trait for recording run events (invocation
//! requests, transcript entries, aborts, report compilation) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the full
//! interaction trace in a machine-readable format (JSONL). Persistence is
//! owned by the outer layers; the core only emits events.

use serde_json::Value;

/// A structured trace event for logging.
pub struct TraceEvent {
    /// Event type identifier (e.g., "invocation", "transcript_entry").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TraceEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging trace events to a structured log.
///
/// Implementations write each event as a single record (e.g., one JSONL
/// line). The `log` method is intentionally synchronous and non-fallible
/// to avoid disrupting the run; logging failures are silently ignored.
pub trait TraceLogger: Send + Sync {
    /// Record a trace event.
    fn log(&self, event: TraceEvent);
}

/// No-op implementation for tests and when tracing is disabled.
pub struct NoTraceLogger;

impl TraceLogger for NoTraceLogger {
    fn log(&self, _event: TraceEvent) {}
}
