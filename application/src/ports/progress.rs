//! Progress notification port
//!
//! Defines the interface for streaming debate progress to the caller.
//! Entries are delivered in protocol order as they are produced, which
//! gives the presentation layer a live view of the run without any
//! global event loop.

use debate_domain::{Phase, TranscriptEntry};

/// Callback for progress updates during a debate run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, progress bars, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when the controller enters a phase
    fn on_phase_start(&self, phase: &Phase);

    /// Called when a transcript entry is produced, in protocol order
    fn on_entry(&self, entry: &TranscriptEntry);

    /// Called when a phase completes successfully
    fn on_phase_complete(&self, phase: &Phase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase) {}
    fn on_entry(&self, _entry: &TranscriptEntry) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
