//! Transcript accumulator - the append-only record of a debate run

use crate::debate::phase::Phase;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which persona produced an utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speaker {
    Pro,
    Con,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::Pro => "Pro",
            Speaker::Con => "Con",
        }
    }

    /// The other side of the debate
    pub fn opponent(&self) -> Speaker {
        match self {
            Speaker::Pro => Speaker::Con,
            Speaker::Con => Speaker::Pro,
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One utterance in the debate (Value Object)
///
/// Immutable once created. The speaker and phase labels are assigned by
/// the protocol, never inferred from the generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub phase: Phase,
    pub sequence_index: usize,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(speaker: Speaker, phase: Phase, sequence_index: usize, text: impl Into<String>) -> Self {
        Self {
            speaker,
            phase,
            sequence_index,
            text: text.into(),
        }
    }

    /// Display heading for this entry, matching its report section title
    pub fn heading(&self) -> &'static str {
        self.phase.section_title().unwrap_or("Utterance")
    }
}

/// Violations of the fixed protocol order
///
/// These indicate a defect in the controller, not a recoverable runtime
/// condition, and are never silently corrected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderViolation {
    #[error("transcript already holds all {len} protocol entries")]
    AlreadyComplete { len: usize },

    #[error("sequence index {got} does not follow the previous entry (expected {expected})")]
    SequenceGap { expected: usize, got: usize },

    #[error(
        "turn {index} expects {expected_speaker} in phase {expected_phase}, \
         got {got_speaker} in phase {got_phase}"
    )]
    TurnMismatch {
        index: usize,
        expected_speaker: Speaker,
        expected_phase: Phase,
        got_speaker: Speaker,
        got_phase: Phase,
    },
}

/// Ordered, append-only log of debate utterances
///
/// Every append is checked against the protocol table: the entry must
/// carry the next sequence index and the speaker/phase pair the protocol
/// expects at that position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next utterance, enforcing the protocol order
    pub fn append(&mut self, entry: TranscriptEntry) -> Result<(), OrderViolation> {
        let index = self.entries.len();
        let expected_phase = *Phase::GENERATION_ORDER
            .get(index)
            .ok_or(OrderViolation::AlreadyComplete { len: index })?;

        if entry.sequence_index != index {
            return Err(OrderViolation::SequenceGap {
                expected: index,
                got: entry.sequence_index,
            });
        }

        // turn() is Some for every generation phase
        let expected_speaker = expected_phase
            .turn()
            .map(|t| t.speaker)
            .unwrap_or(Speaker::Pro);
        if entry.speaker != expected_speaker || entry.phase != expected_phase {
            return Err(OrderViolation::TurnMismatch {
                index,
                expected_speaker,
                expected_phase,
                got_speaker: entry.speaker,
                got_phase: entry.phase,
            });
        }

        self.entries.push(entry);
        Ok(())
    }

    /// Read-only view of the entries appended so far
    pub fn snapshot(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once all six protocol entries have been appended
    pub fn is_complete(&self) -> bool {
        self.entries.len() == Phase::GENERATION_ORDER.len()
    }

    pub fn entry(&self, index: usize) -> Option<&TranscriptEntry> {
        self.entries.get(index)
    }

    /// Render the entries so far as labeled turns, for use as prior
    /// context in later directives.
    pub fn render_history(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(&format!("--- {} ---\n{}\n\n", entry.heading(), entry.text));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_for(index: usize, text: &str) -> TranscriptEntry {
        let phase = Phase::GENERATION_ORDER[index];
        let speaker = phase.turn().unwrap().speaker;
        TranscriptEntry::new(speaker, phase, index, text)
    }

    #[test]
    fn test_append_in_protocol_order() {
        let mut transcript = Transcript::new();
        for i in 0..6 {
            transcript.append(entry_for(i, "text")).unwrap();
        }
        assert!(transcript.is_complete());
        let indices: Vec<usize> = transcript.snapshot().iter().map(|e| e.sequence_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_append_beyond_protocol_rejected() {
        let mut transcript = Transcript::new();
        for i in 0..6 {
            transcript.append(entry_for(i, "text")).unwrap();
        }
        let err = transcript
            .append(TranscriptEntry::new(Speaker::Pro, Phase::Start, 6, "extra"))
            .unwrap_err();
        assert_eq!(err, OrderViolation::AlreadyComplete { len: 6 });
    }

    #[test]
    fn test_sequence_gap_rejected() {
        let mut transcript = Transcript::new();
        transcript.append(entry_for(0, "opening")).unwrap();

        let mut skipped = entry_for(1, "next");
        skipped.sequence_index = 2;
        let err = transcript.append(skipped).unwrap_err();
        assert_eq!(err, OrderViolation::SequenceGap { expected: 1, got: 2 });
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_wrong_speaker_rejected() {
        let mut transcript = Transcript::new();
        // Turn 0 belongs to Pro in Start
        let err = transcript
            .append(TranscriptEntry::new(Speaker::Con, Phase::Start, 0, "hijack"))
            .unwrap_err();
        assert!(matches!(err, OrderViolation::TurnMismatch { index: 0, .. }));
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_wrong_phase_rejected() {
        let mut transcript = Transcript::new();
        transcript.append(entry_for(0, "opening")).unwrap();
        let err = transcript
            .append(TranscriptEntry::new(
                Speaker::Con,
                Phase::AwaitingConRebuttal,
                1,
                "skipped ahead",
            ))
            .unwrap_err();
        assert!(matches!(err, OrderViolation::TurnMismatch { index: 1, .. }));
    }

    #[test]
    fn test_render_history_labels_turns() {
        let mut transcript = Transcript::new();
        transcript.append(entry_for(0, "pro opening")).unwrap();
        transcript.append(entry_for(1, "con opening")).unwrap();

        let history = transcript.render_history();
        assert!(history.contains("--- Opening Statement (Pro) ---\npro opening"));
        assert!(history.contains("--- Opening Statement (Con) ---\ncon opening"));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Speaker::Pro.opponent(), Speaker::Con);
        assert_eq!(Speaker::Con.opponent(), Speaker::Pro);
    }
}
