//! Phase state machine for a debate run

use crate::debate::transcript::Speaker;
use serde::{Deserialize, Serialize};

/// Phase of a debate run
///
/// The controller's sole position marker. Transitions depend only on the
/// current phase and call success, never on generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Run start - the Pro opening statement is produced here
    Start,
    /// Waiting for the Con opening statement
    AwaitingConOpening,
    /// Waiting for the Con rebuttal of the Pro opening
    AwaitingConRebuttal,
    /// Waiting for the Pro rebuttal of the Con opening
    AwaitingProRebuttal,
    /// Waiting for the Pro final position
    AwaitingProSummary,
    /// Waiting for the Con final position
    AwaitingConSummary,
    /// All utterances collected - the report is compiled here
    Reporting,
    /// Run complete
    Done,
}

/// What kind of directive a generation phase sends to its persona
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// Opening statement, built from the topic only
    Opening,
    /// Rebuttal, built from the topic plus the opponent's opening
    Rebuttal,
    /// Final position, built from the topic plus the full prior transcript
    Summary,
}

/// One generation step: which persona speaks and what it is asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub directive: DirectiveKind,
}

impl Phase {
    /// The six generation phases in protocol order
    pub const GENERATION_ORDER: [Phase; 6] = [
        Phase::Start,
        Phase::AwaitingConOpening,
        Phase::AwaitingConRebuttal,
        Phase::AwaitingProRebuttal,
        Phase::AwaitingProSummary,
        Phase::AwaitingConSummary,
    ];

    /// The generation step this phase performs, or `None` for the
    /// non-generating phases (`Reporting`, `Done`).
    pub fn turn(&self) -> Option<Turn> {
        let turn = |speaker, directive| Some(Turn { speaker, directive });
        match self {
            Phase::Start => turn(Speaker::Pro, DirectiveKind::Opening),
            Phase::AwaitingConOpening => turn(Speaker::Con, DirectiveKind::Opening),
            Phase::AwaitingConRebuttal => turn(Speaker::Con, DirectiveKind::Rebuttal),
            Phase::AwaitingProRebuttal => turn(Speaker::Pro, DirectiveKind::Rebuttal),
            Phase::AwaitingProSummary => turn(Speaker::Pro, DirectiveKind::Summary),
            Phase::AwaitingConSummary => turn(Speaker::Con, DirectiveKind::Summary),
            Phase::Reporting | Phase::Done => None,
        }
    }

    /// The phase entered after this one completes successfully
    pub fn next(&self) -> Phase {
        match self {
            Phase::Start => Phase::AwaitingConOpening,
            Phase::AwaitingConOpening => Phase::AwaitingConRebuttal,
            Phase::AwaitingConRebuttal => Phase::AwaitingProRebuttal,
            Phase::AwaitingProRebuttal => Phase::AwaitingProSummary,
            Phase::AwaitingProSummary => Phase::AwaitingConSummary,
            Phase::AwaitingConSummary => Phase::Reporting,
            Phase::Reporting | Phase::Done => Phase::Done,
        }
    }

    /// The fixed report section title for a generation phase
    pub fn section_title(&self) -> Option<&'static str> {
        match self {
            Phase::Start => Some("Opening Statement (Pro)"),
            Phase::AwaitingConOpening => Some("Opening Statement (Con)"),
            Phase::AwaitingConRebuttal => Some("Rebuttal (Con)"),
            Phase::AwaitingProRebuttal => Some("Rebuttal (Pro)"),
            Phase::AwaitingProSummary => Some("Final Position (Pro)"),
            Phase::AwaitingConSummary => Some("Final Position (Con)"),
            Phase::Reporting | Phase::Done => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::AwaitingConOpening => "awaiting_con_opening",
            Phase::AwaitingConRebuttal => "awaiting_con_rebuttal",
            Phase::AwaitingProRebuttal => "awaiting_pro_rebuttal",
            Phase::AwaitingProSummary => "awaiting_pro_summary",
            Phase::AwaitingConSummary => "awaiting_con_summary",
            Phase::Reporting => "reporting",
            Phase::Done => "done",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Start => "Opening (Pro)",
            Phase::AwaitingConOpening => "Opening (Con)",
            Phase::AwaitingConRebuttal => "Rebuttal (Con)",
            Phase::AwaitingProRebuttal => "Rebuttal (Pro)",
            Phase::AwaitingProSummary => "Final Position (Pro)",
            Phase::AwaitingConSummary => "Final Position (Con)",
            Phase::Reporting => "Compiling Report",
            Phase::Done => "Done",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
