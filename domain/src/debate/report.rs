//! Report compiler - projects a completed transcript into fixed sections

use crate::core::topic::Topic;
use crate::debate::phase::Phase;
use crate::debate::transcript::{Speaker, Transcript};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when compilation is attempted on a transcript that does not
/// hold exactly the six protocol entries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("report requires a completed six-entry transcript, got {actual} entries")]
pub struct IncompleteTranscript {
    pub actual: usize,
}

/// One named section of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub speaker: Speaker,
    /// Utterance text, copied verbatim from the transcript entry
    pub text: String,
}

/// Structured debate report (Value Object)
///
/// A derived, read-only projection of a completed transcript. It has no
/// independent lifecycle: compiling the same transcript and topic twice
/// yields structurally identical reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub topic: String,
    pub sections: Vec<ReportSection>,
}

impl Report {
    /// Compile a completed transcript into the six fixed sections
    ///
    /// Section order is literal (openings, rebuttals, final positions) and
    /// never depends on transcript content.
    pub fn compile(transcript: &Transcript, topic: &Topic) -> Result<Report, IncompleteTranscript> {
        if !transcript.is_complete() {
            return Err(IncompleteTranscript {
                actual: transcript.len(),
            });
        }

        let sections = transcript
            .snapshot()
            .iter()
            .zip(Phase::GENERATION_ORDER)
            .map(|(entry, phase)| ReportSection {
                // section_title() is Some for every generation phase
                title: phase.section_title().unwrap_or_default().to_string(),
                speaker: entry.speaker,
                text: entry.text.clone(),
            })
            .collect();

        Ok(Report {
            topic: topic.content().to_string(),
            sections,
        })
    }

    /// Find a section by its fixed title
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Render the report as a markdown document
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## Debate Report: {}\n\n", self.topic);
        for section in &self.sections {
            out.push_str(&format!("### {}\n\n{}\n\n", section.title, section.text));
        }
        out.push_str("---\n*Debate completed by AI Debate Club*\n");
        out
    }
}
