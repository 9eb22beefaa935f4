//! Output formatter trait

use debate_application::DebateOutcome;
use debate_domain::Report;

/// Trait for formatting debate results
pub trait OutputFormatter {
    /// Format the full conversational transcript plus the report
    fn format(&self, outcome: &DebateOutcome) -> String;

    /// Format only the structured report
    fn format_report(&self, report: &Report) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DebateOutcome) -> String;
}
