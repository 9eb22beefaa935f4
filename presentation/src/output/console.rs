//! Console output formatter for debate results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use debate_application::DebateOutcome;
use debate_domain::{Report, Speaker};

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full conversational transcript plus the report
    pub fn format(outcome: &DebateOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Debate Club"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Motion:".cyan().bold(),
            outcome.report.topic
        ));

        output.push_str(&Self::section_header("Debate Transcript"));
        for entry in outcome.transcript.snapshot() {
            let heading = format!("── {} ──", entry.heading());
            let heading = match entry.speaker {
                Speaker::Pro => heading.green().bold(),
                Speaker::Con => heading.yellow().bold(),
            };
            output.push_str(&format!("\n{}\n{}\n", heading, entry.text));
        }

        output.push_str(&Self::section_header("Debate Report"));
        output.push('\n');
        output.push_str(&outcome.report.to_markdown());

        output.push_str(&Self::footer());
        output
    }

    /// Format only the structured report, as plain markdown
    ///
    /// Plain so the same text can be written to the per-run report file.
    pub fn format_report(report: &Report) -> String {
        report.to_markdown()
    }

    /// Format as JSON
    pub fn format_json(outcome: &DebateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DebateOutcome) -> String {
        Self::format(outcome)
    }

    fn format_report(&self, report: &Report) -> String {
        Self::format_report(report)
    }

    fn format_json(&self, outcome: &DebateOutcome) -> String {
        Self::format_json(outcome)
    }
}
