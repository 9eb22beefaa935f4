//! Progress reporting for debate execution

use colored::Colorize;
use debate_application::ports::progress::ProgressNotifier;
use debate_domain::{Phase, TranscriptEntry};
use indicatif::{ProgressBar, ProgressStyle};

/// Reports progress during a debate with a turn-by-turn progress bar
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(Phase::GENERATION_ORDER.len() as u64);
        bar.set_style(Self::bar_style());
        bar.set_prefix("Debate");
        Self { bar }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &Phase) {
        self.bar.set_message(format!("{}...", phase.display_name()));
    }

    fn on_entry(&self, _entry: &TranscriptEntry) {
        self.bar.inc(1);
    }

    fn on_phase_complete(&self, phase: &Phase) {
        if *phase == Phase::Reporting {
            self.bar
                .finish_with_message(format!("{}", "debate complete!".green()));
        }
    }
}

/// Simple text-based progress that streams each utterance as it lands
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &Phase) {
        println!("{} {}", "->".cyan(), phase.display_name().bold());
    }

    fn on_entry(&self, entry: &TranscriptEntry) {
        println!(
            "  {} {} ({} chars)",
            "v".green(),
            entry.speaker,
            entry.text.len()
        );
    }

    fn on_phase_complete(&self, _phase: &Phase) {}
}
