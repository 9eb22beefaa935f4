//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full conversational transcript plus the report
    Full,
    /// Only the structured report
    Report,
    /// JSON output (transcript and report)
    Json,
}

/// CLI arguments for debate-club
#[derive(Parser, Debug)]
#[command(name = "debate-club")]
#[command(author, version, about = "AI Debate Club - two advocates argue a motion under a fixed protocol")]
#[command(long_about = r#"
Debate Club pits two AI advocate personas against each other on a motion.

The run follows a fixed six-turn protocol:
1. Opening statements: Pro, then Con (motion only)
2. Rebuttals: Con rebuts the Pro opening, Pro rebuts the Con opening
3. Final positions: Pro, then Con (full debate so far)

The transcript is then compiled into a six-section report.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./debate.toml       Project-level config
3. ~/.config/debate-club/config.toml   Global config

Example:
  debate-club "Social media platforms should be regulated as public utilities"
  debate-club --model gpt-4-turbo "AI development should be paused"
  debate-club --output full "Remote work is better for productivity"
"#)]
pub struct Cli {
    /// The debate topic/motion
    pub topic: Option<String>,

    /// Model to use for both advocate personas
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Maximum number of turns (must cover the fixed six-turn protocol)
    #[arg(long, value_name = "N")]
    pub max_turns: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "report")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Do not write the per-run report and trace files
    #[arg(long)]
    pub no_save: bool,

    /// Directory for per-run report and trace files
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
