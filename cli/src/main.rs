//! CLI entrypoint for Debate Club
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use debate_application::{RunDebateInput, RunDebateUseCase, TraceLogger};
use debate_domain::{DebateSpec, Model};
use debate_infrastructure::{ConfigLoader, JsonlTraceLogger, OpenAiLlmGateway};
use debate_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Debate Club");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    let topic = match cli.topic {
        Some(t) => t,
        None => bail!("A debate topic is required. See --help for examples."),
    };

    let model: Model = cli
        .model
        .or(config.debate.model)
        .unwrap_or_else(|| Model::default().to_string())
        .parse()
        .unwrap();
    let max_turns = cli.max_turns.unwrap_or(config.debate.max_turns);

    // Validated before any generation call is made
    let spec = DebateSpec::new(topic, max_turns, model)?;

    // === Dependency Injection ===
    // Create infrastructure adapter (generation gateway)
    let api_key = match std::env::var("OPENAI_API_KEY") {
        Ok(key) => key,
        Err(_) => bail!("OPENAI_API_KEY is not set. Export it before running a debate."),
    };
    let gateway = Arc::new(OpenAiLlmGateway::with_base_url(
        api_key,
        config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?);

    // Per-run artifacts, keyed by a run timestamp
    let log_dir = cli.log_dir.unwrap_or(config.output.log_dir);
    let save = config.output.save && !cli.no_save;
    let run_stamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();

    let trace_path = log_dir.join(format!("debate_trace_{run_stamp}.jsonl"));
    let trace_logger: Option<Arc<dyn TraceLogger>> = if save {
        JsonlTraceLogger::new(&trace_path).map(|l| Arc::new(l) as Arc<dyn TraceLogger>)
    } else {
        None
    };

    let mut use_case = RunDebateUseCase::new(gateway);
    if let Some(logger) = trace_logger {
        use_case = use_case.with_trace_logger(logger);
    }

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                    AI Debate Club                          |");
        println!("+============================================================+");
        println!();
        println!("Motion: {}", spec.topic());
        println!("Model:  {}", spec.model());
        println!();
    }

    // Cooperative cancellation on Ctrl-C, checked between turns
    let cancel = tokio_util::sync::CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    // Execute with or without progress reporting
    let input = RunDebateInput::new(spec).with_cancellation(cancel);
    let outcome = if cli.quiet {
        use_case.execute(input).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(err) => {
            if let Some(transcript) = err.transcript() {
                info!("{} entries completed before the run ended", transcript.len());
            }
            return Err(err.into());
        }
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Report => ConsoleFormatter::format_report(&outcome.report),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    // Persist the report next to the trace
    if save {
        std::fs::create_dir_all(&log_dir)?;
        let report_path = log_dir.join(format!("debate_report_{run_stamp}.md"));
        std::fs::write(&report_path, outcome.report.to_markdown())?;
        if !cli.quiet {
            println!("Report saved to {}", report_path.display());
            println!("Trace saved to  {}", trace_path.display());
        }
    }

    Ok(())
}
