//! CLI entrypoint for concord
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod args;
mod output;
mod progress;

use anyhow::{Context, Result, bail};
use args::{Cli, Command, OutputFormat};
use clap::Parser;
use concord_application::{
    BatchProgress, NoProgress, NoRoundLogger, RoundLogger, RunBatchInput, RunBatchUseCase,
    RunRoundInput, RunRoundUseCase, TextCompletion,
};
use concord_domain::{TaskContext, UpdateItem};
use concord_infrastructure::{ConfigLoader, FileConfig, JsonlRoundLogger, ProviderKind,
    ScriptedCompletion};
use output::ConsoleFormatter;
use progress::ConsoleProgress;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
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

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };

    let logger: Arc<dyn RoundLogger> = match &cli.log_rounds {
        Some(path) => match JsonlRoundLogger::new(path) {
            Some(logger) => {
                info!("Appending judged rounds to {}", logger.path().display());
                Arc::new(logger)
            }
            None => bail!("could not open round log at {}", path.display()),
        },
        None => Arc::new(NoRoundLogger),
    };

    // === Dependency Injection ===
    match config.provider.kind {
        ProviderKind::Scripted => {
            info!("Using scripted offline provider");
            run(Arc::new(ScriptedCompletion::new()), cli, &config, logger).await
        }
        ProviderKind::OpenAi => {
            #[cfg(feature = "openai")]
            {
                let provider = concord_infrastructure::OpenAiCompletion::from_config(
                    &config.provider,
                )
                .map_err(|e| anyhow::anyhow!("provider setup failed: {e}"))?;
                info!(model = %config.provider.model, "Using OpenAI-compatible provider");
                run(Arc::new(provider), cli, &config, logger).await
            }
            #[cfg(not(feature = "openai"))]
            bail!("this build does not include the `openai` feature; use the scripted provider")
        }
    }
}

async fn run<G: TextCompletion + 'static>(
    gateway: Arc<G>,
    cli: Cli,
    config: &FileConfig,
    logger: Arc<dyn RoundLogger>,
) -> Result<()> {
    match cli.command {
        Command::Round {
            task,
            context,
            show_all,
        } => {
            let context = match context {
                Some(path) => read_context(&path)?,
                None => TaskContext::new(),
            };

            let use_case = RunRoundUseCase::new(gateway).with_logger(logger);
            let result = use_case
                .execute(RunRoundInput::new(task).with_context(context))
                .await;

            let rendered = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_round(&result, show_all),
                OutputFormat::Json => ConsoleFormatter::format_round_json(&result),
            };
            println!("{rendered}");

            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Batch { items, concurrency } => {
            let items = read_items(&items)?;
            if items.is_empty() {
                bail!("the items file contains no updates");
            }

            let concurrency = concurrency.unwrap_or(config.batch.concurrency);
            let use_case = RunBatchUseCase::new(gateway)
                .with_concurrency(concurrency)
                .with_logger(logger);

            // Ctrl-C abandons in-flight rounds but keeps finished results
            let cancel = CancellationToken::new();
            let signal_cancel = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    warn!("Interrupt received, collecting completed items");
                    signal_cancel.cancel();
                }
            });

            let progress: Box<dyn BatchProgress> = if cli.quiet {
                Box::new(NoProgress)
            } else {
                Box::new(ConsoleProgress::new())
            };

            let report = use_case
                .execute_with(RunBatchInput::new(items), progress.as_ref(), cancel)
                .await;

            let rendered = match cli.output {
                OutputFormat::Text => ConsoleFormatter::format_report(&report),
                OutputFormat::Json => ConsoleFormatter::format_report_json(&report),
            };
            println!("{rendered}");

            if report.all_failed() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn read_context(path: &std::path::Path) -> Result<TaskContext> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read context file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON object", path.display()))
}

fn read_items(path: &std::path::Path) -> Result<Vec<UpdateItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read items file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of updates", path.display()))
}
