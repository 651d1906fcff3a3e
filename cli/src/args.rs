//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for concord
#[derive(Parser, Debug)]
#[command(name = "concord")]
#[command(author, version, about = "Multi-generator consensus for dependency updates")]
#[command(long_about = r#"
Concord runs a small panel of specialist generators against a task, then a
judge selects the best suggestion. For dependency updates it extracts a
structured plan from the winning suggestion and aggregates plans across a
whole batch of packages into one deduplicated report.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./concord.toml      Project-level config
3. ~/.config/concord/config.toml   Global config

Example:
  concord round "Add a lint environment to pyproject.toml"
  concord round --show-all "Migrate the build backend to hatchling"
  concord batch updates.json --concurrency 8
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Append judged rounds to a JSONL log file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_rounds: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run one consensus round on a free-form task
    Round {
        /// The task to run the round on
        task: String,

        /// JSON file with extra context merged into every prompt
        #[arg(long, value_name = "PATH")]
        context: Option<PathBuf>,

        /// Show every generator's suggestion, not just the winner
        #[arg(long)]
        show_all: bool,
    },

    /// Analyze a batch of dependency updates and aggregate the plans
    Batch {
        /// JSON file with the updates: [{"package", "old_version", "new_version"}, ...]
        items: PathBuf,

        /// Maximum number of concurrently analyzed packages
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,
    },
}
