//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::commands;
use guardrails::core::models::{Category, ChangeScope, Severity, Status};
use guardrails::output::OutputMode;

/// guardrails - catch regressions before they are committed
#[derive(Parser, Debug)]
#[command(
    name = "guardrails",
    version,
    about = "Check pending changes against known failures before commit",
    long_about = "Scan staged or unstaged changes against a registry of past\n\
                  failures and a set of prevention rules.\n\n\
                  Files that touch the scene of a known bug, or whose added\n\
                  lines match a rule pattern, are flagged before they land."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check changed files for potential regressions
    Check {
        /// Check unstaged changes instead of staged
        #[arg(short, long)]
        unstaged: bool,

        /// Check both staged and unstaged changes
        #[arg(short, long, conflicts_with = "unstaged")]
        all: bool,

        /// Exit with a non-zero code if issues are found (for pre-commit hooks)
        #[arg(long)]
        pre_commit: bool,

        /// Only output when issues are found
        #[arg(short, long)]
        quiet: bool,

        /// Path to the failure registry
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Path to the prevention rules directory
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Log a failure to the registry
    Log(LogArgs),

    /// List failures in the registry
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<Category>,

        /// Filter by status
        #[arg(short, long)]
        status: Option<Status>,

        /// Path to the failure registry
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Show one failure in full
    Show {
        /// Failure ID
        id: String,

        /// Path to the failure registry
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Mark a failure as resolved
    Resolve {
        /// Failure ID
        id: String,

        /// Path to the failure registry
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Mark a failure as deprecated
    Deprecate {
        /// Failure ID
        id: String,

        /// Path to the failure registry
        #[arg(short, long)]
        registry: Option<PathBuf>,
    },

    /// Show version
    Version,
}

/// Arguments for logging a failure
#[derive(Args, Debug)]
pub struct LogArgs {
    /// The error message to log
    #[arg(short = 'e', long)]
    pub error_message: String,

    /// Failure category (auto-detected from the error message when omitted)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Severity level
    #[arg(short, long)]
    pub severity: Option<Severity>,

    /// Root cause analysis
    #[arg(long)]
    pub root_cause: Option<String>,

    /// Glob patterns for the affected files
    #[arg(long, num_args = 1..)]
    pub affected_files: Vec<String>,

    /// Git SHA of the fixing commit
    #[arg(long)]
    pub fix_commit: Option<String>,

    /// Regex that would catch a reintroduction
    #[arg(long)]
    pub regression_pattern: Option<String>,

    /// Rule to prevent recurrence (suggested from category when omitted)
    #[arg(long)]
    pub prevention_rule: Option<String>,

    /// Path to the failure registry
    #[arg(short, long)]
    pub registry: Option<PathBuf>,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Check {
            unstaged,
            all,
            pre_commit,
            quiet,
            registry,
            rules,
        }) => {
            let scope = if all {
                ChangeScope::Both
            } else if unstaged {
                ChangeScope::Unstaged
            } else {
                ChangeScope::Staged
            };
            commands::check(scope, pre_commit, quiet, registry, rules, output_mode)
        },
        Some(Command::Log(args)) => commands::log_failure(args, output_mode),
        Some(Command::List {
            category,
            status,
            registry,
        }) => commands::list(category, status, registry, output_mode),
        Some(Command::Show { id, registry }) => commands::show(&id, registry, output_mode),
        Some(Command::Resolve { id, registry }) => {
            commands::set_status(&id, Status::Resolved, registry, output_mode)
        },
        Some(Command::Deprecate { id, registry }) => {
            commands::set_status(&id, Status::Deprecated, registry, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("guardrails v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("guardrails v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'guardrails --help' for usage");
                println!("Run 'guardrails check' to scan staged changes");
            }
            Ok(())
        },
    }
}
