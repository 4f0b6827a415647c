//! CLI module for the deprecation catalog tooling
//!
//! This module provides the command-line interface over the warning catalog.
//!
//! ## Commands
//!
//! - `list [--format table|json]` - Enumerate the catalog
//! - `show <KEY>` - Show the metadata and message for one key
//! - `check <KEY>...` - Validate keys against the catalog
//!
//! Running `deprecations <KEY>` with no subcommand behaves like `show <KEY>`.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Deprecation warning catalog query tools
#[derive(Parser, Debug)]
#[command(name = "deprecations")]
#[command(version = VERSION)]
#[command(about = "Query the deprecation warning catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Key to look up (default action when no subcommand given)
    #[arg(value_name = "KEY")]
    pub key: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every warning in the catalog
    List {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the metadata and message for one key
    Show {
        /// Full warning key, prefix included
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Validate keys against the catalog
    Check {
        /// Keys to validate (e.g. extracted from an old config)
        #[arg(value_name = "KEY", required = true, num_args = 1..)]
        keys: Vec<String>,
    },
}

/// Rendering mode for `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-oriented columns
    Table,
    /// Machine-readable JSON, messages included
    Json,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // Bare `deprecations <KEY>` is a shorthand for `show`
    if let Some(key) = cli.key {
        return commands::show_warning(&key);
    }

    match cli.command {
        Some(Command::List { format }) => commands::list_warnings(format),
        Some(Command::Show { key }) => commands::show_warning(&key),
        Some(Command::Check { keys }) => commands::check_keys(&keys),
        None => Err(CliError::failure(
            "No key or command given. Try `deprecations --help`.",
        )),
    }
}
