//! CLI module for the `gidl` toolchain
//!
//! ## Commands
//!
//! - `check <FILES…>` - Parse files in parallel and report syntax errors
//! - `dump <FILE> [--json]` - Print the declaration model
//! - `fmt <FILES…> [--check] [--diff]` - Format GIDL source files
//! - `lex <FILE>` - Print the token stream (debug)
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

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::version::GIDL_VERSION;

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
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Front end for the GIDL interface definition language
#[derive(Parser, Debug)]
#[command(name = "gidl")]
#[command(version = GIDL_VERSION)]
#[command(about = "Front end for the GIDL interface definition language", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse files (in parallel) and report syntax errors
    Check {
        /// Source files to check
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
    },

    /// Print the declaration model of a file
    Dump {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Format GIDL source files
    Fmt {
        /// Files to format
        #[arg(value_name = "FILES", required = true)]
        files: Vec<PathBuf>,
        /// Check formatting without modifying files
        #[arg(long)]
        check: bool,
        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,
    },

    /// Tokenize a file and print the tokens (debug)
    Lex {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
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
            if exit_code != ExitCode::SUCCESS {
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Check { files } => commands::check_files(&files),
        Command::Dump { file, json } => commands::dump_file(&file, json),
        Command::Fmt { files, check, diff } => commands::format_files(&files, check, diff),
        Command::Lex { file } => commands::lex_file(&file),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check_multiple_files() {
        let cli = Cli::try_parse_from(["gidl", "check", "a.gidl", "b.gidl"]).unwrap();
        if let Command::Check { files } = cli.command {
            assert_eq!(files, vec![PathBuf::from("a.gidl"), PathBuf::from("b.gidl")]);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["gidl", "check"]).is_err());
    }

    #[test]
    fn test_cli_parse_dump_json() {
        let cli = Cli::try_parse_from(["gidl", "dump", "a.gidl", "--json"]).unwrap();
        assert!(matches!(cli.command, Command::Dump { json: true, .. }));
    }

    #[test]
    fn test_cli_parse_fmt() {
        let cli = Cli::try_parse_from(["gidl", "fmt", "a.gidl", "--check"]).unwrap();
        if let Command::Fmt { check, diff, .. } = cli.command {
            assert!(check);
            assert!(!diff);
        } else {
            panic!("Expected Fmt command");
        }
    }

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["gidl", "lex", "a.gidl"]).unwrap();
        assert!(matches!(cli.command, Command::Lex { .. }));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
