//! CLI module for minipas
//!
//! This module provides the command-line interface for the front end.
//!
//! ```text
//! minipas [FILE] [-o|--output FILE] [--locale en|zh] [--indent N] [--lex]
//! ```
//!
//! ## Modules
//!
//! - `commands` - Command implementations
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
use std::path::PathBuf;
use std::process;

use clap::Parser;
use minipas_core::lang::messages::Locale;

use crate::config::FrontendConfig;

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

/// Syntax checker for the minipas teaching language
#[derive(Parser, Debug)]
#[command(name = "minipas")]
#[command(version = VERSION)]
#[command(about = "Syntax checker for the minipas teaching language", long_about = None)]
pub struct Cli {
    /// Source file to check
    #[arg(value_name = "FILE", default_value = "input.txt")]
    pub file: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Language of diagnostics and tree labels (en, zh)
    #[arg(long, value_name = "LOCALE", default_value = "en")]
    pub locale: Locale,

    /// Spaces per depth level in the tree dump
    #[arg(long = "indent", value_name = "N", default_value_t = 2)]
    pub indent: usize,

    // Debug/development flags
    /// Tokenize only (debug)
    #[arg(long = "lex")]
    pub lex: bool,
}

impl Cli {
    /// Front-end configuration selected by the flags.
    pub fn config(&self) -> FrontendConfig {
        FrontendConfig::new()
            .with_locale(self.locale)
            .with_indent_width(self.indent)
    }
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
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = cli.config();
    tracing::debug!(file = %cli.file.display(), locale = %config.locale, lex = cli.lex, "starting");

    // The output file is only created once the input has been read.
    let source = commands::read_source(&cli.file)?;
    let mut out = commands::open_output(cli.output.as_deref())?;
    if cli.lex {
        commands::lex_source(&source, &mut out)?;
        return Ok(ExitCode::SUCCESS);
    }
    let file_name = cli.file.display().to_string();
    commands::parse_source(&file_name, &source, &config, &mut out)
}
