//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! Reports go to a caller-supplied sink so the same code serves stdout, an output file and tests.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use miette::{NamedSource, Report};
use minipas_core::lang::messages::{self, Verdict};
use minipas_syntax::diagnostics::SyntaxError;
use minipas_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};
use crate::config::FrontendConfig;

/// Maximum source file size (16 MB)
///
/// Files larger than this are rejected before reading; the front end is meant for small
/// teaching programs.
pub const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Read a source file with size validation.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MB)
pub fn read_source(path: &Path) -> CliResult<String> {
    let file_path = path.display();
    // Check file size before reading
    let metadata =
        fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Open the report sink: the given file (created or truncated), or stdout.
pub fn open_output(path: Option<&Path>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = fs::File::create(path).map_err(|e| {
                CliError::failure(format!("Cannot open output file '{}': {}", path.display(), e))
            })?;
            Ok(Box::new(io::BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_failed(e: io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {}", e))
}

/// Tokenize and print one token per line as `line:col kind 'text'`.
pub fn lex_source(source: &str, out: &mut dyn Write) -> CliResult<()> {
    for token in lexer::lex(source) {
        writeln!(out, "{}", token).map_err(write_failed)?;
    }
    out.flush().map_err(write_failed)
}

/// Parse `source` and write the report: the verdict followed by the tree dump on success, the
/// error line followed by the verdict on failure.
///
/// Returns the syntax error, if any, so the caller can render it with source context.
pub fn check_source(source: &str, config: &FrontendConfig, out: &mut dyn Write) -> CliResult<Option<SyntaxError>> {
    let locale = config.locale;
    let outcome = parser::parse_with_locale(source, locale);

    let error = match outcome {
        Ok(tree) => {
            writeln!(out, "{}", messages::verdict(Verdict::Accepted, locale)).map_err(write_failed)?;
            write!(out, "{}", tree.dump_with(config.dump_options())).map_err(write_failed)?;
            None
        }
        Err(err) => {
            writeln!(out, "{}", err.report(locale)).map_err(write_failed)?;
            writeln!(out, "{}", messages::verdict(Verdict::Rejected, locale)).map_err(write_failed)?;
            Some(err)
        }
    };
    out.flush().map_err(write_failed)?;
    Ok(error)
}

/// Wrap a syntax error with its source so miette can render the offending line.
pub fn diagnostic_report(file_name: &str, source: &str, error: &SyntaxError) -> Report {
    // Spans index the text the lexer scanned, which has no byte-order mark.
    let scanned = lexer::Lexer::new(source).source();
    Report::new(error.clone()).with_source_code(NamedSource::new(file_name, scanned.to_string()))
}

/// Parse already-read source and write the report.
///
/// A syntax error is not a CLI error: the report is still written, the diagnostic is rendered
/// to stderr, and the exit code is 1.
pub fn parse_source(file_name: &str, source: &str, config: &FrontendConfig, out: &mut dyn Write) -> CliResult<ExitCode> {
    match check_source(source, config, out)? {
        None => Ok(ExitCode::SUCCESS),
        Some(error) => {
            eprintln!("{:?}", diagnostic_report(file_name, source, &error));
            Ok(ExitCode::FAILURE)
        }
    }
}
