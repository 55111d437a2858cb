//! CLI module for the Javelin frontend
//!
//! ## Commands
//!
//! - `lex <file>` - Tokenize a source file and print the token stream
//! - `parse <file>` - Parse a source file and print the AST
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits. Compile
//! errors are rendered through miette's fancy report before exiting.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use javelin_syntax::diagnostics::CompileError;
use javelin_syntax::{lexer, parser};

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

/// The Javelin programming language frontend
#[derive(Parser, Debug)]
#[command(name = "javelin")]
#[command(version = VERSION)]
#[command(about = "The Javelin programming language frontend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a source file and print the token stream
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Parse a source file and print the AST
    Parse {
        /// Source file to parse
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
    match cli.command {
        Command::Lex { file } => lex_file(&file),
        Command::Parse { file } => parse_file(&file),
    }
}

#[tracing::instrument(skip_all, fields(file = %path.display()))]
fn lex_file(path: &Path) -> CliResult<ExitCode> {
    let text = read_source(path)?;
    let uri = path.to_string_lossy();
    let tokens = lexer::lex(&uri, &text).map_err(report)?;
    for token in &tokens {
        println!("{token}");
    }
    Ok(ExitCode::SUCCESS)
}

#[tracing::instrument(skip_all, fields(file = %path.display()))]
fn parse_file(path: &Path) -> CliResult<ExitCode> {
    let text = read_source(path)?;
    let uri = path.to_string_lossy();
    let program = parser::parse(&uri, &text).map_err(report)?;
    println!("{program}");
    Ok(ExitCode::SUCCESS)
}

fn read_source(path: &Path) -> CliResult<String> {
    fs::read_to_string(path)
        .map_err(|e| CliError::failure(format!("Error reading {}: {}", path.display(), e)))
}

/// Render a compile error through miette's fancy report.
fn report(error: CompileError) -> CliError {
    let report = miette::Report::new(error);
    CliError::failure(format!("{report:?}"))
}

// ============================================================================
// Tests
// ============================================================================
