//! CLI module for the trax rewriter
//!
//! This module provides the command-line interface.
//!
//! ## Commands
//!
//! - `build <path>...` - Transform `.ts` files (directories are scanned recursively)
//! - `emit <file>` - Print the transformed unit
//! - `inspect <file>` - Print the extracted declaration list
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
pub mod config;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;

use config::BuildConfig;

/// Process exit status of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed command.
///
/// [`run`] prints `message` to stderr unless it is empty, which marks a failure whose details
/// were already reported file by file.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    /// Failure with nothing left to print.
    pub fn reported() -> Self {
        Self::failure(String::new())
    }
}

pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source-to-source rewriter for TypeScript `@Data` classes
#[derive(Parser, Debug)]
#[command(name = "trax")]
#[command(version = VERSION)]
#[command(about = "Rewrite TypeScript @Data classes into reactive runtime classes", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Transform files and write the generated units
    Build {
        /// Files or directories to transform
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
        /// Output directory (default: next to each input)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
        /// Suffix of generated files written next to their input
        #[arg(long, value_name = "SUFFIX", default_value = config::DEFAULT_SUFFIX)]
        suffix: String,
        /// Check generated files are up to date without writing them
        #[arg(long)]
        check: bool,
    },

    /// Print the transformed unit to stdout
    Emit {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the extracted declaration list
    Inspect {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

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
        Command::Build {
            paths,
            out_dir,
            suffix,
            check,
        } => {
            let mut config = BuildConfig::new().with_suffix(suffix).with_check(check);
            if let Some(dir) = out_dir {
                config = config.with_out_dir(dir);
            }
            commands::build_paths(&paths, &config)
        }
        Command::Emit { file } => commands::emit_file(&file),
        Command::Inspect { file, json } => commands::inspect_file(&file, json),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::try_parse_from(["trax", "build", "src/", "model.ts"]).unwrap();
        if let Command::Build {
            paths,
            out_dir,
            suffix,
            check,
        } = cli.command
        {
            assert_eq!(paths.len(), 2);
            assert!(out_dir.is_none());
            assert_eq!(suffix, ".trax.ts");
            assert!(!check);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_parse_build_flags() {
        let cli = Cli::try_parse_from([
            "trax", "build", "src", "--out-dir", "dist", "--suffix", ".gen.ts", "--check",
        ])
        .unwrap();
        if let Command::Build {
            out_dir, suffix, check, ..
        } = cli.command
        {
            assert_eq!(out_dir, Some(PathBuf::from("dist")));
            assert_eq!(suffix, ".gen.ts");
            assert!(check);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_cli_build_requires_path() {
        assert!(Cli::try_parse_from(["trax", "build"]).is_err());
    }

    #[test]
    fn test_cli_errors() {
        let err = CliError::failure("No .ts files found");
        assert_eq!(err.to_string(), "No .ts files found");
        assert_eq!(err.exit_code, ExitCode::FAILURE);

        let err = CliError::reported();
        assert!(err.message.is_empty());
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_cli_parse_emit() {
        let cli = Cli::try_parse_from(["trax", "emit", "model.ts"]).unwrap();
        assert!(matches!(cli.command, Command::Emit { .. }));
    }

    #[test]
    fn test_cli_parse_inspect_json() {
        let cli = Cli::try_parse_from(["trax", "inspect", "model.ts", "--json"]).unwrap();
        if let Command::Inspect { json, .. } = cli.command {
            assert!(json);
        } else {
            panic!("Expected Inspect command");
        }
    }
}
