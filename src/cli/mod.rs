//! Command-line front end of `fidlgen`.
//!
//! ## Usage
//!
//! - `fidlgen -i <file>` - Generate sender (client) bindings to stdout
//! - `fidlgen -i <file> --receiver -o <out.rs>` - Generate receiver (server) bindings into a file
//! - `fidlgen -i <file> --debug [--debug-format json]` - Also dump the parsed AST to stderr
//! - `fidlgen -i <file> --lex` - Dump the token stream instead of generating
//!
//! `commands` holds one function per action. Each returns a [`CliResult`]; [`run`] is the only
//! place that prints an error and picks the process exit status.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use thiserror::Error;

use crate::backend::{GenerationMode, GeneratorConfig};
use crate::version::FIDLGEN_VERSION;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// A failed command: the text shown to the user and the status to exit with.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// Fully rendered, including any diagnostic snippet.
    pub message: String,
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        CliError {
            message: message.into(),
            exit_code,
        }
    }

    /// Shorthand for an error exiting with [`ExitCode::FAILURE`].
    pub fn failure(message: impl Into<String>) -> Self {
        CliError::new(message, ExitCode::FAILURE)
    }
}

pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Arguments
// ============================================================================

/// Generate Rust D-Bus bindings from FIDL interface definitions
#[derive(Parser, Debug)]
#[command(name = "fidlgen")]
#[command(version = FIDLGEN_VERSION)]
#[command(about = "Generate Rust D-Bus bindings from FIDL interface definitions", long_about = None)]
pub struct Cli {
    /// FIDL file to read
    #[arg(short = 'i', long = "in", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// File to write the generated code to (default: stdout)
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Wrap the generated code in `pub mod <NAME>`
    #[arg(short = 'p', long = "package", value_name = "NAME")]
    pub package: Option<String>,

    /// Generate client-side bindings (default)
    #[arg(long, visible_alias = "client", conflicts_with = "receiver")]
    pub sender: bool,

    /// Generate server-side bindings
    #[arg(long, visible_alias = "server")]
    pub receiver: bool,

    /// Omit serde derives on generated structs
    #[arg(long = "no-serde")]
    pub no_serde: bool,

    // Debug/development flags
    /// Print the parsed AST to stderr
    #[arg(long)]
    pub debug: bool,

    /// Format for --debug output
    #[arg(long = "debug-format", value_enum, default_value_t = DebugFormat::Tree)]
    pub debug_format: DebugFormat,

    /// Tokenize only and print the tokens (debug)
    #[arg(long)]
    pub lex: bool,
}

/// Output format for `--debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DebugFormat {
    /// Indented outline
    Tree,
    /// Pretty-printed JSON
    Json,
}

impl Cli {
    /// Generator settings selected by the flags.
    pub fn generator_config(&self) -> GeneratorConfig {
        let mode = if self.receiver {
            GenerationMode::Receiver
        } else {
            GenerationMode::Sender
        };
        let mut config = GeneratorConfig::new().with_mode(mode).with_serde(!self.no_serde);
        if let Some(package) = &self.package {
            config = config.with_module(package.as_str());
        }
        config
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Parse the arguments, run the selected action and exit with its status.
pub fn run() {
    let status = match execute(Cli::parse()) {
        Ok(status) => status,
        Err(err) => {
            if !err.message.is_empty() {
                eprintln!("{err}");
            }
            err.exit_code
        }
    };
    if status != ExitCode::SUCCESS {
        std::process::exit(status.0);
    }
}

/// Dispatch on the parsed flags.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let Some(input) = cli.input.as_deref() else {
        // No input file - show help
        tracing::info!("no input file given");
        Cli::command()
            .print_help()
            .map_err(|e| CliError::failure(format!("Error printing help: {e}")))?;
        return Ok(ExitCode::SUCCESS);
    };

    if cli.lex {
        return commands::lex_file(input);
    }

    let options = commands::GenerateOptions {
        config: cli.generator_config(),
        output: cli.output.clone(),
        debug: cli.debug.then_some(cli.debug_format),
    };
    commands::generate_file(input, &options)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::try_parse_from(["fidlgen", "-i", "Notifications.fidl"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("Notifications.fidl")));
        assert_eq!(cli.output, None);
        assert!(!cli.debug);
        assert_eq!(cli.debug_format, DebugFormat::Tree);

        let config = cli.generator_config();
        assert_eq!(config.mode, GenerationMode::Sender);
        assert_eq!(config.module, None);
        assert!(config.serde);
    }

    #[test]
    fn test_cli_parse_receiver_with_package() {
        let cli = Cli::try_parse_from([
            "fidlgen",
            "--in",
            "n.fidl",
            "--receiver",
            "-p",
            "notification",
            "-o",
            "out.rs",
            "--no-serde",
        ])
        .unwrap();
        let config = cli.generator_config();
        assert_eq!(config.mode, GenerationMode::Receiver);
        assert_eq!(config.module.as_deref(), Some("notification"));
        assert!(!config.serde);
        assert_eq!(cli.output, Some(PathBuf::from("out.rs")));
    }

    #[test]
    fn test_cli_aliases() {
        let cli = Cli::try_parse_from(["fidlgen", "-i", "n.fidl", "--server"]).unwrap();
        assert!(cli.receiver);
        let cli = Cli::try_parse_from(["fidlgen", "-i", "n.fidl", "--client"]).unwrap();
        assert!(cli.sender);
        assert_eq!(cli.generator_config().mode, GenerationMode::Sender);
    }

    #[test]
    fn test_cli_sender_and_receiver_conflict() {
        assert!(Cli::try_parse_from(["fidlgen", "-i", "n.fidl", "--sender", "--receiver"]).is_err());
    }

    #[test]
    fn test_cli_debug_format() {
        let cli = Cli::try_parse_from(["fidlgen", "-i", "n.fidl", "--debug", "--debug-format", "json"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.debug_format, DebugFormat::Json);
        assert!(Cli::try_parse_from(["fidlgen", "--debug-format", "yaml"]).is_err());
    }

    #[test]
    fn test_cli_no_input_is_not_a_parse_error() {
        let cli = Cli::try_parse_from(["fidlgen"]).unwrap();
        assert_eq!(cli.input, None);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
