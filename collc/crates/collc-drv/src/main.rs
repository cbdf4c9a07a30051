//! collc - command-line driver for the Coll lexer.
//!
//! This is the main entry point for the collc binary. It uses clap for
//! argument parsing and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokens, CheckArgs, TokensArgs};
use config::{Config, OutputFormat};
use error::{DriverError, Result};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "COLLC_LOG";

/// collc - lexical analysis for the Coll language
///
/// Prints token streams and checks Coll sources for lexical errors.
#[derive(Parser, Debug)]
#[command(name = "collc")]
#[command(author = "Coll Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lexical analysis for the Coll language", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "COLLC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "COLLC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "COLLC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the collc CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a source file
    ///
    /// Reads the file (or standard input) incrementally and prints one
    /// token per line.
    Tokens(TokensCommand),

    /// Check source files for lexical errors
    ///
    /// Renders every lexical error with its source line and exits with a
    /// non-zero status if any were found.
    Check(CheckCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Source file; `-` or nothing reads standard input
    file: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Also print the end-of-input token
    #[arg(long)]
    include_eof: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files; `-` or nothing reads standard input
    files: Vec<PathBuf>,

    /// Stop rendering after this many diagnostics, 0 for no limit (default: from config)
    #[arg(long)]
    max_errors: Option<usize>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parses arguments, initializes logging, loads configuration and runs
/// the selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `COLLC_LOG` takes precedence over the level chosen by `verbose`. Logs go
/// to standard error so they never mix with a token dump.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command. Command-line flags override the
/// configuration file.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => run_tokens(TokensArgs {
            file: args.file,
            format: args.format.unwrap_or(config.output.format),
            include_eof: args.include_eof || config.output.include_eof,
        }),
        Commands::Check(args) => run_check(CheckArgs {
            files: args.files,
            max_errors: args.max_errors.unwrap_or(config.check.max_errors),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokens() {
        let cli = Cli::parse_from(["collc", "tokens"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, None);
            assert_eq!(args.format, None);
            assert!(!args.include_eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_with_file_and_format() {
        let cli = Cli::parse_from(["collc", "tokens", "main.coll", "--format", "json"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("main.coll")));
            assert_eq!(args.format, Some(OutputFormat::Json));
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_include_eof() {
        let cli = Cli::parse_from(["collc", "tokens", "-", "--include-eof"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("-")));
            assert!(args.include_eof);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result = Cli::try_parse_from(["collc", "tokens", "--format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_check_multiple_files() {
        let cli = Cli::parse_from(["collc", "check", "a.coll", "b.coll", "--max-errors", "3"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(
                args.files,
                vec![PathBuf::from("a.coll"), PathBuf::from("b.coll")]
            );
            assert_eq!(args.max_errors, Some(3));
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_global_verbose() {
        let cli = Cli::parse_from(["collc", "--verbose", "check", "a.coll"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_parse_global_config() {
        let cli = Cli::parse_from(["collc", "tokens", "--config", "/path/to/collc.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/collc.toml")));
    }

    #[test]
    fn test_cli_parse_global_no_color() {
        let cli = Cli::parse_from(["collc", "--no-color", "tokens"]);
        assert!(cli.no_color);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["collc"]).is_err());
    }
}
