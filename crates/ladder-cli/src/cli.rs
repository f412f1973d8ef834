//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Ladder CLI - Look up values in interval tables.
#[derive(Debug, Parser)]
#[command(name = "ladder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Table file path (defaults to $LADDER_TABLES, then `tables_file` in
    /// ~/.ladder/config.toml, then ~/.ladder/tables.toml)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bucket values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the bucket a value falls into
    Lookup(LookupArgs),

    /// Print every bucket of a table
    Show(ShowArgs),

    /// Validate every table in the file
    Check,

    /// List the tables in the file
    List,
}

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Table name
    pub table: String,

    /// Value to look up
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Table name
    pub table: String,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
