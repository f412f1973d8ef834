//! Ladder CLI - Command-line interface for interval table lookups.

use clap::Parser;
use ladder_cli::commands;
use ladder_cli::config::{resolve_tables_path, OutputFormat};
use ladder_cli::{Cli, Command, Config, Formatter};
use ladder_config::{Registry, TABLES_ENV};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let color_enabled = !cli.no_color;

    if let Err(e) = run(cli) {
        let formatter = Formatter::new(OutputFormat::Table, color_enabled);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ladder_cli::Result<()> {
    // A broken CLI config should not block lookups
    let config = Config::path()
        .map(|path| Config::load_or_default(&path))
        .unwrap_or_default();

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let env_file = env::var_os(TABLES_ENV).map(PathBuf::from);
    let path = resolve_tables_path(cli.file, env_file, &config)?;
    let registry = Registry::load(&path)?;

    match cli.command {
        Command::Lookup(args) => commands::execute_lookup(args, &registry, &formatter)?,
        Command::Show(args) => commands::execute_show(args, &registry, &formatter)?,
        Command::Check => commands::execute_check(&registry, &formatter)?,
        Command::List => commands::execute_list(&registry, &formatter)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
