//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use ladder_config::TableFile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration, read from `~/.ladder/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Table file used when `--file` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables_file: Option<PathBuf>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ladder").join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Like [`Config::load_from`], but an unreadable file is logged and replaced by defaults.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), "Ignoring CLI config: {}", e);
            Self::default()
        })
    }
}

/// Pick the table file to load.
///
/// Order: `--file`, then `$LADDER_TABLES` (passed in as `env_file`), then
/// `tables_file` from the settings file, then `~/.ladder/tables.toml`.
pub fn resolve_tables_path(
    cli_file: Option<PathBuf>,
    env_file: Option<PathBuf>,
    config: &Config,
) -> Result<PathBuf> {
    let chosen = cli_file
        .or(env_file.filter(|path| !path.as_os_str().is_empty()))
        .or_else(|| config.tables_file.clone());

    match chosen {
        Some(path) => Ok(path),
        None => Ok(TableFile::default_path()?),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
