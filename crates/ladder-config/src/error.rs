//! Error types for table files

use ladder_domain::IntervalMapError;
use thiserror::Error;

/// Result type alias for table loading operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading or querying table files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the table file
    #[error("Failed to read table file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse table TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The file parsed but declares no tables
    #[error("Table file defines no tables")]
    NoTables,

    /// A table's ranges do not form a valid interval map
    #[error("Invalid table '{name}': {source}")]
    InvalidTable {
        /// Table name as written in the file
        name: String,
        /// Why the ranges were rejected
        #[source]
        source: IntervalMapError,
    },

    /// Lookup against a table that was never loaded
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// The default file location could not be resolved
    #[error("Configuration error: {0}")]
    Config(String),
}
