//! Ladder table files
//!
//! Loads named interval tables (pricing tiers, alert thresholds, ...) from TOML
//! and validates them into [`ladder_domain::IntervalMap`]s.
//!
//! # Examples
//!
//! ```
//! use ladder_config::TableFile;
//!
//! let file: TableFile = r#"
//!     [[tables.seats.ranges]]
//!     min = 0
//!     max = 10
//!     value = "small"
//! "#.parse().unwrap();
//!
//! let registry = file.build().unwrap();
//! assert_eq!(registry.lookup("seats", 3.0).unwrap().map(String::as_str), Some("small"));
//! ```

#![warn(missing_docs)]

mod error;
mod registry;
mod table;

pub use error::{ConfigError, Result};
pub use registry::{Registry, Table};
pub use table::{RangeConfig, TableFile, TableConfig, TABLES_ENV};
