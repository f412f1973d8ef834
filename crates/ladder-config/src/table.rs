//! Table file parsing.
//!
//! A table file is TOML with one `[tables.<name>]` section per interval table
//! and an array of `[[tables.<name>.ranges]]` buckets under it.

use crate::error::{ConfigError, Result};
use crate::registry::{Registry, Table};
use ladder_domain::{Interval, IntervalMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable overriding the default table file location
pub const TABLES_ENV: &str = "LADDER_TABLES";

/// Parsed contents of a table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableFile {
    /// Tables by name
    #[serde(default)]
    pub tables: BTreeMap<String, TableConfig>,
}

/// One named table as written in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Human readable summary shown by `ladder list`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Buckets in any order
    #[serde(default)]
    pub ranges: Vec<RangeConfig>,
}

/// One bucket as written in the file.
///
/// Integers are accepted for the bounds; `inf` and `-inf` give open-ended buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound
    pub max: f64,
    /// Bucket label
    pub value: String,
}

impl From<RangeConfig> for Interval<f64, String> {
    fn from(range: RangeConfig) -> Self {
        Interval::new(range.min, range.max, range.value)
    }
}

impl TableFile {
    /// Resolve the table file location.
    ///
    /// `$LADDER_TABLES` wins, otherwise `~/.ladder/tables.toml`.
    pub fn path() -> Result<PathBuf> {
        if let Ok(path) = env::var(TABLES_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        Self::default_path()
    }

    /// `~/.ladder/tables.toml`, ignoring the environment.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConfigError::Config("Could not find home directory".into()))?;
        Ok(home.join(".ladder").join("tables.toml"))
    }

    /// Load a table file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let file: TableFile = contents.parse()?;

        tracing::info!(
            path = %path.display(),
            tables = file.tables.len(),
            "Loaded table file"
        );

        Ok(file)
    }

    /// Validate every table and build the lookup registry.
    ///
    /// Stops at the first invalid table; the error carries its name.
    pub fn build(&self) -> Result<Registry> {
        if self.tables.is_empty() {
            return Err(ConfigError::NoTables);
        }

        let mut tables = BTreeMap::new();
        for (name, table) in &self.tables {
            let map = IntervalMap::new(table.ranges.iter().cloned().map(Interval::from)).map_err(
                |source| ConfigError::InvalidTable {
                    name: name.clone(),
                    source,
                },
            )?;

            tracing::debug!(table = %name, buckets = map.len(), "Built table");

            tables.insert(
                name.clone(),
                Table {
                    description: table.description.clone(),
                    map,
                },
            );
        }

        Ok(Registry::new(tables))
    }
}

impl FromStr for TableFile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_domain::IntervalMapError;

    const TIERS: &str = r#"
        [tables.team_size]
        description = "Seats to pricing tier"

        [[tables.team_size.ranges]]
        min = 10
        max = 50
        value = "team"

        [[tables.team_size.ranges]]
        min = 0
        max = 10
        value = "small"

        [[tables.team_size.ranges]]
        min = 50
        max = inf
        value = "business"
    "#;

    #[test]
    fn test_parse_table_file() {
        let file: TableFile = TIERS.parse().unwrap();
        let table = &file.tables["team_size"];
        assert_eq!(table.description.as_deref(), Some("Seats to pricing tier"));
        assert_eq!(table.ranges.len(), 3);
        assert_eq!(table.ranges[0].min, 10.0);
        assert!(table.ranges[2].max.is_infinite());
    }

    #[test]
    fn test_build_registry() {
        let registry = TIERS.parse::<TableFile>().unwrap().build().unwrap();
        let table = registry.get("team_size").unwrap();
        assert_eq!(table.map.min(), "small");
        assert_eq!(table.map.max(), "business");
        assert_eq!(table.map.get(&1e9).map(String::as_str), Some("business"));
    }

    #[test]
    fn test_overlapping_table_named_in_error() {
        let file: TableFile = r#"
            [[tables.thresholds.ranges]]
            min = 0
            max = 10
            value = "low"

            [[tables.thresholds.ranges]]
            min = 5
            max = 20
            value = "high"
        "#
        .parse()
        .unwrap();

        match file.build() {
            Err(ConfigError::InvalidTable { name, source }) => {
                assert_eq!(name, "thresholds");
                assert!(matches!(source, IntervalMapError::Overlapping { .. }));
            }
            other => panic!("Expected InvalidTable, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_table_without_ranges() {
        let file: TableFile = "[tables.empty]\ndescription = \"nothing\"\n".parse().unwrap();
        let err = file.build().map(|_| ()).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidTable {
                source: IntervalMapError::Empty,
                ..
            }
        ));
    }

    #[test]
    fn test_no_tables() {
        let file: TableFile = "".parse().unwrap();
        assert!(matches!(file.build(), Err(ConfigError::NoTables)));
    }

    #[test]
    fn test_invalid_toml() {
        let result = "[tables.broken\n".parse::<TableFile>();
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
