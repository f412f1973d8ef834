//! Named collection of validated interval tables.

use crate::error::{ConfigError, Result};
use crate::table::TableFile;
use ladder_domain::IntervalMap;
use std::collections::BTreeMap;
use std::path::Path;

/// A validated table ready for lookups.
#[derive(Debug, Clone)]
pub struct Table {
    /// Description copied from the file
    pub description: Option<String>,
    /// The buckets
    pub map: IntervalMap<f64, String>,
}

/// Immutable set of tables, keyed by name.
///
/// Built by [`TableFile::build`]; every table in it passed validation.
#[derive(Debug, Clone)]
pub struct Registry {
    tables: BTreeMap<String, Table>,
}

impl Registry {
    pub(crate) fn new(tables: BTreeMap<String, Table>) -> Self {
        Self { tables }
    }

    /// Read, parse and validate a table file in one step.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        TableFile::from_file(path)?.build()
    }

    /// Get a table by name.
    pub fn get(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    /// Get a table by name, failing if it is not loaded.
    pub fn table(&self, name: &str) -> Result<&Table> {
        self.get(name)
            .ok_or_else(|| ConfigError::UnknownTable(name.to_string()))
    }

    /// Look up `value` in the named table.
    ///
    /// An unknown table is an error; a value outside every bucket is `Ok(None)`.
    pub fn lookup(&self, name: &str, value: f64) -> Result<Option<&String>> {
        Ok(self.table(name)?.map.get(&value))
    }

    /// Table names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    /// Iterate over `(name, table)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Table)> {
        self.tables.iter().map(|(name, table)| (name.as_str(), table))
    }

    /// Number of tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Always false for a registry built from a file.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
