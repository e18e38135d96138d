//! A set of named tables built from one document

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::table::Table;

/// In-memory relational view of one input document.
///
/// Tables keep the order in which their element names were first seen
/// under the root.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// File the dataset was loaded from (empty for in-memory documents)
    pub source: PathBuf,
    tables: IndexMap<String, Table>,
}

impl Dataset {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            tables: IndexMap::new(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Insert a table if no table of that name exists yet
    pub fn add_table(&mut self, table: Table) -> bool {
        if self.tables.contains_key(&table.name) {
            return false;
        }
        self.tables.insert(table.name.clone(), table);
        true
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub(crate) fn tables_mut(&mut self) -> impl Iterator<Item = &mut Table> {
        self.tables.values_mut()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Total rows across all tables
    pub fn row_count(&self) -> usize {
        self.tables.values().map(Table::row_count).sum()
    }
}
