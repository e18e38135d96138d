//! Table-name comparison and the set of tables carried between stages

use indexmap::IndexSet;

use crate::model::Dataset;

/// Table names still eligible for the next comparison stage.
///
/// Produced by [`diff_table_names`], pruned by the column stage and consumed
/// by the row stage. Keeps the order of the dataset it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedTables {
    names: IndexSet<String>,
}

impl SharedTables {
    pub fn contains(&self, table: &str) -> bool {
        self.names.contains(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Drop the given tables, keeping the order of the rest
    pub fn prune<I, S>(mut self, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for table in tables {
            self.names.shift_remove(table.as_ref());
        }
        self
    }

    /// Keep only tables that `other` also holds
    pub fn retain_common(mut self, other: &SharedTables) -> Self {
        self.names.retain(|name| other.contains(name));
        self
    }

    fn insert(&mut self, table: &str) {
        if !self.names.contains(table) {
            self.names.insert(table.to_string());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for SharedTables {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut shared = Self::default();
        for name in iter {
            shared.insert(name.as_ref());
        }
        shared
    }
}

/// Outcome of comparing the table names of `a` against `b`
#[derive(Debug, Clone, Default)]
pub struct TableNameDiff {
    /// Tables of `a` that `b` does not have, in `a`'s order
    pub only_in_a: Vec<String>,
    /// Tables both datasets have, in `a`'s order
    pub shared: SharedTables,
}

/// Compare table names of two datasets
pub fn diff_table_names(a: &Dataset, b: &Dataset) -> TableNameDiff {
    let mut result = TableNameDiff::default();

    for name in a.table_names() {
        if b.contains_table(name) {
            result.shared.insert(name);
        } else {
            result.only_in_a.push(name.to_string());
        }
    }

    result
}
