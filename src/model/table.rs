//! Table, Row, and Cell data structures

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use super::schema::Column;

/// A cell value. `Null` covers both a missing element and empty content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Text(String),
}

impl CellValue {
    /// Build a cell from raw inner content; empty content is `Null`
    pub fn from_raw(raw: &str) -> Self {
        if raw.is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(raw.to_string())
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// The text, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Null => None,
            CellValue::Text(s) => Some(s),
        }
    }

    /// Convert to a display string
    pub fn display(&self) -> Cow<'_, str> {
        match self {
            CellValue::Null => Cow::Borrowed("NULL"),
            CellValue::Text(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from_raw(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Null
        } else {
            CellValue::Text(s)
        }
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

/// A row in the table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Cell values in column order
    pub cells: Vec<CellValue>,
    /// Line of the table element this row came from (1-indexed)
    pub source_line: usize,
}

impl Row {
    pub fn new(cells: Vec<CellValue>, source_line: usize) -> Self {
        Self { cells, source_line }
    }

    /// Get a cell value by column index
    pub fn get(&self, index: usize) -> Option<&CellValue> {
        self.cells.get(index)
    }
}

/// A table containing columns and rows
#[derive(Debug, Clone)]
pub struct Table {
    /// Table name (element name under the root)
    pub name: String,
    /// Column definitions
    pub columns: Vec<Column>,
    /// All rows in document order
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table with no columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Append a column unless one with that name exists. Returns whether it was added.
    pub fn add_column(&mut self, name: &str) -> bool {
        if self.has_column(name) {
            return false;
        }
        let index = self.columns.len();
        self.columns.push(Column::new(name, index));
        true
    }

    /// Add a row to the table, padding missing cells with nulls
    pub fn add_row(&mut self, mut cells: Vec<CellValue>, source_line: usize) {
        cells.resize(self.column_count(), CellValue::Null);
        self.rows.push(Row::new(cells, source_line));
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Look up a cell of `row` by column name
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> Option<&'a CellValue> {
        self.column_index(column).and_then(|idx| row.get(idx))
    }

    /// Column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
