//! Column metadata

use serde::{Deserialize, Serialize};

/// Column metadata. Every column holds text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (child element name)
    pub name: String,
    /// Column index (0-based position, first-seen order)
    pub index: usize,
}

impl Column {
    /// Create a new column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
        }
    }
}
