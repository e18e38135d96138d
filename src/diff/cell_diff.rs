//! Cell-level comparison logic

use crate::model::CellValue;

/// Cell comparator with configurable options
#[derive(Debug, Clone, Copy, Default)]
pub struct CellComparator {
    ignore_case: bool,
    ignore_whitespace: bool,
}

impl CellComparator {
    /// Create a new cell comparator
    pub fn new(ignore_case: bool, ignore_whitespace: bool) -> Self {
        Self {
            ignore_case,
            ignore_whitespace,
        }
    }

    /// Exact string comparison
    pub fn exact() -> Self {
        Self::default()
    }

    /// Compare two cell values for equality
    pub fn equal(&self, a: &CellValue, b: &CellValue) -> bool {
        if a == b {
            return true;
        }

        match (a.as_str(), b.as_str()) {
            (Some(a), Some(b)) => {
                let (a, b) = if self.ignore_whitespace {
                    (a.trim(), b.trim())
                } else {
                    (a, b)
                };
                if self.ignore_case {
                    a.eq_ignore_ascii_case(b)
                } else {
                    a == b
                }
            }
            _ => false,
        }
    }
}
