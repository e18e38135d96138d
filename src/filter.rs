//! Column exclusion by qualified `table.column` name

use rustc_hash::FxHashSet;
use tracing::info;

/// Qualified column names that never become part of a schema.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    qualified: FxHashSet<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a comma-separated list such as `Item.name,Order.note`
    pub fn parse(list: &str) -> Self {
        let mut set = Self::new();
        for entry in list.split(',') {
            set.insert(entry);
        }
        set
    }

    /// Register one qualified name. Blank entries are ignored.
    pub fn insert(&mut self, qualified: &str) -> bool {
        let qualified = qualified.trim();
        if qualified.is_empty() {
            return false;
        }
        let added = self.qualified.insert(qualified.to_string());
        if added {
            info!("column {} will be ignored in the comparison.", qualified);
        }
        added
    }

    /// Whether `table.column` is excluded
    pub fn is_excluded(&self, table: &str, column: &str) -> bool {
        if self.qualified.is_empty() {
            return false;
        }
        self.qualified.contains(&qualified_name(table, column))
    }

    pub fn len(&self) -> usize {
        self.qualified.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qualified.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.qualified.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for entry in iter {
            set.insert(entry.as_ref());
        }
        set
    }
}

/// Join a table and column name the way exclusions and reports spell them
pub fn qualified_name(table: &str, column: &str) -> String {
    format!("{}.{}", table, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_list() {
        let set = ExclusionSet::parse("Item.name, Order.note,,Item.name");

        assert_eq!(set.len(), 2);
        assert!(set.is_excluded("Item", "name"));
        assert!(set.is_excluded("Order", "note"));
        assert!(!set.is_excluded("Item", "id"));
    }

    #[test]
    fn test_exclusion_is_table_scoped() {
        let set: ExclusionSet = ["Item.name"].into_iter().collect();

        assert!(set.is_excluded("Item", "name"));
        assert!(!set.is_excluded("Order", "name"));
    }

    #[test]
    fn test_empty_set_excludes_nothing() {
        let set = ExclusionSet::parse("");
        assert!(set.is_empty());
        assert!(!set.is_excluded("Item", "id"));
    }
}
