//! Column-name comparison over shared tables

use serde::{Deserialize, Serialize};

use crate::filter::qualified_name;
use crate::model::Dataset;

use super::table_diff::SharedTables;

/// A column one side has and the other lacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingColumn {
    pub table: String,
    pub column: String,
}

impl MissingColumn {
    pub fn qualified_name(&self) -> String {
        qualified_name(&self.table, &self.column)
    }
}

impl std::fmt::Display for MissingColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.table, self.column)
    }
}

/// Outcome of comparing the columns of shared tables of `a` against `b`
#[derive(Debug, Clone, Default)]
pub struct ColumnNameDiff {
    /// Columns of `a` that `b` lacks, grouped by table in shared order
    pub only_in_a: Vec<MissingColumn>,
    /// `shared` minus every table with a reported column
    pub shared: SharedTables,
}

/// Compare column names of every shared table. Tables with a difference are
/// pruned from the returned [`SharedTables`].
pub fn diff_column_names(a: &Dataset, b: &Dataset, shared: SharedTables) -> ColumnNameDiff {
    let mut only_in_a = Vec::new();
    let mut mismatched: Vec<String> = Vec::new();

    for name in shared.iter() {
        let (Some(table_a), Some(table_b)) = (a.table(name), b.table(name)) else {
            mismatched.push(name.to_string());
            continue;
        };

        let before = only_in_a.len();
        for column in table_a.column_names() {
            if !table_b.has_column(column) {
                only_in_a.push(MissingColumn {
                    table: name.to_string(),
                    column: column.to_string(),
                });
            }
        }

        if only_in_a.len() > before {
            mismatched.push(name.to_string());
        }
    }

    ColumnNameDiff {
        only_in_a,
        shared: shared.prune(mismatched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::table_diff::diff_table_names;
    use crate::model::Table;

    fn table(name: &str, columns: &[&str]) -> Table {
        let mut t = Table::new(name);
        for c in columns {
            t.add_column(c);
        }
        t
    }

    #[test]
    fn test_missing_columns_prune_shared_tables() {
        let mut a = Dataset::default();
        a.add_table(table("Item", &["id", "name", "price"]));
        a.add_table(table("Order", &["no"]));
        let mut b = Dataset::default();
        b.add_table(table("Item", &["name", "id"]));
        b.add_table(table("Order", &["no"]));

        let shared = diff_table_names(&a, &b).shared;
        let diff = diff_column_names(&a, &b, shared);

        assert_eq!(
            diff.only_in_a,
            vec![MissingColumn {
                table: "Item".into(),
                column: "price".into()
            }]
        );
        assert_eq!(diff.only_in_a[0].to_string(), "Item.price");
        assert_eq!(diff.shared.iter().collect::<Vec<_>>(), vec!["Order"]);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let mut a = Dataset::default();
        a.add_table(table("Item", &["id", "name"]));
        let mut b = Dataset::default();
        b.add_table(table("Item", &["name", "id"]));

        let diff = diff_column_names(&a, &b, diff_table_names(&a, &b).shared);

        assert!(diff.only_in_a.is_empty());
        assert!(diff.shared.contains("Item"));
    }

    #[test]
    fn test_superset_side_reports_nothing() {
        let mut a = Dataset::default();
        a.add_table(table("Item", &["id"]));
        let mut b = Dataset::default();
        b.add_table(table("Item", &["id", "extra"]));

        let forward = diff_column_names(&a, &b, diff_table_names(&a, &b).shared);
        let backward = diff_column_names(&b, &a, diff_table_names(&b, &a).shared);

        assert!(forward.only_in_a.is_empty());
        assert!(forward.shared.contains("Item"));
        assert_eq!(backward.only_in_a[0].qualified_name(), "Item.extra");
        assert!(backward.shared.is_empty());
    }
}
