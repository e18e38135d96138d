//! Row matching algorithm

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::model::{CellValue, Dataset, Row, Table};

use super::cell_diff::CellComparator;
use super::table_diff::SharedTables;

/// A row of one side that no row of the other side satisfies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingRow {
    /// Table the row belongs to
    pub table: String,
    /// Constraint text, e.g. `id='2' AND name='Bar'`
    pub expression: String,
    /// Line of the row's table element in its source file
    pub source_line: usize,
}

/// Conjunction of `column = value` terms built from a row's non-null cells.
///
/// Null cells add no term, so they match any candidate value.
#[derive(Debug, Clone)]
pub struct Constraint<'a> {
    terms: Vec<(&'a str, &'a CellValue)>,
}

impl<'a> Constraint<'a> {
    /// Build the constraint for `row` of `table`
    pub fn for_row(table: &'a Table, row: &'a Row) -> Self {
        let terms = table
            .columns
            .iter()
            .zip(&row.cells)
            .filter(|(_, value)| !value.is_null())
            .map(|(column, value)| (column.name.as_str(), value))
            .collect();
        Self { terms }
    }

    /// Number of constrained columns
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// A constraint with no terms matches every row
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether any row of `candidates` satisfies every term
    pub fn matches_any(&self, candidates: &Table, comparator: &CellComparator) -> bool {
        // Resolve column positions once per table.
        let mut resolved = Vec::with_capacity(self.terms.len());
        for (column, value) in &self.terms {
            match candidates.column_index(column) {
                Some(idx) => resolved.push((idx, *value)),
                None => return false,
            }
        }

        candidates.rows.iter().any(|candidate| {
            resolved.iter().all(|(idx, expected)| {
                candidate
                    .get(*idx)
                    .is_some_and(|actual| comparator.equal(expected, actual))
            })
        })
    }

    /// Textual form: `col='value'` terms joined by ` AND `, quotes doubled
    pub fn expression(&self) -> String {
        self.terms
            .iter()
            .map(|(column, value)| {
                format!("{}='{}'", column, escape_literal(&value.display()))
            })
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}

/// Double single quotes the way query string literals expect
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Finds rows of one table that have no counterpart in another
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMatcher {
    comparator: CellComparator,
}

impl RowMatcher {
    /// Create a new row matcher
    pub fn new(comparator: CellComparator) -> Self {
        Self { comparator }
    }

    /// Rows of `table_a` that no row of `table_b` satisfies, in `table_a` order
    pub fn missing_rows(&self, table_a: &Table, table_b: &Table) -> Vec<MissingRow> {
        table_a
            .rows
            .iter()
            .filter_map(|row| {
                let constraint = Constraint::for_row(table_a, row);
                if constraint.matches_any(table_b, &self.comparator) {
                    None
                } else {
                    Some(MissingRow {
                        table: table_a.name.clone(),
                        expression: constraint.expression(),
                        source_line: row.source_line,
                    })
                }
            })
            .collect()
    }
}

/// Compare rows of every table in `shared`; `shared` must only hold tables
/// whose column sets are identical on both sides.
pub fn diff_rows(a: &Dataset, b: &Dataset, shared: &SharedTables, matcher: &RowMatcher) -> Vec<MissingRow> {
    let mut missing = Vec::new();

    for name in shared.iter() {
        let (Some(table_a), Some(table_b)) = (a.table(name), b.table(name)) else {
            continue;
        };

        info!("comparing data for table {}", name);
        let found = matcher.missing_rows(table_a, table_b);
        debug!(table = %name, missing = found.len(), "row comparison done");
        missing.extend(found);
    }

    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_table(rows: &[[&str; 2]]) -> Table {
        let mut table = Table::new("Item");
        table.add_column("id");
        table.add_column("name");
        for (line, [id, name]) in rows.iter().enumerate() {
            table.add_row(vec![CellValue::from(*id), CellValue::from(*name)], line + 1);
        }
        table
    }

    #[test]
    fn test_expression_skips_nulls_and_doubles_quotes() {
        let table = item_table(&[["1", "O'Brien"], ["", "x"]]);

        let first = Constraint::for_row(&table, &table.rows[0]);
        let second = Constraint::for_row(&table, &table.rows[1]);

        assert_eq!(first.expression(), "id='1' AND name='O''Brien'");
        assert_eq!(second.expression(), "name='x'");
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_null_is_a_wildcard() {
        let a = item_table(&[["1", ""]]);
        let b = item_table(&[["1", "anything"]]);

        let matcher = RowMatcher::default();
        assert!(matcher.missing_rows(&a, &b).is_empty());
        assert_eq!(matcher.missing_rows(&b, &a).len(), 1);
    }

    #[test]
    fn test_row_without_values_matches_any_row() {
        let a = item_table(&[["", ""]]);
        let b = item_table(&[["7", "x"]]);
        let empty = item_table(&[]);

        let matcher = RowMatcher::default();
        assert!(matcher.missing_rows(&a, &b).is_empty());

        let missing = matcher.missing_rows(&a, &empty);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].expression, "");
    }

    #[test]
    fn test_quotes_match_raw_values() {
        let a = item_table(&[["1", "it's"]]);
        let b = item_table(&[["1", "it's"]]);

        assert!(RowMatcher::default().missing_rows(&a, &b).is_empty());
    }

    #[test]
    fn test_order_independent_and_duplicates_kept() {
        let a = item_table(&[["1", "Foo"], ["2", "Bar"], ["2", "Bar"]]);
        let b = item_table(&[["3", "Baz"], ["1", "Foo"]]);

        let missing = RowMatcher::default().missing_rows(&a, &b);
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().all(|m| m.expression == "id='2' AND name='Bar'"));
        assert_eq!(missing[0].source_line, 2);
    }

    #[test]
    fn test_comparator_options_apply() {
        let a = item_table(&[["1", "FOO"]]);
        let b = item_table(&[["1", "foo"]]);

        assert_eq!(RowMatcher::default().missing_rows(&a, &b).len(), 1);
        assert!(RowMatcher::new(CellComparator::new(true, false))
            .missing_rows(&a, &b)
            .is_empty());
    }
}
