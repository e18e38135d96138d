//! Diff engine for comparing datasets
//!
//! Comparison runs in three stages, each over the output of the previous:
//! table names, then column names of shared tables, then rows of tables
//! whose column sets match. The set of eligible tables is passed from stage
//! to stage as a [`SharedTables`] value.

pub mod cell_diff;
mod row_diff;
mod schema_diff;
mod table_diff;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::model::Dataset;

pub use cell_diff::CellComparator;
pub use row_diff::{diff_rows, escape_literal, Constraint, MissingRow, RowMatcher};
pub use schema_diff::{diff_column_names, ColumnNameDiff, MissingColumn};
pub use table_diff::{diff_table_names, SharedTables, TableNameDiff};

/// Everything one side has that the other lacks
#[derive(Debug, Clone, Default, Serialize)]
pub struct DirectionDiff {
    /// Tables only this side has
    pub tables_only: Vec<String>,
    /// Columns of shared tables only this side has
    pub columns_only: Vec<MissingColumn>,
    /// Rows of fully shared tables with no counterpart on the other side
    pub missing_rows: Vec<MissingRow>,
    /// Tables whose rows were compared for this direction
    pub compared_tables: Vec<String>,
}

impl DirectionDiff {
    pub fn has_changes(&self) -> bool {
        !self.tables_only.is_empty() || !self.columns_only.is_empty() || !self.missing_rows.is_empty()
    }
}

/// Statistics about the diff
#[derive(Debug, Default, Clone, Serialize)]
pub struct DiffStats {
    pub left_table_count: usize,
    pub right_table_count: usize,
    pub left_row_count: usize,
    pub right_row_count: usize,
    /// Tables present on both sides
    pub shared_tables: usize,
    /// Shared tables whose rows were compared
    pub compared_tables: usize,
    pub tables_only_left: usize,
    pub tables_only_right: usize,
    pub columns_only_left: usize,
    pub columns_only_right: usize,
    pub rows_only_left: usize,
    pub rows_only_right: usize,
}

impl DiffStats {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.tables_only_left > 0
            || self.tables_only_right > 0
            || self.columns_only_left > 0
            || self.columns_only_right > 0
            || self.rows_only_left > 0
            || self.rows_only_right > 0
    }
}

/// Result of comparing two datasets
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiffResult {
    /// What the left dataset has that the right lacks
    pub left: DirectionDiff,
    /// What the right dataset has that the left lacks
    pub right: DirectionDiff,
    /// Statistics
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        self.left.has_changes() || self.right.has_changes()
    }
}

/// Main diff engine
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    row_matcher: RowMatcher,
}

impl DiffEngine {
    /// Create a new diff engine with configuration
    pub fn new(config: &Config) -> Self {
        Self::with_comparator(CellComparator::new(
            config.ignore_case,
            config.ignore_whitespace,
        ))
    }

    pub fn with_comparator(comparator: CellComparator) -> Self {
        Self {
            row_matcher: RowMatcher::new(comparator),
        }
    }

    /// Compare two datasets in both directions
    pub fn diff(&self, left: &Dataset, right: &Dataset) -> DiffResult {
        let TableNameDiff {
            only_in_a: left_tables,
            shared: left_shared,
        } = diff_table_names(left, right);
        let TableNameDiff {
            only_in_a: right_tables,
            shared: right_shared,
        } = diff_table_names(right, left);
        let shared_tables = left_shared.len();
        debug!(
            left_only = left_tables.len(),
            right_only = right_tables.len(),
            shared = shared_tables,
            "table names compared"
        );

        let ColumnNameDiff {
            only_in_a: left_columns,
            shared: left_shared,
        } = diff_column_names(left, right, left_shared);
        let ColumnNameDiff {
            only_in_a: right_columns,
            shared: right_shared,
        } = diff_column_names(right, left, right_shared);

        // A mismatch in either direction means the column sets differ.
        let left_shared = left_shared.retain_common(&right_shared);
        let right_shared = right_shared.retain_common(&left_shared);
        debug!(
            left_only = left_columns.len(),
            right_only = right_columns.len(),
            eligible = left_shared.len(),
            "column names compared"
        );

        let left_rows = diff_rows(left, right, &left_shared, &self.row_matcher);
        let right_rows = diff_rows(right, left, &right_shared, &self.row_matcher);
        debug!(
            left_only = left_rows.len(),
            right_only = right_rows.len(),
            "rows compared"
        );

        let stats = DiffStats {
            left_table_count: left.table_count(),
            right_table_count: right.table_count(),
            left_row_count: left.row_count(),
            right_row_count: right.row_count(),
            shared_tables,
            compared_tables: left_shared.len(),
            tables_only_left: left_tables.len(),
            tables_only_right: right_tables.len(),
            columns_only_left: left_columns.len(),
            columns_only_right: right_columns.len(),
            rows_only_left: left_rows.len(),
            rows_only_right: right_rows.len(),
        };

        DiffResult {
            left: DirectionDiff {
                tables_only: left_tables,
                columns_only: left_columns,
                missing_rows: left_rows,
                compared_tables: left_shared.iter().map(str::to_string).collect(),
            },
            right: DirectionDiff {
                tables_only: right_tables,
                columns_only: right_columns,
                missing_rows: right_rows,
                compared_tables: right_shared.iter().map(str::to_string).collect(),
            },
            stats,
        }
    }
}

/// Convenience function to compute diff
pub fn compute_diff(left: &Dataset, right: &Dataset, config: &Config) -> DiffResult {
    let engine = DiffEngine::new(config);
    engine.diff(left, right)
}
