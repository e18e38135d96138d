//! Table and column discovery

use std::path::Path;

use tracing::{debug, trace};

use crate::error::{CompareError, Result};
use crate::model::{Dataset, Table};

use super::document::{Document, Element};
use super::LoadOptions;

/// Infer the tables and columns of `document`.
///
/// Each distinct element name under the root is a table; its columns are the
/// distinct child names across every instance of that table element, in
/// first-seen order, minus exclusions. The returned dataset has no rows.
pub fn infer_schema(document: &Document, source: &Path, options: &LoadOptions) -> Result<Dataset> {
    let namespace = options.namespace.as_str();
    let root = document.root();

    let instances: Vec<&Element> = if root.is(&options.root, namespace) {
        root.children_in(namespace).collect()
    } else {
        Vec::new()
    };

    if instances.is_empty() {
        return Err(CompareError::SchemaInference {
            path: source.to_path_buf(),
            root: options.root.clone(),
            namespace: options.namespace.clone(),
        });
    }

    let mut dataset = Dataset::new(source);
    for instance in instances {
        if dataset.contains_table(&instance.name) {
            continue;
        }

        let mut table = Table::new(instance.name.as_str());
        add_columns(&mut table, root, options);
        debug!(
            table = %table.name,
            columns = table.column_count(),
            "inferred table"
        );
        dataset.add_table(table);
    }

    Ok(dataset)
}

fn add_columns(table: &mut Table, root: &Element, options: &LoadOptions) {
    let namespace = options.namespace.as_str();
    let table_name = table.name.clone();

    for instance in root.children_named(&table_name, namespace) {
        for candidate in instance.children_in(namespace) {
            if table.has_column(&candidate.name) {
                continue;
            }
            if options.exclusions.is_excluded(&table_name, &candidate.name) {
                trace!(table = %table_name, column = %candidate.name, "skipping excluded column");
                continue;
            }
            debug!(table = %table_name, column = %candidate.name, "adding column");
            table.add_column(&candidate.name);
        }
    }
}
