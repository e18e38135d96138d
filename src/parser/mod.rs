//! Loading XML documents into datasets

mod document;
mod populate;
mod schema;

use std::path::Path;

use tracing::info;

use crate::error::{CompareError, Result};
use crate::filter::ExclusionSet;
use crate::model::Dataset;

pub use self::document::{Document, Element};
pub use self::populate::populate_tables;
pub use self::schema::infer_schema;

/// Default name of the document element
pub const DEFAULT_ROOT: &str = "root";
/// Default namespace URI table and column elements live in
pub const DEFAULT_NAMESPACE: &str = "http://tempuri.org";

/// How a document is mapped onto tables and columns
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Local name of the document element
    pub root: String,
    /// Namespace URI of root, table and column elements
    pub namespace: String,
    /// Qualified columns to leave out of the schema
    pub exclusions: ExclusionSet,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            exclusions: ExclusionSet::new(),
        }
    }
}

impl LoadOptions {
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }
}

/// Read an XML file and convert it into a dataset
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let document = Document::from_file(path).map_err(|source| CompareError::DocumentLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = build_dataset(&document, path, options)?;

    info!(
        file = %path.display(),
        tables = dataset.table_count(),
        rows = dataset.row_count(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Parse XML text into a dataset; `source` only labels errors and reports
pub fn parse_dataset(xml: &str, source: &Path, options: &LoadOptions) -> Result<Dataset> {
    let document = Document::parse(xml).map_err(|source_err| CompareError::DocumentLoad {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    build_dataset(&document, source, options)
}

fn build_dataset(document: &Document, source: &Path, options: &LoadOptions) -> Result<Dataset> {
    let mut dataset = infer_schema(document, source, options)?;
    populate_tables(&mut dataset, document, &options.namespace);
    Ok(dataset)
}
