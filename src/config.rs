//! Configuration handling for xmldatadiff

use std::path::PathBuf;

use crate::filter::ExclusionSet;
use crate::parser::{LoadOptions, DEFAULT_NAMESPACE, DEFAULT_ROOT};

/// Default file name for rows only the left file has
pub const LEFT_ROWS_FILE: &str = "rowsLeft.xml";
/// Default file name for rows only the right file has
pub const RIGHT_ROWS_FILE: &str = "rowsRight.xml";

/// Output format for diff results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the left file
    pub left_file: PathBuf,
    /// Path to the right file
    pub right_file: PathBuf,
    /// Qualified `table.column` names left out of the schema
    pub excluded_columns: Vec<String>,
    /// Local name of the document element
    pub root_node: String,
    /// Namespace URI of root, table and column elements
    pub namespace: String,
    /// Output format
    pub output_format: OutputFormat,
    /// Directory the row files are written to
    pub output_dir: PathBuf,
    /// File name for rows only in the left file
    pub left_rows_file: String,
    /// File name for rows only in the right file
    pub right_rows_file: String,
    /// Ignore case when comparing values
    pub ignore_case: bool,
    /// Ignore leading/trailing whitespace in values
    pub ignore_whitespace: bool,
    /// Only show statistics, not detailed changes
    pub stats_only: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            left_file: PathBuf::new(),
            right_file: PathBuf::new(),
            excluded_columns: Vec::new(),
            root_node: DEFAULT_ROOT.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            output_format: OutputFormat::default(),
            output_dir: PathBuf::from("."),
            left_rows_file: LEFT_ROWS_FILE.to_string(),
            right_rows_file: RIGHT_ROWS_FILE.to_string(),
            ignore_case: false,
            ignore_whitespace: false,
            stats_only: false,
        }
    }
}

impl Config {
    /// Create a new Config with file paths
    pub fn new(left_file: PathBuf, right_file: PathBuf) -> Self {
        Self {
            left_file,
            right_file,
            ..Default::default()
        }
    }

    /// Set excluded columns
    pub fn with_excluded_columns(mut self, columns: Vec<String>) -> Self {
        self.excluded_columns = columns;
        self
    }

    /// Set the root element name
    pub fn with_root_node(mut self, root: impl Into<String>) -> Self {
        self.root_node = root.into();
        self
    }

    /// Set the default namespace URI
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the directory row files go to
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Enable case-insensitive comparison
    pub fn with_ignore_case(mut self, ignore: bool) -> Self {
        self.ignore_case = ignore;
        self
    }

    /// Enable whitespace-insensitive comparison
    pub fn with_ignore_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_whitespace = ignore;
        self
    }

    /// Enable stats-only mode
    pub fn with_stats_only(mut self, stats_only: bool) -> Self {
        self.stats_only = stats_only;
        self
    }

    /// Options used to load both documents
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .with_root(self.root_node.clone())
            .with_namespace(self.namespace.clone())
            .with_exclusions(self.excluded_columns.iter().collect::<ExclusionSet>())
    }

    pub fn left_rows_path(&self) -> PathBuf {
        self.output_dir.join(&self.left_rows_file)
    }

    pub fn right_rows_path(&self) -> PathBuf {
        self.output_dir.join(&self.right_rows_file)
    }
}
