//! Error types for loading, inferring and reporting

use std::path::PathBuf;

use thiserror::Error;

/// Problems reading, tokenizing or writing a single XML document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Input file could not be read.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    /// Input could not be tokenized as XML.
    #[error("failed to parse XML: {0}")]
    Xml(#[from] quick_xml::Error),
    /// Tag names were not valid UTF-8.
    #[error("invalid UTF-8 in XML: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    /// Structural issue in the document.
    #[error("malformed XML: {0}")]
    Malformed(String),
}

/// Fatal errors raised while comparing two documents.
#[derive(Debug, Error)]
pub enum CompareError {
    #[error("error processing file {}", path.display())]
    DocumentLoad {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },

    #[error(
        "cannot get table nodes from file {} using root node name {root} in namespace {namespace:?}",
        path.display()
    )]
    SchemaInference {
        path: PathBuf,
        root: String,
        namespace: String,
    },

    #[error("failed to write row report {}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: DocumentError,
    },
}

pub type Result<T, E = CompareError> = std::result::Result<T, E>;
