//! xmldatadiff - Relational diff for table-shaped XML documents
//!
//! Each document is read as `root → table elements → column elements` and
//! turned into a [`Dataset`]. Two datasets are compared for tables, columns
//! and rows that only one side has.

pub mod config;
pub mod diff;
pub mod error;
pub mod filter;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use diff::{compute_diff, DiffResult};
pub use error::{CompareError, DocumentError};
pub use filter::ExclusionSet;
pub use model::{Dataset, Table};
pub use parser::{load_dataset, LoadOptions};
